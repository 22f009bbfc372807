// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracks which items this layout hid, so showing them restores their state.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::{ItemChange, ItemFlags, ItemSnapshot};

/// Remembers, per item, the focusability it had when the layout hid it.
///
/// Hiding an item through anything else (say, a menu closing it directly)
/// leaves no marker here, and showing such an item restores nothing: the
/// host decides what focusability it gets back.
#[derive(Debug, Clone)]
pub struct VisibilityState<K> {
    hidden: HashMap<K, bool>,
}

impl<K> VisibilityState<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hidden: HashMap::new(),
        }
    }

    /// How many items this layout currently keeps hidden.
    #[must_use]
    pub fn hidden_len(&self) -> usize {
        self.hidden.len()
    }

    /// Drops every marker.
    pub fn clear(&mut self) {
        self.hidden.clear();
    }
}

impl<K: Copy + Eq + Hash> VisibilityState<K> {
    /// Hides an item, recording its focusability for later restoration.
    ///
    /// Returns `None` when the item is already hidden; markers are written
    /// once and an extra hide must not overwrite the remembered state.
    pub fn hide(&mut self, item: &ItemSnapshot<K>) -> Option<ItemChange> {
        if item.flags.contains(ItemFlags::HIDDEN) {
            return None;
        }
        self.hidden
            .insert(item.id, item.flags.contains(ItemFlags::FOCUSABLE));
        Some(ItemChange::Hide {
            relocate_focus: item.flags.contains(ItemFlags::HOLDS_FOCUS),
        })
    }

    /// Shows a hidden item, handing back the focusability it went in with.
    ///
    /// Returns `None` when the item is already visible. `focusable` is
    /// `None` when someone else hid the item and there is nothing to
    /// restore.
    pub fn show(&mut self, item: &ItemSnapshot<K>) -> Option<ItemChange> {
        if !item.flags.contains(ItemFlags::HIDDEN) {
            return None;
        }
        Some(ItemChange::Show {
            focusable: self.hidden.remove(&item.id),
        })
    }

    /// Whether this layout hid the given item.
    #[must_use]
    pub fn did_hide(&self, id: &K) -> bool {
        self.hidden.contains_key(id)
    }

    /// Forgets one marker, as when an item is removed while hidden.
    ///
    /// Returns whether a marker existed.
    pub fn forget(&mut self, id: &K) -> bool {
        self.hidden.remove(id).is_some()
    }

    /// Prunes markers for items no longer in the toolbar.
    pub fn retain_items(&mut self, items: &[ItemSnapshot<K>]) {
        self.hidden
            .retain(|id, _| items.iter().any(|item| item.id == *id));
    }
}

impl<K> Default for VisibilityState<K> {
    fn default() -> Self {
        Self::new()
    }
}
