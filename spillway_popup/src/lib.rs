// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spillway_popup --heading-base-level=0

//! Spillway Popup: declarative popup behavior descriptors.
//!
//! A toolbar's overflow indicator opens a menu, and that trigger-plus-surface
//! shape repeats all over a UI: menus, pickers, dialogs, context menus. This
//! crate turns a plain set of props into a description of how such a popup
//! should behave:
//!
//! - [`PopupProps`]: the configuration, covering focus trapping, which events
//!   open the popup, disabled state, and what kind of element the trigger is.
//! - [`popup_behavior`]: a pure function from props to a [`PopupBehavior`].
//! - [`PopupBehavior`]: accessibility attributes for the trigger and the
//!   popup surface, plus a keyboard table answering "what does this key do
//!   here" via [`PopupBehavior::key_action`].
//! - [`PopupBehavior::trigger_node`] and [`PopupBehavior::surface_node`]:
//!   the same attributes expressed as [`accesskit::Node`]s for hosts that
//!   publish an AccessKit tree.
//!
//! The descriptor is pure data: computing it reads nothing but the props,
//! and applying it, wiring attributes and key handlers to real widgets, is
//! entirely the host's job. That keeps the rules testable without a display
//! surface, and keeps hosts free to apply them to whatever retained-element
//! abstraction they have.
//!
//! ## Minimal example
//!
//! A focus-trapping popup behind a plain, non-interactive trigger element:
//!
//! ```rust
//! use accesskit::Role;
//! use spillway_popup::{KeyAction, KeyTarget, PopupKey, PopupProps, TriggerKind, popup_behavior};
//!
//! let behavior = popup_behavior(&PopupProps {
//!     trap_focus: true,
//!     trigger: TriggerKind::Other,
//!     ..PopupProps::default()
//! });
//!
//! // Trapping focus makes the surface a modal dialog.
//! assert_eq!(behavior.surface.role, Role::Dialog);
//! assert!(behavior.surface.modal);
//!
//! // A plain element is not tabbable by itself, so it gets a tab stop.
//! assert_eq!(behavior.trigger.tab_index, Some(0));
//!
//! // Escape closes from anywhere; Enter on the trigger toggles.
//! assert_eq!(
//!     behavior.key_action(KeyTarget::Surface, PopupKey::Escape),
//!     Some(KeyAction::Close),
//! );
//! assert_eq!(
//!     behavior.key_action(KeyTarget::Trigger, PopupKey::Enter),
//!     Some(KeyAction::Toggle),
//! );
//! ```

use accesskit::{Action, Node, Role};

bitflags::bitflags! {
    /// Which user interactions open the popup.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerEvents: u8 {
        /// Activating the trigger (click, tap, Enter/Space).
        const CLICK = 0b0000_0001;
        /// Hovering the trigger with a pointer.
        const HOVER = 0b0000_0010;
        /// A context-menu gesture (right-click, long-press).
        const CONTEXT = 0b0000_0100;
    }
}

impl Default for TriggerEvents {
    /// Popups open on click unless configured otherwise.
    fn default() -> Self {
        Self::CLICK
    }
}

/// What kind of element hosts the trigger.
///
/// Keyboard users can only reach the trigger if it is in the tab order, and
/// whether it already is depends on the element itself. Buttons and inputs
/// come tabbable; anchors only when they carry a hyperlink; anything else
/// needs an explicit tab stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerKind {
    /// A button element.
    #[default]
    Button,
    /// A text or form input element.
    Input,
    /// An anchor, tabbable only when it actually links somewhere.
    Anchor {
        /// Whether the anchor carries a hyperlink.
        has_href: bool,
    },
    /// Any other element, not tabbable on its own.
    Other,
}

impl TriggerKind {
    /// Whether this element kind sits in the tab order by itself.
    #[must_use]
    pub const fn natively_tabbable(self) -> bool {
        match self {
            Self::Button | Self::Input => true,
            Self::Anchor { has_href } => has_href,
            Self::Other => false,
        }
    }
}

/// Configuration for one popup, as plain props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupProps {
    /// Whether the popup should trap keyboard focus while open.
    pub trap_focus: bool,
    /// Which interactions open the popup.
    pub on: TriggerEvents,
    /// Whether the trigger is disabled.
    pub disabled: bool,
    /// Whether a non-tabbable trigger element should be given a tab stop.
    pub tabbable_trigger: bool,
    /// Whether the popup is currently open because of a right-click.
    pub opened_by_right_click: bool,
    /// What kind of element the trigger is.
    pub trigger: TriggerKind,
    /// A tab index the caller already put on the trigger, if any.
    ///
    /// When present it is passed through untouched; the descriptor never
    /// overrides an explicit tab index.
    pub trigger_tab_index: Option<i32>,
}

impl Default for PopupProps {
    fn default() -> Self {
        Self {
            trap_focus: false,
            on: TriggerEvents::default(),
            disabled: false,
            tabbable_trigger: true,
            opened_by_right_click: false,
            trigger: TriggerKind::default(),
            trigger_tab_index: None,
        }
    }
}

/// Accessibility attributes for the trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerAttributes {
    /// The trigger element's role.
    pub role: Role,
    /// Whether the trigger announces itself as disabled.
    pub disabled: bool,
    /// Tab index to set on the trigger, or `None` to leave it alone.
    pub tab_index: Option<i32>,
}

/// Accessibility attributes for the popup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceAttributes {
    /// The surface's role: a dialog when trapping focus, a complementary
    /// landmark otherwise.
    pub role: Role,
    /// Whether the surface announces itself as modal.
    pub modal: bool,
}

/// Where a key event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// On the trigger element.
    Trigger,
    /// Inside the popup surface.
    Surface,
}

/// The keys the popup key table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupKey {
    /// The Escape key.
    Escape,
    /// The Enter key.
    Enter,
    /// The space bar.
    Space,
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The left arrow.
    ArrowLeft,
    /// The right arrow.
    ArrowRight,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
}

impl PopupKey {
    /// Whether this key scrolls or navigates in native widgets.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::ArrowUp
                | Self::ArrowDown
                | Self::ArrowLeft
                | Self::ArrowRight
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }
}

/// What the host should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Close the popup (and return focus to the trigger).
    Close,
    /// Toggle the popup open or closed.
    Toggle,
    /// Open the popup if it is closed; leave an open one alone.
    Open,
    /// Swallow the event so the host's native handling does not run.
    Suppress,
}

/// Everything a host needs to wire one popup up.
///
/// Produced by [`popup_behavior`]; holds no hidden state, so equal props
/// always yield an equal descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupBehavior {
    /// Attributes for the trigger element.
    pub trigger: TriggerAttributes,
    /// Attributes for the popup surface.
    pub surface: SurfaceAttributes,
    /// What Enter/Space on the trigger do: toggle for click-operated popups,
    /// open for hover-only ones (closing those is the pointer's job).
    pub activation: KeyAction,
    /// Whether navigation keys inside the surface are swallowed.
    ///
    /// Set only for a popup currently open from a right-click with `context`
    /// among its trigger events; it keeps arrow and paging keys from
    /// scrolling the page under the context menu.
    pub suppress_navigation: bool,
}

impl PopupBehavior {
    /// Looks up what `key` should do at `target`.
    ///
    /// Returns `None` for keys the popup does not care about there; the host
    /// lets those fall through to its normal handling.
    #[must_use]
    pub fn key_action(&self, target: KeyTarget, key: PopupKey) -> Option<KeyAction> {
        match (target, key) {
            (_, PopupKey::Escape) => Some(KeyAction::Close),
            (KeyTarget::Trigger, PopupKey::Enter | PopupKey::Space) => Some(self.activation),
            (KeyTarget::Surface, key) if self.suppress_navigation && key.is_navigation() => {
                Some(KeyAction::Suppress)
            }
            _ => None,
        }
    }

    /// Builds the trigger's [`accesskit::Node`].
    ///
    /// Disabled triggers are marked disabled and lose their click action.
    #[must_use]
    pub fn trigger_node(&self) -> Node {
        let mut node = Node::new(self.trigger.role);
        if self.trigger.disabled {
            node.set_disabled();
        } else {
            node.add_action(Action::Click);
        }
        node
    }

    /// Builds the popup surface's [`accesskit::Node`].
    #[must_use]
    pub fn surface_node(&self) -> Node {
        let mut node = Node::new(self.surface.role);
        if self.surface.modal {
            node.set_modal();
        }
        node
    }
}

/// Computes the behavior descriptor for one popup.
///
/// The rules, prop by prop:
///
/// - `trap_focus` makes the surface a modal dialog; otherwise it is a
///   non-modal complementary landmark.
/// - `disabled` marks the trigger disabled.
/// - A trigger element that is not tabbable by itself gets `tab_index` 0,
///   but only if the caller asked via `tabbable_trigger` and did not supply
///   a tab index of their own.
/// - Enter/Space on the trigger toggle when `CLICK` is among the trigger
///   events, and open otherwise.
/// - Navigation keys inside the surface are suppressed only while the popup
///   is open from a right-click and `CONTEXT` is among the trigger events.
#[must_use]
pub fn popup_behavior(props: &PopupProps) -> PopupBehavior {
    let tab_index = match props.trigger_tab_index {
        Some(index) => Some(index),
        None if props.tabbable_trigger && !props.trigger.natively_tabbable() => Some(0),
        None => None,
    };
    let trigger_role = match props.trigger {
        TriggerKind::Button => Role::Button,
        TriggerKind::Input => Role::TextInput,
        TriggerKind::Anchor { .. } => Role::Link,
        TriggerKind::Other => Role::GenericContainer,
    };
    let surface_role = if props.trap_focus {
        Role::Dialog
    } else {
        Role::Complementary
    };
    let activation = if props.on.contains(TriggerEvents::CLICK) {
        KeyAction::Toggle
    } else {
        KeyAction::Open
    };
    PopupBehavior {
        trigger: TriggerAttributes {
            role: trigger_role,
            disabled: props.disabled,
            tab_index,
        },
        surface: SurfaceAttributes {
            role: surface_role,
            modal: props.trap_focus,
        },
        activation,
        suppress_navigation: props.opened_by_right_click
            && props.on.contains(TriggerEvents::CONTEXT),
    }
}
