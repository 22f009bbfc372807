// Copyright 2026 the Spillway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar overflow end to end: measure, scan, toggle, place.
//!
//! This example simulates a host UI driving the Spillway crates together:
//! - `spillway_overflow` decides which items stay visible and where the
//!   overflow indicator goes,
//! - `spillway_schedule` coalesces a resize burst and gates the re-measure
//!   behind a frame callback,
//! - `spillway_popup` describes how the indicator's menu should behave.
//!
//! Run:
//! - `cargo run -p spillway_demos --example toolbar_overflow`

use kurbo::Rect;
use spillway_overflow::{
    Direction, ItemChange, ItemFlags, ItemSnapshot, OverflowLayout, PassGeometry, PassReport,
};
use spillway_popup::{KeyTarget, PopupKey, PopupProps, popup_behavior};
use spillway_schedule::{Debouncer, FrameGate};

/// One toolbar command as the host knows it.
#[derive(Clone, Debug)]
struct Command {
    label: &'static str,
    width: f64,
    flags: ItemFlags,
}

/// Lays the commands out in a row, 8px apart, hidden ones included.
///
/// Hidden commands keep their layout slots (think `visibility: hidden`), so
/// every rectangle stays real and re-measuring after a resize is just this.
fn snapshots(commands: &[Command]) -> Vec<ItemSnapshot<usize>> {
    let gap = 8.0;
    let mut x = 0.0;
    commands
        .iter()
        .enumerate()
        .map(|(index, command)| {
            let rect = Rect::new(x, 0.0, x + command.width, 32.0);
            x += command.width + gap;
            ItemSnapshot::new(index, rect)
                .with_trailing_margin(gap)
                .with_flags(command.flags)
        })
        .collect()
}

/// Applies a pass report to the host's command state.
fn apply(commands: &mut [Command], report: &PassReport<usize>) {
    for decision in &report.changes {
        let command = &mut commands[decision.id];
        match decision.change {
            ItemChange::Hide { relocate_focus } => {
                command.flags.insert(ItemFlags::HIDDEN);
                command.flags.remove(ItemFlags::FOCUSABLE);
                println!(
                    "  hide {:?}{}",
                    command.label,
                    if relocate_focus { " (relocate focus)" } else { "" }
                );
            }
            ItemChange::Show { focusable } => {
                command.flags.remove(ItemFlags::HIDDEN);
                if focusable == Some(true) {
                    command.flags.insert(ItemFlags::FOCUSABLE);
                }
                println!("  show {:?}", command.label);
            }
        }
    }
}

fn geometry(container_width: f64) -> PassGeometry {
    PassGeometry {
        container: Rect::new(0.0, 0.0, container_width, 32.0),
        indicator: Rect::new(0.0, 0.0, 32.0, 32.0),
        // The zero-size probe sits at the container's content origin.
        probe: Rect::new(0.0, 0.0, 0.0, 0.0),
    }
}

fn print_report(commands: &[Command], report: &PassReport<usize>) {
    let visible: Vec<&str> = commands
        .iter()
        .filter(|command| !command.flags.contains(ItemFlags::HIDDEN))
        .map(|command| command.label)
        .collect();
    println!("  visible: {visible:?} (count {})", report.visible_count);
    if report.indicator.visible {
        println!(
            "  indicator at left = {:.0}px",
            report.indicator.inline_inset
        );
    } else {
        println!("  indicator hidden, everything fits");
    }
}

fn main() {
    let mut commands: Vec<Command> = [
        ("Bold", 64.0),
        ("Italic", 68.0),
        ("Underline", 96.0),
        ("Link", 60.0),
        ("Image", 72.0),
        ("Table", 70.0),
    ]
    .into_iter()
    .map(|(label, width)| Command {
        label,
        width,
        flags: ItemFlags::default(),
    })
    .collect();

    let mut layout = OverflowLayout::new(Direction::Ltr);
    let mut gate = FrameGate::new();

    // Mount: measure on the first frame callback, after layout has settled.
    println!("== Mount at 320px ==");
    let ticket = gate.request();
    if gate.fire(ticket) {
        let report = layout.run_pass(&geometry(320.0), &snapshots(&commands));
        apply(&mut commands, &report);
        print_report(&commands, &report);
    }

    // The user opens the overflow menu from the indicator.
    println!("\n== Overflow menu ==");
    if layout.set_overflow_open(true) {
        println!("  open changed to {}", layout.overflow_open());
    }
    let labels: Vec<&str> = commands.iter().map(|command| command.label).collect();
    println!("  menu contents: {:?}", layout.overflow_items(&labels));

    // Describe the indicator's popup declaratively: a plain click-operated
    // menu, no focus trap.
    let behavior = popup_behavior(&PopupProps::default());
    println!(
        "  surface role {:?}, modal {}",
        behavior.surface.role, behavior.surface.modal
    );
    println!(
        "  Enter on the indicator -> {:?}",
        behavior.key_action(KeyTarget::Trigger, PopupKey::Enter)
    );
    println!(
        "  Escape inside the menu -> {:?}",
        behavior.key_action(KeyTarget::Surface, PopupKey::Escape)
    );

    // A live resize fires a burst of observations; debounce them into one
    // re-measure, gated behind the next frame so layout has settled. The
    // open menu is forced closed, since its contents are about to change.
    println!("\n== Resize burst down to 240px ==");
    let mut debouncer = Debouncer::new(Debouncer::DEFAULT_WINDOW_MS);
    for timestamp in [1000, 1004, 1012] {
        debouncer.record(timestamp);
        if layout.notify_resize() {
            println!("  overflow menu forced closed at t={timestamp}");
        }
    }
    for tick in [1016, 1028] {
        if debouncer.fire_due(tick) {
            println!("  burst settled at t={tick}, scheduling the re-measure");
            let ticket = gate.request();
            if gate.fire(ticket) {
                let report = layout.run_pass(&geometry(240.0), &snapshots(&commands));
                apply(&mut commands, &report);
                print_report(&commands, &report);
            }
        }
    }
    println!("  menu would now hold: {:?}", layout.overflow_items(&labels));
}
