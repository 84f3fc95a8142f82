// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AppKit responder basics.
//!
//! This example feeds a short scripted session of native events through a
//! responder and prints every toolkit event the window peer receives.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example appkit_responder`

use kurbo::{Point, Vec2};
use understory_appkit::event_type::NsEventType;
use understory_appkit::keys::vk;
use understory_appkit::modifiers::NsModifierFlags;
use understory_appkit::native::{NativeKeyEvent, NativeMouseEvent, NativeScrollEvent};
use understory_appkit::responder::{PlatformResponder, ResponderConfig};
use understory_input::key::KeyEvent;
use understory_input::mouse::{MouseEvent, WheelEvent};
use understory_input::peer::WindowPeer;
use understory_input::settings::InputSettings;
use understory_input::time::SystemClock;

struct PrintingPeer;

impl WindowPeer for PrintingPeer {
    fn dispatch_mouse_event(&mut self, e: MouseEvent) {
        println!(
            "  mouse {:?} button={:?} at ({}, {}) clicks={} mods={:?} popup={}",
            e.kind,
            e.button.map(|b| b.number()),
            e.position.x,
            e.position.y,
            e.click_count,
            e.modifiers,
            e.popup_trigger,
        );
    }

    fn dispatch_mouse_wheel_event(&mut self, e: WheelEvent) {
        println!(
            "  wheel rotation={} precise={} mods={:?}",
            e.wheel_rotation, e.precise_wheel_rotation, e.modifiers,
        );
    }

    fn dispatch_key_event(&mut self, e: KeyEvent) {
        println!(
            "  key {:?} {:?} char={:?} {:?} mods={:?}",
            e.kind, e.key_code, e.key_char, e.location, e.modifiers,
        );
    }
}

fn mouse(event_type: NsEventType, button_number: u32, flags: NsModifierFlags) -> NativeMouseEvent {
    NativeMouseEvent {
        event_type: event_type.raw(),
        modifier_flags: flags,
        button_number,
        click_count: 1,
        position: Point::new(40.0, 30.0),
        screen_position: Point::new(240.0, 330.0),
    }
}

fn key(
    event_type: NsEventType,
    flags: NsModifierFlags,
    characters: Option<&str>,
    key_code: u16,
) -> NativeKeyEvent<'_> {
    NativeKeyEvent {
        event_type: event_type.raw(),
        modifier_flags: flags,
        characters,
        key_code,
        needs_key_typed: true,
    }
}

fn main() {
    env_logger::init();

    // Three-button mouse; native button 3 and up are ignored.
    let config = ResponderConfig {
        settings: InputSettings::THREE_BUTTON,
        ..ResponderConfig::default()
    };
    // Pretend the left button is held for every event.
    let mut responder = PlatformResponder::new(PrintingPeer, 1_u32, SystemClock, config);
    let none = NsModifierFlags::empty();

    println!("== Mouse ==");
    for event in [
        mouse(NsEventType::MouseEntered, 0, none),
        mouse(NsEventType::LeftMouseDown, 0, none),
        mouse(NsEventType::LeftMouseDragged, 0, none),
        mouse(NsEventType::LeftMouseUp, 0, NsModifierFlags::CONTROL),
        mouse(NsEventType::OtherMouseDown, 4, none),
    ] {
        if let Err(e) = responder.handle_mouse_event(event) {
            println!("  rejected: {e}");
        }
    }
    // A key code delivered to the mouse handler is rejected.
    if let Err(e) = responder.handle_mouse_event(mouse(NsEventType::KeyDown, 0, none)) {
        println!("  rejected: {e}");
    }

    println!("== Scroll ==");
    let shift = NsModifierFlags::SHIFT;
    for (flags, dx, dy) in [(none, 0.0, 2.0), (none, -1.5, 1.0), (shift, 0.0, 3.0)] {
        responder.handle_scroll_event(NativeScrollEvent {
            position: Point::new(40.0, 30.0),
            modifier_flags: flags,
            delta: Vec2::new(dx, dy),
        });
    }

    println!("== Keys ==");
    let (down, up) = (NsEventType::KeyDown, NsEventType::KeyUp);
    let changed = NsEventType::FlagsChanged;
    let (command, function) = (NsModifierFlags::COMMAND, NsModifierFlags::FUNCTION);
    let events = [
        key(changed, shift, None, vk::SHIFT),
        key(down, shift, Some("H"), 0x04),
        key(up, shift, Some("H"), 0x04),
        key(changed, none, None, vk::SHIFT),
        key(down, none, Some("\r"), vk::RETURN),
        key(down, command, Some("s"), 0x01),
        key(down, function, Some("\u{f704}"), vk::F1),
        // Fn is not a toolkit modifier; it arrives as an undefined key press.
        key(changed, function, None, vk::FUNCTION),
    ];
    log::info!("replaying {} key events", events.len());
    for event in events {
        if let Err(e) = responder.handle_key_event(event) {
            println!("  rejected: {e}");
        }
    }

    println!("== Text input ==");
    responder.handle_input_event(Some("día"));
}
