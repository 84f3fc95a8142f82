// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform responder: native input in, toolkit events out.
//!
//! ## Overview
//!
//! [`PlatformResponder`] sits between a view's input callbacks and a toolkit
//! [`WindowPeer`]. Every entry point translates one native event field by field and
//! forwards the result; nothing is buffered and no state carries over between calls.
//!
//! ## Mouse
//!
//! Buttons the toolkit does not track are dropped before anything else happens.
//! Motion, enter, and exit events report no button and a click count of zero.
//!
//! ## Scroll
//!
//! Vertical deltas become wheel events. Horizontal deltas become wheel events with
//! [`Modifiers::SHIFT`] added, and with shift already held a vertical delta is
//! reported as horizontal. A diagonal scroll produces two wheel events.
//!
//! ## Keys
//!
//! A key down produces a pressed event and, when the key yields text, a typed event
//! right after it. No typed event follows while Command is held, so shortcuts such
//! as Command-C never insert text. Flags-changed events become pressed or released
//! events of the modifier key itself, or an undefined key press when the key is
//! not a known modifier.
//!
//! ## Text input
//!
//! Committed text (from an input method, or from a host that delivers text
//! separately) becomes one typed event per character.

use understory_input::key::{KeyEvent, KeyEventKind};
use understory_input::modifiers::Modifiers;
use understory_input::mouse::{MouseEvent, ScrollType, WheelEvent};
use understory_input::peer::WindowPeer;
use understory_input::settings::InputSettings;
use understory_input::time::Clock;

use kurbo::Point;

use crate::buttons::toolkit_button;
use crate::error::TranslateError;
use crate::event_type::EventOrigin;
use crate::keys::{key_info, translate_char};
use crate::modifiers::{ModifierKeyInfo, key_modifiers, modifier_key_info, mouse_modifiers};
use crate::native::{ButtonState, NativeKeyEvent, NativeMouseEvent, NativeScrollEvent};

/// Static configuration of a [`PlatformResponder`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponderConfig {
    /// Callback protocol whose event type codes the responder decodes.
    pub origin: EventOrigin,
    /// Toolkit input settings.
    pub settings: InputSettings,
}

impl ResponderConfig {
    /// Default settings for events delivered by `origin`.
    pub fn for_origin(origin: EventOrigin) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }
}

/// Translates native input for one window and forwards it to that window's peer.
///
/// - `P` receives the translated events.
/// - `B` reports which mouse buttons are held, for the modifier state of pointer events.
/// - `C` stamps each event.
pub struct PlatformResponder<P, B, C> {
    peer: P,
    buttons: B,
    clock: C,
    config: ResponderConfig,
}

impl<P, B, C> core::fmt::Debug for PlatformResponder<P, B, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlatformResponder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<P: WindowPeer, B: ButtonState, C: Clock> PlatformResponder<P, B, C> {
    /// Create a responder for `peer`.
    pub fn new(peer: P, buttons: B, clock: C, config: ResponderConfig) -> Self {
        Self {
            peer,
            buttons,
            clock,
            config,
        }
    }

    /// The responder's configuration.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// The window peer.
    pub fn peer(&self) -> &P {
        &self.peer
    }

    /// The window peer, mutably.
    pub fn peer_mut(&mut self) -> &mut P {
        &mut self.peer
    }

    /// Consume the responder and return its peer.
    pub fn into_peer(self) -> P {
        self.peer
    }

    /// Translate and forward a mouse button or motion event.
    ///
    /// Events for buttons the settings exclude are dropped and return `Ok`.
    /// Event types that are not mouse button or motion events are an error.
    pub fn handle_mouse_event(&mut self, event: NativeMouseEvent) -> Result<(), TranslateError> {
        let settings = self.config.settings;
        if !settings.accepts_button(event.button_number) {
            log::trace!(
                "dropping mouse event for native button {} ({} buttons, extras {})",
                event.button_number,
                settings.number_of_buttons,
                if settings.extra_mouse_buttons_enabled {
                    "enabled"
                } else {
                    "disabled"
                },
            );
            return Ok(());
        }

        let kind = self
            .config
            .origin
            .mouse_kind(event.event_type)
            .inspect_err(|e| log::debug!("mouse event not translated: {e}"))?;

        let (button, click_count) = if kind.carries_button() {
            (Some(toolkit_button(event.button_number)), event.click_count)
        } else {
            (None, 0)
        };

        let modifiers = mouse_modifiers(
            event.modifier_flags,
            self.buttons.pressed_mouse_buttons(),
            settings.effective_buttons(),
        );

        self.peer.dispatch_mouse_event(MouseEvent {
            kind,
            when: self.clock.now(),
            button,
            position: event.position,
            screen_position: event.screen_position,
            modifiers,
            click_count,
            popup_trigger: modifiers.is_popup_trigger(),
        });
        Ok(())
    }

    /// Translate and forward a scroll event as up to two wheel events.
    pub fn handle_scroll_event(&mut self, event: NativeScrollEvent) {
        let mut modifiers = mouse_modifiers(
            event.modifier_flags,
            self.buttons.pressed_mouse_buttons(),
            self.config.settings.effective_buttons(),
        );
        let shift = modifiers.contains(Modifiers::SHIFT);
        let (dx, dy) = (event.delta.x, event.delta.y);

        // Vertical.
        if !shift && dy != 0.0 {
            self.dispatch_scroll_event(event.position, modifiers, dy);
        }
        // Horizontal, or shift with a vertical wheel.
        let delta = if shift && dy != 0.0 { dy } else { dx };
        if delta != 0.0 {
            modifiers |= Modifiers::SHIFT;
            self.dispatch_scroll_event(event.position, modifiers, delta);
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "wheel rotation counts whole notches"
    )]
    fn dispatch_scroll_event(&mut self, position: Point, modifiers: Modifiers, delta: f64) {
        self.peer.dispatch_mouse_wheel_event(WheelEvent {
            when: self.clock.now(),
            position,
            modifiers,
            scroll_type: ScrollType::Unit,
            scroll_amount: 1,
            wheel_rotation: (-delta) as i32,
            precise_wheel_rotation: -delta,
        });
    }

    /// Translate and forward a key down, key up, or flags-changed event.
    ///
    /// A key down may forward a second, typed event. Flags-changed events for keys
    /// that are not known modifiers are forwarded as an undefined key press.
    pub fn handle_key_event(&mut self, event: NativeKeyEvent<'_>) -> Result<(), TranslateError> {
        let flags = event.modifier_flags;
        let origin = self.config.origin;

        let (kind, key_code, location, posts_typed, ch) =
            if origin.is_flags_changed(event.event_type) {
                let info = modifier_key_info(flags, event.key_code).unwrap_or_else(|| {
                    log::debug!(
                        "flags changed for key code {:#04x} with no modifier mapping",
                        event.key_code
                    );
                    ModifierKeyInfo::UNDEFINED
                });
                (info.kind, info.key_code, info.location, false, None)
            } else {
                let first = event.characters.and_then(|s| s.chars().next());
                let info = key_info(first, flags, event.key_code);
                let kind = origin
                    .key_kind(event.event_type)
                    .inspect_err(|e| log::debug!("key event not translated: {e}"))?;
                let ch = if info.posts_typed { first } else { None };
                (kind, info.key_code, info.location, info.posts_typed, ch)
            };

        let key_char = translate_char(ch, flags);
        let modifiers = key_modifiers(flags);
        let when = self.clock.now();

        self.peer.dispatch_key_event(KeyEvent {
            kind,
            when,
            modifiers,
            key_code,
            key_char,
            location,
        });

        if kind == KeyEventKind::Pressed
            && posts_typed
            && event.needs_key_typed
            && !modifiers.contains(Modifiers::META)
            && let Some(ch) = key_char
        {
            let typed = KeyEvent::typed(when, modifiers, ch);
            self.peer.dispatch_key_event(typed);
        }
        Ok(())
    }

    /// Forward committed text as one typed event per character.
    ///
    /// `None` is ignored.
    pub fn handle_input_event(&mut self, text: Option<&str>) {
        let Some(text) = text else {
            return;
        };
        for ch in text.chars() {
            let typed = KeyEvent::typed(self.clock.now(), Modifiers::empty(), ch);
            self.peer.dispatch_key_event(typed);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use std::vec::Vec;

    use kurbo::Vec2;
    use understory_input::key::{KeyCode, KeyLocation};
    use understory_input::mouse::{MouseButton, MouseEventKind};
    use understory_input::time::{FixedClock, Timestamp};

    use super::*;
    use crate::event_type::{NpCocoaEventType, NsEventType};
    use crate::keys::vk;
    use crate::modifiers::NsModifierFlags;
    use crate::native::NoButtons;

    #[derive(Clone, Debug, PartialEq)]
    enum Recorded {
        Mouse(MouseEvent),
        Wheel(WheelEvent),
        Key(KeyEvent),
    }

    #[derive(Default)]
    struct RecordingPeer(Vec<Recorded>);

    impl WindowPeer for RecordingPeer {
        fn dispatch_mouse_event(&mut self, event: MouseEvent) {
            self.0.push(Recorded::Mouse(event));
        }
        fn dispatch_mouse_wheel_event(&mut self, event: WheelEvent) {
            self.0.push(Recorded::Wheel(event));
        }
        fn dispatch_key_event(&mut self, event: KeyEvent) {
            self.0.push(Recorded::Key(event));
        }
    }

    impl RecordingPeer {
        fn mouse(&self) -> Vec<&MouseEvent> {
            self.0
                .iter()
                .filter_map(|r| match r {
                    Recorded::Mouse(e) => Some(e),
                    _ => None,
                })
                .collect()
        }
        fn wheel(&self) -> Vec<&WheelEvent> {
            self.0
                .iter()
                .filter_map(|r| match r {
                    Recorded::Wheel(e) => Some(e),
                    _ => None,
                })
                .collect()
        }
        fn keys(&self) -> Vec<&KeyEvent> {
            self.0
                .iter()
                .filter_map(|r| match r {
                    Recorded::Key(e) => Some(e),
                    _ => None,
                })
                .collect()
        }
    }

    /// Advances one millisecond on every read.
    #[derive(Default)]
    struct TickingClock(Cell<u64>);

    impl Clock for TickingClock {
        fn now(&self) -> Timestamp {
            let t = self.0.get();
            self.0.set(t + 1);
            Timestamp(t)
        }
    }

    const NOW: Timestamp = Timestamp(1_000);
    const NONE: NsModifierFlags = NsModifierFlags::empty();

    type TestResponder<B, C = FixedClock> = PlatformResponder<RecordingPeer, B, C>;

    fn responder_with<B: ButtonState>(buttons: B, config: ResponderConfig) -> TestResponder<B> {
        let peer = RecordingPeer::default();
        PlatformResponder::new(peer, buttons, FixedClock(NOW), config)
    }

    fn responder() -> TestResponder<NoButtons> {
        responder_with(NoButtons, ResponderConfig::default())
    }

    fn ticking_responder() -> TestResponder<NoButtons, TickingClock> {
        let peer = RecordingPeer::default();
        let clock = TickingClock::default();
        PlatformResponder::new(peer, NoButtons, clock, ResponderConfig::default())
    }

    fn mouse(event_type: NsEventType, button_number: u32) -> NativeMouseEvent {
        NativeMouseEvent {
            event_type: event_type.raw(),
            modifier_flags: NONE,
            button_number,
            click_count: 2,
            position: Point::new(10.0, 20.0),
            screen_position: Point::new(110.0, 220.0),
        }
    }

    fn key<'a>(
        event_type: NsEventType,
        flags: NsModifierFlags,
        characters: Option<&'a str>,
        key_code: u16,
    ) -> NativeKeyEvent<'a> {
        NativeKeyEvent {
            event_type: event_type.raw(),
            modifier_flags: flags,
            characters,
            key_code,
            needs_key_typed: true,
        }
    }

    fn scroll(flags: NsModifierFlags, dx: f64, dy: f64) -> NativeScrollEvent {
        NativeScrollEvent {
            position: Point::new(5.0, 6.0),
            modifier_flags: flags,
            delta: Vec2::new(dx, dy),
        }
    }

    // Mouse

    #[test]
    fn left_press_is_forwarded() {
        let mut r = responder_with(1_u32, ResponderConfig::default());
        let event = mouse(NsEventType::LeftMouseDown, 0);
        r.handle_mouse_event(event).unwrap();
        assert_eq!(
            r.peer().mouse(),
            [&MouseEvent {
                kind: MouseEventKind::Pressed,
                when: NOW,
                button: Some(MouseButton::Left),
                position: Point::new(10.0, 20.0),
                screen_position: Point::new(110.0, 220.0),
                modifiers: Modifiers::BUTTON1,
                click_count: 2,
                popup_trigger: false,
            }]
        );
    }

    #[test]
    fn right_press_is_button_three_and_popup_trigger() {
        let mut r = responder_with(0b10_u32, ResponderConfig::default());
        let event = mouse(NsEventType::RightMouseDown, 1);
        r.handle_mouse_event(event).unwrap();
        let e = r.peer().mouse()[0].clone();
        assert_eq!(e.button, Some(MouseButton::Right));
        assert!(e.modifiers.contains(Modifiers::BUTTON3));
        assert!(e.popup_trigger);
    }

    #[test]
    fn control_click_is_popup_trigger() {
        let mut r = responder_with(1_u32, ResponderConfig::default());
        let mut event = mouse(NsEventType::LeftMouseDown, 0);
        event.modifier_flags = NsModifierFlags::CONTROL;
        r.handle_mouse_event(event).unwrap();
        let e = r.peer().mouse()[0].clone();
        assert_eq!(e.modifiers, Modifiers::BUTTON1 | Modifiers::CTRL);
        assert!(e.popup_trigger);
    }

    #[test]
    fn motion_carries_no_button_or_clicks() {
        let mut r = responder();
        for t in [
            NsEventType::MouseMoved,
            NsEventType::MouseEntered,
            NsEventType::MouseExited,
        ] {
            r.handle_mouse_event(mouse(t, 0)).unwrap();
        }
        let got = r.peer().mouse();
        assert_eq!(got.len(), 3);
        for e in got {
            assert_eq!(e.button, None);
            assert_eq!(e.click_count, 0);
        }
    }

    #[test]
    fn drag_keeps_button() {
        let mut r = responder();
        let event = mouse(NsEventType::OtherMouseDragged, 2);
        r.handle_mouse_event(event).unwrap();
        let e = r.peer().mouse()[0].clone();
        assert_eq!(e.kind, MouseEventKind::Dragged);
        assert_eq!(e.button, Some(MouseButton::Middle));
        assert_eq!(e.click_count, 2);
    }

    #[test]
    fn extra_buttons_dropped_when_disabled() {
        let config = ResponderConfig {
            settings: InputSettings {
                extra_mouse_buttons_enabled: false,
                number_of_buttons: 20,
            },
            ..ResponderConfig::default()
        };
        let mut r = responder_with(NoButtons, config);
        r.handle_mouse_event(mouse(NsEventType::OtherMouseDown, 3)).unwrap();
        assert!(r.peer().0.is_empty());
        r.handle_mouse_event(mouse(NsEventType::OtherMouseDown, 2)).unwrap();
        assert_eq!(r.peer().0.len(), 1);
    }

    #[test]
    fn buttons_past_count_dropped() {
        let config = ResponderConfig {
            settings: InputSettings {
                extra_mouse_buttons_enabled: true,
                number_of_buttons: 5,
            },
            ..ResponderConfig::default()
        };
        let mut r = responder_with(NoButtons, config);
        r.handle_mouse_event(mouse(NsEventType::OtherMouseDown, 5)).unwrap();
        assert!(r.peer().0.is_empty());
        r.handle_mouse_event(mouse(NsEventType::OtherMouseDown, 4)).unwrap();
        assert_eq!(r.peer().mouse()[0].button, Some(MouseButton::Other(5)));
    }

    #[test]
    fn dropped_button_wins_over_bad_type() {
        // Bounds are checked before the type is decoded.
        let config = ResponderConfig {
            settings: InputSettings::THREE_BUTTON,
            ..ResponderConfig::default()
        };
        let mut r = responder_with(NoButtons, config);
        let mut event = mouse(NsEventType::OtherMouseDown, 7);
        event.event_type = 999;
        assert_eq!(r.handle_mouse_event(event), Ok(()));
    }

    #[test]
    fn unknown_mouse_type_is_an_error() {
        let mut r = responder();
        let mut event = mouse(NsEventType::LeftMouseDown, 0);
        event.event_type = NsEventType::KeyDown.raw();
        assert!(matches!(
            r.handle_mouse_event(event),
            Err(TranslateError::UnexpectedEventType { raw: 10, .. })
        ));
        event.event_type = 200;
        assert!(matches!(
            r.handle_mouse_event(event),
            Err(TranslateError::UnknownEventType { raw: 200, .. })
        ));
        assert!(r.peer().0.is_empty());
    }

    #[test]
    fn npapi_codes_are_decoded_with_npapi_table() {
        let config = ResponderConfig::for_origin(EventOrigin::Npapi);
        let mut r = responder_with(NoButtons, config);
        let mut event = mouse(NsEventType::LeftMouseDown, 0);
        event.event_type = NpCocoaEventType::MouseDown.raw();
        r.handle_mouse_event(event).unwrap();
        event.event_type = NpCocoaEventType::MouseEntered.raw();
        r.handle_mouse_event(event).unwrap();
        let kinds: Vec<_> = r.peer().mouse().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [MouseEventKind::Pressed, MouseEventKind::Entered]);
    }

    #[test]
    fn held_buttons_are_read_per_event() {
        let held = Cell::new(0_u32);
        let mut r = responder_with(&held, ResponderConfig::default());
        r.handle_mouse_event(mouse(NsEventType::MouseMoved, 0)).unwrap();
        held.set(0b100);
        let event = mouse(NsEventType::OtherMouseDragged, 2);
        r.handle_mouse_event(event).unwrap();
        let got = r.peer().mouse();
        assert!(got[0].modifiers.is_empty());
        assert_eq!(got[1].modifiers, Modifiers::BUTTON2);
    }

    // Scroll

    #[test]
    fn vertical_scroll() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NONE, 0.0, 1.5));
        assert_eq!(
            r.peer().wheel(),
            [&WheelEvent {
                when: NOW,
                position: Point::new(5.0, 6.0),
                modifiers: Modifiers::empty(),
                scroll_type: ScrollType::Unit,
                scroll_amount: 1,
                wheel_rotation: -1,
                precise_wheel_rotation: -1.5,
            }]
        );
    }

    #[test]
    fn horizontal_scroll_adds_shift() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NONE, -2.0, 0.0));
        let got = r.peer().wheel();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].modifiers, Modifiers::SHIFT);
        assert_eq!(got[0].wheel_rotation, 2);
        assert_eq!(got[0].precise_wheel_rotation, 2.0);
    }

    #[test]
    fn diagonal_scroll_dispatches_twice() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NONE, 3.0, -1.0));
        let got = r.peer().wheel();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].modifiers, Modifiers::empty());
        assert_eq!(got[0].precise_wheel_rotation, 1.0);
        assert_eq!(got[1].modifiers, Modifiers::SHIFT);
        assert_eq!(got[1].precise_wheel_rotation, -3.0);
    }

    #[test]
    fn shift_turns_vertical_into_horizontal() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NsModifierFlags::SHIFT, 4.0, 2.0));
        let got = r.peer().wheel();
        // Only one event: the vertical delta, reported as horizontal.
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].modifiers, Modifiers::SHIFT);
        assert_eq!(got[0].precise_wheel_rotation, -2.0);
    }

    #[test]
    fn shift_with_horizontal_only_uses_horizontal() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NsModifierFlags::SHIFT, 4.0, 0.0));
        let got = r.peer().wheel();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].precise_wheel_rotation, -4.0);
    }

    #[test]
    fn zero_scroll_dispatches_nothing() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NONE, 0.0, 0.0));
        r.handle_scroll_event(scroll(NsModifierFlags::SHIFT, 0.0, 0.0));
        assert!(r.peer().0.is_empty());
    }

    #[test]
    fn fractional_scroll_truncates_toward_zero() {
        let mut r = responder();
        r.handle_scroll_event(scroll(NONE, 0.0, 0.4));
        r.handle_scroll_event(scroll(NONE, 0.0, -2.9));
        let got = r.peer().wheel();
        assert_eq!(got[0].wheel_rotation, 0);
        assert_eq!(got[1].wheel_rotation, 2);
    }

    #[test]
    fn scroll_reports_held_keys_and_buttons() {
        let mut r = responder_with(1_u32, ResponderConfig::default());
        r.handle_scroll_event(scroll(NsModifierFlags::OPTION, 0.0, 1.0));
        let expected = Modifiers::ALT | Modifiers::BUTTON1;
        assert_eq!(r.peer().wheel()[0].modifiers, expected);
    }

    #[test]
    fn diagonal_scroll_stamps_each_wheel_event() {
        let mut r = ticking_responder();
        r.handle_scroll_event(scroll(NONE, 3.0, -1.0));
        let got = r.peer().wheel();
        assert_eq!(got.len(), 2);
        assert!(got[0].when < got[1].when);
    }

    // Keys

    #[test]
    fn key_down_posts_pressed_then_typed() {
        let mut r = responder();
        let event = key(NsEventType::KeyDown, NONE, Some("a"), 0x00);
        r.handle_key_event(event).unwrap();
        assert_eq!(
            r.peer().keys(),
            [
                &KeyEvent {
                    kind: KeyEventKind::Pressed,
                    when: NOW,
                    modifiers: Modifiers::empty(),
                    key_code: KeyCode::A,
                    key_char: Some('a'),
                    location: KeyLocation::Standard,
                },
                &KeyEvent::typed(NOW, Modifiers::empty(), 'a'),
            ]
        );
    }

    #[test]
    fn typed_event_shares_the_press_time() {
        let mut r = ticking_responder();
        let event = key(NsEventType::KeyDown, NONE, Some("q"), 0x0C);
        r.handle_key_event(event).unwrap();
        let event = key(NsEventType::KeyDown, NONE, Some("w"), 0x0D);
        r.handle_key_event(event).unwrap();
        let when: Vec<_> = r.peer().keys().iter().map(|e| e.when).collect();
        let expected = [Timestamp(0), Timestamp(0), Timestamp(1), Timestamp(1)];
        assert_eq!(when, expected);
    }

    #[test]
    fn key_up_posts_no_typed() {
        let mut r = responder();
        let event = key(NsEventType::KeyUp, NONE, Some("a"), 0x00);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].kind, KeyEventKind::Released);
        assert_eq!(got[0].key_char, Some('a'));
    }

    #[test]
    fn shifted_key_keeps_modifiers_on_typed() {
        let mut r = responder();
        let flags = NsModifierFlags::SHIFT;
        let event = key(NsEventType::KeyDown, flags, Some("A"), 0x00);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1], &KeyEvent::typed(NOW, Modifiers::SHIFT, 'A'));
    }

    #[test]
    fn command_shortcut_posts_no_typed() {
        let mut r = responder();
        let flags = NsModifierFlags::COMMAND;
        let event = key(NsEventType::KeyDown, flags, Some("c"), 0x08);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].key_code, KeyCode::C);
        assert_eq!(got[0].modifiers, Modifiers::META);
    }

    #[test]
    fn host_typed_text_suppresses_typed() {
        let mut r = responder();
        let mut event = key(NsEventType::KeyDown, NONE, Some("x"), 0x07);
        event.needs_key_typed = false;
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].key_char, Some('x'));
    }

    #[test]
    fn arrow_key_has_no_character() {
        let mut r = responder();
        let flags = NsModifierFlags::FUNCTION | NsModifierFlags::NUMERIC_PAD;
        let event = key(NsEventType::KeyDown, flags, Some("\u{f702}"), vk::LEFT_ARROW);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].key_code, KeyCode::Left);
        assert_eq!(got[0].key_char, None);
    }

    #[test]
    fn return_key_types_newline() {
        let mut r = responder();
        let event = key(NsEventType::KeyDown, NONE, Some("\r"), vk::RETURN);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got[0].key_code, KeyCode::Enter);
        assert_eq!(got[0].key_char, Some('\n'));
        assert_eq!(got[1], &KeyEvent::typed(NOW, Modifiers::empty(), '\n'));
    }

    #[test]
    fn backspace_types_backspace() {
        let mut r = responder();
        let event = key(NsEventType::KeyDown, NONE, Some("\u{7f}"), vk::DELETE);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got[0].key_code, KeyCode::BackSpace);
        assert_eq!(got[1].key_char, Some('\u{8}'));
    }

    #[test]
    fn key_without_characters_is_still_pressed() {
        let mut r = responder();
        let event = key(NsEventType::KeyDown, NONE, None, vk::SPACE);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].key_code, KeyCode::Space);
        assert_eq!(got[0].key_char, None);
    }

    #[test]
    fn action_key_discards_its_character() {
        let mut r = responder();
        // F1 delivers a private-use character that never reaches the toolkit.
        let flags = NsModifierFlags::FUNCTION;
        let event = key(NsEventType::KeyDown, flags, Some("\u{f704}"), vk::F1);
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].key_code, KeyCode::F1);
        assert_eq!(got[0].key_char, None);
    }

    #[test]
    fn flags_changed_reports_modifier_key() {
        let mut r = responder();
        let shift = NsModifierFlags::SHIFT;
        let event = key(NsEventType::FlagsChanged, shift, None, vk::RIGHT_SHIFT);
        r.handle_key_event(event).unwrap();
        let event = key(NsEventType::FlagsChanged, NONE, None, vk::RIGHT_SHIFT);
        r.handle_key_event(event).unwrap();
        assert_eq!(
            r.peer().keys(),
            [
                &KeyEvent {
                    kind: KeyEventKind::Pressed,
                    when: NOW,
                    modifiers: Modifiers::SHIFT,
                    key_code: KeyCode::Shift,
                    key_char: None,
                    location: KeyLocation::Right,
                },
                &KeyEvent {
                    kind: KeyEventKind::Released,
                    when: NOW,
                    modifiers: Modifiers::empty(),
                    key_code: KeyCode::Shift,
                    key_char: None,
                    location: KeyLocation::Right,
                },
            ]
        );
    }

    #[test]
    fn flags_changed_for_unmapped_key_is_undefined_press() {
        let mut r = responder();
        let flags = NsModifierFlags::FUNCTION;
        let event = key(NsEventType::FlagsChanged, flags, None, vk::FUNCTION);
        r.handle_key_event(event).unwrap();
        assert_eq!(
            r.peer().keys(),
            [&KeyEvent {
                kind: KeyEventKind::Pressed,
                when: NOW,
                modifiers: Modifiers::empty(),
                key_code: KeyCode::Undefined,
                key_char: None,
                location: KeyLocation::Unknown,
            }]
        );
    }

    #[test]
    fn npapi_flags_changed_uses_npapi_code() {
        let config = ResponderConfig::for_origin(EventOrigin::Npapi);
        let mut r = responder_with(NoButtons, config);
        let event = NativeKeyEvent {
            event_type: NpCocoaEventType::FlagsChanged.raw(),
            modifier_flags: NsModifierFlags::COMMAND,
            characters: None,
            key_code: vk::COMMAND,
            needs_key_typed: true,
        };
        r.handle_key_event(event).unwrap();
        let got = r.peer().keys();
        assert_eq!(got[0].key_code, KeyCode::Meta);
        assert_eq!(got[0].location, KeyLocation::Left);
        assert_eq!(got[0].kind, KeyEventKind::Pressed);
    }

    #[test]
    fn unknown_key_type_is_an_error() {
        let mut r = responder();
        let mut event = key(NsEventType::KeyDown, NONE, Some("a"), 0);
        event.event_type = NsEventType::ScrollWheel.raw();
        assert!(matches!(
            r.handle_key_event(event),
            Err(TranslateError::UnexpectedEventType { raw: 22, .. })
        ));
        assert!(r.peer().0.is_empty());
    }

    // Text input

    #[test]
    fn input_text_becomes_typed_events() {
        let mut r = responder();
        r.handle_input_event(Some("hé!"));
        assert_eq!(
            r.peer().keys(),
            [
                &KeyEvent::typed(NOW, Modifiers::empty(), 'h'),
                &KeyEvent::typed(NOW, Modifiers::empty(), 'é'),
                &KeyEvent::typed(NOW, Modifiers::empty(), '!'),
            ]
        );
    }

    #[test]
    fn input_text_stamps_each_character() {
        let mut r = ticking_responder();
        r.handle_input_event(Some("xyz"));
        let when: Vec<_> = r.peer().keys().iter().map(|e| e.when).collect();
        assert_eq!(when, [Timestamp(0), Timestamp(1), Timestamp(2)]);
    }

    #[test]
    fn missing_or_empty_text_is_ignored() {
        let mut r = responder();
        r.handle_input_event(None);
        r.handle_input_event(Some(""));
        assert!(r.peer().0.is_empty());
    }

    #[test]
    fn into_peer_returns_recording() {
        let mut r = responder();
        r.handle_input_event(Some("ok"));
        assert_eq!(r.into_peer().0.len(), 2);
    }
}
