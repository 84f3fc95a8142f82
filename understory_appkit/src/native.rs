// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native input as the view callbacks hand it over.
//!
//! These are plain field bundles read off an `NSEvent` (or an NPAPI Cocoa event)
//! by the view glue. Event types stay raw so the responder can decode them
//! against the right [`EventOrigin`](crate::event_type::EventOrigin).

use kurbo::{Point, Vec2};

use crate::modifiers::NsModifierFlags;

/// A mouse button or motion event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NativeMouseEvent {
    /// Raw event type.
    pub event_type: u32,
    /// Modifier flags at the time of the event.
    pub modifier_flags: NsModifierFlags,
    /// Zero-based native button number.
    pub button_number: u32,
    /// Native click count.
    pub click_count: u32,
    /// Location in window coordinates.
    pub position: Point,
    /// Location in screen coordinates.
    pub screen_position: Point,
}

/// A scroll wheel or trackpad scroll event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NativeScrollEvent {
    /// Location in window coordinates.
    pub position: Point,
    /// Modifier flags at the time of the event.
    pub modifier_flags: NsModifierFlags,
    /// Scroll deltas; positive `y` scrolls up, positive `x` scrolls left.
    pub delta: Vec2,
}

/// A key down, key up, or flags-changed event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NativeKeyEvent<'a> {
    /// Raw event type.
    pub event_type: u32,
    /// Modifier flags after the event.
    pub modifier_flags: NsModifierFlags,
    /// Characters produced, if any.
    pub characters: Option<&'a str>,
    /// Virtual key code of the physical key.
    pub key_code: u16,
    /// Whether the responder should emit typed events itself.
    ///
    /// False when the text arrives separately through text input.
    pub needs_key_typed: bool,
}

/// Native view of which mouse buttons are currently held.
pub trait ButtonState {
    /// Pressed-button bitmask; bit `n` is native button `n`.
    fn pressed_mouse_buttons(&self) -> u32;
}

impl ButtonState for u32 {
    #[inline]
    fn pressed_mouse_buttons(&self) -> u32 {
        *self
    }
}

impl<B: ButtonState + ?Sized> ButtonState for &B {
    #[inline]
    fn pressed_mouse_buttons(&self) -> u32 {
        (**self).pressed_mouse_buttons()
    }
}

/// No buttons are ever reported held.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoButtons;

impl ButtonState for NoButtons {
    #[inline]
    fn pressed_mouse_buttons(&self) -> u32 {
        0
    }
}

impl ButtonState for core::cell::Cell<u32> {
    #[inline]
    fn pressed_mouse_buttons(&self) -> u32 {
        self.get()
    }
}
