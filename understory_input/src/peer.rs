// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The window peer: where translated input is delivered.

use crate::key::KeyEvent;
use crate::mouse::{MouseEvent, WheelEvent};

/// Native-backing object of a toolkit window.
///
/// A platform backend translates native input and calls exactly one of these methods per
/// toolkit event. The peer decides how the event reaches the toolkit (an event queue,
/// a responder chain, or a recording for tests).
pub trait WindowPeer {
    /// Deliver a mouse event.
    fn dispatch_mouse_event(&mut self, event: MouseEvent);
    /// Deliver a wheel event.
    fn dispatch_mouse_wheel_event(&mut self, event: WheelEvent);
    /// Deliver a key event.
    fn dispatch_key_event(&mut self, event: KeyEvent);
}

impl<P: WindowPeer + ?Sized> WindowPeer for &mut P {
    #[inline]
    fn dispatch_mouse_event(&mut self, event: MouseEvent) {
        (**self).dispatch_mouse_event(event);
    }

    #[inline]
    fn dispatch_mouse_wheel_event(&mut self, event: WheelEvent) {
        (**self).dispatch_mouse_wheel_event(event);
    }

    #[inline]
    fn dispatch_key_event(&mut self, event: KeyEvent) {
        (**self).dispatch_key_event(event);
    }
}
