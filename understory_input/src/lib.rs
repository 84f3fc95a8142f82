// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_input --heading-base-level=0

//! Understory Input: the toolkit-side event model for pointer, wheel, and keyboard input.
//!
//! ## Overview
//!
//! Platform backends receive input in whatever shape the operating system delivers it.
//! This crate defines the shape the toolkit consumes: [`MouseEvent`](crate::mouse::MouseEvent),
//! [`WheelEvent`](crate::mouse::WheelEvent), and [`KeyEvent`](crate::key::KeyEvent), with
//! [`Modifiers`](crate::modifiers::Modifiers) describing held keys and buttons.
//!
//! Translated events are handed to a [`WindowPeer`](crate::peer::WindowPeer), the native-backing
//! object of a toolkit window, which owns queueing and delivery into the toolkit.
//! This crate does not queue, route, or hit test.
//!
//! ## Layering
//!
//! - Backends (for example `understory_appkit`) decode native codes and call the peer.
//! - The peer forwards into the toolkit's event queue or a responder chain.
//! - Time stamps come from a [`Clock`](crate::time::Clock), so replay and tests can pin them.
//!
//! ## Minimal example
//!
//! ```
//! use understory_input::key::{KeyCode, KeyEvent, KeyEventKind, KeyLocation};
//! use understory_input::modifiers::Modifiers;
//! use understory_input::mouse::{MouseEvent, WheelEvent};
//! use understory_input::peer::WindowPeer;
//! use understory_input::time::Timestamp;
//!
//! #[derive(Default)]
//! struct Typed(String);
//!
//! impl WindowPeer for Typed {
//!     fn dispatch_mouse_event(&mut self, _event: MouseEvent) {}
//!     fn dispatch_mouse_wheel_event(&mut self, _event: WheelEvent) {}
//!     fn dispatch_key_event(&mut self, event: KeyEvent) {
//!         if event.kind == KeyEventKind::Typed {
//!             self.0.extend(event.key_char);
//!         }
//!     }
//! }
//!
//! let mut peer = Typed::default();
//! peer.dispatch_key_event(KeyEvent {
//!     kind: KeyEventKind::Typed,
//!     when: Timestamp::from_millis(1),
//!     modifiers: Modifiers::empty(),
//!     key_code: KeyCode::Undefined,
//!     key_char: Some('x'),
//!     location: KeyLocation::Unknown,
//! });
//! assert_eq!(peer.0, "x");
//! ```
//!
//! This crate is `no_std`. The `std` feature adds [`SystemClock`](crate::time::SystemClock).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod key;
pub mod modifiers;
pub mod mouse;
pub mod peer;
pub mod settings;
pub mod time;
