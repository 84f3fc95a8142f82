// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_appkit --heading-base-level=0

//! Understory AppKit: translate macOS input events into Understory input events.
//!
//! ## Overview
//!
//! A macOS view receives mouse, scroll, key, and text input through AppKit callbacks,
//! or through the NPAPI Cocoa protocol when hosted as a plug-in. This crate turns the
//! fields of those native events into [`understory_input`] events and forwards them to
//! a [`WindowPeer`](understory_input::peer::WindowPeer).
//!
//! The view glue reads `NSEvent` fields into [`native`] bundles and hands them to a
//! [`PlatformResponder`](crate::responder::PlatformResponder). Everything below that
//! point is plain data, so translation is deterministic and testable off macOS.
//!
//! ## What gets translated
//!
//! - Event type codes, per [`EventOrigin`](crate::event_type::EventOrigin).
//! - Modifier flags and held mouse buttons, see [`modifiers`].
//! - Button numbers, see [`buttons`]. AppKit's right and center buttons swap places.
//! - Virtual key codes and characters, see [`keys`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_appkit::event_type::NsEventType;
//! use understory_appkit::modifiers::NsModifierFlags;
//! use understory_appkit::native::{NativeMouseEvent, NoButtons};
//! use understory_appkit::responder::{PlatformResponder, ResponderConfig};
//! use understory_input::key::KeyEvent;
//! use understory_input::mouse::{MouseButton, MouseEvent, WheelEvent};
//! use understory_input::peer::WindowPeer;
//! use understory_input::time::{FixedClock, Timestamp};
//!
//! #[derive(Default)]
//! struct Clicks(Vec<MouseButton>);
//!
//! impl WindowPeer for Clicks {
//!     fn dispatch_mouse_event(&mut self, event: MouseEvent) {
//!         self.0.extend(event.button);
//!     }
//!     fn dispatch_mouse_wheel_event(&mut self, _event: WheelEvent) {}
//!     fn dispatch_key_event(&mut self, _event: KeyEvent) {}
//! }
//!
//! let mut responder = PlatformResponder::new(
//!     Clicks::default(),
//!     NoButtons,
//!     FixedClock(Timestamp::from_millis(0)),
//!     ResponderConfig::default(),
//! );
//! responder
//!     .handle_mouse_event(NativeMouseEvent {
//!         event_type: NsEventType::RightMouseDown.raw(),
//!         modifier_flags: NsModifierFlags::empty(),
//!         button_number: 1,
//!         click_count: 1,
//!         position: Point::new(4.0, 4.0),
//!         screen_position: Point::new(104.0, 204.0),
//!     })
//!     .unwrap();
//! assert_eq!(responder.peer().0, [MouseButton::Right]);
//! ```
//!
//! ## Logging
//!
//! Dropped and rejected events are reported through the [`log`] facade at `debug` and
//! `trace` level. The crate never installs a logger.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod buttons;
pub mod error;
pub mod event_type;
pub mod keys;
pub mod modifiers;
pub mod native;
pub mod responder;
