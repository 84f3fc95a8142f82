// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while decoding native events.

use core::fmt;

use crate::event_type::EventOrigin;

/// Which family of toolkit event a native code was decoded for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventFamily {
    /// Mouse button or motion events.
    Mouse,
    /// Key down or up events.
    Key,
}

/// A native event could not be translated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TranslateError {
    /// The raw event type is not a code this origin defines.
    UnknownEventType {
        /// Callback protocol the code came from.
        origin: EventOrigin,
        /// The raw code.
        raw: u32,
    },
    /// The raw event type is valid but was delivered to the wrong handler.
    UnexpectedEventType {
        /// Callback protocol the code came from.
        origin: EventOrigin,
        /// The raw code.
        raw: u32,
        /// The family the handler translates.
        expected: EventFamily,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEventType { origin, raw } => {
                write!(f, "unknown {origin:?} event type {raw}")
            }
            Self::UnexpectedEventType {
                origin,
                raw,
                expected,
            } => write!(
                f,
                "{origin:?} event type {raw} is not a {} event",
                match expected {
                    EventFamily::Mouse => "mouse",
                    EventFamily::Key => "key",
                }
            ),
        }
    }
}

impl core::error::Error for TranslateError {}
