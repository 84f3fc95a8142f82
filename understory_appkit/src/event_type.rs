// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native event type codes and their toolkit event kinds.
//!
//! ## Origins
//!
//! Events reach the responder through one of two callback protocols that number
//! event types differently:
//!
//! - [`EventOrigin::AppKit`]: a regular `NSView`, codes from [`NsEventType`].
//! - [`EventOrigin::Npapi`]: a Cocoa plug-in host, codes from [`NpCocoaEventType`].
//!
//! Decoding always goes through the origin so a raw code is never read with the
//! wrong table.

use understory_input::key::KeyEventKind;
use understory_input::mouse::MouseEventKind;

use crate::error::{EventFamily, TranslateError};

/// Callback protocol that delivered a native event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventOrigin {
    /// AppKit `NSEvent` delivery.
    #[default]
    AppKit,
    /// NPAPI Cocoa plug-in event delivery.
    Npapi,
}

macro_rules! raw_codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )*
        }

        impl $name {
            /// The raw native code.
            pub const fn raw(self) -> u32 {
                self as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = u32;

            /// Decode a raw code, handing it back when it is not defined.
            fn try_from(raw: u32) -> Result<Self, u32> {
                match raw {
                    $( $code => Ok(Self::$variant), )*
                    _ => Err(raw),
                }
            }
        }
    };
}

raw_codes! {
    /// AppKit `NSEventType` codes relevant to input.
    NsEventType {
        /// `NSEventTypeLeftMouseDown`.
        LeftMouseDown = 1,
        /// `NSEventTypeLeftMouseUp`.
        LeftMouseUp = 2,
        /// `NSEventTypeRightMouseDown`.
        RightMouseDown = 3,
        /// `NSEventTypeRightMouseUp`.
        RightMouseUp = 4,
        /// `NSEventTypeMouseMoved`.
        MouseMoved = 5,
        /// `NSEventTypeLeftMouseDragged`.
        LeftMouseDragged = 6,
        /// `NSEventTypeRightMouseDragged`.
        RightMouseDragged = 7,
        /// `NSEventTypeMouseEntered`.
        MouseEntered = 8,
        /// `NSEventTypeMouseExited`.
        MouseExited = 9,
        /// `NSEventTypeKeyDown`.
        KeyDown = 10,
        /// `NSEventTypeKeyUp`.
        KeyUp = 11,
        /// `NSEventTypeFlagsChanged`.
        FlagsChanged = 12,
        /// `NSEventTypeAppKitDefined`.
        AppKitDefined = 13,
        /// `NSEventTypeSystemDefined`.
        SystemDefined = 14,
        /// `NSEventTypeApplicationDefined`.
        ApplicationDefined = 15,
        /// `NSEventTypePeriodic`.
        Periodic = 16,
        /// `NSEventTypeCursorUpdate`.
        CursorUpdate = 17,
        /// `NSEventTypeScrollWheel`.
        ScrollWheel = 22,
        /// `NSEventTypeTabletPoint`.
        TabletPoint = 23,
        /// `NSEventTypeTabletProximity`.
        TabletProximity = 24,
        /// `NSEventTypeOtherMouseDown`.
        OtherMouseDown = 25,
        /// `NSEventTypeOtherMouseUp`.
        OtherMouseUp = 26,
        /// `NSEventTypeOtherMouseDragged`.
        OtherMouseDragged = 27,
    }
}

raw_codes! {
    /// NPAPI `NPCocoaEventType` codes.
    NpCocoaEventType {
        /// `NPCocoaEventDrawRect`.
        DrawRect = 1,
        /// `NPCocoaEventMouseDown`.
        MouseDown = 2,
        /// `NPCocoaEventMouseUp`.
        MouseUp = 3,
        /// `NPCocoaEventMouseMoved`.
        MouseMoved = 4,
        /// `NPCocoaEventMouseEntered`.
        MouseEntered = 5,
        /// `NPCocoaEventMouseExited`.
        MouseExited = 6,
        /// `NPCocoaEventMouseDragged`.
        MouseDragged = 7,
        /// `NPCocoaEventKeyDown`.
        KeyDown = 8,
        /// `NPCocoaEventKeyUp`.
        KeyUp = 9,
        /// `NPCocoaEventFlagsChanged`.
        FlagsChanged = 10,
        /// `NPCocoaEventFocusChanged`.
        FocusChanged = 11,
        /// `NPCocoaEventWindowFocusChanged`.
        WindowFocusChanged = 12,
        /// `NPCocoaEventScrollWheel`.
        ScrollWheel = 13,
        /// `NPCocoaEventTextInput`.
        TextInput = 14,
    }
}

impl NsEventType {
    /// Toolkit mouse kind, if this is a mouse button or motion event.
    pub const fn mouse_kind(self) -> Option<MouseEventKind> {
        match self {
            Self::LeftMouseDown | Self::RightMouseDown | Self::OtherMouseDown => {
                Some(MouseEventKind::Pressed)
            }
            Self::LeftMouseUp | Self::RightMouseUp | Self::OtherMouseUp => {
                Some(MouseEventKind::Released)
            }
            Self::MouseMoved => Some(MouseEventKind::Moved),
            Self::LeftMouseDragged | Self::RightMouseDragged | Self::OtherMouseDragged => {
                Some(MouseEventKind::Dragged)
            }
            Self::MouseEntered => Some(MouseEventKind::Entered),
            Self::MouseExited => Some(MouseEventKind::Exited),
            _ => None,
        }
    }

    /// Toolkit key kind, if this is a key down or up event.
    pub const fn key_kind(self) -> Option<KeyEventKind> {
        match self {
            Self::KeyDown => Some(KeyEventKind::Pressed),
            Self::KeyUp => Some(KeyEventKind::Released),
            _ => None,
        }
    }
}

impl NpCocoaEventType {
    /// Toolkit mouse kind, if this is a mouse button or motion event.
    pub const fn mouse_kind(self) -> Option<MouseEventKind> {
        match self {
            Self::MouseDown => Some(MouseEventKind::Pressed),
            Self::MouseUp => Some(MouseEventKind::Released),
            Self::MouseMoved => Some(MouseEventKind::Moved),
            Self::MouseDragged => Some(MouseEventKind::Dragged),
            Self::MouseEntered => Some(MouseEventKind::Entered),
            Self::MouseExited => Some(MouseEventKind::Exited),
            _ => None,
        }
    }

    /// Toolkit key kind, if this is a key down or up event.
    pub const fn key_kind(self) -> Option<KeyEventKind> {
        match self {
            Self::KeyDown => Some(KeyEventKind::Pressed),
            Self::KeyUp => Some(KeyEventKind::Released),
            _ => None,
        }
    }
}

impl EventOrigin {
    /// Decode a raw mouse event type.
    pub fn mouse_kind(self, raw: u32) -> Result<MouseEventKind, TranslateError> {
        let kind = match self {
            Self::AppKit => NsEventType::try_from(raw).map(NsEventType::mouse_kind),
            Self::Npapi => NpCocoaEventType::try_from(raw).map(NpCocoaEventType::mouse_kind),
        };
        self.resolve(raw, kind, EventFamily::Mouse)
    }

    /// Decode a raw key down or up event type.
    pub fn key_kind(self, raw: u32) -> Result<KeyEventKind, TranslateError> {
        let kind = match self {
            Self::AppKit => NsEventType::try_from(raw).map(NsEventType::key_kind),
            Self::Npapi => NpCocoaEventType::try_from(raw).map(NpCocoaEventType::key_kind),
        };
        self.resolve(raw, kind, EventFamily::Key)
    }

    /// Whether `raw` is this origin's modifier-flags-changed event type.
    pub fn is_flags_changed(self, raw: u32) -> bool {
        match self {
            Self::AppKit => raw == NsEventType::FlagsChanged.raw(),
            Self::Npapi => raw == NpCocoaEventType::FlagsChanged.raw(),
        }
    }

    fn resolve<T>(
        self,
        raw: u32,
        decoded: Result<Option<T>, u32>,
        expected: EventFamily,
    ) -> Result<T, TranslateError> {
        match decoded {
            Ok(Some(kind)) => Ok(kind),
            Ok(None) => Err(TranslateError::UnexpectedEventType {
                origin: self,
                raw,
                expected,
            }),
            Err(raw) => Err(TranslateError::UnknownEventType { origin: self, raw }),
        }
    }
}
