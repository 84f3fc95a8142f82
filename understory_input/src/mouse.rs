// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse and mouse wheel events.

use kurbo::Point;

use crate::modifiers::Modifiers;
use crate::time::Timestamp;

/// What happened to the pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseEventKind {
    /// A button went down.
    Pressed,
    /// A button went up.
    Released,
    /// The pointer moved with no button held.
    Moved,
    /// The pointer moved with a button held.
    Dragged,
    /// The pointer entered the window.
    Entered,
    /// The pointer left the window.
    Exited,
}

impl MouseEventKind {
    /// Whether events of this kind report a button and click count.
    ///
    /// Motion without a button, enter, and exit never do.
    pub const fn carries_button(self) -> bool {
        !matches!(self, Self::Moved | Self::Entered | Self::Exited)
    }
}

/// A toolkit mouse button, numbered from 1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Button 1, the primary button.
    Left,
    /// Button 2.
    Middle,
    /// Button 3, the secondary button.
    Right,
    /// Any further button, numbered 4 and up.
    Other(u16),
}

impl MouseButton {
    /// The 1-based toolkit button number.
    pub const fn number(self) -> u16 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
            Self::Other(n) => n,
        }
    }

    /// Button for a 1-based toolkit number; `None` for `0`.
    pub const fn from_number(number: u16) -> Option<Self> {
        match number {
            0 => None,
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            n => Some(Self::Other(n)),
        }
    }

    /// The held-button flag for this button.
    pub const fn down_mask(self) -> Modifiers {
        Modifiers::button_down(self.number())
    }
}

/// A pointer event ready for the toolkit.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseEventKind,
    /// When it happened.
    pub when: Timestamp,
    /// Button that changed state, if the kind carries one.
    pub button: Option<MouseButton>,
    /// Location in window coordinates.
    pub position: Point,
    /// Location in screen coordinates.
    pub screen_position: Point,
    /// Keys and buttons held.
    pub modifiers: Modifiers,
    /// Click count; `0` when the kind carries no button.
    pub click_count: u32,
    /// Whether the event should open a context menu.
    pub popup_trigger: bool,
}

/// Units a wheel rotation is measured in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScrollType {
    /// Scroll by units (lines or similar).
    #[default]
    Unit,
    /// Scroll by blocks (pages or similar).
    Block,
}

/// A wheel or trackpad scroll event.
///
/// Horizontal scrolling is reported with [`Modifiers::SHIFT`] set.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// When it happened.
    pub when: Timestamp,
    /// Location in window coordinates.
    pub position: Point,
    /// Keys and buttons held.
    pub modifiers: Modifiers,
    /// Units of the rotation.
    pub scroll_type: ScrollType,
    /// Units to scroll per notch.
    pub scroll_amount: u32,
    /// Whole notches; negative is up (or left).
    pub wheel_rotation: i32,
    /// Rotation including fractions of a notch.
    pub precise_wheel_rotation: f64,
}
