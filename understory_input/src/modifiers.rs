// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held keys and mouse buttons at the time of an input event.

bitflags::bitflags! {
    /// Modifier keys and mouse buttons held during an input event.
    ///
    /// The bit layout is stable. Buttons 1 through 3 have named flags; extra buttons
    /// 4 through [`MAX_BUTTONS`](crate::settings::MAX_BUTTONS) occupy bits 14 and up
    /// and are built with [`Modifiers::button_down`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// Shift key.
        const SHIFT     = 1 << 6;
        /// Control key.
        const CTRL      = 1 << 7;
        /// Meta key (Command on macOS).
        const META      = 1 << 8;
        /// Alt key (Option on macOS).
        const ALT       = 1 << 9;
        /// Mouse button 1 (primary).
        const BUTTON1   = 1 << 10;
        /// Mouse button 2 (middle).
        const BUTTON2   = 1 << 11;
        /// Mouse button 3 (secondary).
        const BUTTON3   = 1 << 12;
        /// AltGraph key.
        const ALT_GRAPH = 1 << 13;

        // Extra mouse buttons, see `button_down`.
        const _ = !0;
    }
}

/// Bit of button 4; button `n` uses bit `n + 10`.
const FIRST_EXTRA_BUTTON_BIT: u32 = 14;

impl Modifiers {
    /// Flags of the keyboard modifiers only.
    pub const KEYS: Self = Self::SHIFT
        .union(Self::CTRL)
        .union(Self::META)
        .union(Self::ALT)
        .union(Self::ALT_GRAPH);

    /// The held-button flag for toolkit button `number` (1-based).
    ///
    /// Returns an empty set for `0` and for numbers past
    /// [`MAX_BUTTONS`](crate::settings::MAX_BUTTONS).
    pub const fn button_down(number: u16) -> Self {
        match number {
            1 => Self::BUTTON1,
            2 => Self::BUTTON2,
            3 => Self::BUTTON3,
            n if n >= 4 && n as u32 <= crate::settings::MAX_BUTTONS => {
                Self::from_bits_retain(1 << (FIRST_EXTRA_BUTTON_BIT + (n as u32 - 4)))
            }
            _ => Self::empty(),
        }
    }

    /// Whether toolkit button `number` is held.
    pub fn is_button_down(self, number: u16) -> bool {
        let mask = Self::button_down(number);
        !mask.is_empty() && self.contains(mask)
    }

    /// Whether these modifiers make a mouse event open a context menu.
    ///
    /// True when the secondary button is held, or the primary button is held
    /// together with control.
    pub fn is_popup_trigger(self) -> bool {
        self.contains(Self::BUTTON3) || self.contains(Self::BUTTON1 | Self::CTRL)
    }
}
