// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit input settings consulted while translating native events.

/// Largest number of mouse buttons the toolkit tracks.
///
/// Bounded by the extra-button bits in [`Modifiers`](crate::modifiers::Modifiers).
pub const MAX_BUTTONS: u32 = 20;

/// Toolkit-wide input settings.
///
/// With the `serde` feature, missing fields take their default values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSettings {
    /// Whether buttons beyond the first three produce events.
    pub extra_mouse_buttons_enabled: bool,
    /// Number of mouse buttons the toolkit reports; clamped to [`MAX_BUTTONS`].
    pub number_of_buttons: u32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            extra_mouse_buttons_enabled: true,
            number_of_buttons: MAX_BUTTONS,
        }
    }
}

impl InputSettings {
    /// Settings for a plain three-button mouse with extra buttons disabled.
    pub const THREE_BUTTON: Self = Self {
        extra_mouse_buttons_enabled: false,
        number_of_buttons: 3,
    };

    /// Number of buttons in effect, at most [`MAX_BUTTONS`].
    pub fn effective_buttons(&self) -> u32 {
        self.number_of_buttons.min(MAX_BUTTONS)
    }

    /// Whether the zero-based native button `index` is in range and allowed.
    ///
    /// Indices 0 through 2 are the standard buttons; anything above needs
    /// [`extra_mouse_buttons_enabled`](Self::extra_mouse_buttons_enabled).
    pub fn accepts_button(&self, index: u32) -> bool {
        if index > 2 && !self.extra_mouse_buttons_enabled {
            return false;
        }
        index < self.effective_buttons()
    }
}
