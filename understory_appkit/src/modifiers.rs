// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native modifier flags and their toolkit counterparts.

use understory_input::key::{KeyCode, KeyEventKind, KeyLocation};
use understory_input::modifiers::Modifiers;
use understory_input::settings::MAX_BUTTONS;

use crate::keys::vk;

bitflags::bitflags! {
    /// AppKit `NSEventModifierFlags`.
    ///
    /// The low 16 bits carry device-dependent state and are kept as-is.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NsModifierFlags: u32 {
        /// Caps Lock is engaged.
        const CAPS_LOCK   = 1 << 16;
        /// Shift is held.
        const SHIFT       = 1 << 17;
        /// Control is held.
        const CONTROL     = 1 << 18;
        /// Option is held.
        const OPTION      = 1 << 19;
        /// Command is held.
        const COMMAND     = 1 << 20;
        /// The key is on the numeric keypad.
        const NUMERIC_PAD = 1 << 21;
        /// Help is held.
        const HELP        = 1 << 22;
        /// Fn is held, or the key is a function key.
        const FUNCTION    = 1 << 23;

        const _ = !0;
    }
}

impl NsModifierFlags {
    /// The four keyboard modifiers that alter characters.
    pub const ALL_KEY_MODIFIERS: Self = Self::SHIFT
        .union(Self::CONTROL)
        .union(Self::OPTION)
        .union(Self::COMMAND);
}

/// One row of the modifier table: a native flag, its physical keys, and its toolkit side.
struct ModifierKey {
    flag: NsModifierFlags,
    left: u16,
    right: u16,
    held: Modifiers,
    key: KeyCode,
}

const MODIFIER_KEYS: [ModifierKey; 4] = [
    ModifierKey {
        flag: NsModifierFlags::SHIFT,
        left: vk::SHIFT,
        right: vk::RIGHT_SHIFT,
        held: Modifiers::SHIFT,
        key: KeyCode::Shift,
    },
    ModifierKey {
        flag: NsModifierFlags::CONTROL,
        left: vk::CONTROL,
        right: vk::RIGHT_CONTROL,
        held: Modifiers::CTRL,
        key: KeyCode::Control,
    },
    ModifierKey {
        flag: NsModifierFlags::OPTION,
        left: vk::OPTION,
        right: vk::RIGHT_OPTION,
        held: Modifiers::ALT,
        key: KeyCode::Alt,
    },
    ModifierKey {
        flag: NsModifierFlags::COMMAND,
        left: vk::COMMAND,
        right: vk::RIGHT_COMMAND,
        held: Modifiers::META,
        key: KeyCode::Meta,
    },
];

/// Toolkit modifiers for the keyboard flags alone.
pub fn key_modifiers(flags: NsModifierFlags) -> Modifiers {
    MODIFIER_KEYS
        .iter()
        .filter(|m| flags.contains(m.flag))
        .fold(Modifiers::empty(), |acc, m| acc | m.held)
}

/// Toolkit modifiers for a pointer event.
///
/// Combines [`key_modifiers`] with the buttons held according to `pressed_buttons`,
/// the native pressed-button bitmask (bit `n` is native button `n`). Native buttons
/// 0, 1, and 2 are left, right, and center; higher bits count only while below
/// `number_of_buttons`.
pub fn mouse_modifiers(
    flags: NsModifierFlags,
    pressed_buttons: u32,
    number_of_buttons: u32,
) -> Modifiers {
    let mut modifiers = key_modifiers(flags);
    let held = |bit: u32| bit < 32 && pressed_buttons & (1 << bit) != 0;
    if held(0) {
        modifiers |= Modifiers::BUTTON1;
    }
    if held(1) {
        modifiers |= Modifiers::BUTTON3;
    }
    if held(2) {
        modifiers |= Modifiers::BUTTON2;
    }
    let limit = u16::try_from(number_of_buttons.min(MAX_BUTTONS)).unwrap_or(0);
    for native in 3..limit {
        if held(u32::from(native)) {
            // Native button n is toolkit button n + 1 from here on.
            modifiers |= Modifiers::button_down(native + 1);
        }
    }
    modifiers
}

/// Key, location, and kind of a modifier key that changed state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModifierKeyInfo {
    /// The modifier key.
    pub key_code: KeyCode,
    /// Which side of the keyboard it sits on.
    pub location: KeyLocation,
    /// Pressed when its flag is now set, released otherwise.
    pub kind: KeyEventKind,
}

impl ModifierKeyInfo {
    /// Reported for a flags change on a key that is not a known modifier.
    pub const UNDEFINED: Self = Self {
        key_code: KeyCode::Undefined,
        location: KeyLocation::Unknown,
        kind: KeyEventKind::Pressed,
    };
}

/// Decode a flags-changed event from the new `flags` and the physical `key_code`.
///
/// Returns `None` when `key_code` is not a modifier this table knows (for example Fn).
pub fn modifier_key_info(flags: NsModifierFlags, key_code: u16) -> Option<ModifierKeyInfo> {
    let kind = |flag| {
        if flags.contains(flag) {
            KeyEventKind::Pressed
        } else {
            KeyEventKind::Released
        }
    };

    if key_code == vk::CAPS_LOCK {
        return Some(ModifierKeyInfo {
            key_code: KeyCode::CapsLock,
            location: KeyLocation::Standard,
            kind: kind(NsModifierFlags::CAPS_LOCK),
        });
    }

    MODIFIER_KEYS.iter().find_map(|m| {
        let location = if key_code == m.left {
            KeyLocation::Left
        } else if key_code == m.right {
            KeyLocation::Right
        } else {
            return None;
        };
        Some(ModifierKeyInfo {
            key_code: m.key,
            location,
            kind: kind(m.flag),
        })
    })
}
