// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual key codes and characters.
//!
//! ## Key codes
//!
//! AppKit reports the physical key as a virtual key code (the `kVK_*` constants).
//! Those codes name positions on an ANSI keyboard, so a French user pressing the key
//! labelled "A" produces the code of the ANSI "Q" position. [`key_info`] therefore maps
//! ASCII letters and digits by the character the key produced and falls back to the
//! position table for everything else.
//!
//! ## Characters
//!
//! [`translate_char`] adjusts the few characters whose AppKit value differs from the
//! toolkit's: enter and return both become newline, the delete key is backspace, and
//! AppKit's private-use function key characters carry no text at all.

use understory_input::key::{KeyCode, KeyLocation};

use crate::modifiers::NsModifierFlags;

/// Virtual key codes (`kVK_*`) referenced by name.
pub mod vk {
    /// `kVK_Return`.
    pub const RETURN: u16 = 0x24;
    /// `kVK_Tab`.
    pub const TAB: u16 = 0x30;
    /// `kVK_Space`.
    pub const SPACE: u16 = 0x31;
    /// `kVK_Delete` (backspace).
    pub const DELETE: u16 = 0x33;
    /// `kVK_Escape`.
    pub const ESCAPE: u16 = 0x35;
    /// `kVK_RightCommand`.
    pub const RIGHT_COMMAND: u16 = 0x36;
    /// `kVK_Command`.
    pub const COMMAND: u16 = 0x37;
    /// `kVK_Shift`.
    pub const SHIFT: u16 = 0x38;
    /// `kVK_CapsLock`.
    pub const CAPS_LOCK: u16 = 0x39;
    /// `kVK_Option`.
    pub const OPTION: u16 = 0x3A;
    /// `kVK_Control`.
    pub const CONTROL: u16 = 0x3B;
    /// `kVK_RightShift`.
    pub const RIGHT_SHIFT: u16 = 0x3C;
    /// `kVK_RightOption`.
    pub const RIGHT_OPTION: u16 = 0x3D;
    /// `kVK_RightControl`.
    pub const RIGHT_CONTROL: u16 = 0x3E;
    /// `kVK_Function`.
    pub const FUNCTION: u16 = 0x3F;
    /// `kVK_ANSI_KeypadEnter`.
    pub const KEYPAD_ENTER: u16 = 0x4C;
    /// `kVK_ANSI_Keypad0`.
    pub const KEYPAD_0: u16 = 0x52;
    /// `kVK_F1`.
    pub const F1: u16 = 0x7A;
    /// `kVK_ForwardDelete`.
    pub const FORWARD_DELETE: u16 = 0x75;
    /// `kVK_LeftArrow`.
    pub const LEFT_ARROW: u16 = 0x7B;
}

/// Toolkit identity of a physical key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyInfo {
    /// Virtual key.
    pub key_code: KeyCode,
    /// Location on the keyboard.
    pub location: KeyLocation,
    /// Whether pressing the key can produce a typed event.
    pub posts_typed: bool,
}

impl KeyInfo {
    /// A key the table has no entry for.
    pub const UNDEFINED: Self = Self {
        key_code: KeyCode::Undefined,
        location: KeyLocation::Unknown,
        posts_typed: false,
    };

    const fn standard(key_code: KeyCode, posts_typed: bool) -> Self {
        Self {
            key_code,
            location: KeyLocation::Standard,
            posts_typed,
        }
    }

    const fn numpad(key_code: KeyCode) -> Self {
        Self {
            key_code,
            location: KeyLocation::Numpad,
            posts_typed: true,
        }
    }

    const fn sided(key_code: KeyCode, location: KeyLocation) -> Self {
        Self {
            key_code,
            location,
            posts_typed: false,
        }
    }
}

const fn typing(key_code: KeyCode) -> KeyInfo {
    KeyInfo::standard(key_code, true)
}

const fn action(key_code: KeyCode) -> KeyInfo {
    KeyInfo::standard(key_code, false)
}

const UNDEF: KeyInfo = KeyInfo::UNDEFINED;

/// Position table indexed by virtual key code.
const KEY_TABLE: [KeyInfo; 0x80] = {
    use KeyCode as K;
    use KeyLocation::{Left, Right};
    [
        typing(K::A),                 // 0x00 kVK_ANSI_A
        typing(K::S),                 // 0x01 kVK_ANSI_S
        typing(K::D),                 // 0x02 kVK_ANSI_D
        typing(K::F),                 // 0x03 kVK_ANSI_F
        typing(K::H),                 // 0x04 kVK_ANSI_H
        typing(K::G),                 // 0x05 kVK_ANSI_G
        typing(K::Z),                 // 0x06 kVK_ANSI_Z
        typing(K::X),                 // 0x07 kVK_ANSI_X
        typing(K::C),                 // 0x08 kVK_ANSI_C
        typing(K::V),                 // 0x09 kVK_ANSI_V
        typing(K::BackQuote),         // 0x0A kVK_ISO_Section
        typing(K::B),                 // 0x0B kVK_ANSI_B
        typing(K::Q),                 // 0x0C kVK_ANSI_Q
        typing(K::W),                 // 0x0D kVK_ANSI_W
        typing(K::E),                 // 0x0E kVK_ANSI_E
        typing(K::R),                 // 0x0F kVK_ANSI_R
        typing(K::Y),                 // 0x10 kVK_ANSI_Y
        typing(K::T),                 // 0x11 kVK_ANSI_T
        typing(K::Digit1),            // 0x12 kVK_ANSI_1
        typing(K::Digit2),            // 0x13 kVK_ANSI_2
        typing(K::Digit3),            // 0x14 kVK_ANSI_3
        typing(K::Digit4),            // 0x15 kVK_ANSI_4
        typing(K::Digit6),            // 0x16 kVK_ANSI_6
        typing(K::Digit5),            // 0x17 kVK_ANSI_5
        typing(K::Equals),            // 0x18 kVK_ANSI_Equal
        typing(K::Digit9),            // 0x19 kVK_ANSI_9
        typing(K::Digit7),            // 0x1A kVK_ANSI_7
        typing(K::Minus),             // 0x1B kVK_ANSI_Minus
        typing(K::Digit8),            // 0x1C kVK_ANSI_8
        typing(K::Digit0),            // 0x1D kVK_ANSI_0
        typing(K::CloseBracket),      // 0x1E kVK_ANSI_RightBracket
        typing(K::O),                 // 0x1F kVK_ANSI_O
        typing(K::U),                 // 0x20 kVK_ANSI_U
        typing(K::OpenBracket),       // 0x21 kVK_ANSI_LeftBracket
        typing(K::I),                 // 0x22 kVK_ANSI_I
        typing(K::P),                 // 0x23 kVK_ANSI_P
        typing(K::Enter),             // 0x24 kVK_Return
        typing(K::L),                 // 0x25 kVK_ANSI_L
        typing(K::J),                 // 0x26 kVK_ANSI_J
        typing(K::Quote),             // 0x27 kVK_ANSI_Quote
        typing(K::K),                 // 0x28 kVK_ANSI_K
        typing(K::Semicolon),         // 0x29 kVK_ANSI_Semicolon
        typing(K::BackSlash),         // 0x2A kVK_ANSI_Backslash
        typing(K::Comma),             // 0x2B kVK_ANSI_Comma
        typing(K::Slash),             // 0x2C kVK_ANSI_Slash
        typing(K::N),                 // 0x2D kVK_ANSI_N
        typing(K::M),                 // 0x2E kVK_ANSI_M
        typing(K::Period),            // 0x2F kVK_ANSI_Period
        typing(K::Tab),               // 0x30 kVK_Tab
        typing(K::Space),             // 0x31 kVK_Space
        typing(K::BackQuote),         // 0x32 kVK_ANSI_Grave
        typing(K::BackSpace),         // 0x33 kVK_Delete
        typing(K::Enter),             // 0x34 powerbook enter
        typing(K::Escape),            // 0x35 kVK_Escape
        KeyInfo::sided(K::Meta, Right),    // 0x36 kVK_RightCommand
        KeyInfo::sided(K::Meta, Left),     // 0x37 kVK_Command
        KeyInfo::sided(K::Shift, Left),    // 0x38 kVK_Shift
        action(K::CapsLock),               // 0x39 kVK_CapsLock
        KeyInfo::sided(K::Alt, Left),      // 0x3A kVK_Option
        KeyInfo::sided(K::Control, Left),  // 0x3B kVK_Control
        KeyInfo::sided(K::Shift, Right),   // 0x3C kVK_RightShift
        KeyInfo::sided(K::Alt, Right),     // 0x3D kVK_RightOption
        KeyInfo::sided(K::Control, Right), // 0x3E kVK_RightControl
        UNDEF,                        // 0x3F kVK_Function
        action(K::F17),               // 0x40 kVK_F17
        KeyInfo::numpad(K::Decimal),  // 0x41 kVK_ANSI_KeypadDecimal
        UNDEF,                        // 0x42
        KeyInfo::numpad(K::Multiply), // 0x43 kVK_ANSI_KeypadMultiply
        UNDEF,                        // 0x44
        KeyInfo::numpad(K::Add),      // 0x45 kVK_ANSI_KeypadPlus
        UNDEF,                        // 0x46
        KeyInfo {
            key_code: K::Clear,
            location: KeyLocation::Numpad,
            posts_typed: false,
        }, // 0x47 kVK_ANSI_KeypadClear
        UNDEF,                        // 0x48 kVK_VolumeUp
        UNDEF,                        // 0x49 kVK_VolumeDown
        UNDEF,                        // 0x4A kVK_Mute
        KeyInfo::numpad(K::Divide),   // 0x4B kVK_ANSI_KeypadDivide
        KeyInfo::numpad(K::Enter),    // 0x4C kVK_ANSI_KeypadEnter
        UNDEF,                        // 0x4D
        KeyInfo::numpad(K::Subtract), // 0x4E kVK_ANSI_KeypadMinus
        action(K::F18),               // 0x4F kVK_F18
        action(K::F19),               // 0x50 kVK_F19
        KeyInfo::numpad(K::Equals),   // 0x51 kVK_ANSI_KeypadEquals
        KeyInfo::numpad(K::Numpad0),  // 0x52 kVK_ANSI_Keypad0
        KeyInfo::numpad(K::Numpad1),  // 0x53 kVK_ANSI_Keypad1
        KeyInfo::numpad(K::Numpad2),  // 0x54 kVK_ANSI_Keypad2
        KeyInfo::numpad(K::Numpad3),  // 0x55 kVK_ANSI_Keypad3
        KeyInfo::numpad(K::Numpad4),  // 0x56 kVK_ANSI_Keypad4
        KeyInfo::numpad(K::Numpad5),  // 0x57 kVK_ANSI_Keypad5
        KeyInfo::numpad(K::Numpad6),  // 0x58 kVK_ANSI_Keypad6
        KeyInfo::numpad(K::Numpad7),  // 0x59 kVK_ANSI_Keypad7
        action(K::F20),               // 0x5A kVK_F20
        KeyInfo::numpad(K::Numpad8),  // 0x5B kVK_ANSI_Keypad8
        KeyInfo::numpad(K::Numpad9),  // 0x5C kVK_ANSI_Keypad9
        typing(K::BackSlash),         // 0x5D kVK_JIS_Yen
        typing(K::Underscore),        // 0x5E kVK_JIS_Underscore
        KeyInfo::numpad(K::Comma),    // 0x5F kVK_JIS_KeypadComma
        action(K::F5),                // 0x60 kVK_F5
        action(K::F6),                // 0x61 kVK_F6
        action(K::F7),                // 0x62 kVK_F7
        action(K::F3),                // 0x63 kVK_F3
        action(K::F8),                // 0x64 kVK_F8
        action(K::F9),                // 0x65 kVK_F9
        action(K::Alphanumeric),      // 0x66 kVK_JIS_Eisu
        action(K::F11),               // 0x67 kVK_F11
        action(K::Kana),              // 0x68 kVK_JIS_Kana
        action(K::F13),               // 0x69 kVK_F13
        action(K::F16),               // 0x6A kVK_F16
        action(K::F14),               // 0x6B kVK_F14
        UNDEF,                        // 0x6C
        action(K::F10),               // 0x6D kVK_F10
        action(K::ContextMenu),       // 0x6E
        action(K::F12),               // 0x6F kVK_F12
        UNDEF,                        // 0x70
        action(K::F15),               // 0x71 kVK_F15
        action(K::Help),              // 0x72 kVK_Help
        action(K::Home),              // 0x73 kVK_Home
        action(K::PageUp),            // 0x74 kVK_PageUp
        typing(K::Delete),            // 0x75 kVK_ForwardDelete
        action(K::F4),                // 0x76 kVK_F4
        action(K::End),               // 0x77 kVK_End
        action(K::F2),                // 0x78 kVK_F2
        action(K::PageDown),          // 0x79 kVK_PageDown
        action(K::F1),                // 0x7A kVK_F1
        action(K::Left),              // 0x7B kVK_LeftArrow
        action(K::Right),             // 0x7C kVK_RightArrow
        action(K::Down),              // 0x7D kVK_DownArrow
        action(K::Up),                // 0x7E kVK_UpArrow
        UNDEF,                        // 0x7F
    ]
};

/// Identify the key behind a key down or up event.
///
/// `ch` is the first character the event produced, if any. An ASCII letter decides
/// the key, and so does an ASCII digit outside the numeric keypad; otherwise the
/// virtual `key_code` is looked up by position. Codes past the table are undefined.
pub fn key_info(ch: Option<char>, flags: NsModifierFlags, key_code: u16) -> KeyInfo {
    if let Some(key) = ch.and_then(KeyCode::letter) {
        return typing(key);
    }
    if !flags.contains(NsModifierFlags::NUMERIC_PAD)
        && let Some(key) = ch.and_then(KeyCode::digit)
    {
        return typing(key);
    }
    KEY_TABLE
        .get(usize::from(key_code))
        .copied()
        .unwrap_or(KeyInfo::UNDEFINED)
}

/// `NSEnterCharacter`.
const ENTER: char = '\u{0003}';
/// `NSBackTabCharacter`.
const BACK_TAB: char = '\u{0019}';
/// `NSDeleteCharacter`.
const DELETE: char = '\u{007f}';
/// `NSDeleteFunctionKey`.
const DELETE_FUNCTION_KEY: char = '\u{f728}';
/// `NSUpArrowFunctionKey`, first of the private-use function key characters.
const FIRST_FUNCTION_KEY: char = '\u{f700}';
/// `NSModeSwitchFunctionKey`, last of the private-use function key characters.
const LAST_FUNCTION_KEY: char = '\u{f747}';

/// When a character substitution applies.
#[derive(Copy, Clone)]
enum When {
    /// Only when no keyboard modifier is held.
    Unmodified,
    /// When the held keyboard modifiers are a subset of these.
    Within(NsModifierFlags),
}

const CHAR_TABLE: [(char, When, char); 5] = [
    (ENTER, When::Unmodified, '\n'),
    ('\r', When::Unmodified, '\n'),
    (
        DELETE,
        When::Within(NsModifierFlags::ALL_KEY_MODIFIERS),
        '\u{0008}',
    ),
    (
        DELETE_FUNCTION_KEY,
        When::Within(NsModifierFlags::ALL_KEY_MODIFIERS),
        DELETE,
    ),
    (BACK_TAB, When::Within(NsModifierFlags::SHIFT), '\t'),
];

/// Toolkit character for the AppKit character `ch`, or `None` when the key produces no text.
///
/// Control-modified characters are left alone, so control-M stays a carriage return.
pub fn translate_char(ch: Option<char>, flags: NsModifierFlags) -> Option<char> {
    let ch = ch?;
    let held = flags & NsModifierFlags::ALL_KEY_MODIFIERS;
    for &(from, when, to) in &CHAR_TABLE {
        if from != ch {
            continue;
        }
        let applies = match when {
            When::Unmodified => held.is_empty(),
            When::Within(allowed) => allowed.contains(held),
        };
        if applies {
            return Some(to);
        }
    }
    if (FIRST_FUNCTION_KEY..=LAST_FUNCTION_KEY).contains(&ch) {
        return None;
    }
    Some(ch)
}
