// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key events, virtual key codes, and key locations.
//!
//! ## Pressed, released, typed
//!
//! A physical key produces a [`Pressed`](KeyEventKind::Pressed) and later a
//! [`Released`](KeyEventKind::Released) event, both carrying a [`KeyCode`].
//! Keys that produce text additionally produce a [`Typed`](KeyEventKind::Typed)
//! event right after the press. Typed events carry the character and always use
//! [`KeyCode::Undefined`] with [`KeyLocation::Unknown`]; text committed by an input
//! method arrives as typed events alone.

use crate::modifiers::Modifiers;
use crate::time::Timestamp;

/// Kind of key event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyEventKind {
    /// A key went down (or auto-repeated).
    Pressed,
    /// A key went up.
    Released,
    /// A character was entered.
    Typed,
}

/// Where on the keyboard a key sits, for keys that exist more than once.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum KeyLocation {
    /// Not known, or not meaningful (typed events).
    #[default]
    Unknown,
    /// The only instance of the key.
    Standard,
    /// Left-hand instance (modifier keys).
    Left,
    /// Right-hand instance (modifier keys).
    Right,
    /// The numeric keypad.
    Numpad,
}

/// Layout-independent identifier of a key.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[allow(missing_docs, reason = "variant names are the key legends")]
pub enum KeyCode {
    /// No key code applies (typed events, unknown keys).
    #[default]
    Undefined,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    Multiply,
    Add,
    Subtract,
    Decimal,
    Divide,

    Enter,
    Tab,
    Space,
    BackSpace,
    Delete,
    Escape,
    Clear,
    Help,
    ContextMenu,

    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,

    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,

    Minus,
    Equals,
    OpenBracket,
    CloseBracket,
    BackSlash,
    Semicolon,
    Quote,
    BackQuote,
    Comma,
    Period,
    Slash,
    Underscore,

    /// JIS "英数" key.
    Alphanumeric,
    /// JIS "かな" key.
    Kana,
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const NUMPAD: [KeyCode; 10] = [
    KeyCode::Numpad0,
    KeyCode::Numpad1,
    KeyCode::Numpad2,
    KeyCode::Numpad3,
    KeyCode::Numpad4,
    KeyCode::Numpad5,
    KeyCode::Numpad6,
    KeyCode::Numpad7,
    KeyCode::Numpad8,
    KeyCode::Numpad9,
];

impl KeyCode {
    /// Key for an ASCII letter, either case.
    pub fn letter(ch: char) -> Option<Self> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let idx = ch.to_ascii_uppercase() as usize - 'A' as usize;
        Some(LETTERS[idx])
    }

    /// Key for an ASCII digit on the main keyboard.
    pub fn digit(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| DIGITS[d as usize])
    }

    /// Keypad key for digit `n` (`0..=9`).
    pub fn numpad(n: u8) -> Option<Self> {
        NUMPAD.get(usize::from(n)).copied()
    }

    /// Whether this is one of the modifier keys.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::Shift | Self::Control | Self::Alt | Self::Meta | Self::CapsLock
        )
    }
}

/// A key event ready for the toolkit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Pressed, released, or typed.
    pub kind: KeyEventKind,
    /// When it happened.
    pub when: Timestamp,
    /// Keys and buttons held.
    pub modifiers: Modifiers,
    /// Virtual key; [`KeyCode::Undefined`] for typed events.
    pub key_code: KeyCode,
    /// Character produced, if any.
    pub key_char: Option<char>,
    /// Key location; [`KeyLocation::Unknown`] for typed events.
    pub location: KeyLocation,
}

impl KeyEvent {
    /// A typed event for `ch` with no key code or location.
    pub fn typed(when: Timestamp, modifiers: Modifiers, ch: char) -> Self {
        Self {
            kind: KeyEventKind::Typed,
            when,
            modifiers,
            key_code: KeyCode::Undefined,
            key_char: Some(ch),
            location: KeyLocation::Unknown,
        }
    }
}
