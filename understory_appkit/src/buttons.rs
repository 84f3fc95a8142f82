// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native mouse button numbers.
//!
//! AppKit numbers buttons from zero as left, right, center, then extras. The toolkit
//! numbers them from one as left, middle, right, then extras, so right and center
//! swap and every extra button shifts up by one.

use understory_input::mouse::MouseButton;

/// `kCGMouseButtonLeft`.
pub const LEFT: u32 = 0;
/// `kCGMouseButtonRight`.
pub const RIGHT: u32 = 1;
/// `kCGMouseButtonCenter`.
pub const CENTER: u32 = 2;

/// Toolkit button for a native button number.
///
/// Numbers past `u16::MAX - 1` saturate to `u16::MAX`; callers bound-check against the toolkit
/// button count first.
pub fn toolkit_button(native: u32) -> MouseButton {
    match native {
        LEFT => MouseButton::Left,
        RIGHT => MouseButton::Right,
        CENTER => MouseButton::Middle,
        n => MouseButton::Other(u16::try_from(n.saturating_add(1)).unwrap_or(u16::MAX)),
    }
}
