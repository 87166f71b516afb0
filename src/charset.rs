//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Character classification shared by the stream, skip, and reader layers.

pub const DOUBLE_QUOTE: char = '\"';
pub const GRAVE_ACCENT: char = '`';
pub const STAR: char = '*';
pub const FWD_SLASH: char = '/';
pub const UNDER_SCORE: char = '_';
pub const DOLLAR_SIGN: char = '$';

/// Checks if `c` is whitespace per the IEEE 1364 definition: space, tab, and the
/// format-effectors (vt, cr, lf).
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000B}' | '\r' | '\n')
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// First character of an identifier: `[A-Za-z_\`]`.
///
/// The grave accent is included because compiler directives and macro identifiers
/// share the token-reader entry point with plain identifiers; the reader
/// distinguishes them after the fact via `update_kind`.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == UNDER_SCORE || c == GRAVE_ACCENT
}

/// Continuation character of an identifier: `[A-Za-z0-9_\`$]`.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == UNDER_SCORE || c == GRAVE_ACCENT || c == DOLLAR_SIGN
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
