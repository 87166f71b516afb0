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

use thiserror::Error;

/// Internal assertion failures.
///
/// These are implementation bugs, never a reaction to malformed source. Malformed
/// source is always a benign skip and never produces a `ScanError`.
#[derive(Error, Debug, PartialEq)]
pub enum ScanError {
    #[error("attempted to unget a character while the pushback slot was already occupied")]
    DoubleUnget,
    #[error("begin/end nest level underflowed below zero")]
    NestLevelUnderflow,
    #[error("attempted to pop the sentinel root scope")]
    PoppedRoot,
}
