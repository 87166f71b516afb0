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

use std::cmp::Ordering;
use std::fmt::Display;

/// A (line, column) capture point in the source text.
///
/// The byte offset is carried alongside line/col rather than replacing it, since
/// callers may want either.
#[derive(Debug, PartialEq, Clone, Copy, Eq, serde_derive::Serialize)]
pub struct Position {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl Position {
    /// Creates a new `Position` at line 1, col 0, offset 0.
    pub fn new() -> Self {
        Self {
            line: 1,
            col: 0,
            byte_offset: 0,
        }
    }

    pub fn place(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Advances the position by one character `c`, dropping to the next line on `\n`.
    pub fn step(&mut self, c: char) {
        self.byte_offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.byte_offset.cmp(&other.byte_offset))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stepping_advances_line_and_col() {
        let mut pos = Position::new();
        assert_eq!(pos, Position::place(1, 0, 0));
        pos.step('a');
        assert_eq!(pos, Position::place(1, 1, 1));
        pos.step('b');
        assert_eq!(pos, Position::place(1, 2, 2));
        pos.step('\n');
        assert_eq!(pos, Position::place(2, 0, 3));
    }
}
