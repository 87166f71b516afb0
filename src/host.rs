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

//! External interfaces a host embedding this scanner implements.
//!
//! The scanner never assumes a particular sink or diagnostic destination; it only
//! calls through these traits. A minimal in-memory implementation is provided below
//! for tests and the demo binary.

use crate::tag::Tag;

/// Receives tags as they are recognized, in recognition order.
pub trait TagSink {
    fn accept(&mut self, tag: Tag);
}

/// An in-memory sink that simply collects every tag it receives, in order.
#[derive(Debug, Default)]
pub struct VecSink {
    pub tags: Vec<Tag>,
}

impl TagSink for VecSink {
    fn accept(&mut self, tag: Tag) {
        self.tags.push(tag);
    }
}

/// Receives free-text progress/skip notices. Never affects the tag stream.
pub trait Diagnostics {
    fn note(&mut self, message: &str);
}

/// The default diagnostics sink: discards everything.
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn note(&mut self, _message: &str) {}
}

/// Prints each note to stderr, `colored`-highlighted, unstructured text.
pub struct TerminalDiagnostics {
    pub verbose: bool,
}

impl Diagnostics for TerminalDiagnostics {
    fn note(&mut self, message: &str) {
        if self.verbose {
            use colored::Colorize;
            eprintln!("{}: {}", "note".blue().bold(), message);
        }
    }
}
