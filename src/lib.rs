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

//! A single-pass tag extractor for Verilog (IEEE 1364) and SystemVerilog (IEEE
//! 1800) source: a ctags-style scanner, not a compiler front end. It never builds
//! an AST. It recognizes a small set of declaration shapes, emits a [`tag::Tag`]
//! for each, and otherwise skips over everything it doesn't need (expressions,
//! statement bodies, delays, macro arguments) with the bounded-lookahead
//! primitives in [`skip`].
//!
//! The entry point is [`scanner::Scanner::scan_str`]; embed it by implementing
//! [`host::TagSink`] (and, optionally, [`host::Diagnostics`]) and calling it with a
//! [`config::ScanConfig`].

pub mod charset;
pub mod config;
pub mod emit;
pub mod error;
pub mod host;
pub mod keyword;
pub mod lang;
pub mod position;
pub mod reader;
pub mod recognize;
pub mod scanner;
pub mod scope;
pub mod skip;
pub mod stream;
pub mod tag;
pub mod token;

pub use config::ScanConfig;
pub use error::ScanError;
pub use host::{Diagnostics, TagSink};
pub use lang::Language;
pub use scanner::Scanner;
pub use tag::{Tag, TagKind};
