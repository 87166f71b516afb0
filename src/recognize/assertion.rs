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

//! `assert` / `assume` / `cover` / `expect`. These concurrent
//! assertion statements have no name of their own; a tag is only produced when the
//! statement sits directly inside a labeled block, in which case the block's label
//! becomes the assertion's name. The statement body itself is never parsed.

use crate::emit::EmitSource;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

pub fn recognize(scanner: &mut Scanner, word: &Word, _c: Option<char>) -> Option<char> {
    if let Some(label) = scanner.scope.current().block_name.clone() {
        scanner.emit(&label, EmitSource::Tag(TagKind::Assertion), word.position, None);
    }
    scanner.skip_to_semicolon()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::keyword::ParserKind;
    use crate::lang::Language;
    use crate::position::Position;

    fn run(block_name: Option<&str>, rest: &str) -> Vec<crate::tag::Tag> {
        let mut scanner = Scanner::new(rest, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        scanner.scope.current_mut().block_name = block_name.map(|s| s.to_string());
        let c = scanner.next_char();
        let word = Word {
            kind: ParserKind::Ignore,
            name: "assert".to_string(),
            position: Position::new(),
        };
        recognize(&mut scanner, &word, c);
        sink.tags
    }

    #[test]
    fn assertion_inside_a_labeled_block_is_named_after_the_label() {
        let tags = run(Some("checks"), "(a == b); rest");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "checks");
        assert_eq!(tags[0].kind, TagKind::Assertion);
    }

    #[test]
    fn assertion_with_no_enclosing_label_emits_nothing() {
        let tags = run(None, "(a == b); rest");
        assert!(tags.is_empty());
    }
}
