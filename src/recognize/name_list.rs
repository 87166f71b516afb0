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

//! Generic name-list declarations: nets, registers, ports,
//! parameters, events, constants, and the declarators left behind by the
//! enum/struct recognizers once their body has been consumed.

use crate::charset;
use crate::emit::EmitSource;
use crate::keyword::ParserKind;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

/// `entry` is the keyword (or bare user-defined-type identifier) that triggered
/// this recognizer; `c` is the character immediately following it; `source`
/// carries the kind/polarity that keyword implies.
pub fn recognize(
    scanner: &mut Scanner,
    entry: &Word,
    c: Option<char>,
    source: EmitSource,
) -> Option<char> {
    let entry_is_user_type = matches!(entry.kind, ParserKind::Identifier);
    let mut declared = source;
    let mut cur = c;

    cur = scanner.skip_white(cur);
    if cur == Some('(') {
        cur = scanner.skip_past_match('(', ')');
        cur = scanner.skip_white(cur);
    }
    cur = scanner.skip_dimension(cur);
    cur = scanner.skip_white(cur);
    if cur == Some('#') {
        cur = scanner.skip_delay();
        cur = scanner.skip_white(cur);
    }

    loop {
        cur = scanner.skip_white(cur);
        if cur == Some('`') {
            let after = scanner.next_char();
            cur = scanner.skip_macro(after);
            continue;
        }
        let Some(ch) = cur else { return None };
        if !charset::is_identifier_start(ch) {
            return Some(ch);
        }
        let Some((word, follow)) = scanner.read_word(Some(ch)) else {
            cur = scanner.next_char();
            continue;
        };

        if entry_is_user_type
            && matches!(word.kind, ParserKind::Tag(TagKind::Net) | ParserKind::Tag(TagKind::Register))
        {
            declared = EmitSource::Tag(word.kind.as_tag_kind().expect("matched Tag(..) above"));
            cur = follow;
            continue;
        }
        if word.kind != ParserKind::Identifier {
            // any other keyword (signed/unsigned/packed/a repeated type word): noise.
            cur = follow;
            continue;
        }

        // candidate declarator name.
        let mut after_name = scanner.skip_white(follow);
        after_name = scanner.skip_dimension(after_name);
        match after_name {
            Some(',') => {
                scanner.emit(&word.name, declared, word.position, None);
                cur = scanner.next_char();
            }
            Some(';') | Some(')') => {
                scanner.emit(&word.name, declared, word.position, None);
                return scanner.next_char();
            }
            Some('=') => {
                scanner.emit(&word.name, declared, word.position, None);
                let e = scanner.next_char();
                cur = scanner.skip_expression(e);
            }
            Some('(') => {
                // module instantiation: the preceding word was a module/type name,
                // not a declared signal; no tag is emitted.
                return scanner.skip_past_match('(', ')');
            }
            other => cur = other,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;
    use crate::position::Position;

    fn run(entry_name: &str, entry_kind: ParserKind, rest: &str, source: EmitSource) -> Vec<crate::tag::Tag> {
        let mut scanner = Scanner::new(rest, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        let entry = Word {
            kind: entry_kind,
            name: entry_name.to_string(),
            position: Position::new(),
        };
        recognize(&mut scanner, &entry, c, source);
        sink.tags
    }

    #[test]
    fn plain_net_declaration_emits_one_tag() {
        let tags = run("wire", ParserKind::Ignore, " a;", EmitSource::Tag(TagKind::Net));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "a");
        assert_eq!(tags[0].kind, TagKind::Net);
    }

    #[test]
    fn comma_separated_list_emits_each_name() {
        let tags = run("wire", ParserKind::Ignore, " a, b, c;", EmitSource::Tag(TagKind::Net));
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn module_instance_is_not_tagged() {
        let tags = run(
            "my_mod",
            ParserKind::Identifier,
            " u1(.a(x));",
            EmitSource::Tag(TagKind::Net),
        );
        assert!(tags.is_empty());
    }

    #[test]
    fn dimension_and_default_value_are_skipped() {
        let tags = run(
            "reg",
            ParserKind::Ignore,
            " [7:0] data = 8'hFF;",
            EmitSource::Tag(TagKind::Register),
        );
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "data");
    }
}
