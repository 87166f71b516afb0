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

//! `enum`.

use crate::charset;
use crate::emit::{EmitSource, PendingMember};
use crate::keyword::ParserKind;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

/// `entry_kind` is `Tag(TagKind::Enum)` for a bare `enum`, or `Tag(TagKind::Typedef)`
/// when a `typedef` recognizer rebranded its own token and delegated here.
pub fn recognize(scanner: &mut Scanner, entry_kind: ParserKind, c: Option<char>) -> Option<char> {
    // optional base type words ("enum byte { ... }", "enum logic [3:0] { ... }").
    let mut cur = scanner.skip_white(c);
    loop {
        match cur {
            Some('{') => break,
            Some('[') => {
                cur = scanner.skip_dimension(cur);
                cur = scanner.skip_white(cur);
            }
            Some(ch) if charset::is_identifier_start(ch) => {
                let Some((_word, follow)) = scanner.read_word(Some(ch)) else {
                    break;
                };
                cur = scanner.skip_white(follow);
            }
            _ => break,
        }
    }

    if cur != Some('{') {
        // forward declaration: no body follows.
        scanner.emit("", EmitSource::Tag(TagKind::Prototype), scanner.current_pos(), None);
        return cur;
    }

    let mut inside = scanner.next_char();
    loop {
        inside = scanner.skip_white(inside);
        let Some(ch) = inside else { break };
        if ch == '}' {
            inside = scanner.next_char();
            break;
        }
        if !charset::is_identifier_start(ch) {
            inside = scanner.next_char();
            continue;
        }
        let Some((member, follow)) = scanner.read_word(Some(ch)) else {
            inside = scanner.next_char();
            continue;
        };
        let mut after = scanner.skip_white(follow);
        if after == Some('[') {
            after = scanner.skip_dimension(after);
        }
        if after == Some('=') {
            let e = scanner.next_char();
            after = scanner.skip_expression(e);
        }
        scanner.tag_contents.push(PendingMember {
            name: member.name,
            position: member.position,
            parameter_attribute: false,
        });
        inside = match after {
            Some(',') => scanner.next_char(),
            other => other,
        };
    }

    let out_kind = match entry_kind {
        ParserKind::Tag(TagKind::Typedef) => TagKind::Typedef,
        _ => TagKind::Enum,
    };
    // delegate to the name-list recognizer with the original enum/typedef token:
    // the declarator(s) after `}` become the enum/typedef tag(s), and the members
    // queued above drain into the scope each one opens.
    let entry = Word {
        kind: ParserKind::Tag(out_kind),
        name: String::new(),
        position: scanner.current_pos(),
    };
    super::name_list::recognize(scanner, &entry, inside, EmitSource::Tag(out_kind))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    #[test]
    fn enum_members_become_children_of_the_typedef() {
        let mut scanner = Scanner::new("{ A, B=2, C } e_t;", ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, ParserKind::Tag(TagKind::Typedef), c);
        let names: Vec<_> = sink.tags.iter().map(|t| (t.name.as_str(), t.kind)).collect();
        assert_eq!(
            names,
            vec![
                ("e_t", TagKind::Typedef),
                ("A", TagKind::Constant),
                ("B", TagKind::Constant),
                ("C", TagKind::Constant),
            ]
        );
        assert!(sink.tags[1..].iter().all(|t| t.scope_name.as_deref() == Some("e_t")));
        // typedef is a transient container: its scope does not linger.
        assert!(scanner.scope.current().is_root());
    }

    #[test]
    fn enum_with_no_body_is_a_prototype() {
        let mut scanner = Scanner::new("; rest", ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, ParserKind::Tag(TagKind::Enum), c);
        assert!(sink.tags.is_empty(), "empty name is suppressed per emit step 3");
    }
}
