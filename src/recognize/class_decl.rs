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

//! `class`. A parameter list appears before the class name is
//! known to the emitter, so its members are queued the same way an `enum`'s are
//! and drained once `emit` creates the class's own scope. An
//! `extends BaseName` clause becomes the tag's `inheritance`; `implements ...` is
//! skipped entirely since no tag field models it.

use crate::charset;
use crate::emit::{EmitSource, PendingMember};
use crate::keyword::ParserKind;
use crate::scanner::Scanner;
use crate::tag::TagKind;

pub fn recognize(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut cur = scanner.skip_white(c);
    let (name, follow) = match cur.filter(|ch| charset::is_identifier_start(*ch)) {
        Some(ch) => match scanner.read_word(Some(ch)) {
            Some((w, f)) => (w.name, f),
            None => (String::new(), None),
        },
        None => (String::new(), cur),
    };
    let name_pos = scanner.current_pos();
    cur = scanner.skip_white(follow);

    if cur == Some('#') {
        cur = scanner.next_char();
        cur = scanner.skip_white(cur);
        if cur == Some('(') {
            let after_open = scanner.next_char();
            cur = collect_params(scanner, after_open);
        }
        cur = scanner.skip_white(cur);
    }

    let mut inheritance: Option<String> = None;
    loop {
        let Some(ch) = cur else { break };
        if !charset::is_identifier_start(ch) {
            break;
        }
        let Some((word, follow)) = scanner.read_word(Some(ch)) else { break };

        if word.name == "extends" {
            let mut after = scanner.skip_white(follow);
            if let Some(ch2) = after.filter(|x| charset::is_identifier_start(*x)) {
                if let Some((base, follow2)) = scanner.read_word(Some(ch2)) {
                    inheritance = Some(base.name);
                    after = scanner.skip_white(follow2);
                    if after == Some('(') {
                        // the base class's constructor argument list, not a tag parameter.
                        let _ = scanner.next_char();
                        after = scanner.skip_past_match('(', ')');
                    }
                }
            }
            cur = scanner.skip_white(after);
            continue;
        }
        if word.name == "implements" {
            cur = scanner.skip_to_semicolon();
            break;
        }
        // a stray word this loop doesn't expect: stop rather than guess.
        cur = follow;
        break;
    }

    scanner.emit(&name, EmitSource::Tag(TagKind::Class), name_pos, inheritance);
    cur
}

/// Caller has already consumed the opening `(`. Queues each parameter's name as a
/// [`PendingMember`] rather than emitting it directly. The class tag, and
/// therefore its scope, does not exist yet.
fn collect_params(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut cur = c;
    loop {
        cur = scanner.skip_white(cur);
        let Some(ch) = cur else { return None };
        if ch == ')' {
            return scanner.next_char();
        }
        if ch == '[' {
            cur = scanner.skip_dimension(Some(ch));
            continue;
        }
        if ch == ',' {
            cur = scanner.next_char();
            continue;
        }
        if !charset::is_identifier_start(ch) {
            cur = scanner.next_char();
            continue;
        }
        let Some((word, follow)) = scanner.read_word(Some(ch)) else {
            cur = scanner.next_char();
            continue;
        };
        if matches!(word.kind, ParserKind::Parameter | ParserKind::Localparam) {
            cur = follow;
            continue;
        }
        if word.kind == ParserKind::Identifier {
            let after_ws = scanner.skip_white(follow);
            if matches!(after_ws, Some(',') | Some(')') | Some('=')) {
                scanner.tag_contents.push(PendingMember {
                    name: word.name,
                    position: word.position,
                    parameter_attribute: false,
                });
                cur = match after_ws {
                    Some('=') => {
                        let e = scanner.next_char();
                        scanner.skip_expression(e)
                    }
                    other => other,
                };
            } else {
                cur = after_ws;
            }
        } else {
            cur = follow;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    fn run(rest: &str) -> (Vec<crate::tag::Tag>, bool) {
        let mut scanner = Scanner::new(rest, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, c);
        (sink.tags, scanner.scope.current().is_root())
    }

    #[test]
    fn plain_class_pushes_a_scope() {
        let (tags, is_root) = run("Packet; endclass");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Packet");
        assert_eq!(tags[0].kind, TagKind::Class);
        assert!(!is_root);
    }

    #[test]
    fn extends_clause_becomes_inheritance() {
        let (tags, _) = run("Derived extends Base; endclass");
        assert_eq!(tags[0].inheritance.as_deref(), Some("Base"));
    }

    #[test]
    fn extends_with_constructor_args_skips_the_argument_list() {
        let (tags, _) = run("Derived extends Base(1, 2); endclass");
        assert_eq!(tags[0].inheritance.as_deref(), Some("Base"));
    }

    #[test]
    fn parameters_are_queued_and_drained_into_the_new_scope() {
        let (tags, _) = run("Stack #(parameter int DEPTH = 4); endclass");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Stack", "DEPTH"]);
        assert_eq!(tags[1].scope_name.as_deref(), Some("Stack"));
    }
}
