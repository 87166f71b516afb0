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

//! Port list `(...)`: shared by module/interface/program/property
//! headers and by function/task/class signatures.

use crate::charset;
use crate::emit::EmitSource;
use crate::scanner::Scanner;
use crate::tag::TagKind;

/// Caller has already consumed the opening `(`. Walks to the matching `;` (not the
/// closing `)`; the terminator is the semicolon that follows it), emitting a
/// `port` tag for each declarator's final identifier, and returns the character
/// after that `;`.
pub fn recognize(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut depth: i32 = 1;
    let mut cur = c;

    while depth > 0 {
        let Some(ch) = cur else { return None };
        match ch {
            '(' | '{' | '[' => {
                depth += 1;
                cur = scanner.next_char();
            }
            ')' | '}' | ']' => {
                depth -= 1;
                cur = scanner.next_char();
            }
            '`' => {
                let after = scanner.next_char();
                cur = scanner.skip_macro(after);
            }
            '=' => {
                let after = scanner.next_char();
                cur = scanner.skip_expression(after);
            }
            _ if charset::is_identifier_start(ch) => {
                let Some((word, follow)) = scanner.read_word(Some(ch)) else {
                    cur = scanner.next_char();
                    continue;
                };
                let after_ws = scanner.skip_white(follow);
                let is_last_word = !matches!(after_ws, Some(next) if charset::is_identifier_start(next));
                if is_last_word && depth == 1 {
                    scanner.emit(&word.name, EmitSource::Tag(TagKind::Port), word.position, None);
                }
                cur = after_ws;
            }
            _ => cur = scanner.next_char(),
        }
    }

    // walk to the terminating ';'
    loop {
        match cur {
            Some(';') => return scanner.next_char(),
            Some(_) => cur = scanner.next_char(),
            None => return None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    fn run(ports: &str) -> Vec<crate::tag::Tag> {
        let source = format!("{}) rest", ports);
        let mut scanner = Scanner::new(&source, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, c);
        sink.tags
    }

    #[test]
    fn emits_a_port_per_declarator() {
        let tags = run("input a, output b;");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(tags.iter().all(|t| t.kind == TagKind::Port));
    }

    #[test]
    fn skips_default_value_expressions() {
        let tags = run("input int a = 4, output b;");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn nested_parens_do_not_emit_ports() {
        let tags = run("input a, output logic [foo(1):0] b;");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
