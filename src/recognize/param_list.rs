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

//! Parameter list `#(...)`.

use crate::charset;
use crate::emit::EmitSource;
use crate::keyword::ParserKind;
use crate::scanner::Scanner;

/// Caller has already consumed the opening `(`. Emits each parameter/localparam
/// element as a `constant` tag and returns the character after the closing `)`.
pub fn recognize(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut polarity = EmitSource::Parameter;
    let mut cur = c;
    loop {
        cur = scanner.skip_white(cur);
        let ch = cur?;
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
        match word.kind {
            ParserKind::Parameter => {
                polarity = EmitSource::Parameter;
                cur = follow;
            }
            ParserKind::Localparam => {
                polarity = EmitSource::Localparam;
                cur = follow;
            }
            ParserKind::Identifier => {
                let after_ws = scanner.skip_white(follow);
                if matches!(after_ws, Some(',') | Some(')') | Some('=')) {
                    scanner.emit(&word.name, polarity, word.position, None);
                    cur = match after_ws {
                        Some('=') => {
                            let e = scanner.next_char();
                            scanner.skip_expression(e)
                        }
                        other => other,
                    };
                } else {
                    // a user-defined type reference preceding the real name.
                    cur = after_ws;
                }
            }
            // a net/register type keyword, or other noise: not a name itself.
            _ => cur = follow,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    fn run(params: &str) -> Vec<crate::tag::Tag> {
        let source = format!("{}) rest", params);
        let mut scanner = Scanner::new(&source, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, c);
        sink.tags
    }

    #[test]
    fn explicit_parameter_keyword_marks_overridable() {
        let tags = run("parameter int N=8");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "N");
        assert!(tags[0].parameter_attribute);
    }

    #[test]
    fn localparam_keyword_is_not_overridable() {
        let tags = run("localparam int W=4");
        assert!(!tags[0].parameter_attribute);
    }

    #[test]
    fn bare_name_defaults_to_parameter_polarity() {
        let tags = run("N=8");
        assert!(tags[0].parameter_attribute);
    }

    #[test]
    fn multiple_elements_are_each_emitted() {
        let tags = run("parameter int A=1, B=2");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
