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

//! `typedef`. Three shapes:
//!
//! - `typedef class Foo;` / `typedef interface class Foo;`: a forward reference
//!   with no body, emitted directly as a [`TagKind::Prototype`], since no scope
//!   exists yet to carry a deferred prototype hint.
//! - `typedef enum ... { ... } name;` / `typedef struct ... { ... } name;`:
//!   delegated to the matching body recognizer, which rebrands its own tag to
//!   `Typedef` when `entry_kind` says it was reached through here.
//! - anything else (`typedef logic [7:0] byte_t;`): a plain alias. Skip the
//!   aliased type, read the final identifier, emit it as `Typedef`.

use crate::charset;
use crate::emit::EmitSource;
use crate::keyword::ParserKind;
use crate::scanner::Scanner;
use crate::tag::TagKind;

pub fn recognize(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut cur = scanner.skip_white(c);
    let Some(ch) = cur else { return None };
    if !charset::is_identifier_start(ch) {
        return cur;
    }
    let Some((word, follow)) = scanner.read_word(Some(ch)) else {
        return cur;
    };

    match word.name.as_str() {
        "class" => return forward_declare_class(scanner, follow),
        "interface" => {
            let after = scanner.skip_white(follow);
            if let Some(ch2) = after.filter(|x| charset::is_identifier_start(*x)) {
                if let Some((next_word, follow2)) = scanner.read_word(Some(ch2)) {
                    if next_word.name == "class" {
                        return forward_declare_class(scanner, follow2);
                    }
                    // malformed input (only `typedef interface class Foo;` is real
                    // SystemVerilog); fall back to the generic alias scan, seeded
                    // with the word already read.
                    return alias(scanner, Some((next_word.name, next_word.position)), follow2);
                }
            }
            cur = after;
        }
        "enum" => return super::enum_decl::recognize(scanner, ParserKind::Tag(TagKind::Typedef), follow),
        "struct" | "union" => {
            return super::struct_union::recognize(scanner, ParserKind::Tag(TagKind::Typedef), follow)
        }
        _ => return alias(scanner, None, follow),
    }
    cur
}

fn forward_declare_class(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let mut cur = scanner.skip_white(c);
    let name = match cur.filter(|ch| charset::is_identifier_start(*ch)) {
        Some(ch) => match scanner.read_word(Some(ch)) {
            Some((w, f)) => {
                cur = f;
                w.name
            }
            None => String::new(),
        },
        None => String::new(),
    };
    let pos = scanner.current_pos();
    scanner.emit(&name, EmitSource::Tag(TagKind::Prototype), pos, None);
    cur
}

/// `seed`, if present, is a type word already read (e.g. while disambiguating
/// `typedef interface ...` above) that should be treated as the first candidate
/// declarator name, superseded by anything the loop below reads after it.
fn alias(
    scanner: &mut Scanner,
    seed: Option<(String, crate::position::Position)>,
    c: Option<char>,
) -> Option<char> {
    let mut cur = scanner.skip_white(c);
    cur = scanner.skip_dimension(cur);
    cur = scanner.skip_white(cur);

    // skip any further base-type/qualifier words (`unsigned`, a packed dimension,
    // a second identifier used as a user-defined base type) until none remain.
    let mut last_name = seed;
    loop {
        let Some(ch) = cur else { break };
        if ch == ';' {
            break;
        }
        if !charset::is_identifier_start(ch) {
            cur = scanner.next_char();
            continue;
        }
        let Some((word, follow)) = scanner.read_word(Some(ch)) else {
            cur = scanner.next_char();
            continue;
        };
        last_name = Some((word.name, word.position));
        cur = scanner.skip_white(follow);
        cur = scanner.skip_dimension(cur);
        cur = scanner.skip_white(cur);
    }

    match last_name {
        Some((name, pos)) => {
            scanner.emit(&name, EmitSource::Tag(TagKind::Typedef), pos, None);
        }
        None => {
            scanner.emit("", EmitSource::Tag(TagKind::Prototype), scanner.current_pos(), None);
        }
    }
    cur
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    fn run(rest: &str) -> Vec<crate::tag::Tag> {
        let mut scanner = Scanner::new(rest, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, c);
        sink.tags
    }

    #[test]
    fn forward_class_reference_is_a_prototype() {
        let tags = run("class Packet; rest");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Prototype);
        assert_eq!(tags[0].name, "Packet");
    }

    #[test]
    fn plain_alias_reads_the_trailing_identifier() {
        let tags = run("logic [7:0] byte_t;");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "byte_t");
        assert_eq!(tags[0].kind, TagKind::Typedef);
    }

    #[test]
    fn enum_delegate_rebrands_to_typedef() {
        let tags = run("enum { A, B } state_t;");
        assert_eq!(tags[0].name, "state_t");
        assert_eq!(tags[0].kind, TagKind::Typedef);
    }
}
