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

//! `struct` / `union`. Fields are never sub-parsed; the body is
//! skipped as a single balanced `{...}`.

use crate::charset;
use crate::emit::EmitSource;
use crate::keyword::ParserKind;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

pub fn recognize(scanner: &mut Scanner, entry_kind: ParserKind, c: Option<char>) -> Option<char> {
    let mut cur = scanner.skip_white(c);
    // `packed` / `signed` / `unsigned` qualifiers may appear in any order.
    loop {
        let Some(ch) = cur else { return None };
        if !charset::is_identifier_start(ch) {
            break;
        }
        let Some((word, follow)) = scanner.read_word(Some(ch)) else {
            break;
        };
        if matches!(word.name.as_str(), "packed" | "signed" | "unsigned") {
            cur = scanner.skip_white(follow);
            continue;
        }
        // an unexpected word before `{` (or before a forward-declaration `;`):
        // nothing further to skip, let the caller decide from here.
        cur = follow;
        break;
    }

    if cur != Some('{') {
        return cur;
    }
    let mut after = scanner.skip_past_match('{', '}');
    after = scanner.skip_dimension(after);

    let out_kind = match entry_kind {
        ParserKind::Tag(TagKind::Typedef) => TagKind::Typedef,
        _ => TagKind::Struct,
    };
    let entry = Word {
        kind: ParserKind::Tag(out_kind),
        name: String::new(),
        position: scanner.current_pos(),
    };
    super::name_list::recognize(scanner, &entry, after, EmitSource::Tag(out_kind))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::lang::Language;

    #[test]
    fn struct_body_is_skipped_and_name_becomes_the_tag() {
        let mut scanner = Scanner::new(
            "packed { logic a; logic b; } s_t;",
            ScanConfig::new(Language::SystemVerilog),
        );
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        recognize(&mut scanner, ParserKind::Tag(TagKind::Typedef), c);
        assert_eq!(sink.tags.len(), 1);
        assert_eq!(sink.tags[0].name, "s_t");
        assert_eq!(sink.tags[0].kind, TagKind::Typedef);
    }
}
