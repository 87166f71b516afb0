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

//! `` `define ``. The macro name becomes a `constant` tag; its
//! replacement text, argument list, and everything else to the end of the
//! directive's line is never parsed.

use crate::charset;
use crate::emit::EmitSource;
use crate::scanner::Scanner;
use crate::tag::TagKind;

pub fn recognize(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let cur = scanner.skip_white(c);
    let Some(ch) = cur else { return None };
    if !charset::is_identifier_start(ch) {
        return scanner.skip_to_newline(cur);
    }
    let Some((word, follow)) = scanner.read_word(Some(ch)) else {
        return scanner.skip_to_newline(cur);
    };
    // a function-like macro's `(args)` immediately follows the name with no space.
    let mut after = follow;
    if after == Some('(') {
        after = scanner.skip_past_match('(', ')');
    }
    scanner.emit(&word.name, EmitSource::Tag(TagKind::Constant), word.position, None);
    scanner.skip_to_newline(after)
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
    fn simple_macro_emits_a_constant() {
        let tags = run(" WIDTH 32\nmodule m; endmodule");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "WIDTH");
        assert_eq!(tags[0].kind, TagKind::Constant);
    }

    #[test]
    fn function_like_macro_argument_list_is_skipped() {
        let tags = run(" MAX(a, b) ((a) > (b) ? (a) : (b))\nrest");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "MAX");
    }
}
