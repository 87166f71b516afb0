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

//! Skip primitives: the small set of cursor-advancing helpers every recognizer
//! composes instead of parsing the constructs it deliberately ignores (expressions,
//! delays, macro invocations, dimensions).
//!
//! Every helper takes the "current" character (already read off the stream, as if
//! peeked) and returns the next meaningful character in the same position, so
//! callers can chain them without re-reading.

use crate::charset;
use crate::stream::CharStream;

/// If `c` is whitespace, reads until the first non-whitespace character.
pub fn skip_white(stream: &mut CharStream, c: Option<char>) -> Option<char> {
    let mut cur = c;
    while let Some(ch) = cur {
        if !charset::is_whitespace(ch) {
            break;
        }
        cur = stream.next();
    }
    cur
}

/// Caller has already consumed `open`. Reads until the matching `close` at depth 0,
/// counting nested `open`/`close` pairs, and returns the character after `close`.
pub fn skip_past_match(stream: &mut CharStream, open: char, close: char) -> Option<char> {
    let mut depth: u32 = 1;
    loop {
        let c = stream.next()?;
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return stream.next();
            }
        }
    }
}

/// While `c == '['`, skips a balanced `[...]` then whitespace; returns the first
/// non-`[` character.
pub fn skip_dimension(stream: &mut CharStream, c: Option<char>) -> Option<char> {
    let mut cur = c;
    while cur == Some('[') {
        cur = skip_past_match(stream, '[', ']');
        cur = skip_white(stream, cur);
    }
    cur
}

/// Called with the stream positioned just after a consumed leading `#`. Handles
/// `#(...)`, `#<ident/number/.>...`, and the `##delay` shorthand.
///
/// The `##delay` case is a deliberate overshoot to the next `;`, reproduced
/// faithfully rather than localized to the enclosing construct.
pub fn skip_delay(stream: &mut CharStream) -> Option<char> {
    let c = stream.next()?;
    match c {
        '#' => skip_to_semicolon(stream),
        '(' => skip_past_match(stream, '(', ')'),
        _ => {
            let mut cur = Some(c);
            while let Some(ch) = cur {
                if charset::is_identifier_continue(ch) || charset::is_digit(ch) || ch == '.' {
                    cur = stream.next();
                } else {
                    break;
                }
            }
            skip_white(stream, cur)
        }
    }
}

/// Reads until an unbalanced `,`, `;`, `)`, `}`, or `]` at depth 0, honoring nested
/// `()`, `{}`, `[]`. Returns the terminating delimiter (already consumed).
pub fn skip_expression(stream: &mut CharStream, c: Option<char>) -> Option<char> {
    let mut depth: i32 = 0;
    let mut cur = c;
    loop {
        let ch = cur?;
        match ch {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' if depth > 0 => depth -= 1,
            ',' | ';' | ')' | '}' | ']' if depth == 0 => return Some(ch),
            _ => {}
        }
        cur = stream.next();
    }
}

/// Reads until `;` or EOF; returns `Some(';')` or `None`.
pub fn skip_to_semicolon(stream: &mut CharStream) -> Option<char> {
    loop {
        match stream.next() {
            Some(';') => return Some(';'),
            Some(_) => continue,
            None => return None,
        }
    }
}

/// Reads until `\n` or EOF, honoring `\<newline>` line continuation (which does not
/// terminate the skip). Returns the character after the terminating newline.
pub fn skip_to_newline(stream: &mut CharStream) -> Option<char> {
    loop {
        match stream.next() {
            Some('\\') => {
                // a continuation swallows the following newline and keeps going.
                stream.next();
            }
            Some(c) if charset::is_newline(c) => return stream.next(),
            Some(_) => continue,
            None => return None,
        }
    }
}

/// Compiler directives that run to end of line, distinct from a bare macro usage
/// (`` `WIDTH ``) or invocation (`` `MAX(a, b) ``), neither of which consumes past
/// its own text.
const LINE_DIRECTIVES: &[&str] = &[
    "ifdef",
    "ifndef",
    "else",
    "elsif",
    "endif",
    "include",
    "timescale",
    "resetall",
    "undef",
    "undefineall",
    "default_nettype",
    "celldefine",
    "endcelldefine",
    "unconnected_drive",
    "nounconnected_drive",
    "pragma",
    "line",
    "begin_keywords",
    "end_keywords",
    "protect",
    "endprotect",
];

pub(crate) fn is_line_directive(name: &str) -> bool {
    LINE_DIRECTIVES.contains(&name)
}

/// `c` is the character that follows a `` ` `` already consumed by the caller: if
/// the directive word is reachable, reads it; a `` `define `` is left for the
/// caller to delegate to the define recognizer, a known directive is consumed to
/// end of line, and anything else (a macro usage or invocation) only has its
/// optional `(...)` argument list skipped, leaving the rest of the line alone.
pub fn skip_macro(stream: &mut CharStream, c: Option<char>) -> Option<char> {
    let mut name = String::new();
    let mut cur = c;
    while let Some(ch) = cur {
        if charset::is_identifier_continue(ch) {
            name.push(ch);
            cur = stream.next();
        } else {
            break;
        }
    }
    if name == "define" {
        return cur;
    }
    if is_line_directive(&name) {
        return skip_to_newline_from(stream, cur);
    }
    if cur == Some('(') {
        return skip_past_match(stream, '(', ')');
    }
    cur
}

pub(crate) fn skip_to_newline_from(stream: &mut CharStream, c: Option<char>) -> Option<char> {
    let mut cur = c;
    loop {
        match cur {
            Some('\\') => {
                stream.next();
                cur = stream.next();
            }
            Some(ch) if charset::is_newline(ch) => return stream.next(),
            Some(_) => cur = stream.next(),
            None => return None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skip_white_stops_at_first_non_whitespace() {
        let mut s = CharStream::new("   x");
        let c = s.next();
        assert_eq!(skip_white(&mut s, c), Some('x'));
    }

    #[test]
    fn skip_past_match_honors_nesting() {
        let mut s = CharStream::new("(a(b)c)d");
        let first = s.next(); // '('
        assert_eq!(first, Some('('));
        assert_eq!(skip_past_match(&mut s, '(', ')'), Some('d'));
    }

    #[test]
    fn skip_dimension_consumes_multiple_brackets() {
        let mut s = CharStream::new("[3:0][7:0] x");
        let c = s.next();
        assert_eq!(skip_dimension(&mut s, c), Some('x'));
    }

    #[test]
    fn skip_delay_paren_form_skips_balanced_list() {
        let mut s = CharStream::new("#(1, 2) x");
        assert_eq!(skip_delay(&mut s), Some('x'));
    }

    #[test]
    fn skip_delay_bare_value_form_stops_after_token() {
        let mut s = CharStream::new("#10 x");
        assert_eq!(skip_delay(&mut s), Some('x'));
    }

    #[test]
    fn skip_delay_double_hash_overshoots_to_semicolon() {
        // the scanner already consumed the leading '#'; skip_delay sees the second,
        // and the `##delay` shorthand overshoots all the way to the next `;`.
        let mut s = CharStream::new("##5 a + b; x");
        assert_eq!(skip_delay(&mut s), Some(';'));
    }

    #[test]
    fn skip_expression_stops_at_top_level_comma() {
        let mut s = CharStream::new("a+f(b,c), d");
        let c = s.next();
        assert_eq!(skip_expression(&mut s, c), Some(','));
    }

    #[test]
    fn skip_to_semicolon_finds_terminator() {
        let mut s = CharStream::new("junk here; rest");
        assert_eq!(skip_to_semicolon(&mut s), Some(';'));
    }

    #[test]
    fn skip_to_newline_honors_continuation() {
        let mut s = CharStream::new("a\\\nb\nc");
        let c = skip_to_newline(&mut s);
        assert_eq!(c, Some('c'));
    }
}
