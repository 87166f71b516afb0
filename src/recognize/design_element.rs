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

//! Design-element headers: `module`, `interface`, `package`,
//! `program`, `property`, `covergroup`, and `modport`. All share the same shape:
//! a name, an optional `#(...)` parameter list, an optional `(...)` list, then a
//! `;`, differing only in whether that list is a real port list.

use crate::charset;
use crate::emit::EmitSource;
use crate::recognize;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

pub fn recognize(scanner: &mut Scanner, word: &Word, c: Option<char>) -> Option<char> {
    let kind = word.kind.as_tag_kind().expect("design element dispatch matched Tag(..)");

    let mut cur = scanner.skip_white(c);
    let (name, follow) = match cur.filter(|ch| charset::is_identifier_start(*ch)) {
        Some(ch) => match scanner.read_word(Some(ch)) {
            Some((w, f)) => (w.name, f),
            None => (String::new(), None),
        },
        None => (String::new(), cur),
    };
    let name_pos = scanner.current_pos();
    scanner.emit(&name, EmitSource::Tag(kind), name_pos, None);
    cur = scanner.skip_white(follow);

    if cur == Some('#') {
        cur = scanner.next_char();
        cur = scanner.skip_white(cur);
        if cur == Some('(') {
            let after_open = scanner.next_char();
            cur = recognize::param_list::recognize(scanner, after_open);
            scanner.scope.current_mut().has_param_list = true;
        }
        cur = scanner.skip_white(cur);
    }

    // only these admit a genuine port list; a modport's parenthesized list names
    // existing signals rather than declaring new ones, and a covergroup's is a
    // sampling-event expression. Neither produces tags of its own.
    let ports_allowed = matches!(
        kind,
        TagKind::Module | TagKind::Interface | TagKind::Program | TagKind::Property
    );
    let mut terminated = false;
    if cur == Some('(') {
        let after_open = scanner.next_char();
        if ports_allowed {
            cur = recognize::port_list::recognize(scanner, after_open);
            terminated = true;
        } else {
            cur = scanner.skip_past_match('(', ')');
        }
    }

    if !terminated && cur != Some(';') {
        cur = scanner.skip_to_semicolon();
    }

    // `modport` has no `end<kind>` text, so
    // `dropEndContext` can never close the scope `emit` opened for it; pop it here
    // instead, back to the enclosing interface.
    if kind == TagKind::Modport {
        scanner.scope.pop();
    }

    cur
}
