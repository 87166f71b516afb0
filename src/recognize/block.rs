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

//! `begin`. An unlabeled `begin` is just a nesting counter bump on
//! the current scope (cheap since most blocks never get a matching unlabeled tag);
//! a `begin : label` pushes a real [`TagKind::Block`] scope so statements inside it
//! can be reported under that name (assertion naming, for one).

use crate::emit::EmitSource;
use crate::scanner::Scanner;
use crate::tag::TagKind;

pub fn recognize_begin(scanner: &mut Scanner, c: Option<char>) -> Option<char> {
    let cur = scanner.skip_white(c);
    if cur == Some(':') {
        let after_colon = scanner.next_char();
        let after_colon = scanner.skip_white(after_colon);
        if let Some(ch) = after_colon {
            if crate::charset::is_identifier_start(ch) {
                if let Some((word, follow)) = scanner.read_word(Some(ch)) {
                    scanner.emit(&word.name, EmitSource::Tag(TagKind::Block), word.position, None);
                    return follow;
                }
            }
        }
        return after_colon;
    }
    scanner.scope.enter_block();
    cur
}
