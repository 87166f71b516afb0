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

//! Token reader: turns the sanitized character stream into classified [`Word`]s.

use crate::charset;
use crate::keyword;
use crate::lang::Language;
use crate::stream::CharStream;
use crate::token::Word;

/// Reads one maximal identifier/keyword/directive/macro-id run starting at `c`,
/// classifying it against `language`'s keyword table.
///
/// Returns the word together with the first character following it (already read
/// off the stream, as if peeked). Callers should not call `stream.next()` again
/// before consuming that character.
///
/// If `c` does not start an identifier, returns `None` and leaves `c` untouched for
/// the caller to handle.
pub fn read_word(
    stream: &mut CharStream,
    c: Option<char>,
    language: Language,
) -> Option<(Word, Option<char>)> {
    let start = c?;
    if !charset::is_identifier_start(start) {
        return None;
    }
    let position = stream.current_pos();
    let mut name = String::new();
    name.push(start);

    let mut next = stream.next();
    while let Some(ch) = next {
        if charset::is_identifier_continue(ch) {
            name.push(ch);
            next = stream.next();
        } else {
            break;
        }
    }

    let kind = keyword::lookup(&name, language);
    let word = Word {
        kind,
        name,
        position,
    };
    Some((word, next))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_maximal_identifier_and_reports_follow_char() {
        let mut s = CharStream::new("module_a ;");
        let c = s.next();
        let (word, follow) = read_word(&mut s, c, Language::Verilog).unwrap();
        assert_eq!(word.name, "module_a");
        assert_eq!(follow, Some(' '));
    }

    #[test]
    fn classifies_against_the_active_language() {
        let mut s = CharStream::new("class ");
        let c = s.next();
        let (word, _) = read_word(&mut s, c, Language::SystemVerilog).unwrap();
        assert_eq!(
            word.kind,
            keyword::ParserKind::Tag(crate::tag::TagKind::Class)
        );
    }

    #[test]
    fn non_identifier_start_returns_none() {
        let mut s = CharStream::new(";x");
        let c = s.next();
        assert!(read_word(&mut s, c, Language::Verilog).is_none());
    }

    #[test]
    fn directive_word_is_recognized_by_backtick_prefix() {
        let mut s = CharStream::new("`ifdef X");
        let c = s.next();
        let (word, _) = read_word(&mut s, c, Language::Verilog).unwrap();
        assert_eq!(word.kind, keyword::ParserKind::Directive);
    }
}
