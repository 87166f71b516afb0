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

//! `function` / `task` headers. Everything between the keyword and
//! the name (`automatic`, a return type, a user-defined class name used as a
//! return type) is noise this scanner never classifies; only the last identifier
//! seen before `(` or `;` is the declared name.
//!
//! An out-of-body method definition (`ClassName::method_name(...)`) pushes a
//! synthetic `Class` scope, marked [`class_scope`][crate::token::ScopeFrame] so
//! `dropEndContext` pops it a second time once the method's own `end<kind>` closes.
//!
//! An `extern`/`pure virtual` prototype never reaches a body; its enclosing scope
//! already carries `prototype = true` (set by the dispatch loop when it saw the
//! `extern`/`pure` keyword), which `emit`'s own bookkeeping converts to a
//! [`TagKind::Prototype`] tag with no scope pushed for it.

use crate::charset;
use crate::emit::EmitSource;
use crate::recognize;
use crate::scanner::Scanner;
use crate::tag::TagKind;
use crate::token::Word;

pub fn recognize(scanner: &mut Scanner, word: &Word, c: Option<char>) -> Option<char> {
    let base_kind = word.kind.as_tag_kind().expect("function/task dispatch matched Tag(..)");

    let mut cur = c;
    let mut last_word: Option<Word> = None;
    let mut scope_class: Option<String> = None;

    loop {
        cur = scanner.skip_white(cur);
        let Some(ch) = cur else { return None };
        if ch == '(' || ch == ';' {
            break;
        }
        if ch == '`' {
            let after = scanner.next_char();
            cur = scanner.skip_macro(after);
            continue;
        }
        if !charset::is_identifier_start(ch) {
            cur = scanner.next_char();
            continue;
        }
        let Some((candidate, follow)) = scanner.read_word(Some(ch)) else {
            cur = scanner.next_char();
            continue;
        };

        let after = scanner.skip_white(follow);
        if after == Some(':') {
            let maybe_second = scanner.next_char();
            if maybe_second == Some(':') {
                scope_class = Some(candidate.name.clone());
                let past = scanner.next_char();
                cur = scanner.skip_white(past);
                continue;
            }
            cur = maybe_second;
            break;
        }

        last_word = Some(candidate);
        cur = after;
    }

    let Some(name_word) = last_word else {
        return cur;
    };

    if let Some(class_name) = scope_class {
        scanner.scope.push_context(TagKind::Class, &class_name);
        scanner.scope.current_mut().class_scope = true;
    }

    scanner.emit(&name_word.name, EmitSource::Tag(base_kind), name_word.position, None);

    if cur == Some('(') {
        let after_open = scanner.next_char();
        return recognize::port_list::recognize(scanner, after_open);
    }
    cur
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ScanConfig;
    use crate::host::{NullDiagnostics, VecSink};
    use crate::keyword::ParserKind;
    use crate::lang::Language;
    use crate::position::Position;

    fn run(kind: TagKind, rest: &str) -> (Vec<crate::tag::Tag>, bool) {
        let mut scanner = Scanner::new(rest, ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        let c = scanner.next_char();
        let word = Word {
            kind: ParserKind::Tag(kind),
            name: String::new(),
            position: Position::new(),
        };
        recognize(&mut scanner, &word, c);
        (sink.tags, scanner.scope.current().is_root())
    }

    #[test]
    fn task_with_no_return_type_emits_a_task_and_its_ports() {
        let (tags, _) = run(TagKind::Task, "automatic foo(input int a); endtask");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["foo", "a"]);
        assert_eq!(tags[0].kind, TagKind::Task);
    }

    #[test]
    fn function_return_type_is_skipped_and_last_word_is_the_name() {
        let (tags, _) = run(TagKind::Function, "automatic int unsigned compute(input int x); endfunction");
        assert_eq!(tags[0].name, "compute");
    }

    #[test]
    fn out_of_body_method_pushes_a_synthetic_class_scope() {
        let (tags, is_root) = run(TagKind::Function, "Widget::area(); endfunction");
        assert_eq!(tags[0].name, "area");
        assert_eq!(tags[0].scope_name.as_deref(), Some("Widget"));
        // endfunction pops the method AND the synthetic class scope beneath it.
        assert!(is_root);
    }

    #[test]
    fn extern_prototype_hint_on_the_enclosing_scope_suppresses_the_body_scope() {
        let mut scanner = Scanner::new("void foo(); endclass", ScanConfig::new(Language::SystemVerilog));
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        scanner.bind(&mut sink, &mut diag);
        scanner.scope.push_context(TagKind::Class, "C");
        scanner.scope.current_mut().prototype = true;
        let c = scanner.next_char();
        let word = Word {
            kind: ParserKind::Tag(TagKind::Function),
            name: String::new(),
            position: Position::new(),
        };
        recognize(&mut scanner, &word, c);
        assert_eq!(sink.tags.len(), 1);
        assert_eq!(sink.tags[0].kind, TagKind::Prototype);
        // no new scope was pushed for the prototype itself: only the class frame
        // the test set up by hand remains.
        assert_eq!(scanner.scope.depth(), 2);
    }
}
