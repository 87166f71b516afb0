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

//! The top-level loop: drives the scanner over a whole source file, dispatching
//! each classified word to its recognizer and handling the three punctuation
//! characters the loop itself owns (`:`, `;`, `#`).

use crate::charset;
use crate::config::ScanConfig;
use crate::emit::{self, EmitSource, PendingMember};
use crate::host::{Diagnostics, TagSink};
use crate::keyword::ParserKind;
use crate::lang::Language;
use crate::position::Position;
use crate::reader;
use crate::recognize;
use crate::scope::ScopeStack;
use crate::skip;
use crate::stream::CharStream;
use crate::tag::TagKind;
use crate::token::Word;

/// Owns every piece of per-file state: the sanitized character stream, the scope
/// stack, the pending-member queue, and the host collaborators (tag sink,
/// diagnostics) bound just before scanning starts.
pub struct Scanner<'a> {
    pub(crate) stream: CharStream<'a>,
    pub(crate) scope: ScopeStack,
    pub(crate) language: Language,
    pub(crate) config: ScanConfig,
    pub(crate) tag_contents: Vec<PendingMember>,
    sink: Option<&'a mut dyn TagSink>,
    diag: Option<&'a mut dyn Diagnostics>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, config: ScanConfig) -> Self {
        Self {
            stream: CharStream::new(source),
            scope: ScopeStack::new(),
            language: config.language,
            config,
            tag_contents: Vec::new(),
            sink: None,
            diag: None,
        }
    }

    /// Binds the host collaborators for a scan; kept separate from `new` so the
    /// emitter's own tests can construct a `Scanner` without needing live trait
    /// objects yet.
    pub fn bind(&mut self, sink: &'a mut dyn TagSink, diag: &'a mut dyn Diagnostics) {
        self.sink = Some(sink);
        self.diag = Some(diag);
    }

    pub(crate) fn emit_tag(&mut self, tag: crate::tag::Tag) {
        if let Some(sink) = self.sink.as_mut() {
            sink.accept(tag);
        }
    }

    pub(crate) fn note(&mut self, message: &str) {
        if let Some(diag) = self.diag.as_mut() {
            diag.note(message);
        }
    }

    pub(crate) fn current_pos(&self) -> Position {
        self.stream.current_pos()
    }

    pub(crate) fn read_word(&mut self, c: Option<char>) -> Option<(Word, Option<char>)> {
        reader::read_word(&mut self.stream, c, self.language)
    }

    pub(crate) fn skip_white(&mut self, c: Option<char>) -> Option<char> {
        skip::skip_white(&mut self.stream, c)
    }

    pub(crate) fn skip_past_match(&mut self, open: char, close: char) -> Option<char> {
        skip::skip_past_match(&mut self.stream, open, close)
    }

    pub(crate) fn skip_dimension(&mut self, c: Option<char>) -> Option<char> {
        skip::skip_dimension(&mut self.stream, c)
    }

    pub(crate) fn skip_delay(&mut self) -> Option<char> {
        skip::skip_delay(&mut self.stream)
    }

    pub(crate) fn skip_expression(&mut self, c: Option<char>) -> Option<char> {
        skip::skip_expression(&mut self.stream, c)
    }

    pub(crate) fn skip_to_semicolon(&mut self) -> Option<char> {
        skip::skip_to_semicolon(&mut self.stream)
    }

    /// `c` is the already-peeked current character, per the usual skip-primitive
    /// convention (unlike [`skip::skip_to_newline`], which starts fresh).
    pub(crate) fn skip_to_newline(&mut self, c: Option<char>) -> Option<char> {
        skip::skip_to_newline_from(&mut self.stream, c)
    }

    pub(crate) fn skip_macro(&mut self, c: Option<char>) -> Option<char> {
        skip::skip_macro(&mut self.stream, c)
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        self.stream.next()
    }

    /// Emits through [`emit::emit`] with the current position.
    pub(crate) fn emit(
        &mut self,
        name: &str,
        source: EmitSource,
        position: Position,
        inheritance: Option<String>,
    ) -> Option<TagKind> {
        emit::emit(self, name, source, position, inheritance)
    }

    /// Peeks one non-whitespace character after an `end*` recognition; a trailing
    /// `: label` is read and reported to diagnostics only, for logging/symmetry
    /// checks.
    fn capture_trailing_label(&mut self, c: Option<char>) -> Option<char> {
        let c = self.skip_white(c);
        if c == Some(':') {
            let after_colon = self.next_char();
            let after_colon = self.skip_white(after_colon);
            if let Some((label, follow)) = self.read_word(after_colon) {
                self.note(&format!("block closed with label '{}'", label.name));
                return follow;
            }
            return after_colon;
        }
        c
    }

    /// Handles a `` ` `` seen at the top level: reads the directive/macro name and,
    /// for `` `define ``, hands straight off to [`recognize::define_decl`]. Unlike
    /// [`Self::skip_macro`] (used by recognizers that just want to skip *over* a
    /// macro mid-construct), this is the one call site that actually needs to
    /// notice `define` and act on it, so it duplicates `skip::skip_macro`'s
    /// name-reading loop rather than reusing it.
    ///
    /// `c` must be the character immediately after the already-consumed backtick,
    /// with no whitespace skipped yet: a directive's `skip_to_newline` must stay on
    /// the directive's own line rather than a pre-applied `skip_white` carrying it
    /// across the newline into whatever follows. A name outside the known directive
    /// set is a macro usage or invocation, not a directive, and only its optional
    /// `(...)` argument list is skipped.
    fn handle_macro(&mut self, c: Option<char>) -> Option<char> {
        let mut name = String::new();
        let mut cur = c;
        while let Some(ch) = cur {
            if charset::is_identifier_continue(ch) {
                name.push(ch);
                cur = self.next_char();
            } else {
                break;
            }
        }
        if name == "define" {
            return recognize::define_decl::recognize(self, cur);
        }
        if skip::is_line_directive(&name) {
            return self.skip_to_newline(cur);
        }
        if cur == Some('(') {
            return self.skip_past_match('(', ')');
        }
        cur
    }

    /// Runs the scanner over the whole of `source`, calling back into `sink` and
    /// `diag` as tags and notices are produced.
    pub fn scan_str(source: &str, config: ScanConfig, sink: &mut dyn TagSink, diag: &mut dyn Diagnostics) {
        let mut scanner = Scanner::new(source, config);
        scanner.bind(sink, diag);
        scanner.run();
    }

    fn run(&mut self) {
        let mut c = self.next_char();
        loop {
            let Some(ch) = c else { break };

            if charset::is_whitespace(ch) {
                c = self.next_char();
                continue;
            }

            if ch == ';' {
                self.handle_semicolon();
                c = self.next_char();
                continue;
            }

            if ch == '#' {
                c = self.skip_delay();
                continue;
            }

            if ch == '`' {
                let after = self.next_char();
                c = self.handle_macro(after);
                continue;
            }

            if charset::is_identifier_start(ch) {
                let Some((word, follow)) = self.read_word(Some(ch)) else {
                    c = self.next_char();
                    continue;
                };
                let after = self.skip_white(follow);
                if after == Some(':') {
                    self.scope.current_mut().block_name = Some(word.name.clone());
                    c = self.next_char();
                    continue;
                }
                c = self.dispatch(word, after);
                continue;
            }

            c = self.next_char();
        }
        self.scope.prune();
    }

    /// `;` clears a satisfied prototype hint on the current scope and drains any
    /// stray pending members.
    ///
    /// A bare forward declaration (`class Foo;`, `typedef class Foo;`, an `extern`
    /// method) never actually pushes the scope its natural kind would normally
    /// open: the owning recognizer looks ahead for the body before calling
    /// [`emit`][Self::emit] and passes `EmitSource::Tag(TagKind::Prototype)`
    /// directly when none is found, rather than deferring the conversion to this
    /// handler. That keeps this handler a plain flag clear, with an identical tag
    /// stream to the scope-retroactive-pop scheme.
    fn handle_semicolon(&mut self) {
        if !self.scope.current().is_root() {
            self.scope.current_mut().prototype = false;
        }
        self.tag_contents.clear();
    }

    fn dispatch(&mut self, word: Word, c: Option<char>) -> Option<char> {
        if matches!(word.kind, ParserKind::End) {
            self.scope.exit_block();
            let popped = !self.scope.current().is_root() && self.scope.drop_end_context(&word);
            let _ = popped;
            return self.capture_trailing_label(c);
        }
        if matches!(word.kind, ParserKind::EndDe) {
            if !self.scope.current().is_root() {
                self.scope.drop_end_context(&word);
            }
            return self.capture_trailing_label(c);
        }

        if matches!(word.kind, ParserKind::Ignore)
            && matches!(word.name.as_str(), "assert" | "assume" | "cover" | "expect")
        {
            return recognize::assertion::recognize(self, &word, c);
        }

        // `extern`/`pure virtual` precedes a function/task header with no body; the
        // hint lives on the *enclosing* scope (the class the method is declared
        // in) until the header's own `emit` call reads it back and converts the tag
        // to a prototype. `handle_semicolon` clears it once the header's `;` is
        // reached.
        if matches!(word.kind, ParserKind::Ignore) && matches!(word.name.as_str(), "extern" | "pure") {
            if !self.scope.current().is_root() {
                self.scope.current_mut().prototype = true;
            }
            return c;
        }

        match word.kind {
            ParserKind::Begin => recognize::block::recognize_begin(self, c),
            ParserKind::Define => recognize::define_decl::recognize(self, c),
            ParserKind::Directive => self.skip_macro(c),
            ParserKind::Localparam => recognize::name_list::recognize(self, &word, c, EmitSource::Localparam),
            ParserKind::Parameter => recognize::name_list::recognize(self, &word, c, EmitSource::Parameter),
            ParserKind::Identifier => {
                recognize::name_list::recognize(self, &word, c, EmitSource::Tag(TagKind::Net))
            }
            ParserKind::Tag(TagKind::Module)
            | ParserKind::Tag(TagKind::Interface)
            | ParserKind::Tag(TagKind::Package)
            | ParserKind::Tag(TagKind::Program)
            | ParserKind::Tag(TagKind::Property)
            | ParserKind::Tag(TagKind::Covergroup)
            | ParserKind::Tag(TagKind::Modport) => {
                recognize::design_element::recognize(self, &word, c)
            }
            ParserKind::Tag(TagKind::Function) | ParserKind::Tag(TagKind::Task) => {
                recognize::function_task::recognize(self, &word, c)
            }
            ParserKind::Tag(TagKind::Class) => recognize::class_decl::recognize(self, c),
            ParserKind::Tag(TagKind::Typedef) => recognize::typedef_decl::recognize(self, c),
            ParserKind::Tag(TagKind::Enum) => recognize::enum_decl::recognize(self, word.kind, c),
            ParserKind::Tag(TagKind::Struct) => recognize::struct_union::recognize(self, word.kind, c),
            ParserKind::Tag(TagKind::Net)
            | ParserKind::Tag(TagKind::Register)
            | ParserKind::Tag(TagKind::Port)
            | ParserKind::Tag(TagKind::Event) => {
                let kind = word.kind.as_tag_kind().expect("matched Tag(..) above");
                recognize::name_list::recognize(self, &word, c, EmitSource::Tag(kind))
            }
            _ => c,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::host::{NullDiagnostics, VecSink};

    fn scan(source: &str) -> Vec<crate::tag::Tag> {
        let config = ScanConfig::new(Language::SystemVerilog);
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        Scanner::scan_str(source, config, &mut sink, &mut diag);
        sink.tags
    }

    #[test]
    fn module_with_params_and_ports_emits_all_their_tags() {
        let tags = scan("module m #(parameter int N=8)(input a, output b); endmodule");
        let names: Vec<_> = tags.iter().map(|t| (t.name.as_str(), t.kind)).collect();
        assert_eq!(
            names,
            vec![
                ("m", TagKind::Module),
                ("N", TagKind::Constant),
                ("a", TagKind::Port),
                ("b", TagKind::Port),
            ]
        );
        assert!(tags[1].parameter_attribute);
    }

    #[test]
    fn define_emits_constant() {
        let tags = scan("`define WIDTH 32");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "WIDTH");
        assert_eq!(tags[0].kind, TagKind::Constant);
    }

    #[test]
    fn interface_with_modport() {
        let tags = scan("interface I; modport mp(input x); endinterface");
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["I", "mp"]);
        assert_eq!(tags[1].scope_name.as_deref(), Some("I"));
    }

    #[test]
    fn end_of_input_prunes_the_scope_stack() {
        let config = ScanConfig::new(Language::SystemVerilog);
        let mut sink = VecSink::default();
        let mut diag = NullDiagnostics;
        let mut scanner = Scanner::new("module m; ", config);
        scanner.bind(&mut sink, &mut diag);
        scanner.run();
        assert!(scanner.scope.current().is_root());
    }
}
