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

use crate::error::ScanError;
use crate::tag::TagKind;
use crate::token::{ScopeFrame, Word};

/// Vec-backed scope stack. Index 0 is always the sentinel root; it is never
/// popped.
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            frames: vec![ScopeFrame::root()],
        }
    }

    pub fn current(&self) -> &ScopeFrame {
        self.frames.last().expect("root frame is never removed")
    }

    pub fn current_mut(&mut self) -> &mut ScopeFrame {
        self.frames.last_mut().expect("root frame is never removed")
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a new child frame for a newly discovered container tag (`createContext`).
    ///
    /// A `Block` frame starts at `nest_level = 1`, not 0: the labeled `begin` that
    /// created it is itself the first half of a `begin`/`end` pair the frame must
    /// balance, so its own matching `end` is what brings the level back to zero and
    /// triggers `drop_end_context`'s rule 2. Every other container kind starts at 0
    /// and only uses `nest_level` as bookkeeping for unlabeled `begin`/`end` pairs
    /// nested directly in its body (never triggers a pop by itself).
    pub fn push_context(&mut self, kind: TagKind, local_name: &str) {
        let mut child = self.current().child(kind, local_name);
        if kind == TagKind::Block {
            child.nest_level = 1;
        }
        self.frames.push(child);
    }

    /// Pops and discards the current frame (`dropContext`). Never pops the root.
    pub fn pop(&mut self) -> ScopeFrame {
        assert!(self.frames.len() > 1, "{}", ScanError::PoppedRoot);
        self.frames.pop().expect("checked non-empty above")
    }

    /// Pops every frame down to the sentinel root (`prune`, called at EOF).
    pub fn prune(&mut self) {
        while self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Increments the unnamed `begin`/`end` nesting depth of the current frame.
    pub fn enter_block(&mut self) {
        self.current_mut().nest_level += 1;
    }

    /// Decrements the unnamed `begin`/`end` nesting depth of the current frame.
    /// Underflowing past zero is an implementation bug.
    pub fn exit_block(&mut self) {
        let frame = self.current_mut();
        assert!(frame.nest_level > 0, "{}", ScanError::NestLevelUnderflow);
        frame.nest_level -= 1;
    }

    /// Evaluates the three `dropEndContext` rules against an `end`
    /// (plain `end`, nest already decremented by the caller) or `end<kind>` token,
    /// popping the current frame when it matches. Returns `true` if a frame was
    /// popped.
    pub fn drop_end_context(&mut self, word: &Word) -> bool {
        let current_kind = self.current().kind;

        // Rule 1: `endgroup` always closes a covergroup, regardless of name.
        if current_kind == Some(TagKind::Covergroup) && word.name == "endgroup" {
            self.pop();
            return true;
        }

        // Rule 2: an unlabeled `end` closes a block only once its own nesting has
        // unwound back to zero.
        if current_kind == Some(TagKind::Block) && self.current().nest_level == 0 {
            if word.name == "end" {
                self.pop();
                return true;
            }
            return false;
        }

        // Rule 3: textual match against "end" + the container kind's name.
        if let Some(kind) = current_kind {
            if let Some(expected) = kind.end_keyword() {
                if word.name == expected {
                    self.pop();
                    if self.current().class_scope {
                        // the frame now exposed is a synthetic `Class::method`
                        // scope; it has no `end*` of its own and
                        // is dropped immediately once the method body closes.
                        self.pop();
                    }
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::position::Position;

    fn word(name: &str) -> Word {
        Word {
            kind: crate::keyword::ParserKind::EndDe,
            name: name.to_string(),
            position: Position::new(),
        }
    }

    #[test]
    fn push_then_matching_end_pops_back_to_root() {
        let mut stack = ScopeStack::new();
        stack.push_context(TagKind::Module, "m");
        assert_eq!(stack.depth(), 2);
        assert!(stack.drop_end_context(&word("endmodule")));
        assert_eq!(stack.depth(), 1);
        assert!(stack.current().is_root());
    }

    #[test]
    fn mismatched_end_keyword_does_not_pop() {
        let mut stack = ScopeStack::new();
        stack.push_context(TagKind::Module, "m");
        assert!(!stack.drop_end_context(&word("endclass")));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn class_scope_pops_twice_on_matching_end() {
        let mut stack = ScopeStack::new();
        // synthetic `Class::method` scope, as pushed by the function/task
        // recognizer when it sees `foo::bar(...)`.
        stack.push_context(TagKind::Class, "foo");
        stack.current_mut().class_scope = true;
        stack.push_context(TagKind::Function, "bar");
        assert_eq!(stack.depth(), 3);
        assert!(stack.drop_end_context(&word("endfunction")));
        // popped the function frame AND the synthetic class_scope frame beneath it
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn prune_empties_to_root() {
        let mut stack = ScopeStack::new();
        stack.push_context(TagKind::Module, "m");
        stack.push_context(TagKind::Task, "m.t");
        stack.prune();
        assert_eq!(stack.depth(), 1);
    }
}
