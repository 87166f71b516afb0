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

use crate::keyword::ParserKind;
use crate::position::Position;
use crate::tag::TagKind;

/// A word read off the char stream and classified: the unit passed between the
/// reader and the recognizers.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub kind: ParserKind,
    pub name: String,
    pub position: Position,
}

impl Word {
    pub fn empty(position: Position) -> Self {
        Self {
            kind: ParserKind::Undefined,
            name: String::new(),
            position,
        }
    }
}

/// A scope frame on the scope stack. One frame is pushed per container tag and
/// popped when its matching `end*` is recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeFrame {
    /// `None` only for the sentinel root (parser kind `UNDEFINED`).
    pub kind: Option<TagKind>,
    pub local_name: String,
    /// Dot-joined path from the root, computed once at push time.
    pub qualified_name: String,
    /// Unnamed `begin`/`end` nesting depth; meaningful only while `kind == Block`.
    pub nest_level: u32,
    /// Tag kind of the most recently emitted direct child (advisory).
    pub last_kind: Option<TagKind>,
    /// Most recent `: label` seen directly in this scope.
    pub block_name: Option<String>,
    /// Base class name, set when `extends` was seen on a `class` frame.
    pub inheritance: Option<String>,
    /// True between an `extern`/`pure`/`typedef class` hint and the next `;`.
    pub prototype: bool,
    /// Marks a synthesized `Class::method` out-of-body scope, to be popped a second
    /// time by `dropEndContext`.
    pub class_scope: bool,
    /// True once this frame's own `#(...)` parameter list has been fully consumed.
    pub has_param_list: bool,
}

impl ScopeFrame {
    pub fn root() -> Self {
        Self {
            kind: None,
            local_name: String::new(),
            qualified_name: String::new(),
            nest_level: 0,
            last_kind: None,
            block_name: None,
            inheritance: None,
            prototype: false,
            class_scope: false,
            has_param_list: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.kind.is_none() && self.qualified_name.is_empty()
    }

    /// Builds the child frame for a newly discovered container tag: its qualified
    /// name joins the parent's by `.`.
    pub fn child(&self, kind: TagKind, local_name: &str) -> Self {
        let qualified_name = if self.qualified_name.is_empty() {
            local_name.to_string()
        } else {
            format!("{}.{}", self.qualified_name, local_name)
        };
        Self {
            kind: Some(kind),
            local_name: local_name.to_string(),
            qualified_name,
            nest_level: 0,
            last_kind: None,
            block_name: None,
            inheritance: None,
            prototype: false,
            class_scope: false,
            has_param_list: false,
        }
    }
}
