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

use crate::position::Position;
use serde_derive::Serialize;
use std::fmt::Display;

/// The externally-visible category of a tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TagKind {
    // Verilog subset
    Constant,
    Event,
    Function,
    Module,
    Net,
    Port,
    Register,
    Task,
    Block,
    // SystemVerilog additions
    Assertion,
    Class,
    Covergroup,
    Enum,
    Interface,
    Modport,
    Package,
    Program,
    Prototype,
    Property,
    Struct,
    Typedef,
}

impl TagKind {
    /// Kinds that admit a body and therefore create a scope. `Typedef` and `Enum`
    /// are containers only transiently: the emitter creates and immediately drops
    /// their scope since this scanner never lets a body follow them.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Module
                | Self::Interface
                | Self::Class
                | Self::Function
                | Self::Task
                | Self::Block
                | Self::Package
                | Self::Program
                | Self::Property
                | Self::Covergroup
                | Self::Typedef
                | Self::Enum
                | Self::Struct
                | Self::Modport
        )
    }

    /// Containers whose scope is dropped immediately after creation because this
    /// scanner never recognizes a body following them.
    pub fn is_transient_container(&self) -> bool {
        matches!(self, Self::Typedef | Self::Enum | Self::Struct)
    }

    /// The `end<kind>` keyword text this container is closed by, for kinds that
    /// follow the regular `end` + kind-name pattern.
    pub fn end_keyword(&self) -> Option<&'static str> {
        Some(match self {
            Self::Module => "endmodule",
            Self::Interface => "endinterface",
            Self::Class => "endclass",
            Self::Function => "endfunction",
            Self::Task => "endtask",
            Self::Package => "endpackage",
            Self::Program => "endprogram",
            Self::Property => "endproperty",
            Self::Modport => return None,
            _ => return None,
        })
    }
}

impl Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Constant => "constant",
            Self::Event => "event",
            Self::Function => "function",
            Self::Module => "module",
            Self::Net => "net",
            Self::Port => "port",
            Self::Register => "register",
            Self::Task => "task",
            Self::Block => "block",
            Self::Assertion => "assertion",
            Self::Class => "class",
            Self::Covergroup => "covergroup",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Modport => "modport",
            Self::Package => "package",
            Self::Program => "program",
            Self::Prototype => "prototype",
            Self::Property => "property",
            Self::Struct => "struct",
            Self::Typedef => "typedef",
        };
        write!(f, "{}", s)
    }
}

/// One emitted tag record.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub position: Position,
    /// Dotted path of the enclosing scope, e.g. `"m"` or `"pkg.Cls"`; absent at root.
    pub scope_name: Option<String>,
    pub scope_kind: Option<TagKind>,
    /// Base class name, set only on `class` tags that used `extends`.
    pub inheritance: Option<String>,
    /// True iff this came from an overridable `parameter` declaration (as opposed
    /// to `localparam`).
    pub parameter_attribute: bool,
    /// True when this is the second, fully-qualified emission of a tag; `name` is
    /// then the full dotted path.
    pub qualified: bool,
}

impl Tag {
    pub fn fully_qualified_name(&self) -> String {
        match &self.scope_name {
            Some(scope) => format!("{}.{}", scope, self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fully_qualified_name_joins_scope_and_name() {
        let tag = Tag {
            name: "t".to_string(),
            kind: TagKind::Task,
            position: Position::new(),
            scope_name: Some("m".to_string()),
            scope_kind: Some(TagKind::Module),
            inheritance: None,
            parameter_attribute: false,
            qualified: false,
        };
        assert_eq!(tag.fully_qualified_name(), "m.t");
    }

    #[test]
    fn fully_qualified_name_at_root_is_just_name() {
        let tag = Tag {
            name: "m".to_string(),
            kind: TagKind::Module,
            position: Position::new(),
            scope_name: None,
            scope_kind: None,
            inheritance: None,
            parameter_attribute: false,
            qualified: false,
        };
        assert_eq!(tag.fully_qualified_name(), "m");
    }
}
