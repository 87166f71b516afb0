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

//! Keyword tables: every reserved word is associated with a [`ParserKind`],
//! distinguishing "syntactic-interest" keywords (those that drive a recognizer)
//! from "bulk noise" keywords (mapped to [`ParserKind::Ignore`]).

use crate::lang::Language;
use crate::tag::TagKind;
use serde_derive::Serialize;
use std::fmt::Display;

/// Internal control tokens plus every externally visible tag category, collapsed
/// into a single tagged variant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum ParserKind {
    Ignore,
    Define,
    Directive,
    Begin,
    /// Plain `end`, closing the nearest unlabeled-or-labeled `begin`.
    End,
    /// `end<kind>` (`endmodule`, `endclass`, ..., `endgroup`), closing a container.
    EndDe,
    Identifier,
    Localparam,
    Parameter,
    Undefined,
    Tag(TagKind),
}

impl ParserKind {
    pub fn as_tag_kind(&self) -> Option<TagKind> {
        match self {
            Self::Tag(k) => Some(*k),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Keyword {
    Module,
    Endmodule,
    Interface,
    Endinterface,
    Package,
    Endpackage,
    Program,
    Endprogram,
    Property,
    Endproperty,
    Covergroup,
    Endgroup,
    Modport,
    Class,
    Endclass,
    Extends,
    Implements,
    Function,
    Endfunction,
    Task,
    Endtask,
    Typedef,
    Enum,
    Struct,
    Union,
    Packed,
    Signed,
    Unsigned,
    Parameter,
    Localparam,
    Specparam,
    Input,
    Output,
    Inout,
    Ref,
    Wire,
    Tri,
    Tri0,
    Tri1,
    Wand,
    Wor,
    Triand,
    Trior,
    Uwire,
    Supply0,
    Supply1,
    Reg,
    Logic,
    Bit,
    Integer,
    Real,
    Realtime,
    Shortreal,
    Time,
    Byte,
    Shortint,
    Int,
    Longint,
    Chandle,
    String,
    Event,
    Genvar,
    Generate,
    Endgenerate,
    Begin,
    End,
    Extern,
    Pure,
    Virtual,
    Automatic,
    Static,
    Const,
    Var,
    Import,
    Export,
    Assert,
    Assume,
    Cover,
    Expect,
    Sequence,
    Endsequence,
    Clocking,
    Endclocking,
    Primitive,
    Endprimitive,
    Specify,
    Endspecify,
    Table,
    Endtable,
    Config,
    Endconfig,
    Checker,
    Endchecker,
    If,
    Else,
    Case,
    Casex,
    Casez,
    Endcase,
    Default,
    For,
    While,
    Repeat,
    Forever,
    Fork,
    Join,
    Always,
    AlwaysComb,
    AlwaysFf,
    AlwaysLatch,
    Initial,
    Assign,
    Deassign,
    Force,
    Release,
    Disable,
    Wait,
    Posedge,
    Negedge,
    Defparam,
    Bind,
    New,
    This,
    Super,
    Null,
    Void,
    Foreach,
    Break,
    Continue,
    Return,
}

impl Keyword {
    /// Attempts to match `s` to a known keyword, case-sensitively (unlike VHDL,
    /// Verilog/SystemVerilog keywords are case-sensitive).
    pub fn match_keyword(s: &str) -> Option<Self> {
        Some(match s {
            "module" => Self::Module,
            "endmodule" => Self::Endmodule,
            "interface" => Self::Interface,
            "endinterface" => Self::Endinterface,
            "package" => Self::Package,
            "endpackage" => Self::Endpackage,
            "program" => Self::Program,
            "endprogram" => Self::Endprogram,
            "property" => Self::Property,
            "endproperty" => Self::Endproperty,
            "covergroup" => Self::Covergroup,
            "endgroup" => Self::Endgroup,
            "modport" => Self::Modport,
            "class" => Self::Class,
            "endclass" => Self::Endclass,
            "extends" => Self::Extends,
            "implements" => Self::Implements,
            "function" => Self::Function,
            "endfunction" => Self::Endfunction,
            "task" => Self::Task,
            "endtask" => Self::Endtask,
            "typedef" => Self::Typedef,
            "enum" => Self::Enum,
            "struct" => Self::Struct,
            "union" => Self::Union,
            "packed" => Self::Packed,
            "signed" => Self::Signed,
            "unsigned" => Self::Unsigned,
            "parameter" => Self::Parameter,
            "localparam" => Self::Localparam,
            "specparam" => Self::Specparam,
            "input" => Self::Input,
            "output" => Self::Output,
            "inout" => Self::Inout,
            "ref" => Self::Ref,
            "wire" => Self::Wire,
            "tri" => Self::Tri,
            "tri0" => Self::Tri0,
            "tri1" => Self::Tri1,
            "wand" => Self::Wand,
            "wor" => Self::Wor,
            "triand" => Self::Triand,
            "trior" => Self::Trior,
            "uwire" => Self::Uwire,
            "supply0" => Self::Supply0,
            "supply1" => Self::Supply1,
            "reg" => Self::Reg,
            "logic" => Self::Logic,
            "bit" => Self::Bit,
            "integer" => Self::Integer,
            "real" => Self::Real,
            "realtime" => Self::Realtime,
            "shortreal" => Self::Shortreal,
            "time" => Self::Time,
            "byte" => Self::Byte,
            "shortint" => Self::Shortint,
            "int" => Self::Int,
            "longint" => Self::Longint,
            "chandle" => Self::Chandle,
            "string" => Self::String,
            "event" => Self::Event,
            "genvar" => Self::Genvar,
            "generate" => Self::Generate,
            "endgenerate" => Self::Endgenerate,
            "begin" => Self::Begin,
            "end" => Self::End,
            "extern" => Self::Extern,
            "pure" => Self::Pure,
            "virtual" => Self::Virtual,
            "automatic" => Self::Automatic,
            "static" => Self::Static,
            "const" => Self::Const,
            "var" => Self::Var,
            "import" => Self::Import,
            "export" => Self::Export,
            "assert" => Self::Assert,
            "assume" => Self::Assume,
            "cover" => Self::Cover,
            "expect" => Self::Expect,
            "sequence" => Self::Sequence,
            "endsequence" => Self::Endsequence,
            "clocking" => Self::Clocking,
            "endclocking" => Self::Endclocking,
            "primitive" => Self::Primitive,
            "endprimitive" => Self::Endprimitive,
            "specify" => Self::Specify,
            "endspecify" => Self::Endspecify,
            "table" => Self::Table,
            "endtable" => Self::Endtable,
            "config" => Self::Config,
            "endconfig" => Self::Endconfig,
            "checker" => Self::Checker,
            "endchecker" => Self::Endchecker,
            "if" => Self::If,
            "else" => Self::Else,
            "case" => Self::Case,
            "casex" => Self::Casex,
            "casez" => Self::Casez,
            "endcase" => Self::Endcase,
            "default" => Self::Default,
            "for" => Self::For,
            "while" => Self::While,
            "repeat" => Self::Repeat,
            "forever" => Self::Forever,
            "fork" => Self::Fork,
            "join" | "join_any" | "join_none" => Self::Join,
            "always" => Self::Always,
            "always_comb" => Self::AlwaysComb,
            "always_ff" => Self::AlwaysFf,
            "always_latch" => Self::AlwaysLatch,
            "initial" => Self::Initial,
            "assign" => Self::Assign,
            "deassign" => Self::Deassign,
            "force" => Self::Force,
            "release" => Self::Release,
            "disable" => Self::Disable,
            "wait" => Self::Wait,
            "posedge" => Self::Posedge,
            "negedge" => Self::Negedge,
            "defparam" => Self::Defparam,
            "bind" => Self::Bind,
            "new" => Self::New,
            "this" => Self::This,
            "super" => Self::Super,
            "null" => Self::Null,
            "void" => Self::Void,
            "foreach" => Self::Foreach,
            "break" => Self::Break,
            "continue" => Self::Continue,
            "return" => Self::Return,
            _ => return None,
        })
    }

    /// Design elements and container keywords are Verilog-2001+ or SystemVerilog
    /// only; everything else (behavioral noise, data types present since Verilog-95)
    /// is valid in both dialects. Plain Verilog simply never matches the
    /// SystemVerilog-only keywords since they don't appear in `.v` source.
    pub fn is_valid_for(&self, language: Language) -> bool {
        if language.is_systemverilog() {
            return true;
        }
        !matches!(
            self,
            Self::Interface
                | Self::Endinterface
                | Self::Package
                | Self::Endpackage
                | Self::Program
                | Self::Endprogram
                | Self::Property
                | Self::Endproperty
                | Self::Covergroup
                | Self::Endgroup
                | Self::Modport
                | Self::Class
                | Self::Endclass
                | Self::Extends
                | Self::Implements
                | Self::Typedef
                | Self::Struct
                | Self::Union
                | Self::Packed
                | Self::Logic
                | Self::Bit
                | Self::Shortreal
                | Self::Byte
                | Self::Shortint
                | Self::Int
                | Self::Longint
                | Self::Chandle
                | Self::String
                | Self::AlwaysComb
                | Self::AlwaysFf
                | Self::AlwaysLatch
                | Self::Automatic
                | Self::Static
                | Self::Const
                | Self::Var
                | Self::Import
                | Self::Export
                | Self::Assert
                | Self::Assume
                | Self::Cover
                | Self::Expect
                | Self::Sequence
                | Self::Endsequence
                | Self::Clocking
                | Self::Endclocking
                | Self::Checker
                | Self::Endchecker
                | Self::Uwire
                | Self::New
                | Self::This
                | Self::Super
                | Self::Null
                | Self::Void
                | Self::Foreach
        )
    }

    /// Classifies a keyword into its [`ParserKind`].
    pub fn classify(&self) -> ParserKind {
        use ParserKind::*;
        match self {
            Self::Module => Tag(TagKind::Module),
            Self::Interface => Tag(TagKind::Interface),
            Self::Package => Tag(TagKind::Package),
            Self::Program => Tag(TagKind::Program),
            Self::Property => Tag(TagKind::Property),
            Self::Covergroup => Tag(TagKind::Covergroup),
            Self::Modport => Tag(TagKind::Modport),
            Self::Class => Tag(TagKind::Class),
            Self::Function => Tag(TagKind::Function),
            Self::Task => Tag(TagKind::Task),
            Self::Typedef => Tag(TagKind::Typedef),
            Self::Enum => Tag(TagKind::Enum),
            Self::Struct | Self::Union => Tag(TagKind::Struct),
            Self::Event => Tag(TagKind::Event),

            Self::Wire
            | Self::Tri
            | Self::Tri0
            | Self::Tri1
            | Self::Wand
            | Self::Wor
            | Self::Triand
            | Self::Trior
            | Self::Uwire
            | Self::Supply0
            | Self::Supply1 => Tag(TagKind::Net),

            Self::Reg | Self::Logic | Self::Bit | Self::Integer | Self::Real
            | Self::Realtime | Self::Shortreal | Self::Time | Self::Byte
            | Self::Shortint | Self::Int | Self::Longint | Self::Chandle | Self::String => {
                Tag(TagKind::Register)
            }

            Self::Input | Self::Output | Self::Inout | Self::Ref => Tag(TagKind::Port),

            Self::Parameter => Parameter,
            Self::Localparam | Self::Specparam => Localparam,

            Self::Begin => Begin,
            Self::End => End,
            Self::Endmodule
            | Self::Endinterface
            | Self::Endpackage
            | Self::Endprogram
            | Self::Endproperty
            | Self::Endgroup
            | Self::Endclass
            | Self::Endfunction
            | Self::Endtask
            | Self::Endgenerate
            | Self::Endcase
            | Self::Endsequence
            | Self::Endclocking
            | Self::Endprimitive
            | Self::Endspecify
            | Self::Endtable
            | Self::Endconfig
            | Self::Endchecker => EndDe,

            _ => Ignore,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolves a word to its [`ParserKind`] for a given language: a keyword-table
/// lookup, then the identifier/directive fallback.
pub fn lookup(word: &str, language: Language) -> ParserKind {
    match Keyword::match_keyword(word) {
        Some(kw) if kw.is_valid_for(language) => kw.classify(),
        _ => {
            if word.starts_with(crate::charset::GRAVE_ACCENT) {
                if word == "`define" {
                    ParserKind::Define
                } else {
                    ParserKind::Directive
                }
            } else {
                ParserKind::Identifier
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn module_classifies_as_design_element() {
        assert_eq!(lookup("module", Language::Verilog), ParserKind::Tag(TagKind::Module));
    }

    #[test]
    fn sv_only_keyword_is_identifier_in_plain_verilog() {
        // `class` isn't valid Verilog-95/2001 syntax; a plain .v scanner should
        // treat the word as an ordinary identifier rather than a container keyword.
        assert_eq!(lookup("class", Language::Verilog), ParserKind::Identifier);
        assert_eq!(
            lookup("class", Language::SystemVerilog),
            ParserKind::Tag(TagKind::Class)
        );
    }

    #[test]
    fn unknown_word_is_identifier() {
        assert_eq!(lookup("my_signal", Language::Verilog), ParserKind::Identifier);
    }

    #[test]
    fn noise_keyword_is_ignored() {
        assert_eq!(lookup("always", Language::Verilog), ParserKind::Ignore);
    }
}
