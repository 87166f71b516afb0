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

use std::fmt::Display;

/// The two supported dialects.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, serde_derive::Serialize)]
pub enum Language {
    Verilog,
    SystemVerilog,
}

impl Language {
    /// Maps a file extension (without the leading dot) to its language, if known.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "v" => Some(Self::Verilog),
            "sv" | "svh" | "svi" => Some(Self::SystemVerilog),
            _ => None,
        }
    }

    /// SystemVerilog is a superset: SystemVerilog-only constructs are simply never
    /// matched by the keyword table when scanning plain Verilog.
    pub fn is_systemverilog(&self) -> bool {
        matches!(self, Self::SystemVerilog)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verilog => write!(f, "verilog"),
            Self::SystemVerilog => write!(f, "systemverilog"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extensions_map_to_expected_language() {
        assert_eq!(Language::from_extension("v"), Some(Language::Verilog));
        assert_eq!(Language::from_extension("sv"), Some(Language::SystemVerilog));
        assert_eq!(Language::from_extension("svh"), Some(Language::SystemVerilog));
        assert_eq!(Language::from_extension("svi"), Some(Language::SystemVerilog));
        assert_eq!(Language::from_extension("vhd"), None);
    }
}
