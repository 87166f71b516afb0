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

//! Scan-time configuration: the two host toggles (qualified-tag emission and
//! per-kind filtering), loadable from a small TOML file the way `cfgfile.rs`
//! loads a manifest.

use crate::lang::Language;
use crate::tag::TagKind;
use serde_derive::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0:?}: {1}")]
    Io(std::path::PathBuf, std::io::Error),
    #[error("failed to parse config file {0:?}: {1}")]
    Toml(std::path::PathBuf, toml::de::Error),
}

/// A disabled kind is never emitted. Empty means "no restriction": every kind is
/// enabled, matching `ScanConfig::default()`.
#[derive(Debug, Clone, Default)]
pub struct KindSet {
    disabled: HashSet<TagKind>,
}

impl KindSet {
    pub fn is_enabled(&self, kind: TagKind) -> bool {
        !self.disabled.contains(&kind)
    }

    pub fn disable(&mut self, kind: TagKind) {
        self.disabled.insert(kind);
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub language: Language,
    /// Off by default.
    pub qualified_tags: bool,
    /// Every kind enabled by default.
    pub enabled_kinds: KindSet,
}

impl ScanConfig {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            qualified_tags: false,
            enabled_kinds: KindSet::default(),
        }
    }

    pub fn is_kind_enabled(&self, kind: TagKind) -> bool {
        self.enabled_kinds.is_enabled(kind)
    }
}

/// On-disk representation of the toggles above, parsed from a `[tags]` table.
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    tags: RawTagsTable,
}

#[derive(Debug, Deserialize, Default)]
struct RawTagsTable {
    #[serde(default)]
    qualified: bool,
    #[serde(default)]
    disabled_kinds: Vec<String>,
}

/// Loads a `ScanConfig` for `language` from a TOML file, falling back to defaults
/// for any field the file doesn't specify.
pub fn load_from_toml(path: &Path, language: Language) -> Result<ScanConfig, ConfigError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let raw: RawConfig =
        toml::from_str(&text).map_err(|e| ConfigError::Toml(path.to_path_buf(), e))?;

    let mut config = ScanConfig::new(language);
    config.qualified_tags = raw.tags.qualified;
    for name in raw.tags.disabled_kinds {
        if let Some(kind) = parse_kind_name(&name) {
            config.enabled_kinds.disable(kind);
        }
    }
    Ok(config)
}

fn parse_kind_name(name: &str) -> Option<TagKind> {
    Some(match name {
        "constant" => TagKind::Constant,
        "event" => TagKind::Event,
        "function" => TagKind::Function,
        "module" => TagKind::Module,
        "net" => TagKind::Net,
        "port" => TagKind::Port,
        "register" => TagKind::Register,
        "task" => TagKind::Task,
        "block" => TagKind::Block,
        "assertion" => TagKind::Assertion,
        "class" => TagKind::Class,
        "covergroup" => TagKind::Covergroup,
        "enum" => TagKind::Enum,
        "interface" => TagKind::Interface,
        "modport" => TagKind::Modport,
        "package" => TagKind::Package,
        "program" => TagKind::Program,
        "prototype" => TagKind::Prototype,
        "property" => TagKind::Property,
        "struct" => TagKind::Struct,
        "typedef" => TagKind::Typedef,
        _ => return None,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_enables_every_kind_and_disables_qualified_tags() {
        let config = ScanConfig::new(Language::SystemVerilog);
        assert!(!config.qualified_tags);
        assert!(config.is_kind_enabled(TagKind::Module));
        assert!(config.is_kind_enabled(TagKind::Class));
    }

    #[test]
    fn disabling_a_kind_suppresses_it_only() {
        let mut config = ScanConfig::new(Language::Verilog);
        config.enabled_kinds.disable(TagKind::Net);
        assert!(!config.is_kind_enabled(TagKind::Net));
        assert!(config.is_kind_enabled(TagKind::Module));
    }
}
