//! Menu definition files
//!
//! A definition describes every level of a stack up front so the whole
//! walk runs without caller code between steps.

use crate::console::Console;
use crate::menu::{Level, MenuStack};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One level in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Prompt heading; the default title is used when omitted
    #[serde(default)]
    pub title: Option<String>,

    /// Result key; unkeyed levels are asked but left out of the results
    #[serde(default)]
    pub key: Option<String>,

    /// Option labels in display order
    pub options: Vec<String>,

    /// Accept several indices at once
    #[serde(default)]
    pub multiple: bool,
}

impl LevelDefinition {
    fn to_level(&self) -> Level {
        let mut level = Level::new()
            .with_options(self.options.iter().cloned())
            .with_multiple(self.multiple);
        if let Some(title) = &self.title {
            level = level.with_title(title.clone());
        }
        if let Some(key) = &self.key {
            level = level.with_key(key.clone());
        }
        level
    }
}

/// A complete menu, level by level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default)]
    pub levels: Vec<LevelDefinition>,
}

impl MenuDefinition {
    /// Load and validate a definition from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let definition: MenuDefinition =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        definition.validate()?;
        Ok(definition)
    }

    /// Check that there is at least one level and every level has options
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        if let Some(index) = self.levels.iter().position(|l| l.options.is_empty()) {
            return Err(ConfigError::EmptyLevel { index });
        }
        Ok(())
    }

    /// Build a ready-to-ask stack from this definition
    pub fn build<C: Console>(&self, console: C) -> MenuStack<C> {
        let levels = self.levels.iter().map(LevelDefinition::to_level).collect();
        MenuStack::from_levels(console, levels)
    }

    /// Generate a sample definition file content
    pub fn sample() -> String {
        r#"# Interactive menu definition
# This file uses TOML format (https://toml.io)
#
# Each [[levels]] table is one step of the menu, asked in order.
#   title    - heading shown above the options (optional)
#   key      - name of the answer in the final results (optional;
#              unkeyed levels are asked but not reported)
#   options  - labels, selected by their index starting at 0
#   multiple - accept several indices such as "0 2,3" (default false)

[[levels]]
title = "Select a Data File"
key = "file"
options = ["data1.csv", "data2.json", "data3.txt"]

[[levels]]
title = "Select a Class"
key = "class_name"
options = ["A", "B", "C"]

[[levels]]
title = "Select Chart Types"
key = "chart_type_list"
options = ["Line Chart", "Bar Chart", "Scatter Plot", "Pie Chart"]
multiple = true
"#
        .to_string()
    }
}

/// Errors that can occur when loading a menu definition
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the definition file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the definition file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The definition has no `[[levels]]`
    NoLevels,
    /// A level has no options
    EmptyLevel { index: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read menu file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse menu file '{}': {}", path.display(), source)
            }
            ConfigError::NoLevels => write!(f, "Menu definition has no levels"),
            ConfigError::EmptyLevel { index } => {
                write!(f, "Menu level {} has no options", index + 1)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::NoLevels | ConfigError::EmptyLevel { .. } => None,
        }
    }
}
