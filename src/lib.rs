//! Interactive Menu - a builder for multi-level console menus
//!
//! This library walks a user through a chain of selection steps with
//! plain text prompts:
//! - Single- and multi-choice levels configured fluently
//! - Return to the previous level, restart, or resume at the last one
//! - Keyed answers flattened into one ordered result map
//! - Pluggable console I/O and diagnostics
//! - Menus described up front in TOML definition files

pub mod cli;
pub mod config;
pub mod console;
pub mod diagnostics;
pub mod error;
pub mod flows;
pub mod menu;

pub use cli::Cli;
pub use config::{ConfigError, LevelDefinition, MenuDefinition};
pub use console::{Console, LineKind, ScriptedConsole, Terminal};
pub use diagnostics::{Diagnostics, Silent, TracingDiagnostics};
pub use error::{Error, Result};
pub use flows::Demo;
pub use menu::{Level, MenuStack, MenuValue, Outcome, Selections};
