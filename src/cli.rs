//! CLI argument parsing with clap

use crate::flows::Demo;
use clap::Parser;
use std::path::PathBuf;

/// Interactive Menu - walk through multi-level console menus
///
/// Runs a built-in demonstration menu, or any menu described in a TOML
/// definition file. Answer with option indices, `r` to return to the
/// previous step and `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "interactive-menu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a menu definition file (TOML format)
    ///
    /// When specified, the demo selection is ignored.
    #[arg(short = 'C', long, env = "INTERACTIVE_MENU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in menu to run when no definition file is given
    #[arg(short, long, value_enum, default_value_t = Demo::Charts)]
    pub demo: Demo,

    /// Print the confirmed selections as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Print a sample menu definition file and exit
    #[arg(long)]
    pub sample_config: bool,

    /// Directory for log files (logs go to stderr when omitted)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Disable colored prompt output (also honored through `NO_COLOR`)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Definition file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }
}
