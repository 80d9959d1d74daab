use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "docstyle-guard")]
#[command(author, version, about = "Document formatting guard - check documents against a house style")]
#[command(long_about = "A tool to check rich-text documents against a formatting template \
    (font, size, indent, line spacing, page margins).\n\n\
    Exit codes:\n  \
    0 - All documents compliant\n  \
    1 - Formatting issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading a rule file, use the built-in house style
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check documents against the formatting template
    Check(CheckArgs),

    /// Generate a default rule file
    Init(InitArgs),

    /// Rule file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Documents to check (JSON document-model files)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to rule file
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the rule file
    #[arg(short, long, default_value = ".docstyle-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing rule file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate rule file syntax
    Validate {
        /// Path to rule file (default: .docstyle-guard.toml)
        #[arg(short, long, default_value = ".docstyle-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective rule set
    Show {
        /// Path to rule file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
