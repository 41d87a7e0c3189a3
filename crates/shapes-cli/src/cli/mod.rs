//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No geometry lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shapes_core::domain::MessageFormat;

use crate::error::{CliError, CliResult};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shapes",
    bin_name = "shapes",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{25a0} Shape area calculator",
    long_about = "Computes and formats the total area of a collection of shapes \
                  (square, circle, equilateral triangle, rectangle, cube).",
    after_help = "EXAMPLES:\n\
        \x20 shapes total --set ocp --format all\n\
        \x20 shapes total --file shapes.toml --format json\n\
        \x20 shapes area circle --radius 50\n\
        \x20 shapes demo lsp\n\
        \x20 shapes completions bash > /usr/share/bash-completion/completions/shapes",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and print the total area of a shape collection.
    #[command(
        visible_alias = "t",
        about = "Print the total area of a shape collection",
        after_help = "EXAMPLES:\n\
            \x20 shapes total                       # default set and format from config\n\
            \x20 shapes total --set isp --format html\n\
            \x20 shapes total --file shapes.json --format all"
    )]
    Total(TotalArgs),

    /// Compute the area (and volume) of a single shape.
    #[command(
        visible_alias = "a",
        about = "Print the area of one shape",
        after_help = "EXAMPLES:\n\
            \x20 shapes area square --side 100\n\
            \x20 shapes area circle --diameter 100\n\
            \x20 shapes area rectangle --height 100 --width 200\n\
            \x20 shapes area cube --side 100"
    )]
    Area(AreaArgs),

    /// List the built-in shape sets.
    #[command(
        visible_alias = "ls",
        about = "List built-in shape sets",
        after_help = "EXAMPLES:\n\
            \x20 shapes list\n\
            \x20 shapes list --format csv"
    )]
    List(ListArgs),

    /// Replay one of the SOLID principle demos.
    #[command(
        about = "Run a SOLID principle demo",
        after_help = "EXAMPLES:\n\
            \x20 shapes demo first-design\n\
            \x20 shapes demo dip"
    )]
    Demo(DemoArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shapes init           # default location\n\
            \x20 shapes init --local   # .shapes.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shapes completions bash > ~/.local/share/bash-completion/completions/shapes\n\
            \x20 shapes completions zsh  > ~/.zfunc/_shapes\n\
            \x20 shapes completions fish > ~/.config/fish/completions/shapes.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shapes config get defaults.format\n\
            \x20 shapes config list\n\
            \x20 shapes config path"
    )]
    Config(ConfigCommands),
}

// ── total ─────────────────────────────────────────────────────────────────────

/// Arguments for `shapes total`.
#[derive(Debug, Args)]
pub struct TotalArgs {
    /// Built-in shape set (see `shapes list`).
    #[arg(
        short = 's',
        long = "set",
        value_name = "NAME",
        conflicts_with = "file",
        help = "Built-in shape set to total"
    )]
    pub set: Option<String>,

    /// Shape file (.toml or .json).
    #[arg(
        long = "file",
        value_name = "PATH",
        help = "Load shapes from a TOML or JSON file"
    )]
    pub file: Option<PathBuf>,

    /// Output template; defaults to `defaults.format` from config.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Output format for the total"
    )]
    pub format: Option<FormatChoice>,
}

/// Which messenger(s) to render the total with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    /// `Total Area: N`
    Text,
    /// `{ "Total Area" : N }`
    Json,
    /// `<span>...</span>` markup.
    Html,
    /// Every format, one per line.
    All,
}

impl FormatChoice {
    /// Message formats to render, in output order.
    pub fn formats(self) -> Vec<MessageFormat> {
        match self {
            Self::Text => vec![MessageFormat::Text],
            Self::Json => vec![MessageFormat::Json],
            Self::Html => vec![MessageFormat::Html],
            Self::All => MessageFormat::ALL.to_vec(),
        }
    }

    /// Parse the `defaults.format` config value.
    ///
    /// Anything but `all` goes through [`MessageFormat`]'s parser, so the
    /// config also accepts its aliases (`txt`, `plain`).
    pub fn from_config(value: &str) -> CliResult<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match value.parse::<MessageFormat>() {
            Ok(MessageFormat::Text) => Ok(Self::Text),
            Ok(MessageFormat::Json) => Ok(Self::Json),
            Ok(MessageFormat::Html) => Ok(Self::Html),
            Err(e) => Err(CliError::ConfigError {
                message: format!(
                    "Invalid defaults.format '{value}' (expected text, json, html or all)"
                ),
                source: Some(Box::new(e)),
            }),
        }
    }
}

// ── area ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapes area`.
#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Shape kind: square, circle, equilateral-triangle, rectangle, cube.
    #[arg(value_name = "KIND", help = "Shape kind")]
    pub kind: String,

    #[arg(long, allow_negative_numbers = true, help = "Side length")]
    pub side: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with = "diameter",
        help = "Circle radius"
    )]
    pub radius: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Circle diameter")]
    pub diameter: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Rectangle height")]
    pub height: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Rectangle width")]
    pub width: Option<f64>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapes list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapes demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Which principle to demonstrate.
    #[arg(value_enum, help = "Demo to run")]
    pub principle: Principle,
}

/// The six demo programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Principle {
    /// Single class, switch on kind.
    FirstDesign,
    /// Single responsibility: calculator and formatter split.
    Srp,
    /// Open/closed: one type per shape.
    Ocp,
    /// Liskov substitution: resizing rectangles.
    Lsp,
    /// Interface segregation: area vs. volume.
    Isp,
    /// Dependency inversion: injected messengers.
    Dip,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapes init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.shapes.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shapes completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shapes config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.format`.
        key: String,
    },

    /// Print the whole effective configuration.
    List,

    /// Print the default configuration file path.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
