//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for resolved project information
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for jsctx_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for jsctx
#[derive(Parser, Debug)]
#[command(name = "jsctx")]
#[command(author, version, about = "JavaScript project context - configuration and environment")]
#[command(long_about = r#"
jsctx finds the JavaScript project a file belongs to and prints the
configuration other tools consume from it: lint and formatting options,
the targeted environment and the ECMAScript level.

Configuration files are loaded from (in priority order):
1. JSCTX_* environment variables
2. --config <path>     Explicit config file
3. ./jsctx.toml        Project-level config
4. ~/.config/jsctx/config.toml   Global config

Example:
  jsctx env src/app.js
  jsctx -o json lint src/app.js
  jsctx complete src/app.js --offset 120
  jsctx update src/app.js --name .tern-project --create '{"plugins":{"node":{}}}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// What to resolve for a file
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the environment the project targets
    Env {
        /// Any file inside the project
        file: PathBuf,
    },

    /// Print the lint configuration
    Lint {
        /// Any file inside the project
        file: PathBuf,
    },

    /// Print the formatting configuration
    Format {
        /// Any file inside the project
        file: PathBuf,
    },

    /// Print the ECMAScript level
    Ecma {
        /// Any file inside the project
        file: PathBuf,
    },

    /// Print completion proposals at a position in a file
    Complete {
        /// JavaScript file to complete in
        file: PathBuf,

        /// Character offset of the cursor
        #[arg(long)]
        offset: usize,

        /// Prefix to complete (defaults to the identifier before the cursor)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Merge JSON values into a project configuration file
    Update {
        /// Any file inside the project
        file: PathBuf,

        /// Name of the configuration file, e.g. `.tern-project`
        #[arg(long)]
        name: String,

        /// Create the file if it does not exist
        #[arg(long)]
        create: bool,

        /// JSON object to merge
        values: String,
    },
}

impl Command {
    /// The file the command resolves the project from
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Env { file }
            | Command::Lint { file }
            | Command::Format { file }
            | Command::Ecma { file }
            | Command::Complete { file, .. }
            | Command::Update { file, .. } => file,
        }
    }
}
