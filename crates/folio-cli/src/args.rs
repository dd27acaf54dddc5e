use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Soft-terminal portfolio shell")]
#[command(version)]
pub struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.folio)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Content file replacing the builtin portfolio
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Launch the touch-mode GUI (requires the `gui` feature)
    #[arg(long)]
    pub gui: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PageName {
    Experience,
    Education,
    Projects,
    Certifications,
    Skills,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Shell {
        /// Numbered touch navigation instead of typed commands
        #[arg(long)]
        touch: bool,
    },

    /// Run commands from a fresh session and print the resulting screen
    Exec {
        /// Commands to run in order (e.g. "cd projects" "cd mobile")
        #[arg(required = true)]
        commands: Vec<String>,

        /// Print screens as JSON
        #[arg(long)]
        json: bool,

        /// Print the screen after every command, not only the last
        #[arg(long)]
        each: bool,
    },

    /// Print a document page
    Page {
        #[arg(value_enum)]
        name: PageName,
    },

    /// Print the directory tree
    Tree,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., shell.mode)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., shell.mode)
        key: String,

        /// Value to set (e.g., "touch")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
