use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "revu", version, about = "AI-powered code review CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Color mode
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review one code snippet and exit
    Review {
        /// File containing the code to review (omit to read stdin)
        file: Option<String>,

        /// Read the API key from this file instead of prompting
        #[arg(long)]
        key_file: Option<String>,

        /// Model to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },

    /// Start an interactive review session
    Session {
        /// Read the API key from this file instead of prompting
        #[arg(long)]
        key_file: Option<String>,

        /// Model to use instead of the default
        #[arg(long)]
        model: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
