//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --quiet, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BetterNotes - live Markdown note renderer
#[derive(Parser, Debug)]
#[command(name = "betternotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of human-readable lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: betternotes.toml next to the input)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the document now and again on every save
    Watch {
        /// Markdown document to watch
        input: PathBuf,

        /// HTML output (default: input with an .html extension)
        output: Option<PathBuf>,

        /// Fail instead of creating a missing input file
        #[arg(long)]
        no_create: bool,

        /// Poll for changes instead of using native notifications
        #[arg(long)]
        poll: bool,
    },

    /// Render the document once and exit
    Render {
        /// Markdown document to render
        input: PathBuf,

        /// HTML output (default: input with an .html extension)
        output: Option<PathBuf>,

        /// Fail instead of creating a missing input file
        #[arg(long)]
        no_create: bool,
    },

    /// Read Markdown from stdin and print {"html_content": ...} as JSON
    Embed,

    /// Serve POST /convert ({"md_content": ...} → {"html_content": ...})
    Serve {
        /// Host to bind to (default: 127.0.0.1)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on (default: 5000, 0 picks a free port)
        #[arg(short = 'P', long)]
        port: Option<u16>,
    },
}
