//! BetterNotes CLI - live Markdown note renderer
//!
//! Usage: betternotes <COMMAND>
//!
//! Commands:
//!   watch   Render a document now and on every save
//!   render  Render a document once
//!   embed   Render stdin to a JSON object on stdout
//!   serve   Serve the same conversion over HTTP

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Watch {
            input,
            output,
            no_create,
            poll,
        } => commands::watch::cmd_watch(&input, output, no_create, poll, config, cli.json),
        Commands::Render {
            input,
            output,
            no_create,
        } => commands::render::cmd_render(&input, output, no_create, config, cli.json),
        Commands::Embed => commands::embed::cmd_embed(config),
        Commands::Serve { host, port } => commands::serve::cmd_serve(host, port, config, cli.json),
    }
}
