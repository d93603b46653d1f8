use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use betternotes::HtmlPayload;

use super::load_config;

pub fn cmd_embed(config_path: Option<&Path>) -> Result<()> {
    // No document path here; "." makes the sidecar lookup use the cwd.
    let config = load_config(Path::new("."), config_path)?;

    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read Markdown from stdin")?;

    println!("{}", HtmlPayload::render(&source, &config.render).to_json()?);

    Ok(())
}
