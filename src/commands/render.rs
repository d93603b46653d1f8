use std::path::{Path, PathBuf};

use anyhow::Result;
use betternotes::fs::ensure_input;
use betternotes::render_file;
use betternotes::WatchEvent;

use super::{load_config, resolve_output};

pub fn cmd_render(
    input: &Path,
    output: Option<PathBuf>,
    no_create: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(input, config_path)?;
    if no_create {
        config.watch.create_missing = false;
    }
    let output = resolve_output(input, output);

    ensure_input(input, config.watch.create_missing)?;
    let report = render_file(input, &output, &config.render)?;

    if json {
        let event = WatchEvent::RenderComplete {
            output: output.display().to_string(),
            title: report.title,
            bytes: report.bytes,
            elapsed_ms: report.elapsed.as_millis() as u64,
        };
        println!("{}", event.to_json());
    } else {
        println!(
            "✓ Rendered {} → {} (\"{}\", {})",
            input.display(),
            output.display(),
            report.title,
            super::watch::format_size(report.bytes)
        );
    }

    Ok(())
}
