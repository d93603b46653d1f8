use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use betternotes::fs::ensure_input;
use betternotes::watcher::{watch, WatchEvent, WatchOptions};

use super::{load_config, resolve_output};

pub fn cmd_watch(
    input: &Path,
    output: Option<PathBuf>,
    no_create: bool,
    poll: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(input, config_path)?;
    if no_create {
        config.watch.create_missing = false;
    }
    if poll {
        config.watch.poll = true;
    }
    let output = resolve_output(input, output);

    ensure_input(input, config.watch.create_missing)?;

    let options = WatchOptions {
        input: input.to_path_buf(),
        output,
        render: config.render.clone(),
        poll: config.watch.poll,
        idle: config.watch.idle_interval(),
    };

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !json {
        println!("👀 BetterNotes Watch");
        println!("Press Ctrl+C to stop\n");
    }

    watch(options, running, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(line) = format_event(&timestamp, &event) {
            match event {
                WatchEvent::Error { .. } => eprintln!("{line}"),
                _ => println!("{line}"),
            }
        }
    })?;

    Ok(())
}

/// Human-readable line for a watch event, `None` for silent events.
pub(crate) fn format_event(timestamp: &str, event: &WatchEvent) -> Option<String> {
    match event {
        WatchEvent::WatchStarted {
            input,
            output,
            backend,
        } => Some(format!("📂 Watching: {input} → {output} ({backend})")),
        WatchEvent::FileChanged { path } => Some(format!("[{timestamp}] 📝 Changed: {path}")),
        WatchEvent::RenderStarted => None,
        WatchEvent::RenderComplete {
            title,
            bytes,
            elapsed_ms,
            ..
        } => Some(format!(
            "[{timestamp}] ✓ Rendered \"{title}\" ({}, {elapsed_ms} ms)",
            format_size(*bytes)
        )),
        WatchEvent::Error { message } => Some(format!("[{timestamp}] ✗ Error: {message}")),
        WatchEvent::Shutdown => Some("\n👋 Shutting down...".to_string()),
    }
}

pub(crate) fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_render_complete() {
        let event = WatchEvent::RenderComplete {
            output: "notes.html".to_string(),
            title: "Groups".to_string(),
            bytes: 2048,
            elapsed_ms: 4,
        };
        assert_eq!(
            format_event("10:00:00", &event).unwrap(),
            "[10:00:00] ✓ Rendered \"Groups\" (2.0 KB, 4 ms)"
        );
    }

    #[test]
    fn test_render_started_is_silent() {
        assert_eq!(format_event("10:00:00", &WatchEvent::RenderStarted), None);
    }

    #[test]
    fn test_format_error() {
        let event = WatchEvent::Error {
            message: "permission denied".to_string(),
        };
        assert_eq!(
            format_event("09:30:00", &event).unwrap(),
            "[09:30:00] ✗ Error: permission denied"
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
    }
}
