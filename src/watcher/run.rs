//! Watch loop and notification backend

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, PollWatcher, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{NotesError, NotesResult};
use crate::render::render_file;

use super::event::{Backend, Trigger, WatchEvent, WatchOptions, WatchTarget};

/// Render `options.input` now and again after every save until `running`
/// is cleared.
pub fn watch(
    options: WatchOptions,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> NotesResult<()> {
    let target = WatchTarget::new(&options.input)?;
    if same_file(target.canonical(), &options.output) {
        return Err(NotesError::Io(std::io::Error::other(format!(
            "output {} would overwrite the watched input",
            options.output.display()
        ))));
    }

    let (tx, rx) = channel();
    // Held for the lifetime of the loop; dropping it stops notifications.
    let (_watcher, backend) = start_backend(target.directory(), options.poll, options.idle, tx)?;

    event_callback(WatchEvent::WatchStarted {
        input: options.input.display().to_string(),
        output: options.output.display().to_string(),
        backend: backend.as_str().to_string(),
    });

    let runs = drive(&rx, &target, &running, options.idle, |trigger| {
        if let Trigger::Modified(path) = trigger {
            event_callback(WatchEvent::FileChanged {
                path: path.display().to_string(),
            });
        }
        render_once(&options, &event_callback);
    });

    tracing::debug!(runs, "watch loop finished");
    event_callback(WatchEvent::Shutdown);
    Ok(())
}

/// Core loop: one startup invocation, then one per matching event.
///
/// Returns the number of invocations. Exits when `running` is cleared or the
/// event channel disconnects.
pub(crate) fn drive(
    rx: &Receiver<PathBuf>,
    target: &WatchTarget,
    running: &AtomicBool,
    idle: Duration,
    mut on_trigger: impl FnMut(Trigger),
) -> usize {
    on_trigger(Trigger::Startup);
    let mut runs = 1;

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(idle) {
            Ok(path) => {
                if target.matches(&path) {
                    on_trigger(Trigger::Modified(path));
                    runs += 1;
                } else {
                    tracing::trace!(path = %path.display(), "ignoring unrelated change");
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::debug!("event channel closed");
                break;
            }
        }
    }

    runs
}

fn render_once(options: &WatchOptions, callback: &impl Fn(WatchEvent)) {
    callback(WatchEvent::RenderStarted);
    match render_file(&options.input, &options.output, &options.render) {
        Ok(report) => callback(WatchEvent::RenderComplete {
            output: options.output.display().to_string(),
            title: report.title,
            bytes: report.bytes,
            elapsed_ms: report.elapsed.as_millis() as u64,
        }),
        // Retried in full on the next save.
        Err(e) => {
            tracing::warn!(error = %e, "render failed");
            callback(WatchEvent::Error {
                message: e.to_string(),
            });
        }
    }
}

/// Native notifications when available, polling otherwise.
fn start_backend(
    dir: &Path,
    force_poll: bool,
    interval: Duration,
    tx: Sender<PathBuf>,
) -> NotesResult<(Box<dyn Watcher>, Backend)> {
    if !force_poll {
        match RecommendedWatcher::new(forward_changes(tx.clone()), Config::default()) {
            Ok(mut watcher) => match watcher.watch(dir, RecursiveMode::NonRecursive) {
                Ok(()) => {
                    tracing::debug!(dir = %dir.display(), "using native file notifications");
                    return Ok((Box::new(watcher), Backend::Native));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "native watch failed, falling back to polling");
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "native watcher unavailable, falling back to polling");
            }
        }
    }

    let mut watcher = PollWatcher::new(
        forward_changes(tx),
        Config::default().with_poll_interval(interval),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    tracing::debug!(dir = %dir.display(), ?interval, "polling for changes");
    Ok((Box::new(watcher), Backend::Polling))
}

/// Forward the paths of content-changing events into the loop's channel.
fn forward_changes(tx: Sender<PathBuf>) -> impl Fn(notify::Result<Event>) + Send + 'static {
    move |res| match res {
        Ok(event) if is_content_change(&event.kind) => {
            for path in event.paths {
                let _ = tx.send(path);
            }
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "watch backend error"),
    }
}

/// Writes and atomic saves (create or rename onto the path) count.
pub(crate) fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}

fn same_file(canonical_input: &Path, output: &Path) -> bool {
    output
        .canonicalize()
        .map(|o| o == canonical_input)
        .unwrap_or(false)
}
