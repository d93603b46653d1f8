//! File helpers for the watched document and its rendering

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NotesError, NotesResult};

/// `notes/lecture.md` → `notes/lecture.html`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// Make sure `input` exists, creating an empty file when allowed.
///
/// Returns `true` when the file was created.
pub fn ensure_input(input: &Path, create_missing: bool) -> NotesResult<bool> {
    if input.is_file() {
        return Ok(false);
    }
    if !create_missing {
        return Err(NotesError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    if let Some(parent) = input.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(input)?;
    tracing::info!(path = %input.display(), "created empty input file");
    Ok(true)
}

/// Write content to a file atomically
///
/// Uses tempfile + rename so readers never observe a half-written file. An
/// existing file keeps its permissions; a new one gets 0644 minus the umask.
pub fn atomic_write(path: &Path, content: &[u8]) -> NotesResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let existing = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".betternotes-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(&dir)?;
    tmp.write_all(content)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| NotesError::Io(e.error))?;
    Ok(())
}
