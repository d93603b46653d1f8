//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NotesError, NotesResult};

use super::types::Config;

/// File name looked up next to the watched document
pub const SIDECAR_FILE: &str = "betternotes.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NotesResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NotesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config).map_err(|message| NotesError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Reject values that deserialize but cannot render.
fn validate(config: &Config) -> Result<(), String> {
    let scale = config.render.tikz_scale;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(format!("render.tikz_scale must be a positive number, got {scale}"));
    }
    if config.render.plot_samples == 0 {
        return Err("render.plot_samples must be at least 1".to_string());
    }
    Ok(())
}

/// Resolve configuration for `input`.
///
/// An explicit path must load; implicitly discovered files that fail to
/// parse are logged and skipped.
pub fn discover(input: &Path, explicit: Option<&Path>) -> NotesResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [sidecar_path(input), user_config_path()];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                return Ok((with_env_overrides(config), warnings));
            }
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "ignoring config file");
            }
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn sidecar_path(input: &Path) -> Option<PathBuf> {
    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some(dir.join(SIDECAR_FILE))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("betternotes").join("config.toml"))
}

/// Apply environment variable overrides (BETTERNOTES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(title) = lookup("BETTERNOTES_DEFAULT_TITLE") {
        config.render.default_title = title;
    }

    if let Some(width) = lookup("BETTERNOTES_IMAGE_WIDTH") {
        config.render.image_width = width;
    }

    if let Some(scale) = lookup("BETTERNOTES_TIKZ_SCALE") {
        match scale.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => config.render.tikz_scale = v,
            _ => tracing::warn!(value = %scale, "ignoring BETTERNOTES_TIKZ_SCALE"),
        }
    }

    if let Some(val) = lookup("BETTERNOTES_PLOTS") {
        config.render.plots = parse_flag(&val);
    }

    if let Some(val) = lookup("BETTERNOTES_POLL") {
        config.watch.poll = parse_flag(&val);
    }

    if let Some(ms) = lookup("BETTERNOTES_IDLE_MS") {
        match ms.trim().parse::<u64>() {
            Ok(v) if v > 0 => config.watch.idle_ms = v,
            _ => tracing::warn!(value = %ms, "ignoring BETTERNOTES_IDLE_MS"),
        }
    }

    if let Some(host) = lookup("BETTERNOTES_HOST") {
        config.serve.host = host;
    }

    if let Some(port) = lookup("BETTERNOTES_PORT") {
        match port.trim().parse::<u16>() {
            Ok(v) => config.serve.port = v,
            _ => tracing::warn!(value = %port, "ignoring BETTERNOTES_PORT"),
        }
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "render",
        "default_title",
        "image_width",
        "tikz_scale",
        "plot_samples",
        "plots",
        "code_friendly",
        "header_ids",
        "watch",
        "create_missing",
        "poll",
        "idle_ms",
        "serve",
        "host",
        "port",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
