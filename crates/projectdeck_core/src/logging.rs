//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Resolve log settings from explicit values or the environment.
//! - Start the rolling file logger once per process.
//! - Record panics in the log before the default hook runs.
//!
//! # Invariants
//! - Repeated init with identical settings is a no-op.
//! - Init with different settings is rejected, never applied.
//! - Initialization never panics.
//!
//! # See also
//! - `crate::notify::LogNotifier` for toast events written through `log`.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "PROJECTDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROJECTDECK_LOG_DIR";

const LOG_BASENAME: &str = "projectdeck";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_PAYLOAD_LIMIT: usize = 160;
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ACTIVE: OnceCell<(LogSettings, LoggerHandle)> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Validated logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: &'static str,
    pub dir: PathBuf,
}

impl LogSettings {
    /// Validates a level name and an absolute directory.
    ///
    /// # Errors
    /// - Unknown level name.
    /// - Empty or relative directory.
    pub fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let wanted = level.trim().to_ascii_lowercase();
        let wanted = if wanted == "warning" { "warn".to_string() } else { wanted };
        let level = LEVELS
            .iter()
            .copied()
            .find(|known| *known == wanted)
            .ok_or_else(|| {
                format!(
                    "unsupported log level `{wanted}`; expected {}",
                    LEVELS.join("|")
                )
            })?;

        let dir = log_dir.trim();
        if dir.is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        if !Path::new(dir).is_absolute() {
            return Err(format!("log_dir must be absolute, got `{dir}`"));
        }

        Ok(Self {
            level,
            dir: PathBuf::from(dir),
        })
    }

    /// Reads settings through `lookup` (normally `std::env::var`).
    ///
    /// Returns `Ok(None)` when no log directory is configured, which leaves
    /// file logging off. A missing level falls back to `default_log_level()`.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(dir) = lookup(ENV_LOG_DIR) else {
            return Ok(None);
        };
        let level = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());
        Self::parse(&level, &dir).map(Some)
    }
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Settings fail `LogSettings::parse`.
/// - The directory cannot be created or the backend fails to start.
/// - A previous call configured different settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    start(LogSettings::parse(level, log_dir)?)
}

/// Starts logging from `PROJECTDECK_LOG_DIR` / `PROJECTDECK_LOG_LEVEL`.
///
/// Returns `Ok(false)` when no directory is configured.
pub fn init_logging_from_env() -> Result<bool, String> {
    match LogSettings::from_lookup(|key| std::env::var(key).ok())? {
        Some(settings) => start(settings).map(|()| true),
        None => Ok(false),
    }
}

/// Settings of the running logger, if any.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|(settings, _)| settings.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(settings: LogSettings) -> Result<(), String> {
    let (active, _) = ACTIVE.get_or_try_init(|| {
        let handle = open_backend(&settings)?;
        Ok::<_, String>((settings.clone(), handle))
    })?;

    if *active != settings {
        return Err(format!(
            "logging already runs at `{}` in `{}`; refusing to switch to `{}` in `{}`",
            active.level,
            active.dir.display(),
            settings.level,
            settings.dir.display()
        ));
    }
    Ok(())
}

fn open_backend(settings: &LogSettings) -> Result<LoggerHandle, String> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            settings.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", settings.level))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // Why: timestamps and source locations make the file readable without
        // the terminal session that produced it.
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        settings.level,
        settings.dir.display(),
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        // Why: payloads may carry project names typed by the user; one capped
        // line keeps the record greppable.
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            single_line(&payload, PANIC_PAYLOAD_LIMIT)
        );
        previous(panic_info);
    }));
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, single_line, LogSettings, ENV_LOG_DIR, ENV_LOG_LEVEL,
    };

    #[test]
    fn settings_accept_aliases_and_reject_unknown_levels() {
        let settings = LogSettings::parse(" WARNING ", "/var/log/projectdeck").unwrap();
        assert_eq!(settings.level, "warn");

        let err = LogSettings::parse("verbose", "/tmp").unwrap_err();
        assert!(err.contains("trace|debug|info|warn|error"));
    }

    #[test]
    fn settings_require_absolute_directory() {
        assert!(LogSettings::parse("info", "  ").unwrap_err().contains("empty"));
        assert!(LogSettings::parse("info", "logs").unwrap_err().contains("absolute"));
    }

    #[test]
    fn lookup_without_directory_leaves_logging_off() {
        let settings =
            LogSettings::from_lookup(|key| (key == ENV_LOG_LEVEL).then(|| "info".to_string()))
                .unwrap();
        assert!(settings.is_none());
    }

    #[test]
    fn lookup_uses_default_level_when_unset() {
        let settings =
            LogSettings::from_lookup(|key| (key == ENV_LOG_DIR).then(|| "/srv/logs".to_string()))
                .unwrap()
                .unwrap();
        assert_eq!(settings.level, super::default_log_level());
    }

    #[test]
    fn panic_payload_is_flattened_and_capped() {
        assert_eq!(single_line("a\nb\rc-long-tail", 5), "a b c...");
        assert_eq!(single_line("short", 10), "short");
    }

    #[test]
    fn second_init_must_match_first() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap().to_string();
        let other_str = other.path().to_str().unwrap().to_string();

        init_logging("info", &dir_str).unwrap();
        init_logging("INFO", &dir_str).unwrap();
        assert!(init_logging("debug", &dir_str)
            .unwrap_err()
            .contains("refusing to switch"));
        assert!(init_logging("info", &other_str)
            .unwrap_err()
            .contains("refusing to switch"));

        let active = logging_status().unwrap();
        assert_eq!(active.level, "info");
        assert_eq!(active.dir, dir.path());
    }
}
