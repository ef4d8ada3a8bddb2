use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the yt-dlp binary found on `PATH`.
pub const YTDLP_ENV: &str = "MEDIA_CATCHER_YTDLP";

const APP_DIR: &str = "media-catcher";
const SETTINGS_FILE: &str = "settings.json";

/// Locations resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when yt-dlp could not be found; reported when a download starts.
    pub ytdlp: Option<PathBuf>,
    pub settings_path: PathBuf,
    pub default_download_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .context("Failed to locate a configuration directory")?;

        Ok(Self {
            ytdlp: resolve_ytdlp(env::var_os(YTDLP_ENV).map(PathBuf::from)),
            settings_path: config_dir.join(APP_DIR).join(SETTINGS_FILE),
            default_download_dir: default_download_dir(),
        })
    }
}

/// An explicit path wins over a `PATH` lookup, but only if it exists.
pub fn resolve_ytdlp(explicit: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Some(path),
        Some(path) => {
            log::warn!(
                "{} points to {}, which does not exist; searching PATH",
                YTDLP_ENV,
                path.display()
            );
            which::which("yt-dlp").ok()
        }
        None => which::which("yt-dlp").ok(),
    }
}

pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| env::current_dir().unwrap_or_default())
}
