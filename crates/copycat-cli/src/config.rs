//! Settings resolved from flags and environment

use anyhow::Result;
use copycat_scanner::ScannerConfig;
use std::path::PathBuf;

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    /// Explicit extensions directories; empty means the user default
    pub extension_dirs: Vec<PathBuf>,
    /// Program that opens a folder in the editor
    pub editor: String,
}

impl Settings {
    /// Scanner config for these settings
    pub fn scanner_config(&self) -> Result<ScannerConfig> {
        if self.extension_dirs.is_empty() {
            return Ok(ScannerConfig::user_default()?);
        }
        Ok(ScannerConfig::with_dirs(
            self.extension_dirs.iter().map(|d| expand_home(d)).collect(),
        ))
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &std::path::Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}
