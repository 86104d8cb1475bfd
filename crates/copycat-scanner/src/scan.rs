//! Extensions directory scanner

use crate::error::{ScanError, ScanResult};
use crate::extension::Extension;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Id prefix of the editor's own built-in extensions, which are never offered
/// as duplication sources
pub const RESERVED_PREFIX: &str = "vscode.";

/// File in an extensions directory listing uninstalled folders still on disk
pub const OBSOLETE_FILE: &str = ".obsolete";

/// Where to look for installed extensions
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Directories whose immediate children are extension installs
    pub extension_dirs: Vec<PathBuf>,
    /// Extensions whose id starts with this prefix are skipped
    pub reserved_prefix: String,
}

impl ScannerConfig {
    /// Config pointing at the user's default extensions directory
    /// (`~/.vscode/extensions`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn user_default() -> ScanResult<Self> {
        let home = dirs::home_dir().ok_or(ScanError::HomeNotFound)?;
        Ok(Self::with_dirs(vec![home.join(".vscode").join("extensions")]))
    }

    /// Config for an explicit set of extensions directories
    #[must_use]
    pub fn with_dirs(extension_dirs: Vec<PathBuf>) -> Self {
        Self {
            extension_dirs,
            reserved_prefix: RESERVED_PREFIX.to_string(),
        }
    }
}

/// Discovers installed extensions
#[derive(Debug, Clone)]
pub struct ExtensionScanner {
    config: ScannerConfig,
}

impl ExtensionScanner {
    /// Create a scanner for the given config
    #[must_use]
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// The directories this scanner reads
    pub fn extension_dirs(&self) -> &[PathBuf] {
        &self.config.extension_dirs
    }

    /// List every non-reserved extension, sorted by display name then id
    ///
    /// Missing extensions directories yield no entries. Subdirectories without
    /// a usable manifest are skipped with a warning, as are folders marked
    /// obsolete. When several versions of one id are installed only the
    /// highest is listed.
    ///
    /// # Errors
    /// Returns an error if an existing extensions directory cannot be read
    pub fn scan(&self) -> ScanResult<Vec<Extension>> {
        let mut latest: HashMap<String, Extension> = HashMap::new();

        for dir in &self.config.extension_dirs {
            for ext in self.scan_dir(dir)? {
                match latest.get(&ext.id) {
                    Some(kept) if compare_versions(&ext, kept) != Ordering::Greater => {
                        debug!(id = %ext.id, path = %ext.install_path.display(), "skipping superseded version");
                    }
                    _ => {
                        latest.insert(ext.id.clone(), ext);
                    }
                }
            }
        }

        let mut extensions: Vec<Extension> = latest.into_values().collect();
        extensions.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(extensions)
    }

    fn scan_dir(&self, dir: &Path) -> ScanResult<Vec<Extension>> {
        if !dir.is_dir() {
            debug!(path = %dir.display(), "extensions directory not present");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let obsolete = read_obsolete(dir);
        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if obsolete.contains(entry.file_name().to_string_lossy().as_ref()) {
                debug!(path = %path.display(), "skipping obsolete install");
                continue;
            }

            match Extension::from_dir(&path) {
                Ok(ext) if ext.has_prefix(&self.config.reserved_prefix) => {
                    debug!(id = %ext.id, "skipping reserved extension");
                }
                Ok(ext) => {
                    debug!(id = %ext.id, path = %path.display(), "found extension");
                    found.push(ext);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping directory without a usable manifest");
                }
            }
        }

        Ok(found)
    }
}

/// Folder names marked `true` in the directory's obsolete list
///
/// A missing or unreadable list marks nothing.
fn read_obsolete(dir: &Path) -> HashSet<String> {
    let path = dir.join(OBSOLETE_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return HashSet::new();
    };
    match serde_json::from_str::<HashMap<String, bool>>(&content) {
        Ok(map) => map
            .into_iter()
            .filter_map(|(folder, gone)| gone.then_some(folder))
            .collect(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unparsable obsolete list");
            HashSet::new()
        }
    }
}

/// Order two installs of the same id by version
///
/// Versions compare by their numeric `major.minor.patch` parts; an install
/// without a parsable version sorts lowest. Equal versions keep the first
/// install found.
fn compare_versions(a: &Extension, b: &Extension) -> Ordering {
    version_key(a.version.as_deref()).cmp(&version_key(b.version.as_deref()))
}

fn version_key(version: Option<&str>) -> Option<Vec<u64>> {
    let core = version?.trim().trim_start_matches(['v', 'V']);
    let core = core.split(['-', '+']).next()?;
    core.split('.').map(|part| part.parse().ok()).collect()
}
