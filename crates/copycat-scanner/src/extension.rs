//! Installed extension record

use crate::error::ScanResult;
use crate::manifest::PackageManifest;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// An extension installed on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    /// `<publisher>.<name>`
    pub id: String,
    /// Name shown in pickers
    pub display_name: String,
    /// Directory holding the installed files
    pub install_path: PathBuf,
    /// Publisher from the manifest
    pub publisher: String,
    /// Installed version, if the manifest declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Extension {
    /// Build a record from the extension installed at `dir`
    ///
    /// # Errors
    /// Returns an error if the manifest is missing, unparsable, or lacks an id
    pub fn from_dir(dir: &Path) -> ScanResult<Self> {
        let manifest = PackageManifest::load(dir)?;
        let id = manifest.id(dir)?;
        let display_name = manifest
            .resolved_display_name(dir)
            .unwrap_or_else(|| id.clone());
        let publisher = id.split('.').next().unwrap_or_default().to_string();

        Ok(Self {
            id,
            display_name,
            install_path: dir.to_path_buf(),
            publisher,
            version: manifest.version.filter(|v| !v.trim().is_empty()),
        })
    }

    /// Whether the id starts with `prefix` (e.g. the built-in `vscode.` namespace)
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.id.starts_with(prefix)
    }

    /// One-line label used by pickers: `Display Name (publisher.name)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"publisher": "acme", "name": "rocket", "displayName": "Rocket", "version": "0.4.0"}"#,
        )
        .unwrap();

        let ext = Extension::from_dir(temp.path()).unwrap();
        assert_eq!(ext.id, "acme.rocket");
        assert_eq!(ext.publisher, "acme");
        assert_eq!(ext.display_name, "Rocket");
        assert_eq!(ext.install_path, temp.path());
        assert_eq!(ext.version.as_deref(), Some("0.4.0"));
        assert_eq!(ext.label(), "Rocket (acme.rocket)");
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = Extension::from_dir(temp.path()).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_has_prefix() {
        let ext = Extension {
            id: "vscode.git".to_string(),
            display_name: "Git".to_string(),
            install_path: PathBuf::from("/ext/vscode.git"),
            publisher: "vscode".to_string(),
            version: None,
        };
        assert!(ext.has_prefix("vscode."));
        assert!(!ext.has_prefix("acme."));
    }
}
