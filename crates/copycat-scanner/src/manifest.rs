//! Extension manifest (`package.json`) parsing

use crate::error::{ScanError, ScanResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Manifest file name inside an installed extension directory
pub const MANIFEST_FILE: &str = "package.json";

/// Localization bundle used to resolve `%key%` placeholders
pub const NLS_FILE: &str = "package.nls.json";

/// The subset of `package.json` fields copycat cares about
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageManifest {
    /// Read and parse the manifest of the extension installed at `dir`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn load(dir: &Path) -> ScanResult<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScanError::ManifestParse { path, source })
    }

    /// Extension id in `<publisher>.<name>` form
    ///
    /// # Errors
    /// Returns an error if either field is missing or blank
    pub fn id(&self, dir: &Path) -> ScanResult<String> {
        let publisher = non_blank(self.publisher.as_deref()).ok_or_else(|| {
            ScanError::MissingField {
                path: dir.join(MANIFEST_FILE),
                field: "publisher",
            }
        })?;
        let name = non_blank(self.name.as_deref()).ok_or_else(|| ScanError::MissingField {
            path: dir.join(MANIFEST_FILE),
            field: "name",
        })?;
        Ok(format!("{publisher}.{name}"))
    }

    /// Human readable name, resolving `%key%` placeholders from the
    /// extension's `package.nls.json` and falling back to the package name
    pub fn resolved_display_name(&self, dir: &Path) -> Option<String> {
        let raw = non_blank(self.display_name.as_deref())
            .or_else(|| non_blank(self.name.as_deref()))?;

        match placeholder_key(raw) {
            Some(key) => Some(
                lookup_nls(dir, key)
                    .or_else(|| non_blank(self.name.as_deref()).map(String::from))
                    .unwrap_or_else(|| raw.to_string()),
            ),
            None => Some(raw.to_string()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Return `key` for a `%key%` placeholder
fn placeholder_key(value: &str) -> Option<&str> {
    value
        .strip_prefix('%')
        .and_then(|rest| rest.strip_suffix('%'))
        .filter(|key| !key.is_empty())
}

fn lookup_nls(dir: &Path, key: &str) -> Option<String> {
    let content = fs::read_to_string(dir.join(NLS_FILE)).ok()?;
    let bundle: HashMap<String, serde_json::Value> = serde_json::from_str(&content).ok()?;
    match bundle.get(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        // Some bundles use {"message": "...", "comment": [...]}
        serde_json::Value::Object(obj) => obj.get("message")?.as_str().map(String::from),
        _ => None,
    }
}
