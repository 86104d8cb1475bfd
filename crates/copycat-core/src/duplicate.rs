//! Recursive directory duplication
//!
//! Copies a source tree into a destination parent folder. The top-level
//! folder may be renamed; when a folder of that name already exists the copy
//! merges into it, overwriting files with the same relative path and leaving
//! everything else in place. There is no rollback: a failure part way through
//! leaves whatever was already written.

use crate::error::{at, DuplicateError, DuplicateResult};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// What a copy job did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Absolute path of the top-level destination folder
    pub target: PathBuf,
    pub files_copied: usize,
    pub bytes_copied: u64,
    pub dirs_created: usize,
    /// Directories that already existed and were merged into
    pub dirs_merged: usize,
}

/// One recursive copy of `source` into `destination_parent`
#[derive(Debug, Clone)]
pub struct CopyJob {
    source: PathBuf,
    destination_parent: PathBuf,
    target_name: Option<String>,
}

impl CopyJob {
    /// Copy `source` into `destination_parent`, keeping the source folder name
    pub fn new(source: impl Into<PathBuf>, destination_parent: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination_parent: destination_parent.into(),
            target_name: None,
        }
    }

    /// Use `name` for the top-level destination folder instead of the source's name
    #[must_use]
    pub fn with_target_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.target_name = name.map(Into::into);
        self
    }

    /// Run the copy and return the absolute destination folder path
    ///
    /// # Errors
    /// See [`CopyJob::run_with_report`]
    pub fn run(&self) -> DuplicateResult<PathBuf> {
        self.run_with_report().map(|report| report.target)
    }

    /// Run the copy and report what was written
    ///
    /// The source is checked before anything is created, so a missing source
    /// leaves the destination untouched.
    ///
    /// # Errors
    /// `NotFound` if the source or destination parent does not exist,
    /// `PermissionDenied` / `Io` for filesystem failures at any step,
    /// `NotADirectory` if the source is a file, `InvalidTargetName` for a name
    /// that is not a single path component, and `DestinationInsideSource` if
    /// the destination would land inside the source tree.
    pub fn run_with_report(&self) -> DuplicateResult<CopyReport> {
        let meta = fs::metadata(&self.source).map_err(at(&self.source))?;
        if !meta.is_dir() {
            return Err(DuplicateError::NotADirectory(self.source.clone()));
        }

        let source = fs::canonicalize(&self.source).map_err(at(&self.source))?;
        let parent =
            fs::canonicalize(&self.destination_parent).map_err(at(&self.destination_parent))?;

        let name = match &self.target_name {
            Some(name) => name.clone(),
            None => source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| DuplicateError::InvalidTargetName(source.display().to_string()))?,
        };
        check_target_name(&name)?;

        let target = parent.join(&name);
        if target.starts_with(&source) {
            return Err(DuplicateError::DestinationInsideSource {
                origin: source,
                destination: target,
            });
        }

        info!(
            source = %source.display(),
            target = %target.display(),
            "copying directory tree"
        );

        let mut report = CopyReport {
            target: target.clone(),
            ..CopyReport::default()
        };
        copy_dir(&source, &target, &mut report)?;

        info!(
            target = %target.display(),
            files = report.files_copied,
            bytes = report.bytes_copied,
            "copy complete"
        );
        Ok(report)
    }
}

/// Copy `source` into `destination_parent` under `override_name` (or the
/// source folder's own name) and return the absolute destination folder
///
/// # Errors
/// See [`CopyJob::run_with_report`]
pub fn copy_tree(
    source: &Path,
    destination_parent: &Path,
    override_name: Option<&str>,
) -> DuplicateResult<PathBuf> {
    CopyJob::new(source, destination_parent)
        .with_target_name(override_name)
        .run()
}

/// The folder name must be exactly one normal path component
fn check_target_name(name: &str) -> DuplicateResult<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(DuplicateError::InvalidTargetName(name.to_string())),
    }
}

/// Create `target` if needed, then copy each child of `source` into it
///
/// An existing `target` that links to a directory is merged into.
fn copy_dir(source: &Path, target: &Path, report: &mut CopyReport) -> DuplicateResult<()> {
    match fs::metadata(target) {
        Ok(meta) if meta.is_dir() => {
            debug!(path = %target.display(), "merging into existing directory");
            report.dirs_merged += 1;
        }
        Ok(_) => return Err(DuplicateError::NotADirectory(target.to_path_buf())),
        Err(_) => {
            fs::create_dir(target).map_err(at(target))?;
            debug!(path = %target.display(), "created directory");
            report.dirs_created += 1;
        }
    }

    for entry in fs::read_dir(source).map_err(at(source))? {
        let entry = entry.map_err(at(source))?;
        let child = entry.path();
        let file_type = entry.file_type().map_err(at(&child))?;
        let dest = target.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir(&child, &dest, report)?;
        } else {
            let bytes = copy_file(&child, &dest)?;
            debug!(from = %child.display(), to = %dest.display(), bytes, "copied file");
            report.files_copied += 1;
            report.bytes_copied += bytes;
        }
    }

    Ok(())
}

/// Copy the bytes of `from` over `to`, truncating any existing file
///
/// Only content is copied. A new file gets the default mode regardless of the
/// source file's permissions.
fn copy_file(from: &Path, to: &Path) -> DuplicateResult<u64> {
    let contents = fs::read(from).map_err(at(from))?;
    fs::write(to, &contents).map_err(at(to))?;
    Ok(contents.len() as u64)
}
