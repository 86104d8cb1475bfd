//! Seams between the duplicate flow and whoever is driving it
//!
//! Every method that asks the operator something returns `None` when the
//! operator dismisses the request. That is a normal outcome, not an error.

use crate::error::ValidationError;
use copycat_scanner::Extension;
use std::io;
use std::path::{Path, PathBuf};

/// A single-line text request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Question shown to the operator
    pub title: String,
    /// Value used when the operator submits without typing anything
    pub default: String,
}

impl Prompt {
    #[must_use]
    pub fn new(title: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default: default.into(),
        }
    }
}

/// Operator-facing input and output
pub trait Interaction {
    /// Choose one of `extensions`, returning its index
    fn pick_extension(&mut self, extensions: &[Extension]) -> Option<usize>;

    /// Ask for a line of text
    fn ask(&mut self, prompt: &Prompt) -> Option<String>;

    /// Tell the operator why their last answer to `prompt` was rejected
    fn reject(&mut self, prompt: &Prompt, error: &ValidationError);

    /// Choose an existing folder
    fn pick_folder(&mut self, title: &str) -> Option<PathBuf>;

    /// Yes/no question
    fn confirm(&mut self, title: &str) -> Option<bool>;

    /// Informational notice
    fn notify(&mut self, message: &str);
}

/// Opens a produced folder in the editor
pub trait FolderOpener {
    /// # Errors
    /// Returns an error if the editor could not be launched
    fn open(&self, folder: &Path) -> io::Result<()>;
}
