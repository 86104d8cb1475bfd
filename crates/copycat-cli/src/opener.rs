//! Launches the editor on a duplicated folder

use copycat_core::FolderOpener;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Runs `<program> <folder>` without waiting for it to exit
#[derive(Debug, Clone)]
pub struct EditorOpener {
    program: String,
}

impl EditorOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl FolderOpener for EditorOpener {
    fn open(&self, folder: &Path) -> io::Result<()> {
        info!(program = %self.program, folder = %folder.display(), "opening folder");
        Command::new(&self.program).arg(folder).spawn()?;
        Ok(())
    }
}
