//! `copycat duplicate`: the interactive flow

use crate::config::Settings;
use crate::opener::EditorOpener;
use crate::terminal::TerminalInteraction;
use anyhow::Result;
use copycat_core::{DuplicateFlow, FlowOutcome};
use copycat_scanner::ExtensionScanner;
use std::io;
use tracing::debug;

/// Run the interactive duplicate flow on stdin/stdout
pub fn execute(settings: &Settings) -> Result<()> {
    let scanner = ExtensionScanner::new(settings.scanner_config()?);
    let extensions = scanner.scan()?;
    debug!(count = extensions.len(), "extensions available");

    let stdin = io::stdin();
    let mut ui = TerminalInteraction::new(stdin.lock(), io::stdout());
    let opener = EditorOpener::new(settings.editor.clone());

    match DuplicateFlow::new(&mut ui, &opener).run(&extensions)? {
        FlowOutcome::Completed { report, .. } => {
            println!("Created project: {}", report.target.display());
        }
        FlowOutcome::Cancelled(stage) => {
            debug!(?stage, "duplicate cancelled");
            println!("Cancelled.");
        }
        FlowOutcome::NoExtensions => {
            for dir in scanner.extension_dirs() {
                println!("  searched: {}", dir.display());
            }
        }
    }

    Ok(())
}
