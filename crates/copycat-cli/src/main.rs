//! Copycat CLI - duplicate an installed editor extension as a new project
//!
//! Provides `copycat duplicate` (the default), `copycat list` and `copycat copy`.

mod commands;
mod config;
mod logging;
mod opener;
mod terminal;

use clap::{Parser, Subcommand};
use copycat_core::{DuplicateError, FlowError};
use copycat_scanner::ScanError;
use std::path::PathBuf;

use config::Settings;

#[derive(Parser)]
#[command(name = "copycat")]
#[command(about = "Copycat - duplicate an installed editor extension as a new project")]
#[command(version)]
struct Cli {
    /// Extensions directory to scan (repeatable; defaults to ~/.vscode/extensions)
    #[arg(
        long = "extensions-dir",
        value_name = "DIR",
        env = "COPYCAT_EXTENSIONS_DIR",
        global = true
    )]
    extensions_dirs: Vec<PathBuf>,

    /// Command used to open the duplicated folder
    #[arg(long, env = "COPYCAT_EDITOR", default_value = "code", global = true)]
    editor: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively duplicate an installed extension under a new identity
    Duplicate,
    /// List installed extensions that can be duplicated
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy a folder into a destination folder, merging with existing content
    Copy {
        /// Folder to copy
        source: PathBuf,
        /// Existing folder that receives the copy
        destination: PathBuf,
        /// Name for the copied folder (defaults to the source folder's name)
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    let settings = Settings {
        extension_dirs: cli.extensions_dirs,
        editor: cli.editor,
    };

    let result = match cli.command.unwrap_or(Commands::Duplicate) {
        Commands::Duplicate => commands::duplicate::execute(&settings),
        Commands::List { json } => commands::list::execute(&settings, json),
        Commands::Copy {
            source,
            destination,
            name,
        } => commands::copy::execute(&source, &destination, name.as_deref()),
    };

    if let Err(e) = result {
        match error_code(&e) {
            Some(code) => eprintln!("Error [{code}]: {e:#}"),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

/// Code of the first library error in the chain, if any
fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<FlowError>()
            .map(FlowError::code)
            .or_else(|| cause.downcast_ref::<DuplicateError>().map(DuplicateError::code))
            .or_else(|| cause.downcast_ref::<ScanError>().map(ScanError::code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::io;

    #[test]
    fn test_error_code_through_context() {
        let err = Err::<(), _>(DuplicateError::NotADirectory(PathBuf::from("/x")))
            .context("Failed to copy /x")
            .unwrap_err();
        assert_eq!(error_code(&err), Some("NOT_A_DIRECTORY"));
    }

    #[test]
    fn test_error_code_for_flow_and_scan() {
        let open = anyhow::Error::from(FlowError::Open {
            path: PathBuf::from("/x"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(error_code(&open), Some("OPEN_FAILED"));

        let scan = anyhow::Error::from(ScanError::HomeNotFound);
        assert_eq!(error_code(&scan), Some("HOME_NOT_FOUND"));

        assert_eq!(error_code(&anyhow::anyhow!("plain")), None);
    }
}
