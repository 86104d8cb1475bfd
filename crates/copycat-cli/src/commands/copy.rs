//! `copycat copy`: a single non-interactive copy job

use anyhow::{Context, Result};
use copycat_core::CopyJob;
use std::path::Path;

/// Copy `source` into `destination`, optionally renaming the copied folder
pub fn execute(source: &Path, destination: &Path, name: Option<&str>) -> Result<()> {
    let report = CopyJob::new(source, destination)
        .with_target_name(name)
        .run_with_report()
        .with_context(|| format!("Failed to copy {}", source.display()))?;

    println!(
        "Copied {} files ({}) to {}",
        report.files_copied,
        format_size(report.bytes_copied),
        report.target.display()
    );
    if report.dirs_merged > 0 {
        println!("Merged into {} existing directories.", report.dirs_merged);
    }
    Ok(())
}

/// Format bytes as human-readable string
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}
