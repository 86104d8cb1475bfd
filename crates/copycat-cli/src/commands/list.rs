//! `copycat list`

use crate::config::Settings;
use anyhow::Result;
use copycat_scanner::ExtensionScanner;

/// Print the extensions that can be duplicated
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let extensions = ExtensionScanner::new(settings.scanner_config()?).scan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&extensions)?);
        return Ok(());
    }

    if extensions.is_empty() {
        println!("No extensions found.");
        return Ok(());
    }

    println!("Extensions:");
    for ext in &extensions {
        let version = ext.version.as_deref().unwrap_or("?");
        println!(
            "  {} v{} - {} ({})",
            ext.id,
            version,
            ext.display_name,
            ext.install_path.display()
        );
    }
    Ok(())
}
