//! Copycat Scanner - installed editor extension discovery
//!
//! This crate provides read-only scanning of the editor's extensions
//! directories, producing one [`Extension`] record per installed extension.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod extension;
pub mod manifest;
pub mod scan;

pub use error::{ScanError, ScanResult};
pub use extension::Extension;
pub use scan::{ExtensionScanner, ScannerConfig, OBSOLETE_FILE, RESERVED_PREFIX};
