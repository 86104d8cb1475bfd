//! Copycat Core - identity validation and directory duplication
//!
//! This crate turns an installed extension into a scaffold for a new one:
//! it validates the new `<author>.<package>-<version>` identity, copies the
//! extension's files under that name, and drives the interactive flow that
//! ties the two together.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

pub mod duplicate;
pub mod error;
pub mod flow;
pub mod identity;
pub mod interaction;
pub mod version;

pub use copycat_scanner;

pub use duplicate::{copy_tree, CopyJob, CopyReport};
pub use error::{DuplicateError, DuplicateResult, FlowError, IdentityField, ValidationError};
pub use flow::{CancelStage, DuplicateFlow, FlowOutcome};
pub use identity::{build_slug, collect_identity, IdentitySlug};
pub use interaction::{FolderOpener, Interaction, Prompt};
pub use version::is_valid_version;
