//! The interactive "duplicate extension" flow
//!
//! Pick an extension, collect the new identity, pick a destination folder,
//! copy, then optionally open the result. Nothing touches the filesystem
//! until every answer has been collected, so cancelling any request leaves
//! no trace.

use crate::duplicate::{CopyJob, CopyReport};
use crate::error::FlowError;
use crate::identity::{collect_identity, IdentityCancelled, IdentitySlug};
use crate::interaction::{FolderOpener, Interaction};
use copycat_scanner::Extension;
use tracing::info;

/// The request the operator dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelStage {
    Extension,
    AuthorId,
    PackageId,
    Version,
    Folder,
}

impl From<IdentityCancelled> for CancelStage {
    fn from(value: IdentityCancelled) -> Self {
        match value {
            IdentityCancelled::AuthorId => Self::AuthorId,
            IdentityCancelled::PackageId => Self::PackageId,
            IdentityCancelled::Version => Self::Version,
        }
    }
}

/// How a flow run ended, short of a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// There was nothing to duplicate
    NoExtensions,
    /// The operator backed out; no files were written
    Cancelled(CancelStage),
    /// The copy was made
    Completed {
        source: Extension,
        identity: IdentitySlug,
        report: CopyReport,
        opened: bool,
    },
}

/// Drives one duplicate run against an interaction and an opener
pub struct DuplicateFlow<'a> {
    ui: &'a mut dyn Interaction,
    opener: &'a dyn FolderOpener,
}

impl<'a> DuplicateFlow<'a> {
    pub fn new(ui: &'a mut dyn Interaction, opener: &'a dyn FolderOpener) -> Self {
        Self { ui, opener }
    }

    /// Run the flow over the given extension list
    ///
    /// # Errors
    /// Returns an error if the copy fails or the result cannot be opened
    pub fn run(&mut self, extensions: &[Extension]) -> Result<FlowOutcome, FlowError> {
        if extensions.is_empty() {
            self.ui.notify("No extensions found to duplicate.");
            return Ok(FlowOutcome::NoExtensions);
        }

        let Some(source) = self
            .ui
            .pick_extension(extensions)
            .and_then(|i| extensions.get(i))
        else {
            self.ui.notify("No extension selected.");
            return Ok(FlowOutcome::Cancelled(CancelStage::Extension));
        };

        let identity = match collect_identity(self.ui) {
            Ok(identity) => identity,
            Err(stage) => return Ok(FlowOutcome::Cancelled(stage.into())),
        };

        let Some(destination) = self.ui.pick_folder("Select the target folder:") else {
            return Ok(FlowOutcome::Cancelled(CancelStage::Folder));
        };

        info!(
            extension = %source.id,
            slug = %identity,
            destination = %destination.display(),
            "duplicating extension"
        );

        let report = CopyJob::new(&source.install_path, &destination)
            .with_target_name(Some(identity.slug()))
            .run_with_report()?;

        self.ui.notify(&format!(
            "Copied {} files to {}",
            report.files_copied,
            report.target.display()
        ));

        let opened = if self.ui.confirm("Open project folder?") == Some(true) {
            self.opener
                .open(&report.target)
                .map_err(|source| FlowError::Open {
                    path: report.target.clone(),
                    source,
                })?;
            true
        } else {
            false
        };

        Ok(FlowOutcome::Completed {
            source: source.clone(),
            identity,
            report,
            opened,
        })
    }
}
