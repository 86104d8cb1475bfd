//! Identity collection and the `<author>.<package>-<version>` slug

use crate::error::{IdentityField, ValidationError};
use crate::interaction::{Interaction, Prompt};
use crate::version::is_valid_version;
use std::fmt;

pub const AUTHOR_ID_DEFAULT: &str = "authorId";
pub const PACKAGE_ID_DEFAULT: &str = "packageId";
pub const VERSION_DEFAULT: &str = "0.0.1";

/// Render the slug. Pure formatting; inputs are validated by the prompts.
pub fn build_slug(author_id: &str, package_id: &str, version: &str) -> String {
    format!("{author_id}.{package_id}-{version}")
}

/// A validated identity for the duplicated extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySlug {
    author_id: String,
    package_id: String,
    version: String,
}

impl IdentitySlug {
    /// Validate and trim all three components
    ///
    /// # Errors
    /// Returns the first component that fails validation
    pub fn new(author_id: &str, package_id: &str, version: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            author_id: validate_author_id(author_id)?,
            package_id: validate_package_id(package_id)?,
            version: validate_version(version)?,
        })
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Folder name for the duplicate
    pub fn slug(&self) -> String {
        build_slug(&self.author_id, &self.package_id, &self.version)
    }
}

impl fmt::Display for IdentitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Non-empty after trimming; returns the trimmed value
///
/// # Errors
/// Empty input, or characters that cannot appear in a folder name
pub fn validate_author_id(input: &str) -> Result<String, ValidationError> {
    validate_name_component(IdentityField::AuthorId, input)
}

/// Same rules as [`validate_author_id`]
///
/// # Errors
/// Empty input, or characters that cannot appear in a folder name
pub fn validate_package_id(input: &str) -> Result<String, ValidationError> {
    validate_name_component(IdentityField::PackageId, input)
}

/// Must be a full version string (see [`crate::version`])
///
/// # Errors
/// Input that is not a valid version
pub fn validate_version(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(IdentityField::Version));
    }
    if !is_valid_version(trimmed) {
        return Err(ValidationError::InvalidVersion(input.to_string()));
    }
    Ok(trimmed.to_string())
}

fn validate_name_component(field: IdentityField, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    if let Some(found) = trimmed
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '\0') || c.is_control())
    {
        return Err(ValidationError::UnsafeCharacter { field, found });
    }

    if trimmed == "." || trimmed == ".." {
        return Err(ValidationError::ReservedName {
            field,
            value: trimmed.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Ask until `validate` accepts the answer or the operator cancels
fn prompt_until_valid(
    ui: &mut dyn Interaction,
    prompt: &Prompt,
    validate: fn(&str) -> Result<String, ValidationError>,
) -> Option<String> {
    loop {
        let answer = ui.ask(prompt)?;
        match validate(&answer) {
            Ok(value) => return Some(value),
            Err(e) => ui.reject(prompt, &e),
        }
    }
}

/// `None` if the operator cancels
pub fn prompt_author_id(ui: &mut dyn Interaction) -> Option<String> {
    let prompt = Prompt::new(
        "Insert the author ID (<author>.<packageId>-<version>):",
        AUTHOR_ID_DEFAULT,
    );
    prompt_until_valid(ui, &prompt, validate_author_id)
}

/// `None` if the operator cancels
pub fn prompt_package_id(ui: &mut dyn Interaction) -> Option<String> {
    let prompt = Prompt::new(
        "Insert the package ID (<author>.<packageId>-<version>):",
        PACKAGE_ID_DEFAULT,
    );
    prompt_until_valid(ui, &prompt, validate_package_id)
}

/// `None` if the operator cancels
pub fn prompt_version(ui: &mut dyn Interaction) -> Option<String> {
    let prompt = Prompt::new(
        "Insert the version (<author>.<packageId>-<version>):",
        VERSION_DEFAULT,
    );
    prompt_until_valid(ui, &prompt, validate_version)
}

/// Which prompt the operator cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityCancelled {
    AuthorId,
    PackageId,
    Version,
}

/// Run the three prompts in order, stopping at the first cancellation
///
/// # Errors
/// Returns which prompt was cancelled
pub fn collect_identity(ui: &mut dyn Interaction) -> Result<IdentitySlug, IdentityCancelled> {
    let author_id = prompt_author_id(ui).ok_or(IdentityCancelled::AuthorId)?;
    let package_id = prompt_package_id(ui).ok_or(IdentityCancelled::PackageId)?;
    let version = prompt_version(ui).ok_or(IdentityCancelled::Version)?;

    Ok(IdentitySlug {
        author_id,
        package_id,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use copycat_scanner::Extension;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Answers `ask` from a queue; an exhausted queue means cancel
    #[derive(Default)]
    struct Answers {
        queue: VecDeque<Option<String>>,
        asked: Vec<String>,
        rejected: Vec<ValidationError>,
    }

    impl Answers {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                queue: answers.iter().map(|a| a.map(String::from)).collect(),
                ..Self::default()
            }
        }
    }

    impl Interaction for Answers {
        fn pick_extension(&mut self, _extensions: &[Extension]) -> Option<usize> {
            None
        }

        fn ask(&mut self, prompt: &Prompt) -> Option<String> {
            self.asked.push(prompt.default.clone());
            self.queue.pop_front().flatten()
        }

        fn reject(&mut self, _prompt: &Prompt, error: &ValidationError) {
            self.rejected.push(error.clone());
        }

        fn pick_folder(&mut self, _title: &str) -> Option<PathBuf> {
            None
        }

        fn confirm(&mut self, _title: &str) -> Option<bool> {
            None
        }

        fn notify(&mut self, _message: &str) {}
    }

    #[test]
    fn test_build_slug() {
        assert_eq!(build_slug("acme", "rocket", "1.0.0"), "acme.rocket-1.0.0");
        assert_eq!(build_slug("a", "b", "v0.0.1-rc.1"), "a.b-v0.0.1-rc.1");
    }

    #[test]
    fn test_slug_matches_build_slug() {
        for (a, p, v) in [
            ("acme", "rocket", "1.2.3"),
            ("Some Author", "pkg.name", "0.0.1+build.5"),
            ("x", "y", "v10.0.0-alpha.1"),
        ] {
            let slug = IdentitySlug::new(a, p, v).unwrap();
            assert_eq!(slug.slug(), format!("{a}.{p}-{v}"));
            assert_eq!(slug.to_string(), build_slug(a, p, v));
        }
    }

    #[test]
    fn test_whitespace_only_rejected() {
        for input in ["", " ", "\t", "  \n "] {
            assert_eq!(
                validate_author_id(input),
                Err(ValidationError::Empty(IdentityField::AuthorId))
            );
            assert_eq!(
                validate_package_id(input),
                Err(ValidationError::Empty(IdentityField::PackageId))
            );
        }
    }

    #[test]
    fn test_components_trimmed() {
        let slug = IdentitySlug::new("  acme ", "rocket\t", " 1.0.0 ").unwrap();
        assert_eq!(slug.author_id(), "acme");
        assert_eq!(slug.package_id(), "rocket");
        assert_eq!(slug.version(), "1.0.0");
    }

    #[test]
    fn test_unsafe_components_rejected() {
        assert!(matches!(
            validate_author_id("ac/me"),
            Err(ValidationError::UnsafeCharacter { found: '/', .. })
        ));
        assert!(matches!(
            validate_package_id("ro\\cket"),
            Err(ValidationError::UnsafeCharacter { found: '\\', .. })
        ));
        assert!(matches!(
            validate_author_id(".."),
            Err(ValidationError::ReservedName { .. })
        ));
        assert!(validate_author_id("a.b").is_ok());
    }

    #[test]
    fn test_version_validation() {
        for ok in ["1.2.3", "v1.2.3", "0.0.1", "1.0.0-alpha.1", "1.0.0+build.5"] {
            assert!(validate_version(ok).is_ok(), "{ok} should be accepted");
        }
        assert_eq!(
            validate_version(""),
            Err(ValidationError::Empty(IdentityField::Version))
        );
        assert_eq!(
            validate_version("abc"),
            Err(ValidationError::InvalidVersion("abc".to_string()))
        );
        assert!(validate_version("version 1.2.3 final").is_err());
    }

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let mut ui = Answers::new(&[Some("   "), Some(""), Some("acme")]);
        assert_eq!(prompt_author_id(&mut ui).as_deref(), Some("acme"));
        assert_eq!(ui.rejected.len(), 2);
        assert_eq!(ui.asked, vec![AUTHOR_ID_DEFAULT; 3]);
    }

    #[test]
    fn test_prompt_cancel_after_rejection() {
        let mut ui = Answers::new(&[Some("abc"), None]);
        assert_eq!(prompt_version(&mut ui), None);
        assert_eq!(
            ui.rejected,
            vec![ValidationError::InvalidVersion("abc".to_string())]
        );
    }

    #[test]
    fn test_collect_identity() {
        let mut ui = Answers::new(&[Some("acme"), Some("rocket"), Some("2.0.0")]);
        let slug = collect_identity(&mut ui).unwrap();
        assert_eq!(slug.slug(), "acme.rocket-2.0.0");
        assert_eq!(
            ui.asked,
            vec![AUTHOR_ID_DEFAULT, PACKAGE_ID_DEFAULT, VERSION_DEFAULT]
        );
    }

    #[test]
    fn test_collect_identity_stops_at_first_cancel() {
        let mut ui = Answers::new(&[Some("acme"), None, Some("2.0.0")]);
        assert_eq!(
            collect_identity(&mut ui),
            Err(IdentityCancelled::PackageId)
        );
        // The version prompt is never shown
        assert_eq!(ui.asked.len(), 2);
    }
}
