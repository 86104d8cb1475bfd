//! Version string validation
//!
//! Accepts `MAJOR.MINOR.PATCH` with an optional leading `v`, an optional
//! `-prerelease` and an optional `+build` suffix. The whole input must match.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of dot-separated identifiers in a prerelease or build suffix
pub const MAX_IDENTIFIERS: usize = 100;

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^v?(?:0|[1-9][0-9]{0,9})\.(?:0|[1-9][0-9]{0,9})\.(?:0|[1-9][0-9]{0,9})(?:-(?P<pre>[0-9a-z-]+(?:\.[0-9a-z-]+)*))?(?:\+(?P<build>[0-9a-z-]+(?:\.[0-9a-z-]+)*))?$",
    )
    .expect("version pattern is a valid regex")
});

/// Check whether `input` is an acceptable version
pub fn is_valid_version(input: &str) -> bool {
    let Some(caps) = VERSION_RE.captures(input) else {
        return false;
    };

    if let Some(pre) = caps.name("pre") {
        let mut count = 0;
        for ident in pre.as_str().split('.') {
            count += 1;
            if count > MAX_IDENTIFIERS || !is_prerelease_identifier(ident) {
                return false;
            }
        }
    }

    if let Some(build) = caps.name("build") {
        if build.as_str().split('.').count() > MAX_IDENTIFIERS {
            return false;
        }
    }

    true
}

/// `0`, a number without leading zeros, or any alphanumeric/hyphen run that
/// contains at least one letter or hyphen
fn is_prerelease_identifier(ident: &str) -> bool {
    if ident.chars().any(|c| c.is_ascii_alphabetic() || c == '-') {
        return true;
    }
    ident == "0" || !ident.starts_with('0')
}
