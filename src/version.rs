//! Strict semantic version tags used to name new base image folders.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// A `MAJOR.MINOR.PATCH` version with numeric components only.
///
/// No leading `v`, no pre-release or build metadata, no leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag(String);

fn strict_semver() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
            .expect("version pattern is valid")
    })
}

impl VersionTag {
    /// Validates `candidate` and wraps it.
    ///
    /// # Errors
    /// * `Error::InvalidVersionFormat` if the string is not strict `MAJOR.MINOR.PATCH`
    pub fn parse(candidate: &str) -> Result<Self> {
        if strict_semver().is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(Error::InvalidVersionFormat { version: candidate.to_string() })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VersionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
