//! Discovery of image folders under the image roots.
//! Every immediate subdirectory of a root is one image, named by its tag.

use std::fmt;
use std::path::{Component, Path};
use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// An image folder `<name>/<tag>`, where `name` is the root it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFolder {
    pub name: String,
    pub tag: String,
}

impl ImageFolder {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, tag: T) -> Self {
        Self { name: name.into(), tag: tag.into() }
    }

    /// Splits a relative `<root>/<tag>` path into its two segments.
    ///
    /// # Errors
    /// * `Error::InvalidImageTag` if the path does not have exactly two
    ///   normal segments, is not UTF-8, or the tag is not a Docker tag
    pub fn from_relative_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let invalid = || Error::InvalidImageTag {
            root: path.parent().map(|p| p.display().to_string()).unwrap_or_default(),
            tag: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
        };

        let segments = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| match c {
                Component::Normal(s) => s.to_str().ok_or_else(invalid),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>>>()?;

        match segments.as_slice() {
            [name, tag] if is_valid_tag(tag) => Ok(Self::new(*name, *tag)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ name: '{}', tag: '{}' }}", self.name, self.tag)
    }
}

/// Checks the Docker tag grammar `[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}`.
pub fn is_valid_tag(tag: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$").expect("tag pattern is valid")
        })
        .is_match(tag)
}

/// Lists the image folders directly under `<cwd>/<root>`.
///
/// Entries come back in the order the file system lists them; no sort is
/// applied. Plain files and hidden entries are ignored, directory symlinks
/// are followed.
///
/// # Errors
/// * `Error::RootNotFound` if the root is missing
/// * `Error::DiscoveryError` if the root cannot be listed
/// * `Error::InvalidImageTag` if a folder name is not a usable tag
pub fn discover_images<P: AsRef<Path>>(cwd: P, root: &str) -> Result<Vec<ImageFolder>> {
    let cwd = cwd.as_ref();
    let root_path = cwd.join(root);
    if !root_path.is_dir() {
        return Err(Error::RootNotFound { root: root.to_string() });
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(&root_path).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            warn!("Skipping hidden folder '{}'", entry.path().display());
            continue;
        }

        let relative = Path::new(root).join(entry.file_name());
        let image = ImageFolder::from_relative_path(&relative)?;
        debug!("Discovered image folder {}", image);
        images.push(image);
    }

    Ok(images)
}

/// Formats a discovered list the way it is dumped for operators.
pub fn describe(images: &[ImageFolder]) -> String {
    if images.is_empty() {
        return "[]".to_string();
    }
    let lines: Vec<String> = images.iter().map(|image| format!("  {image}")).collect();
    format!("[\n{}\n]", lines.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_tag() {
        assert!(is_valid_tag("12.14.0"));
        assert!(is_valid_tag("node12.4.0-chrome76"));
        assert!(is_valid_tag("chrome63-ff57"));
        assert!(is_valid_tag("_private"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("-leading-dash"));
        assert!(!is_valid_tag(".hidden"));
        assert!(!is_valid_tag("with space"));
        assert!(!is_valid_tag("quote\"d"));
        assert!(!is_valid_tag(&"a".repeat(129)));
    }

    #[test]
    fn test_from_relative_path() {
        assert_eq!(
            ImageFolder::from_relative_path("base/12.14.0").unwrap(),
            ImageFolder::new("base", "12.14.0")
        );
        assert_eq!(
            ImageFolder::from_relative_path("./browsers/chrome63-ff57").unwrap(),
            ImageFolder::new("browsers", "chrome63-ff57")
        );
        assert!(ImageFolder::from_relative_path("base").is_err());
        assert!(ImageFolder::from_relative_path("base/12/extra").is_err());
        assert!(ImageFolder::from_relative_path("base/bad tag").is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&[]), "[]");
        let images = [ImageFolder::new("base", "12.14.0"), ImageFolder::new("base", "13.6.0")];
        assert_eq!(
            describe(&images),
            "[\n  { name: 'base', tag: '12.14.0' },\n  { name: 'base', tag: '13.6.0' }\n]"
        );
    }
}
