//! Template assets embedded into the binaries at compile time.
//! Every asset is a MiniJinja template living under `templates/`.

/// A named template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Name used for error reporting, mirrors the asset path
    pub name: &'static str,
    pub source: &'static str,
}

macro_rules! asset {
    ($path:literal) => {
        Template {
            name: $path,
            source: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)),
        }
    };
}

/// Dockerfile of a new `cypress/base` image.
/// Context: `version`, `generator`.
pub const BASE_DOCKERFILE: Template = asset!("base/Dockerfile.j2");

/// README of a new `cypress/base` image.
/// Context: `version`, `generator`.
pub const BASE_README: Template = asset!("base/README.md.j2");

/// Build script of a new `cypress/base` image.
/// Context: `version`, `generator`.
pub const BASE_BUILD_SCRIPT: Template = asset!("base/build.sh.j2");

/// Static CircleCI commands and jobs, followed by the `workflows:` header.
/// Context: `generator`.
pub const CIRCLE_PREAMBLE: Template = asset!("circle/preamble.yml.j2");

/// One workflow listing a job invocation per image folder.
/// Context: `workflow`, `job`, `images` (list of `{name, tag}`).
pub const CIRCLE_WORKFLOW: Template = asset!("circle/workflow.yml.j2");
