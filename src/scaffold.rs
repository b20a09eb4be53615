//! Scaffolding of a new `base/<version>` image folder.
//!
//! Rendering is kept apart from the file system: [`render_base_image`] only
//! produces file contents, [`plan_base_image`] turns them into
//! [`FileOperation`]s and [`generate_base_image`] applies the plan.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{BASE_ROOT, BUILD_SCRIPT, DOCKERFILE, README_FILE};
use crate::error::Result;
use crate::output::{apply, FileOperation};
use crate::renderer::TemplateRenderer;
use crate::templates::{Template, BASE_BUILD_SCRIPT, BASE_DOCKERFILE, BASE_README};
use crate::version::VersionTag;

/// Files of a base image folder: output name, template and executable flag.
const BASE_IMAGE_FILES: [(&str, Template, bool); 3] = [
    (DOCKERFILE, BASE_DOCKERFILE, false),
    (README_FILE, BASE_README, false),
    (BUILD_SCRIPT, BASE_BUILD_SCRIPT, true),
];

/// A rendered file ready to be written into the image folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: &'static str,
    pub content: String,
    pub executable: bool,
}

/// Returns `base/<version>`, relative to the working root.
pub fn output_folder(version: &VersionTag) -> PathBuf {
    Path::new(BASE_ROOT).join(version.as_str())
}

/// Renders the Dockerfile, README and build script for `version`.
///
/// # Arguments
/// * `renderer` - Template engine
/// * `version` - Validated version tag substituted into every template
/// * `generator` - Tool name credited in the "autogenerated" notice
///
/// # Returns
/// * `Result<Vec<GeneratedFile>>` - Exactly three files, each trimmed and
///   terminated by a single newline
pub fn render_base_image(
    renderer: &dyn TemplateRenderer,
    version: &VersionTag,
    generator: &str,
) -> Result<Vec<GeneratedFile>> {
    let context = serde_json::json!({
        "version": version.as_str(),
        "generator": generator,
    });

    BASE_IMAGE_FILES
        .iter()
        .map(|&(file_name, template, executable)| -> Result<GeneratedFile> {
            let rendered = renderer.render(&template, &context)?;
            Ok(GeneratedFile { file_name, content: format!("{}\n", rendered.trim()), executable })
        })
        .collect()
}

/// Builds the ordered list of operations that recreate `base/<version>`.
///
/// An existing folder is removed first, without confirmation, so the result
/// never mixes old and new content.
pub fn plan_base_image<P: AsRef<Path>>(
    root: P,
    renderer: &dyn TemplateRenderer,
    version: &VersionTag,
    generator: &str,
) -> Result<Vec<FileOperation>> {
    let folder = output_folder(version);
    let files = render_base_image(renderer, version, generator)?;

    let mut operations = Vec::with_capacity(files.len() + 2);
    if root.as_ref().join(&folder).is_dir() {
        debug!("Output folder '{}' already exists.", folder.display());
        operations.push(FileOperation::RemoveDir { target: folder.clone() });
    }
    operations.push(FileOperation::CreateDir { target: folder.clone() });
    operations.extend(files.into_iter().map(|file| FileOperation::Write {
        target: folder.join(file.file_name),
        content: file.content,
        executable: file.executable,
    }));

    Ok(operations)
}

/// Creates `base/<version>` under `root` and returns its relative path.
pub fn generate_base_image<P: AsRef<Path>>(
    root: P,
    renderer: &dyn TemplateRenderer,
    version: &VersionTag,
    generator: &str,
) -> Result<PathBuf> {
    let operations = plan_base_image(&root, renderer, version, generator)?;
    apply(&root, &operations)?;
    Ok(output_folder(version))
}

/// Manual follow-up steps printed once the folder is generated.
pub fn completion_notice(folder: &Path) -> String {
    format!(
        r#"
Please add the newly generated folder {} to Git and update the CircleCI file with

    generate-config

Build the Docker container locally to make sure it is correct and update "{}/README.md" list
of images with the new image information.
"#,
        folder.display(),
        BASE_ROOT
    )
}
