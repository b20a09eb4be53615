//! CircleCI configuration generation.
//!
//! Each image family is described once in [`FAMILIES`]; the same rendering
//! path turns every family's discovered folders into a workflow.

use std::path::Path;

use log::warn;

use crate::constants::{BASE_ROOT, BROWSERS_ROOT, CONFIG_FILE, INCLUDED_ROOT, WORKFLOW_SEPARATOR};
use crate::discovery::{describe, discover_images, ImageFolder};
use crate::error::Result;
use crate::output::write_file;
use crate::renderer::TemplateRenderer;
use crate::templates::{CIRCLE_PREAMBLE, CIRCLE_WORKFLOW};

/// Static description of one image family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFamily {
    /// Directory scanned for image folders
    pub root: &'static str,
    /// Family name shown in the discovery dump
    pub label: &'static str,
    /// Workflow name in the generated config
    pub workflow: &'static str,
    /// Job template invoked once per image folder
    pub job: &'static str,
    /// Tags never scheduled, matched exactly
    pub skip_tags: &'static [&'static str],
}

impl ImageFamily {
    pub fn is_skipped(&self, tag: &str) -> bool {
        self.skip_tags.iter().any(|skip| *skip == tag)
    }
}

pub const BASE_FAMILY: ImageFamily = ImageFamily {
    root: BASE_ROOT,
    label: "base",
    workflow: "build-base-images",
    job: "build-base-image",
    skip_tags: &[],
};

// Old browser images cannot be tested (no npx), so they stay out of CI.
pub const BROWSERS_FAMILY: ImageFamily = ImageFamily {
    root: BROWSERS_ROOT,
    label: "browser",
    workflow: "build-browser-images",
    job: "build-browser-image",
    skip_tags: &["chrome63-ff57"],
};

pub const INCLUDED_FAMILY: ImageFamily = ImageFamily {
    root: INCLUDED_ROOT,
    label: "included",
    workflow: "build-included-images",
    job: "build-included-image",
    skip_tags: &[],
};

/// Families in the order their workflows appear in the config.
pub const FAMILIES: [ImageFamily; 3] = [BASE_FAMILY, BROWSERS_FAMILY, INCLUDED_FAMILY];

/// Discovered folders of one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyImages {
    pub family: ImageFamily,
    pub images: Vec<ImageFolder>,
}

/// Scans every family root under `cwd`.
///
/// All roots are listed before anything is returned, so rendering always
/// sees one consistent snapshot. The first failing root aborts the scan.
pub fn discover_all<P: AsRef<Path>>(cwd: P) -> Result<Vec<FamilyImages>> {
    FAMILIES
        .iter()
        .map(|family| -> Result<FamilyImages> {
            let images = discover_images(cwd.as_ref(), family.root)?;
            Ok(FamilyImages { family: *family, images })
        })
        .collect()
}

/// Renders the CircleCI preamble: commands, jobs and the `workflows:` header.
pub fn render_preamble(renderer: &dyn TemplateRenderer, generator: &str) -> Result<String> {
    renderer.render(&CIRCLE_PREAMBLE, &serde_json::json!({ "generator": generator }))
}

/// Renders one workflow with a job invocation per non-skipped image,
/// preserving the order of `images`.
pub fn render_workflow(
    renderer: &dyn TemplateRenderer,
    family: &ImageFamily,
    images: &[ImageFolder],
) -> Result<String> {
    let scheduled: Vec<&ImageFolder> = images
        .iter()
        .filter(|image| {
            let skipped = family.is_skipped(&image.tag);
            if skipped {
                warn!("Skipping {} image '{}'", family.root, image.tag);
            }
            !skipped
        })
        .collect();

    let context = serde_json::json!({
        "workflow": family.workflow,
        "job": family.job,
        "images": scheduled,
    });
    renderer.render(&CIRCLE_WORKFLOW, &context)
}

/// Assembles the whole config: preamble followed by every family's
/// workflow, separated by a blank line.
pub fn render_config(
    renderer: &dyn TemplateRenderer,
    generator: &str,
    families: &[FamilyImages],
) -> Result<String> {
    let workflows = families
        .iter()
        .map(|entry| render_workflow(renderer, &entry.family, &entry.images))
        .collect::<Result<Vec<_>>>()?;

    let mut text = render_preamble(renderer, generator)?;
    text.push_str(&workflows.join(WORKFLOW_SEPARATOR));
    Ok(text)
}

/// Formats every family's discovered folders for operator inspection.
pub fn discovery_report(families: &[FamilyImages]) -> String {
    families
        .iter()
        .map(|entry| {
            format!(" *** {} images ***\n{}\n", entry.family.label, describe(&entry.images))
        })
        .collect()
}

/// Prints [`discovery_report`] to stdout.
pub fn print_discovered(families: &[FamilyImages]) {
    print!("{}", discovery_report(families));
}

/// Regenerates `<cwd>/circle.yml` from the current image folders.
pub fn generate_config<P: AsRef<Path>>(
    cwd: P,
    renderer: &dyn TemplateRenderer,
    generator: &str,
) -> Result<()> {
    let cwd = cwd.as_ref();
    let families = discover_all(cwd)?;
    print_discovered(&families);

    let text = render_config(renderer, generator, &families)?;
    write_file(&text, cwd.join(CONFIG_FILE))?;
    println!("generated {CONFIG_FILE}");
    Ok(())
}
