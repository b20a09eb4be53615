use std::fs;
use std::path::Path;
use std::process::Command;

use imagegen::discovery::{discover_images, ImageFolder};
use imagegen::error::Error;
use imagegen::pipeline::{
    discover_all, generate_config, render_config, render_preamble, render_workflow, FamilyImages,
    BASE_FAMILY, BROWSERS_FAMILY, INCLUDED_FAMILY,
};
use imagegen::renderer::MiniJinjaRenderer;
use tempfile::TempDir;

fn make_dirs(root: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

fn scenario() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    make_dirs(
        temp_dir.path(),
        &["base/12.14.0", "browsers/node12.4.0-chrome76", "browsers/chrome63-ff57", "included/3.8.1"],
    );
    temp_dir
}

fn job_count(text: &str) -> usize {
    text.matches("          dockerTag: ").count()
}

#[test]
fn test_render_workflow_block() {
    let renderer = MiniJinjaRenderer::new();
    let images = [ImageFolder::new("base", "12.14.0")];
    let text = render_workflow(&renderer, &BASE_FAMILY, &images).unwrap();

    assert_eq!(
        text,
        "  build-base-images:\n    jobs:\n      - build-base-image:\n          name: \"base 12.14.0\"\n          dockerTag: \"12.14.0\"\n"
    );
}

#[test]
fn test_render_empty_workflow() {
    let renderer = MiniJinjaRenderer::new();
    let text = render_workflow(&renderer, &INCLUDED_FAMILY, &[]).unwrap();
    assert_eq!(text, "  build-included-images:\n    jobs:\n");
}

#[test]
fn test_render_workflow_keeps_order_and_skips_legacy_browser() {
    let renderer = MiniJinjaRenderer::new();
    let images = [
        ImageFolder::new("browsers", "node13.6.0-chrome80-ff72"),
        ImageFolder::new("browsers", "chrome63-ff57"),
        ImageFolder::new("browsers", "node12.4.0-chrome76"),
        ImageFolder::new("browsers", "chrome63-ff57-extra"),
    ];
    let text = render_workflow(&renderer, &BROWSERS_FAMILY, &images).unwrap();

    assert_eq!(job_count(&text), 3);
    assert!(!text.contains("\"browsers chrome63-ff57\""));
    assert!(text.contains("\"browsers chrome63-ff57-extra\""));

    let first = text.find("node13.6.0-chrome80-ff72").unwrap();
    let second = text.find("node12.4.0-chrome76").unwrap();
    let third = text.find("chrome63-ff57-extra").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_skip_applies_only_to_browsers() {
    let renderer = MiniJinjaRenderer::new();
    let images = [ImageFolder::new("base", "chrome63-ff57")];
    let text = render_workflow(&renderer, &BASE_FAMILY, &images).unwrap();
    assert_eq!(job_count(&text), 1);
}

#[test]
fn test_preamble_credits_generator() {
    let renderer = MiniJinjaRenderer::new();
    let preamble = render_preamble(&renderer, "generate-config").unwrap();

    assert!(preamble
        .starts_with("\n# WARNING: this file is automatically generated by generate-config\n"));
    assert!(preamble.contains("\nversion: 2.1\n"));
    assert!(preamble.contains("docker build -t cypress/test -\\<<EOF\n"));
    assert!(preamble.ends_with("\nworkflows:\n  version: 2\n"));
}

#[test]
fn test_discover_images() {
    let temp_dir = scenario();
    fs::write(temp_dir.path().join("browsers/README.md"), "list of images").unwrap();
    make_dirs(temp_dir.path(), &["browsers/.cache"]);

    let mut images = discover_images(temp_dir.path(), "browsers").unwrap();
    images.sort_by(|a, b| a.tag.cmp(&b.tag));
    assert_eq!(
        images,
        [
            ImageFolder::new("browsers", "chrome63-ff57"),
            ImageFolder::new("browsers", "node12.4.0-chrome76"),
        ]
    );
}

#[test]
fn test_discover_empty_root() {
    let temp_dir = TempDir::new().unwrap();
    make_dirs(temp_dir.path(), &["included"]);
    assert!(discover_images(temp_dir.path(), "included").unwrap().is_empty());
}

#[test]
fn test_discover_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    make_dirs(temp_dir.path(), &["base/12.14.0", "included/3.8.1"]);

    let result = discover_all(temp_dir.path());
    assert!(matches!(result, Err(Error::RootNotFound { root }) if root == "browsers"));
}

#[test]
fn test_discover_rejects_invalid_tag() {
    let temp_dir = TempDir::new().unwrap();
    make_dirs(temp_dir.path(), &["base/bad tag"]);

    let result = discover_images(temp_dir.path(), "base");
    assert!(matches!(result, Err(Error::InvalidImageTag { tag, .. }) if tag == "bad tag"));
}

#[test]
fn test_end_to_end_scenario() {
    let temp_dir = scenario();
    let renderer = MiniJinjaRenderer::new();
    let families = discover_all(temp_dir.path()).unwrap();
    let text = render_config(&renderer, "generate-config", &families).unwrap();

    assert!(text.contains(
        "  build-base-images:\n    jobs:\n      - build-base-image:\n          name: \"base 12.14.0\"\n          dockerTag: \"12.14.0\"\n\n"
    ));
    assert!(text.contains(
        "  build-browser-images:\n    jobs:\n      - build-browser-image:\n          name: \"browsers node12.4.0-chrome76\"\n          dockerTag: \"node12.4.0-chrome76\"\n\n"
    ));
    assert!(text.ends_with(
        "  build-included-images:\n    jobs:\n      - build-included-image:\n          name: \"included 3.8.1\"\n          dockerTag: \"3.8.1\"\n"
    ));
    assert!(!text.contains("chrome63-ff57\""));
    assert_eq!(job_count(&text), 3);
}

#[test]
fn test_config_is_valid_yaml() {
    let temp_dir = scenario();
    let renderer = MiniJinjaRenderer::new();
    let families = discover_all(temp_dir.path()).unwrap();
    let text = render_config(&renderer, "generate-config", &families).unwrap();

    let config: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(config["version"].as_f64(), Some(2.1));
    assert_eq!(config["commands"].as_mapping().unwrap().len(), 6);
    assert_eq!(config["jobs"].as_mapping().unwrap().len(), 3);

    let workflows = &config["workflows"];
    assert_eq!(workflows["version"].as_u64(), Some(2));
    let browser_jobs = workflows["build-browser-images"]["jobs"].as_sequence().unwrap();
    assert_eq!(browser_jobs.len(), 1);
    assert_eq!(
        browser_jobs[0]["build-browser-image"]["dockerTag"].as_str(),
        Some("node12.4.0-chrome76")
    );
}

#[test]
fn test_empty_roots_render_headers() {
    let renderer = MiniJinjaRenderer::new();
    let families = vec![
        FamilyImages { family: BASE_FAMILY, images: vec![] },
        FamilyImages { family: BROWSERS_FAMILY, images: vec![] },
        FamilyImages { family: INCLUDED_FAMILY, images: vec![] },
    ];
    let text = render_config(&renderer, "gen", &families).unwrap();

    assert!(text.ends_with(
        "  build-base-images:\n    jobs:\n\n  build-browser-images:\n    jobs:\n\n  build-included-images:\n    jobs:\n"
    ));
    assert_eq!(job_count(&text), 0);
}

#[test]
fn test_generate_config_overwrites_file() {
    let temp_dir = scenario();
    let config_path = temp_dir.path().join("circle.yml");
    fs::write(&config_path, "stale content\n").unwrap();

    let renderer = MiniJinjaRenderer::new();
    generate_config(temp_dir.path(), &renderer, "generate-config").unwrap();
    let first = fs::read_to_string(&config_path).unwrap();
    assert!(!first.contains("stale content"));

    make_dirs(temp_dir.path(), &["included/4.0.0"]);
    generate_config(temp_dir.path(), &renderer, "generate-config").unwrap();
    let second = fs::read_to_string(&config_path).unwrap();
    assert_eq!(job_count(&second), 4);
    assert!(second.contains("name: \"included 4.0.0\""));
}

#[test]
fn test_cli_generates_config() {
    let temp_dir = scenario();
    let output = Command::new(env!("CARGO_BIN_EXE_generate-config"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" *** browser images ***\n"));
    assert!(!stdout.contains(" *** browsers images ***"));
    assert!(stdout.contains("{ name: 'included', tag: '3.8.1' }"));
    assert!(stdout.ends_with("generated circle.yml\n"));

    let text = fs::read_to_string(temp_dir.path().join("circle.yml")).unwrap();
    assert!(text.starts_with("\n# WARNING: this file is automatically generated by generate-config\n"));
}

#[test]
fn test_cli_fails_on_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    make_dirs(temp_dir.path(), &["base/12.14.0"]);
    let output = Command::new(env!("CARGO_BIN_EXE_generate-config"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("circle.yml").exists());
}
