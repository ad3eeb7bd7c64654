//! Integration tests for CLI commands against the fixture site

use pagewright::PagewrightConfig;
use pagewright_cli::{CheckCommand, ListCommand, RenderCommand};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../pagewright/tests/fixtures/site")
}

fn config() -> PagewrightConfig {
    PagewrightConfig::default().with_base_dir(fixture_site())
}

fn run_render(cmd: &RenderCommand, config: &PagewrightConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    cmd.execute(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_render_uses_default_layout() {
    let html = run_render(&RenderCommand::new("home/index.html"), &config()).unwrap();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Your APP!!"));
    assert!(html.contains("Homepage"));
}

#[test]
fn test_render_with_explicit_layout() {
    let cmd = RenderCommand {
        layout: Some("bare_layout".to_string()),
        ..RenderCommand::new("home/index.html")
    };
    let html = run_render(&cmd, &config()).unwrap();

    assert!(html.contains("Homepage"));
    assert!(!html.contains("Your APP!!"));
}

#[test]
fn test_configured_default_layout_is_used() {
    let mut config = config();
    config.render.default_layout = "bare_layout".to_string();

    let html = run_render(&RenderCommand::new("home/index.html"), &config).unwrap();
    assert!(!html.contains("Your APP!!"));
}

#[test]
fn test_render_with_data_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, r#"{ "Title": "From JSON", "Body": "Loaded body" }"#).unwrap();

    let cmd = RenderCommand {
        data: Some(data),
        ..RenderCommand::new("home/index.html")
    };
    let html = run_render(&cmd, &config()).unwrap();

    assert!(html.contains("<title>From JSON</title>"));
    assert!(html.contains("<p>Loaded body</p>"));
}

#[test]
fn test_render_to_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("index.html");

    let cmd = RenderCommand {
        output: Some(output.clone()),
        ..RenderCommand::new("home/index.html")
    };
    let stdout = run_render(&cmd, &config()).unwrap();

    assert!(stdout.is_empty());
    let written = fs::read_to_string(output).unwrap();
    assert!(written.contains("Homepage"));
}

#[test]
fn test_failed_render_keeps_existing_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.html");
    fs::write(&output, "previous build").unwrap();

    let unknown = RenderCommand {
        output: Some(output.clone()),
        ..RenderCommand::new("nonexistent/page.html")
    };
    let err = run_render(&unknown, &config()).unwrap_err();
    assert!(err.to_string().contains("page template not found"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous build");

    let bad_layout = RenderCommand {
        layout: Some("no_such_layout".to_string()),
        output: Some(output.clone()),
        ..RenderCommand::new("home/index.html")
    };
    run_render(&bad_layout, &config()).unwrap_err();
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous build");
}

#[test]
fn test_render_unknown_page_fails() {
    let err = run_render(&RenderCommand::new("nonexistent/page.html"), &config()).unwrap_err();
    assert!(err.to_string().contains("nonexistent/page.html"));
}

#[test]
fn test_render_invalid_data_file_fails() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "{ not json").unwrap();

    let cmd = RenderCommand {
        data: Some(data),
        ..RenderCommand::new("home/index.html")
    };
    let err = run_render(&cmd, &config()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse data file"));
}

#[test]
fn test_list_prints_sorted_keys() {
    let mut out = Vec::new();
    ListCommand::default().execute(&config(), &mut out).unwrap();

    let listing = String::from_utf8(out).unwrap();
    assert_eq!(
        listing.lines().collect::<Vec<_>>(),
        vec!["blog/post.html", "home/about.html", "home/index.html"]
    );
}

#[test]
fn test_list_with_fragments() {
    let mut out = Vec::new();
    ListCommand { fragments: true }
        .execute(&config(), &mut out)
        .unwrap();

    let listing = String::from_utf8(out).unwrap();
    assert!(listing.contains("blog/post.html\n"));
    assert!(listing.contains("  byline\n"));
    assert!(listing.contains("  app_layout\n"));
}

#[test]
fn test_check_reports_page_count() {
    let mut out = Vec::new();
    let count = CheckCommand.execute(&config(), &mut out).unwrap();

    assert_eq!(count, 3);
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Loaded"));
    assert!(report.contains("pages"));
}

#[test]
fn test_check_fails_without_pages_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("root.html"), "").unwrap();
    let config = PagewrightConfig::default().with_base_dir(dir.path());

    let mut out = Vec::new();
    let err = CheckCommand.execute(&config, &mut out).unwrap_err();

    assert!(err.to_string().starts_with("Failed to load templates from"));
    assert!(err.chain().any(|cause| cause.to_string().contains("missing directory")));
}
