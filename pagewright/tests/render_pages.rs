//! Integration tests for rendering the fixture site
//!
//! The fixture has a root shell, `header` and `footer` partials, the
//! `app_layout` and `bare_layout` layouts, and pages under `home/` and `blog/`.

mod common;

use pagewright::{PageEngine, RenderError};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

fn engine() -> PageEngine {
    PageEngine::new(common::fixture_site()).unwrap()
}

fn render<S: Serialize>(engine: &PageEngine, layout: &str, page: &str, data: S) -> String {
    let mut buf = Vec::new();
    engine.render_page(&mut buf, layout, page, data).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_new_loads_every_page() {
    let engine = engine();
    let keys: Vec<&str> = engine.page_keys().collect();
    assert_eq!(keys, vec!["blog/post.html", "home/about.html", "home/index.html"]);
    assert_eq!(engine.base_path(), common::fixture_site());
}

#[test]
fn test_render_page_without_data() {
    let result = render(&engine(), "app_layout", "home/index.html", ());

    assert!(result.contains("<!DOCTYPE html>"), "expected HTML doctype in output");
    assert!(result.contains("Homepage"), "expected 'Homepage' in output");
    assert!(result.contains("Your APP!!"), "expected header content in output");
    assert!(result.contains("Made with pagewright"));
    assert!(result.contains("<title>Your APP</title>"));
}

#[test]
fn test_render_page_with_data() {
    let data: HashMap<&str, &str> = [("Title", "Test Page"), ("Body", "Test content")]
        .into_iter()
        .collect();

    let result = render(&engine(), "app_layout", "home/index.html", &data);

    assert!(result.contains("<!DOCTYPE html>"), "expected HTML doctype in output");
    assert!(result.contains("<title>Test Page</title>"));
    assert!(result.contains("<p>Test content</p>"));
}

#[test]
fn test_unused_fields_are_ignored() {
    let result = render(
        &engine(),
        "app_layout",
        "home/about.html",
        json!({ "Unused": [1, 2, 3], "Name": "Ada" }),
    );
    assert!(result.contains("Ada built this."));
}

#[test]
fn test_data_changes_output_but_both_succeed() {
    let engine = engine();
    let without = render(&engine, "app_layout", "home/about.html", ());
    let with = render(&engine, "app_layout", "home/about.html", json!({ "Name": "Grace" }));

    assert_ne!(without, with);
    assert!(without.contains("nobody built this."));
    assert!(with.contains("Grace built this."));
}

#[test]
fn test_struct_data_is_accepted() {
    #[derive(Serialize)]
    #[allow(non_snake_case)]
    struct Post {
        Title: String,
        Author: String,
    }

    let result = render(
        &engine(),
        "app_layout",
        "blog/post.html",
        Post {
            Title: "Release notes".to_string(),
            Author: "Linus".to_string(),
        },
    );
    assert!(result.contains("<h1>Release notes</h1>"));
    assert!(result.contains("by Linus"));
}

#[test]
fn test_non_existent_page() {
    let mut buf = Vec::new();
    let err = engine()
        .render_page(&mut buf, "app_layout", "nonexistent/page.html", ())
        .unwrap_err();

    assert!(matches!(err, RenderError::NotFound(ref key) if key == "nonexistent/page.html"));
    assert!(buf.is_empty(), "nothing may be written for an unknown page");
}

#[test]
fn test_non_existent_layout() {
    let mut buf = Vec::new();
    let err = engine()
        .render_page(&mut buf, "nonexistent_layout", "home/index.html", ())
        .unwrap_err();

    match err {
        RenderError::Execution { layout, page, .. } => {
            assert_eq!(layout, "nonexistent_layout");
            assert_eq!(page, "home/index.html");
        }
        other => panic!("expected execution error, got {other:?}"),
    }
}

#[test]
fn test_same_page_rendered_twice_is_identical() {
    let engine = engine();
    let first = render(&engine, "app_layout", "home/index.html", ());
    let second = render(&engine, "app_layout", "home/index.html", ());
    assert_eq!(first, second);
}

#[test]
fn test_render_to_string_matches_streamed_output() {
    let engine = engine();
    let data = json!({ "Title": "Same", "Body": "either way" });

    let streamed = render(&engine, "app_layout", "home/index.html", &data);
    let collected = engine
        .render_page_to_string("app_layout", "home/index.html", &data)
        .unwrap();
    assert_eq!(streamed, collected);
}

#[test]
fn test_each_layout_wraps_the_same_content() {
    let engine = engine();
    let app = render(&engine, "app_layout", "home/index.html", ());
    let bare = render(&engine, "bare_layout", "home/index.html", ());

    assert!(app.contains("Your APP!!"));
    assert!(!bare.contains("Your APP!!"));
    assert!(bare.contains("Homepage"));
    assert!(bare.contains("<!DOCTYPE html>"));
}

#[test]
fn test_page_override_stays_inside_that_page() {
    let engine = engine();
    let blog = render(&engine, "app_layout", "blog/post.html", ());
    let home = render(&engine, "app_layout", "home/index.html", ());

    assert!(blog.contains("<header>Blog</header>"));
    assert!(!blog.contains("Your APP!!"));
    assert!(home.contains("Your APP!!"));
}

#[test]
fn test_page_fragments_do_not_leak_between_pages() {
    let engine = engine();
    let blog = engine.page("blog/post.html").unwrap();
    let home = engine.page("home/index.html").unwrap();

    assert!(blog.contains("byline"));
    assert!(!home.contains("byline"));
    assert!(home.contains("app_layout"));
    assert!(home.contains("header"));
}

#[test]
fn test_values_are_escaped() {
    let result = render(
        &engine(),
        "app_layout",
        "home/index.html",
        json!({ "Body": "<script>alert(1)</script>" }),
    );
    assert!(!result.contains("<script>"));
    assert!(result.contains("&lt;script&gt;"));
}
