//! Server-rendered documents and package files, requested through the site router.

#![cfg(feature = "ssr")]

use std::fs;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use leptos::prelude::LeptosOptions;
use ov_routes::{ELECTION_ID, Page, Params, election_params};
use ov_web::config::CONFIG;
use ov_web::routing::page_href;
use ov_web::server::{pkg_url, router};
use tempfile::TempDir;
use tower::ServiceExt;

const STYLESHEET: &str = "body{color:#1a1a1a}";

/// Site root with a compiled stylesheet in its package directory.
fn site() -> (TempDir, LeptosOptions) {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg").join("ov-web.css"), STYLESHEET).unwrap();

    let options = LeptosOptions::builder()
        .output_name("ov-web")
        .site_root(dir.path().to_string_lossy().into_owned())
        .site_pkg_dir("pkg")
        .build();
    (dir, options)
}

async fn get(options: &LeptosOptions, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router(options.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

/// Text between the first `open` tag and its closing tag.
fn inner<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).unwrap_or_else(|| panic!("no {open} in document"));
    let rest = &html[start..];
    let rest = &rest[rest.find('>').unwrap() + 1..];
    &rest[..rest.find(close).unwrap()]
}

fn assert_page(html: &str, page: Page, heading: &str) {
    assert_eq!(html.matches("<main").count(), 1, "one page view per location");
    assert!(inner(html, "<h1", "</h1>").contains(heading), "heading of {page:?}");

    let title = inner(html, "<title", "</title>");
    assert!(title.contains(page.title()), "title {title:?} for {page:?}");
    assert!(title.contains(CONFIG.name));

    assert_eq!(html.matches(r#"class="toaster""#).count(), 1);
    assert_eq!(html.matches(r#"class="sonner""#).count(), 1);
}

#[tokio::test]
async fn package_files_are_served_before_the_page_routes() {
    let (_dir, options) = site();
    let (status, content_type, body) = get(&options, &format!("{}/ov-web.css", pkg_url(&options))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap_or_default().starts_with("text/css"));
    assert_eq!(body, STYLESHEET);
}

#[tokio::test]
async fn missing_package_file_is_a_plain_404() {
    let (_dir, options) = site();
    let (status, _, body) = get(&options, &format!("{}/ov-web_bg.wasm", pkg_url(&options))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("<main"));
}

#[tokio::test]
async fn shell_links_the_stylesheet_under_the_base_path() {
    let (_dir, options) = site();
    let (_, _, html) = get(&options, &page_href(Page::Index, &Params::new())).await;

    let href = CONFIG.base_path.href("/pkg/ov-web.css");
    assert!(html.contains(&format!(r#"href="{href}""#)), "stylesheet {href} not linked");
}

#[tokio::test]
async fn vote_success_renders_once() {
    let (_dir, options) = site();
    let (status, _, html) = get(&options, &page_href(Page::VoteSuccess, &Params::new())).await;

    assert_eq!(status, StatusCode::OK);
    assert_page(&html, Page::VoteSuccess, "Vote recorded");
}

#[tokio::test]
async fn vote_page_receives_the_election_id() {
    let (_dir, options) = site();
    let href = page_href(Page::Vote, &election_params("42"));
    assert!(href.ends_with("/vote/42"), "{href} should carry {ELECTION_ID}");

    let (status, _, html) = get(&options, &href).await;
    assert_eq!(status, StatusCode::OK);
    assert_page(&html, Page::Vote, "Cast your vote");
    assert!(html.contains("Election 42"));
}

#[tokio::test]
async fn unknown_location_renders_not_found() {
    let (_dir, options) = site();
    let (_, _, html) = get(&options, &CONFIG.base_path.href("/nonexistent/page")).await;

    assert_page(&html, Page::NotFound, "404");
    assert!(html.contains("Oops! Page not found"));
}
