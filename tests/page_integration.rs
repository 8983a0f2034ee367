use std::sync::Arc;

use adeola_portfolio::AppState;
use adeola_portfolio::clock::FixedClock;
use adeola_portfolio::config::AppConfig;
use adeola_portfolio::content::PageVariant;
use adeola_portfolio::server::router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use tower::ServiceExt;

fn state(variant: PageVariant, year: i32, static_dir: &str) -> AppState {
    let variant = variant.as_str();
    let mut config = AppConfig::load_from_args([
        "portfolio",
        "--variant",
        variant,
        "--config",
        "tests/fixtures/portfolio.yaml",
    ])
    .expect("Failed to load config");
    config.server.static_dir = static_dir.to_string();

    AppState::new(config, Arc::new(FixedClock::new_year(year).unwrap()))
}

#[tokio::test]
async fn test_index_serves_vivid_document() {
    let server = TestServer::new(router(state(PageVariant::Vivid, 2026, "static"))).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-variant="vivid""#));
    for href in [
        "https://github.com/adeolaogundeji/adeolaogundeji.github.io",
        "https://github.com/adeolaogundeji",
        "https://www.linkedin.com/in/ogundeji-adeola-327a73235/",
        "mailto:ogundejideola0@gmail.com",
        "tel:+12813863380",
    ] {
        assert!(html.contains(href), "missing {href}");
    }
}

#[tokio::test]
async fn test_footer_year_comes_from_clock() {
    let early = TestServer::new(router(state(PageVariant::Classic, 2027, "static"))).unwrap();
    let late = TestServer::new(router(state(PageVariant::Classic, 2042, "static"))).unwrap();

    let early_html = early.get("/").await.text();
    let late_html = late.get("/").await.text();

    assert!(early_html.contains("© 2027 Adeola Ogundeji"));
    assert!(late_html.contains("© 2042 Adeola Ogundeji"));
    assert!(!late_html.contains("© 2027"));
}

#[tokio::test]
async fn test_static_assets_are_served_from_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.css"), "body{}").unwrap();
    let app = router(state(
        PageVariant::Vivid,
        2026,
        dir.path().to_str().unwrap(),
    ));

    let found = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/app.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found.status(), StatusCode::OK);

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/static/missing.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = TestServer::new(router(state(PageVariant::Vivid, 2026, "static"))).unwrap();
    let response = server.get("/projects").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
}
