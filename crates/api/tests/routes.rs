//! Router tests: every request goes through the full middleware stack via
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use regviz_api::{ApiConfig, AppState, create_router};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    app_with(&ApiConfig::default())
}

fn app_with(config: &ApiConfig) -> Router {
    create_router(AppState::default(), config)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ---------------------------------------------------------------------------
// Validation contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_pattern() {
    let (status, body) = post_json(app(), "/api/validate", r#"{"regex": "^[a-z]+$"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));
}

#[rstest]
#[case::unclosed_group("(unclosed", "unclosed group")]
#[case::nothing_to_repeat("*invalid", "repetition operator missing expression")]
#[tokio::test]
async fn invalid_pattern_is_still_200(#[case] pattern: &str, #[case] expected: &str) {
    let payload = json!({ "regex": pattern }).to_string();
    let (status, body) = post_json(app(), "/api/validate", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], json!(false));
    let error = body["error"].as_str().unwrap();
    assert!(error.contains(expected), "{error}");
    assert!(error.ends_with("at position 0"), "{error}");
}

#[rstest]
#[case::missing_field("{}")]
#[case::null_field(r#"{"regex": null}"#)]
#[case::number_field(r#"{"regex": 7}"#)]
#[case::not_json("regex=(")]
#[case::empty_body("")]
#[tokio::test]
async fn unusable_body_is_the_empty_pattern(#[case] payload: &'static str) {
    let (status, body) = post_json(app(), "/api/validate", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));
}

#[tokio::test]
async fn repeated_regex_key_uses_the_last_value() {
    let (status, body) =
        post_json(app(), "/api/validate", r#"{"regex": "a", "regex": "("}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("unclosed group"));
}

#[tokio::test]
async fn content_type_is_not_required() {
    let request = Request::post("/api/validate")
        .body(Body::from(r#"{"regex": "a("}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], json!(false));
}

#[rstest]
#[case("^[a-z]+$")]
#[case("(unclosed")]
#[case("")]
#[tokio::test]
async fn diagram_routes_share_the_contract(#[case] pattern: &str) {
    let payload = json!({ "regex": pattern, "theme": "dark" }).to_string();

    let (_, expected) = post_json(app(), "/api/validate", payload.clone()).await;
    for route in ["/api/parse-tree", "/api/railroad"] {
        let (status, body) = post_json(app(), route, payload.clone()).await;
        assert_eq!(status, StatusCode::OK, "{route}");
        assert_eq!(body, expected, "{route}");
    }
}

#[tokio::test]
async fn get_on_validate_is_not_allowed() {
    let request = Request::get("/api/validate").body(Body::empty()).unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Middleware and ancillary routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ApiConfig {
        max_body_bytes: 32,
        ..ApiConfig::default()
    };
    let payload = json!({ "regex": "a".repeat(64) }).to_string();
    let request = Request::post("/api/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();

    let (status, _) = send(app_with(&config), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn health_reports_version() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn cors_headers_only_when_enabled() {
    let request = || {
        Request::builder()
            .method(Method::POST)
            .uri("/api/validate")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::from(r#"{"regex": "a"}"#))
            .unwrap()
    };

    let response = app().oneshot(request()).await.unwrap();
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );

    let config = ApiConfig {
        cors: true,
        ..ApiConfig::default()
    };
    let response = app_with(&config).oneshot(request()).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn static_assets_are_served_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>regviz</h1>").unwrap();
    std::fs::create_dir(dir.path().join("js")).unwrap();
    std::fs::write(dir.path().join("js/app.js"), "console.log(1);").unwrap();

    let config = ApiConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..ApiConfig::default()
    };

    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(&config), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>regviz</h1>");

    let request = Request::get("/js/app.js").body(Body::empty()).unwrap();
    let (status, body) = send(app_with(&config), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log(1);");

    // API routes still win over the fallback.
    let (status, body) = post_json(app_with(&config), "/api/validate", "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true }));
}

#[tokio::test]
async fn unknown_path_without_static_dir_is_404() {
    let request = Request::get("/index.html").body(Body::empty()).unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
