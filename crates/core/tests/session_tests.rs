//! Fetch and session tests against a local mock server
use glimpse_core::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<html><head><title>Mock</title></head><body><h1>Served</h1><p>From wiremock</p></body></html>";

async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_url_returns_body() {
    let server = serve("/page", 200, PAGE).await;
    let body = fetch_url(&format!("{}/page", server.uri()), &FetchConfig::default()).await.unwrap();
    assert_eq!(body, PAGE);
}

#[tokio::test]
async fn test_fetch_url_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "glimpse-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetchConfig { user_agent: Some("glimpse-test/1.0".into()), ..Default::default() };
    fetch_url(&server.uri(), &config).await.unwrap();
}

#[tokio::test]
async fn test_fetch_url_status_error() {
    let server = serve("/missing", 404, "not here").await;
    let result = fetch_url(&format!("{}/missing", server.uri()), &FetchConfig::default()).await;
    assert!(matches!(result, Err(GlimpseError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_url_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE).set_delay(std::time::Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = FetchConfig { timeout: Some(1), ..Default::default() };
    let result = fetch_url(&server.uri(), &config).await;
    assert!(matches!(result, Err(GlimpseError::Timeout { timeout: 1 })));
}

#[tokio::test]
async fn test_browser_load_success() {
    let server = serve("/", 200, PAGE).await;
    let mut browser = Browser::new(FetchConfig::default());

    browser.load(&server.uri()).await.expect("should load");

    assert!(browser.display().contains("Title: Mock"));
    assert!(browser.display().contains("From wiremock"));
    assert_eq!(browser.current_url(), Some(server.uri().as_str()));
    assert_eq!(browser.history().entries(), [server.uri()]);
    assert_eq!(browser.status(), format!("Loaded: {}", server.uri()));
}

#[tokio::test]
async fn test_browser_failed_load_keeps_previous_page() {
    let server = serve("/", 200, PAGE).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut browser = Browser::new(FetchConfig::default());
    browser.load(&server.uri()).await.unwrap();
    let shown = browser.display().to_string();

    let err = browser.load(&format!("{}/gone", server.uri())).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert_eq!(browser.display(), shown);
    assert_eq!(browser.history().len(), 1);
    assert!(browser.status().starts_with("Error: "));
}

#[tokio::test]
async fn test_browser_unreachable_host() {
    let config = FetchConfig { timeout: Some(5), ..Default::default() };
    let mut browser = Browser::new(config);

    let err = browser.load("http://127.0.0.1:1/").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert_eq!(browser.display(), "");
    assert_eq!(browser.current_url(), None);
    assert!(browser.history().is_empty());
    assert!(browser.status().starts_with("Error: "));
}
