use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;

use super::*;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn host_config(backend_url: Option<String>) -> HostConfig {
    HostConfig {
        bind: "127.0.0.1".to_owned(),
        port: 0,
        backend_url,
        proxy_timeout: Duration::from_secs(5),
    }
}

async fn serve_host(backend_url: Option<String>) -> String {
    let state = proxy_state(&host_config(backend_url)).unwrap();
    serve(api_routes(state)).await
}

/// Backend stand-in: answers the session check and echoes the cookie it saw.
fn fake_backend() -> Router {
    Router::new()
        .route("/api/auth/logout", post(|| async { Response::new(Body::from("bye")) }))
        .route(
            "/api/auth/check",
            post(|headers: HeaderMap| async move {
                let cookie = headers
                    .get(header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_owned();
                let body = format!(r#"{{"user":{{"username":"alice"}},"error":false,"errorMessage":"{cookie}"}}"#);
                let mut response = body.into_response();
                response
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, HeaderValue::from_static("session=refreshed; Path=/"));
                response
                    .headers_mut()
                    .insert("x-backend-internal", HeaderValue::from_static("1"));
                response
            }),
        )
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_answers_ok() {
    let host = serve_host(None).await;
    let response = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Forwarding
// =============================================================================

#[tokio::test]
async fn api_without_backend_answers_503() {
    let host = serve_host(None).await;
    let response = reqwest::Client::new()
        .post(format!("{host}/api/auth/check"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn api_with_unreachable_backend_answers_502() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let host = serve_host(Some(dead)).await;
    let response = reqwest::Client::new()
        .post(format!("{host}/api/auth/check"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn api_request_is_forwarded_with_cookie() {
    let backend = serve(fake_backend()).await;
    let host = serve_host(Some(backend)).await;

    let response = reqwest::Client::new()
        .post(format!("{host}/api/auth/check"))
        .header(header::COOKIE, "session=abc")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(response.headers().get(header::SET_COOKIE).unwrap(), "session=refreshed; Path=/");
    assert!(response.headers().get("x-backend-internal").is_none());

    let body = response.text().await.unwrap();
    assert!(body.contains(r#""username":"alice""#));
    assert!(body.contains(r#""errorMessage":"session=abc""#));
}

#[tokio::test]
async fn unknown_backend_route_status_is_relayed() {
    let backend = serve(fake_backend()).await;
    let host = serve_host(Some(backend)).await;

    let response = reqwest::get(format!("{host}/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn backend_without_content_type_is_relayed_without_one() {
    let backend = serve(fake_backend()).await;
    let host = serve_host(Some(backend)).await;

    let response = reqwest::Client::new()
        .post(format!("{host}/api/auth/logout"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    assert_eq!(response.text().await.unwrap(), "bye");
}
