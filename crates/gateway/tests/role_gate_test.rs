use axum::{
    Router,
    body::{Body, to_bytes},
    http::{
        Method, Request, StatusCode,
        header::{COOKIE, LOCATION, SET_COOKIE},
    },
    response::Response,
};
use gateway::{config::Config, handler::AppRouter, state::AppState};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use shared::{
    config::{DEFAULT_SESSION_SECRET, SESSION_COOKIE_NAME, SessionCookie},
    model::Session,
};
use std::sync::Arc;
use tower::ServiceExt;

fn app(upstream: &str) -> Router {
    let config = Config {
        port: 0,
        upstream_url: upstream.to_string(),
        session_secret: DEFAULT_SESSION_SECRET.to_string(),
    };
    let state = AppState::new(&config).unwrap();
    AppRouter::build(Arc::new(state))
}

fn access_token(role: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 600;
    encode(
        &Header::default(),
        &json!({ "sub": "17", "role": role, "exp": exp }),
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

fn session_cookie(access_token: String) -> String {
    let session = Session {
        uid: "17".into(),
        username: "ada".into(),
        role: "CLIENT".into(),
        access_token,
        refresh_token: "refresh-1".into(),
        token_data: None,
    };
    let cookie = SessionCookie::default().seal(&session).unwrap();
    format!("{}={}", cookie.name(), cookie.value())
}

async fn get(app: Router, path: &str, cookie: Option<String>) -> Response {
    send(app, Method::GET, path, cookie).await
}

async fn send(app: Router, method: Method, path: &str, cookie: Option<String>) -> Response {
    let mut request = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn assert_redirect(response: &Response, target: &str) {
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[LOCATION], target);
}

#[tokio::test]
async fn anonymous_dashboard_visit_goes_to_login() {
    let server = mockito::Server::new_async().await;

    let response = get(app(&server.url()), "/dashboard/client/projects", None).await;

    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn freelancer_is_kept_out_of_admin_pages() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cookie = session_cookie(access_token("FREELANCER"));
    let response = get(app(&server.url()), "/dashboard/Administrator/blogs", Some(cookie)).await;

    assert_redirect(&response, "/unauthorized");
    upstream.assert_async().await;
}

#[tokio::test]
async fn freelancer_page_is_proxied_to_upstream() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/dashboard/freelancer/projects")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<h1>projects</h1>")
        .create_async()
        .await;

    let cookie = session_cookie(access_token("FREELANCER"));
    let response = get(app(&server.url()), "/dashboard/freelancer/projects", Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<h1>projects</h1>");
    upstream.assert_async().await;
}

#[tokio::test]
async fn root_sends_each_role_to_its_landing_page() {
    let server = mockito::Server::new_async().await;

    let client = get(app(&server.url()), "/", Some(session_cookie(access_token("CLIENT")))).await;
    assert_redirect(&client, "/dashboard/client");

    let admin = get(app(&server.url()), "/", Some(session_cookie(access_token("ADMIN")))).await;
    assert_redirect(&admin, "/dashboard/Administrator");

    let unknown = get(app(&server.url()), "/", Some(session_cookie(access_token("GUEST")))).await;
    assert_redirect(&unknown, "/unauthorized");
}

#[tokio::test]
async fn tampered_cookie_goes_to_login() {
    let server = mockito::Server::new_async().await;

    let cookie = format!("{SESSION_COOKIE_NAME}=bm90LWEtcmVhbC1zZXNzaW9u");
    let response = get(app(&server.url()), "/dashboard/client", Some(cookie)).await;

    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn session_without_access_token_goes_to_login() {
    let server = mockito::Server::new_async().await;

    let response = get(
        app(&server.url()),
        "/dashboard/client",
        Some(session_cookie(String::new())),
    )
    .await;

    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn unauthorized_page_bounces_to_login() {
    let server = mockito::Server::new_async().await;

    let response = get(app(&server.url()), "/unauthorized", None).await;

    assert_redirect(&response, "/login");
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let server = mockito::Server::new_async().await;

    let cookie = session_cookie(access_token("CLIENT"));
    let response = send(app(&server.url()), Method::POST, "/logout", Some(cookie)).await;

    assert_redirect(&response, "/login");
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=;")));
}

#[tokio::test]
async fn logout_is_not_reachable_by_get() {
    let server = mockito::Server::new_async().await;

    let cookie = session_cookie(access_token("CLIENT"));
    let response = get(app(&server.url()), "/logout", Some(cookie)).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn dot_segments_cannot_climb_into_admin_pages() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(200)
        .with_body("ADMIN PAGE")
        .expect(0)
        .create_async()
        .await;

    for path in [
        "/dashboard/freelancer/../Administrator/blogs",
        "/dashboard/freelancer/%2e%2e/Administrator/blogs",
        "/dashboard/freelancer/%2E%2E/Administrator/blogs",
    ] {
        let cookie = session_cookie(access_token("FREELANCER"));
        let response = get(app(&server.url()), path, Some(cookie)).await;
        assert_redirect(&response, "/unauthorized");
    }

    upstream.assert_async().await;
}

#[tokio::test]
async fn dot_segments_through_ungated_paths_are_sent_back_resolved() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cookie = session_cookie(access_token("FREELANCER"));
    let response = get(
        app(&server.url()),
        "/login/../dashboard/Administrator/blogs",
        Some(cookie),
    )
    .await;

    assert_redirect(&response, "/dashboard/Administrator/blogs");
    upstream.assert_async().await;
}

#[tokio::test]
async fn login_page_is_not_gated() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("GET", "/login")
        .with_status(200)
        .with_body("login")
        .create_async()
        .await;

    let response = get(app(&server.url()), "/login", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    upstream.assert_async().await;
}

#[tokio::test]
async fn metrics_count_gate_decisions() {
    let server = mockito::Server::new_async().await;
    let app = app(&server.url());

    let _ = get(app.clone(), "/dashboard/client", None).await;
    let response = get(app, "/metrics", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(r#"gate_decisions_total{decision="Login"} 1"#));
}
