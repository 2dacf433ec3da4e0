mod common;

use client::domain::requests::LoginRequest;
use serde_json::json;
use shared::{errors::ApiError, model::Role};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn login_stores_session_with_role_from_token() {
    let mut server = mockito::Server::new_async().await;
    let access = common::token("FREELANCER", 3600, "login");

    let login = server
        .mock("POST", "/login")
        .match_body(mockito::Matcher::PartialJson(json!({"email": "ada@example.com"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": "success",
                "data": {
                    "accessToken": access,
                    "refreshToken": "refresh-9",
                    "username": "Ada"
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let di = common::dashboard(&server.url());
    let session = di.auth.login(&credentials()).await.unwrap();

    assert_eq!(session.role, "FREELANCER");
    assert_eq!(session.stored_role(), Some(Role::Freelancer));
    assert_eq!(session.uid, "17");
    assert_eq!(session.username, "Ada");
    assert_eq!(di.session.get_user_details().unwrap(), session);
    login.assert_async().await;
}

#[tokio::test]
async fn invalid_credentials_never_reach_the_backend() {
    let mut server = mockito::Server::new_async().await;
    let login = server.mock("POST", "/login").expect(0).create_async().await;

    let di = common::dashboard(&server.url());
    let result = di
        .auth
        .login(&LoginRequest {
            email: "not-an-email".into(),
            password: "123".into(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    login.assert_async().await;
}

#[tokio::test]
async fn rejected_login_leaves_no_session() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(401)
        .with_body("bad credentials")
        .create_async()
        .await;

    let di = common::dashboard(&server.url());
    let result = di.auth.login(&credentials()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert!(di.session.user_details().is_none());
}

#[tokio::test]
async fn logout_clears_the_session() {
    let server = mockito::Server::new_async().await;
    let di = common::dashboard(&server.url());
    common::login_as(&di, &common::fresh_token("a"), common::REFRESH_TOKEN);

    di.auth.logout();

    assert!(di.session.user_details().is_none());
}
