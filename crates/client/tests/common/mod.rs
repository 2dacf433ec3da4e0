#![allow(dead_code)]

use chrono::Utc;
use client::{config::ClientConfig, di::DependenciesInject};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use shared::model::Session;

pub const REFRESH_TOKEN: &str = "refresh-1";

pub fn token(role: &str, expires_in_secs: i64, tag: &str) -> String {
    encode(
        &Header::default(),
        &json!({
            "role": role,
            "exp": Utc::now().timestamp() + expires_in_secs,
            "sub": "17",
            "jti": tag,
        }),
        &EncodingKey::from_secret(b"backend-only-secret"),
    )
    .unwrap()
}

pub fn fresh_token(tag: &str) -> String {
    token("CLIENT", 3600, tag)
}

pub fn stale_token(tag: &str) -> String {
    token("CLIENT", -60, tag)
}

pub fn config(url: &str) -> ClientConfig {
    ClientConfig {
        auth_url: url.to_string(),
        api_url: url.to_string(),
        contact_url: url.to_string(),
        trash_url: url.to_string(),
        refresh_path: "/refresh-token".to_string(),
        session_secret: "test-secret".to_string(),
    }
}

pub fn dashboard(url: &str) -> DependenciesInject {
    DependenciesInject::new(&config(url)).unwrap()
}

pub fn login_as(di: &DependenciesInject, access_token: &str, refresh_token: &str) {
    di.session
        .set_user_details(&Session {
            uid: "17".into(),
            username: "ada".into(),
            role: "CLIENT".into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_data: None,
        })
        .unwrap();
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
