use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,

    /// Present only when the auth service rotates refresh tokens.
    #[serde(default, alias = "refresh_token")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,

    #[serde(alias = "refresh_token")]
    pub refresh_token: String,

    #[serde(default, alias = "id", alias = "userId")]
    pub uid: Option<Value>,

    #[serde(default)]
    pub username: Option<String>,
}
