use crate::{
    abstract_trait::AuthClientTrait,
    domain::{
        requests::{
            LoginRequest, RegisterRequest, ResendOtpRequest, UpdateEmailRequest,
            UpdateUserInfoRequest, VerifyOtpRequest,
        },
        response::{LoginResponse, from_envelope},
    },
    service::http::ApiClient,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{
    abstract_trait::DynSessionStore,
    errors::ApiError,
    model::{AccessClaims, Role, Session},
    utils::decode_claims,
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub struct AuthClientService {
    client: Arc<ApiClient>,
    session: DynSessionStore,
}

impl AuthClientService {
    pub fn new(client: Arc<ApiClient>, session: DynSessionStore) -> Self {
        Self { client, session }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn resolve_uid(response: &LoginResponse, claims: &AccessClaims) -> String {
    response
        .uid
        .as_ref()
        .or_else(|| claims.extra.get("id"))
        .or_else(|| claims.extra.get("sub"))
        .map(value_to_string)
        .unwrap_or_default()
}

#[async_trait]
impl AuthClientTrait for AuthClientService {
    async fn login(&self, input: &LoginRequest) -> Result<Session, ApiError> {
        input.validate()?;
        info!("Logging in {}", input.email);

        let body: Value = self.client.post_json("/login", input).await?;
        let response: LoginResponse = from_envelope(body)?;

        let claims = decode_claims(&response.access_token)
            .map_err(|e| ApiError::InvalidResponse(format!("unreadable access token: {e}")))?;

        let role = claims.role.clone().unwrap_or_default();
        if role.parse::<Role>().is_err() {
            warn!("Login token carries unrecognised role '{role}'");
        }

        let session = Session {
            uid: resolve_uid(&response, &claims),
            username: response
                .username
                .clone()
                .unwrap_or_else(|| input.email.clone()),
            role,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            token_data: Some(claims),
        };

        self.session.set_user_details(&session)?;
        info!("Logged in uid {} as {}", session.uid, session.role);
        Ok(session)
    }

    async fn register(&self, input: &RegisterRequest) -> Result<Value, ApiError> {
        input.validate()?;
        self.client.post_json("/register", input).await
    }

    async fn verify_otp(&self, input: &VerifyOtpRequest) -> Result<Value, ApiError> {
        input.validate()?;
        self.client.post_json("/verify-otp", input).await
    }

    async fn resend_otp(&self, input: &ResendOtpRequest) -> Result<Value, ApiError> {
        input.validate()?;
        self.client.post_json("/resend-otp", input).await
    }

    async fn get_user_info(&self) -> Result<Value, ApiError> {
        self.client.get_json("/user-info").await
    }

    async fn update_user_info(&self, input: &UpdateUserInfoRequest) -> Result<Value, ApiError> {
        input.validate()?;
        self.client.put_json("/user-info", input).await
    }

    async fn update_email(&self, input: &UpdateEmailRequest) -> Result<Value, ApiError> {
        input.validate()?;
        self.client.put_json("/update-email", input).await
    }

    fn logout(&self) {
        self.session.remove_user_details();
        info!("Logged out");
    }
}
