use crate::domain::requests::{
    LoginRequest, RegisterRequest, ResendOtpRequest, UpdateEmailRequest, UpdateUserInfoRequest,
    VerifyOtpRequest,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{errors::ApiError, model::Session};
use std::sync::Arc;

pub type DynAuthClient = Arc<dyn AuthClientTrait + Send + Sync>;

#[async_trait]
pub trait AuthClientTrait {
    async fn login(&self, input: &LoginRequest) -> Result<Session, ApiError>;
    async fn register(&self, input: &RegisterRequest) -> Result<Value, ApiError>;
    async fn verify_otp(&self, input: &VerifyOtpRequest) -> Result<Value, ApiError>;
    async fn resend_otp(&self, input: &ResendOtpRequest) -> Result<Value, ApiError>;
    async fn get_user_info(&self) -> Result<Value, ApiError>;
    async fn update_user_info(&self, input: &UpdateUserInfoRequest) -> Result<Value, ApiError>;
    async fn update_email(&self, input: &UpdateEmailRequest) -> Result<Value, ApiError>;
    fn logout(&self);
}
