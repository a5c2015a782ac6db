use crate::constants::{
    API_AUTH_LOGIN, API_AUTH_LOGOUT, API_AUTH_PROFILE, API_AUTH_REGISTER, API_AUTH_RESET_PASSWORD,
    API_CAPTCHA_FORGOT_PASSWORD, API_CAPTCHA_SEND,
};
use crate::error::ApiError;
use crate::models::{
    CaptchaPurpose, CaptchaRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
    TokenResponse, User,
};
use crate::network::ApiClient;
use serde_json::Value;

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    api.post(API_AUTH_LOGIN, &body).await
}

pub async fn register(api: &ApiClient, request: &SignupRequest) -> Result<(), ApiError> {
    api.post::<_, Value>(API_AUTH_REGISTER, request).await?;
    Ok(())
}

/// Registration code.
pub async fn send_captcha(api: &ApiClient, email: &str, purpose: CaptchaPurpose) -> Result<(), ApiError> {
    let body = CaptchaRequest {
        email: email.to_string(),
        purpose: Some(purpose),
    };
    api.post::<_, Value>(API_CAPTCHA_SEND, &body).await?;
    Ok(())
}

/// Password-reset code; the backend only accepts registered addresses here.
pub async fn send_forgot_password_captcha(api: &ApiClient, email: &str) -> Result<(), ApiError> {
    let body = CaptchaRequest {
        email: email.to_string(),
        purpose: None,
    };
    api.post::<_, Value>(API_CAPTCHA_FORGOT_PASSWORD, &body).await?;
    Ok(())
}

pub async fn reset_password(api: &ApiClient, request: &ResetPasswordRequest) -> Result<(), ApiError> {
    api.post::<_, Value>(API_AUTH_RESET_PASSWORD, request).await?;
    Ok(())
}

pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty::<Value>(API_AUTH_LOGOUT).await?;
    Ok(())
}

pub async fn get_profile(api: &ApiClient) -> Result<User, ApiError> {
    api.get(API_AUTH_PROFILE, &[]).await
}
