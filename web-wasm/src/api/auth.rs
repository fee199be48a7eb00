//! Authentication and registration endpoints

use leafscan_common::{
    AgrovetRegistration, ExtensionWorkerRegistration, LoginRequest, LoginResponse,
    MessageResponse, Result, SignupRequest,
};

use super::client::{post_json, ApiConfig};

pub async fn login(config: &ApiConfig, request: &LoginRequest) -> Result<LoginResponse> {
    post_json(&config.url("/auth/login"), request).await
}

pub async fn signup(config: &ApiConfig, request: &SignupRequest) -> Result<MessageResponse> {
    post_json(&config.url("/auth/register"), request).await
}

pub async fn register_agrovet(
    config: &ApiConfig,
    registration: &AgrovetRegistration,
) -> Result<MessageResponse> {
    post_json(&config.url("/auth/register/agrovet"), registration).await
}

pub async fn register_extension_worker(
    config: &ApiConfig,
    registration: &ExtensionWorkerRegistration,
) -> Result<MessageResponse> {
    post_json(&config.url("/auth/register/extension-worker"), registration).await
}
