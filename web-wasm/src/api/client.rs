//! fetch plumbing shared by the endpoint modules

use leafscan_common::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// Backend location, injected at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Non-2xx bodies carry `{error}` when the backend rejected the request.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ApiErrorBody {
    error: Option<String>,
}

fn js_detail(error: JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

async fn send(request: Request) -> Result<Response> {
    let window =
        web_sys::window().ok_or_else(|| Error::Config("window is not available".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::Api(js_detail(e)))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| Error::Api(js_detail(e)))
}

/// Best-effort extraction of the backend's error message.
async fn error_message(response: &Response) -> String {
    let fallback = format!("API error: {}", response.status());
    let Ok(promise) = response.json() else {
        return fallback;
    };
    let Ok(json) = JsFuture::from(promise).await else {
        return fallback;
    };
    serde_wasm_bindgen::from_value::<ApiErrorBody>(json)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or(fallback)
}

async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(Error::Api(error_message(&response).await));
    }
    let promise = response.json().map_err(|e| Error::Api(js_detail(e)))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| Error::Api(js_detail(e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| Error::Api(js_detail(e)))?;

    into_json(send(request).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T> {
    let payload = serde_json::to_string(body)?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&payload)));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| Error::Api(js_detail(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| Error::Api(js_detail(e)))?;

    into_json(send(request).await?).await
}

/// Multipart POST. The browser sets the multipart boundary itself, so
/// no Content-Type is attached here.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: &FormData,
    bearer_token: Option<&str>,
) -> Result<T> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(form.as_ref()));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| Error::Api(js_detail(e)))?;
    if let Some(token) = bearer_token {
        request
            .headers()
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|e| Error::Api(js_detail(e)))?;
    }

    into_json(send(request).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/upload"), "http://127.0.0.1:5001/upload");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://api.example.com/".to_string(),
        };
        assert_eq!(
            config.url("/auth/login"),
            "http://api.example.com/auth/login"
        );
    }

    #[test]
    fn test_api_error_body_optional_error() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Invalid email"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid email"));

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}
