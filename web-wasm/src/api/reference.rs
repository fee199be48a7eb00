//! Treatment guidance and location catalog endpoints

use leafscan_common::{Result, Treatment, TreatmentResponse};

use super::client::{get_json, ApiConfig};

pub async fn treatment_for(config: &ApiConfig, disease: &str) -> Result<Treatment> {
    let encoded = String::from(js_sys::encode_uri_component(disease));
    let response: TreatmentResponse =
        get_json(&config.url(&format!("/utils/treatments/{}", encoded))).await?;
    Ok(response.into())
}

pub async fn counties(config: &ApiConfig) -> Result<Vec<String>> {
    get_json(&config.url("/geolocation/counties")).await
}

pub async fn towns(config: &ApiConfig, county: &str) -> Result<Vec<String>> {
    let encoded = String::from(js_sys::encode_uri_component(county));
    get_json(&config.url(&format!("/geolocation/towns/{}", encoded))).await
}
