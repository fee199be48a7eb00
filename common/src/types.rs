//! Wire and domain types
//!
//! Payload shapes for every backend endpoint the client consumes, plus
//! the enriched row the results table renders.

use serde::{Deserialize, Deserializer, Serialize};

/// One classification from the batch upload response, positionally
/// aligned with the submitted files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationResult {
    pub disease: String,
    /// Percent in [0, 100]. The backend has shipped this both as a
    /// number and as a "85.32%" string; accept either.
    #[serde(deserialize_with = "confidence_from_repr")]
    pub confidence: f64,
}

/// `/upload` success body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub results: Vec<ClassificationResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfidenceRepr {
    Number(f64),
    Text(String),
}

fn confidence_from_repr<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match ConfidenceRepr::deserialize(deserializer)? {
        ConfidenceRepr::Number(value) => Ok(value),
        ConfidenceRepr::Text(text) => text
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(serde::de::Error::custom),
    }
}

/// `/utils/treatments/{disease}` success body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentResponse {
    pub treatment: String,
    pub treatment_images: Vec<String>,
}

/// Treatment guidance attached to a rendered row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Treatment {
    pub text: String,
    pub images: Vec<String>,
}

impl Treatment {
    /// Substituted when the per-row lookup fails; the row still renders.
    pub fn placeholder() -> Self {
        Self {
            text: "No treatment available".to_string(),
            images: Vec::new(),
        }
    }
}

impl From<TreatmentResponse> for Treatment {
    fn from(response: TreatmentResponse) -> Self {
        Self {
            text: response.treatment,
            images: response.treatment_images,
        }
    }
}

/// One fully enriched results-table row. Built per submission and
/// replaced wholesale by the next one.
#[derive(Debug, Clone, Default)]
pub struct EnrichedRow {
    pub classification: ClassificationResult,
    /// Data-URL preview decoded locally from the submitted file;
    /// absent when decoding failed.
    pub preview: Option<String>,
    pub treatment: Treatment,
}

/// Best-effort device location. Both fields absent on permission
/// denial or unsupported platforms; never blocks a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Coordinates {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// `/auth/login` request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `/auth/login` success body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub first_name: String,
}

/// `/auth/register` request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generic `{message}` success body shared by the registration endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

/// `/auth/register/agrovet` request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgrovetRegistration {
    pub name: String,
    pub county: String,
    pub town: String,
    pub contact: String,
}

/// `/auth/register/extension-worker` request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionWorkerRegistration {
    pub first_name: String,
    pub last_name: String,
    pub services: Vec<String>,
    pub county: String,
    pub town: String,
    pub contact: String,
}
