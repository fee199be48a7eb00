//! LeafScan Common Library
//!
//! Types and pure controller logic shared by the web client:
//! wire payloads, confidence tiers, the view state machine, the
//! session store seam and local validation.

pub mod confidence;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod types;
pub mod validate;
pub mod view;

pub use confidence::ConfidenceTier;
pub use error::{Error, Result};
pub use pipeline::align_results;
pub use session::{display_name_for, MemoryStore, Session, SessionStore};
pub use types::{
    AgrovetRegistration, ClassificationResult, Coordinates, EnrichedRow,
    ExtensionWorkerRegistration, LoginRequest, LoginResponse, MessageResponse, SignupRequest,
    Treatment, TreatmentResponse, UploadResponse,
};
pub use view::{initial_surface, transition, NavAction, ViewSurface};
