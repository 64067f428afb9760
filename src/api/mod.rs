// Re-export the API module components
pub use self::{
    client::{ApiClient, DEFAULT_BASE_URL},
    errors::ApiClientError,
    models::{
        ClassificationReport, ClassificationResult, HealthReport, HealthStatus, InferenceMetrics,
        LabelScore,
    },
    types::Modality,
};

// Module declarations
mod client;
mod errors;
mod models;
mod types;
