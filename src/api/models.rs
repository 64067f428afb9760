use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

/// Raw response of a classify endpoint.
///
/// The server owns the shape of this object; use
/// [`ClassificationResult::report`] to decode the documented schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult(Value);

impl ClassificationResult {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// # Errors
    ///
    /// Fails if the response doesn't follow the documented
    /// `{results, metrics}` schema.
    pub fn report(&self) -> Result<ClassificationReport, serde_json::Error> {
        decode(&self.0)
    }
}

/// Raw response of the health endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthStatus(Value);

impl HealthStatus {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `status` field, when present and a string.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// # Errors
    ///
    /// Fails if the body has no `status` string.
    pub fn report(&self) -> Result<HealthReport, serde_json::Error> {
        decode(&self.0)
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Body returned by the server alongside a non-success status.
#[derive(Debug)]
pub(crate) struct ErrorBody(Value);

impl ErrorBody {
    pub(crate) const FALLBACK: &'static str = "Classification failed";

    pub(crate) const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Message to surface for this body.
    ///
    /// A string `detail` is used verbatim, structured details (validation
    /// errors come as arrays) are rendered as JSON. Missing, null, false or
    /// empty details fall back to [`Self::FALLBACK`].
    pub(crate) fn message(&self) -> String {
        match self.0.get("detail") {
            None | Some(Value::Null | Value::Bool(false)) => Self::FALLBACK.to_owned(),
            Some(Value::String(detail)) if detail.is_empty() => Self::FALLBACK.to_owned(),
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LabelScore {
    pub label: String,
    /// Softmax probability across all candidate labels.
    pub score: f64,
    /// Raw cosine similarity between the input and the label embedding.
    pub similarity: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct InferenceMetrics {
    #[serde(default)]
    pub model_load_ms: f64,
    pub input_encoding_ms: f64,
    pub text_encoding_ms: f64,
    pub similarity_ms: f64,
    pub total_inference_ms: f64,
    pub num_candidates: usize,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClassificationReport {
    pub results: Vec<LabelScore>,
    pub metrics: InferenceMetrics,
}

impl ClassificationReport {
    /// Results ordered by descending score.
    pub fn ranked(&self) -> Vec<&LabelScore> {
        self.results
            .iter()
            .sorted_by(|a, b| b.score.total_cmp(&a.score))
            .collect()
    }

    pub fn best(&self) -> Option<&LabelScore> {
        self.results
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub clip_loaded: bool,
    #[serde(default)]
    pub clap_loaded: bool,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
