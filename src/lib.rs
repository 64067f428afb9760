//! # Edge Classifier
//!
//! A Rust client for a zero-shot classification service running CLIP
//! (images) and CLAP (audio) models. Callers upload a file together with
//! a list of candidate text labels and get back how well each label
//! describes the input.
//!
//! ## Features
//!
//! - **Image & Audio Classification**: multipart uploads to the CLIP and CLAP endpoints
//! - **Health Checks**: query model loading status
//! - **Samples**: download the demo files the server ships
//! - **Typed Responses**: opaque JSON with on-demand typed views
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use classifier::{api::ApiClient, file::NamedFile, labels::parse_labels};
//! use url::Url;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(Url::parse("http://localhost:8000")?)?;
//!
//! let image = NamedFile::from_path("cat.jpg").await?;
//! let labels = parse_labels("a cat, a dog, a car")?;
//!
//! let result = client.classify_image(image, &labels).await?;
//! if let Some(best) = result.report()?.best() {
//!     println!("{} ({:.1}%)", best.label, best.score * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

/// API client and types for talking to the classification service
pub mod api;

/// File-like payloads for uploads and downloaded samples
pub mod file;

/// Candidate label parsing
pub mod labels;

/// Demo sample catalog
pub mod samples;
