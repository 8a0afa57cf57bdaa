//! # PhishNet Client
//!
//! HTTP clients for the external phishing-analysis service.
//!
//! [`AnalysisClient`] submits an email or a screenshot and returns the
//! verdict. [`UploadClient`] contributes labeled samples to the PhishBowl
//! corpus. Both share [`ClientConfig`] and [`ClientError`].

pub mod analyze;
pub mod config;
pub mod error;
mod transport;
pub mod upload;

pub use analyze::AnalysisClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use upload::UploadClient;
