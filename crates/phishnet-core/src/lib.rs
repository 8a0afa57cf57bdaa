//! PhishNet Core Library
//!
//! Domain models and presentation logic for the PhishNet client: analysis
//! requests and verdicts, the confidence gauge, form validation and routes.

pub mod analysis;
pub mod color;
pub mod error;
pub mod form;
pub mod gauge;
pub mod routes;
pub mod submission;
pub mod upload;

pub use analysis::model::{AnalysisLabel, AnalysisRequest, AnalysisResult, EmailContent, ImageContent, ImageMime};
pub use color::Color;
pub use error::{PhishnetError, PhishnetResult};
pub use gauge::GaugeConfig;
pub use submission::{InFlight, SubmissionGuard};
pub use upload::model::{LabeledEmail, SampleLabel, UploadReceipt, UploadRequest};
