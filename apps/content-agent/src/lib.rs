pub mod cli;
pub mod config;
pub mod errors;
pub mod generation;
pub mod models;
pub mod output;

pub use errors::AppError;
pub use generation::analyzer::{AnalysisReport, ContentAnalyzer, RuleBasedAnalyzer};
pub use generation::generator::ContentAgent;
pub use generation::validation::{validate_request, ValidationError, ValidationErrorKind};
pub use models::content::{ContentVariation, GenerationResult};
pub use models::request::{Audience, ContentRequest, ContentType, Platform, RawContentRequest, Tone};
