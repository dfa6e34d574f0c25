//! Dataset loading and the fixed analysis query catalogue.

pub mod engine;
pub mod errors;
pub mod loader;
pub mod model;
pub mod queries;
pub mod report;

pub use engine::AnalysisEngine;
pub use errors::AnalyzeError;
pub use loader::load_rentals;
pub use model::{AnalysisReport, AnalysisResult, AnalyzeOptions};
pub use report::render_report;
