// Study Buddy Core
// "The Brain" - message focus analytics and topic explanations

pub mod brain;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod sources;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use config::Settings;
pub use engine::StudyBuddyEngine;
pub use error::AppError;
pub use models::{
    AnalyzeRequest, ExplainRequest, ExplanationResult, FilterMode, FocusReport, Level,
    MessageFilter,
};
