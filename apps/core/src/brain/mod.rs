//! # Brain Module
//!
//! Message classification and focus analytics for Study Buddy.
//! Classifies chat messages as study-related or distractions, then aggregates
//! the labels into a focus report.
//!
//! ## Components
//! - `corpus`: Embedded labeled training examples
//! - `classifier`: Naive Bayes Study/Distraction classifier
//! - `analytics`: Focus report aggregation over message lists

pub mod analytics;
pub mod classifier;
pub mod corpus;

pub use analytics::FocusAnalytics;
pub use classifier::{Label, MessageClassifier};
pub use corpus::{training_corpus, TrainingExample};
