//! Focus report aggregation.
//!
//! Classifies each message independently and folds the labels into counts, a
//! focus score, and a human-readable insight.

use std::sync::Arc;

use crate::brain::classifier::{Label, MessageClassifier};
use crate::models::{FilterMode, FocusReport};

const INSIGHT_EMPTY: &str = "No messages to analyze yet.";
const INSIGHT_EXCELLENT: &str = "Excellent focus! Keep it up.";
const INSIGHT_GOOD: &str = "Good study session, but try to minimize distractions.";
const INSIGHT_DISTRACTED: &str =
    "High distraction level detected. Suggest taking a break or using Focus Mode.";

/// Aggregates per-message classifications into a [`FocusReport`].
///
/// Holds a shared reference to the frozen classifier model; `analyze` is a pure
/// function of its inputs, safe to call from any number of concurrent requests.
pub struct FocusAnalytics {
    classifier: Arc<MessageClassifier>,
}

impl FocusAnalytics {
    pub fn new(classifier: Arc<MessageClassifier>) -> Self {
        Self { classifier }
    }

    /// Produces a focus report for an ordered list of message texts.
    ///
    /// The messages are assumed pre-filtered to the requesting user and time
    /// window; `filter` is only echoed back in the report.
    pub fn analyze(&self, messages: &[String], filter: FilterMode) -> FocusReport {
        if messages.is_empty() {
            return FocusReport {
                study_count: 0,
                distraction_count: 0,
                focus_score: 0.0,
                insights: INSIGHT_EMPTY.to_string(),
                filter_applied: filter,
            };
        }

        let study_count = messages
            .iter()
            .filter(|msg| self.classifier.classify(msg) == Label::Study)
            .count();
        let distraction_count = messages.len() - study_count;

        let focus_score = round_one_decimal(study_count as f64 / messages.len() as f64 * 100.0);

        let insights = if focus_score > 75.0 {
            INSIGHT_EXCELLENT
        } else if focus_score > 50.0 {
            INSIGHT_GOOD
        } else {
            INSIGHT_DISTRACTED
        };

        tracing::debug!(
            study_count,
            distraction_count,
            focus_score,
            filter = %filter,
            "Focus report computed"
        );

        FocusReport {
            study_count,
            distraction_count,
            focus_score,
            insights: insights.to_string(),
            filter_applied: filter,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
