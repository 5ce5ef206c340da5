use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Difficulty level requested for an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    /// Number of summary sentences fetched from the external lookup at this level.
    pub fn sentence_budget(&self) -> usize {
        match self {
            Level::Basic => 2,
            Level::Intermediate => 5,
            Level::Advanced => 10,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

/// Time window the caller selected when requesting a focus report.
///
/// The actual filtering happens in the excluded storage layer; the core only
/// echoes the mode back in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Today,
    Week,
    Custom,
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FilterMode::All => "all",
            FilterMode::Today => "today",
            FilterMode::Week => "week",
            FilterMode::Custom => "custom",
        };
        write!(f, "{}", label)
    }
}

/// Inclusive date bounds for a custom filter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Filter handed to a [`crate::sources::MessageSource`] when fetching messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFilter {
    pub mode: FilterMode,
    pub range: Option<DateRange>,
}

impl MessageFilter {
    pub fn all() -> Self {
        Self {
            mode: FilterMode::All,
            range: None,
        }
    }
}

/// Incoming payload for a focus-analysis request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub filter_mode: FilterMode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AnalyzeRequest {
    /// Parses and validates the custom date bounds.
    ///
    /// Dates use the `YYYY-MM-DD` wire format. An unparsable or
    /// inverted bound is rejected here, before anything reaches the aggregator.
    pub fn date_range(&self) -> Result<Option<DateRange>, AppError> {
        if self.filter_mode != FilterMode::Custom {
            return Ok(None);
        }

        let parse = |value: &Option<String>| -> Result<Option<NaiveDate>, AppError> {
            match value {
                Some(raw) => Ok(Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)),
                None => Ok(None),
            }
        };

        let start = parse(&self.start_date)?;
        let end = parse(&self.end_date)?;

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::Validation(format!(
                    "Inverted date range: {} is after {}",
                    start, end
                )));
            }
        }

        Ok(Some(DateRange { start, end }))
    }

    /// Builds the filter passed to the message source.
    pub fn filter(&self) -> Result<MessageFilter, AppError> {
        Ok(MessageFilter {
            mode: self.filter_mode,
            range: self.date_range()?,
        })
    }
}

/// Incoming payload for an explanation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplainRequest {
    /// The topic to look up. Must not be empty.
    #[validate(length(min = 1))]
    pub topic: String,
    pub level: Level,
}

/// Aggregated result of classifying a user's recent messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusReport {
    /// Number of messages classified as Study.
    pub study_count: usize,
    /// Number of messages classified as Distraction.
    pub distraction_count: usize,
    /// Percentage of analyzed messages classified Study, rounded to one decimal.
    pub focus_score: f64,
    /// Human-readable takeaway derived from the score.
    pub insights: String,
    /// The time window the caller requested.
    pub filter_applied: FilterMode,
}

/// Structured explanation returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResult {
    /// "{topic} ({level})"
    pub title: String,
    /// Overview, optional article pointer, resource list, and source tag.
    pub content: String,
}
