//! Abstract external knowledge lookup.

use async_trait::async_trait;

/// Outcome of a single lookup attempt.
///
/// A closed set of variants so the resolver's control flow depends only on the
/// variant, never on a concrete backend's error types. Produced per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The topic resolved to one subject.
    Resolved {
        /// Summary trimmed to the requested sentence budget.
        summary: String,
        /// Canonical page link, when the backend knows one.
        canonical_url: Option<String>,
    },
    /// The topic name maps to multiple distinct subjects.
    Ambiguous(Vec<String>),
    /// The backend has no page for this topic.
    NotFound,
    /// Transport-level failure: connection, timeout, or a malformed response.
    TransportFailure(String),
}

/// Defines the public interface for the external knowledge lookup capability.
///
/// This trait abstracts the specific backend (Wikipedia in production, scripted
/// doubles in tests). Implementations never return an error: every failure mode
/// is one of the [`LookupOutcome`] variants.
#[async_trait]
pub trait KnowledgeLookup: Send + Sync + 'static {
    /// Looks up `topic` and returns a summary of at most `sentences` sentences,
    /// together with the canonical page link when the topic resolves cleanly.
    async fn summarize(&self, topic: &str, sentences: usize) -> LookupOutcome;
}
