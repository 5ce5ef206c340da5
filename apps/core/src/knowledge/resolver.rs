//! Topic resolution with tiered fallback.
//!
//! Tries the external lookup first, renders disambiguation when the topic is
//! ambiguous, and drops to a small offline knowledge base on any failure. The
//! resolver never returns an error: the fallback path is the terminal recovery.

use std::sync::Arc;

use tracing::warn;

use super::lookup::{KnowledgeLookup, LookupOutcome};
use crate::models::Level;

/// Where the explanation content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Wikipedia,
    InternalDatabase,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Source::Wikipedia => "Wikipedia",
            Source::InternalDatabase => "Internal Database",
        };
        write!(f, "{}", label)
    }
}

/// Body text plus its source attribution.
#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub body: String,
    pub source: Source,
}

/// Offline knowledge base, keyed by lowercased topic. A closed table with
/// documented seed keys, not an open-ended store.
const FALLBACK_DEFINITIONS: &[(&str, &str)] = &[
    (
        "python",
        "Python is a high-level general-purpose programming language.",
    ),
    (
        "photosynthesis",
        "The process by which green plants and some other organisms use sunlight to synthesize foods.",
    ),
];

pub struct KnowledgeResolver {
    lookup: Arc<dyn KnowledgeLookup>,
}

impl KnowledgeResolver {
    pub fn new(lookup: Arc<dyn KnowledgeLookup>) -> Self {
        Self { lookup }
    }

    /// Resolves a topic into explanation body text.
    ///
    /// Always returns content; ambiguity becomes a disambiguation block and
    /// every other failure routes into the offline fallback.
    pub async fn resolve(&self, topic: &str, level: Level) -> ResolvedContent {
        let outcome = self.lookup.summarize(topic, level.sentence_budget()).await;

        match outcome {
            LookupOutcome::Resolved {
                summary,
                canonical_url,
            } => {
                let mut body = format!("Overview\n{}", summary);
                if level != Level::Basic {
                    if let Some(url) = canonical_url {
                        body.push_str(&format!("\n\nRead the full article at: {}", url));
                    }
                }
                ResolvedContent {
                    body,
                    source: Source::Wikipedia,
                }
            }
            LookupOutcome::Ambiguous(options) => {
                let mut body = format!("'{}' is ambiguous. Did you mean:", topic);
                for option in options.iter().take(5) {
                    body.push_str(&format!("\n- {}", option));
                }
                ResolvedContent {
                    body,
                    source: Source::Wikipedia,
                }
            }
            LookupOutcome::NotFound => self.fallback(topic),
            LookupOutcome::TransportFailure(detail) => {
                warn!(topic, %detail, "Lookup failed; using internal database");
                self.fallback(topic)
            }
        }
    }

    fn fallback(&self, topic: &str) -> ResolvedContent {
        let key = topic.to_lowercase();
        let definition = FALLBACK_DEFINITIONS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, definition)| definition.to_string())
            .unwrap_or_else(|| {
                format!(
                    "Sorry, I couldn't find detailed info on '{}'. Please check your spelling or internet connection.",
                    topic
                )
            });

        ResolvedContent {
            body: format!("Definition (Offline Mode)\n{}", definition),
            source: Source::InternalDatabase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Lookup double that returns a fixed outcome for every call.
    struct ScriptedLookup(LookupOutcome);

    #[async_trait]
    impl KnowledgeLookup for ScriptedLookup {
        async fn summarize(&self, _topic: &str, _sentences: usize) -> LookupOutcome {
            self.0.clone()
        }
    }

    fn resolver_with(outcome: LookupOutcome) -> KnowledgeResolver {
        KnowledgeResolver::new(Arc::new(ScriptedLookup(outcome)))
    }

    #[tokio::test]
    async fn test_basic_level_omits_article_link() {
        let resolver = resolver_with(LookupOutcome::Resolved {
            summary: "Gravity pulls.".to_string(),
            canonical_url: Some("https://en.wikipedia.org/wiki/Gravity".to_string()),
        });

        let content = resolver.resolve("Gravity", Level::Basic).await;

        assert!(content.body.contains("Overview"));
        assert!(content.body.contains("Gravity pulls."));
        assert!(!content.body.contains("Read the full article"));
        assert_eq!(content.source, Source::Wikipedia);
    }

    #[tokio::test]
    async fn test_intermediate_level_appends_article_link() {
        let resolver = resolver_with(LookupOutcome::Resolved {
            summary: "Gravity pulls.".to_string(),
            canonical_url: Some("https://en.wikipedia.org/wiki/Gravity".to_string()),
        });

        let content = resolver.resolve("Gravity", Level::Intermediate).await;

        assert!(content
            .body
            .contains("Read the full article at: https://en.wikipedia.org/wiki/Gravity"));
    }

    #[tokio::test]
    async fn test_advanced_without_url_has_no_link() {
        let resolver = resolver_with(LookupOutcome::Resolved {
            summary: "Gravity pulls.".to_string(),
            canonical_url: None,
        });

        let content = resolver.resolve("Gravity", Level::Advanced).await;

        assert!(!content.body.contains("Read the full article"));
    }

    #[tokio::test]
    async fn test_ambiguous_lists_at_most_five_options() {
        let options: Vec<String> = (1..=8).map(|i| format!("Option {}", i)).collect();
        let resolver = resolver_with(LookupOutcome::Ambiguous(options));

        let content = resolver.resolve("Mercury", Level::Basic).await;

        assert!(content.body.contains("'Mercury' is ambiguous"));
        for i in 1..=5 {
            assert!(content.body.contains(&format!("- Option {}", i)));
        }
        assert!(!content.body.contains("Option 6"));
        assert!(!content.body.contains("Read the full article"));
        assert_eq!(content.source, Source::Wikipedia);
    }

    #[tokio::test]
    async fn test_not_found_uses_known_fallback_entry() {
        let resolver = resolver_with(LookupOutcome::NotFound);

        let content = resolver.resolve("Python", Level::Basic).await;

        assert!(content.body.contains("Definition (Offline Mode)"));
        assert!(content
            .body
            .contains("high-level general-purpose programming language"));
        assert_eq!(content.source, Source::InternalDatabase);
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_fallback() {
        let resolver =
            resolver_with(LookupOutcome::TransportFailure("connection refused".to_string()));

        let content = resolver.resolve("Quantum Chromodynamics", Level::Advanced).await;

        assert!(content
            .body
            .contains("couldn't find detailed info on 'Quantum Chromodynamics'"));
        assert_eq!(content.source, Source::InternalDatabase);
    }

    #[tokio::test]
    async fn test_fallback_key_is_case_insensitive() {
        let resolver = resolver_with(LookupOutcome::NotFound);

        let content = resolver.resolve("PHOTOSYNTHESIS", Level::Basic).await;

        assert!(content.body.contains("sunlight to synthesize foods"));
    }
}
