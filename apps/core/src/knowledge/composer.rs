//! Final assembly of an explanation result.

use super::resolver::KnowledgeResolver;
use super::resources::ResourceRecommender;
use crate::models::{ExplanationResult, Level};

/// Combines resolver content and resource recommendations into one result.
///
/// Inherits the no-fail guarantee of both collaborators; `compose` always
/// returns a populated result.
pub struct ExplanationComposer {
    resolver: KnowledgeResolver,
    recommender: ResourceRecommender,
}

impl ExplanationComposer {
    pub fn new(resolver: KnowledgeResolver, recommender: ResourceRecommender) -> Self {
        Self {
            resolver,
            recommender,
        }
    }

    pub async fn compose(&self, topic: &str, level: Level) -> ExplanationResult {
        let resolved = self.resolver.resolve(topic, level).await;
        let resources = self.recommender.recommend(topic);

        let mut content = resolved.body;

        if !resources.is_empty() {
            content.push_str("\n\nRecommended Study Resources");
            for resource in &resources {
                content.push_str(&format!(
                    "\n- {} ({}) - {}",
                    resource.name, resource.url, resource.kind
                ));
            }
        }

        content.push_str(&format!("\n\nSource: {}", resolved.source));

        ExplanationResult {
            title: format!("{} ({})", topic, level),
            content,
        }
    }
}
