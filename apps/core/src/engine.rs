//! Study Buddy engine: the service object the host process wires in.
//!
//! Constructed once at startup (training the classifier is part of
//! construction) and then shared by reference across request handlers. All
//! state is read-only after construction, so concurrent calls need no locking.

use std::sync::Arc;

use tracing::info;

use crate::brain::{training_corpus, FocusAnalytics, MessageClassifier};
use crate::config::Settings;
use crate::error::AppError;
use crate::knowledge::{
    ExplanationComposer, KnowledgeLookup, KnowledgeResolver, ResourceRecommender, WikipediaLookup,
};
use crate::models::{ExplanationResult, FilterMode, FocusReport, Level, MessageFilter};
use crate::sources::MessageSource;

pub struct StudyBuddyEngine {
    analytics: FocusAnalytics,
    composer: ExplanationComposer,
}

impl StudyBuddyEngine {
    /// Builds the engine with the production Wikipedia lookup.
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let lookup = Arc::new(WikipediaLookup::new(settings)?);
        Self::with_lookup(lookup)
    }

    /// Builds the engine around an arbitrary lookup implementation.
    ///
    /// Fails only when the embedded corpus cannot train the classifier, which
    /// is fatal: the process must not start without a model.
    pub fn with_lookup(lookup: Arc<dyn KnowledgeLookup>) -> Result<Self, AppError> {
        let classifier = Arc::new(MessageClassifier::train(training_corpus())?);
        let analytics = FocusAnalytics::new(classifier);

        let resolver = KnowledgeResolver::new(lookup);
        let composer = ExplanationComposer::new(resolver, ResourceRecommender::new());

        info!("Study Buddy engine initialized");
        Ok(Self {
            analytics,
            composer,
        })
    }

    /// Classifies the given messages and aggregates them into a focus report.
    pub fn analyze_focus(&self, messages: &[String], filter: FilterMode) -> FocusReport {
        self.analytics.analyze(messages, filter)
    }

    /// Fetches a user's messages through the storage collaborator and reports
    /// on them. Fetch errors propagate; analysis itself cannot fail.
    pub async fn analyze_user(
        &self,
        source: &dyn MessageSource,
        user_id: &str,
        filter: &MessageFilter,
    ) -> Result<FocusReport, AppError> {
        let messages = source.fetch_messages(user_id, filter).await?;
        Ok(self.analytics.analyze(&messages, filter.mode))
    }

    /// Produces a structured explanation for a topic at the requested level.
    /// Never fails: lookup problems degrade into fallback content.
    pub async fn explain(&self, topic: &str, level: Level) -> ExplanationResult {
        self.composer.compose(topic, level).await
    }
}
