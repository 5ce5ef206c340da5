//! Boundary trait for the message storage collaborator.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::MessageFilter;

/// Defines the public interface for the persisted message store.
///
/// The store owns filtering: it returns the requesting user's message texts,
/// already restricted to the selected time window, in chronological order.
/// The analytics engine never filters by time or author itself.
#[async_trait]
pub trait MessageSource: Send + Sync + 'static {
    /// Fetches the message texts a focus report should cover.
    async fn fetch_messages(
        &self,
        user_id: &str,
        filter: &MessageFilter,
    ) -> Result<Vec<String>, AppError>;
}
