// src/answer.rs

use crate::models::Entry;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source of the answer shown under an entry's detail view.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn answer(&self, entry: &Entry) -> String;
}

/// Stand-in for a real model integration: waits a fixed delay, then echoes
/// the entry back. Not cancellable; recomputed on every call.
#[derive(Debug, Clone)]
pub struct PlaceholderAnswer {
    pub delay: Duration,
}

impl Default for PlaceholderAnswer {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1200),
        }
    }
}

#[async_trait]
impl AnswerSource for PlaceholderAnswer {
    async fn answer(&self, entry: &Entry) -> String {
        debug!("generating placeholder answer for entry {}", entry.id);
        tokio::time::sleep(self.delay).await;
        let subject = if entry.content.trim().is_empty() {
            &entry.title
        } else {
            &entry.content
        };
        format!("This is an AI-generated answer for: {}", subject)
    }
}
