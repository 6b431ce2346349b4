//! Drafting stages
//!
//! Each stage reads part of the workflow state, issues exactly one
//! generator call, and parses the output into post options. There is no
//! retry and no fabricated content: a generator failure propagates
//! unchanged to the caller.

use std::sync::Arc;

use promo_agent::Generator;
use promo_core::Result;
use tracing::{debug, info};

use crate::parser::parse_posts;
use crate::prompt::{build_content_prompt, build_revision_prompt};

/// Stage that drafts the initial post options from the user's request
pub struct ContentStage {
    generator: Arc<dyn Generator>,
}

impl ContentStage {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Draft post options for a marketing request
    pub async fn run(&self, question: &str) -> Result<Vec<String>> {
        let prompt = build_content_prompt(question);
        debug!("Content prompt: {} chars", prompt.len());

        let raw = self.generator.invoke(&prompt).await?;
        let posts = parse_posts(&raw);

        info!("Content stage produced {} post options", posts.len());
        Ok(posts)
    }
}

/// Stage that revises the original post options per caller feedback
pub struct RevisionStage {
    generator: Arc<dyn Generator>,
}

impl RevisionStage {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Revise the original posts. Absent feedback falls back to an empty
    /// string; the revision is still attempted.
    pub async fn run(&self, posts: &[String], feedback: Option<&str>) -> Result<Vec<String>> {
        let prompt = build_revision_prompt(posts, feedback.unwrap_or(""));
        debug!("Revision prompt: {} chars", prompt.len());

        let raw = self.generator.invoke(&prompt).await?;
        let revised = parse_posts(&raw);

        info!("Revision stage produced {} post options", revised.len());
        Ok(revised)
    }
}
