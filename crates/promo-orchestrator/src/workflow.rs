//! Workflow orchestrator
//!
//! Owns the injected generation capability and sequences the two stages:
//! the content stage runs once per request, then one revision round per
//! feedback submission. Every operation returns an updated copy of the
//! state; on failure the caller's state keeps its pre-failure shape.

use std::sync::Arc;

use promo_agent::Generator;
use promo_core::{PromoError, Result, WorkflowState};
use tracing::info;

use crate::stages::{ContentStage, RevisionStage};
use crate::state_machine::{transition, Action, Event};

/// Sequential drafting workflow over an injected generator.
///
/// The capability handle is passed in at construction; tests substitute a
/// scripted double.
pub struct Workflow {
    content: ContentStage,
    revision: RevisionStage,
}

impl Workflow {
    /// Create a workflow backed by the given generation capability
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            content: ContentStage::new(Arc::clone(&generator)),
            revision: RevisionStage::new(generator),
        }
    }

    /// Run the content stage for a fresh request.
    ///
    /// Returns a state with `marketing_posts` populated and `final_posts`
    /// absent. A generation failure aborts the run; no state escapes.
    pub async fn run_initial(&self, question: &str) -> Result<WorkflowState> {
        let mut state = WorkflowState::new(question);
        info!("Run {}: drafting posts for request", state.run_id());

        let posts = self.content.run(state.question()).await?;

        let (_, actions) = transition(
            state.phase(),
            Event::ContentReady {
                post_count: posts.len(),
            },
        )?;
        log_actions(&actions);

        state.record_marketing_posts(posts)?;
        Ok(state)
    }

    /// Run one revision round with the supplied feedback.
    ///
    /// The revision always starts from the original `marketing_posts`,
    /// never from a prior round's `final_posts`. Empty feedback does not
    /// short-circuit; the generator is still invoked.
    pub async fn run_revision(&self, state: &WorkflowState, feedback: &str) -> Result<WorkflowState> {
        let (_, actions) = transition(
            state.phase(),
            Event::FeedbackSupplied {
                feedback: feedback.to_string(),
            },
        )?;
        log_actions(&actions);

        let mut next = state.clone();
        next.record_feedback(feedback)?;
        info!("Run {}: revising from the original draft", next.run_id());

        let originals = next
            .marketing_posts()
            .ok_or_else(|| PromoError::Workflow("no marketing posts recorded".to_string()))?
            .to_vec();

        let requested = actions.iter().find_map(|action| match action {
            Action::InvokeRevisionStage { feedback } => Some(feedback.as_str()),
            _ => None,
        });

        let revised = self.revision.run(&originals, requested).await?;

        let (_, done) = transition(
            next.phase(),
            Event::RevisionReady {
                post_count: revised.len(),
            },
        )?;
        log_actions(&done);

        next.record_final_posts(revised)?;
        Ok(next)
    }

    /// Mark the run accepted without a further revision round.
    ///
    /// Pure transition; the generator is not invoked.
    pub fn accept(&self, state: &WorkflowState) -> Result<WorkflowState> {
        let (_, actions) = transition(state.phase(), Event::FeedbackDeclined)?;
        log_actions(&actions);

        let mut next = state.clone();
        next.mark_accepted()?;
        Ok(next)
    }
}

fn log_actions(actions: &[Action]) {
    for action in actions {
        if let Action::LogActivity { message } = action {
            info!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use promo_core::Phase;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGenerator {
        output: &'static str,
        calls: AtomicUsize,
    }

    impl CountingGenerator {
        fn new(output: &'static str) -> Self {
            Self {
                output,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Generator for CountingGenerator {
        async fn invoke(&self, _instruction: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.output.to_string())
        }
    }

    #[tokio::test]
    async fn test_run_initial_populates_marketing_posts_only() {
        let generator = Arc::new(CountingGenerator::new("A\nB\nC"));
        let workflow = Workflow::new(generator.clone());

        let state = workflow.run_initial("promote a new coffee blend").await.unwrap();
        assert_eq!(state.phase(), Phase::ContentGenerated);
        assert_eq!(state.marketing_posts().unwrap().len(), 3);
        assert!(state.final_posts().is_none());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_revision_requires_content() {
        let generator = Arc::new(CountingGenerator::new("A\nB\nC"));
        let workflow = Workflow::new(generator.clone());

        let state = WorkflowState::new("never drafted");
        let result = workflow.run_revision(&state, "feedback").await;
        assert!(matches!(result, Err(PromoError::Workflow(_))));
        // The generator was never consulted
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_accept_does_not_invoke_generator() {
        let generator = Arc::new(CountingGenerator::new("A\nB\nC"));
        let workflow = Workflow::new(generator.clone());

        let state = workflow.run_initial("q").await.unwrap();
        let accepted = workflow.accept(&state).unwrap();
        assert_eq!(accepted.phase(), Phase::Idle);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

        // Terminal: neither acceptance nor revision can follow
        assert!(workflow.accept(&accepted).is_err());
        assert!(workflow.run_revision(&accepted, "more").await.is_err());
    }
}
