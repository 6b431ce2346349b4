//! Core type definitions for the promo drafting workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PromoError, Result};

/// Number of post options a drafting round is expected to produce
pub const POST_COUNT: usize = 3;

/// Control-flow position of a workflow run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Created,
    ContentGenerated,
    Idle,
    Revising,
    Revised,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::ContentGenerated => write!(f, "content_generated"),
            Self::Idle => write!(f, "idle"),
            Self::Revising => write!(f, "revising"),
            Self::Revised => write!(f, "revised"),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "content_generated" | "contentgenerated" => Ok(Self::ContentGenerated),
            "idle" => Ok(Self::Idle),
            "revising" => Ok(Self::Revising),
            "revised" => Ok(Self::Revised),
            _ => Err(format!("Invalid phase: {}", s)),
        }
    }
}

/// The single record threaded through the drafting pipeline.
///
/// Fields are private: a run is created with [`WorkflowState::new`] and
/// advances only through the `record_*` methods, which enforce the set-once
/// and sequencing invariants. The question is immutable after creation and
/// `marketing_posts` is immutable once recorded; only `revision_feedback`
/// and `final_posts` are replaced on successive revision rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    run_id: Uuid,
    question: String,
    marketing_posts: Option<Vec<String>>,
    revision_feedback: Option<String>,
    final_posts: Option<Vec<String>>,
    phase: Phase,
    created_at: DateTime<Utc>,
}

impl WorkflowState {
    /// Create a fresh run for a marketing request
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            question: question.into(),
            marketing_posts: None,
            revision_feedback: None,
            final_posts: None,
            phase: Phase::Created,
            created_at: Utc::now(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn marketing_posts(&self) -> Option<&[String]> {
        self.marketing_posts.as_deref()
    }

    pub fn revision_feedback(&self) -> Option<&str> {
        self.revision_feedback.as_deref()
    }

    pub fn final_posts(&self) -> Option<&[String]> {
        self.final_posts.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record the content stage output and advance to `ContentGenerated`.
    ///
    /// Posts are set exactly once; a second call is a sequencing violation.
    pub fn record_marketing_posts(&mut self, posts: Vec<String>) -> Result<()> {
        if self.marketing_posts.is_some() {
            return Err(PromoError::Workflow(
                "marketing posts are already recorded".to_string(),
            ));
        }
        if posts.len() < POST_COUNT {
            return Err(PromoError::Workflow(format!(
                "expected at least {} post options, got {}",
                POST_COUNT,
                posts.len()
            )));
        }
        self.marketing_posts = Some(posts);
        self.phase = Phase::ContentGenerated;
        Ok(())
    }

    /// Record caller feedback and enter a revision round.
    ///
    /// Replaces any feedback from a prior round. Empty feedback is accepted
    /// here; whether to revise at all is the caller's decision.
    pub fn record_feedback(&mut self, feedback: impl Into<String>) -> Result<()> {
        if self.marketing_posts.is_none() {
            return Err(PromoError::Workflow(
                "cannot revise before content is generated".to_string(),
            ));
        }
        if self.phase == Phase::Idle {
            return Err(PromoError::Workflow(
                "run is already accepted".to_string(),
            ));
        }
        self.revision_feedback = Some(feedback.into());
        self.phase = Phase::Revising;
        Ok(())
    }

    /// Record the revision stage output and advance to `Revised`.
    ///
    /// Overwrites the previous round's revised posts; the original
    /// `marketing_posts` stay untouched.
    pub fn record_final_posts(&mut self, posts: Vec<String>) -> Result<()> {
        if self.phase != Phase::Revising {
            return Err(PromoError::Workflow(format!(
                "cannot record revised posts in phase {}",
                self.phase
            )));
        }
        if posts.len() < POST_COUNT {
            return Err(PromoError::Workflow(format!(
                "expected at least {} revised post options, got {}",
                POST_COUNT,
                posts.len()
            )));
        }
        self.final_posts = Some(posts);
        self.phase = Phase::Revised;
        Ok(())
    }

    /// Mark the run as accepted by the caller (terminal)
    pub fn mark_accepted(&mut self) -> Result<()> {
        match self.phase {
            Phase::ContentGenerated | Phase::Revised => {
                self.phase = Phase::Idle;
                Ok(())
            }
            phase => Err(PromoError::Workflow(format!(
                "cannot accept a run in phase {}",
                phase
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_posts() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_phase_parsing() {
        let phase: Phase = "content_generated".parse().unwrap();
        assert_eq!(phase, Phase::ContentGenerated);
        assert_eq!(phase.to_string(), "content_generated");
        assert!("bogus".parse::<Phase>().is_err());
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = WorkflowState::new("promote a new coffee blend");
        assert_eq!(state.question(), "promote a new coffee blend");
        assert_eq!(state.phase(), Phase::Created);
        assert!(state.marketing_posts().is_none());
        assert!(state.revision_feedback().is_none());
        assert!(state.final_posts().is_none());
    }

    #[test]
    fn test_marketing_posts_set_once() {
        let mut state = WorkflowState::new("q");
        state.record_marketing_posts(three_posts()).unwrap();
        assert_eq!(state.phase(), Phase::ContentGenerated);

        let result = state.record_marketing_posts(three_posts());
        assert!(matches!(result, Err(PromoError::Workflow(_))));
    }

    #[test]
    fn test_short_posts_rejected() {
        let mut state = WorkflowState::new("q");
        let result = state.record_marketing_posts(vec!["only one".to_string()]);
        assert!(result.is_err());
        assert_eq!(state.phase(), Phase::Created);
    }

    #[test]
    fn test_feedback_requires_content() {
        let mut state = WorkflowState::new("q");
        assert!(state.record_feedback("make it funnier").is_err());

        state.record_marketing_posts(three_posts()).unwrap();
        state.record_feedback("make it funnier").unwrap();
        assert_eq!(state.phase(), Phase::Revising);
        assert_eq!(state.revision_feedback(), Some("make it funnier"));
    }

    #[test]
    fn test_final_posts_overwritten_per_round() {
        let mut state = WorkflowState::new("q");
        state.record_marketing_posts(three_posts()).unwrap();

        state.record_feedback("round one").unwrap();
        state
            .record_final_posts(vec!["x".into(), "y".into(), "z".into()])
            .unwrap();
        assert_eq!(state.phase(), Phase::Revised);

        state.record_feedback("round two").unwrap();
        state
            .record_final_posts(vec!["p".into(), "q".into(), "r".into()])
            .unwrap();
        assert_eq!(state.final_posts().unwrap()[0], "p");
        // The originals survive every round
        assert_eq!(state.marketing_posts().unwrap(), &three_posts()[..]);
    }

    #[test]
    fn test_final_posts_need_revising_phase() {
        let mut state = WorkflowState::new("q");
        state.record_marketing_posts(three_posts()).unwrap();
        let result = state.record_final_posts(three_posts());
        assert!(matches!(result, Err(PromoError::Workflow(_))));
    }

    #[test]
    fn test_accept_is_terminal() {
        let mut state = WorkflowState::new("q");
        state.record_marketing_posts(three_posts()).unwrap();
        state.mark_accepted().unwrap();
        assert_eq!(state.phase(), Phase::Idle);

        assert!(state.record_feedback("too late").is_err());
        assert!(state.mark_accepted().is_err());
    }
}
