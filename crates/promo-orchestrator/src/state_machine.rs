//! Pure state machine for workflow control flow
//!
//! No I/O and no async: `transition(phase, event)` returns the next phase
//! and the actions to execute. The orchestrator runs the actions and
//! commits results to the state record only after a stage succeeds, so a
//! failed stage never moves the phase. Invalid pairings are errors the
//! caller sees; this function never panics.

use promo_core::{Phase, PromoError, Result};

/// Events that drive phase transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Content stage produced the initial post options
    ContentReady { post_count: usize },
    /// Caller supplied feedback for a revision round
    FeedbackSupplied { feedback: String },
    /// Caller declined to supply feedback
    FeedbackDeclined,
    /// Revision stage produced revised post options
    RevisionReady { post_count: usize },
}

/// Actions to execute as side effects of transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Log activity
    LogActivity { message: String },
    /// Run the revision stage with the given feedback
    InvokeRevisionStage { feedback: String },
}

/// Pure phase transition function.
///
/// The revision loop may repeat: each feedback submission re-enters
/// `Revising` from `Revised`. `Idle` is terminal.
pub fn transition(phase: Phase, event: Event) -> Result<(Phase, Vec<Action>)> {
    match (phase, event) {
        (Phase::Created, Event::ContentReady { post_count }) => Ok((
            Phase::ContentGenerated,
            vec![Action::LogActivity {
                message: format!("Content stage produced {} post options", post_count),
            }],
        )),

        (Phase::ContentGenerated | Phase::Revised, Event::FeedbackSupplied { feedback }) => Ok((
            Phase::Revising,
            vec![
                Action::LogActivity {
                    message: "Feedback received, starting revision round".to_string(),
                },
                Action::InvokeRevisionStage { feedback },
            ],
        )),

        (Phase::ContentGenerated | Phase::Revised, Event::FeedbackDeclined) => Ok((
            Phase::Idle,
            vec![Action::LogActivity {
                message: "Run accepted by caller".to_string(),
            }],
        )),

        (Phase::Revising, Event::RevisionReady { post_count }) => Ok((
            Phase::Revised,
            vec![Action::LogActivity {
                message: format!("Revision stage produced {} post options", post_count),
            }],
        )),

        (phase, event) => Err(PromoError::Workflow(format!(
            "invalid transition: phase {} cannot handle event {:?}",
            phase, event
        ))),
    }
}
