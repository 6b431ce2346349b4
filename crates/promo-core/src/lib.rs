//! # promo-core
//!
//! Core types for the promo drafting workflow.
//!
//! Promo turns a marketing request into three draft social-media posts and
//! revises them on caller feedback. This crate holds the pieces shared by
//! every other crate:
//!
//! - [`WorkflowState`]: the single typed record threaded through a run,
//!   mutated only through guarded transition methods
//! - [`Phase`]: the run's control-flow position
//! - [`PromoError`] / [`Result`]: the unified error type
//! - [`PromoConfig`]: repository-level settings from `.promo/config.toml`

mod config;
mod error;
mod types;

pub use config::{GenerationConfig, ModelConfig, PromoConfig};
pub use error::{PromoError, Result};
pub use types::*;
