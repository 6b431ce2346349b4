//! # promo-agent
//!
//! Generation capability boundary for the promo workflow.
//!
//! The workflow core only ever sees the [`Generator`] trait: a single
//! text-in/text-out contract. This crate also ships the default backend, an
//! Anthropic API client with env-based auth and bounded retry on rate
//! limits. Tests substitute a scripted double with a one-trait impl.

mod auth;
mod client;
mod generator;
mod types;

pub use auth::{get_api_key, DEFAULT_API_KEY_ENV};
pub use client::AnthropicClient;
pub use generator::Generator;
pub use types::*;
