//! Generation capability boundary

use async_trait::async_trait;
use promo_core::Result;

/// Opaque text-generation capability.
///
/// A stage hands the capability a single instruction and gets free-form text
/// back. The workflow core is agnostic to the backend behind this contract;
/// the only observable failure is a generation error, which propagates to
/// the orchestrator's caller unchanged.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Invoke the capability with an instruction, returning the raw output
    async fn invoke(&self, instruction: &str) -> Result<String>;
}
