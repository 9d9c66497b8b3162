// src/llm/provider.rs
// Provider-agnostic chat completion interface

use async_trait::async_trait;

use crate::error::Result;

/// One-shot chat completion against some language model backend.
///
/// Implementations send a system instruction plus a single user message and
/// return the assistant's text verbatim. Whitespace handling is left to the
/// caller.
#[async_trait]
pub trait Completions: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
        temperature: f64,
    ) -> Result<String>;
}
