// src/llm/mod.rs
// Language model integration

mod openai;
mod provider;

pub use openai::OpenAiClient;
pub use provider::Completions;
