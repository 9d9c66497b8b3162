// src/lib.rs
// Reddit persona builder: collect a user's public activity, prompt a
// language model with it, and persist the resulting persona.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod activity;
pub mod collector;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod pipeline;
pub mod profile;
pub mod prompt;
pub mod reddit;
pub mod source;
pub mod store;

pub use error::{PersonaError, Result};
