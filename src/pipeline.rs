// src/pipeline.rs
// End-to-end persona pipeline

use tracing::info;

use crate::collector::collect_activity;
use crate::error::{PersonaError, Result};
use crate::generator::{GenerationConfig, PersonaGenerator};
use crate::llm::Completions;
use crate::profile::extract_username;
use crate::prompt::compose_prompt;
use crate::source::ActivitySource;
use crate::store::{PersonaDocument, PersonaStore};

/// Run the full pipeline for one profile reference.
///
/// An unrecognized reference fails here, before any collaborator is
/// touched. Retrieval faults are absorbed into a partial history.
/// Generation and persistence faults abort the run, so either the persona
/// file is written or nothing is.
pub async fn run(
    reference: &str,
    source: &dyn ActivitySource,
    completions: &dyn Completions,
    store: &PersonaStore,
    generation: GenerationConfig,
    limit: u32,
) -> Result<PersonaDocument> {
    let username = extract_username(reference)
        .ok_or_else(|| PersonaError::InvalidReference(reference.to_string()))?;
    info!(user = %username, limit = limit, "starting persona pipeline");

    let history = collect_activity(source, &username, limit).await;
    let prompt = compose_prompt(&history);

    let generator = PersonaGenerator::new(completions, generation);
    let persona = generator.generate(&prompt).await?;

    store.save(&username, &persona)
}
