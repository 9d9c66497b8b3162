// src/generator.rs
// Persona synthesis on top of a completion backend

use crate::error::Result;
use crate::llm::Completions;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Parameters for one persona generation run. Defaults match the values
/// the pipeline has always shipped with.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f64,
    pub system_prompt: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Produces persona text from a composed prompt
pub struct PersonaGenerator<'a> {
    completions: &'a dyn Completions,
    config: GenerationConfig,
}

impl<'a> PersonaGenerator<'a> {
    pub fn new(completions: &'a dyn Completions, config: GenerationConfig) -> Self {
        Self {
            completions,
            config,
        }
    }

    /// Request persona text for the prompt. Surrounding whitespace is
    /// stripped from the reply; backend faults surface unchanged.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let text = self
            .completions
            .complete(
                &self.config.system_prompt,
                prompt,
                &self.config.model,
                self.config.temperature,
            )
            .await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::PersonaError;

    #[derive(Debug, Clone, PartialEq)]
    struct Seen {
        system: String,
        user: String,
        model: String,
        temperature: f64,
    }

    struct FakeCompletions {
        reply: std::result::Result<String, String>,
        seen: Mutex<Option<Seen>>,
    }

    impl FakeCompletions {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Completions for FakeCompletions {
        async fn complete(
            &self,
            system: &str,
            user: &str,
            model: &str,
            temperature: f64,
        ) -> Result<String> {
            *self.seen.lock().unwrap() = Some(Seen {
                system: system.to_string(),
                user: user.to_string(),
                model: model.to_string(),
                temperature,
            });
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(PersonaError::Completion(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_reply_whitespace_trimmed() {
        let backend = FakeCompletions::replying("\n  a persona  \n\n");
        let generator = PersonaGenerator::new(&backend, GenerationConfig::default());

        let text = generator.generate("prompt").await.unwrap();
        assert_eq!(text, "a persona");
    }

    #[tokio::test]
    async fn test_default_parameters_forwarded() {
        let backend = FakeCompletions::replying("ok");
        let generator = PersonaGenerator::new(&backend, GenerationConfig::default());

        generator.generate("the prompt").await.unwrap();
        let seen = backend.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.system, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(seen.user, "the prompt");
        assert_eq!(seen.model, DEFAULT_MODEL);
        assert_eq!(seen.temperature, DEFAULT_TEMPERATURE);
    }

    #[tokio::test]
    async fn test_custom_parameters_forwarded() {
        let backend = FakeCompletions::replying("ok");
        let config = GenerationConfig {
            model: "gpt-4o".to_string(),
            temperature: 0.1,
            system_prompt: "Answer tersely.".to_string(),
        };
        let generator = PersonaGenerator::new(&backend, config);

        generator.generate("p").await.unwrap();
        let seen = backend.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.model, "gpt-4o");
        assert_eq!(seen.temperature, 0.1);
        assert_eq!(seen.system, "Answer tersely.");
    }

    #[tokio::test]
    async fn test_backend_fault_propagates() {
        let backend = FakeCompletions::failing("rate limited");
        let generator = PersonaGenerator::new(&backend, GenerationConfig::default());

        let err = generator.generate("p").await.unwrap_err();
        assert!(matches!(err, PersonaError::Completion(_)));
        assert!(err.to_string().contains("rate limited"));
    }
}
