use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerConf, Question};
use crate::models::dto::request::QuestionDefinition;
use crate::providers::QuestionsProvider;

/// Questions read from a JSON array of [`QuestionDefinition`]s.
#[derive(Debug, Clone)]
pub struct JsonQuestionsProvider {
    definitions: Vec<QuestionDefinition>,
    confs: HashSet<AnswerConf>,
}

impl JsonQuestionsProvider {
    pub fn from_json(json: &str, confs: HashSet<AnswerConf>) -> AppResult<Self> {
        let definitions: Vec<QuestionDefinition> = serde_json::from_str(json)?;

        // Every definition must build now so that `questions()` cannot fail later.
        for (index, definition) in definitions.iter().enumerate() {
            definition.clone().into_question(&confs).map_err(|e| match e {
                AppError::ValidationError(message) => {
                    AppError::ValidationError(format!("question #{}: {}", index + 1, message))
                }
                other => other,
            })?;
        }

        Ok(Self { definitions, confs })
    }

    pub fn from_file<P: AsRef<Path>>(path: P, confs: HashSet<AnswerConf>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let provider = Self::from_json(&json, confs)?;
        log::info!(
            "Loaded {} questions from {}",
            provider.definitions.len(),
            path.display()
        );
        Ok(provider)
    }

    /// JSON Schema of the question bank format.
    pub fn schema() -> AppResult<String> {
        let schema = schemars::schema_for!(Vec<QuestionDefinition>);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl QuestionsProvider for JsonQuestionsProvider {
    fn questions(&self) -> Vec<Arc<Question>> {
        self.definitions
            .iter()
            .filter_map(|definition| {
                definition
                    .clone()
                    .into_question(&self.confs)
                    .map_err(|e| log::error!("Skipping question '{}': {}", definition.text, e))
                    .ok()
            })
            .map(Arc::new)
            .collect()
    }
}
