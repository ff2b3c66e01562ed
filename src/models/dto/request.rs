use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::answer::{AnswerConf, PlainAnswer};
use crate::models::domain::choice::Choice;
use crate::models::domain::question::Question;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn no_blank_entries(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry"));
    }
    Ok(())
}

/// Raw result counts as they arrive from outside. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ResultInput {
    pub total: Option<i32>,
    pub answered: Option<i32>,
    pub correct: Option<i32>,
    pub wrong: Option<i32>,
    pub percentage: Option<i32>,
}

/// One entry of a JSON question bank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuestionDefinition {
    #[validate(length(min = 1, max = 4096), custom(function = "not_blank"))]
    pub text: String,

    /// Equally acceptable answers of a plain question.
    #[serde(default)]
    #[validate(custom(function = "no_blank_entries"))]
    pub answers: Vec<String>,

    /// Options of a multi-choice question, keyed by label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<BTreeMap<Choice, String>>,

    /// Correct labels of a multi-choice question.
    #[serde(default)]
    pub correct: Vec<Choice>,

    #[serde(default)]
    pub ignore_case: bool,

    #[serde(default)]
    pub ignore_punctuation: bool,
}

impl QuestionDefinition {
    /// Builds the question, OR-ing the definition's own flags into `defaults`.
    pub fn into_question(self, defaults: &HashSet<AnswerConf>) -> AppResult<Question> {
        self.validate()?;

        match self.choices {
            Some(choices) => {
                if !self.answers.is_empty() || self.ignore_case || self.ignore_punctuation {
                    return Err(AppError::ValidationError(format!(
                        "Multi-choice question '{}' can not carry plain answers or answer flags",
                        self.text
                    )));
                }
                Question::multi_choice(
                    &self.text,
                    choices.into_iter().collect(),
                    self.correct.into_iter().collect(),
                )
            }
            None => {
                if !self.correct.is_empty() {
                    return Err(AppError::ValidationError(format!(
                        "Plain question '{}' can not mark correct choices",
                        self.text
                    )));
                }
                let mut confs = defaults.clone();
                if self.ignore_case {
                    confs.insert(AnswerConf::IgnoreCase);
                }
                if self.ignore_punctuation {
                    confs.insert(AnswerConf::IgnorePunctuation);
                }

                let answers = self
                    .answers
                    .iter()
                    .map(|answer| PlainAnswer::with_confs(answer, confs.clone()))
                    .collect();
                Question::plain_with_alternatives(&self.text, answers)
            }
        }
    }
}
