use std::collections::HashSet;
use std::env;

use crate::errors::{AppError, AppResult};
use crate::models::domain::AnswerConf;

#[derive(Clone, Debug)]
pub struct Config {
    pub suite_name: String,
    pub pass_percentage: i32,
    pub ignore_case: bool,
    pub ignore_punctuation: bool,
    pub questions_path: Option<String>,
}

fn parse_flag(value: Option<String>) -> bool {
    value
        .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(false)
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            suite_name: lookup("QUIZ_SUITE_NAME").unwrap_or_else(|| "Arithmetic".to_string()),
            pass_percentage: lookup("QUIZ_PASS_PERCENTAGE")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(100),
            ignore_case: parse_flag(lookup("QUIZ_IGNORE_CASE")),
            ignore_punctuation: parse_flag(lookup("QUIZ_IGNORE_PUNCTUATION")),
            questions_path: lookup("QUIZ_QUESTIONS_PATH").filter(|p| !p.trim().is_empty()),
        }
    }

    /// Rejects settings that would make every result invalid.
    pub fn validate(&self) -> AppResult<()> {
        if !(0..=100).contains(&self.pass_percentage) {
            return Err(AppError::ValidationError(format!(
                "QUIZ_PASS_PERCENTAGE must be between 0 and 100, got {}",
                self.pass_percentage
            )));
        }
        if self.suite_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "QUIZ_SUITE_NAME must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Answer normalisation applied to plain answers built by providers.
    pub fn answer_confs(&self) -> HashSet<AnswerConf> {
        let mut confs = HashSet::new();
        if self.ignore_case {
            confs.insert(AnswerConf::IgnoreCase);
        }
        if self.ignore_punctuation {
            confs.insert(AnswerConf::IgnorePunctuation);
        }
        confs
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            suite_name: "Test suite".to_string(),
            pass_percentage: 60,
            ignore_case: false,
            ignore_punctuation: false,
            questions_path: None,
        }
    }
}
