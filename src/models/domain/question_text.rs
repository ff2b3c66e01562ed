use std::collections::HashMap;
use std::fmt;

use crate::models::domain::choice::Choice;
use crate::models::dto::record::QuestionTextRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionText {
    Plain(String),
    MultiChoice {
        text: String,
        choices: HashMap<Choice, String>,
    },
}

impl QuestionText {
    pub fn plain(text: &str) -> Self {
        QuestionText::Plain(text.to_string())
    }

    pub fn multi_choice(text: &str, choices: HashMap<Choice, String>) -> Self {
        QuestionText::MultiChoice {
            text: text.to_string(),
            choices,
        }
    }

    /// The prompt without any rendered options.
    pub fn prompt(&self) -> &str {
        match self {
            QuestionText::Plain(text) => text,
            QuestionText::MultiChoice { text, .. } => text,
        }
    }

    pub fn is_multi_choice(&self) -> bool {
        matches!(self, QuestionText::MultiChoice { .. })
    }

    fn sorted_choices(choices: &HashMap<Choice, String>) -> Vec<(&Choice, &String)> {
        let mut sorted: Vec<_> = choices.iter().collect();
        sorted.sort_by_key(|(choice, _)| **choice);
        sorted
    }

    pub fn to_record(&self) -> QuestionTextRecord {
        match self {
            QuestionText::Plain(text) => QuestionTextRecord {
                text: text.clone(),
                choices: None,
            },
            QuestionText::MultiChoice { text, choices } => QuestionTextRecord {
                text: text.clone(),
                choices: Some(
                    choices
                        .iter()
                        .map(|(choice, description)| (choice.to_string(), description.clone()))
                        .collect(),
                ),
            },
        }
    }
}

impl fmt::Display for QuestionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionText::Plain(text) => f.write_str(text),
            QuestionText::MultiChoice { text, choices } => {
                writeln!(f, "{}", text)?;
                for (choice, description) in Self::sorted_choices(choices) {
                    write!(f, "\n{}. {}", choice, description)?;
                }
                Ok(())
            }
        }
    }
}
