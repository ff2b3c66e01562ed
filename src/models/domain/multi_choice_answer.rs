use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::domain::answer::Answer;
use crate::models::domain::choice::Choice;

/// An answer made of the selected options of a multi-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiChoiceAnswer {
    selected: HashSet<Choice>,
}

impl MultiChoiceAnswer {
    pub fn new(selected: HashSet<Choice>) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> &HashSet<Choice> {
        &self.selected
    }

    /// Selected labels in alphabetical order.
    pub fn sorted(&self) -> Vec<Choice> {
        let mut sorted: Vec<Choice> = self.selected.iter().copied().collect();
        sorted.sort();
        sorted
    }
}

impl FromIterator<Choice> for MultiChoiceAnswer {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for MultiChoiceAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.sorted().iter().map(Choice::to_string).collect();
        f.write_str(&labels.join("; "))
    }
}

impl Answer for MultiChoiceAnswer {
    fn validate(&self, candidate: Option<&dyn Answer>) -> bool {
        candidate.is_some_and(|other| self.to_string() == other.to_string())
    }
}

impl FromStr for MultiChoiceAnswer {
    type Err = AppError;

    /// Accepts labels separated by `;`, `,` or whitespace, e.g. `"e; g f"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selected = s
            .split(|c: char| c == ';' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(Choice::from_str)
            .collect::<Result<HashSet<Choice>, AppError>>()?;

        if selected.is_empty() {
            return Err(AppError::ParseError(
                "At least one choice must be selected".to_string(),
            ));
        }
        Ok(Self::new(selected))
    }
}
