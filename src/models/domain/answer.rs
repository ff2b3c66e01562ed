use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::dto::record::AnswerRecord;

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_REGEX is a valid regex pattern"));

static PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{Nd}]").expect("PUNCTUATION_REGEX is a valid regex pattern")
});

/// A submitted or expected answer. Answers compare through their displayed form.
pub trait Answer: fmt::Display + fmt::Debug + Send + Sync {
    /// `false` when there is no candidate.
    fn validate(&self, candidate: Option<&dyn Answer>) -> bool;

    fn to_record(&self) -> AnswerRecord {
        AnswerRecord {
            text: self.to_string(),
        }
    }
}

/// Comparison options of a [`PlainAnswer`]. Applied when validating, never to the stored text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnswerConf {
    IgnoreCase,
    IgnorePunctuation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainAnswer {
    text: String,
    confs: HashSet<AnswerConf>,
}

impl PlainAnswer {
    pub fn new(text: &str) -> Self {
        Self::with_confs(text, HashSet::new())
    }

    pub fn with_confs(text: &str, confs: HashSet<AnswerConf>) -> Self {
        Self {
            text: WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned(),
            confs,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn confs(&self) -> &HashSet<AnswerConf> {
        &self.confs
    }

    fn normalise(&self, value: &str) -> String {
        let value = if self.confs.contains(&AnswerConf::IgnoreCase) {
            value.to_lowercase()
        } else {
            value.to_string()
        };
        if self.confs.contains(&AnswerConf::IgnorePunctuation) {
            PUNCTUATION_REGEX.replace_all(&value, "").into_owned()
        } else {
            value
        }
    }
}

impl fmt::Display for PlainAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Answer for PlainAnswer {
    fn validate(&self, candidate: Option<&dyn Answer>) -> bool {
        match candidate {
            Some(other) => self.normalise(&self.text) == self.normalise(&other.to_string()),
            None => false,
        }
    }
}
