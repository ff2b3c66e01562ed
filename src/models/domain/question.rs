use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::{AppError, AppResult};
use crate::models::domain::answer::{Answer, PlainAnswer};
use crate::models::domain::choice::Choice;
use crate::models::domain::multi_choice_answer::MultiChoiceAnswer;
use crate::models::domain::question_text::QuestionText;
use crate::models::dto::record::QuestionRecord;

pub const BANNER: &str = "**********************************";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    Plain,
    MultiChoice,
}

/// A prompt with one or more equally acceptable answers. Can be answered once.
#[derive(Debug)]
pub struct Question {
    text: Arc<QuestionText>,
    expected: Arc<dyn Answer>,
    alternatives: Vec<Arc<dyn Answer>>,
    got: Mutex<Option<Arc<dyn Answer>>>,
}

impl Question {
    pub fn new(text: Arc<QuestionText>, expected: Vec<Arc<dyn Answer>>) -> AppResult<Self> {
        let mut expected = expected.into_iter();
        let primary = expected.next().ok_or_else(|| {
            AppError::ValidationError(format!(
                "Question '{}' needs at least one expected answer",
                text.prompt()
            ))
        })?;

        Ok(Self {
            text,
            expected: primary,
            alternatives: expected.collect(),
            got: Mutex::new(None),
        })
    }

    pub fn plain(text: &str, answer: PlainAnswer) -> Self {
        Self {
            text: Arc::new(QuestionText::plain(text)),
            expected: Arc::new(answer),
            alternatives: Vec::new(),
            got: Mutex::new(None),
        }
    }

    /// Any of `answers` is accepted.
    pub fn plain_with_alternatives(text: &str, answers: Vec<PlainAnswer>) -> AppResult<Self> {
        let expected = answers
            .into_iter()
            .map(|answer| Arc::new(answer) as Arc<dyn Answer>)
            .collect();
        Self::new(Arc::new(QuestionText::plain(text)), expected)
    }

    /// Fails unless `correct` is a non-empty subset of the labels in `choices`.
    pub fn multi_choice(
        text: &str,
        choices: HashMap<Choice, String>,
        correct: HashSet<Choice>,
    ) -> AppResult<Self> {
        if choices.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Multi-choice question '{}' has no choices",
                text
            )));
        }
        if correct.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Multi-choice question '{}' has no correct choices",
                text
            )));
        }
        if let Some(unknown) = correct.iter().copied().filter(|c| !choices.contains_key(c)).min() {
            return Err(AppError::ValidationError(format!(
                "Multi-choice question '{}' marks unknown choice {} as correct",
                text, unknown
            )));
        }

        let expected: Arc<dyn Answer> = Arc::new(MultiChoiceAnswer::new(correct));
        Self::new(Arc::new(QuestionText::multi_choice(text, choices)), vec![expected])
    }

    pub fn kind(&self) -> QuestionKind {
        if self.text.is_multi_choice() {
            QuestionKind::MultiChoice
        } else {
            QuestionKind::Plain
        }
    }

    pub fn text(&self) -> &QuestionText {
        &self.text
    }

    fn submitted(&self) -> MutexGuard<'_, Option<Arc<dyn Answer>>> {
        self.got.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn accepts(&self, got: Option<&Arc<dyn Answer>>) -> bool {
        got.is_some_and(|got| {
            self.expected_answers()
                .any(|expected| expected.validate(Some(got.as_ref())))
        })
    }

    /// Fails with [`AppError::InvalidState`] if the question already has an answer.
    pub fn answer(&self, answer: Arc<dyn Answer>) -> AppResult<()> {
        let mut got = self.submitted();
        if got.is_some() {
            log::warn!("Rejected second answer to '{}'", self.text.prompt());
            return Err(AppError::InvalidState(
                "Can not answer the same question twice.".to_string(),
            ));
        }
        log::debug!("Answered '{}' with '{}'", self.text.prompt(), answer);
        *got = Some(answer);
        Ok(())
    }

    pub fn is_answered(&self) -> bool {
        self.submitted().is_some()
    }

    pub fn is_correct(&self) -> bool {
        let got = self.submitted();
        self.accepts(got.as_ref())
    }

    /// The primary expected answer, available whether or not the question is answered.
    pub fn help(&self) -> Arc<dyn Answer> {
        Arc::clone(&self.expected)
    }

    pub fn expected_answers(&self) -> impl Iterator<Item = &Arc<dyn Answer>> {
        std::iter::once(&self.expected).chain(self.alternatives.iter())
    }

    pub fn submitted_answer(&self) -> Option<Arc<dyn Answer>> {
        self.submitted().clone()
    }

    pub fn to_record(&self) -> QuestionRecord {
        let got = self.submitted();
        QuestionRecord {
            question: self.text.to_record(),
            expected: self.expected.to_record(),
            alternatives: self.alternatives.iter().map(|a| a.to_record()).collect(),
            got: got.as_ref().map(|answer| answer.to_record()),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let got = self.submitted();
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "{}", self.text)?;
        if let Some(provided) = got.as_ref() {
            if self.accepts(Some(provided)) {
                writeln!(f, "YOUR ANSWER IS CORRECT!")?;
                writeln!(f, "ANSWER: {}", self.expected)?;
            } else {
                writeln!(f, "YOUR ANSWER IS NOT CORRECT!")?;
                writeln!(f, "CORRECT ANSWER: {}", self.expected)?;
                writeln!(f, "PROVIDED ANSWER: {}", provided)?;
            }
        }
        f.write_str(BANNER)
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.text.to_string() == other.text.to_string()
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.to_string().hash(state);
    }
}
