use std::collections::HashSet;
use std::sync::Arc;

use crate::models::domain::{AnswerConf, PlainAnswer, Question};
use crate::providers::QuestionsProvider;

const SAMPLE_QUESTIONS: [(&str, &str); 5] = [
    ("1 + 1 = ?", "2"),
    ("3 + 6 = ?", "9"),
    ("6 - 2 = ?", "4"),
    ("2 * 2 = ?", "4"),
    ("6 / 2 = ?", "3"),
];

/// Built-in arithmetic bank used when no question file is configured.
#[derive(Debug, Clone, Default)]
pub struct SampleQuestionsProvider {
    confs: HashSet<AnswerConf>,
}

impl SampleQuestionsProvider {
    pub fn new(confs: HashSet<AnswerConf>) -> Self {
        Self { confs }
    }
}

impl QuestionsProvider for SampleQuestionsProvider {
    /// Fresh, unanswered questions on every call.
    fn questions(&self) -> Vec<Arc<Question>> {
        SAMPLE_QUESTIONS
            .iter()
            .map(|(text, answer)| {
                Arc::new(Question::plain(
                    text,
                    PlainAnswer::with_confs(answer, self.confs.clone()),
                ))
            })
            .collect()
    }
}
