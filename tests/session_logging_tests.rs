use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use quiz_core::{
    models::domain::{PlainAnswer, Question, QuizTest},
    providers::QuestionsProvider,
};

static RECORDS: Lazy<Mutex<Vec<(Level, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("quiz_core") {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

struct TwoQuestions;

impl QuestionsProvider for TwoQuestions {
    fn questions(&self) -> Vec<Arc<Question>> {
        vec![
            Arc::new(Question::plain("1 + 1 = ?", PlainAnswer::new("2"))),
            Arc::new(Question::plain("2 + 2 = ?", PlainAnswer::new("4"))),
        ]
    }
}

fn logged(level: Level, message: &str) -> bool {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .any(|(l, m)| *l == level && m == message)
}

#[test]
fn session_scans_are_logged_at_debug() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let test = QuizTest::new(&TwoQuestions);
    assert!(test.has_more_questions());
    test.next_question()
        .unwrap()
        .answer(Arc::new(PlainAnswer::new("2")))
        .unwrap();
    test.next_question()
        .unwrap()
        .answer(Arc::new(PlainAnswer::new("4")))
        .unwrap();
    assert!(!test.has_more_questions());
    assert!(test.next_question().is_err());

    assert!(logged(Level::Debug, "2 of 2 questions remain"));
    assert!(logged(Level::Debug, "Next question is #1"));
    assert!(logged(Level::Debug, "Next question is #2"));
    assert!(logged(Level::Debug, "0 of 2 questions remain"));
    assert!(logged(Level::Debug, "No unanswered questions left"));
}
