use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Arc;

use quiz_core::{
    models::domain::{
        Answer, AnswerConf, Choice, MultiChoiceAnswer, PlainAnswer, Question, QuizResult,
        QuizTest, TestSuite,
    },
    providers::{JsonQuestionsProvider, QuestionsProvider, SampleQuestionsProvider},
    services::ConsoleRunner,
};

struct FixedQuestionsProvider {
    build: fn() -> Vec<Question>,
}

impl QuestionsProvider for FixedQuestionsProvider {
    fn questions(&self) -> Vec<Arc<Question>> {
        (self.build)().into_iter().map(Arc::new).collect()
    }
}

fn mixed_questions() -> Vec<Question> {
    vec![
        Question::plain_with_alternatives(
            "Name a primary colour",
            vec![
                PlainAnswer::new("red"),
                PlainAnswer::new("blue"),
                PlainAnswer::new("yellow"),
            ],
        )
        .unwrap(),
        Question::multi_choice(
            "Which are even?",
            HashMap::from([
                (Choice::A, "1".to_string()),
                (Choice::B, "2".to_string()),
                (Choice::C, "4".to_string()),
            ]),
            HashSet::from([Choice::B, Choice::C]),
        )
        .unwrap(),
        Question::plain(
            "Greet the world",
            PlainAnswer::with_confs(
                "Hello, World!",
                HashSet::from([AnswerConf::IgnoreCase, AnswerConf::IgnorePunctuation]),
            ),
        ),
    ]
}

#[test]
fn console_session_over_mixed_questions() {
    let provider = FixedQuestionsProvider {
        build: mixed_questions,
    };
    let test = QuizTest::with_pass_percentage(&provider, 60).unwrap();
    let mut runner = ConsoleRunner::new(
        Cursor::new(b"blue\nc;b\nhello world\n".to_vec()),
        Vec::new(),
    );

    let result = runner.run(&test).unwrap();
    let output = String::from_utf8(runner.into_output()).unwrap();

    assert!(result.is_finished());
    assert_eq!(result.correct(), 3);
    assert!(result.is_passed());
    assert!(output.contains("Which are even?\n\nA. 1\nB. 2\nC. 4"));
    assert!(output.contains("YOUR TEST IS FINISHED."));
}

#[test]
fn suite_groups_independent_sessions() {
    let provider = SampleQuestionsProvider::default();
    let first = Arc::new(QuizTest::new(&provider));
    let second = Arc::new(QuizTest::new(&provider));
    let suite = TestSuite::new("Arithmetic", vec![first.clone(), second.clone()]);

    first
        .next_question()
        .unwrap()
        .answer(Arc::new(PlainAnswer::new("2")))
        .unwrap();

    assert_eq!(suite.topic(), "Arithmetic");
    assert_eq!(suite.tests()[0].current_test_result().unwrap().answered(), 1);
    assert_eq!(suite.tests()[1].current_test_result().unwrap().answered(), 0);
}

#[test]
fn question_bank_drives_a_session() {
    let json = r#"[
        {"text": "Largest planet?", "answers": ["Jupiter"], "ignore_case": true},
        {"text": "Pick the vowels", "choices": {"A": "a", "B": "b", "E": "e"}, "correct": ["A", "E"]}
    ]"#;
    let provider = JsonQuestionsProvider::from_json(json, HashSet::new()).unwrap();
    let test = QuizTest::new(&provider);

    let first = test.next_question().unwrap();
    first.answer(Arc::new(PlainAnswer::new("jupiter"))).unwrap();
    let second = test.next_question().unwrap();
    second
        .answer(Arc::new(MultiChoiceAnswer::new(HashSet::from([Choice::E]))))
        .unwrap();

    let result = test.current_test_result().unwrap();
    assert_eq!((result.correct(), result.wrong()), (1, 1));
    assert!(!result.is_passed());

    let record = serde_json::to_value(second.to_record()).unwrap();
    assert_eq!(record["expected"]["text"], "A; E");
    assert_eq!(record["got"]["text"], "E");
    assert_eq!(record["question"]["choices"]["B"], "b");
}

#[test]
fn result_record_of_a_finished_session() {
    let provider = SampleQuestionsProvider::default();
    let test = QuizTest::new(&provider);
    for reply in ["2", "9", "4", "4", "3"] {
        let answer: Arc<dyn Answer> = Arc::new(PlainAnswer::new(reply));
        test.next_question().unwrap().answer(answer).unwrap();
    }

    let result: QuizResult = test.current_test_result().unwrap();
    let record = serde_json::to_value(result.to_record()).unwrap();
    assert_eq!(
        record,
        serde_json::json!({
            "total": "5",
            "answered": "5",
            "correct": "5",
            "wrong": "0",
            "percentage": "100"
        })
    );
    assert!(result.is_passed());
}
