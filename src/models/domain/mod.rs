pub mod answer;
pub mod choice;
pub mod multi_choice_answer;
pub mod question;
pub mod question_text;
pub mod quiz_result;
pub mod test_suite;
pub use answer::{Answer, AnswerConf, PlainAnswer};
pub use choice::Choice;
pub use multi_choice_answer::MultiChoiceAnswer;
pub use question::{Question, QuestionKind};
pub use question_text::QuestionText;
pub use quiz_result::QuizResult;
pub use quiz_test::QuizTest;
pub use test_suite::TestSuite;
