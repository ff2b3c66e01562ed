use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::{
    Answer, MultiChoiceAnswer, PlainAnswer, Question, QuestionKind, QuizResult, QuizTest,
};

/// Drives a test over a line-based reader and writer.
pub struct ConsoleRunner<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Multi-choice input that does not parse as labels is submitted as plain text.
    fn parse_answer(question: &Question, line: &str) -> Arc<dyn Answer> {
        if question.kind() == QuestionKind::MultiChoice {
            if let Ok(selection) = line.parse::<MultiChoiceAnswer>() {
                return Arc::new(selection);
            }
        }
        Arc::new(PlainAnswer::new(line))
    }

    /// Returns `None` at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn run(&mut self, test: &QuizTest) -> AppResult<QuizResult> {
        log::info!("Starting test with {} questions", test.questions().len());

        while test.has_more_questions() {
            let question = test.next_question()?;
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                log::warn!("Input closed before the test was finished");
                break;
            };
            question.answer(Self::parse_answer(&question, &line))?;
            writeln!(self.output, "{}", question)?;
        }

        let result = test.current_test_result()?;
        writeln!(self.output, "{}", result)?;
        self.output.flush()?;
        log::info!(
            "Test stopped: {}/{} answered, passed: {}",
            result.answered(),
            result.total(),
            result.is_passed()
        );
        Ok(result)
    }
}
