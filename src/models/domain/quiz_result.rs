use std::fmt;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::BANNER;
use crate::models::dto::record::ResultRecord;
use crate::models::dto::request::ResultInput;

pub const DEFAULT_PASS_PERCENTAGE: i32 = 100;

const NON_NEGATIVE: &str = "All the result parameters must be non-negative.";

/// Completion and pass/fail summary of a test. Always valid once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Validate)]
pub struct QuizResult {
    #[validate(range(min = 0, message = "All the result parameters must be non-negative."))]
    total: i32,
    #[validate(range(min = 0, message = "All the result parameters must be non-negative."))]
    answered: i32,
    #[validate(range(min = 0, message = "All the result parameters must be non-negative."))]
    correct: i32,
    #[validate(range(min = 0, message = "All the result parameters must be non-negative."))]
    wrong: i32,
    #[validate(range(min = 0, max = 100, message = "'percentage' must be between 0 and 100."))]
    percentage: i32,
}

impl QuizResult {
    pub fn new(
        total: i32,
        answered: i32,
        correct: i32,
        wrong: i32,
        percentage: i32,
    ) -> AppResult<Self> {
        let result = Self {
            total,
            answered,
            correct,
            wrong,
            percentage,
        };
        result.validate()?;

        if total < answered || i64::from(answered) != i64::from(correct) + i64::from(wrong) {
            return Err(AppError::ValidationError(format!(
                "Result parameters contradict each other: total={}, answered={}, correct={}, wrong={}",
                total, answered, correct, wrong
            )));
        }
        Ok(result)
    }

    /// Legacy form: `wrong` is derived from `answered - correct`.
    pub fn with_percentage(
        total: i32,
        answered: i32,
        correct: i32,
        percentage: i32,
    ) -> AppResult<Self> {
        if total < 0 || answered < 0 || correct < 0 {
            return Err(AppError::ValidationError(NON_NEGATIVE.to_string()));
        }
        if answered < correct {
            return Err(AppError::ValidationError(format!(
                "Result parameters contradict each other: answered={}, correct={}",
                answered, correct
            )));
        }
        Self::new(total, answered, correct, answered - correct, percentage)
    }

    /// Legacy form with the default 100% pass threshold.
    pub fn from_counts(total: i32, answered: i32, correct: i32) -> AppResult<Self> {
        Self::with_percentage(total, answered, correct, DEFAULT_PASS_PERCENTAGE)
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn answered(&self) -> i32 {
        self.answered
    }

    pub fn correct(&self) -> i32 {
        self.correct
    }

    pub fn wrong(&self) -> i32 {
        self.wrong
    }

    pub fn percentage(&self) -> i32 {
        self.percentage
    }

    /// Floor of `correct * 100 / total`. An empty test scores 100.
    pub fn score(&self) -> i64 {
        if self.total == 0 {
            return 100;
        }
        i64::from(self.correct) * 100 / i64::from(self.total)
    }

    pub fn is_finished(&self) -> bool {
        self.total == self.answered
    }

    pub fn is_passed(&self) -> bool {
        self.is_finished() && self.score() >= i64::from(self.percentage)
    }

    pub fn to_record(&self) -> ResultRecord {
        ResultRecord {
            total: self.total.to_string(),
            answered: self.answered.to_string(),
            correct: self.correct.to_string(),
            wrong: self.wrong.to_string(),
            percentage: self.percentage.to_string(),
        }
    }
}

impl TryFrom<ResultInput> for QuizResult {
    type Error = AppError;

    fn try_from(input: ResultInput) -> Result<Self, Self::Error> {
        let (Some(total), Some(answered), Some(correct)) =
            (input.total, input.answered, input.correct)
        else {
            return Err(AppError::ValidationError(
                "All the result parameters must be provided.".to_string(),
            ));
        };
        let percentage = input.percentage.unwrap_or(DEFAULT_PASS_PERCENTAGE);

        match input.wrong {
            Some(wrong) => Self::new(total, answered, correct, wrong, percentage),
            None => Self::with_percentage(total, answered, correct, percentage),
        }
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER)?;
        if self.is_finished() {
            writeln!(f, "YOUR TEST IS FINISHED.")?;
        } else {
            writeln!(f, "YOUR TEST IS NOT FINISHED.")?;
            writeln!(f, "TOTAL: {}", self.total)?;
            writeln!(f, "ANSWERED: {}", self.answered)?;
        }
        writeln!(f, "CORRECT: {}", self.correct)?;
        writeln!(f, "WRONG: {}", self.wrong)?;
        writeln!(f, "PASSING PERCENTAGE: {}", self.percentage)?;
        if self.is_passed() {
            writeln!(f, ":) CONGRATULATIONS!!! :)")?;
        } else if self.is_finished() {
            writeln!(f, ":( PREPARE AND TRY AGAIN LATER :(")?;
        } else {
            writeln!(f, "PLEASE CONTINUE.")?;
        }
        f.write_str(BANNER)
    }
}
