use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No more questions in the test")]
    NoMoreQuestions,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NoMoreQuestions => "NO_MORE_QUESTIONS",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::IoError(_) => "IO_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(format!("JSON error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidState("test".into()).error_code(),
            "INVALID_STATE"
        );
        assert_eq!(
            AppError::ValidationError("test".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::NoMoreQuestions.error_code(), "NO_MORE_QUESTIONS");
        assert_eq!(AppError::ParseError("test".into()).error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidState("answered".into());
        assert_eq!(err.to_string(), "Invalid state: answered");
        assert_eq!(
            AppError::NoMoreQuestions.to_string(),
            "No more questions in the test"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        let err: AppError = io.into();
        assert_eq!(err, AppError::IoError("closed".to_string()));
    }

    #[test]
    fn test_json_error_conversion() {
        let parsed = serde_json::from_str::<Vec<String>>("[1,");
        let err: AppError = parsed.unwrap_err().into();
        assert_eq!(err.error_code(), "PARSE_ERROR");
    }
}
