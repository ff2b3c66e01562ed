pub mod json_provider;
pub mod sample_provider;

use std::sync::Arc;

use crate::models::domain::Question;

pub use json_provider::JsonQuestionsProvider;
pub use sample_provider::SampleQuestionsProvider;

/// Supplies the ordered questions of a test.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionsProvider: Send + Sync {
    fn questions(&self) -> Vec<Arc<Question>>;
}
