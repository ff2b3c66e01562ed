pub mod record;
pub mod request;

pub use record::{AnswerRecord, QuestionRecord, QuestionTextRecord, ResultRecord};
pub use request::{QuestionDefinition, ResultInput};
