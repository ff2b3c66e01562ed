use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct AnswerRecord {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionTextRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuestionRecord {
    pub question: QuestionTextRecord,
    pub expected: AnswerRecord,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<AnswerRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub got: Option<AnswerRecord>,
}

/// Counts are carried as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ResultRecord {
    pub total: String,
    pub answered: String,
    pub correct: String,
    pub wrong: String,
    pub percentage: String,
}
