use std::sync::Arc;

use crate::models::domain::quiz_test::QuizTest;

/// A named group of tests.
#[derive(Debug)]
pub struct TestSuite {
    topic: String,
    tests: Vec<Arc<QuizTest>>,
}

impl TestSuite {
    pub fn new(topic: &str, tests: Vec<Arc<QuizTest>>) -> Self {
        Self {
            topic: topic.to_string(),
            tests,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tests(&self) -> &[Arc<QuizTest>] {
        &self.tests
    }
}
