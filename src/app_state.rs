use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{QuizTest, TestSuite},
    providers::{JsonQuestionsProvider, QuestionsProvider, SampleQuestionsProvider},
};

#[derive(Clone)]
pub struct AppState {
    pub suite: Arc<TestSuite>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let provider: Box<dyn QuestionsProvider> = match &config.questions_path {
            Some(path) => Box::new(JsonQuestionsProvider::from_file(path, config.answer_confs())?),
            None => {
                log::info!("No question bank configured, using the sample questions");
                Box::new(SampleQuestionsProvider::new(config.answer_confs()))
            }
        };

        let test = QuizTest::with_pass_percentage(provider.as_ref(), config.pass_percentage)?;
        let suite = Arc::new(TestSuite::new(&config.suite_name, vec![Arc::new(test)]));

        Ok(Self {
            suite,
            config: Arc::new(config),
        })
    }
}
