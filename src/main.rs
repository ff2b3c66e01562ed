use std::io;

use quiz_core::{
    app_state::AppState, config::Config, errors::AppResult, providers::JsonQuestionsProvider,
    services::ConsoleRunner,
};

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if std::env::args().skip(1).any(|arg| arg == "--schema") {
        println!("{}", JsonQuestionsProvider::schema()?);
        return Ok(());
    }

    let state = AppState::new(Config::from_env())?;
    log::info!("Running suite '{}'", state.suite.topic());

    let stdin = io::stdin();
    let mut runner = ConsoleRunner::new(stdin.lock(), io::stdout());
    for test in state.suite.tests() {
        runner.run(test)?;
    }
    Ok(())
}
