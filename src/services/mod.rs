pub mod console_runner;

pub use console_runner::ConsoleRunner;
