pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod logging;

pub use config::{Config, FailurePolicy};
pub use domain::ai::client::{CompletionClient, OpenAiCompletions};
pub use error::AppError;
pub use generator::{GenerationReport, Generator};
