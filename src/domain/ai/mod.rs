pub mod client;
pub mod retry;

pub use client::{build_user_message, CompletionClient, OpenAiCompletions};
pub use retry::with_retry;
