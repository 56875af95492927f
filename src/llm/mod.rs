//! AI recommendation generation
//! Prompt templates and the OpenAI chat-completions client

pub mod client;
pub mod prompts;
