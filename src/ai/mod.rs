//! Response resolution for the chat front-end.
//!
//! The resolver flattens the conversation into a prompt, asks a hosted
//! text-generation endpoint for a continuation, and substitutes a rule-based
//! reply whenever that call fails.
//!
//! # Architecture
//!
//! - `prompt` - prompt serialization and completion cleanup
//! - `huggingface` - `reqwest` backend for the hosted inference API
//! - `fallback` - ordered keyword rules used when the backend fails
//! - `resolver` - glues the above together behind a timeout
//!
//! # Usage
//!
//! ```rust,no_run
//! use mistral_chat::ai::Resolver;
//! use mistral_chat::config::Config;
//! use mistral_chat::conversation::Conversation;
//! use mistral_chat::types::ChatMessage;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let resolver = Resolver::from_config(&config);
//! let mut conversation = Conversation::new();
//! conversation.append(ChatMessage::user("Hello!"))?;
//! let reply = resolver
//!     .resolve(&conversation, config.model, config.api_token.as_deref())
//!     .await;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod fallback;
pub mod huggingface;
pub mod prompt;
mod resolver;

use crate::error::ChatResult;
use crate::types::ModelId;
use async_trait::async_trait;

pub use fallback::{FallbackRule, fallback_reply};
pub use huggingface::HuggingFaceBackend;
pub use prompt::{clean_completion, format_chat_prompt};
pub use resolver::Resolver;

/// Everything a backend needs to produce one completion.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: ModelId,
    pub prompt: String,
    pub api_token: Option<String>,
}

#[async_trait]
pub trait LLMBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> ChatResult<String>;
}
