use super::fallback::fallback_reply;
use super::prompt::{clean_completion, format_chat_prompt};
use super::{CompletionRequest, HuggingFaceBackend, LLMBackend};
use crate::config::Config;
use crate::conversation::Conversation;
use crate::error::{ChatError, ChatResult};
use crate::types::ModelId;
use std::sync::Arc;
use std::time::Duration;

/// Produces the next assistant message. Backend failures never escape:
/// they are logged and replaced by a fallback reply.
#[derive(Clone)]
pub struct Resolver {
    backend: Arc<dyn LLMBackend>,
    timeout: Duration,
}

impl Resolver {
    pub fn new(backend: Arc<dyn LLMBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HuggingFaceBackend::from_config(config)),
            config.timeout,
        )
    }

    pub async fn resolve(
        &self,
        conversation: &Conversation,
        model: ModelId,
        api_token: Option<&str>,
    ) -> String {
        match self.try_remote(conversation, model, api_token).await {
            Ok(reply) => reply,
            Err(err) => {
                let reply = fallback_reply(conversation);
                tracing::warn!(
                    error = %err,
                    %model,
                    "remote completion failed, using fallback reply"
                );
                reply.to_string()
            }
        }
    }

    async fn try_remote(
        &self,
        conversation: &Conversation,
        model: ModelId,
        api_token: Option<&str>,
    ) -> ChatResult<String> {
        let request = CompletionRequest {
            model,
            prompt: format_chat_prompt(conversation.messages()),
            api_token: api_token.map(str::to_string),
        };

        let generated = tokio::time::timeout(self.timeout, self.backend.complete(&request))
            .await
            .map_err(|_| ChatError::Timeout(self.timeout))??;

        let reply = clean_completion(&request.prompt, &generated);
        if reply.is_empty() {
            return Err(ChatError::EmptyCompletion);
        }
        Ok(reply)
    }
}
