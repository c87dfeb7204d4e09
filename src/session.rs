//! Per-session chat state.
//!
//! One `ChatSession` is owned by each interactive session and handed to the
//! handlers that mutate it. Nothing here is global.

use crate::ai::Resolver;
use crate::conversation::Conversation;
use crate::types::{ChatMessage, ModelId, Role, ThemeMode};

const INPUT_PREVIEW_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was appended and a reply is now pending.
    Accepted,
    /// Blank input.
    Empty,
    /// A reply to the previous message is still pending.
    Busy,
    /// Same text as the unanswered user message already in the log.
    Duplicate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    conversation: Conversation,
    model: ModelId,
    theme: ThemeMode,
    waiting_for_reply: bool,
    responded: bool,
    last_user_input: String,
    generation: u64,
}

impl ChatSession {
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn set_model(&mut self, model: ModelId) {
        if self.model != model {
            tracing::info!(from = %self.model, to = %model, "model changed");
            self.model = model;
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting_for_reply
    }

    pub fn has_responded(&self) -> bool {
        self.responded
    }

    /// Bumped by every `clear`, so a reply started before the clear can be
    /// told apart from one started after it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_user_input(&self) -> &str {
        &self.last_user_input
    }

    /// First few characters of the last input, for the debug panel.
    pub fn last_input_preview(&self) -> String {
        self.last_user_input
            .chars()
            .take(INPUT_PREVIEW_CHARS)
            .collect()
    }

    /// Records a user message. Only an `Accepted` submission should be
    /// followed by a call to the resolver.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.waiting_for_reply {
            return SubmitOutcome::Busy;
        }
        if let Some(last) = self.conversation.last()
            && last.role == Role::User
            && last.content == text
        {
            return SubmitOutcome::Duplicate;
        }

        if self.conversation.append(ChatMessage::user(text)).is_err() {
            return SubmitOutcome::Empty;
        }
        self.last_user_input = text.to_string();
        self.waiting_for_reply = true;
        self.responded = false;
        SubmitOutcome::Accepted
    }

    /// Stores the assistant reply for the pending submission.
    pub fn complete_reply(&mut self, reply: impl Into<String>) {
        if !self.waiting_for_reply {
            tracing::debug!("dropping reply that arrived after the session was cleared");
            return;
        }
        if let Err(err) = self.conversation.append(ChatMessage::assistant(reply)) {
            tracing::warn!(error = %err, "discarding assistant reply");
        }
        self.waiting_for_reply = false;
        self.responded = true;
    }

    /// Submits `text` and waits for the reply in one step.
    pub async fn send(
        &mut self,
        text: &str,
        resolver: &Resolver,
        api_token: Option<&str>,
    ) -> SubmitOutcome {
        let outcome = self.submit(text);
        if outcome == SubmitOutcome::Accepted {
            let reply = resolver
                .resolve(&self.conversation, self.model, api_token)
                .await;
            self.complete_reply(reply);
        }
        outcome
    }

    pub fn clear(&mut self) {
        tracing::info!(messages = self.conversation.len(), "clearing chat");
        self.conversation.clear();
        self.last_user_input.clear();
        self.waiting_for_reply = false;
        self.responded = false;
        self.generation += 1;
    }

    pub fn export(&self) -> String {
        self.conversation.export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::fallback::GREETING_REPLY;
    use crate::ai::{CompletionRequest, LLMBackend};
    use crate::error::{ChatError, ChatResult};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    struct Offline;

    #[async_trait]
    impl LLMBackend for Offline {
        async fn complete(&self, _request: &CompletionRequest) -> ChatResult<String> {
            Err(ChatError::EmptyCompletion)
        }
    }

    #[test]
    fn submit_appends_and_marks_pending() {
        let mut session = ChatSession::new(ModelId::Gpt2);
        assert_eq!(session.submit("  hello  "), SubmitOutcome::Accepted);
        assert!(session.is_waiting());
        assert!(!session.has_responded());
        assert_eq!(session.last_user_input(), "hello");
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation().messages()[0].content, "hello");
    }

    #[test]
    fn blank_and_busy_submissions_are_ignored() {
        let mut session = ChatSession::default();
        assert_eq!(session.submit("   "), SubmitOutcome::Empty);
        assert_eq!(session.submit("first"), SubmitOutcome::Accepted);
        assert_eq!(session.submit("second"), SubmitOutcome::Busy);
        assert_eq!(session.conversation().len(), 1);
    }

    #[test]
    fn repeated_unanswered_text_is_a_duplicate() {
        let mut session = ChatSession::default();
        session.submit("same");
        session.complete_reply("reply");
        assert_eq!(session.submit("same"), SubmitOutcome::Accepted);

        // Simulates the input box re-firing before the reply lands.
        session.waiting_for_reply = false;
        assert_eq!(session.submit("same"), SubmitOutcome::Duplicate);
    }

    #[test]
    fn reply_completes_the_exchange() {
        let mut session = ChatSession::default();
        session.submit("hi");
        session.complete_reply("Hello!");
        assert!(!session.is_waiting());
        assert!(session.has_responded());
        let roles: Vec<Role> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn late_reply_after_clear_is_dropped() {
        let mut session = ChatSession::default();
        session.submit("hi");
        session.clear();
        session.complete_reply("Hello!");
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn clear_bumps_generation() {
        let mut session = ChatSession::default();
        let before = session.generation();
        session.clear();
        assert_eq!(session.generation(), before + 1);
    }

    #[test]
    fn clear_resets_everything_but_model_and_theme() {
        let mut session = ChatSession::new(ModelId::DialoGptMedium);
        session.set_theme(ThemeMode::Dark);
        session.submit("hi");
        session.complete_reply("Hello!");

        session.clear();

        assert!(session.conversation().is_empty());
        assert_eq!(session.last_user_input(), "");
        assert!(!session.is_waiting());
        assert!(!session.has_responded());
        assert_eq!(session.model(), ModelId::DialoGptMedium);
        assert_eq!(session.theme(), ThemeMode::Dark);
    }

    #[test]
    fn preview_is_truncated() {
        let mut session = ChatSession::default();
        session.submit("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(session.last_input_preview(), "abcdefghijklmnopqrst");
    }

    #[tokio::test]
    async fn send_uses_fallback_when_offline() {
        let resolver = Resolver::new(Arc::new(Offline), Duration::from_secs(1));
        let mut session = ChatSession::default();

        let outcome = session.send("hi", &resolver, None).await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        let last = session.conversation().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, GREETING_REPLY);
        assert_eq!(session.export().lines().count(), 2);
    }
}
