//! In-memory conversation store.
//!
//! Messages are kept in insertion order, which is also chronological order.
//! The store only grows until it is cleared wholesale.

use crate::error::{ChatError, ChatResult};
use crate::types::{ChatMessage, Role};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub const TRANSCRIPT_FILE_NAME: &str = "chat_history.txt";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message. Whitespace-only content is rejected.
    pub fn append(&mut self, message: ChatMessage) -> ChatResult<()> {
        if message.content.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn last_user_message(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|msg| msg.role == Role::User)
    }

    /// Renders the transcript, one line per message:
    /// `<role-icon> [<timestamp>] <content>`.
    pub fn export(&self) -> String {
        self.messages
            .iter()
            .map(export_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn export_line(msg: &ChatMessage) -> String {
    let content = msg
        .content
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} [{}] {}", msg.role.icon(), msg.timestamp, content)
}

/// Writes the exported transcript into `dir` and returns the file path.
pub fn save_transcript(conversation: &Conversation, dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(TRANSCRIPT_FILE_NAME);
    fs::write(&path, conversation.export())
        .with_context(|| format!("failed to write transcript to {}", path.display()))?;
    tracing::info!(path = %path.display(), messages = conversation.len(), "transcript exported");
    Ok(path)
}

/// Where the UI drops exported transcripts.
pub fn default_export_dir() -> PathBuf {
    if let Some(dir) = dirs::download_dir() {
        return dir;
    }
    if let Some(dir) = dirs::data_local_dir() {
        return dir.join("mistral-chat");
    }
    PathBuf::from(".")
}
