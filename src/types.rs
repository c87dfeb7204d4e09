use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Marker used in exported transcripts.
    pub fn icon(self) -> &'static str {
        match self {
            Role::User => "🧑",
            Role::Assistant => "🤖",
        }
    }

    /// Speaker label used when the conversation is flattened into a prompt.
    pub fn speaker(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Builds a message stamped with the current wall-clock time.
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: current_timestamp(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::now(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(Role::Assistant, content)
    }
}

pub fn current_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Records the local UTC offset. The offset can only be read reliably while
/// the process is single-threaded, so binaries call this before starting
/// any runtime. Returns the offset in effect.
pub fn capture_local_offset() -> Option<UtcOffset> {
    if let Some(offset) = LOCAL_OFFSET.get() {
        return Some(*offset);
    }
    match UtcOffset::current_local_offset() {
        Ok(offset) => Some(*LOCAL_OFFSET.get_or_init(|| offset)),
        Err(err) => {
            tracing::debug!(error = %err, "local offset unavailable, timestamps stay in UTC");
            None
        }
    }
}

/// Formats in local time when the offset is known, UTC otherwise.
pub fn format_timestamp(datetime: OffsetDateTime) -> String {
    format_timestamp_at(datetime, capture_local_offset())
}

fn format_timestamp_at(datetime: OffsetDateTime, offset: Option<UtcOffset>) -> String {
    let datetime = match offset {
        Some(offset) => datetime.to_offset(offset),
        None => datetime,
    };
    datetime.format(MESSAGE_TIME_FORMAT).unwrap_or_default()
}

/// Models offered by the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "HuggingFaceH4/zephyr-7b-beta")]
    ZephyrBeta,
    #[serde(rename = "microsoft/DialoGPT-medium")]
    DialoGptMedium,
    #[serde(rename = "gpt2")]
    Gpt2,
}

impl ModelId {
    pub const ALL: [ModelId; 3] = [ModelId::ZephyrBeta, ModelId::DialoGptMedium, ModelId::Gpt2];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::ZephyrBeta => "HuggingFaceH4/zephyr-7b-beta",
            ModelId::DialoGptMedium => "microsoft/DialoGPT-medium",
            ModelId::Gpt2 => "gpt2",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}'")]
pub struct UnknownModel(pub String);

impl FromStr for ModelId {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ModelId::ALL
            .into_iter()
            .find(|model| model.as_str() == wanted)
            .ok_or_else(|| UnknownModel(wanted.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}
