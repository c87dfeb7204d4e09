use crate::error::{ChatError, ChatResult};
use crate::types::ModelId;
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://api-inference.huggingface.co/models/{model}";
pub const MODEL_PLACEHOLDER: &str = "{model}";
const DEFAULT_MAX_NEW_TOKENS: u32 = 100;
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the resolver, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_token: Option<String>,
    pub endpoint_template: String,
    pub model: ModelId,
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            endpoint_template: DEFAULT_ENDPOINT_TEMPLATE.to_string(),
            model: ModelId::default(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> ChatResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let endpoint_template = read("HF_INFERENCE_URL").unwrap_or(defaults.endpoint_template);
        if !endpoint_template.contains(MODEL_PLACEHOLDER) {
            return Err(ChatError::Config(format!(
                "HF_INFERENCE_URL must contain {MODEL_PLACEHOLDER}: {endpoint_template}"
            )));
        }

        let model = match read("CHAT_MODEL") {
            Some(raw) => raw
                .parse::<ModelId>()
                .map_err(|e| ChatError::Config(format!("CHAT_MODEL: {e}")))?,
            None => defaults.model,
        };

        let max_new_tokens = parse_or(&read, "CHAT_MAX_NEW_TOKENS", defaults.max_new_tokens)?;
        let temperature = parse_or(&read, "CHAT_TEMPERATURE", defaults.temperature)?;
        let timeout_secs = parse_or(&read, "CHAT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            api_token: read("HF_API_TOKEN"),
            endpoint_template,
            model,
            max_new_tokens,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn parse_or<T>(read: impl Fn(&str) -> Option<String>, key: &str, default: T) -> ChatResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match read(key) {
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ChatError::Config(format!("{key}='{value}': {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.api_token.is_none());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_lookup(lookup(&[
            ("HF_API_TOKEN", "hf_test"),
            ("HF_INFERENCE_URL", "http://localhost:9000/models/{model}"),
            ("CHAT_MODEL", "gpt2"),
            ("CHAT_MAX_NEW_TOKENS", "42"),
            ("CHAT_TEMPERATURE", "0.2"),
            ("CHAT_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_token.as_deref(), Some("hf_test"));
        assert_eq!(config.endpoint_template, "http://localhost:9000/models/{model}");
        assert_eq!(config.model, ModelId::Gpt2);
        assert_eq!(config.max_new_tokens, 42);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_token_counts_as_unset() {
        let config = Config::from_lookup(lookup(&[("HF_API_TOKEN", "  ")])).unwrap();
        assert!(config.api_token.is_none());
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = Config::from_lookup(lookup(&[("HF_INFERENCE_URL", "http://x/models")]))
            .unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = Config::from_lookup(lookup(&[("CHAT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("CHAT_TIMEOUT_SECS"));
    }

    #[test]
    fn env_lines_skip_comments_and_blanks() {
        let parsed = parse_env_lines("# comment\n\nHF_API_TOKEN=\n CHAT_MODEL = gpt2 \nnot a pair\n");
        assert_eq!(
            parsed,
            vec![
                ("HF_API_TOKEN".to_string(), String::new()),
                ("CHAT_MODEL".to_string(), "gpt2".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_model_is_a_config_error() {
        let err = Config::from_lookup(lookup(&[("CHAT_MODEL", "llama")])).unwrap_err();
        assert!(err.to_string().contains("unknown model"));
    }
}
