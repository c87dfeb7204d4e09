use super::{CompletionRequest, LLMBackend};
use crate::config::{Config, MODEL_PLACEHOLDER};
use crate::error::{ChatError, ChatResult};
use crate::types::ModelId;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Hosted text-generation endpoint, one POST per completion.
pub struct HuggingFaceBackend {
    client: Client,
    endpoint_template: String,
    max_new_tokens: u32,
    temperature: f64,
}

impl HuggingFaceBackend {
    pub fn new(
        endpoint_template: impl Into<String>,
        max_new_tokens: u32,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint_template: endpoint_template.into(),
            max_new_tokens,
            temperature,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.endpoint_template.clone(),
            config.max_new_tokens,
            config.temperature,
        )
    }

    pub fn endpoint_for(&self, model: ModelId) -> String {
        self.endpoint_template.replace(MODEL_PLACEHOLDER, model.as_str())
    }
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    List(Vec<GeneratedText>),
    Single(GeneratedText),
}

/// Pulls the generated text out of either `[{"generated_text": ..}]` or
/// `{"generated_text": ..}`. A missing field decodes as an empty string.
pub fn parse_generated_text(body: &str) -> ChatResult<String> {
    let parsed: GenerationResponse = serde_json::from_str(body)?;
    let first = match parsed {
        GenerationResponse::List(items) => items.into_iter().next(),
        GenerationResponse::Single(item) => Some(item),
    };
    Ok(first
        .and_then(|item| item.generated_text)
        .unwrap_or_default()
        .trim()
        .to_string())
}

#[async_trait]
impl LLMBackend for HuggingFaceBackend {
    async fn complete(&self, request: &CompletionRequest) -> ChatResult<String> {
        let url = self.endpoint_for(request.model);
        tracing::debug!(
            %url,
            model = %request.model,
            prompt_len = request.prompt.len(),
            "sending completion request"
        );

        let mut builder = self.client.post(&url).json(&GenerationRequest {
            inputs: &request.prompt,
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
            },
        });
        if let Some(token) = &request.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatError::Status { status, body });
        }
        parse_generated_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_shape() {
        let text = parse_generated_text(r#"[{"generated_text":" Paris. "}]"#).unwrap();
        assert_eq!(text, "Paris.");
    }

    #[test]
    fn parses_single_object_shape() {
        let text = parse_generated_text(r#"{"generated_text":"Hi"}"#).unwrap();
        assert_eq!(text, "Hi");
    }

    #[test]
    fn missing_field_or_empty_list_is_empty_text() {
        assert_eq!(parse_generated_text("[]").unwrap(), "");
        assert_eq!(parse_generated_text(r#"[{"score":1}]"#).unwrap(), "");
    }

    #[test]
    fn error_payload_is_a_decode_error() {
        assert!(matches!(
            parse_generated_text("Model is loading"),
            Err(ChatError::Decode(_))
        ));
    }

    #[test]
    fn endpoint_substitutes_model() {
        let backend = HuggingFaceBackend::new("https://example.test/models/{model}", 100, 0.7);
        assert_eq!(
            backend.endpoint_for(ModelId::DialoGptMedium),
            "https://example.test/models/microsoft/DialoGPT-medium"
        );
    }
}
