//! Per-provider wire strategies.

use reqwest::{Client, RequestBuilder};

use smartmarks_config::ProvidersConfig;
use smartmarks_protocols::{Provider, ProviderError, Settings};

use crate::api::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Content, GenerateContentRequest,
    GenerateContentResponse, LocalChatRequest, LocalChatResponse, Part,
};
use crate::prompt::SYSTEM_PROMPT;

const OPENAI_TEMPERATURE: f32 = 0.3;
const OLLAMA_CHAT_PATH: &str = "/api/chat";

/// How to talk to one provider: endpoint, credential and envelope shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WireStrategy {
    /// OpenAI chat completions; also used for DeepSeek.
    OpenAiCompatible {
        endpoint: String,
        api_key: String,
        model: String,
    },
    /// Gemini `generateContent`.
    Gemini {
        base_url: String,
        api_key: String,
        model: String,
    },
    /// Ollama chat server.
    LocalChat { base_url: String, model: String },
}

impl WireStrategy {
    /// Pick the strategy for the active provider.
    pub fn select(settings: &Settings, endpoints: &ProvidersConfig) -> Result<Self, ProviderError> {
        let provider = settings.provider;
        let credential = settings.credential(provider);
        if provider.requires_credential() && credential.is_none() {
            return Err(ProviderError::MissingCredential(provider.id().to_string()));
        }

        let model = settings
            .model_name(provider)
            .unwrap_or(provider.default_model())
            .to_string();
        let api_key = credential.unwrap_or_default().to_string();

        Ok(match provider {
            Provider::OpenAi => Self::OpenAiCompatible {
                endpoint: endpoints.openai_url.clone(),
                api_key,
                model,
            },
            Provider::DeepSeek => Self::OpenAiCompatible {
                endpoint: endpoints.deepseek_url.clone(),
                api_key,
                model,
            },
            Provider::Gemini => Self::Gemini {
                base_url: endpoints.gemini_base_url.clone(),
                api_key,
                model,
            },
            Provider::Ollama => Self::LocalChat {
                base_url: credential
                    .unwrap_or(endpoints.ollama_base_url.as_str())
                    .to_string(),
                model,
            },
        })
    }

    pub fn model(&self) -> &str {
        match self {
            Self::OpenAiCompatible { model, .. }
            | Self::Gemini { model, .. }
            | Self::LocalChat { model, .. } => model,
        }
    }

    /// Request URL without credentials.
    pub fn url(&self) -> String {
        match self {
            Self::OpenAiCompatible { endpoint, .. } => endpoint.clone(),
            Self::Gemini { base_url, model, .. } => format!("{}{}:generateContent", base_url, model),
            Self::LocalChat { base_url, .. } => {
                format!("{}{}", base_url.trim_end_matches('/'), OLLAMA_CHAT_PATH)
            }
        }
    }

    /// Build the HTTP request for one bookmark description.
    pub fn build_request(&self, client: &Client, content: &str) -> RequestBuilder {
        match self {
            Self::OpenAiCompatible { api_key, model, .. } => client
                .post(self.url())
                .header("Authorization", format!("Bearer {}", api_key))
                .header("Content-Type", "application/json")
                .json(&ChatCompletionRequest {
                    model,
                    messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(content)],
                    temperature: OPENAI_TEMPERATURE,
                }),
            Self::Gemini { api_key, .. } => client
                .post(self.url())
                .query(&[("key", api_key.as_str())])
                .header("Content-Type", "application/json")
                .json(&GenerateContentRequest {
                    contents: vec![Content {
                        parts: vec![Part {
                            text: Some(format!("{}\n\nInput:\n{}", SYSTEM_PROMPT, content)),
                        }],
                    }],
                }),
            Self::LocalChat { model, .. } => client.post(self.url()).json(&LocalChatRequest {
                model,
                messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(content)],
                stream: false,
            }),
        }
    }

    /// Pull the answer text out of the provider envelope.
    pub fn extract_text(&self, body: &str) -> Result<String, ProviderError> {
        let text = match self {
            Self::OpenAiCompatible { .. } => {
                let response: ChatCompletionResponse = parse(body)?;
                response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or_else(|| missing("choices[0].message.content"))?
            }
            Self::Gemini { .. } => {
                let response: GenerateContentResponse = parse(body)?;
                response
                    .candidates
                    .into_iter()
                    .next()
                    .and_then(|candidate| candidate.content)
                    .and_then(|content| content.parts.into_iter().next())
                    .and_then(|part| part.text)
                    .ok_or_else(|| missing("candidates[0].content.parts[0].text"))?
            }
            Self::LocalChat { .. } => {
                let response: LocalChatResponse = parse(body)?;
                response
                    .message
                    .and_then(|message| message.content)
                    .ok_or_else(|| missing("message.content"))?
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

fn missing(field: &str) -> ProviderError {
    ProviderError::InvalidResponse(format!("missing {}", field))
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
