//! User settings as persisted by the extension options page.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification backend selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    #[default]
    OpenAi,
    Gemini,
    DeepSeek,
    Ollama,
}

impl Provider {
    pub const ALL: [Provider; 4] = [Self::OpenAi, Self::Gemini, Self::DeepSeek, Self::Ollama];

    /// Key used in the settings maps.
    pub fn id(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::DeepSeek => "deepseek",
            Self::Ollama => "ollama",
        }
    }

    /// Model used when the user has not named one.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o-mini",
            Self::Gemini => "gemini-2.5-flash",
            Self::DeepSeek => "deepseek-chat",
            Self::Ollama => "llama3",
        }
    }

    /// The local server needs no API key; its credential slot holds a base URL.
    pub fn requires_credential(&self) -> bool {
        !matches!(self, Self::Ollama)
    }
}

impl From<&str> for Provider {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Self::Gemini,
            "deepseek" => Self::DeepSeek,
            "ollama" => Self::Ollama,
            // Unknown names fall back to the OpenAI wire format.
            _ => Self::OpenAi,
        }
    }
}

impl From<String> for Provider {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Provider> for String {
    fn from(value: Provider) -> Self {
        value.id().to_string()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Snapshot of the `settings` key of the extension storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub provider: Provider,

    /// Credential per provider id. For `ollama` this is the server base URL.
    #[serde(default)]
    pub keys: HashMap<String, String>,

    #[serde(default)]
    pub model_names: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_tags: Option<bool>,
}

impl Settings {
    /// Defaults written by the options page on first save.
    pub fn with_defaults() -> Self {
        let mut keys: HashMap<String, String> = Provider::ALL
            .iter()
            .map(|p| (p.id().to_string(), String::new()))
            .collect();
        keys.insert(
            Provider::Ollama.id().to_string(),
            "http://localhost:11434".to_string(),
        );

        let model_names = Provider::ALL
            .iter()
            .map(|p| (p.id().to_string(), p.default_model().to_string()))
            .collect();

        Self {
            provider: Provider::OpenAi,
            keys,
            model_names,
            append_tags: None,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_key(mut self, provider: Provider, key: impl Into<String>) -> Self {
        self.keys.insert(provider.id().to_string(), key.into());
        self
    }

    pub fn with_model(mut self, provider: Provider, model: impl Into<String>) -> Self {
        self.model_names.insert(provider.id().to_string(), model.into());
        self
    }

    pub fn with_append_tags(mut self, append: bool) -> Self {
        self.append_tags = Some(append);
        self
    }

    /// Configured credential, ignoring blank entries.
    pub fn credential(&self, provider: Provider) -> Option<&str> {
        non_blank(self.keys.get(provider.id()))
    }

    /// Configured model name, ignoring blank entries.
    pub fn model_name(&self, provider: Provider) -> Option<&str> {
        non_blank(self.model_names.get(provider.id()))
    }

    /// Tags are appended unless explicitly disabled.
    pub fn should_append_tags(&self) -> bool {
        self.append_tags != Some(false)
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}
