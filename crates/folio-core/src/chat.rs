//! Chat bridge: forwards a visitor message plus prior turns to an
//! OpenAI-compatible completion endpoint and maps every failure mode to a
//! fixed display string for the chat transcript.
//!
//! The bridge holds no state between calls; the caller re-supplies the
//! transcript as `history`. The client timeout bounds every round-trip, so a
//! slow service cannot leave a call pending forever.

use crate::config::FolioConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";

/// Shown when no API key is configured. No network call is attempted.
pub const CHAT_NOT_CONFIGURED_MSG: &str =
    "The assistant is not configured. Set FOLIO_API_KEY to enable chat.";
/// Shown for any transport or service-side failure.
pub const CHAT_FALLBACK_MSG: &str =
    "Sorry, the assistant is temporarily unavailable. Please try again later.";
/// Shown when the service answers with empty content.
pub const CHAT_EMPTY_MSG: &str = "No response generated.";

const SYSTEM_INSTRUCTION: &str = "You are the AI assistant for the portfolio website of a senior \
    frontend engineer named Dev. Dev is an expert in React, TypeScript, Tailwind CSS, and AI \
    integration. Answer visitor questions professionally, briefly, and concisely. Do not use \
    emojis. Keep the tone professional, modern, and somewhat minimalist, matching the website's \
    design. If asked about contact info, suggest using the contact form or emailing \
    dev@example.com. If asked about availability, say Dev is currently open to select freelance \
    opportunities.";

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One prior turn of the widget transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

// OpenAI-compatible wire types
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: WireContent,
}

#[derive(Deserialize)]
struct WireContent {
    #[serde(default)]
    content: String,
}

/// Stateless bridge to the generative-text service.
pub struct ChatBridge {
    api_key: Option<String>,
    api_url: String,
    model: String,
    client: reqwest::Client,
}

impl ChatBridge {
    /// Builds a bridge from the loaded configuration. A missing or blank key
    /// is a valid state: `send` short-circuits to the not-configured notice.
    pub fn from_config(cfg: &FolioConfig) -> Self {
        let mut bridge = Self::new(cfg.chat_api_key());
        if let Some(model) = cfg.chat_model.as_deref() {
            bridge = bridge.with_model(model);
        }
        if let Some(url) = cfg.chat_api_url.as_deref() {
            bridge = bridge.with_api_url(url);
        }
        bridge
    }

    pub fn new(api_key: Option<String>) -> Self {
        // The timeout is the abort bound for every round-trip; never fall
        // back to an untimed client. Builder failure means the TLS backend
        // could not initialize.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("http client initialization");
        Self {
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Set the model (e.g. `meta-llama/llama-3.3-70b-instruct`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set the API base URL (an OpenAI-compatible `/chat/completions` host).
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sends `message` with the prior transcript and returns the text to
    /// display. This never errors: an unconfigured key, a transport failure,
    /// and an empty completion each map to their fixed literal.
    pub async fn send(&self, message: &str, history: &[ChatTurn]) -> String {
        let Some(ref api_key) = self.api_key else {
            return CHAT_NOT_CONFIGURED_MSG.to_string();
        };
        match self.request(api_key, message, history).await {
            Ok(text) if text.trim().is_empty() => CHAT_EMPTY_MSG.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "chat request failed, serving fallback");
                CHAT_FALLBACK_MSG.to_string()
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        message: &str,
        history: &[ChatTurn],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system".to_string(),
            content: SYSTEM_INSTRUCTION.to_string(),
        });
        for turn in history {
            messages.push(WireMessage {
                role: turn.role.as_str().to_string(),
                content: turn.text.clone(),
            });
        }
        messages.push(WireMessage {
            role: "user".to_string(),
            content: message.to_string(),
        });

        let url = format!("{}/chat/completions", self.api_url);
        let body = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: Some(0.7),
            max_tokens: Some(1024),
        };

        let res = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("chat request failed: {}", e))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("chat service error {}: {}", status, body).into());
        }

        let parsed: ChatResponse = res
            .json()
            .await
            .map_err(|e| format!("chat response parse failed: {}", e))?;

        Ok(parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}
