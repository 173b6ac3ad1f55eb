//! Advisor client
//!
//! HTTP client for the hosted generative-language API. Two prompt modes:
//! a suggestion built from the screening probability, and a stateless chat
//! persona. No conversation history is sent with chat turns; each call is
//! independent.
//!
//! Any failure here is recoverable: handlers substitute the static
//! fallback text instead of surfacing the fault to the user.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::RiskTier;

/// Served when the suggestion call fails for any reason
pub const SUGGESTION_FALLBACK: &str = "💛 Our suggestion service is taking a short break. \
    Meanwhile: keep a steady sleep schedule, get some sunlight, and talk to someone you trust. \
    Aap akele nahi hain — you are not alone. 🌿";

/// Served when the chat call fails for any reason
pub const CHAT_FALLBACK: &str = "💛 I'm having a little trouble finding my words right now, \
    but I'm still here with you. Thoda sa break ke baad phir se message karna, okay? \
    You matter. 🤗";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("http client error: {0}")]
    Client(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("service error: {0}")]
    Service(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("empty response from generation service")]
    EmptyResponse,
}

/// Generative API configuration
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Client for the `generateContent` endpoint
pub struct AdvisorClient {
    config: AdvisorConfig,
    http_client: reqwest::Client,
}

// Wire types for the generateContent call

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl AdvisorClient {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AdvisorError::Client(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    /// Lifestyle suggestion scaled to the screening probability
    pub async fn suggest(&self, probability: f32, tier: RiskTier) -> Result<String, AdvisorError> {
        self.generate(&suggestion_prompt(probability, tier)).await
    }

    /// One stateless chat turn
    pub async fn chat_reply(&self, name: &str, message: &str) -> Result<String, AdvisorError> {
        self.generate(&chat_prompt(name, message)).await
    }

    /// Send one prompt and return the first candidate's text verbatim
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key,
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AdvisorError::Service(response.status().as_u16()));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::Parse(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(AdvisorError::EmptyResponse)
    }
}

/// Generated text, or the mode's static fallback when the call failed.
/// The failure is logged by the caller; the user always gets a message.
pub fn text_or_fallback(result: Result<String, AdvisorError>, fallback: &str) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Generation failed ({}), serving fallback", e);
            fallback.to_string()
        }
    }
}

fn suggestion_prompt(probability: f32, tier: RiskTier) -> String {
    format!(
        "Act as a warm, empathetic, and uplifting assistant dedicated to mental well-being. \
        The user has just completed a depression screening; their estimated probability of \
        depression is {:.1}% ({} risk). Offer generalized lifestyle tips and personalized \
        suggestions to help them stay away from depression, scaled to that percentage. \
        Keep the tone friendly, pampering, and engaging, like a close friend, and respond \
        naturally in both English and Hindi, using emoticons to keep the conversation lively.",
        probability * 100.0,
        tier.label(),
    )
}

fn chat_prompt(name: &str, message: &str) -> String {
    format!(
        "You are a caring best friend supporting people who feel low or lonely. \
        Read the user's mood from their message and respond with warmth, empathy, light humor, \
        and encouragement. Reply at medium length, naturally mixing English and Hinglish, \
        and use emojis to make the conversation feel real. Be patient, non-judgmental, and \
        engaging, and never reveal that you are an AI.\n\n\
        User Name: {}\n\
        User: {}\n\
        Chatbot:",
        name, message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_prompt_embeds_probability() {
        let prompt = suggestion_prompt(0.62, RiskTier::High);
        assert!(prompt.contains("62.0%"));
        assert!(prompt.contains("high risk"));
    }

    #[test]
    fn test_chat_prompt_embeds_name_and_message() {
        let prompt = chat_prompt("Asha", "I had a rough day");
        assert!(prompt.contains("User Name: Asha"));
        assert!(prompt.contains("User: I had a rough day"));
    }

    #[test]
    fn test_fallbacks_are_defined() {
        assert!(!SUGGESTION_FALLBACK.is_empty());
        assert!(!CHAT_FALLBACK.is_empty());
    }

    #[test]
    fn test_failed_generation_substitutes_fallback() {
        let text = text_or_fallback(
            Err(AdvisorError::Service(503)),
            SUGGESTION_FALLBACK,
        );
        assert_eq!(text, SUGGESTION_FALLBACK);

        let text = text_or_fallback(Ok("namaste 🌼".to_string()), SUGGESTION_FALLBACK);
        assert_eq!(text, "namaste 🌼");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error_not_a_panic() {
        // Nothing listens on port 9; both modes must fail cleanly so the
        // handlers can substitute the fallback text.
        let client = AdvisorClient::new(AdvisorConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();

        let err = client.suggest(0.5, RiskTier::High).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Network(_)));

        let err = client.chat_reply("Asha", "hello").await.unwrap_err();
        assert!(matches!(err, AdvisorError::Network(_)));
    }
}
