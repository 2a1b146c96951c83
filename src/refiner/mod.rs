//! AI message refinement via the Gemini `generateContent` API.
//!
//! The refiner rewrites a draft in a requested [`Tone`]. Its one promise
//! to callers is that it always hands back usable text: a missing API key,
//! a transport failure, a non-success status, or an unusable response body
//! all fall back to the original draft. Failures are logged, never
//! returned.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Tone;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

// ---------------------------------------------------------------------------
// Refiner
// ---------------------------------------------------------------------------

/// Gemini-backed message refiner.
#[derive(Debug, Clone)]
pub struct MessageRefiner {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl MessageRefiner {
    /// Create a refiner with an explicit key. `None` (or an empty string)
    /// disables refinement; [`refine`](Self::refine) then returns drafts
    /// unchanged.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE)
    }

    /// Create a refiner against a custom API endpoint (test servers).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into(),
        }
    }

    /// Read the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_VAR).ok())
    }

    /// Rewrite `text` in the requested tone.
    ///
    /// Always returns usable text: on any failure the original draft comes
    /// back unchanged.
    pub async fn refine(&self, text: &str, tone: Tone) -> String {
        let Some(api_key) = &self.api_key else {
            warn!("{API_KEY_VAR} is not set, returning draft unchanged");
            return text.to_string();
        };

        match self.request_refinement(api_key, text, tone).await {
            Ok(refined) if !refined.is_empty() => refined,
            Ok(_) => {
                warn!("Refinement returned no text, keeping draft");
                text.to_string()
            }
            Err(e) => {
                warn!("Refinement failed, keeping draft: {e:#}");
                text.to_string()
            }
        }
    }

    async fn request_refinement(&self, api_key: &str, text: &str, tone: Tone) -> Result<String> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, GEMINI_MODEL);
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: Some(build_prompt(text, tone)) }] }],
        };

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .context("Request to Gemini API failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Gemini API returned {status}");
        }

        let payload: GenerateContentResponse =
            response.json().await.context("Failed to parse Gemini response")?;

        let refined = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<String>()
            })
            .unwrap_or_default();

        Ok(refined.trim().to_string())
    }
}

/// Rewrite instruction sent to the model: target tone, text-message
/// brevity, no added quotation marks.
fn build_prompt(text: &str, tone: Tone) -> String {
    format!(
        "Rewrite the following WhatsApp message to be more {tone}, polite, and error-free. \
         Keep it concise (under 50 words) as it is a text message. \
         Do not add quotation marks.\n\nMessage: \"{text}\""
    )
}
