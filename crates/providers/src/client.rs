//! Transport to the text-generation backend.
//!
//! Two deployment variants share one wire contract: posting `{prompt}`
//! to the relay, or posting a Gemini request directly upstream. Either
//! way the response is the Gemini envelope and the first candidate's
//! text is what we work with.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::chat_api::{ChatMessage, ContextSnapshot};
use shared::error::GenerationError;
use shared::idea::{IdeaFields, IdeaRequest};
use tracing::debug;

use crate::parse;
use crate::prompt;

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

enum Backend {
    Relay { url: String },
    Direct { model: String, api_key: String },
}

pub struct GenerationClient {
    http: Client,
    backend: Backend,
}

impl GenerationClient {
    /// The client-side timeout sits above the relay's 10 s upstream
    /// deadline so the relay gets to answer 504 itself.
    pub fn new(settings: shared::settings::BackendSettings) -> Result<Self> {
        let backend = match settings.relay_url {
            Some(url) => Backend::Relay { url },
            None => {
                let api_key = match settings.api_key {
                    Some(key) => key,
                    None => env::var("GEMINI_API_KEY")
                        .map_err(|_| anyhow!("GEMINI_API_KEY not set"))?,
                };
                Backend::Direct {
                    model: settings.gemini_model,
                    api_key,
                }
            }
        };
        Ok(Self {
            http: Client::builder().timeout(Duration::from_secs(15)).build()?,
            backend,
        })
    }

    /// Generate a full idea: fixed prompt, one call, strict decode.
    /// Any failure along the chain is one uniform [`GenerationError`].
    pub async fn generate(&self, request: &IdeaRequest) -> Result<IdeaFields, GenerationError> {
        let prompt = prompt::idea_prompt(request);
        let text = self.complete(&prompt).await?;
        parse::parse_idea_fields(&text)
    }

    /// Answer a follow-up question, scoped to the optional context and
    /// the bounded transcript tail. Same transport and error contract.
    pub async fn chat_reply(
        &self,
        message: &str,
        context: Option<&ContextSnapshot>,
        transcript_tail: &[ChatMessage],
    ) -> Result<String, GenerationError> {
        let prompt = prompt::chat_prompt(message, context, transcript_tail);
        let text = self.complete(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyCandidate);
        }
        Ok(text.to_string())
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let result = match &self.backend {
            Backend::Relay { url } => {
                debug!(url, "posting prompt to relay");
                self.http
                    .post(url)
                    .json(&RelayRequest { prompt })
                    .send()
                    .await
            }
            Backend::Direct { model, api_key } => {
                let url = format!(
                    "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
                    model, api_key
                );
                let req = GeminiRequest {
                    contents: vec![GeminiContent {
                        parts: vec![GeminiPart { text: prompt }],
                    }],
                };
                debug!(model, "posting prompt upstream");
                self.http.post(url).json(&req).send().await
            }
        };

        let resp = result.map_err(|e| GenerationError::from_transport(&e, e.is_timeout()))?;

        let status = resp.status();
        if !status.is_success() {
            let details = resp.text().await.unwrap_or_default();
            return Err(GenerationError::from_status(status.as_u16(), details));
        }

        let envelope: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::MalformedOutput(e.to_string()))?;
        candidate_text(envelope).ok_or(GenerationError::EmptyCandidate)
    }
}

/// First candidate's first text part, if the envelope has one.
pub(crate) fn candidate_text(envelope: GeminiResponse) -> Option<String> {
    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
}
