use crate::models::{ChannelSummary, Guidance};
use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Hard cap on the recommendation length, enforced after generation.
pub const GUIDANCE_MAX_CHARS: usize = 100;

const MAX_OUTPUT_TOKENS: u32 = 50;
const TEMPERATURE: f32 = 0.5;

/// The channel fields embedded verbatim into the prompt. Counts stay
/// decimal-string encoded, exactly as the platform returned them.
#[derive(Debug, Clone)]
pub struct ChannelFacts {
    pub title: String,
    pub description: String,
    pub subscriber_count: String,
    pub video_count: String,
    pub view_count: String,
}

impl ChannelFacts {
    pub fn from_channel(channel: &ChannelSummary) -> Self {
        let stats = channel.statistics.as_ref();
        ChannelFacts {
            title: channel.snippet.title.clone(),
            description: channel.snippet.description.clone(),
            subscriber_count: stats
                .map(|s| s.subscriber_count.clone())
                .unwrap_or_else(|| "0".to_string()),
            video_count: stats
                .map(|s| s.video_count.clone())
                .unwrap_or_else(|| "0".to_string()),
            view_count: stats
                .map(|s| s.view_count.clone())
                .unwrap_or_else(|| "0".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default = "Vec::new")]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default = "Vec::new")]
    parts: Vec<Part>,
}

/// Client for the hosted completion model. `generate` is infallible by
/// contract: every failure mode collapses into `Guidance::Fallback`, so no
/// caller ever has to handle this component erroring.
#[derive(Clone)]
pub struct GuidanceGenerator {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GuidanceGenerator {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        GuidanceGenerator {
            http: Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn build_prompt(facts: &ChannelFacts) -> String {
        format!(
            "Based on the following YouTube channel data, provide a single, concise, actionable \
             recommendation for content improvement, SEO, or user engagement. The recommendation \
             must be a maximum of 100 characters and must strictly comply with YouTube's community \
             guidelines and platform policies. The tone should be encouraging and helpful.\n\n\
             Channel Data:\n\
             - Title: {}\n\
             - Description: {}\n\
             - Subscribers: {}\n\
             - Videos: {}\n\
             - Views: {}\n\n\
             Recommendation (max 100 characters):",
            facts.title,
            facts.description,
            facts.subscriber_count,
            facts.video_count,
            facts.view_count,
        )
    }

    pub async fn generate(&self, facts: &ChannelFacts) -> Guidance {
        match self.request_completion(facts).await {
            Ok(text) => Guidance::Model {
                text: clamp_recommendation(&text),
            },
            Err(reason) => {
                warn!("Guidance generation failed: {reason}");
                Guidance::Fallback { reason }
            }
        }
    }

    async fn request_completion(&self, facts: &ChannelFacts) -> Result<String, String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| "guidance API key is not configured".to_string())?;
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let request = CompletionRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(facts),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("completion request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("completion model answered {status}: {body}"));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse completion response: {e}"))?;

        completion
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| "completion model returned no candidates".to_string())
    }
}

fn clamp_recommendation(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(GUIDANCE_MAX_CHARS) {
        Some((idx, _)) => trimmed[..idx].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}
