use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ContentGenerator, GenerationError, normalize_slide_count};
use crate::models::Slide;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SYSTEM_PROMPT: &str = "You are an expert presentation creator. Generate clear, \
     engaging, and professional presentation content.";

/// Chat-completions client for the OpenRouter gateway. One request per
/// deck, no retries; failures surface as `GenerationError` and the caller
/// decides what to tell the client.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// One slide as the model is asked to emit it: `content` carries the
/// bullet lines, `description` becomes the speaker notes.
#[derive(Debug, Deserialize)]
struct SlideDraft {
    title: String,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, api_key, model })
    }

    fn prompt(topic: &str, count: usize) -> String {
        format!(
            "Create a professional presentation about \"{topic}\" with {count} slides.\n\
             \n\
             For each slide, provide:\n\
             1. A clear, engaging title\n\
             2. Key points or bullet points (3-5 points per slide)\n\
             3. A brief description of what should be included\n\
             \n\
             Format the response as a JSON array with each slide containing:\n\
             - title: The slide title\n\
             - content: Main content points as an array of strings\n\
             - description: Brief description of the slide's purpose\n\
             \n\
             Make the content informative, engaging, and well-structured.\n\
             Focus on the most important aspects of {topic}."
        )
    }
}

#[async_trait]
impl ContentGenerator for OpenRouterClient {
    async fn generate(&self, topic: &str, count: usize) -> Result<Vec<Slide>, GenerationError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::prompt(topic, count)},
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
        });

        log::info!("requesting {count} slides from {}", self.model);
        let resp = self
            .http
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "https://coxist-ai.com")
            .header("X-Title", "AI Presentation Generator")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            log::error!("openrouter returned {status}: {detail}");
            return Err(GenerationError::BadStatus(status.as_u16()));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(format!("response body: {e}")))?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| GenerationError::Malformed("no choices in response".into()))?;

        let drafts = parse_slide_drafts(content)?;
        let slides = drafts
            .into_iter()
            .map(|d| Slide {
                title: d.title,
                bullets: d.content,
                notes: d.description,
                image_ref: None,
            })
            .collect();
        Ok(normalize_slide_count(topic, count, slides))
    }

    fn is_remote(&self) -> bool {
        true
    }
}

/// Parse the model's message content as a JSON slide array. Models often
/// wrap JSON in a markdown fence; that wrapper is stripped before parsing,
/// anything else malformed is an error.
fn parse_slide_drafts(content: &str) -> Result<Vec<SlideDraft>, GenerationError> {
    let trimmed = strip_code_fence(content.trim());
    serde_json::from_str(trimmed)
        .map_err(|e| GenerationError::Malformed(format!("slide array: {e}")))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") up to the first newline.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").map(str::trim_end).unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r#"[
        {"title": "One", "content": ["a", "b"], "description": "first"},
        {"title": "Two", "content": ["c"]}
    ]"#;

    #[test]
    fn plain_json_array_parses() {
        let drafts = parse_slide_drafts(DECK).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "One");
        assert_eq!(drafts[0].description.as_deref(), Some("first"));
        assert!(drafts[1].description.is_none());
    }

    #[test]
    fn fenced_json_array_parses() {
        let fenced = format!("```json\n{DECK}\n```");
        let drafts = parse_slide_drafts(&fenced).unwrap();
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn prose_is_rejected() {
        let err = parse_slide_drafts("Here are your slides!").unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
