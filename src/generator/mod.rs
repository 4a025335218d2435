pub mod openrouter;
pub mod outline;

pub use openrouter::OpenRouterClient;
pub use outline::OutlineGenerator;

use async_trait::async_trait;

use crate::models::Slide;

#[derive(Debug)]
pub enum GenerationError {
    Request(String),
    BadStatus(u16),
    Malformed(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Request(msg) => write!(f, "content request failed: {msg}"),
            GenerationError::BadStatus(code) => {
                write!(f, "content provider returned status {code}")
            }
            GenerationError::Malformed(msg) => {
                write!(f, "content provider returned malformed output: {msg}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Request(err.to_string())
    }
}

/// Produces the initial slide deck for a topic. Selected once at startup:
/// the OpenRouter client when an API key is configured, the offline outline
/// generator otherwise.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate exactly `count` slides for `topic`.
    async fn generate(&self, topic: &str, count: usize) -> Result<Vec<Slide>, GenerationError>;

    /// Whether this generator calls an external model provider.
    fn is_remote(&self) -> bool {
        false
    }
}

/// Force a generated deck to the requested length. Models drift on slide
/// counts; extras are dropped and missing slides are filled from the
/// outline deck for the same topic, so callers always see `count` slides.
pub fn normalize_slide_count(topic: &str, count: usize, mut slides: Vec<Slide>) -> Vec<Slide> {
    if slides.len() == count {
        return slides;
    }
    if slides.len() > count {
        log::warn!(
            "model produced {} slides for a {count}-slide request, truncating",
            slides.len()
        );
        slides.truncate(count);
        return slides;
    }
    log::warn!(
        "model produced {} slides for a {count}-slide request, padding",
        slides.len()
    );
    let pad = outline::outline_slides(topic, count);
    for slide in pad.into_iter().skip(slides.len()) {
        slides.push(slide);
    }
    slides
}
