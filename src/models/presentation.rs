use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A generated presentation: the unit everything in the service operates on.
///
/// `slides` is always contiguous and zero-indexed; a slide's index is its
/// position in the vec, never stored on the slide itself. `updated_at` is
/// bumped by the store on every successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    pub id: String,
    pub topic: String,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One slide: a title, ordered bullet lines, optional speaker notes and an
/// optional image reference (URL or storage key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// Replacement content for a single slide, as submitted by `PUT /update_slide`.
/// `notes` and `image_ref` are only replaced when present in the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Presentation {
    pub fn new(topic: impl Into<String>, slides: Vec<Slide>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            topic: topic.into(),
            slides,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Allocate a presentation id: 16 random bytes as lowercase hex.
pub fn new_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    hex::encode(bytes)
}
