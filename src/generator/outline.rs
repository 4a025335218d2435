use async_trait::async_trait;

use super::{ContentGenerator, GenerationError};
use crate::models::Slide;

/// Offline generator producing a serviceable skeleton deck: an
/// introduction, numbered key-point slides, and a summary. Used when no
/// model provider is configured, and as padding when a model under-delivers.
pub struct OutlineGenerator;

#[async_trait]
impl ContentGenerator for OutlineGenerator {
    async fn generate(&self, topic: &str, count: usize) -> Result<Vec<Slide>, GenerationError> {
        Ok(outline_slides(topic, count))
    }
}

/// Build exactly `count` outline slides for `topic`.
pub fn outline_slides(topic: &str, count: usize) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(count);

    slides.push(Slide {
        title: format!("Introduction to {topic}"),
        bullets: vec![
            format!("Welcome to our presentation on {topic}"),
            "We'll explore key concepts and insights".to_string(),
            "Let's dive into the details".to_string(),
        ],
        notes: Some("Introduction and overview".to_string()),
        image_ref: None,
    });

    if count == 1 {
        return slides;
    }

    for i in 1..count.saturating_sub(1) {
        slides.push(Slide {
            title: format!("Key Point {i}"),
            bullets: vec![
                format!("Important aspect {i} of {topic}"),
                "Supporting information and details".to_string(),
                "Relevant examples and applications".to_string(),
            ],
            notes: Some(format!("Key point {i} discussion")),
            image_ref: None,
        });
    }

    slides.push(Slide {
        title: "Summary and Next Steps".to_string(),
        bullets: vec![
            format!("Key takeaways about {topic}"),
            "Important conclusions".to_string(),
            "Recommended next steps".to_string(),
        ],
        notes: Some("Summary and conclusion".to_string()),
        image_ref: None,
    });

    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_always_matches_requested_count() {
        for count in 1..=20 {
            assert_eq!(outline_slides("Bees", count).len(), count, "count {count}");
        }
    }

    #[test]
    fn single_slide_outline_is_the_introduction() {
        let slides = outline_slides("Bees", 1);
        assert_eq!(slides[0].title, "Introduction to Bees");
    }

    #[test]
    fn multi_slide_outline_ends_with_summary() {
        let slides = outline_slides("Bees", 5);
        assert_eq!(slides[0].title, "Introduction to Bees");
        assert_eq!(slides[1].title, "Key Point 1");
        assert_eq!(slides[3].title, "Key Point 3");
        assert_eq!(slides[4].title, "Summary and Next Steps");
    }
}
