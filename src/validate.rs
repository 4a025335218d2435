use crate::errors::AppError;

pub const MAX_TOPIC_LEN: usize = 200;
pub const MIN_SLIDES: usize = 1;
pub const MAX_SLIDES: usize = 20;

/// Validate a presentation topic: trimmed, non-empty, max 200 chars.
/// Returns the trimmed topic that should be stored.
pub fn validate_topic(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("topic is required".into()));
    }
    if trimmed.chars().count() > MAX_TOPIC_LEN {
        return Err(AppError::Validation(format!(
            "topic must be at most {MAX_TOPIC_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a requested slide count. Out-of-range counts are rejected,
/// never clamped.
pub fn validate_slide_count(count: usize) -> Result<usize, AppError> {
    if !(MIN_SLIDES..=MAX_SLIDES).contains(&count) {
        return Err(AppError::Validation(format!(
            "slides must be between {MIN_SLIDES} and {MAX_SLIDES}"
        )));
    }
    Ok(count)
}

/// A presentation id as this service mints them: lowercase hex, no
/// separators. Anything else can never match a stored presentation, and
/// must not reach the filesystem layer as a path component.
pub fn plausible_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check a client-supplied artifact filename before it is joined onto a
/// storage path. Rejects empty names, separators, and dot-relative names.
pub fn safe_artifact_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// Derive a download filename stem from a topic: keep alphanumerics,
/// dashes and underscores, map spaces to underscores, drop the rest.
pub fn export_file_stem(topic: &str) -> String {
    let stem: String = topic
        .trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if stem.is_empty() {
        "presentation".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_trimmed_and_bounded() {
        assert_eq!(validate_topic("  Rust in prod  ").unwrap(), "Rust in prod");
        assert!(validate_topic("   ").is_err());
        assert!(validate_topic(&"x".repeat(201)).is_err());
        assert!(validate_topic(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn slide_count_bounds_are_inclusive() {
        assert!(validate_slide_count(0).is_err());
        assert_eq!(validate_slide_count(1).unwrap(), 1);
        assert_eq!(validate_slide_count(20).unwrap(), 20);
        assert!(validate_slide_count(21).is_err());
    }

    #[test]
    fn traversal_names_are_rejected() {
        assert!(safe_artifact_name("state.json"));
        assert!(safe_artifact_name("My_Deck.pptx"));
        assert!(!safe_artifact_name("../secrets"));
        assert!(!safe_artifact_name("a/b.pptx"));
        assert!(!safe_artifact_name("a\\b.pptx"));
        assert!(!safe_artifact_name(""));
        assert!(!safe_artifact_name(".."));
    }

    #[test]
    fn export_stem_keeps_word_characters() {
        assert_eq!(export_file_stem("Rust in Production!"), "Rust_in_Production");
        assert_eq!(export_file_stem("données 2024"), "donnes_2024");
        assert_eq!(export_file_stem("///"), "presentation");
    }

    #[test]
    fn minted_ids_look_plausible() {
        assert!(plausible_id(&crate::models::new_id()));
        assert!(!plausible_id("../../etc"));
        assert!(!plausible_id(""));
    }
}
