//! Shared test infrastructure for store and export tests.
//!
//! Provides deterministic generator and image-fetcher stubs plus a
//! `setup_store()` helper that builds a local-only storage stack over a
//! temporary directory.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::TempDir;

use deckgen::export::ImageFetcher;
use deckgen::generator::{ContentGenerator, GenerationError};
use deckgen::models::Slide;
use deckgen::storage::{LocalBackend, Storage};
use deckgen::store::PresentationStore;

pub const TEST_TOPIC: &str = "Beekeeping for Beginners";

// ============================================================================
// GENERATOR STUBS
// ============================================================================

/// Deterministic generator for tests whose assertions depend on exact
/// slide content. Slide `i` is titled `"{topic} part {i+1}"`; only the
/// first slide carries notes.
pub struct StubGenerator;

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, topic: &str, count: usize) -> Result<Vec<Slide>, GenerationError> {
        let slides = (0..count)
            .map(|i| Slide {
                title: format!("{topic} part {}", i + 1),
                bullets: vec![format!("point {}", i + 1), "supporting detail".to_string()],
                notes: (i == 0).then(|| "opening remarks".to_string()),
                image_ref: None,
            })
            .collect();
        Ok(slides)
    }
}

/// Generator that always fails, for upstream error paths.
pub struct FailingGenerator;

#[async_trait]
impl ContentGenerator for FailingGenerator {
    async fn generate(&self, _topic: &str, _count: usize) -> Result<Vec<Slide>, GenerationError> {
        Err(GenerationError::BadStatus(503))
    }
}

// ============================================================================
// IMAGE FETCHER STUBS
// ============================================================================

/// Fetcher that answers every explicit ref with the same bytes and never
/// searches.
pub struct StaticFetcher(pub Bytes);

#[async_trait]
impl ImageFetcher for StaticFetcher {
    async fn fetch(&self, _image_ref: &str) -> Option<Bytes> {
        Some(self.0.clone())
    }
}

/// Fetcher with nothing to offer. Exports must degrade, never fail.
pub struct NullFetcher;

#[async_trait]
impl ImageFetcher for NullFetcher {
    async fn fetch(&self, _image_ref: &str) -> Option<Bytes> {
        None
    }
}

/// A complete 1x1 transparent PNG, small enough to embed inline.
pub fn tiny_png() -> Bytes {
    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR length + tag
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, 0x89, // depth, type, CRC
        0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT length + tag
        0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, // zlib data
        0x0D, 0x0A, 0x2D, 0xB4, // CRC
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
    ];
    Bytes::from_static(PNG)
}

// ============================================================================
// STORAGE SETUP
// ============================================================================

/// Build a store over a fresh local-only storage root.
///
/// Returns (TempDir, Storage, PresentationStore). The TempDir must be
/// kept alive for the duration of the test or the root disappears.
pub fn setup_store() -> (TempDir, Arc<Storage>, PresentationStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let local = LocalBackend::new(dir.path()).expect("Failed to create local backend");
    let storage = Arc::new(Storage::local_only(local));
    let store = PresentationStore::new(storage.clone());
    (dir, storage, store)
}
