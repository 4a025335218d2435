/// End-to-end export pipeline tests: image resolution feeding the PPTX
/// and PDF renderers, with stub fetchers standing in for the network.

use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;

use deckgen::export::images::collect;
use deckgen::export::{render, ExportFormat, ImageFetcher, Theme};
use deckgen::models::{Presentation, Slide};
use deckgen::validate::export_file_stem;

mod common;
use common::{tiny_png, NullFetcher, StaticFetcher};

fn deck_with_image() -> Presentation {
    Presentation::new(
        "Urban Gardening",
        vec![
            Slide {
                title: "Urban Gardening".to_string(),
                bullets: vec![],
                notes: None,
                image_ref: None,
            },
            Slide {
                title: "Balcony Basics".to_string(),
                bullets: vec!["Light".to_string(), "Water".to_string()],
                notes: Some("mention drainage".to_string()),
                image_ref: Some("https://example.com/balcony.png".to_string()),
            },
            Slide {
                title: "Composting".to_string(),
                bullets: vec!["Greens".to_string(), "Browns".to_string()],
                notes: None,
                image_ref: None,
            },
        ],
    )
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("open archive");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Image resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explicit_refs_resolve_and_embed() {
    let deck = deck_with_image();
    let images = collect(&deck, &StaticFetcher(tiny_png())).await;

    assert_eq!(images.len(), 3);
    assert!(images[0].is_none(), "lead slide never gets a searched image");
    assert!(images[1].is_some(), "explicit ref resolves");

    let bytes = render(&deck, ExportFormat::Pptx, Theme::Midnight, &images)
        .expect("render pptx");
    let names = part_names(&bytes);
    assert!(names.contains(&"ppt/media/image2.png".to_string()));
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[tokio::test]
async fn unavailable_images_degrade_to_plain_slides() {
    let deck = deck_with_image();
    let images = collect(&deck, &NullFetcher).await;

    assert!(images.iter().all(Option::is_none));

    let bytes = render(&deck, ExportFormat::Pptx, Theme::Midnight, &images)
        .expect("render pptx");
    let names = part_names(&bytes);
    assert!(!names.iter().any(|n| n.starts_with("ppt/media/")));
}

#[tokio::test]
async fn non_image_bytes_are_dropped_before_render() {
    let deck = deck_with_image();
    let fetcher = StaticFetcher(Bytes::from_static(b"<html>not an image</html>"));
    let images = collect(&deck, &fetcher).await;

    assert!(images.iter().all(Option::is_none));
}

#[tokio::test]
async fn search_fills_content_slides_but_not_the_lead() {
    // Fetcher that cannot resolve refs but always finds a search hit.
    struct SearchOnly;

    #[async_trait]
    impl ImageFetcher for SearchOnly {
        async fn fetch(&self, _image_ref: &str) -> Option<Bytes> {
            None
        }

        async fn search(&self, _query: &str) -> Option<Bytes> {
            Some(tiny_png())
        }
    }

    let deck = deck_with_image();
    let images = collect(&deck, &SearchOnly).await;

    assert!(images[0].is_none());
    assert!(images[1].is_none(), "failed explicit ref does not fall back");
    assert!(images[2].is_some(), "bare content slide gets a searched image");
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn both_formats_render_deterministically() {
    let deck = deck_with_image();
    let images = collect(&deck, &NullFetcher).await;

    let pptx_a = render(&deck, ExportFormat::Pptx, Theme::Daylight, &images).expect("pptx");
    let pptx_b = render(&deck, ExportFormat::Pptx, Theme::Daylight, &images).expect("pptx");
    assert_eq!(pptx_a, pptx_b);

    let pdf_a = render(&deck, ExportFormat::Pdf, Theme::Daylight, &images).expect("pdf");
    let pdf_b = render(&deck, ExportFormat::Pdf, Theme::Daylight, &images).expect("pdf");
    assert_eq!(pdf_a, pdf_b);
    assert!(pdf_a.starts_with(b"%PDF-1.4"));
}

#[tokio::test]
async fn pdf_has_cover_plus_one_page_per_slide() {
    let deck = deck_with_image();
    let bytes = render(&deck, ExportFormat::Pdf, Theme::Midnight, &[]).expect("pdf");

    let needle = b"/Type /Page /";
    let pages = bytes
        .windows(needle.len())
        .filter(|window| window == needle)
        .count();
    assert_eq!(pages, deck.slides.len() + 1);
}

#[test]
fn export_filenames_come_from_the_topic() {
    assert_eq!(export_file_stem("Urban Gardening"), "Urban_Gardening");
    assert_eq!(export_file_stem("a/b\\c"), "abc");
    assert_eq!(export_file_stem("???"), "presentation");
}
