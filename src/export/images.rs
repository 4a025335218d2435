use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::models::Presentation;
use crate::storage::Storage;
use crate::validate::{plausible_id, safe_artifact_name};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Raster formats the slide renderer will embed. Anything that does not
/// sniff as one of these is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
        }
    }
}

/// Image bytes verified by magic number, ready to embed.
pub struct EmbeddedImage {
    pub kind: ImageKind,
    pub data: Bytes,
}

/// Identify image bytes by magic number. Extensions and Content-Type
/// headers lie; the leading bytes do not.
pub fn sniff(data: &[u8]) -> Option<ImageKind> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some(ImageKind::Png)
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageKind::Jpeg)
    } else {
        None
    }
}

/// Resolves slide images to bytes. Export never fails on image trouble,
/// so both calls return `None` instead of an error.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Resolve an explicit `image_ref` (URL or storage key).
    async fn fetch(&self, image_ref: &str) -> Option<Bytes>;

    /// Best-effort search for an illustrative image by free text. The
    /// default fetcher only answers when a search provider is configured.
    async fn search(&self, query: &str) -> Option<Bytes> {
        let _ = query;
        None
    }
}

/// Fetches `http(s)` refs over the network, treats everything else as a
/// storage key, and searches Pexels for slides that have no image of
/// their own when an API key is configured.
pub struct HttpImageFetcher {
    http: reqwest::Client,
    storage: Arc<Storage>,
    pexels_api_key: Option<String>,
}

#[derive(serde::Deserialize)]
struct PexelsResponse {
    photos: Vec<PexelsPhoto>,
}

#[derive(serde::Deserialize)]
struct PexelsPhoto {
    src: PexelsSrc,
}

#[derive(serde::Deserialize)]
struct PexelsSrc {
    large: String,
}

impl HttpImageFetcher {
    pub fn new(storage: Arc<Storage>, pexels_api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            storage,
            pexels_api_key,
        }
    }

    async fn fetch_url(&self, url: &str) -> Option<Bytes> {
        let resp = match self.http.get(url).timeout(FETCH_TIMEOUT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("image fetch failed for {url}: {e}");
                return None;
            }
        };
        if !resp.status().is_success() {
            log::warn!("image fetch for {url} returned {}", resp.status());
            return None;
        }
        match resp.bytes().await {
            Ok(data) if data.len() <= MAX_IMAGE_BYTES => Some(data),
            Ok(data) => {
                log::warn!("image at {url} is {} bytes, skipping", data.len());
                None
            }
            Err(e) => {
                log::warn!("image body read failed for {url}: {e}");
                None
            }
        }
    }

    async fn fetch_stored(&self, key: &str) -> Option<Bytes> {
        let (id, filename) = key.split_once('/')?;
        if !plausible_id(id) || !safe_artifact_name(filename) {
            return None;
        }
        match self.storage.get(key).await {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("stored image read failed for {key}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, image_ref: &str) -> Option<Bytes> {
        if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
            self.fetch_url(image_ref).await
        } else {
            self.fetch_stored(image_ref).await
        }
    }

    async fn search(&self, query: &str) -> Option<Bytes> {
        let api_key = self.pexels_api_key.as_deref()?;
        let resp = self
            .http
            .get("https://api.pexels.com/v1/search")
            .query(&[("query", query), ("per_page", "1")])
            .header("Authorization", api_key)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            log::warn!("image search for '{query}' returned {}", resp.status());
            return None;
        }
        let parsed: PexelsResponse = resp.json().await.ok()?;
        let url = &parsed.photos.first()?.src.large;
        self.fetch_url(url).await
    }
}

/// Resolve every slide's image ahead of rendering. The result runs
/// parallel to `presentation.slides`; bytes that do not sniff as PNG or
/// JPEG are dropped here so the renderers only ever see embeddable data.
/// Content slides with no `image_ref` fall back to a provider search by
/// slide title; the lead slide is left without one.
pub async fn collect(
    presentation: &Presentation,
    fetcher: &dyn ImageFetcher,
) -> Vec<Option<EmbeddedImage>> {
    let mut images = Vec::with_capacity(presentation.slides.len());
    for (i, slide) in presentation.slides.iter().enumerate() {
        let data = match &slide.image_ref {
            Some(image_ref) => {
                let data = fetcher.fetch(image_ref).await;
                if data.is_none() {
                    log::warn!("image for {image_ref} unavailable, rendering without it");
                }
                data
            }
            None if i > 0 => fetcher.search(&slide.title).await,
            None => None,
        };
        let image = data.and_then(|data| match sniff(&data) {
            Some(kind) => Some(EmbeddedImage { kind, data }),
            None => {
                log::warn!("image bytes for slide {i} are not PNG or JPEG, skipping");
                None
            }
        });
        images.push(image);
    }
    images
}
