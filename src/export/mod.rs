pub mod images;
pub mod pdf;
pub mod pptx;

pub use images::{EmbeddedImage, HttpImageFetcher, ImageFetcher, ImageKind};

use crate::models::Presentation;

#[derive(Debug)]
pub enum ExportError {
    Archive(String),
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Archive(msg) => write!(f, "archive assembly failed: {msg}"),
            ExportError::Io(e) => write!(f, "export I/O failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::Archive(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pptx,
    Pdf,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pptx" => Some(ExportFormat::Pptx),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pptx => "pptx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Visual theme applied to exports. `Midnight` is the dark default,
/// `Daylight` the light counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Midnight,
    Daylight,
}

/// Theme palette as RRGGBB hex, shared by both renderers.
pub struct Palette {
    pub background: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "midnight" => Some(Theme::Midnight),
            "daylight" => Some(Theme::Daylight),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Midnight => Palette {
                background: "1F2937",
                title: "F9FAFB",
                body: "D1D5DB",
                accent: "60A5FA",
            },
            Theme::Daylight => Palette {
                background: "FFFFFF",
                title: "1F2937",
                body: "444444",
                accent: "2563EB",
            },
        }
    }
}

/// Render a presentation snapshot to document bytes.
///
/// `images` runs parallel to `presentation.slides`; entries are the fetched
/// bytes for each slide's image, `None` where there is no image or the
/// fetch came back empty. Identical inputs produce identical bytes: both
/// renderers write fixed timestamps and nothing derived from the clock.
pub fn render(
    presentation: &Presentation,
    format: ExportFormat,
    theme: Theme,
    images: &[Option<EmbeddedImage>],
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Pptx => pptx::render(presentation, theme, images),
        ExportFormat::Pdf => pdf::render(presentation, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_theme_tags_parse() {
        assert_eq!(ExportFormat::parse("pptx"), Some(ExportFormat::Pptx));
        assert_eq!(ExportFormat::parse("pdf"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::parse("docx"), None);
        assert_eq!(Theme::parse("midnight"), Some(Theme::Midnight));
        assert_eq!(Theme::parse("daylight"), Some(Theme::Daylight));
        assert_eq!(Theme::parse("neon"), None);
    }
}
