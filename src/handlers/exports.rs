use actix_web::{HttpResponse, web};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::{self, ExportFormat, ImageFetcher, Theme};
use crate::store::PresentationStore;
use crate::validate::export_file_stem;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    presentation_id: String,
    #[serde(default = "default_format")]
    format: String,
    #[serde(default)]
    theme: Option<String>,
}

fn default_format() -> String {
    "pptx".to_string()
}

/// POST /export_ppt - Render the presentation as PPTX or PDF and return
/// the document as an attachment.
pub async fn export(
    store: web::Data<PresentationStore>,
    fetcher: web::Data<dyn ImageFetcher>,
    body: web::Json<ExportRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let format = ExportFormat::parse(&req.format)
        .ok_or_else(|| AppError::Validation("unsupported export format".into()))?;
    let theme = match req.theme.as_deref() {
        Some(tag) => {
            Theme::parse(tag).ok_or_else(|| AppError::Validation("unknown theme".into()))?
        }
        None => Theme::default(),
    };

    let presentation = store.get(&req.presentation_id).await?;
    if presentation.slides.is_empty() {
        return Err(AppError::EmptyPresentation);
    }

    // Images only land in PPTX; the PDF is text-only, so skip the fetches.
    let images = match format {
        ExportFormat::Pptx => export::images::collect(&presentation, fetcher.get_ref()).await,
        ExportFormat::Pdf => Vec::new(),
    };

    let bytes = export::render(&presentation, format, theme, &images)?;
    let filename = format!(
        "{}.{}",
        export_file_stem(&presentation.topic),
        format.extension()
    );

    // Keep a copy with the presentation's other artifacts.
    let key = format!("{}/{}", presentation.id, filename);
    if let Err(e) = store
        .storage()
        .put(&key, Bytes::from(bytes.clone()))
        .await
    {
        log::warn!("export artifact write failed for {key}: {e}");
    }

    log::info!(
        "exported presentation {} as {} ({} bytes)",
        presentation.id,
        format.extension(),
        bytes.len()
    );
    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes))
}
