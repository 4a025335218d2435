use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{SlideContent, SlideOperation};
use crate::store::PresentationStore;

#[derive(Deserialize)]
pub struct UpdateSlideRequest {
    presentation_id: String,
    slide_index: usize,
    content: SlideContent,
}

/// PUT /update_slide - Replace the content of one slide.
pub async fn update_slide(
    store: web::Data<PresentationStore>,
    body: web::Json<UpdateSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let updated = store
        .mutate(
            &req.presentation_id,
            SlideOperation::UpdateContent {
                index: req.slide_index,
                content: req.content,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[derive(Deserialize)]
pub struct SlideOperationRequest {
    operation: String,
    presentation_id: String,
    slide_index: usize,
    #[serde(default)]
    to_index: Option<usize>,
}

/// POST /slide_operations - Structural slide edits: copy, delete, reorder.
pub async fn slide_operations(
    store: web::Data<PresentationStore>,
    body: web::Json<SlideOperationRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let operation = match req.operation.as_str() {
        "copy" => SlideOperation::Copy {
            index: req.slide_index,
        },
        "delete" => SlideOperation::Delete {
            index: req.slide_index,
        },
        "reorder" => SlideOperation::Reorder {
            from: req.slide_index,
            to: req.to_index.ok_or_else(|| {
                AppError::Validation("to_index is required for reorder".into())
            })?,
        },
        other => {
            return Err(AppError::Validation(format!("unknown operation '{other}'")));
        }
    };

    let updated = store.mutate(&req.presentation_id, operation).await?;
    Ok(HttpResponse::Ok().json(updated))
}
