use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::storage::content_type_for;
use crate::store::PresentationStore;
use crate::validate::{plausible_id, safe_artifact_name};

/// GET /get_file/{presentation_id}/{filename} - Serve a stored artifact.
///
/// Traversal-shaped names can never match a stored key, so they get the
/// same 404 as a missing file rather than echoing the path back.
pub async fn get_file(
    store: web::Data<PresentationStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (presentation_id, filename) = path.into_inner();
    if !plausible_id(&presentation_id) || !safe_artifact_name(&filename) {
        return Err(AppError::NotFound("file"));
    }

    let key = format!("{presentation_id}/{filename}");
    let data = store.storage().get(&key).await?;
    Ok(HttpResponse::Ok()
        .content_type(content_type_for(&filename))
        .body(data))
}
