use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::StatusUpdateRequest;
use common::store::RecordStore;

/// `PATCH /api/user_submissions/{id}/status`
///
/// Any status may be written here. The forward-only rule of the inbox and
/// the table's contacted/pending toggle are both enforced client side.
pub async fn process(
    store: web::Data<SqliteStore>,
    id: web::Path<String>,
    body: web::Json<StatusUpdateRequest>,
) -> impl Responder {
    match store.update_submission_status(&id, body.status).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_failure("Error updating status", e),
    }
}
