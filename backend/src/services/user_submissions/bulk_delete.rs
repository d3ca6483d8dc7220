use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{BulkDeleteRequest, BulkDeleteResponse};
use common::store::RecordStore;
use log::info;

/// `POST /api/user_submissions/bulk_delete`
///
/// One statement for the whole id set. Ids that no longer exist are simply
/// not counted.
pub async fn process(
    store: web::Data<SqliteStore>,
    body: web::Json<BulkDeleteRequest>,
) -> impl Responder {
    if body.ids.is_empty() {
        return HttpResponse::BadRequest().body("ids must not be empty");
    }
    match store.delete_submissions(&body.ids).await {
        Ok(deleted) => {
            info!("bulk deleted {} of {} submissions", deleted, body.ids.len());
            HttpResponse::Ok().json(BulkDeleteResponse { deleted })
        }
        Err(e) => store_failure("Error deleting submissions", e),
    }
}
