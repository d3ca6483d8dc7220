use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SetActiveRequest;
use common::store::RecordStore;
use log::info;

/// `PATCH /api/betting_sites/{id}/active`
///
/// Writes only the flag; every other column is left as it is.
pub async fn process(
    store: web::Data<SqliteStore>,
    id: web::Path<String>,
    body: web::Json<SetActiveRequest>,
) -> impl Responder {
    match store.set_site_active(&id, body.is_active).await {
        Ok(()) => {
            info!("site {} is_active={}", id, body.is_active);
            HttpResponse::NoContent().finish()
        }
        Err(e) => store_failure("Error updating site", e),
    }
}
