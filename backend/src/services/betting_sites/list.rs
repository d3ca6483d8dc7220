use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::store::RecordStore;

/// `GET /api/betting_sites`: every partner site, newest first.
pub async fn process(store: web::Data<SqliteStore>) -> impl Responder {
    match store.list_sites().await {
        Ok(sites) => HttpResponse::Ok().json(sites),
        Err(e) => store_failure("Error fetching sites", e),
    }
}
