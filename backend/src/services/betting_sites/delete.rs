use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::store::RecordStore;

pub async fn process(store: web::Data<SqliteStore>, id: web::Path<String>) -> impl Responder {
    match store.delete_site(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_failure("Error deleting site", e),
    }
}
