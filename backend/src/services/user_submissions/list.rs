use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SubmissionQuery;
use common::store::RecordStore;

/// `GET /api/user_submissions?from=&to=`
pub async fn process(
    store: web::Data<SqliteStore>,
    query: web::Query<SubmissionQuery>,
) -> impl Responder {
    match store.list_submissions(&query.range()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => store_failure("Error fetching submissions", e),
    }
}
