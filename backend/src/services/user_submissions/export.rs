//! CSV download of the submission table.
//!
//! Uses the same date range as the listing and the same serializer as the
//! dashboard's client-side export, so both produce identical files for the
//! same rows.

use crate::services::store_failure;
use crate::store::SqliteStore;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use common::export::{to_csv, EXPORT_FILE_NAME};
use common::requests::SubmissionQuery;
use common::store::RecordStore;
use log::error;

/// `GET /api/user_submissions/export?from=&to=&status_column=`
pub async fn process(
    store: web::Data<SqliteStore>,
    query: web::Query<SubmissionQuery>,
) -> impl Responder {
    let rows = match store.list_submissions(&query.range()).await {
        Ok(rows) => rows,
        Err(e) => return store_failure("Error exporting submissions", e),
    };
    match to_csv(&rows, query.status_column.unwrap_or_default()) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
            })
            .body(csv),
        Err(e) => {
            error!("csv export failed: {}", e);
            HttpResponse::InternalServerError().body(format!("Error exporting submissions: {}", e))
        }
    }
}
