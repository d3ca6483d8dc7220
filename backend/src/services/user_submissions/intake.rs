//! Intake endpoint for the public signup form.
//!
//! The server stamps the id, the submission time and the initial `pending`
//! status; the client only sends name, mobile number and site.

use crate::services::{invalid_form, store_failure};
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::NewSubmission;
use common::store::RecordStore;
use log::info;

pub async fn process(
    store: web::Data<SqliteStore>,
    body: web::Json<NewSubmission>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return invalid_form(e);
    }
    match store.insert_submission(&body).await {
        Ok(row) => {
            info!("new submission {} for {}", row.id, row.selected_website);
            HttpResponse::Created().json(row)
        }
        Err(e) => store_failure("Error saving submission", e),
    }
}
