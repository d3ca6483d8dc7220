//! HTTP API over the two record tables.
//!
//! - `betting_sites`: the partner site catalog under `/api/betting_sites`.
//! - `user_submissions`: inbound leads under `/api/user_submissions`,
//!   including bulk delete and CSV export.
//!
//! Handlers answer `404` when the addressed row does not exist, `400` for a
//! payload that fails validation and `503` for any other store failure.

pub mod betting_sites;
pub mod user_submissions;

use actix_web::HttpResponse;
use common::requests::FormError;
use common::store::StoreError;
use log::{error, warn};

pub(crate) fn store_failure(context: &str, e: StoreError) -> HttpResponse {
    if e.is_not_found() {
        warn!("{}: {}", context, e);
        return HttpResponse::NotFound().body(format!("{}: {}", context, e));
    }
    error!("{}: {}", context, e);
    HttpResponse::ServiceUnavailable().body(format!("{}: {}", context, e))
}

pub(crate) fn invalid_form(e: FormError) -> HttpResponse {
    HttpResponse::BadRequest().body(e.to_string())
}
