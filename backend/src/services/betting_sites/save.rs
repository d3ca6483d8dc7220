//! Create and update for partner sites.
//!
//! Both handlers validate the `SiteForm` first, so a blank name, display
//! name or url never reaches the database. An empty `logo_url` is stored
//! as NULL and a missing `button_color` defaults to green.

use crate::services::{invalid_form, store_failure};
use crate::store::SqliteStore;
use actix_web::{web, HttpResponse, Responder};
use common::requests::SiteForm;
use common::store::RecordStore;

/// `POST /api/betting_sites`
pub async fn create(store: web::Data<SqliteStore>, form: web::Json<SiteForm>) -> impl Responder {
    if let Err(e) = form.validate() {
        return invalid_form(e);
    }
    match store.insert_site(&form).await {
        Ok(site) => HttpResponse::Created().json(site),
        Err(e) => store_failure("Error saving site", e),
    }
}

/// `PUT /api/betting_sites/{id}`
pub async fn update(
    store: web::Data<SqliteStore>,
    id: web::Path<String>,
    form: web::Json<SiteForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return invalid_form(e);
    }
    match store.update_site(&id, &form).await {
        Ok(site) => HttpResponse::Ok().json(site),
        Err(e) => store_failure("Error saving site", e),
    }
}
