//! # Partner Site Service
//!
//! Routes for the `betting_sites` table, mounted under `/api/betting_sites`.
//!
//! ## Sub-modules:
//! - `list`: every site, newest first.
//! - `save`: create and full update from a `SiteForm`.
//! - `active`: flips the `is_active` flag alone.
//! - `delete`: removes one site.

mod active;
mod delete;
mod list;
mod save;

use actix_web::web::{delete, get, patch, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/betting_sites";

/// Configures and returns the Actix `Scope` for partner site routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, returns `[PartnerSite]`.
/// *   **`POST /`**: `save::create`, validates the form and answers `201`
///     with the stored site. A blank required field is a `400`.
/// *   **`PUT /{id}`**: `save::update`, same validation, answers `200`.
/// *   **`PATCH /{id}/active`**: `active::process`, body `{"is_active": bool}`,
///     answers `204`.
/// *   **`DELETE /{id}`**: `delete::process`, answers `204`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/{id}", put().to(save::update))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/active", patch().to(active::process))
}
