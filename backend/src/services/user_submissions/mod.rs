//! # Submission Service
//!
//! Routes for the `user_submissions` table, mounted under
//! `/api/user_submissions`. Listing and export take the same optional
//! `from`/`to` query (`YYYY-MM-DD`); the range only applies when both are
//! present, and then covers `from 00:00:00` through `to 23:59:59` UTC.

mod bulk_delete;
mod delete;
mod export;
mod intake;
mod list;
mod status;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/user_submissions";

/// Configures and returns the Actix `Scope` for submission routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, newest first, optionally date-filtered.
/// *   **`POST /`**: `intake::process`, stores a new pending submission and
///     answers `201`.
/// *   **`GET /export`**: `export::process`, the filtered rows as a
///     `user_submissions.csv` attachment. `status_column=yes_no` swaps the
///     Status column for a Contacted Yes/No column.
/// *   **`POST /bulk_delete`**: `bulk_delete::process`, body `{"ids": [...]}`,
///     deletes all of them in one statement and answers `{"deleted": n}`.
/// *   **`PATCH /{id}/status`**: `status::process`, body `{"status": ...}`.
/// *   **`DELETE /{id}`**: `delete::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(intake::process))
        .route("/export", get().to(export::process))
        .route("/bulk_delete", post().to(bulk_delete::process))
        .route("/{id}/status", patch().to(status::process))
        .route("/{id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use chrono::{TimeZone, Utc};
    use common::model::submission::{Submission, SubmissionStatus};
    use common::requests::{BulkDeleteResponse, NewSubmission};
    use serde_json::json;

    async fn seeded() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        for (name, day, hour) in [("Alex", 5, 10), ("Bea", 6, 23), ("Cid", 9, 12)] {
            let lead = NewSubmission {
                name: name.to_string(),
                mobile_number: "9998887776".to_string(),
                selected_website: "SiteA".to_string(),
            };
            let ts = Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap();
            store.insert_submission_at(&lead, ts).await.unwrap();
        }
        store
    }

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($store))
                    .service(configure_routes()),
            )
            .await
        };
    }

    fn names(rows: &[Submission]) -> Vec<&str> {
        rows.iter().map(|s| s.name.as_str()).collect()
    }

    #[actix_web::test]
    async fn list_filters_by_inclusive_range() {
        let app = app!(seeded().await);
        let req = test::TestRequest::get()
            .uri("/api/user_submissions?from=2024-01-05&to=2024-01-06")
            .to_request();
        let rows: Vec<Submission> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&rows), vec!["Bea", "Alex"]);

        let req = test::TestRequest::get()
            .uri("/api/user_submissions?from=2024-01-05")
            .to_request();
        let rows: Vec<Submission> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.len(), 3);
    }

    #[actix_web::test]
    async fn intake_stores_pending_row() {
        let app = app!(SqliteStore::open_in_memory().unwrap());
        let req = test::TestRequest::post()
            .uri(API_PATH)
            .set_json(json!({
                "name": "Dee",
                "mobile_number": "+91 99988 87776",
                "selected_website": "SiteB"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let row: Submission = test::read_body_json(resp).await;
        assert_eq!(row.status, SubmissionStatus::Pending);

        let req = test::TestRequest::post()
            .uri(API_PATH)
            .set_json(json!({ "name": "", "mobile_number": "1", "selected_website": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn bulk_delete_counts_and_rejects_empty() {
        let app = app!(seeded().await);
        let req = test::TestRequest::get().uri(API_PATH).to_request();
        let rows: Vec<Submission> = test::call_and_read_body_json(&app, req).await;
        let ids: Vec<&str> = rows.iter().take(2).map(|s| s.id.as_str()).collect();

        let req = test::TestRequest::post()
            .uri("/api/user_submissions/bulk_delete")
            .set_json(json!({ "ids": ids }))
            .to_request();
        let resp: BulkDeleteResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.deleted, 2);

        let req = test::TestRequest::post()
            .uri("/api/user_submissions/bulk_delete")
            .set_json(json!({ "ids": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri(API_PATH).to_request();
        let rows: Vec<Submission> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names(&rows), vec!["Alex"]);
    }

    #[actix_web::test]
    async fn status_patch_and_delete_report_missing_rows() {
        let app = app!(seeded().await);
        let req = test::TestRequest::get().uri(API_PATH).to_request();
        let rows: Vec<Submission> = test::call_and_read_body_json(&app, req).await;
        let item = format!("{}/{}", API_PATH, rows[0].id);

        let req = test::TestRequest::patch()
            .uri(&format!("{}/status", item))
            .set_json(json!({ "status": "contacted" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::delete().uri(&item).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::patch()
            .uri(&format!("{}/status", item))
            .set_json(json!({ "status": "pending" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn export_is_a_csv_attachment() {
        let app = app!(seeded().await);
        let req = test::TestRequest::get()
            .uri("/api/user_submissions/export?from=2024-01-05&to=2024-01-05")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(disposition.contains("user_submissions.csv"));

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "Name,Mobile,Website,Status,Submitted At\n\
             Alex,9998887776,SiteA,pending,2024-01-05 10:00\n"
        );

        let req = test::TestRequest::get()
            .uri("/api/user_submissions/export?status_column=yes_no")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("Name,Mobile,Website,Contacted,Submitted At\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
