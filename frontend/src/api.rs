//! [`RecordStore`] over the backend's JSON API.
//!
//! Every call is a single `fetch`. A `404` becomes `StoreError::NotFound`,
//! any other non-2xx status becomes `StoreError::Backend` carrying the
//! response body, and a network failure becomes `StoreError::Transport`.

use common::filter::DateRange;
use common::model::partner_site::PartnerSite;
use common::model::submission::{Submission, SubmissionStatus};
use common::requests::{
    BulkDeleteRequest, BulkDeleteResponse, NewSubmission, SetActiveRequest, SiteForm,
    StatusUpdateRequest, SubmissionQuery,
};
use common::store::{RecordStore, StoreError, SITES_TABLE, SUBMISSIONS_TABLE};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const SITES_PATH: &str = "/api/betting_sites";
const SUBMISSIONS_PATH: &str = "/api/user_submissions";

fn transport(e: gloo_net::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

async fn failure(resp: Response, table: &'static str, id: Option<&str>) -> StoreError {
    match (resp.status(), id) {
        (404, Some(id)) => StoreError::NotFound {
            table,
            id: id.to_string(),
        },
        (status, _) => {
            let body = resp.text().await.unwrap_or_default();
            StoreError::Backend(format!("{} {}", status, body))
        }
    }
}

async fn read_json<T: DeserializeOwned>(
    resp: Response,
    table: &'static str,
    id: Option<&str>,
) -> Result<T, StoreError> {
    if !resp.ok() {
        return Err(failure(resp, table, id).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

async fn read_empty(resp: Response, table: &'static str, id: &str) -> Result<(), StoreError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(failure(resp, table, Some(id)).await)
    }
}

/// Talks to the server the dashboard was loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpStore;

impl RecordStore for HttpStore {
    async fn list_sites(&self) -> Result<Vec<PartnerSite>, StoreError> {
        let resp = Request::get(SITES_PATH).send().await.map_err(transport)?;
        read_json(resp, SITES_TABLE, None).await
    }

    async fn insert_site(&self, form: &SiteForm) -> Result<PartnerSite, StoreError> {
        let resp = Request::post(SITES_PATH)
            .json(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp, SITES_TABLE, None).await
    }

    async fn update_site(&self, id: &str, form: &SiteForm) -> Result<PartnerSite, StoreError> {
        let resp = Request::put(&format!("{}/{}", SITES_PATH, id))
            .json(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp, SITES_TABLE, Some(id)).await
    }

    async fn set_site_active(&self, id: &str, is_active: bool) -> Result<(), StoreError> {
        let resp = Request::patch(&format!("{}/{}/active", SITES_PATH, id))
            .json(&SetActiveRequest { is_active })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_empty(resp, SITES_TABLE, id).await
    }

    async fn delete_site(&self, id: &str) -> Result<(), StoreError> {
        let resp = Request::delete(&format!("{}/{}", SITES_PATH, id))
            .send()
            .await
            .map_err(transport)?;
        read_empty(resp, SITES_TABLE, id).await
    }

    async fn list_submissions(&self, range: &DateRange) -> Result<Vec<Submission>, StoreError> {
        let query = SubmissionQuery::from(range).to_query_string();
        let resp = Request::get(&format!("{}{}", SUBMISSIONS_PATH, query))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp, SUBMISSIONS_TABLE, None).await
    }

    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError> {
        let resp = Request::post(SUBMISSIONS_PATH)
            .json(new)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp, SUBMISSIONS_TABLE, None).await
    }

    async fn update_submission_status(
        &self,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), StoreError> {
        let resp = Request::patch(&format!("{}/{}/status", SUBMISSIONS_PATH, id))
            .json(&StatusUpdateRequest { status })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_empty(resp, SUBMISSIONS_TABLE, id).await
    }

    async fn delete_submission(&self, id: &str) -> Result<(), StoreError> {
        let resp = Request::delete(&format!("{}/{}", SUBMISSIONS_PATH, id))
            .send()
            .await
            .map_err(transport)?;
        read_empty(resp, SUBMISSIONS_TABLE, id).await
    }

    async fn delete_submissions(&self, ids: &[String]) -> Result<usize, StoreError> {
        let body = BulkDeleteRequest { ids: ids.to_vec() };
        let resp = Request::post(&format!("{}/bulk_delete", SUBMISSIONS_PATH))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let answer: BulkDeleteResponse = read_json(resp, SUBMISSIONS_TABLE, None).await?;
        Ok(answer.deleted)
    }
}
