//! SQLite implementation of [`RecordStore`].
//!
//! One connection is opened at start-up and shared behind a mutex. Every
//! call hops onto tokio's blocking pool so rusqlite never stalls an actix
//! worker. Timestamps are stored as INTEGER Unix milliseconds; ids are
//! uuid v4 strings.

use chrono::{DateTime, Utc};
use common::filter::DateRange;
use common::model::partner_site::{ButtonColor, PartnerSite};
use common::model::submission::{Submission, SubmissionStatus};
use common::requests::{NewSubmission, SiteForm};
use common::store::{RecordStore, StoreError, SITES_TABLE, SUBMISSIONS_TABLE};
use log::debug;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS betting_sites (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    display_name TEXT NOT NULL,
    url          TEXT NOT NULL,
    logo_url     TEXT,
    button_color TEXT NOT NULL DEFAULT 'green',
    is_active    INTEGER NOT NULL DEFAULT 1,
    created_at   INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS user_submissions (
    id               TEXT PRIMARY KEY,
    name             TEXT NOT NULL,
    mobile_number    TEXT NOT NULL,
    selected_website TEXT NOT NULL,
    submitted_at     INTEGER NOT NULL,
    status           TEXT NOT NULL DEFAULT 'pending'
);
CREATE INDEX IF NOT EXISTS user_submissions_submitted_at
    ON user_submissions (submitted_at);
";

const SITE_COLUMNS: &str =
    "id, name, display_name, url, logo_url, button_color, is_active, created_at";
const SUBMISSION_COLUMNS: &str =
    "id, name, mobile_number, selected_website, submitted_at, status";

/// Ids bound per `DELETE ... IN (...)`; well under SQLite's variable limit.
const DELETE_BATCH: usize = 500;

fn db_error(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn from_millis(ms: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| StoreError::Decode(format!("timestamp {} out of range", ms)))
}

/// Column values as SQLite hands them back, before enum and time decoding.
struct SiteRow {
    id: String,
    name: String,
    display_name: String,
    url: String,
    logo_url: Option<String>,
    button_color: String,
    is_active: bool,
    created_at: i64,
}

impl SiteRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            display_name: row.get(2)?,
            url: row.get(3)?,
            logo_url: row.get(4)?,
            button_color: row.get(5)?,
            is_active: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn decode(self) -> Result<PartnerSite, StoreError> {
        Ok(PartnerSite {
            button_color: self
                .button_color
                .parse::<ButtonColor>()
                .map_err(StoreError::Decode)?,
            created_at: from_millis(self.created_at)?,
            id: self.id,
            name: self.name,
            display_name: self.display_name,
            url: self.url,
            logo_url: self.logo_url,
            is_active: self.is_active,
        })
    }
}

struct SubmissionRow {
    id: String,
    name: String,
    mobile_number: String,
    selected_website: String,
    submitted_at: i64,
    status: String,
}

impl SubmissionRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            mobile_number: row.get(2)?,
            selected_website: row.get(3)?,
            submitted_at: row.get(4)?,
            status: row.get(5)?,
        })
    }

    fn decode(self) -> Result<Submission, StoreError> {
        Ok(Submission {
            status: self
                .status
                .parse::<SubmissionStatus>()
                .map_err(StoreError::Decode)?,
            submitted_at: from_millis(self.submitted_at)?,
            id: self.id,
            name: self.name,
            mobile_number: self.mobile_number,
            selected_website: self.selected_website,
        })
    }
}

fn fetch_site(conn: &Connection, id: &str) -> Result<PartnerSite, StoreError> {
    conn.query_row(
        &format!("SELECT {} FROM betting_sites WHERE id = ?1", SITE_COLUMNS),
        params![id],
        SiteRow::read,
    )
    .optional()
    .map_err(db_error)?
    .ok_or_else(|| StoreError::NotFound {
        table: SITES_TABLE,
        id: id.to_string(),
    })?
    .decode()
}

fn fetch_submission(conn: &Connection, id: &str) -> Result<Submission, StoreError> {
    conn.query_row(
        &format!(
            "SELECT {} FROM user_submissions WHERE id = ?1",
            SUBMISSION_COLUMNS
        ),
        params![id],
        SubmissionRow::read,
    )
    .optional()
    .map_err(db_error)?
    .ok_or_else(|| StoreError::NotFound {
        table: SUBMISSIONS_TABLE,
        id: id.to_string(),
    })?
    .decode()
}

/// Maps "no row changed" to `NotFound`.
fn expect_one(changed: usize, table: &'static str, id: &str) -> Result<(), StoreError> {
    if changed == 0 {
        Err(StoreError::NotFound {
            table,
            id: id.to_string(),
        })
    } else {
        Ok(())
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure both tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path).map_err(db_error)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory().map_err(db_error)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(db_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `job` against the shared connection on the blocking pool.
    async fn run<T, F>(&self, job: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| StoreError::Backend("database connection poisoned".to_string()))?;
            job(&conn)
        })
        .await
        .map_err(|e| StoreError::Backend(format!("store task failed: {}", e)))?
    }

    /// Inserts a pending submission stamped with `submitted_at`.
    pub async fn insert_submission_at(
        &self,
        new: &NewSubmission,
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, StoreError> {
        let new = new.clone();
        self.run(move |conn| {
            let id = Uuid::new_v4().to_string();
            conn.execute(
                "INSERT INTO user_submissions
                    (id, name, mobile_number, selected_website, submitted_at, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    new.name.trim(),
                    new.mobile_number.trim(),
                    new.selected_website.trim(),
                    submitted_at.timestamp_millis(),
                    SubmissionStatus::Pending.as_str(),
                ],
            )
            .map_err(db_error)?;
            fetch_submission(conn, &id)
        })
        .await
    }
}

impl RecordStore for SqliteStore {
    async fn list_sites(&self) -> Result<Vec<PartnerSite>, StoreError> {
        self.run(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {} FROM betting_sites ORDER BY created_at DESC",
                    SITE_COLUMNS
                ))
                .map_err(db_error)?;
            let rows = stmt
                .query_map([], SiteRow::read)
                .map_err(db_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(db_error)?;
            rows.into_iter().map(SiteRow::decode).collect()
        })
        .await
    }

    async fn insert_site(&self, form: &SiteForm) -> Result<PartnerSite, StoreError> {
        let form = form.clone();
        self.run(move |conn| {
            let id = Uuid::new_v4().to_string();
            conn.execute(
                "INSERT INTO betting_sites
                    (id, name, display_name, url, logo_url, button_color, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7)",
                params![
                    id,
                    form.name.trim(),
                    form.display_name.trim(),
                    form.url.trim(),
                    form.logo_url(),
                    form.button_color.as_str(),
                    Utc::now().timestamp_millis(),
                ],
            )
            .map_err(db_error)?;
            debug!("inserted site {}", id);
            fetch_site(conn, &id)
        })
        .await
    }

    async fn update_site(&self, id: &str, form: &SiteForm) -> Result<PartnerSite, StoreError> {
        let (id, form) = (id.to_string(), form.clone());
        self.run(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE betting_sites
                     SET name = ?2, display_name = ?3, url = ?4, logo_url = ?5, button_color = ?6
                     WHERE id = ?1",
                    params![
                        id,
                        form.name.trim(),
                        form.display_name.trim(),
                        form.url.trim(),
                        form.logo_url(),
                        form.button_color.as_str(),
                    ],
                )
                .map_err(db_error)?;
            expect_one(changed, SITES_TABLE, &id)?;
            fetch_site(conn, &id)
        })
        .await
    }

    async fn set_site_active(&self, id: &str, is_active: bool) -> Result<(), StoreError> {
        let id = id.to_string();
        self.run(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE betting_sites SET is_active = ?2 WHERE id = ?1",
                    params![id, is_active],
                )
                .map_err(db_error)?;
            expect_one(changed, SITES_TABLE, &id)
        })
        .await
    }

    async fn delete_site(&self, id: &str) -> Result<(), StoreError> {
        let id = id.to_string();
        self.run(move |conn| {
            let changed = conn
                .execute("DELETE FROM betting_sites WHERE id = ?1", params![id])
                .map_err(db_error)?;
            expect_one(changed, SITES_TABLE, &id)
        })
        .await
    }

    async fn list_submissions(&self, range: &DateRange) -> Result<Vec<Submission>, StoreError> {
        let bounds = range.bounds();
        self.run(move |conn| {
            let rows = match bounds {
                Some((start, end)) => {
                    let mut stmt = conn
                        .prepare(&format!(
                            "SELECT {} FROM user_submissions
                             WHERE submitted_at >= ?1 AND submitted_at <= ?2
                             ORDER BY submitted_at DESC",
                            SUBMISSION_COLUMNS
                        ))
                        .map_err(db_error)?;
                    let rows = stmt
                        .query_map(
                            params![start.timestamp_millis(), end.timestamp_millis()],
                            SubmissionRow::read,
                        )
                        .map_err(db_error)?
                        .collect::<rusqlite::Result<Vec<_>>>();
                    rows
                }
                None => {
                    let mut stmt = conn
                        .prepare(&format!(
                            "SELECT {} FROM user_submissions ORDER BY submitted_at DESC",
                            SUBMISSION_COLUMNS
                        ))
                        .map_err(db_error)?;
                    let rows = stmt
                        .query_map([], SubmissionRow::read)
                        .map_err(db_error)?
                        .collect::<rusqlite::Result<Vec<_>>>();
                    rows
                }
            }
            .map_err(db_error)?;
            rows.into_iter().map(SubmissionRow::decode).collect()
        })
        .await
    }

    async fn insert_submission(&self, new: &NewSubmission) -> Result<Submission, StoreError> {
        self.insert_submission_at(new, Utc::now()).await
    }

    async fn update_submission_status(
        &self,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<(), StoreError> {
        let id = id.to_string();
        self.run(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE user_submissions SET status = ?2 WHERE id = ?1",
                    params![id, status.as_str()],
                )
                .map_err(db_error)?;
            expect_one(changed, SUBMISSIONS_TABLE, &id)
        })
        .await
    }

    async fn delete_submission(&self, id: &str) -> Result<(), StoreError> {
        let id = id.to_string();
        self.run(move |conn| {
            let changed = conn
                .execute("DELETE FROM user_submissions WHERE id = ?1", params![id])
                .map_err(db_error)?;
            expect_one(changed, SUBMISSIONS_TABLE, &id)
        })
        .await
    }

    async fn delete_submissions(&self, ids: &[String]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let ids = ids.to_vec();
        self.run(move |conn| {
            let tx = conn.unchecked_transaction().map_err(db_error)?;
            let mut deleted = 0;
            for batch in ids.chunks(DELETE_BATCH) {
                let placeholders = vec!["?"; batch.len()].join(", ");
                deleted += tx
                    .execute(
                        &format!(
                            "DELETE FROM user_submissions WHERE id IN ({})",
                            placeholders
                        ),
                        params_from_iter(batch.iter()),
                    )
                    .map_err(db_error)?;
            }
            tx.commit().map_err(db_error)?;
            debug!("bulk delete removed {} of {} submissions", deleted, ids.len());
            Ok(deleted)
        })
        .await
    }
}
