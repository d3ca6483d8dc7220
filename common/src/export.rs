//! CSV export of submissions.
//!
//! Columns are fixed: Name, Mobile, Website, Status (or Contacted),
//! Submitted At. Timestamps are written as `yyyy-MM-dd HH:mm` in UTC. Fields
//! are quoted only when they contain a delimiter, quote or line break, so
//! ordinary rows come out as bare comma-joined values.

use crate::filter::DateRange;
use crate::model::submission::Submission;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EXPORT_FILE_NAME: &str = "user_submissions.csv";
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// How the status column is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColumn {
    /// `pending`, `processed` or `contacted`.
    #[default]
    Literal,
    /// `Yes` when contacted, `No` otherwise.
    YesNo,
}

impl StatusColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColumn::Literal => "literal",
            StatusColumn::YesNo => "yes_no",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            StatusColumn::Literal => "Status",
            StatusColumn::YesNo => "Contacted",
        }
    }

    fn render(&self, submission: &Submission) -> &'static str {
        match self {
            StatusColumn::Literal => submission.status.as_str(),
            StatusColumn::YesNo if submission.status.is_contacted() => "Yes",
            StatusColumn::YesNo => "No",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer could not be flushed: {0}")]
    Flush(String),
    #[error("csv output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes `rows` in order, header first.
pub fn to_csv<'a, I>(rows: I, column: StatusColumn) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["Name", "Mobile", "Website", column.header(), "Submitted At"])?;
    for row in rows {
        let submitted_at = row.submitted_at.format(EXPORT_TIMESTAMP_FORMAT).to_string();
        writer.write_record([
            row.name.as_str(),
            row.mobile_number.as_str(),
            row.selected_website.as_str(),
            column.render(row),
            submitted_at.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Re-applies `range` to the rows already in memory and serializes the
/// survivors. No new query is made.
pub fn export_filtered(
    rows: &[Submission],
    range: &DateRange,
    column: StatusColumn,
) -> Result<String, ExportError> {
    to_csv(range.apply(rows, |s| &s.submitted_at), column)
}
