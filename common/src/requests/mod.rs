//! Request and response payloads shared by the HTTP API and the dashboard.
//!
//! Forms are validated here so both sides agree on what "required" means:
//! a field that is empty after trimming counts as missing.

use crate::export::StatusColumn;
use crate::filter::DateRange;
use crate::model::partner_site::{ButtonColor, PartnerSite};
use crate::model::submission::SubmissionStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Create/update payload for a partner site.
///
/// `logo_url` is kept as a plain string so the form can bind it directly;
/// an empty value is stored as no logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteForm {
    pub name: String,
    pub display_name: String,
    pub url: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub button_color: ButtonColor,
}

impl SiteForm {
    pub fn from_site(site: &PartnerSite) -> Self {
        Self {
            name: site.name.clone(),
            display_name: site.display_name.clone(),
            url: site.url.clone(),
            logo_url: site.logo_url.clone().unwrap_or_default(),
            button_color: site.button_color,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "name")?;
        require(&self.display_name, "display_name")?;
        require(&self.url, "url")?;
        Ok(())
    }

    pub fn logo_url(&self) -> Option<String> {
        let trimmed = self.logo_url.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Intake payload from the public signup form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub mobile_number: String,
    pub selected_website: String,
}

impl NewSubmission {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "name")?;
        require(&self.mobile_number, "mobile_number")?;
        require(&self.selected_website, "selected_website")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub deleted: usize,
}

/// Query string for listing and exporting submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionQuery {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub status_column: Option<StatusColumn>,
}

impl SubmissionQuery {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }

    /// Renders the set parameters as `?from=..&to=..`, or an empty string.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(from) = self.from {
            params.push(format!("from={}", from.format("%Y-%m-%d")));
        }
        if let Some(to) = self.to {
            params.push(format!("to={}", to.format("%Y-%m-%d")));
        }
        if let Some(column) = self.status_column {
            params.push(format!("status_column={}", column.as_str()));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl From<&DateRange> for SubmissionQuery {
    fn from(range: &DateRange) -> Self {
        Self {
            from: range.from,
            to: range.to,
            status_column: None,
        }
    }
}
