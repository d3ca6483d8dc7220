//! View state for the dashboard screens.
//!
//! Each screen owns a [`rows::RowMirror`] of the remote rows plus whatever
//! selection or form state it needs. Operations are split in two: a `begin_*`
//! call decides whether a remote call is needed and returns what to send,
//! and a matching `finish_*` call folds the store's answer back in. The
//! caller owns the actual I/O, which keeps these types free of any runtime.

pub mod rows;
pub mod site_catalog;
pub mod submission_inbox;
pub mod submission_table;

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the user (shown as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
        }
    }

    /// Builds an error notice and logs the cause.
    pub fn error(title: impl Into<String>, cause: &dyn Display) -> Self {
        let title = title.into();
        log::error!("{}: {}", title, cause);
        Self {
            kind: NoticeKind::Error,
            title,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// What the caller should do after a `finish_*` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followup {
    pub notice: Notice,
    /// The screen wants a full refetch to resynchronize.
    pub refetch: bool,
}

impl Followup {
    pub fn notice(notice: Notice) -> Self {
        Self {
            notice,
            refetch: false,
        }
    }

    pub fn refetch(notice: Notice) -> Self {
        Self {
            notice,
            refetch: true,
        }
    }
}
