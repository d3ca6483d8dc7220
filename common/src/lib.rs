//! Shared types and client-independent logic for the lead dashboard.
//!
//! Everything here is pure: the backend and the browser frontend both depend
//! on it, and neither runtime leaks into it.

pub mod contact;
pub mod export;
pub mod filter;
pub mod model;
pub mod requests;
pub mod screens;
pub mod store;
