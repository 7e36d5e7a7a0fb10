//! # musician-directory
//!
//! Web service for a fixed directory of musician biographies plus a small
//! feedback form whose submissions are stored in MySQL.
//!
//! ## Architecture
//!
//! ```text
//! Clients (browser, HTTP)
//!     │
//!     ├── Handlers + HTML page (api/)
//!     │
//!     ├── FeedbackService (service/)
//!     ├── Catalog (domain/)
//!     │
//!     └── FeedbackStore (persistence/)
//!           ├── MySQL (sqlx, one connection per call)
//!           └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
