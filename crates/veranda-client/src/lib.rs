//! Lead-storage API client and admin dashboard session
//!
//! [`LeadApiClient`] talks to the remote lead-storage API;
//! [`DashboardSession`] holds the admin dashboard's transient state (auth
//! gate, collections, filter) and composes the client, the metadata
//! overlay and the derived-analytics functions.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod session;

pub use api_client::LeadApiClient;
pub use session::DashboardSession;
