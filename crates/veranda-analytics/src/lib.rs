//! Derived views over the Veranda lead collections
//!
//! Everything in this crate is a pure function over explicit
//! `(leads, metadata, filter)` inputs: no caching, no incremental state,
//! recomputed from scratch on every call. Callers that need memoization
//! wrap these themselves.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod breakdown;
pub mod export;
pub mod filter;
pub mod series;

pub use breakdown::{
    leads_on_day, preference_breakdown, status_breakdown, unspecified_count, PreferenceCount,
    StatusCount,
};
pub use export::{export_brochure_csv, export_filename, export_visit_csv};
pub use filter::{filtered_leads, FilterState};
pub use series::{last_7_days_series, last_7_days_series_local, DayBucket};
