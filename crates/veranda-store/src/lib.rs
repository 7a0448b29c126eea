//! Persistence for the Veranda lead toolkit
//!
//! Two stores live here: the [`MetadataStore`] overlay holding the sales
//! team's per-lead annotations (status, notes) behind a pluggable
//! [`MetadataBackend`], and the [`LeadRepository`] the lead-storage API
//! serves its collections from.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod backend;
pub mod metadata;
pub mod repository;

pub use backend::{JsonFileBackend, MemoryBackend};
pub use metadata::{MetadataBackend, MetadataStore};
pub use repository::LeadRepository;
