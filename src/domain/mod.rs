//! Domain types exposed by the discovery pipeline and the listing endpoint.

pub mod filter;
pub mod human;
pub mod listing;
pub mod task;
pub mod types;
