//! Payloads returned by the listing API.

pub mod api;
