//! Seed-file and configuration models used by the listing endpoint.

pub mod catalog;
pub mod config;
