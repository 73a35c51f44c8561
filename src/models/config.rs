//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the reference listing endpoint.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// CSV seed file with the listed tasks.
    pub tasks_path: String,
    /// CSV seed file with the listed worker profiles.
    pub humans_path: String,
    /// Page size used when a request does not send `limit`.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}
