#![allow(dead_code)]

use std::path::PathBuf;

use irlwork_discovery::models::config::ServerConfig;
use irlwork_discovery::pagination::DEFAULT_ITEMS_PER_PAGE;
use irlwork_discovery::repository::InMemoryCatalog;

/// Path of a seed file shipped in `data/`.
pub fn seed_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Catalog loaded from the bundled seed files.
pub fn seed_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_paths(seed_path("tasks.csv"), seed_path("humans.csv"))
        .expect("seed files load")
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        tasks_path: seed_path("tasks.csv").display().to_string(),
        humans_path: seed_path("humans.csv").display().to_string(),
        items_per_page: DEFAULT_ITEMS_PER_PAGE,
    }
}
