use crate::{
    domain::{human::Human, listing::ListingPage, task::Task},
    query::ListingParams,
    repository::errors::RepositoryResult,
};

pub mod catalog;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use catalog::InMemoryCatalog;

/// Read access to the listed marketplace entities.
pub trait CatalogReader {
    fn list_tasks(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Task>>;
    fn list_humans(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Human>>;
}
