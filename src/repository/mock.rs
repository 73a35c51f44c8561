//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::human::Human;
use crate::domain::listing::ListingPage;
use crate::domain::task::Task;
use crate::query::ListingParams;
use crate::repository::CatalogReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl CatalogReader for Repository {
        fn list_tasks(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Task>>;
        fn list_humans(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Human>>;
    }
}
