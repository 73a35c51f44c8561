use crate::domain::human::Human;
use crate::domain::listing::ListingPage;
use crate::domain::task::Task;
use crate::forms::listing::ListingRequest;
use crate::repository::CatalogReader;
use crate::services::ServiceResult;

/// Returns one page of open tasks matching the request.
pub fn list_tasks<R>(
    repo: &R,
    request: ListingRequest,
    default_limit: usize,
) -> ServiceResult<ListingPage<Task>>
where
    R: CatalogReader + ?Sized,
{
    let params = request.into_params(default_limit)?;
    let page = repo.list_tasks(&params).map_err(|e| {
        log::error!("Failed to list tasks: {e}");
        e
    })?;
    Ok(page)
}

/// Returns one page of worker profiles matching the request.
pub fn list_humans<R>(
    repo: &R,
    request: ListingRequest,
    default_limit: usize,
) -> ServiceResult<ListingPage<Human>>
where
    R: CatalogReader + ?Sized,
{
    let params = request.into_params(default_limit)?;
    let page = repo.list_humans(&params).map_err(|e| {
        log::error!("Failed to list humans: {e}");
        e
    })?;
    Ok(page)
}
