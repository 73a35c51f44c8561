//! Read-only catalog loaded from CSV seed files.
//!
//! `tasks.csv` columns: `id,title,description,category,city,country,budget,lat,lng,created_at`.
//!
//! `humans.csv` columns:
//! `id,name,headline,skills,city,country,hourly_rate,rating,lat,lng,created_at`,
//! with `skills` separated by `;`. `lat`/`lng` may both be left empty and
//! `created_at` is RFC 3339.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::catalog::evaluate;
use crate::domain::human::Human;
use crate::domain::listing::ListingPage;
use crate::domain::task::Task;
use crate::domain::types::TypeConstraintError;
use crate::models::catalog::{HumanRecord, TaskRecord};
use crate::query::ListingParams;
use crate::repository::CatalogReader;
use crate::repository::errors::RepositoryResult;

/// Immutable in-memory catalog, cheap to clone across workers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    tasks: Arc<Vec<Task>>,
    humans: Arc<Vec<Human>>,
}

fn read_records<R, Rec, T>(reader: R) -> RepositoryResult<Vec<T>>
where
    R: Read,
    Rec: DeserializeOwned,
    T: TryFrom<Rec, Error = TypeConstraintError>,
{
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut items = Vec::new();

    for record in rdr.deserialize::<Rec>() {
        let item = T::try_from(record?)?;
        items.push(item);
    }

    Ok(items)
}

impl InMemoryCatalog {
    pub fn new(tasks: Vec<Task>, humans: Vec<Human>) -> Self {
        Self {
            tasks: Arc::new(tasks),
            humans: Arc::new(humans),
        }
    }

    /// Parses both seed files from arbitrary readers.
    pub fn from_readers<T: Read, H: Read>(tasks: T, humans: H) -> RepositoryResult<Self> {
        let tasks = read_records::<_, TaskRecord, Task>(tasks)?;
        let humans = read_records::<_, HumanRecord, Human>(humans)?;
        Ok(Self::new(tasks, humans))
    }

    pub fn from_paths(
        tasks_path: impl AsRef<Path>,
        humans_path: impl AsRef<Path>,
    ) -> RepositoryResult<Self> {
        let catalog = Self::from_readers(File::open(tasks_path)?, File::open(humans_path)?)?;
        log::info!(
            "Loaded catalog with {} tasks and {} humans",
            catalog.tasks.len(),
            catalog.humans.len()
        );
        Ok(catalog)
    }
}

impl CatalogReader for InMemoryCatalog {
    fn list_tasks(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Task>> {
        Ok(evaluate(self.tasks.as_slice(), params))
    }

    fn list_humans(&self, params: &ListingParams) -> RepositoryResult<ListingPage<Human>> {
        Ok(evaluate(self.humans.as_slice(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SortKey;
    use crate::repository::errors::RepositoryError;

    const TASKS: &str = "\
id,title,description,category,city,country,budget,lat,lng,created_at
5f0c6a52-8d0e-4a8e-9a57-0c3c4f5e1a01,Pick up dry cleaning,Two shirts,errands,Austin,United States,25,30.2672,-97.7431,2026-03-01T10:00:00Z
5f0c6a52-8d0e-4a8e-9a57-0c3c4f5e1a02,Photograph storefront,,photography,Dallas,United States,80,,,2026-03-02T10:00:00Z
";

    const HUMANS: &str = "\
id,name,headline,skills,city,country,hourly_rate,rating,lat,lng,created_at
7a1b2c3d-0000-4000-8000-000000000001,Ana Ruiz,Fast and careful,errands;delivery,Austin,United States,30,4.9,30.27,-97.74,2026-02-01T00:00:00Z
";

    #[test]
    fn loads_seed_files_and_lists() {
        let catalog = InMemoryCatalog::from_readers(TASKS.as_bytes(), HUMANS.as_bytes()).unwrap();

        let params = ListingParams {
            limit: 16,
            sort: SortKey::RateHigh,
            ..ListingParams::default()
        };
        let tasks = catalog.list_tasks(&params).unwrap();
        let humans = catalog.list_humans(&params).unwrap();

        assert_eq!(tasks.total, 2);
        assert_eq!(tasks.items[0].title, "Photograph storefront");
        assert_eq!(tasks.items[1].location.map(|p| p.lng()), Some(-97.7431));
        assert_eq!(humans.total, 1);
        assert_eq!(humans.items[0].skills, vec!["errands", "delivery"]);
    }

    #[test]
    fn malformed_rows_fail_loading() {
        let broken = "\
id,title,description,category,city,country,budget,lat,lng,created_at
not-a-uuid,Oops,,errands,Austin,US,10,,,2026-03-01T10:00:00Z
";

        let result = InMemoryCatalog::from_readers(broken.as_bytes(), HUMANS.as_bytes());

        assert!(matches!(result, Err(RepositoryError::SeedError(_))));
    }

    #[test]
    fn invalid_coordinates_fail_validation() {
        let broken = "\
id,title,description,category,city,country,budget,lat,lng,created_at
5f0c6a52-8d0e-4a8e-9a57-0c3c4f5e1a09,Oops,,errands,Austin,US,10,123.0,0,2026-03-01T10:00:00Z
";

        let result = InMemoryCatalog::from_readers(broken.as_bytes(), HUMANS.as_bytes());

        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }
}
