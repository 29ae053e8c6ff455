use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRepository;

/// Read side of the customer store.
///
/// Implementations hand out one fully materialized snapshot per call, ordered
/// by customer id. Callers must not re-read between counting and slicing.
pub trait CustomerReader: Send + Sync {
    fn list_all_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

/// Write side of the customer store, used only by offline seeding.
pub trait CustomerWriter {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
    fn delete_all_customers(&self) -> RepositoryResult<usize>;
}

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
