//! Immutable in-memory customer store.

use std::sync::Arc;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::{CustomerId, TypeConstraintError};
use crate::repository::CustomerReader;
use crate::repository::errors::RepositoryResult;

/// Read-only snapshot owned by the caller and shared between workers.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    customers: Arc<[Customer]>,
}

impl InMemoryRepository {
    /// Wraps `customers`, sorting them by id so listing order is stable.
    pub fn new(mut customers: Vec<Customer>) -> Self {
        customers.sort_by_key(|customer| customer.id);
        Self {
            customers: customers.into(),
        }
    }

    /// Assigns sequential ids starting at 1 to validated records.
    pub fn from_new(new_customers: Vec<NewCustomer>) -> Result<Self, TypeConstraintError> {
        let customers = new_customers
            .into_iter()
            .zip(1..)
            .map(|(customer, id)| CustomerId::new(id).map(|id| customer.with_id(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(customers))
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerReader for InMemoryRepository {
    fn list_all_customers(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.customers.to_vec())
    }
}
