//! CSV import of customer records for seeding the store.
//!
//! Expected header: `name,employees,industry,contact_name,contact_email,
//! street,city,state,zip_code,country`. Empty cells count as absent. Every row
//! passes the same validation used when loading rows from the database, so a
//! seeded store never holds records the API would refuse to serve.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::customer::{NewCustomer, RawAddress, RawContact};
use crate::domain::types::TypeConstraintError;
use crate::repository::CustomerWriter;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to open seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to store customers: {0}")]
    Repository(#[from] RepositoryError),

    #[error("row {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: TypeConstraintError,
    },
}

#[derive(Debug, Deserialize)]
struct CustomerRow {
    name: String,
    employees: i32,
    industry: String,
    contact_name: Option<String>,
    contact_email: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    country: Option<String>,
}

impl CustomerRow {
    fn into_new_customer(self) -> Result<NewCustomer, TypeConstraintError> {
        NewCustomer::try_new(
            self.name,
            self.employees,
            &self.industry,
            RawContact {
                contact_name: self.contact_name,
                contact_email: self.contact_email,
            },
            RawAddress {
                street: self.street,
                city: self.city,
                state: self.state,
                zip_code: self.zip_code,
                country: self.country,
            },
        )
    }
}

/// Parses and validates every row, failing on the first invalid one.
pub fn parse_customers<R: Read>(reader: R) -> Result<Vec<NewCustomer>, SeedError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut customers = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: CustomerRow = record.deserialize(Some(&headers))?;

        let customer = row
            .into_new_customer()
            .map_err(|source| SeedError::InvalidRow { line, source })?;
        customers.push(customer);
    }

    Ok(customers)
}

/// Inserts `customers`, first clearing the store when `replace` is set.
///
/// Returns the number of inserted rows.
pub fn import_customers<W>(
    repo: &W,
    customers: &[NewCustomer],
    replace: bool,
) -> Result<usize, SeedError>
where
    W: CustomerWriter + ?Sized,
{
    if replace {
        let removed = repo.delete_all_customers()?;
        log::info!("Removed {removed} existing customers");
    }

    Ok(repo.create_customers(customers)?)
}

/// Parses the CSV file at `path` and imports every row.
///
/// The whole file is validated before the store is touched.
pub fn seed_from_file<W>(repo: &W, path: &Path, replace: bool) -> Result<usize, SeedError>
where
    W: CustomerWriter + ?Sized,
{
    let customers = parse_customers(File::open(path)?)?;
    import_customers(repo, &customers, replace)
}
