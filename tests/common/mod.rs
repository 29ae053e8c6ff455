#![allow(dead_code)]

use std::path::PathBuf;

use customers_api::db::{DbPool, establish_connection_pool};
use customers_api::domain::customer::{NewCustomer, RawAddress, RawContact};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

pub fn new_customer(name: &str, employees: i32, industry: &str) -> NewCustomer {
    NewCustomer::try_new(
        name,
        employees,
        industry,
        RawContact::default(),
        RawAddress::default(),
    )
    .expect("valid customer")
}

pub fn with_contact(name: &str, employees: i32, industry: &str) -> NewCustomer {
    NewCustomer::try_new(
        name,
        employees,
        industry,
        RawContact {
            contact_name: Some(format!("{name} Contact")),
            contact_email: Some(format!("contact@{}.com", name.to_lowercase().replace(' ', "-"))),
        },
        RawAddress {
            street: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip_code: Some("02134".to_string()),
            country: Some("USA".to_string()),
        },
    )
    .expect("valid customer")
}
