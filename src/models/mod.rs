//! Database and configuration models.

pub mod customer;
#[cfg(feature = "server")]
pub mod config;
