//! Domain aggregates exposed by the customer query layer.

pub mod customer;
pub mod types;
