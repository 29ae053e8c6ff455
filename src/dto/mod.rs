//! DTOs shaping service results for the JSON API.

pub mod api;
