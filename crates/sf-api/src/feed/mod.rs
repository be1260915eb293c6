//! Feed generation: routes, batching service, generator client, cleanup.

pub mod cleanup;
pub mod generator;
pub mod routes;
pub mod service;

pub use routes::routes;
