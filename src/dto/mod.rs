//! DTO modules that bridge the REST backend with the domain layer.

pub mod api;
