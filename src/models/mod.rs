//! Models loaded from outside of the backend API.

pub mod config;
