//! Domain model of the quote request marketplace.

pub mod page;
pub mod quote_request;
pub mod statistics;
pub mod types;
