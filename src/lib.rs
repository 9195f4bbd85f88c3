//! Client core of the wallpaper-installation quote marketplace.
//!
//! The quote request listing screens are driven by [`controller::ListController`],
//! a generic search/filter/sort/pagination controller over a
//! [`repository::ListSource`]. [`services::quote_board::QuoteRequestBoard`]
//! pairs it with the global status counts.

pub mod controller;
pub mod debounce;
pub mod domain;
pub mod dto;
mod error_conversions;
#[cfg(feature = "http")]
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
