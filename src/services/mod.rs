//! Screen-level services composing list controllers with other backend calls.

pub mod quote_board;
