//! Domain types and rules for the wishlist update service.
//!
//! This crate has no I/O. The store and HTTP layers build on the types
//! defined here.

pub mod error;
pub mod status;
pub mod types;
pub mod wishlist;
