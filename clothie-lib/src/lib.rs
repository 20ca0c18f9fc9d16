//! clothie storefront client library
//!
//! Field validation, form state and the account pages of the clothie
//! storefront, plus the HTTP client for the backend they talk to.

pub mod api;
pub mod error;
pub mod form;
pub mod pages;
pub mod route;
pub mod session;
pub mod validation;

mod client;

pub use client::*;
pub use route::Route;
