//! Field validation for clothie forms.
//!
//! Validation is split in two halves: a registry of constructors producing
//! [`ValidatorDescriptor`] values, and an engine that applies a list of
//! descriptors to a raw input value and reduces them to a single `bool`.
//!
//! # Example
//!
//! ```
//! use clothie_lib::validation::{max_length, min_length, validate};
//!
//! let rules = [min_length(6), max_length(10)];
//!
//! assert!(validate("secret1", &rules));
//! assert!(!validate("short", &rules));
//! ```

mod descriptor;
mod engine;

pub use descriptor::{ValidatorDescriptor, email, max_length, min_length, password_match, required};
pub use engine::{failing, validate};
