//! Page compositions.
//!
//! Pages are render-agnostic state machines: they own their forms, talk to
//! the backend through [`AccountApi`](crate::api::AccountApi) and report
//! navigation as an [`Outcome`] for the front-end to carry out.

pub mod cta;
pub mod nav;
pub mod user;

pub use cta::{SignupCta, SignupSubmission};
pub use nav::{Icon, NavBar, NavLink};
pub use user::{DismissAction, UserPage};

use crate::route::Route;

/// What the front-end should do after a page operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep showing the current page.
    Stay,
    /// Navigate to another route.
    Navigate(Route),
}
