//! Per-call state of a normalization.
//!
//! - [`View`] / [`ViewData`]: which properties are visible at each depth.
//! - [`Navigator`]: the path of property names from the root to the current object.
//! - [`Context`]: the view selector and metadata shared by a whole call.
//! - [`Scope`]: what a nested normalizer receives.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod navigator;
mod view;

// -----------------------------------------------------------------------------
// Exports

pub use context::{Context, Scope};
pub use navigator::Navigator;
pub use view::{View, ViewData, ViewEntry};
