//! Plain, serde-compatible data.
//!
//! - [`Value`]: a scalar, a list, or a [`Record`].
//! - [`Record`]: an insertion-ordered map from property names to values.
//!
//! This is what normalization produces and what denormalization consumes.

// -----------------------------------------------------------------------------
// Modules

mod de;
mod record;
mod ser;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use record::{Record, RecordIntoIter, RecordIter};
pub use value::{Value, ValueKind};
