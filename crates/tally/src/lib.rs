//! # Tally
//!
//! Two small, independent calculators.
//!
//! - [`Calculator`]: add, subtract, multiply and divide over [`Value`]s,
//!   with an in-memory [`History`] of every operation performed.
//! - [`RectangleCalculator`]: area and perimeter of a rectangle, with
//!   validation that both dimensions are strictly positive.
//!
//! Every operation reports failure through [`TallyError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calculator;
pub mod context;
pub mod error;
pub mod history;
pub mod ops;
pub mod rectangle;
pub mod value;

// Re-export main types
pub use calculator::{Calculator, HISTORY_CLEARED};
pub use context::CalcContext;
pub use error::{Result, TallyError};
pub use history::History;
pub use rectangle::{Rectangle, RectangleCalculator};
pub use value::Value;

/// Tally version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
