//! Shared data structures for the target derivation pipeline
//!
//! - `LogTable`: depth-indexed columnar table with an open set of channels
//! - `Column`: numeric or categorical column with explicit undefined cells
//! - `FluidClass`: rule-based fluid classification labels
//! - `TableError`: depth/shape validation failures owned by the loader side

mod fluid;
mod table;

pub use fluid::*;
pub use table::*;
