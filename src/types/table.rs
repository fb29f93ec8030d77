//! Depth-indexed columnar log table
//!
//! The table is the unit of work for the target derivation engine: one depth
//! sample per row, plus an open set of named sensor channels. Channels are
//! stored column-wise as `Vec<Option<f64>>` so "present but null" cells are
//! an explicit `None` rather than a floating NaN that propagates silently.
//! Non-finite values are sanitized to `None` on insertion, so a stored
//! `Some(v)` is always finite.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FluidClass;

// ============================================================================
// Error Types
// ============================================================================

/// Shape and depth-channel validation failures.
///
/// Raised only when constructing or mutating a table; the estimators
/// themselves never error. A bad depth channel is a loader-side precondition
/// violation, surfaced here so it cannot reach the estimators.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("depth at row {index} is not finite")]
    NonFiniteDepth { index: usize },

    #[error("depth at row {index} is negative: {value}")]
    NegativeDepth { index: usize, value: f64 },

    #[error("column '{column}' has {actual} values but the table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

// ============================================================================
// Columns
// ============================================================================

/// A named column attached to a [`LogTable`].
///
/// `None` cells are the explicit "undefined" marker; downstream consumers
/// treat them as plottable gaps / unusable feature values, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Numeric sensor or derived channel
    Numeric(Vec<Option<f64>>),
    /// Categorical fluid classification channel
    Category(Vec<Option<FluidClass>>),
}

impl Column {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Category(v) => v.len(),
        }
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reorder the column by the given row permutation.
    fn permute(&mut self, order: &[usize]) {
        match self {
            Self::Numeric(v) => {
                let reordered: Vec<_> = order.iter().map(|&i| v[i]).collect();
                *v = reordered;
            }
            Self::Category(v) => {
                let reordered: Vec<_> = order.iter().map(|&i| v[i]).collect();
                *v = reordered;
            }
        }
    }
}

// ============================================================================
// Log Table
// ============================================================================

/// Depth-indexed table of sensor channels.
///
/// Depth is the one mandatory channel: every value must be finite and
/// non-negative (meters, measured depth). All other channels are optional
/// and sparse. Duplicate depths are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogTable {
    depth: Vec<f64>,
    columns: BTreeMap<String, Column>,
}

impl LogTable {
    /// Create a table from a depth channel, validating every sample.
    pub fn new(depth: Vec<f64>) -> Result<Self, TableError> {
        for (index, &value) in depth.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFiniteDepth { index });
            }
            if value < 0.0 {
                return Err(TableError::NegativeDepth { index, value });
            }
        }
        Ok(Self {
            depth,
            columns: BTreeMap::new(),
        })
    }

    /// Number of rows (depth samples).
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// The depth channel (meters).
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    /// Whether a column with this name is attached (numeric or categorical).
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Names of all attached columns, in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Numeric column cells, or `None` if absent or categorical.
    pub fn numeric(&self, name: &str) -> Option<&[Option<f64>]> {
        match self.columns.get(name) {
            Some(Column::Numeric(v)) => Some(v),
            _ => None,
        }
    }

    /// Categorical column cells, or `None` if absent or numeric.
    pub fn category(&self, name: &str) -> Option<&[Option<FluidClass>]> {
        match self.columns.get(name) {
            Some(Column::Category(v)) => Some(v),
            _ => None,
        }
    }

    /// Attach a dense numeric column. Non-finite values become undefined cells.
    ///
    /// Replaces any existing column with the same name.
    pub fn insert_numeric(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), TableError> {
        let cells = values
            .into_iter()
            .map(|v| v.is_finite().then_some(v))
            .collect();
        self.insert_numeric_cells(name, cells)
    }

    /// Attach a sparse numeric column. `Some(non-finite)` becomes undefined.
    pub fn insert_numeric_cells(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Option<f64>>,
    ) -> Result<(), TableError> {
        let cells = cells
            .into_iter()
            .map(|cell| cell.filter(|v| v.is_finite()))
            .collect();
        self.insert_column(name.into(), Column::Numeric(cells))
    }

    /// Attach a categorical column.
    pub fn insert_category(
        &mut self,
        name: impl Into<String>,
        cells: Vec<Option<FluidClass>>,
    ) -> Result<(), TableError> {
        self.insert_column(name.into(), Column::Category(cells))
    }

    fn insert_column(&mut self, name: String, column: Column) -> Result<(), TableError> {
        if column.len() != self.len() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.len(),
                actual: column.len(),
            });
        }
        self.columns.insert(name, column);
        Ok(())
    }

    /// Attach a column whose length is already known to match.
    ///
    /// Used by the target engine, which derives columns from this table and
    /// therefore cannot produce a length mismatch.
    pub(crate) fn attach(&mut self, name: &str, column: Column) {
        debug_assert_eq!(column.len(), self.len());
        self.columns.insert(name.to_string(), column);
    }

    /// Sort rows by depth ascending, reordering every attached column.
    ///
    /// Stable: rows sharing a depth keep their input order. Mirrors the
    /// loader-side convention that tables are positionally indexed after a
    /// depth sort.
    pub fn sort_by_depth(&mut self) {
        let mut order: Vec<usize> = (0..self.depth.len()).collect();
        // Depths are validated finite at construction, total_cmp is exact here
        order.sort_by(|&a, &b| self.depth[a].total_cmp(&self.depth[b]));

        if order.iter().enumerate().all(|(i, &j)| i == j) {
            return;
        }

        let depth = std::mem::take(&mut self.depth);
        self.depth = order.iter().map(|&i| depth[i]).collect();
        for column in self.columns.values_mut() {
            column.permute(&order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nan_depth() {
        let err = LogTable::new(vec![100.0, f64::NAN]).expect_err("should reject NaN");
        assert!(matches!(err, TableError::NonFiniteDepth { index: 1 }));
    }

    #[test]
    fn test_new_rejects_negative_depth() {
        let err = LogTable::new(vec![-5.0]).expect_err("should reject negative");
        assert!(matches!(err, TableError::NegativeDepth { index: 0, .. }));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = LogTable::new(Vec::new()).expect("empty depth is fine");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_insert_length_mismatch() {
        let mut table = LogTable::new(vec![100.0, 200.0]).expect("valid depth");
        let err = table
            .insert_numeric("GR", vec![50.0])
            .expect_err("wrong length");
        assert!(matches!(
            err,
            TableError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_values_become_undefined() {
        let mut table = LogTable::new(vec![100.0, 200.0, 300.0]).expect("valid depth");
        table
            .insert_numeric("GR", vec![50.0, f64::INFINITY, f64::NAN])
            .expect("insert");
        let cells = table.numeric("GR").expect("column exists");
        assert_eq!(cells, &[Some(50.0), None, None]);

        table
            .insert_numeric_cells("RES", vec![Some(f64::NAN), Some(12.0), None])
            .expect("insert");
        let cells = table.numeric("RES").expect("column exists");
        assert_eq!(cells, &[None, Some(12.0), None]);
    }

    #[test]
    fn test_sort_by_depth_permutes_all_columns() {
        let mut table = LogTable::new(vec![300.0, 100.0, 200.0]).expect("valid depth");
        table
            .insert_numeric_cells("GR", vec![Some(3.0), Some(1.0), None])
            .expect("insert");
        table
            .insert_category(
                "FLUID",
                vec![
                    Some(FluidClass::PayZone),
                    Some(FluidClass::Background),
                    None,
                ],
            )
            .expect("insert");

        table.sort_by_depth();

        assert_eq!(table.depth(), &[100.0, 200.0, 300.0]);
        assert_eq!(
            table.numeric("GR").expect("column"),
            &[Some(1.0), None, Some(3.0)]
        );
        assert_eq!(
            table.category("FLUID").expect("column"),
            &[Some(FluidClass::Background), None, Some(FluidClass::PayZone)]
        );
    }

    #[test]
    fn test_sort_is_stable_for_duplicate_depths() {
        let mut table = LogTable::new(vec![200.0, 100.0, 100.0]).expect("valid depth");
        table
            .insert_numeric("ORDER", vec![0.0, 1.0, 2.0])
            .expect("insert");

        table.sort_by_depth();

        assert_eq!(table.depth(), &[100.0, 100.0, 200.0]);
        assert_eq!(
            table.numeric("ORDER").expect("column"),
            &[Some(1.0), Some(2.0), Some(0.0)]
        );
    }

    #[test]
    fn test_numeric_lookup_ignores_category_columns() {
        let mut table = LogTable::new(vec![100.0]).expect("valid depth");
        table
            .insert_category("FLUID", vec![Some(FluidClass::Background)])
            .expect("insert");
        assert!(table.has_column("FLUID"));
        assert!(table.numeric("FLUID").is_none());
        assert!(table.category("FLUID").is_some());
        assert!(matches!(table.column("FLUID"), Some(Column::Category(_))));
    }

    #[test]
    fn test_column_names_are_sorted() {
        let mut table = LogTable::new(vec![100.0]).expect("valid depth");
        table.insert_numeric("GR", vec![50.0]).expect("insert");
        table.insert_numeric("CAL", vec![8.5]).expect("insert");
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["CAL", "GR"]);
    }
}
