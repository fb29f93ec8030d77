//! Target derivation engine
//!
//! Composes the three estimators and decides, per target column, whether
//! computation is needed. A column that already exists on the input table is
//! ground truth: it is skipped entirely, values and kind untouched. Order is
//! porosity first (the fluid classifier consumes the resolved porosity
//! column), then fluid class, then pressure.

mod fluid;
mod porosity;
mod pressure;

pub use fluid::FluidClassifier;
pub use porosity::PorosityEstimator;
pub use pressure::PressureEstimator;

use tracing::debug;

use crate::config::ChannelMap;
use crate::types::{Column, FluidClass, LogTable};

/// Orchestrates the porosity, fluid, and pressure estimators over a table.
///
/// Construct once per channel configuration and reuse; the engine holds no
/// mutable state and every computation is a pure function of the table.
#[derive(Debug, Clone)]
pub struct TargetEngine {
    channels: ChannelMap,
    porosity: PorosityEstimator,
    fluid: FluidClassifier,
    pressure: PressureEstimator,
}

impl TargetEngine {
    pub fn new(channels: ChannelMap) -> Self {
        let porosity = PorosityEstimator::new(&channels);
        let fluid = FluidClassifier::new(&channels);
        let pressure = PressureEstimator::new(&channels);
        Self {
            channels,
            porosity,
            fluid,
            pressure,
        }
    }

    /// The channel-name configuration this engine was built with.
    pub fn channels(&self) -> &ChannelMap {
        &self.channels
    }

    /// Compute the composite-porosity column without attaching it.
    pub fn compute_porosity(&self, table: &LogTable) -> Vec<Option<f64>> {
        self.porosity.compute(table)
    }

    /// Compute the fluid-class column without attaching it.
    ///
    /// `phi_col` names the porosity column to consult.
    pub fn compute_fluid_class(&self, table: &LogTable, phi_col: &str) -> Vec<FluidClass> {
        self.fluid.compute(table, phi_col)
    }

    /// Compute the pore-pressure column (psi) without attaching it.
    pub fn compute_pressure(&self, table: &LogTable) -> Vec<Option<f64>> {
        self.pressure.compute(table)
    }

    /// Ensure all three target columns exist on the table, in place.
    ///
    /// Pre-existing target columns are never overwritten. There is no
    /// cell-level fill: a column is either kept whole or computed whole.
    pub fn compute_all_targets_in_place(&self, table: &mut LogTable) {
        let rows = table.len();

        let phi_col = self.channels.phi_combined.clone();
        if table.has_column(&phi_col) {
            debug!(column = %phi_col, "target column already present, leaving untouched");
        } else {
            let phi = self.porosity.compute(table);
            let undefined = phi.iter().filter(|cell| cell.is_none()).count();
            debug!(column = %phi_col, rows, undefined, "computed composite porosity");
            table.attach(&phi_col, Column::Numeric(phi));
        }

        let fluid_col = self.channels.fluid_class.clone();
        if table.has_column(&fluid_col) {
            debug!(column = %fluid_col, "target column already present, leaving untouched");
        } else {
            let classes = self.fluid.compute(table, &phi_col);
            debug!(column = %fluid_col, rows, "computed fluid classification");
            table.attach(
                &fluid_col,
                Column::Category(classes.into_iter().map(Some).collect()),
            );
        }

        let pressure_col = self.channels.pore_pressure_psi.clone();
        if table.has_column(&pressure_col) {
            debug!(column = %pressure_col, "target column already present, leaving untouched");
        } else {
            let psi = self.pressure.compute(table);
            let undefined = psi.iter().filter(|cell| cell.is_none()).count();
            debug!(column = %pressure_col, rows, undefined, "computed pore pressure");
            table.attach(&pressure_col, Column::Numeric(psi));
        }
    }

    /// Copy-mode variant: returns an augmented copy, leaving the caller's
    /// table untouched. Computed values are identical to the in-place mode.
    #[must_use]
    pub fn compute_all_targets(&self, table: &LogTable) -> LogTable {
        let mut augmented = table.clone();
        self.compute_all_targets_in_place(&mut augmented);
        augmented
    }
}

impl Default for TargetEngine {
    fn default() -> Self {
        Self::new(ChannelMap::default())
    }
}
