//! Pore-pressure estimator
//!
//! Two-step heuristic estimate in psi per depth sample:
//!
//! 1. Hydrostatic baseline from mud weight and depth:
//!    `P = rho * g * depth` (Pa), converted to psi. Missing mud-weight cells
//!    fall back to water density. If the mud-weight column is absent
//!    entirely, a pre-computed hydrostatic-pressure column (Pa) is converted
//!    instead; if that is also absent, the baseline is 0.
//! 2. Anomaly correction from the corrected drilling exponent:
//!    `(nominal - exponent) * scale`, so an exponent below nominal raises
//!    the estimate linearly (1000 psi per 0.1 unit of deviation).
//!
//! Final values are floored at 0; non-finite results become undefined.
//!
//! This intentionally approximates Rehm & McClendon behaviour for display
//! purposes. It is not a rigorous Eaton-style pore-pressure model.

use crate::config::defaults::{
    EXPONENT_ANOMALY_SCALE_PSI, GRAVITY_MS2, NOMINAL_DRILLING_EXPONENT, PA_TO_PSI,
    WATER_DENSITY_KGM3,
};
use crate::config::ChannelMap;
use crate::types::LogTable;

/// Derives one pore-pressure estimate (psi) per row.
#[derive(Debug, Clone)]
pub struct PressureEstimator {
    mud_weight: String,
    drilling_exponent: String,
    hydrostatic_pa: String,
}

impl PressureEstimator {
    pub fn new(channels: &ChannelMap) -> Self {
        Self {
            mud_weight: channels.mud_weight.clone(),
            drilling_exponent: channels.drilling_exponent.clone(),
            hydrostatic_pa: channels.hydrostatic_pa.clone(),
        }
    }

    /// Compute the pore-pressure column (psi).
    ///
    /// Total over any table. With no usable input channels the result is a
    /// defined zero baseline, not undefined. The one case that yields an
    /// undefined cell from present columns: the exponent column exists but
    /// the row's cell is missing, which leaves no defensible anomaly value
    /// for that row.
    pub fn compute(&self, table: &LogTable) -> Vec<Option<f64>> {
        let depth = table.depth();
        let mud = table.numeric(&self.mud_weight);
        let hydrostatic = table.numeric(&self.hydrostatic_pa);
        let exponent = table.numeric(&self.drilling_exponent);

        (0..table.len())
            .map(|row| {
                let baseline_psi = if let Some(cells) = mud {
                    let rho = cells[row].unwrap_or(WATER_DENSITY_KGM3);
                    rho * GRAVITY_MS2 * depth[row] * PA_TO_PSI
                } else if let Some(cells) = hydrostatic {
                    cells[row].unwrap_or(0.0) * PA_TO_PSI
                } else {
                    0.0
                };

                let anomaly_psi = match exponent {
                    Some(cells) => {
                        let dc = cells[row]?;
                        (NOMINAL_DRILLING_EXPONENT - dc) * EXPONENT_ANOMALY_SCALE_PSI
                    }
                    None => 0.0,
                };

                let psi = baseline_psi + anomaly_psi;
                if psi.is_finite() {
                    Some(psi.max(0.0))
                } else {
                    None
                }
            })
            .collect()
    }
}
