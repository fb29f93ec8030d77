//! Composite porosity estimator
//!
//! Blends up to two independent porosity proxies per depth sample:
//!
//! - Density porosity from compensated bulk density (Wyllie-style):
//!   `phi = (rho_matrix - rho_bulk) / (rho_matrix - rho_fluid)`
//! - Neutron porosity, normalised from percent to fraction when needed
//!
//! Each estimate is clamped to [0, 1] before averaging. Rows missing one of
//! the two inputs still yield a value from the other (ignore-missing mean,
//! not propagate-missing). Rows or tables missing both degrade to undefined.

use crate::config::defaults::{
    FLUID_DENSITY_KGM3, MATRIX_DENSITY_KGM3, NEUTRON_PERCENT_THRESHOLD,
};
use crate::config::ChannelMap;
use crate::types::LogTable;

/// Porosity from bulk density (kg/m³), clamped to [0, 1].
///
/// The division is guarded in general even though the fixed calibration
/// densities cannot produce a zero denominator: any non-finite result
/// becomes undefined rather than an infinity.
pub fn phi_from_density(rho_bulk: f64) -> Option<f64> {
    let phi = (MATRIX_DENSITY_KGM3 - rho_bulk) / (MATRIX_DENSITY_KGM3 - FLUID_DENSITY_KGM3);
    if phi.is_finite() {
        Some(phi.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Normalise a neutron reading to a porosity fraction in [0, 1].
///
/// Readings above the percent threshold are interpreted as percent.
fn neutron_fraction(value: f64) -> f64 {
    let fraction = if value > NEUTRON_PERCENT_THRESHOLD {
        value / 100.0
    } else {
        value
    };
    fraction.clamp(0.0, 1.0)
}

/// Derives one composite porosity value per row from the available
/// density/neutron channels.
#[derive(Debug, Clone)]
pub struct PorosityEstimator {
    bulk_density: String,
    neutron_porosity: String,
}

impl PorosityEstimator {
    pub fn new(channels: &ChannelMap) -> Self {
        Self {
            bulk_density: channels.bulk_density.clone(),
            neutron_porosity: channels.neutron_porosity.clone(),
        }
    }

    /// Compute the composite porosity column.
    ///
    /// Total over any table: missing channels degrade to undefined cells,
    /// never to an error.
    pub fn compute(&self, table: &LogTable) -> Vec<Option<f64>> {
        let density = table.numeric(&self.bulk_density);
        let neutron = table.numeric(&self.neutron_porosity);

        if density.is_none() && neutron.is_none() {
            return vec![None; table.len()];
        }

        (0..table.len())
            .map(|row| {
                let from_density = density.and_then(|cells| cells[row]).and_then(phi_from_density);
                let from_neutron = neutron.and_then(|cells| cells[row]).map(neutron_fraction);

                match (from_density, from_neutron) {
                    (Some(a), Some(b)) => Some((a + b) / 2.0),
                    (Some(a), None) => Some(a),
                    (None, Some(b)) => Some(b),
                    (None, None) => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> PorosityEstimator {
        PorosityEstimator::new(&ChannelMap::default())
    }

    fn table_with(depth: Vec<f64>) -> LogTable {
        LogTable::new(depth).expect("valid depth")
    }

    #[test]
    fn test_density_endpoints() {
        // rho_bulk at matrix density -> zero porosity, at fluid density -> unity
        assert_eq!(phi_from_density(2650.0), Some(0.0));
        assert_eq!(phi_from_density(1000.0), Some(1.0));
    }

    #[test]
    fn test_density_clamped_to_unit_interval() {
        // Lighter than fluid -> raw phi > 1, denser than matrix -> raw phi < 0
        assert_eq!(phi_from_density(500.0), Some(1.0));
        assert_eq!(phi_from_density(3000.0), Some(0.0));
    }

    #[test]
    fn test_neutron_percent_heuristic() {
        let channels = ChannelMap::default();
        let mut table = table_with(vec![100.0, 200.0, 300.0]);
        table
            .insert_numeric(&channels.neutron_porosity, vec![25.0, 0.25, 1.5])
            .expect("insert");

        let phi = estimator().compute(&table);
        assert_eq!(phi[0], Some(0.25)); // percent, divided by 100
        assert_eq!(phi[1], Some(0.25)); // already a fraction
        assert_eq!(phi[2], Some(1.0)); // 1.5 is ambiguous: fraction, clamped
    }

    #[test]
    fn test_composite_is_mean_of_both_estimates() {
        let channels = ChannelMap::default();
        let mut table = table_with(vec![100.0]);
        // (2650 - 2155) / 1650 = 0.3
        table
            .insert_numeric(&channels.bulk_density, vec![2155.0])
            .expect("insert");
        table
            .insert_numeric(&channels.neutron_porosity, vec![0.2])
            .expect("insert");

        let phi = estimator().compute(&table);
        let value = phi[0].expect("defined");
        assert!((value - 0.25).abs() < 1e-12, "expected 0.25, got {value}");
    }

    #[test]
    fn test_row_missing_one_input_uses_the_other() {
        let channels = ChannelMap::default();
        let mut table = table_with(vec![100.0, 200.0, 300.0]);
        table
            .insert_numeric_cells(&channels.bulk_density, vec![Some(2155.0), None, None])
            .expect("insert");
        table
            .insert_numeric_cells(&channels.neutron_porosity, vec![None, Some(0.2), None])
            .expect("insert");

        let phi = estimator().compute(&table);
        assert_eq!(phi[0], Some(0.3));
        assert_eq!(phi[1], Some(0.2));
        assert_eq!(phi[2], None);
    }

    #[test]
    fn test_no_input_columns_yields_all_undefined() {
        let table = table_with(vec![100.0, 200.0]);
        let phi = estimator().compute(&table);
        assert_eq!(phi, vec![None, None]);
    }

    #[test]
    fn test_empty_table() {
        let table = table_with(Vec::new());
        assert!(estimator().compute(&table).is_empty());
    }

    #[test]
    fn test_output_stays_in_unit_interval() {
        let channels = ChannelMap::default();
        let mut table = table_with(vec![100.0, 200.0, 300.0, 400.0]);
        table
            .insert_numeric(&channels.bulk_density, vec![400.0, 2700.0, 1825.0, 2650.0])
            .expect("insert");
        table
            .insert_numeric(&channels.neutron_porosity, vec![95.0, 0.0, 0.5, 0.0])
            .expect("insert");

        for value in estimator().compute(&table).into_iter().flatten() {
            assert!((0.0..=1.0).contains(&value), "porosity out of range: {value}");
        }
    }
}
