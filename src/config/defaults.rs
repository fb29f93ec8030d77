//! Fixed calibration constants for the target estimators.
//!
//! Centralises the magic numbers the estimators depend on. These are design
//! constants calibrated against the reference demo dataset, not per-call
//! knobs; changing them changes the meaning of the derived columns.

// ============================================================================
// Porosity Estimator
// ============================================================================

/// Matrix density for the density-porosity transform (kg/m³).
///
/// Granite/sandstone matrix, ~2650 kg/m³.
pub const MATRIX_DENSITY_KGM3: f64 = 2650.0;

/// Pore-fluid density for the density-porosity transform (kg/m³). Water.
pub const FLUID_DENSITY_KGM3: f64 = 1000.0;

/// Neutron readings above this are interpreted as percent and divided by 100.
///
/// Readings in (1.0, 1.5] are ambiguous and treated as fractions.
pub const NEUTRON_PERCENT_THRESHOLD: f64 = 1.5;

// ============================================================================
// Fluid Classifier
// ============================================================================

/// Resistivity at or above this alone marks a potential reservoir (ohm·m).
pub const RESISTIVITY_RESERVOIR_OHMM: f64 = 100.0;

/// Gas index for the reservoir rule (combined with the porosity floor).
pub const GAS_RESERVOIR_EUC: f64 = 50.0;

/// Minimum porosity for the gas-driven reservoir rule (fraction).
pub const POROSITY_RESERVOIR_MIN: f64 = 0.05;

/// Resistivity at or above this marks a pay zone (ohm·m).
pub const RESISTIVITY_PAY_OHMM: f64 = 20.0;

/// Gas index at or above this marks a pay zone.
pub const GAS_PAY_EUC: f64 = 10.0;

// ============================================================================
// Pressure Estimator
// ============================================================================

/// Standard gravity (m/s²).
pub const GRAVITY_MS2: f64 = 9.80665;

/// Pascals to psi.
pub const PA_TO_PSI: f64 = 0.000_145_037_737_730_209_23;

/// Fallback mud density when a mud-weight cell is missing (kg/m³). Water.
pub const WATER_DENSITY_KGM3: f64 = 1000.0;

/// Nominal corrected drilling exponent; deviation below it raises pressure.
pub const NOMINAL_DRILLING_EXPONENT: f64 = 1.0;

/// Anomaly scale: psi per unit of exponent deviation (1000 psi per 0.1).
pub const EXPONENT_ANOMALY_SCALE_PSI: f64 = 10_000.0;
