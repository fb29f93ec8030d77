//! well-targets: target derivation for well-log datasets
//!
//! Fills in the derived target columns a drilling dashboard expects
//! (`PHI_COMBINED`, `FLUID_CLASS`, `PREDICTED_PORE_PRESSURE_PSI`) when an
//! uploaded dataset ships without them.
//!
//! ## Architecture
//!
//! - **Porosity Estimator**: composite porosity from density/neutron channels
//! - **Fluid Classifier**: ordered threshold rules over resistivity, gas, porosity
//! - **Pressure Estimator**: hydrostatic baseline + drilling-exponent anomaly
//! - **Target Engine**: per-column skip-or-compute orchestration in dependency order
//!
//! All estimators are total functions over a [`types::LogTable`]: missing
//! channels degrade to undefined cells, never to errors. The only fallible
//! surface is table construction itself, where the depth channel is validated.

pub mod config;
pub mod targets;
pub mod types;

// Re-export channel configuration
pub use config::ChannelMap;

// Re-export commonly used types
pub use types::{Column, FluidClass, LogTable, TableError};

// Re-export estimators and the orchestrator
pub use targets::{FluidClassifier, PorosityEstimator, PressureEstimator, TargetEngine};
