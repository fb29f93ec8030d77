//! Channel-name contract between the estimators and external collaborators.
//!
//! Column names are fixed strings shared with the loader, dashboard, and
//! export collaborators, but deployments with differently-labelled sensor
//! exports can override any of them from a TOML file. Each field defaults to
//! the reference dataset's header, so a partial file works.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable pointing at a channel-map TOML file.
pub const CONFIG_ENV_VAR: &str = "WELLTARGETS_CONFIG";

/// Default channel-map filename searched in the working directory.
pub const CONFIG_FILENAME: &str = "channel_map.toml";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChannelMapError {
    #[error("failed to read channel map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse channel map {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// Channel Map
// ============================================================================

/// Immutable column-name configuration for one dataset.
///
/// Constructed once (defaults or [`ChannelMap::load`]) and passed into each
/// estimator at construction, so estimators stay independently testable with
/// synthetic channel names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMap {
    // === Input channels ===
    /// Measured depth (m)
    #[serde(default = "default_depth")]
    pub depth: String,
    /// Compensated bulk density (kg/m³)
    #[serde(default = "default_bulk_density")]
    pub bulk_density: String,
    /// Neutron porosity, fraction or percent
    #[serde(default = "default_neutron_porosity")]
    pub neutron_porosity: String,
    /// Phase resistivity (ohm·m)
    #[serde(default = "default_resistivity")]
    pub resistivity: String,
    /// Total gas index (dimensionless)
    #[serde(default = "default_gas")]
    pub gas: String,
    /// Mud weight in (kg/m³)
    #[serde(default = "default_mud_weight")]
    pub mud_weight: String,
    /// Corrected drilling exponent (dimensionless)
    #[serde(default = "default_drilling_exponent")]
    pub drilling_exponent: String,
    /// Pre-computed hydrostatic pressure (Pa), fallback when mud weight is absent
    #[serde(default = "default_hydrostatic_pa")]
    pub hydrostatic_pa: String,

    // === Derived target columns ===
    /// Composite porosity output, fraction in [0, 1]
    #[serde(default = "default_phi_combined")]
    pub phi_combined: String,
    /// Fluid classification output
    #[serde(default = "default_fluid_class")]
    pub fluid_class: String,
    /// Pore pressure output (psi)
    #[serde(default = "default_pore_pressure_psi")]
    pub pore_pressure_psi: String,
}

fn default_depth() -> String {
    "DEPTH".to_string()
}

fn default_bulk_density() -> String {
    "Bulk Density - Compensated kg/m3".to_string()
}

fn default_neutron_porosity() -> String {
    "Neutron Porosity (Sandstone) Euc".to_string()
}

fn default_resistivity() -> String {
    "Resistivity Phase - Corrected - 2MHz ohm.m".to_string()
}

fn default_gas() -> String {
    "Chrom 1 Total Gas Euc".to_string()
}

fn default_mud_weight() -> String {
    "Mud Weight In kg/m3".to_string()
}

fn default_drilling_exponent() -> String {
    "Corrected Drilling Exponent unitless".to_string()
}

fn default_hydrostatic_pa() -> String {
    "P_Hydrostatic".to_string()
}

fn default_phi_combined() -> String {
    "PHI_COMBINED".to_string()
}

fn default_fluid_class() -> String {
    "FLUID_CLASS".to_string()
}

fn default_pore_pressure_psi() -> String {
    "PREDICTED_PORE_PRESSURE_PSI".to_string()
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            bulk_density: default_bulk_density(),
            neutron_porosity: default_neutron_porosity(),
            resistivity: default_resistivity(),
            gas: default_gas(),
            mud_weight: default_mud_weight(),
            drilling_exponent: default_drilling_exponent(),
            hydrostatic_pa: default_hydrostatic_pa(),
            phi_combined: default_phi_combined(),
            fluid_class: default_fluid_class(),
            pore_pressure_psi: default_pore_pressure_psi(),
        }
    }
}

impl ChannelMap {
    /// Load a channel map using the standard search order:
    /// 1. `$WELLTARGETS_CONFIG` environment variable
    /// 2. `./channel_map.toml` in the current working directory
    /// 3. Built-in defaults (reference dataset headers)
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(map) => {
                        info!(path = %p.display(), "Loaded channel map from {CONFIG_ENV_VAR}");
                        return map;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load channel map, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = Path::new(CONFIG_FILENAME);
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(map) => {
                    info!(path = %local.display(), "Loaded channel map from working directory");
                    return map;
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load channel map, using defaults");
                }
            }
        }

        Self::default()
    }

    /// Load a channel map from a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ChannelMapError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ChannelMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ChannelMapError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
