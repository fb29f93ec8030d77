//! Fluid classification labels

use serde::{Deserialize, Serialize};

/// Fluid class assigned to a depth sample by the rule-based classifier.
///
/// The string forms are an interop contract with the dashboard and export
/// collaborators and must stay exactly `"Background"`, `"Pay Zone"`,
/// `"Potential Reservoir"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluidClass {
    /// No hydrocarbon indication (default / lowest-signal class)
    Background,
    /// Moderate resistivity or gas response
    #[serde(rename = "Pay Zone")]
    PayZone,
    /// Strong resistivity, or gas response in porous rock
    #[serde(rename = "Potential Reservoir")]
    PotentialReservoir,
}

impl FluidClass {
    /// Display string matching the column-value contract.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::PayZone => "Pay Zone",
            Self::PotentialReservoir => "Potential Reservoir",
        }
    }
}

impl Default for FluidClass {
    fn default() -> Self {
        Self::Background
    }
}

impl std::fmt::Display for FluidClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
