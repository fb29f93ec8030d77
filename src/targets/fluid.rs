//! Rule-based fluid classifier
//!
//! Assigns one of three fluid classes per depth sample from resistivity,
//! total gas, and composite porosity. Rules are an explicit priority list
//! evaluated top-to-bottom, first match wins:
//!
//! 1. Potential Reservoir: resistivity >= 100 OR (gas >= 50 AND phi >= 0.05)
//! 2. Pay Zone: resistivity >= 20 OR gas >= 10
//! 3. Background (default)
//!
//! Missing cells compare as 0, a conservative default that favours the
//! lowest-signal class. If neither the resistivity nor the gas column exists
//! at all, every row is Background without evaluating the rules.

use crate::config::defaults::{
    GAS_PAY_EUC, GAS_RESERVOIR_EUC, POROSITY_RESERVOIR_MIN, RESISTIVITY_PAY_OHMM,
    RESISTIVITY_RESERVOIR_OHMM,
};
use crate::config::ChannelMap;
use crate::types::{FluidClass, LogTable};

/// Per-row inputs to the rule list, with missing cells already defaulted.
#[derive(Debug, Clone, Copy)]
struct RuleInputs {
    resistivity: f64,
    gas: f64,
    porosity: f64,
}

/// One classification rule: a predicate and the label it assigns.
struct Rule {
    label: FluidClass,
    matches: fn(&RuleInputs) -> bool,
}

fn reservoir_rule(inputs: &RuleInputs) -> bool {
    inputs.resistivity >= RESISTIVITY_RESERVOIR_OHMM
        || (inputs.gas >= GAS_RESERVOIR_EUC && inputs.porosity >= POROSITY_RESERVOIR_MIN)
}

fn pay_zone_rule(inputs: &RuleInputs) -> bool {
    inputs.resistivity >= RESISTIVITY_PAY_OHMM || inputs.gas >= GAS_PAY_EUC
}

/// Priority-ordered rule list. Order is load-bearing: the reservoir rule
/// must win ties against the pay-zone rule.
const RULES: [Rule; 2] = [
    Rule {
        label: FluidClass::PotentialReservoir,
        matches: reservoir_rule,
    },
    Rule {
        label: FluidClass::PayZone,
        matches: pay_zone_rule,
    },
];

fn classify(inputs: &RuleInputs) -> FluidClass {
    for rule in &RULES {
        if (rule.matches)(inputs) {
            return rule.label;
        }
    }
    FluidClass::Background
}

/// Assigns a fluid class per row from resistivity, gas, and porosity.
#[derive(Debug, Clone)]
pub struct FluidClassifier {
    resistivity: String,
    gas: String,
}

impl FluidClassifier {
    pub fn new(channels: &ChannelMap) -> Self {
        Self {
            resistivity: channels.resistivity.clone(),
            gas: channels.gas.clone(),
        }
    }

    /// Compute the fluid-class column.
    ///
    /// `phi_col` names the porosity column to consult, normally the
    /// composite produced by the porosity estimator but any numeric column
    /// works. A deterministic pure function of the table's columns.
    pub fn compute(&self, table: &LogTable, phi_col: &str) -> Vec<FluidClass> {
        let resistivity = table.numeric(&self.resistivity);
        let gas = table.numeric(&self.gas);

        if resistivity.is_none() && gas.is_none() {
            return vec![FluidClass::Background; table.len()];
        }

        let porosity = table.numeric(phi_col);

        (0..table.len())
            .map(|row| {
                let inputs = RuleInputs {
                    resistivity: resistivity.and_then(|cells| cells[row]).unwrap_or(0.0),
                    gas: gas.and_then(|cells| cells[row]).unwrap_or(0.0),
                    porosity: porosity.and_then(|cells| cells[row]).unwrap_or(0.0),
                };
                classify(&inputs)
            })
            .collect()
    }
}
