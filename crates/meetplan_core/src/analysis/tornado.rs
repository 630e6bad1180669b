//! Tornado sensitivity analysis.
//!
//! Perturbs each parameter of a fixed list by small relative deltas and
//! records the profit swing of every perturbed clone against the base, in a
//! shape a horizontal bar chart can consume without further transformation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use super::Parameter;
use crate::error::AnalysisError;
use crate::model::EventModel;

/// Relative perturbations applied by [`tornado_default`]
pub const DEFAULT_DELTAS: [f64; 2] = [0.10, -0.10];

/// The parameters ranked by the tornado chart
pub const TORNADO_PARAMETERS: [Parameter; 8] = [
    Parameter::ParticipationPrice,
    Parameter::Participants,
    Parameter::PhotosPerAtlete,
    Parameter::ProfitPerPhoto,
    Parameter::GadgetPrice,
    Parameter::Categories,
    Parameter::PodiumsForSpecialityEachCategory,
    Parameter::CoachesSalaryForRound,
];

/// One bar segment of the tornado chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TornadoRecord {
    /// The perturbed parameter
    pub parameter: Parameter,
    /// Relative perturbation that produced this record
    pub delta: f64,
    /// Scenario label, e.g. `+10%`
    pub scenario: String,
    /// Profit of the perturbed clone minus profit of the base model
    pub delta_profit: f64,
}

impl TornadoRecord {
    /// Display label of the perturbed parameter
    #[must_use]
    pub fn parameter_label(&self) -> &'static str {
        self.parameter.label()
    }
}

/// Scenario label for a relative delta, `+10%` style
#[must_use]
pub fn scenario_label(delta: f64) -> String {
    format!("{:+.0}%", delta * 100.0)
}

/// Tornado analysis with the default ±10% perturbations
pub fn tornado_default(base: &EventModel) -> Result<Vec<TornadoRecord>, AnalysisError> {
    tornado(base, &DEFAULT_DELTAS)
}

/// Perturb every tornado parameter by each relative delta and record the
/// profit swing of each clone against the base.
///
/// Output is parameter-major in [`TORNADO_PARAMETERS`] order, one record per
/// delta within each parameter: `parameters x deltas` records in total.
/// Clones are fully independent, so with the `parallel` feature the grid is
/// evaluated with a rayon map; the output order does not change.
pub fn tornado(base: &EventModel, deltas: &[f64]) -> Result<Vec<TornadoRecord>, AnalysisError> {
    let base_profit = base.profit();
    let cells: Vec<(Parameter, f64)> = TORNADO_PARAMETERS
        .iter()
        .flat_map(|&parameter| deltas.iter().map(move |&delta| (parameter, delta)))
        .collect();

    let evaluate = |&(parameter, delta): &(Parameter, f64)| -> Result<TornadoRecord, AnalysisError> {
        let current = parameter.value(base);
        let clone = parameter.replace(base, current * (1.0 + delta))?;
        Ok(TornadoRecord {
            parameter,
            delta,
            scenario: scenario_label(delta),
            delta_profit: clone.profit() - base_profit,
        })
    };

    #[cfg(feature = "parallel")]
    {
        cells.par_iter().map(evaluate).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        cells.iter().map(evaluate).collect()
    }
}
