//! Parametric profit sweep.

use serde::Serialize;

use super::Parameter;
use crate::error::AnalysisError;
use crate::model::EventModel;

/// One evaluated point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// The replacement value the point was evaluated at
    pub value: f64,
    /// Profit of the clone carrying that value
    pub profit: f64,
}

/// Evaluate profit across replacements of a single named parameter.
///
/// Each value produces a structural clone of `base` with the named field
/// replaced; the base model is never mutated. Points come back in input
/// order. An unrecognized name fails with
/// [`AnalysisError::UnknownParameter`].
pub fn profit_sensitivity(
    base: &EventModel,
    param: &str,
    values: &[f64],
) -> Result<Vec<SweepPoint>, AnalysisError> {
    sweep(base, param.parse()?, values)
}

/// Typed variant of [`profit_sensitivity`]
pub fn sweep(
    base: &EventModel,
    param: Parameter,
    values: &[f64],
) -> Result<Vec<SweepPoint>, AnalysisError> {
    values
        .iter()
        .map(|&value| {
            let clone = param.replace(base, value)?;
            Ok(SweepPoint {
                value,
                profit: clone.profit(),
            })
        })
        .collect()
}
