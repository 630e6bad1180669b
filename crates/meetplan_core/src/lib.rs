//! Financial model for a recurring multi-round gymnastics tournament.
//!
//! This crate turns a fully specified set of event parameters (prices,
//! headcounts, per-round staffing schedules) into financial KPIs, and
//! re-evaluates systematically perturbed clones of the scenario for
//! sensitivity analysis. It supports:
//! - An immutable, validated scenario ([`model::EventModel`]) exposing every
//!   derived metric (revenue, costs, profit, discrete marginal profit,
//!   break-even search, per-participant ratios) as a pure method
//! - A KPI catalogue ([`kpi`]) producing the flat label → value mapping the
//!   report layer consumes
//! - Parametric sweep and tornado analysis ([`analysis`]) by structural
//!   clone-and-recompute, so sensitivity can never drift from the one
//!   canonical profit formula
//!
//! # Example
//!
//! ```ignore
//! use meetplan_core::analysis::tornado_default;
//! use meetplan_core::kpi::kpi_report;
//! use meetplan_core::model::{EventModel, EventParams, RoundSchedule};
//!
//! let model = EventModel::new(EventParams {
//!     participants: 205,
//!     participation_price: 10.0,
//!     coaches_for_round: RoundSchedule::from_iter([("r1", 12), ("r2", 12)]),
//!     coaches_salary_for_round: 8.0,
//!     ..EventParams::default()
//! })?;
//!
//! for record in kpi_report(&model) {
//!     println!("{}: {}", record.label, record.value);
//! }
//! let tornado = tornado_default(&model)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod kpi;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Parameter, profit_sensitivity, tornado, tornado_default};
pub use error::{AnalysisError, ModelError};
pub use kpi::{Kpi, KpiRecord, kpi_report};
pub use model::{BreakEven, EventModel, EventParams, RoundSchedule};
