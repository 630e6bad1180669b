//! Sensitivity analysis over the event model.
//!
//! Both entry points work by structural clone-and-recompute: a perturbed copy
//! of the base scenario is built with exactly one field replaced and `profit`
//! is re-evaluated on the copy. There is one profit formula in the whole
//! crate, so sensitivity numbers can never drift out of sync with it, and the
//! base model is never touched.
//!
//! # Parametric sweep
//!
//! ```ignore
//! use meetplan_core::analysis::profit_sensitivity;
//!
//! let points = profit_sensitivity(&model, "participation_price", &[8.0, 10.0, 12.0])?;
//! for point in points {
//!     println!("{} -> {}", point.value, point.profit);
//! }
//! ```
//!
//! # Tornado analysis
//!
//! ```ignore
//! use meetplan_core::analysis::tornado_default;
//!
//! // One record per (parameter, delta) pair, ready for a horizontal bar chart
//! let records = tornado_default(&model)?;
//! ```
//!
//! Every evaluation operates on an independent clone, so with the `parallel`
//! feature (default) the tornado grid is evaluated with a rayon map; output
//! order is identical either way.

mod parameter;
mod sweep;
mod tornado;

pub use parameter::Parameter;
pub use sweep::{SweepPoint, profit_sensitivity, sweep};
pub use tornado::{
    DEFAULT_DELTAS, TORNADO_PARAMETERS, TornadoRecord, scenario_label, tornado, tornado_default,
};
