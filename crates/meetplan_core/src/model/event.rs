//! The event model: one immutable, fully specified tournament scenario.
//!
//! [`EventParams`] is the raw parameter set supplied by the input layer;
//! [`EventModel`] validates it once and exposes every derived financial
//! metric as a pure method. What-if variants are produced by cloning with a
//! field replaced (see [`crate::analysis::Parameter`]), never by mutation, so
//! a base scenario survives any amount of analysis untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schedule::{RoundSchedule, round_union};
use crate::error::ModelError;

/// Upper bound for the break-even search.
///
/// Profit staying negative for every participant count up to this cap is
/// reported as [`BreakEven::Unreachable`]. Three orders of magnitude beyond
/// any realistic tournament headcount.
pub const BREAK_EVEN_SEARCH_CAP: u32 = 1_000_000;

/// Raw parameter set for one event scenario.
///
/// This is the input contract with the scenario-collection layer: plain
/// fields, serde on both sides, no validation. Construct an [`EventModel`]
/// to validate and compute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventParams {
    /// Event name, used by the report header only
    pub name: String,
    pub participants: u32,
    pub participation_price: f64,
    pub participation_medal_price: f64,
    pub gadget_price: f64,
    /// Award categories, each closed by a cup ceremony
    pub categories: u32,
    /// Per-speciality podiums awarded inside each category
    pub podiums_for_speciality_each_category: u32,
    pub average_podium_medal_price: f64,
    pub average_cup_price: f64,
    /// Coaches on the club roster; informational, not a cost driver
    pub available_coaches: u32,
    pub coaches_for_round: RoundSchedule,
    pub coaches_salary_for_round: f64,
    /// External judges pool, disjoint from the coaches pool
    pub judges_for_round: RoundSchedule,
    pub judges_salary_for_round: f64,
    pub food_cost: f64,
    /// Expected photos sold per registered athlete
    pub photos_per_atlete: f64,
    pub profit_per_photo: f64,
}

impl EventParams {
    fn float_fields(&self) -> [(&'static str, f64); 10] {
        [
            ("participation_price", self.participation_price),
            ("participation_medal_price", self.participation_medal_price),
            ("gadget_price", self.gadget_price),
            ("average_podium_medal_price", self.average_podium_medal_price),
            ("average_cup_price", self.average_cup_price),
            ("coaches_salary_for_round", self.coaches_salary_for_round),
            ("judges_salary_for_round", self.judges_salary_for_round),
            ("food_cost", self.food_cost),
            ("photos_per_atlete", self.photos_per_atlete),
            ("profit_per_photo", self.profit_per_photo),
        ]
    }
}

/// Outcome of the break-even search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakEven {
    /// Profit first reaches zero at this participant count
    Participants(u32),
    /// Profit stays negative for every count up to [`BREAK_EVEN_SEARCH_CAP`]
    Unreachable,
}

impl BreakEven {
    /// Numeric view for the flat metric mapping; `Unreachable` maps to
    /// positive infinity.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            BreakEven::Participants(count) => f64::from(*count),
            BreakEven::Unreachable => f64::INFINITY,
        }
    }

    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BreakEven::Unreachable)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Participants(count) => write!(f, "{count}"),
            BreakEven::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// An immutable, validated event scenario.
///
/// One instance is one fully specified what-if. Every metric below is a pure
/// function of the stored parameters: no hidden state, no I/O, deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct EventModel {
    params: EventParams,
}

impl EventModel {
    /// Validate a raw parameter set into a model.
    ///
    /// Fails on a zero participant count and on any non-finite floating-point
    /// input; both are caller mistakes that must surface at construction
    /// time, never inside a metric.
    pub fn new(params: EventParams) -> Result<Self, ModelError> {
        if params.participants == 0 {
            return Err(ModelError::InvalidParticipantCount(params.participants));
        }
        for (field, value) in params.float_fields() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteInput { field, value });
            }
        }
        Ok(Self { params })
    }

    /// The validated parameter set
    #[must_use]
    pub fn params(&self) -> &EventParams {
        &self.params
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.params.name
    }

    #[must_use]
    pub fn participants(&self) -> u32 {
        self.params.participants
    }

    // Internal clone used by the discrete derivatives and the break-even
    // search. Skips validation: every formula below is well defined at zero
    // participants (the participant-scaled terms vanish), and the clone never
    // leaves this module.
    fn with_participants(&self, participants: u32) -> Self {
        Self {
            params: EventParams {
                participants,
                ..self.params.clone()
            },
        }
    }

    // =========================================================================
    // Revenue
    // =========================================================================

    /// Registration fee income
    #[must_use]
    pub fn registration_sales(&self) -> f64 {
        f64::from(self.params.participants) * self.params.participation_price
    }

    /// Expected photo income across all registered athletes
    #[must_use]
    pub fn photo_sales(&self) -> f64 {
        f64::from(self.params.participants) * self.params.photos_per_atlete * self.params.profit_per_photo
    }

    #[must_use]
    pub fn revenue(&self) -> f64 {
        self.registration_sales() + self.photo_sales()
    }

    // =========================================================================
    // Costs
    // =========================================================================

    /// One participation medal per registered athlete
    #[must_use]
    pub fn participation_medals_cost(&self) -> f64 {
        f64::from(self.params.participants) * self.params.participation_medal_price
    }

    /// One gadget per registered athlete
    #[must_use]
    pub fn gadget_cost(&self) -> f64 {
        f64::from(self.params.participants) * self.params.gadget_price
    }

    /// Award hardware: every speciality podium in every category hands out one
    /// medal set and one cup. Cups scale with podium slots, not participants.
    #[must_use]
    pub fn total_podium_cost(&self) -> f64 {
        f64::from(self.params.categories)
            * f64::from(self.params.podiums_for_speciality_each_category)
            * (self.params.average_podium_medal_price + self.params.average_cup_price)
    }

    /// Staffing cost summed over the union of rounds either pool is scheduled
    /// for; a round missing from one pool contributes zero headcount there.
    #[must_use]
    pub fn total_workers_cost(&self) -> f64 {
        round_union(&self.params.coaches_for_round, &self.params.judges_for_round)
            .iter()
            .map(|round| {
                f64::from(self.params.coaches_for_round.headcount(round))
                    * self.params.coaches_salary_for_round
                    + f64::from(self.params.judges_for_round.headcount(round))
                        * self.params.judges_salary_for_round
            })
            .sum()
    }

    /// Costs that scale with event structure and participants rather than
    /// staffing
    #[must_use]
    pub fn variable_costs(&self) -> f64 {
        self.participation_medals_cost() + self.gadget_cost() + self.total_podium_cost() + self.params.food_cost
    }

    #[must_use]
    pub fn total_costs(&self) -> f64 {
        self.variable_costs() + self.total_workers_cost()
    }

    // =========================================================================
    // Profit and derived metrics
    // =========================================================================

    #[must_use]
    pub fn profit(&self) -> f64 {
        self.revenue() - self.total_costs()
    }

    /// Profit as a share of revenue; 0 when there is no revenue, since margin
    /// is meaningless without revenue but must not fault.
    #[must_use]
    pub fn profit_margin_pct(&self) -> f64 {
        let revenue = self.revenue();
        if revenue == 0.0 {
            0.0
        } else {
            self.profit() / revenue
        }
    }

    /// Discrete marginal profit of one additional participant
    #[must_use]
    pub fn dprofit_dparticipants(&self) -> f64 {
        self.with_participants(self.params.participants + 1).profit() - self.profit()
    }

    /// Discrete second difference of profit in the participant count.
    /// Positive signals economies of scale, negative diminishing returns.
    #[must_use]
    pub fn d2profit_dparticipants2(&self) -> f64 {
        self.with_participants(self.params.participants + 1)
            .dprofit_dparticipants()
            - self.dprofit_dparticipants()
    }

    /// Smallest participant count with non-negative profit.
    ///
    /// Profit is affine in the participant count under this cost structure,
    /// so the search is a monotonic bisection over
    /// `0..=BREAK_EVEN_SEARCH_CAP`; a non-positive marginal contribution can
    /// never climb out of negative territory and short-circuits to
    /// [`BreakEven::Unreachable`].
    #[must_use]
    pub fn break_even_participants(&self) -> BreakEven {
        if self.with_participants(0).profit() >= 0.0 {
            return BreakEven::Participants(0);
        }
        if self.dprofit_dparticipants() <= 0.0 {
            return BreakEven::Unreachable;
        }
        let mut low = 0_u32;
        let mut high = BREAK_EVEN_SEARCH_CAP;
        if self.with_participants(high).profit() < 0.0 {
            return BreakEven::Unreachable;
        }
        // invariant: profit(low) < 0 <= profit(high)
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if self.with_participants(mid).profit() >= 0.0 {
                high = mid;
            } else {
                low = mid;
            }
        }
        BreakEven::Participants(high)
    }

    #[must_use]
    pub fn average_revenue_per_participant(&self) -> f64 {
        self.revenue() / f64::from(self.params.participants)
    }

    #[must_use]
    pub fn cost_per_participant(&self) -> f64 {
        self.total_costs() / f64::from(self.params.participants)
    }

    /// Per-participant revenue left after variable costs, available to cover
    /// staffing
    #[must_use]
    pub fn contribution_margin_per_participant(&self) -> f64 {
        (self.revenue() - self.variable_costs()) / f64::from(self.params.participants)
    }

    /// Variable over staffing cost; positive infinity when the event runs
    /// with zero staffing cost.
    #[must_use]
    pub fn variable_to_fixed_ratio(&self) -> f64 {
        let workers = self.total_workers_cost();
        if workers == 0.0 {
            f64::INFINITY
        } else {
            self.variable_costs() / workers
        }
    }

    /// Photo income share of revenue; 0 when there is no revenue
    #[must_use]
    pub fn photo_revenue_ratio(&self) -> f64 {
        let revenue = self.revenue();
        if revenue == 0.0 {
            0.0
        } else {
            self.photo_sales() / revenue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_params() -> EventParams {
        EventParams {
            participants: 10,
            ..EventParams::default()
        }
    }

    #[test]
    fn break_even_zero_when_no_fixed_costs() {
        let model = EventModel::new(bare_params()).unwrap();
        assert_eq!(model.break_even_participants(), BreakEven::Participants(0));
    }

    #[test]
    fn break_even_unreachable_with_negative_margin() {
        let model = EventModel::new(EventParams {
            gadget_price: 5.0,
            food_cost: 10.0,
            ..bare_params()
        })
        .unwrap();
        assert!(model.dprofit_dparticipants() < 0.0);
        assert_eq!(model.break_even_participants(), BreakEven::Unreachable);
    }

    #[test]
    fn break_even_unreachable_with_flat_margin() {
        // No per-participant economics at all, just a fixed cost
        let model = EventModel::new(EventParams {
            food_cost: 10.0,
            ..bare_params()
        })
        .unwrap();
        assert_eq!(model.dprofit_dparticipants(), 0.0);
        assert_eq!(model.break_even_participants(), BreakEven::Unreachable);
    }

    #[test]
    fn break_even_brackets_the_sign_change() {
        let model = EventModel::new(EventParams {
            participation_price: 7.0,
            food_cost: 100.0,
            ..bare_params()
        })
        .unwrap();
        // 100 / 7 = 14.28..., so 15 participants are needed
        let BreakEven::Participants(at) = model.break_even_participants() else {
            panic!("expected a finite break-even");
        };
        assert_eq!(at, 15);
        assert!(model.with_participants(at).profit() >= 0.0);
        assert!(model.with_participants(at - 1).profit() < 0.0);
    }
}
