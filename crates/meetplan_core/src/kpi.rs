//! Key-performance-indicator catalogue for the event report.
//!
//! Each [`Kpi`] names one derived metric of the model and knows its display
//! label and unit. [`kpi_report`] evaluates the whole catalogue into the flat
//! label → value mapping the report layer consumes verbatim; the core only
//! produces raw numbers, formatting is a presentation concern.

use serde::Serialize;

use crate::model::EventModel;

/// Rendering hint for a KPI value. The core never formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiUnit {
    /// A monetary amount
    Money,
    /// A share of something, rendered as a percentage
    Percent,
    /// A dimensionless ratio
    Ratio,
    /// A participant count; may be infinite (unreachable break-even)
    Count,
}

/// Every derived metric the report exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kpi {
    Revenue,
    TotalCosts,
    Profit,
    ProfitMargin,
    MarginalProfitPerParticipant,
    MarginalProfitSecondDifference,
    BreakEvenParticipants,
    AverageRevenuePerParticipant,
    CostPerParticipant,
    ContributionMarginPerParticipant,
    VariableToFixedRatio,
    PhotoRevenueRatio,
}

impl Kpi {
    /// Headline figures, shown first on the report
    pub const PRIMARY: [Kpi; 4] = [Kpi::Revenue, Kpi::TotalCosts, Kpi::Profit, Kpi::ProfitMargin];

    /// Supporting metrics, shown below the headline block
    pub const SECONDARY: [Kpi; 8] = [
        Kpi::MarginalProfitPerParticipant,
        Kpi::MarginalProfitSecondDifference,
        Kpi::BreakEvenParticipants,
        Kpi::AverageRevenuePerParticipant,
        Kpi::CostPerParticipant,
        Kpi::ContributionMarginPerParticipant,
        Kpi::VariableToFixedRatio,
        Kpi::PhotoRevenueRatio,
    ];

    /// Full catalogue in report order
    pub fn all() -> impl Iterator<Item = Kpi> {
        Self::PRIMARY.into_iter().chain(Self::SECONDARY)
    }

    /// Human-readable label for report tables
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Kpi::Revenue => "Revenue",
            Kpi::TotalCosts => "Total costs",
            Kpi::Profit => "Profit",
            Kpi::ProfitMargin => "Profit margin",
            Kpi::MarginalProfitPerParticipant => "Marginal profit per participant",
            Kpi::MarginalProfitSecondDifference => "Marginal profit second difference",
            Kpi::BreakEvenParticipants => "Break-even participants",
            Kpi::AverageRevenuePerParticipant => "Average revenue per participant",
            Kpi::CostPerParticipant => "Cost per participant",
            Kpi::ContributionMarginPerParticipant => "Contribution margin per participant",
            Kpi::VariableToFixedRatio => "Variable / fixed cost ratio",
            Kpi::PhotoRevenueRatio => "Photo revenue share",
        }
    }

    #[must_use]
    pub fn unit(&self) -> KpiUnit {
        match self {
            Kpi::Revenue
            | Kpi::TotalCosts
            | Kpi::Profit
            | Kpi::MarginalProfitPerParticipant
            | Kpi::MarginalProfitSecondDifference
            | Kpi::AverageRevenuePerParticipant
            | Kpi::CostPerParticipant
            | Kpi::ContributionMarginPerParticipant => KpiUnit::Money,
            Kpi::ProfitMargin | Kpi::PhotoRevenueRatio => KpiUnit::Percent,
            Kpi::VariableToFixedRatio => KpiUnit::Ratio,
            Kpi::BreakEvenParticipants => KpiUnit::Count,
        }
    }

    /// Evaluate this metric against one scenario
    #[must_use]
    pub fn evaluate(&self, model: &EventModel) -> f64 {
        match self {
            Kpi::Revenue => model.revenue(),
            Kpi::TotalCosts => model.total_costs(),
            Kpi::Profit => model.profit(),
            Kpi::ProfitMargin => model.profit_margin_pct(),
            Kpi::MarginalProfitPerParticipant => model.dprofit_dparticipants(),
            Kpi::MarginalProfitSecondDifference => model.d2profit_dparticipants2(),
            Kpi::BreakEvenParticipants => model.break_even_participants().as_f64(),
            Kpi::AverageRevenuePerParticipant => model.average_revenue_per_participant(),
            Kpi::CostPerParticipant => model.cost_per_participant(),
            Kpi::ContributionMarginPerParticipant => model.contribution_margin_per_participant(),
            Kpi::VariableToFixedRatio => model.variable_to_fixed_ratio(),
            Kpi::PhotoRevenueRatio => model.photo_revenue_ratio(),
        }
    }
}

/// One row of the flat label → value metric mapping
#[derive(Debug, Clone, Serialize)]
pub struct KpiRecord {
    pub kpi: Kpi,
    pub label: &'static str,
    pub unit: KpiUnit,
    pub value: f64,
}

/// Evaluate the full KPI catalogue against one scenario.
///
/// Row order matches the report: the primary block, then the secondary block.
#[must_use]
pub fn kpi_report(model: &EventModel) -> Vec<KpiRecord> {
    Kpi::all()
        .map(|kpi| KpiRecord {
            kpi,
            label: kpi.label(),
            unit: kpi.unit(),
            value: kpi.evaluate(model),
        })
        .collect()
}
