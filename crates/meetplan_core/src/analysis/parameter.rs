//! Closed registry of sweepable model parameters.
//!
//! Sensitivity analysis replaces one numeric field of the parameter set at a
//! time. The registry maps each recognized field to an accessor/mutator pair;
//! resolving an unrecognized name is a signaled error, never a silent no-op.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, ModelError};
use crate::model::EventModel;

/// A numeric field of [`EventParams`](crate::model::EventParams) that
/// sensitivity analysis may replace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Participants,
    ParticipationPrice,
    ParticipationMedalPrice,
    GadgetPrice,
    Categories,
    PodiumsForSpecialityEachCategory,
    AveragePodiumMedalPrice,
    AverageCupPrice,
    CoachesSalaryForRound,
    JudgesSalaryForRound,
    FoodCost,
    PhotosPerAtlete,
    ProfitPerPhoto,
}

impl Parameter {
    pub const ALL: [Parameter; 13] = [
        Parameter::Participants,
        Parameter::ParticipationPrice,
        Parameter::ParticipationMedalPrice,
        Parameter::GadgetPrice,
        Parameter::Categories,
        Parameter::PodiumsForSpecialityEachCategory,
        Parameter::AveragePodiumMedalPrice,
        Parameter::AverageCupPrice,
        Parameter::CoachesSalaryForRound,
        Parameter::JudgesSalaryForRound,
        Parameter::FoodCost,
        Parameter::PhotosPerAtlete,
        Parameter::ProfitPerPhoto,
    ];

    /// Canonical field name, as written in scenario files
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Participants => "participants",
            Parameter::ParticipationPrice => "participation_price",
            Parameter::ParticipationMedalPrice => "participation_medal_price",
            Parameter::GadgetPrice => "gadget_price",
            Parameter::Categories => "categories",
            Parameter::PodiumsForSpecialityEachCategory => "podiums_for_speciality_each_category",
            Parameter::AveragePodiumMedalPrice => "average_podium_medal_price",
            Parameter::AverageCupPrice => "average_cup_price",
            Parameter::CoachesSalaryForRound => "coaches_salary_for_round",
            Parameter::JudgesSalaryForRound => "judges_salary_for_round",
            Parameter::FoodCost => "food_cost",
            Parameter::PhotosPerAtlete => "photos_per_atlete",
            Parameter::ProfitPerPhoto => "profit_per_photo",
        }
    }

    /// Display label for charts and report tables
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Participants => "Participants",
            Parameter::ParticipationPrice => "Registration price",
            Parameter::ParticipationMedalPrice => "Participation medal cost",
            Parameter::GadgetPrice => "Gadget cost",
            Parameter::Categories => "Categories",
            Parameter::PodiumsForSpecialityEachCategory => "Speciality podiums per category",
            Parameter::AveragePodiumMedalPrice => "Podium medal cost",
            Parameter::AverageCupPrice => "Cup cost",
            Parameter::CoachesSalaryForRound => "Coach salary per round",
            Parameter::JudgesSalaryForRound => "Judge salary per round",
            Parameter::FoodCost => "Food cost",
            Parameter::PhotosPerAtlete => "Photos per athlete",
            Parameter::ProfitPerPhoto => "Profit per photo",
        }
    }

    /// Current value of this parameter on a model
    #[must_use]
    pub fn value(&self, model: &EventModel) -> f64 {
        let params = model.params();
        match self {
            Parameter::Participants => f64::from(params.participants),
            Parameter::ParticipationPrice => params.participation_price,
            Parameter::ParticipationMedalPrice => params.participation_medal_price,
            Parameter::GadgetPrice => params.gadget_price,
            Parameter::Categories => f64::from(params.categories),
            Parameter::PodiumsForSpecialityEachCategory => {
                f64::from(params.podiums_for_speciality_each_category)
            }
            Parameter::AveragePodiumMedalPrice => params.average_podium_medal_price,
            Parameter::AverageCupPrice => params.average_cup_price,
            Parameter::CoachesSalaryForRound => params.coaches_salary_for_round,
            Parameter::JudgesSalaryForRound => params.judges_salary_for_round,
            Parameter::FoodCost => params.food_cost,
            Parameter::PhotosPerAtlete => params.photos_per_atlete,
            Parameter::ProfitPerPhoto => params.profit_per_photo,
        }
    }

    /// Structural clone of `model` with this one field replaced.
    ///
    /// Count-valued parameters round the replacement to the nearest whole
    /// count; `participants` additionally clamps at 1 so a relative
    /// perturbation can never produce an invalid model. The clone goes back
    /// through validation, so a non-finite replacement still fails.
    pub fn replace(&self, model: &EventModel, value: f64) -> Result<EventModel, ModelError> {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteInput {
                field: self.name(),
                value,
            });
        }
        let mut params = model.params().clone();
        match self {
            Parameter::Participants => params.participants = round_count(value).max(1),
            Parameter::ParticipationPrice => params.participation_price = value,
            Parameter::ParticipationMedalPrice => params.participation_medal_price = value,
            Parameter::GadgetPrice => params.gadget_price = value,
            Parameter::Categories => params.categories = round_count(value),
            Parameter::PodiumsForSpecialityEachCategory => {
                params.podiums_for_speciality_each_category = round_count(value);
            }
            Parameter::AveragePodiumMedalPrice => params.average_podium_medal_price = value,
            Parameter::AverageCupPrice => params.average_cup_price = value,
            Parameter::CoachesSalaryForRound => params.coaches_salary_for_round = value,
            Parameter::JudgesSalaryForRound => params.judges_salary_for_round = value,
            Parameter::FoodCost => params.food_cost = value,
            Parameter::PhotosPerAtlete => params.photos_per_atlete = value,
            Parameter::ProfitPerPhoto => params.profit_per_photo = value,
        }
        EventModel::new(params)
    }
}

/// Round a finite replacement to a non-negative whole count
fn round_count(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

impl FromStr for Parameter {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|param| param.name() == s)
            .ok_or_else(|| AnalysisError::UnknownParameter(s.to_string()))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
