//! Integration tests for the meetplan financial model
//!
//! Tests are organized by topic:
//! - `model` - construction, validation, accounting identities
//! - `kpi` - report catalogue and zero-denominator policies
//! - `analysis` - parametric sweep and tornado analysis
//! - `golden` - regression fixture with known-good values

mod model;

use crate::model::{EventModel, EventParams, RoundSchedule};

/// Scenario mirroring a real spring-meet budget; the regression baseline
/// used throughout the suite.
pub(crate) fn fixture_params() -> EventParams {
    EventParams {
        name: "Trofeo Amicizia".to_string(),
        participants: 205,
        participation_price: 10.0,
        participation_medal_price: 1.4,
        gadget_price: 1.2,
        categories: 11,
        podiums_for_speciality_each_category: 5,
        average_podium_medal_price: 1.85,
        average_cup_price: 8.5,
        available_coaches: 13,
        coaches_for_round: RoundSchedule::from_iter([
            ("turno1", 12),
            ("turno2", 12),
            ("turno3", 11),
            ("turno4", 12),
            ("turno5", 12),
            ("turno6", 0),
        ]),
        coaches_salary_for_round: 8.0,
        judges_for_round: RoundSchedule::from_iter([
            ("turno1", 0),
            ("turno2", 0),
            ("turno3", 0),
            ("turno4", 1),
            ("turno5", 0),
            ("turno6", 0),
        ]),
        judges_salary_for_round: 10.0,
        food_cost: 25.0,
        photos_per_atlete: 0.55,
        profit_per_photo: 1.5,
    }
}

pub(crate) fn fixture_model() -> EventModel {
    EventModel::new(fixture_params()).unwrap()
}
