//! Tests for model construction, validation, and accounting identities

use rand::Rng;

use super::{fixture_model, fixture_params};
use crate::error::ModelError;
use crate::model::{EventModel, EventParams, RoundSchedule};

#[test]
fn zero_participants_fails_construction() {
    let err = EventModel::new(EventParams {
        participants: 0,
        ..fixture_params()
    })
    .unwrap_err();
    assert_eq!(err, ModelError::InvalidParticipantCount(0));
}

#[test]
fn one_participant_is_the_valid_boundary() {
    let model = EventModel::new(EventParams {
        participants: 1,
        ..fixture_params()
    })
    .unwrap();
    assert_eq!(model.participants(), 1);
}

#[test]
fn non_finite_input_fails_construction() {
    let err = EventModel::new(EventParams {
        food_cost: f64::NAN,
        ..fixture_params()
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ModelError::NonFiniteInput {
            field: "food_cost",
            ..
        }
    ));

    let err = EventModel::new(EventParams {
        participation_price: f64::INFINITY,
        ..fixture_params()
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ModelError::NonFiniteInput {
            field: "participation_price",
            ..
        }
    ));
}

#[test]
fn profit_is_revenue_minus_total_costs() {
    let model = fixture_model();
    assert_eq!(model.profit(), model.revenue() - model.total_costs());
}

#[test]
fn total_costs_split_into_variable_and_workers() {
    let model = fixture_model();
    assert_eq!(
        model.total_costs(),
        model.variable_costs() + model.total_workers_cost()
    );
}

#[test]
fn workers_cost_sums_over_the_union_of_rounds() {
    // Coaches scheduled for a round the judges never see, and vice versa
    let model = EventModel::new(EventParams {
        participants: 10,
        coaches_for_round: RoundSchedule::from_iter([("morning", 3)]),
        coaches_salary_for_round: 8.0,
        judges_for_round: RoundSchedule::from_iter([("evening", 2)]),
        judges_salary_for_round: 10.0,
        ..EventParams::default()
    })
    .unwrap();
    // morning: 3 coaches + 0 judges, evening: 0 coaches + 2 judges
    assert_eq!(model.total_workers_cost(), 3.0 * 8.0 + 2.0 * 10.0);
}

#[test]
fn revenue_never_decreases_in_participants() {
    let model = fixture_model();
    for step in 1..50_u32 {
        let bigger = EventModel::new(EventParams {
            participants: model.participants() + step,
            ..fixture_params()
        })
        .unwrap();
        assert!(bigger.revenue() >= model.revenue());
    }
}

#[test]
fn marginal_profit_matches_manual_difference() {
    let model = fixture_model();
    let plus_one = EventModel::new(EventParams {
        participants: 206,
        ..fixture_params()
    })
    .unwrap();
    assert_eq!(
        model.dprofit_dparticipants(),
        plus_one.profit() - model.profit()
    );
}

#[test]
fn accounting_identities_hold_for_random_scenarios() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let params = EventParams {
            name: String::new(),
            participants: rng.random_range(1..=500),
            participation_price: rng.random_range(0.0..50.0),
            participation_medal_price: rng.random_range(0.0..5.0),
            gadget_price: rng.random_range(0.0..5.0),
            categories: rng.random_range(0..=20),
            podiums_for_speciality_each_category: rng.random_range(0..=8),
            average_podium_medal_price: rng.random_range(0.0..5.0),
            average_cup_price: rng.random_range(0.0..20.0),
            available_coaches: rng.random_range(0..=30),
            coaches_for_round: RoundSchedule::from_iter([
                ("r1", rng.random_range(0..=15)),
                ("r2", rng.random_range(0..=15)),
            ]),
            coaches_salary_for_round: rng.random_range(0.0..20.0),
            judges_for_round: RoundSchedule::from_iter([("r2", rng.random_range(0..=3))]),
            judges_salary_for_round: rng.random_range(0.0..30.0),
            food_cost: rng.random_range(0.0..100.0),
            photos_per_atlete: rng.random_range(0.0..2.0),
            profit_per_photo: rng.random_range(0.0..3.0),
        };
        let model = EventModel::new(params).unwrap();
        assert_eq!(model.profit(), model.revenue() - model.total_costs());
        assert_eq!(
            model.total_costs(),
            model.variable_costs() + model.total_workers_cost()
        );
        // Non-negative per-participant economics: one more athlete never
        // shrinks revenue
        let bigger = EventModel::new(EventParams {
            participants: model.participants() + 1,
            ..model.params().clone()
        })
        .unwrap();
        assert!(bigger.revenue() >= model.revenue());
    }
}
