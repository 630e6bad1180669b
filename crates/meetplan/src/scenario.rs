//! Scenario loading for the CLI.
//!
//! Scenario files are YAML documents mirroring the core's raw parameter set.
//! Parsing and coercion happen entirely on this side of the boundary; the
//! core only sees a fully populated [`EventParams`].

use std::fmt;
use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use meetplan_core::model::{EventModel, EventParams, RoundSchedule};
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

/// Raw scenario document as read from disk.
///
/// Mirrors [`EventParams`] field for field, except that round schedules go
/// through a lenient wrapper (see [`ScheduleField`]).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioDoc {
    name: String,
    participants: u32,
    participation_price: f64,
    participation_medal_price: f64,
    gadget_price: f64,
    categories: u32,
    podiums_for_speciality_each_category: u32,
    average_podium_medal_price: f64,
    average_cup_price: f64,
    available_coaches: u32,
    coaches_for_round: ScheduleField,
    coaches_salary_for_round: f64,
    judges_for_round: ScheduleField,
    judges_salary_for_round: f64,
    food_cost: f64,
    photos_per_atlete: f64,
    profit_per_photo: f64,
}

impl ScenarioDoc {
    fn into_params(self) -> EventParams {
        EventParams {
            name: self.name,
            participants: self.participants,
            participation_price: self.participation_price,
            participation_medal_price: self.participation_medal_price,
            gadget_price: self.gadget_price,
            categories: self.categories,
            podiums_for_speciality_each_category: self.podiums_for_speciality_each_category,
            average_podium_medal_price: self.average_podium_medal_price,
            average_cup_price: self.average_cup_price,
            available_coaches: self.available_coaches,
            coaches_for_round: self.coaches_for_round.0,
            coaches_salary_for_round: self.coaches_salary_for_round,
            judges_for_round: self.judges_for_round.0,
            judges_salary_for_round: self.judges_salary_for_round,
            food_cost: self.food_cost,
            photos_per_atlete: self.photos_per_atlete,
            profit_per_photo: self.profit_per_photo,
        }
    }
}

/// Lenient round-schedule field.
///
/// Accepts a plain YAML mapping, or a JSON object given as a string (the
/// original data entry form took schedules as free JSON text). A malformed
/// JSON string falls back to an empty schedule with a warning instead of
/// failing the whole load.
#[derive(Debug, Default)]
struct ScheduleField(RoundSchedule);

impl<'de> Deserialize<'de> for ScheduleField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleFieldVisitor;

        impl<'de> Visitor<'de> for ScheduleFieldVisitor {
            type Value = ScheduleField;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a round to headcount mapping, or a JSON string of one")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = RoundSchedule::new();
                while let Some((round, headcount)) = access.next_entry::<String, u32>()? {
                    schedule.set(round, headcount);
                }
                Ok(ScheduleField(schedule))
            }

            fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Self::Value, E> {
                Ok(ScheduleField(parse_json_schedule(text)))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ScheduleField::default())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ScheduleField::default())
            }
        }

        deserializer.deserialize_any(ScheduleFieldVisitor)
    }
}

/// Parse a schedule out of free JSON text, empty on any malformation
fn parse_json_schedule(text: &str) -> RoundSchedule {
    let parsed: Result<serde_json::Value, _> = serde_json::from_str(text);
    let Ok(serde_json::Value::Object(entries)) = parsed else {
        tracing::warn!("round schedule is not a valid JSON object, using an empty schedule");
        return RoundSchedule::new();
    };

    let mut schedule = RoundSchedule::new();
    for (round, headcount) in entries {
        let Some(headcount) = headcount.as_u64().and_then(|n| u32::try_from(n).ok()) else {
            tracing::warn!(round, "round headcount is not a whole number, using an empty schedule");
            return RoundSchedule::new();
        };
        schedule.set(round, headcount);
    }
    schedule
}

/// Load and validate a scenario file
pub fn load(path: &Path) -> Result<EventModel> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
    let doc: ScenarioDoc = serde_saphyr::from_str(&text)
        .wrap_err_with(|| format!("parsing scenario {}", path.display()))?;
    let model = EventModel::new(doc.into_params()).wrap_err("validating scenario")?;
    tracing::info!(
        event = model.name(),
        participants = model.participants(),
        "scenario loaded"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name: Trofeo Amicizia
participants: 205
participation_price: 10.0
participation_medal_price: 1.4
gadget_price: 1.2
categories: 11
podiums_for_speciality_each_category: 5
average_podium_medal_price: 1.85
average_cup_price: 8.5
available_coaches: 13
coaches_for_round:
  turno1: 12
  turno2: 12
  turno3: 11
  turno4: 12
  turno5: 12
  turno6: 0
coaches_salary_for_round: 8.0
judges_for_round:
  turno4: 1
judges_salary_for_round: 10.0
food_cost: 25.0
photos_per_atlete: 0.55
profit_per_photo: 1.5
";

    fn write_scenario(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_a_full_scenario() {
        let (_dir, path) = write_scenario(SAMPLE);
        let model = load(&path).unwrap();
        assert_eq!(model.name(), "Trofeo Amicizia");
        assert_eq!(model.participants(), 205);
        assert!((model.profit() - 609.875).abs() < 1e-9);

        // Declaration order survives the round trip
        let rounds: Vec<_> = model.params().coaches_for_round.rounds().collect();
        assert_eq!(
            rounds,
            vec!["turno1", "turno2", "turno3", "turno4", "turno5", "turno6"]
        );
    }

    #[test]
    fn string_schedule_is_parsed_as_json() {
        let yaml = "\
participants: 10
coaches_for_round: '{\"r1\": 2, \"r2\": 3}'
coaches_salary_for_round: 8.0
";
        let (_dir, path) = write_scenario(yaml);
        let model = load(&path).unwrap();
        assert_eq!(model.params().coaches_for_round.get("r1"), Some(2));
        assert_eq!(model.total_workers_cost(), 5.0 * 8.0);
    }

    #[test]
    fn malformed_string_schedule_falls_back_to_empty() {
        let yaml = "\
participants: 10
coaches_for_round: 'not a json object'
coaches_salary_for_round: 8.0
";
        let (_dir, path) = write_scenario(yaml);
        let model = load(&path).unwrap();
        assert!(model.params().coaches_for_round.is_empty());
        assert_eq!(model.total_workers_cost(), 0.0);
    }

    #[test]
    fn omitted_fields_default_to_zero() {
        let (_dir, path) = write_scenario("participants: 5\n");
        let model = load(&path).unwrap();
        assert_eq!(model.participants(), 5);
        assert_eq!(model.revenue(), 0.0);
    }

    #[test]
    fn zero_participants_fail_validation() {
        let (_dir, path) = write_scenario("participants: 0\n");
        assert!(load(&path).is_err());
    }
}
