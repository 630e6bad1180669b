//! Per-round staffing schedules
//!
//! A round is one scheduled shift of the event, identified by an arbitrary
//! label. Staffing cost sums over all rounds, so computation never depends on
//! label order, but the order rounds were declared in is kept for display.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered mapping from round label to headcount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSchedule {
    entries: Vec<(String, u32)>,
}

impl RoundSchedule {
    /// Create an empty schedule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headcount for a round, replacing any existing entry
    pub fn set(&mut self, round: impl Into<String>, headcount: u32) {
        let round = round.into();
        match self.entries.iter_mut().find(|entry| entry.0 == round) {
            Some(entry) => entry.1 = headcount,
            None => self.entries.push((round, headcount)),
        }
    }

    /// Headcount for a round, if the round is scheduled
    #[must_use]
    pub fn get(&self, round: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(label, _)| label == round)
            .map(|(_, headcount)| *headcount)
    }

    /// Headcount for a round; a round missing from this pool contributes zero
    #[must_use]
    pub fn headcount(&self, round: &str) -> u32 {
        self.get(round).unwrap_or(0)
    }

    /// Number of scheduled rounds
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(round, headcount)` entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(round, headcount)| (round.as_str(), *headcount))
    }

    /// Round labels in declaration order
    pub fn rounds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(round, _)| round.as_str())
    }

    /// Total headcount across all rounds
    #[must_use]
    pub fn total_headcount(&self) -> u32 {
        self.entries.iter().map(|(_, headcount)| headcount).sum()
    }
}

/// Union of round labels across two schedules, first-seen order.
///
/// Used to sum staffing cost over every round either pool is scheduled for.
#[must_use]
pub fn round_union<'a>(a: &'a RoundSchedule, b: &'a RoundSchedule) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    let mut rounds = Vec::with_capacity(a.len() + b.len());
    for round in a.rounds().chain(b.rounds()) {
        if seen.insert(round) {
            rounds.push(round);
        }
    }
    rounds
}

impl FromIterator<(String, u32)> for RoundSchedule {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut schedule = RoundSchedule::new();
        for (round, headcount) in iter {
            schedule.set(round, headcount);
        }
        schedule
    }
}

impl<'a> FromIterator<(&'a str, u32)> for RoundSchedule {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(round, headcount)| (round.to_string(), headcount))
            .collect()
    }
}

impl Serialize for RoundSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (round, headcount) in &self.entries {
            map.serialize_entry(round, headcount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RoundSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = RoundSchedule;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of round label to headcount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = RoundSchedule::new();
                while let Some((round, headcount)) = access.next_entry::<String, u32>()? {
                    schedule.set(round, headcount);
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_preserves_declaration_order() {
        let mut schedule = RoundSchedule::new();
        schedule.set("r3", 3);
        schedule.set("r1", 1);
        schedule.set("r2", 2);
        let rounds: Vec<_> = schedule.rounds().collect();
        assert_eq!(rounds, vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn set_replaces_existing_entry() {
        let mut schedule = RoundSchedule::new();
        schedule.set("r1", 5);
        schedule.set("r1", 7);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get("r1"), Some(7));
    }

    #[test]
    fn missing_round_contributes_zero() {
        let schedule = RoundSchedule::from_iter([("r1", 4)]);
        assert_eq!(schedule.headcount("r2"), 0);
    }

    #[test]
    fn union_is_first_seen_order() {
        let coaches = RoundSchedule::from_iter([("r1", 2), ("r2", 3)]);
        let judges = RoundSchedule::from_iter([("r2", 1), ("r4", 1)]);
        assert_eq!(round_union(&coaches, &judges), vec!["r1", "r2", "r4"]);
    }
}
