//! Plain-text rendering of the KPI report and sensitivity tables.

use std::fmt::Write;

use meetplan_core::analysis::{SweepPoint, TornadoRecord};
use meetplan_core::kpi::{Kpi, KpiRecord};
use meetplan_core::model::{EventModel, round_union};

use crate::format::{format_currency, format_currency_delta, format_kpi};

/// Render the full text report: header, staffing table, KPI blocks, and the
/// tornado table.
pub fn render(model: &EventModel, kpis: &[KpiRecord], tornado: &[TornadoRecord]) -> String {
    let mut out = String::new();

    let title = if model.name().is_empty() {
        "Event"
    } else {
        model.name()
    };
    let today = jiff::Zoned::now().strftime("%d/%m/%Y");
    let _ = writeln!(out, "{title} - economics report");
    let _ = writeln!(out, "Generated {today}");
    out.push('\n');

    let params = model.params();
    let mut rounds = round_union(&params.coaches_for_round, &params.judges_for_round);
    rounds.sort_unstable();
    if !rounds.is_empty() {
        let _ = writeln!(out, "{:<16}{:>8}{:>8}", "Round", "Coaches", "Judges");
        for round in rounds {
            let _ = writeln!(
                out,
                "{:<16}{:>8}{:>8}",
                round,
                params.coaches_for_round.headcount(round),
                params.judges_for_round.headcount(round)
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Headline");
    for record in kpis.iter().filter(|r| Kpi::PRIMARY.contains(&r.kpi)) {
        let _ = writeln!(
            out,
            "  {:<38}{:>16}",
            record.label,
            format_kpi(record.unit, record.value)
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Detail");
    for record in kpis.iter().filter(|r| !Kpi::PRIMARY.contains(&r.kpi)) {
        let _ = writeln!(
            out,
            "  {:<38}{:>16}",
            record.label,
            format_kpi(record.unit, record.value)
        );
    }
    out.push('\n');

    if !tornado.is_empty() {
        let _ = writeln!(out, "Profit sensitivity");
        let _ = writeln!(out, "  {:<34}{:>10}{:>16}", "Parameter", "Scenario", "Profit swing");
        for record in tornado {
            let _ = writeln!(
                out,
                "  {:<34}{:>10}{:>16}",
                record.parameter_label(),
                record.scenario,
                format_currency_delta(record.delta_profit)
            );
        }
    }

    out
}

/// Render a parametric sweep as a value/profit table
pub fn render_sweep(param: &str, points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Profit sweep over {param}");
    let _ = writeln!(out, "  {:>14}{:>18}", "Value", "Profit");
    for point in points {
        let _ = writeln!(
            out,
            "  {:>14.2}{:>18}",
            point.value,
            format_currency(point.profit)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use meetplan_core::analysis::tornado_default;
    use meetplan_core::kpi::kpi_report;
    use meetplan_core::model::{EventModel, EventParams, RoundSchedule};

    use super::*;

    fn sample_model() -> EventModel {
        EventModel::new(EventParams {
            name: "Spring Meet".to_string(),
            participants: 100,
            participation_price: 10.0,
            coaches_for_round: RoundSchedule::from_iter([("r1", 4), ("r2", 4)]),
            coaches_salary_for_round: 8.0,
            judges_for_round: RoundSchedule::from_iter([("r2", 1)]),
            judges_salary_for_round: 10.0,
            food_cost: 20.0,
            ..EventParams::default()
        })
        .unwrap()
    }

    #[test]
    fn report_contains_every_section() {
        let model = sample_model();
        let kpis = kpi_report(&model);
        let tornado = tornado_default(&model).unwrap();
        let text = render(&model, &kpis, &tornado);

        assert!(text.starts_with("Spring Meet - economics report"));
        assert!(text.contains("Round"));
        assert!(text.contains("r1"));
        assert!(text.contains("Headline"));
        assert!(text.contains("Revenue"));
        assert!(text.contains("Break-even participants"));
        assert!(text.contains("Profit sensitivity"));
        assert!(text.contains("Registration price"));
        assert!(text.contains("+10%"));
    }

    #[test]
    fn sweep_table_lists_every_point() {
        let points = [
            SweepPoint {
                value: 8.0,
                profit: 100.0,
            },
            SweepPoint {
                value: 12.0,
                profit: 300.0,
            },
        ];
        let text = render_sweep("participation_price", &points);
        assert!(text.contains("participation_price"));
        assert!(text.contains("8.00"));
        assert!(text.contains("300.00 €"));
    }
}
