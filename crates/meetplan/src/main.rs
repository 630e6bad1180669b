use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meetplan_core::analysis::{profit_sensitivity, tornado_default};
use meetplan_core::kpi::kpi_report;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod format;
mod report;
mod scenario;

#[derive(Parser, Debug)]
#[command(name = "meetplan")]
#[command(about = "Financial planner for multi-round gymnastics meets")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the full KPI and sensitivity report for a scenario
    Report {
        /// Path to the scenario file (YAML)
        scenario: PathBuf,

        /// Emit machine-readable JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Sweep one parameter across explicit values and report profit
    Sweep {
        /// Path to the scenario file (YAML)
        scenario: PathBuf,

        /// Parameter to replace, by field name (e.g. participation_price)
        #[arg(short, long)]
        param: String,

        /// Replacement values
        #[arg(short, long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        /// Emit machine-readable JSON instead of the text table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    match args.command {
        Command::Report { scenario, json } => {
            let model = scenario::load(&scenario)?;
            let kpis = kpi_report(&model);
            let tornado = tornado_default(&model)?;
            if json {
                let payload = serde_json::json!({
                    "event": model.name(),
                    "kpis": kpis,
                    "tornado": tornado,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", report::render(&model, &kpis, &tornado));
            }
        }
        Command::Sweep {
            scenario,
            param,
            values,
            json,
        } => {
            let model = scenario::load(&scenario)?;
            let points = profit_sensitivity(&model, &param, &values)?;
            if json {
                let payload = serde_json::json!({
                    "parameter": param,
                    "points": points,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", report::render_sweep(&param, &points));
            }
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    // Logs go to stderr so piped report output stays clean
    let default_filter = format!("meetplan={level},meetplan_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}
