mod analysis;
mod report;

use std::path::PathBuf;

use analysis::run_analysis;
use bellowsx::{render, ActuatorConfig};
use clap::Parser;
use report::render_summary;

/// Compare the closed-form bellows displacement with simulated and measured data.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// SVG file to write the chart to.
    #[arg(short, long, default_value = "displacement_vs_pressure.svg")]
    output: PathBuf,
    /// Print the parameters, derived constants and chart as JSON instead of rendering.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // The actuator is described by a fixed elastomer and chamber geometry. The
    // configuration is built once here and handed down explicitly.
    let config = ActuatorConfig::default();

    // Evaluate K_ax and A_eff, sweep 0 to 200 kPa and pair the result with the
    // finite-element and experimental tables.
    let summary = run_analysis(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary.record())?);
        return Ok(());
    }

    // Print the numbers first so they survive even if the chart cannot be drawn.
    println!("{}", render_summary(&summary));

    render(&summary.chart, &cli.output)?;

    Ok(())
}
