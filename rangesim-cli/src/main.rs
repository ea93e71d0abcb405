use anyhow::{ensure, Context};
use clap::{ArgGroup, Parser};

use rangesim_core::cycle::DriveCycle;
use rangesim_core::simdrive::{RangeSim, Scenario};
use rangesim_core::traits::SerdeAPI;

/// Wrapper for rangesim.
/// After running `cargo build --release`, run with
/// ```bash
/// ./target/release/rangesim-cli --cyc-file rangesim-core/resources/cycles/udds_abridged.csv --scenario-file rangesim-core/resources/scenarios/compact_ev.yaml
/// ```.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(group(
    ArgGroup::new("cycle")
    .required(true)
    .args(&["cyc-file", "demo-cycle"])
))]
struct RangeSimApi {
    /// Path to drive cycle file (csv with a speed column, or yaml/json)
    #[clap(long, value_parser)]
    cyc_file: Option<String>,
    /// Name of a drive cycle bundled with rangesim-core, e.g. `udds_abridged`
    #[clap(long, value_parser)]
    demo_cycle: Option<String>,
    /// Path to scenario file (yaml or json) with `veh`, `batt`, and `cost` blocks
    #[clap(long, value_parser)]
    scenario_file: String,
    /// Override the uniform cycle time step (s)
    #[clap(long, value_parser)]
    dt_s: Option<f64>,
    /// How to print results: `json` (default) or `yaml`
    #[clap(long, value_parser)]
    res_fmt: Option<String>,
}

pub fn main() -> anyhow::Result<()> {
    env_logger::init();
    let api = RangeSimApi::parse();

    let mut cyc = if let Some(cyc_file_path) = &api.cyc_file {
        if cyc_file_path.ends_with(".csv") {
            DriveCycle::from_csv_file(cyc_file_path)
        } else {
            DriveCycle::from_file(cyc_file_path)
        }
        .with_context(|| format!("Could not load drive cycle from {cyc_file_path:?}"))?
    } else if let Some(name) = &api.demo_cycle {
        let mut cyc = DriveCycle::from_resource(format!("cycles/{name}.csv"))
            .with_context(|| format!("No bundled drive cycle named {name:?}"))?;
        cyc.name = name.clone();
        cyc
    } else {
        unreachable!("clap requires one cycle source");
    };
    if let Some(dt_s) = api.dt_s {
        ensure!(dt_s > 0.0, "time step override must be positive");
        cyc.dt_s = dt_s;
    }

    let scenario = Scenario::from_file(&api.scenario_file)
        .with_context(|| format!("Could not load scenario file {:?}", api.scenario_file))?;

    let sim = RangeSim::from_scenario(cyc, scenario)?;
    let results = sim.compute()?;

    println!(
        "{}",
        results.to_str(api.res_fmt.as_deref().unwrap_or("json"))?
    );

    eprintln!(
        "cycle `{}`: {} samples over {:.0} s, {:.3} km",
        sim.cyc.name,
        sim.cyc.len(),
        sim.cyc.duration_s(),
        results.range.dist_km
    );
    eprintln!(
        "peak rolling/aero power: {:.1} W / {:.1} W",
        results.power.peak_rolling_w(),
        results.power.peak_aero_w()
    );
    eprintln!(
        "consumption: {:.1} Wh/km ({:.1} with aux), range: {:.1} km ({:.1} with aux)",
        results.range.consumption_wh_per_km,
        results.range.consumption_aux_wh_per_km,
        results.range.range_km,
        results.range.range_aux_km
    );
    eprintln!(
        "savings vs petrol: {:.3}/km, {:.2} over full range",
        results.cost.saving_per_km, results.cost.total_saving
    );

    Ok(())
}
