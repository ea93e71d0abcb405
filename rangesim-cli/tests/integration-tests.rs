use std::io::Write;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use predicates::prelude::predicate;

fn resource_path(rel: &str) -> std::path::PathBuf {
    let mut path = project_root::get_project_root().unwrap();
    path.push(Path::new(rel));
    path.canonicalize().unwrap()
}

#[test]
fn test_that_cli_app_produces_result() -> Result<(), Box<dyn std::error::Error>> {
    let cyc_file = resource_path("rangesim-core/resources/cycles/udds_abridged.csv");
    assert!(cyc_file.exists());
    let scenario_file = resource_path("rangesim-core/resources/scenarios/compact_ev.yaml");
    assert!(scenario_file.exists());

    let mut cmd = Command::cargo_bin("rangesim-cli")?;
    cmd.args([
        "--cyc-file",
        cyc_file.to_str().unwrap(),
        "--scenario-file",
        scenario_file.to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("battery_required_wh"))
        .stdout(predicate::str::contains("range_km"));

    Ok(())
}

#[test]
fn test_that_bundled_cycle_works_by_name() -> Result<(), Box<dyn std::error::Error>> {
    let scenario_file = resource_path("rangesim-core/resources/scenarios/compact_ev.yaml");

    let mut cmd = Command::cargo_bin("rangesim-cli")?;
    cmd.args([
        "--demo-cycle",
        "udds_abridged",
        "--scenario-file",
        scenario_file.to_str().unwrap(),
        "--res-fmt",
        "yaml",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("consumption_wh_per_km"));

    Ok(())
}

#[test]
fn test_that_stationary_cycle_reports_undefined_range(
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario_file = resource_path("rangesim-core/resources/scenarios/compact_ev.yaml");

    let dir = tempfile::tempdir()?;
    let cyc_path = dir.path().join("parked.csv");
    let mut file = std::fs::File::create(&cyc_path)?;
    writeln!(file, "Speed")?;
    for _ in 0..10 {
        writeln!(file, "0.0")?;
    }

    let mut cmd = Command::cargo_bin("rangesim-cli")?;
    cmd.args([
        "--cyc-file",
        cyc_path.to_str().unwrap(),
        "--scenario-file",
        scenario_file.to_str().unwrap(),
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("undefined result"));

    Ok(())
}
