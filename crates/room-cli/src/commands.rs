//! `run` and `check` subcommands

use anyhow::{Context, Result};
use room::Scenario;
use std::path::{Path, PathBuf};
use tracing::info;

fn load(path: &Path) -> Result<Scenario> {
    Scenario::load(path).with_context(|| format!("loading {}", path.display()))
}

/// Run every scenario. Returns `true` if all steps met their expectation.
pub fn run(files: &[PathBuf], quiet: bool) -> Result<bool> {
    let mut all_passed = true;
    for path in files {
        let report = load(path)?
            .run()
            .with_context(|| format!("running {}", path.display()))?;

        if quiet {
            for step in report.failures() {
                println!("{}: {}", report.name, step);
            }
            let failed = report.failures().count();
            println!(
                "{}: {} steps, {} failed",
                report.name,
                report.steps.len(),
                failed
            );
        } else {
            println!("{}\n", report);
        }

        info!(scenario = %report.name, passed = report.passed(), "scenario finished");
        all_passed &= report.passed();
    }
    Ok(all_passed)
}

/// Parse every scenario without running it.
pub fn check(files: &[PathBuf]) -> Result<()> {
    for path in files {
        let scenario = load(path)?;
        scenario
            .check()
            .with_context(|| format!("checking {}", path.display()))?;
        println!(
            "{}: {} objects, {} steps",
            scenario.display_name(),
            scenario.objects.len(),
            scenario.steps.len()
        );
    }
    Ok(())
}
