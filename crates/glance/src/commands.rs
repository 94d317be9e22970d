//! Non-interactive command handlers

use anyhow::Result;
use glance_common::{AnalysisReport, Config};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Handle `glance export`
pub fn export(output: Option<PathBuf>, config: &Config) -> Result<()> {
    let report = AnalysisReport::sample();
    let dir = output.unwrap_or_else(|| config.export_dir());

    std::fs::create_dir_all(&dir)?;
    let path = report.write_to(&dir)?;

    println!("{} report written to {}", "✓".green(), path.display());
    Ok(())
}

/// Handle `glance report`
pub fn report() -> Result<()> {
    let report = AnalysisReport::sample();
    println!("{}", report.to_json_pretty()?);
    Ok(())
}
