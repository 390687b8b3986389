//! One-shot bootstrap pipeline: environment preparation and launch helpers.
//!
//! The pipeline is an explicit ordered list of named steps, each reporting
//! success, skip, or failure, so partial-failure reporting is structured
//! data rather than something inferred from log lines.

pub mod steps;

use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::BootstrapError;

pub use steps::{StepReport, StepStatus};

/// Run the setup pipeline in order.
///
/// Returns the reports for every step that ran. A failed fatal step halts
/// the pipeline immediately and surfaces as an error; non-fatal failures and
/// skips are recorded and execution continues.
pub async fn run(config: &Config) -> crate::Result<Vec<StepReport>> {
    info!("Initializing system protocols...");

    let mut reports = Vec::new();

    let report = steps::sync_dependencies().await;
    finish_step(&mut reports, report)?;

    let detect = steps::detect_build_tool();
    let has_npm = detect.status == StepStatus::Success;
    finish_step(&mut reports, detect)?;

    let report = steps::install_frontend_deps(config, has_npm).await;
    finish_step(&mut reports, report)?;

    let report = steps::build_frontend(config, has_npm).await;
    finish_step(&mut reports, report)?;

    let report = steps::check_credentials(config);
    finish_step(&mut reports, report)?;

    Ok(reports)
}

/// Record a step report, halting the pipeline on a fatal failure.
fn finish_step(reports: &mut Vec<StepReport>, report: StepReport) -> crate::Result<()> {
    match &report.status {
        StepStatus::Success => info!(step = report.name, "step completed"),
        StepStatus::Skipped(reason) => info!(step = report.name, %reason, "step skipped"),
        StepStatus::Failed(reason) => {
            if report.fatal {
                error!(step = report.name, %reason, "fatal step failure, halting");
                let err = BootstrapError::StepFailed {
                    step: report.name,
                    reason: reason.clone(),
                };
                reports.push(report);
                return Err(err.into());
            }
            warn!(step = report.name, %reason, "step failed, continuing");
        }
    }

    reports.push(report);
    Ok(())
}

/// Schedule the one-shot deferred browser open.
///
/// Fires once after the configured delay, racing server startup. The delay
/// is a heuristic, not a synchronization guarantee.
pub fn spawn_browser_open(config: &Config) {
    if !config.open_browser {
        return;
    }

    let url = config.local_url();
    let delay = Duration::from_millis(config.browser_delay_ms);

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        info!("Neural link active. Opening interface at {url}");
        if let Err(e) = open::that(&url) {
            warn!("failed to open browser: {e}");
        }
    });
}
