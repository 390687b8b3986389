//! Named setup steps for the bootstrap pipeline.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{info, warn};

use crate::config::Config;

/// Outcome of a single pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Step ran and succeeded.
    Success,
    /// Step did not need to run (with the reason).
    Skipped(String),
    /// Step ran and failed (with the reason).
    Failed(String),
}

impl StepStatus {
    /// Whether this status represents a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, StepStatus::Failed(_))
    }
}

/// Report for a single pipeline step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name.
    pub name: &'static str,
    /// Outcome.
    pub status: StepStatus,
    /// Whether a failure of this step halts the pipeline.
    pub fatal: bool,
}

impl StepReport {
    fn success(name: &'static str, fatal: bool) -> Self {
        Self {
            name,
            status: StepStatus::Success,
            fatal,
        }
    }

    fn skipped(name: &'static str, fatal: bool, reason: impl Into<String>) -> Self {
        Self {
            name,
            status: StepStatus::Skipped(reason.into()),
            fatal,
        }
    }

    fn failed(name: &'static str, fatal: bool, reason: impl Into<String>) -> Self {
        Self {
            name,
            status: StepStatus::Failed(reason.into()),
            fatal,
        }
    }
}

/// Run an external command with inherited stdio, mapping the exit status to
/// a step-friendly result.
async fn run_command(program: &str, args: &[&str]) -> Result<(), String> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|e| format!("failed to run {program}: {e}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{program} exited with {status}"))
    }
}

/// Whether a command is available on the PATH.
pub fn command_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Step 1: sync the crate's declared dependency set against its manifest.
///
/// Fatal on failure. Skipped when no toolchain is installed, since a deployed
/// binary already carries its dependencies.
pub async fn sync_dependencies() -> StepReport {
    const NAME: &str = "sync-dependencies";

    if !command_available("cargo") {
        return StepReport::skipped(NAME, true, "cargo not on PATH, dependencies are compiled in");
    }

    info!("Verifying declared dependencies (cargo fetch)...");
    match run_command("cargo", &["fetch"]).await {
        Ok(()) => StepReport::success(NAME, true),
        Err(reason) => StepReport::failed(NAME, true, reason),
    }
}

/// Step 2: probe for the frontend build tool.
///
/// Absence is a warning, not an error; later frontend steps are skipped.
pub fn detect_build_tool() -> StepReport {
    const NAME: &str = "detect-build-tool";

    if command_available("npm") {
        StepReport::success(NAME, false)
    } else {
        warn!("npm not detected, system will run in uncompiled mode");
        StepReport::skipped(NAME, false, "npm not on PATH")
    }
}

/// Step 3: install frontend dependencies when the marker directory is absent.
///
/// Fatal on failure.
pub async fn install_frontend_deps(config: &Config, has_npm: bool) -> StepReport {
    const NAME: &str = "install-frontend-deps";

    if !has_npm {
        return StepReport::skipped(NAME, true, "npm not available");
    }

    if config.node_modules_dir.exists() {
        return StepReport::skipped(NAME, true, "node_modules already present");
    }

    info!("Installing frontend dependencies (npm install)...");
    match run_command("npm", &["install"]).await {
        Ok(()) => StepReport::success(NAME, true),
        Err(reason) => StepReport::failed(NAME, true, reason),
    }
}

/// Step 4: build the frontend when no build output exists.
///
/// Non-fatal: on failure the server still starts and serves the recovery
/// page.
pub async fn build_frontend(config: &Config, has_npm: bool) -> StepReport {
    const NAME: &str = "build-frontend";

    if !has_npm {
        return StepReport::skipped(NAME, false, "npm not available");
    }

    if config.build_exists() {
        return StepReport::skipped(NAME, false, "build output already present");
    }

    info!("Compiling interface (npm run build)...");
    match run_command("npm", &["run", "build"]).await {
        Ok(()) => StepReport::success(NAME, false),
        Err(reason) => {
            warn!("Build failed, entering uncompiled mode: {reason}");
            StepReport::failed(NAME, false, reason)
        }
    }
}

/// Step 5: advisory credential check. Never fails anything.
pub fn check_credentials(config: &Config) -> StepReport {
    const NAME: &str = "check-credentials";

    if config.api_key.is_some() {
        StepReport::success(NAME, false)
    } else {
        warn!("API_KEY not found in environment, operating with restricted capabilities");
        StepReport::skipped(NAME, false, "API_KEY not set")
    }
}
