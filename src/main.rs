//! J.A.R.V.I.S. interface server entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jarvis_interface::bootstrap;
use jarvis_interface::config::Config;
use jarvis_interface::{api, ServerError};

/// J.A.R.V.I.S. core interface server.
#[derive(Parser, Debug)]
#[command(name = "jarvis")]
#[command(about = "Serves the holographic interface and runs the bootstrap pipeline")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full bootstrap pipeline, then serve (default).
    Up,

    /// Start the server without any bootstrap steps.
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("jarvis_interface=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Serve) => cmd_serve().await,
        Some(Command::Up) | None => cmd_up().await,
    }
}

/// Load and validate configuration, logging failures.
fn load_config() -> jarvis_interface::Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServerError::InvalidConfig(e));
    }

    Ok(config)
}

/// Run the bootstrap pipeline, then launch the server.
async fn cmd_up() -> anyhow::Result<()> {
    let config = load_config()?;

    let reports = match bootstrap::run(&config).await {
        Ok(reports) => reports,
        Err(e) => {
            error!("Critical failure during bootstrap: {}", e);
            return Err(e.into());
        }
    };

    for report in &reports {
        info!(step = report.name, status = ?report.status, "bootstrap step");
    }

    bootstrap::spawn_browser_open(&config);

    launch(&config).await
}

/// Start the server directly, skipping bootstrap.
async fn cmd_serve() -> anyhow::Result<()> {
    let config = load_config()?;
    launch(&config).await
}

/// Serve until interrupted; any launch failure is logged as an error.
async fn launch(config: &Config) -> anyhow::Result<()> {
    if let Err(e) = api::serve(config).await {
        error!("Uplink error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("J.A.R.V.I.S. INTERFACE SERVER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Build Output: {}", config.dist_dir.display());
    println!("  Build Exists: {}", config.build_exists());
    println!("  Dependency Marker: {}", config.node_modules_dir.display());
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "set"
        } else {
            "NOT SET (restricted capabilities)"
        }
    );
    println!(
        "  Browser Open: {}",
        if config.open_browser { "Enabled" } else { "Disabled" }
    );
    println!("  Browser Delay: {}ms", config.browser_delay_ms);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
