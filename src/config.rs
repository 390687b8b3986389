//! Application configuration loaded from environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port. The server binds all interfaces on this port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Build output directory containing the compiled frontend.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    // === Credentials ===
    /// Optional API credential. Absence is advisory only; nothing in this
    /// layer enforces it.
    #[serde(default)]
    pub api_key: Option<String>,

    // === Bootstrap Configuration ===
    /// Frontend dependency-install marker directory.
    #[serde(default = "default_node_modules_dir")]
    pub node_modules_dir: PathBuf,

    /// Delay before the deferred browser open fires.
    #[serde(default = "default_browser_delay_ms")]
    pub browser_delay_ms: u64,

    /// Whether the bootstrap opens a browser tab at all.
    #[serde(default = "default_true")]
    pub open_browser: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    8000
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_node_modules_dir() -> PathBuf {
    PathBuf::from("node_modules")
}

fn default_browser_delay_ms() -> u64 {
    2500
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.dist_dir.as_os_str().is_empty() {
            return Err("DIST_DIR must not be empty".to_string());
        }

        Ok(())
    }

    /// Path of the built frontend's entry file.
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Whether the build output directory currently exists.
    ///
    /// Checked fresh on every call; there is an inherent race with any
    /// concurrent external build, which is harmless here.
    pub fn build_exists(&self) -> bool {
        self.dist_dir.exists()
    }

    /// Local URL the deferred browser open points at.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Config rooted at a specific directory (used by tests).
    pub fn with_root(root: &Path, port: u16) -> Self {
        Self {
            port,
            dist_dir: root.join("dist"),
            api_key: None,
            node_modules_dir: root.join("node_modules"),
            browser_delay_ms: default_browser_delay_ms(),
            open_browser: false,
            rust_log: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            dist_dir: default_dist_dir(),
            api_key: None,
            node_modules_dir: default_node_modules_dir(),
            browser_delay_ms: default_browser_delay_ms(),
            open_browser: default_true(),
            rust_log: default_log_level(),
        }
    }
}
