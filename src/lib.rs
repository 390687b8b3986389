//! J.A.R.V.I.S. core interface server.
//!
//! Serves the pre-built single-page interface over HTTP, exposes a `/health`
//! endpoint, and provides a one-shot bootstrap pipeline that prepares the
//! environment and launches the server.
//!
//! When no build output exists the server degrades gracefully: `/` renders
//! an embedded recovery page telling the operator to run the build, and no
//! static asset mapping is installed.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router and handlers
//! - [`bootstrap`]: Ordered setup-and-launch pipeline
//! - [`utils`]: Utility functions

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
