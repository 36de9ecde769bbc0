//! Configuration loading and management for the HRMS engine.
//!
//! This module loads the HRMS policy from YAML: company metadata and the
//! default percentages offered when a new salary structure is created.
//!
//! # Example
//!
//! ```no_run
//! use hrms_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hrms").unwrap();
//! println!("Loaded policy for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyMetadata, PolicyConfig, SalaryDefaults};
