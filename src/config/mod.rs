//! Configuration loading and management for the Commission Engine.
//!
//! This module provides the per-tier rate and threshold records, the built-in
//! default table, and a loader for YAML configuration directories.
//!
//! # Example
//!
//! ```no_run
//! use commission_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Max sale: {}", config.config().max_sale_amount());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CategoryRates, CommissionConfig, LimitsConfig, TierConfig, TiersConfig};
