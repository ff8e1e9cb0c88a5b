//! # Chargecap - Connected-Vehicle Charge Limit Controls
//!
//! A Rust bridge exposing vehicle AC/DC charge-limit caps as adjustable
//! numeric entities for a host automation platform, backed by a remote
//! vehicle-telematics service.
//!
//! ## Features
//!
//! - **Async-first**: non-blocking remote calls on the Tokio runtime
//! - **Compound Updates**: AC and DC limits are always written as a pair
//! - **Cached Reads**: entity values reflect coordinator state, never I/O
//! - **Structured Logging**: tracing-based logging with per-component context
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! The crate follows a modular architecture with clear separation of concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `vehicle`: Vehicle records and the charge-limit pair
//! - `telematics`: Remote vehicle API client seam
//! - `coordinator`: Shared vehicle cache and remote-call delegation
//! - `platform`: Host-platform entity registry and state notifications
//! - `number`: Charge-limit number entities and registration

pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod number;
pub mod platform;
pub mod telematics;
pub mod vehicle;

/// Integration domain used to derive entity unique ids
pub const DOMAIN: &str = "chargecap";

// Re-export commonly used types
pub use config::Config;
pub use coordinator::VehicleCoordinator;
pub use error::{ChargecapError, Result};
pub use number::{ChargeLimitNumber, setup_numbers};
