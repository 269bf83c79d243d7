//! Engine configuration.
//!
//! Issuer identity (printed on payslips) and service defaults, loaded from
//! a YAML file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultsConfig, EngineConfig, IssuerConfig};
