//! Configuration data structures.

use serde::{Deserialize, Serialize};

use crate::models::RoundingMode;

/// The organisation issuing payslips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerConfig {
    /// Company name shown in the payslip header.
    pub name: String,
    /// Postal address shown in the payslip header.
    pub address: String,
    /// Contact line (phone or email).
    pub contact: String,
}

/// Service-level defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Currency code used when seeding salary structures.
    pub currency: String,
    /// Rounding mode applied when a run request does not specify one.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Issuer identity.
    pub issuer: IssuerConfig,
    /// Service defaults.
    pub defaults: DefaultsConfig,
}

impl EngineConfig {
    /// A minimal configuration for tests and examples.
    pub fn sample() -> Self {
        Self {
            issuer: IssuerConfig {
                name: "Meridian Software Pvt Ltd".to_string(),
                address: "14 Residency Road, Bengaluru 560025".to_string(),
                contact: "payroll@meridiansoft.example".to_string(),
            },
            defaults: DefaultsConfig {
                currency: "INR".to_string(),
                rounding: RoundingMode::Nearest,
                bind_addr: default_bind_addr(),
            },
        }
    }
}
