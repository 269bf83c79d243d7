//! Entry point for the payroll engine binary.
//!
//! Starts an HTTP server exposing the payroll run and payslip document
//! endpoints against a demo-seeded in-memory store. The configuration file
//! path may be set via the `PAYROLL_CONFIG` environment variable (default
//! `config/payroll.yaml`) and the bind address via `PAYROLL_BIND_ADDR`
//! (default taken from the configuration file).

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{create_router, AppState};
use payroll_engine::config::ConfigLoader;
use payroll_engine::error::{PayrollError, PayrollResult};
use payroll_engine::models::{
    EmployeeProfile, PayRule, RuleBase, RuleCategory, RuleKind, SalaryComponents, SalaryStructure,
};
use payroll_engine::store::InMemoryStore;

/// Seeds one employee and the standard deduction rules so the service is
/// usable out of the box.
fn seed_demo_data(store: &InMemoryStore, currency: &str) -> PayrollResult<()> {
    let effective_from = NaiveDate::from_ymd_opt(2024, 4, 1)
        .ok_or_else(|| PayrollError::invalid("effective_from", "not a valid date"))?;

    store.seed_employee(
        EmployeeProfile {
            id: "emp_001".to_string(),
            name: "Asha Verma".to_string(),
            department: "Engineering".to_string(),
            designation: "Senior Developer".to_string(),
            code: "EMP-0042".to_string(),
            bank_account: "XXXX-4821".to_string(),
        },
        SalaryStructure::from_components(
            "emp_001",
            SalaryComponents {
                basic: Decimal::from(30000),
                hra: Decimal::from(12000),
                conveyance: Decimal::ZERO,
                special_allowance: Decimal::from(5000),
                meal_allowance: Decimal::ZERO,
            },
            currency,
            effective_from,
        ),
    )?;

    let deduction = |name: &str, kind: RuleKind, base: RuleBase, value: Decimal, priority: i32| {
        PayRule {
            name: name.to_string(),
            category: RuleCategory::Deduction,
            kind,
            base,
            value,
            is_taxable: false,
            priority,
            active: true,
        }
    };
    store.seed_rule(deduction(
        "Provident Fund",
        RuleKind::Percentage,
        RuleBase::Basic,
        Decimal::from(12),
        1,
    ))?;
    store.seed_rule(deduction(
        "Professional Tax",
        RuleKind::Fixed,
        RuleBase::Gross,
        Decimal::from(200),
        2,
    ))?;
    store.seed_rule(deduction(
        "Health Insurance",
        RuleKind::Fixed,
        RuleBase::Gross,
        Decimal::from(300),
        3,
    ))?;

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path =
        std::env::var("PAYROLL_CONFIG").unwrap_or_else(|_| "config/payroll.yaml".to_string());
    let loader = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("Failed to load configuration from {config_path}: {err}");
            std::process::exit(1);
        }
    };
    let config = loader.config().clone();
    let bind_addr =
        std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| config.defaults.bind_addr.clone());

    let store = InMemoryStore::new();
    if let Err(err) = seed_demo_data(&store, &config.defaults.currency) {
        eprintln!("Failed to seed store: {err}");
        std::process::exit(1);
    }

    let state = AppState::new(config, Arc::new(store));
    let router = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to bind {bind_addr}: {err}");
            std::process::exit(1);
        }
    };

    info!(%bind_addr, "Payroll engine listening");
    if let Err(err) = axum::serve(listener, router).await {
        eprintln!("Server error: {err}");
        std::process::exit(1);
    }
}
