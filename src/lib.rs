//! Payroll computation engine.
//!
//! This crate computes monthly payroll for an employee: it resolves the month
//! calendar, aggregates approved leave into paid/unpaid day counts, evaluates
//! the configured earning/deduction rules against a prorated gross, persists
//! an immutable payroll run + payslip snapshot, and renders a fixed-layout
//! PDF payslip from that snapshot.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
