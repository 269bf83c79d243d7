//! Payslip document rendering.
//!
//! Produces the downloadable payslip PDF from a persisted payroll run and
//! payslip snapshot. No business computation happens here: every monetary
//! figure comes from storage, so re-rendering a payslip always reproduces
//! the original numbers. The single derived display line is the unpaid-leave
//! deduction row.

mod document;
mod payslip;

pub use document::DocumentBuilder;
pub use payslip::{render_payslip, RenderedDocument};
