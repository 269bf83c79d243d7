//! Payslip layout.
//!
//! Fixed-format document: issuer header, employee details, a numbered
//! earnings table with an "(A) EARNINGS TOTAL" row, a deductions table with
//! the synthetic unpaid-leave row and "(B) DEDUCTIONS TOTAL", the net
//! payable line, a payment line, and a signature block.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::IssuerConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeProfile, Payslip, PayrollRun, RuleCategory};

use super::document::{DocumentBuilder, PAGE_WIDTH};

const MARGIN: f64 = 50.0;
const RIGHT_EDGE: f64 = PAGE_WIDTH - MARGIN;
const AMOUNT_COLUMN: f64 = RIGHT_EDGE - 5.0;
const ROW_HEIGHT: f64 = 16.0;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A rendered document ready to stream to the caller.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// The document bytes.
    pub bytes: Vec<u8>,
    /// Suggested attachment filename.
    pub filename: String,
    /// MIME type of the bytes.
    pub content_type: &'static str,
}

fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn month_name(month: u32) -> PayrollResult<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .ok_or_else(|| PayrollError::Render {
            message: format!("month {month} out of range"),
        })
}

/// Suggested attachment filename for a payslip.
pub(crate) fn payslip_filename(employee_name: &str, month: u32) -> PayrollResult<String> {
    let name: String = employee_name.split_whitespace().collect::<Vec<_>>().join("_");
    Ok(format!("{name}_Salary_Slip_{}.pdf", month_name(month)?))
}

/// Renders a payslip document from persisted state.
///
/// `run` must be the payslip's parent run; it supplies the applied-rule
/// ledger and the day counts for the unpaid-leave display row. All other
/// figures come from the payslip snapshot.
pub fn render_payslip(
    issuer: &IssuerConfig,
    employee: &EmployeeProfile,
    run: &PayrollRun,
    payslip: &Payslip,
) -> PayrollResult<RenderedDocument> {
    if payslip.payroll_run_id != run.id {
        return Err(PayrollError::Render {
            message: "payslip does not belong to the given payroll run".to_string(),
        });
    }

    let period = format!("{} {}", month_name(payslip.month)?, payslip.year);
    let mut doc = DocumentBuilder::new();
    let center = PAGE_WIDTH / 2.0;

    // Header block
    doc.text_centered(center, 800.0, 16.0, true, &issuer.name);
    doc.text_centered(center, 784.0, 9.0, false, &issuer.address);
    doc.text_centered(center, 772.0, 9.0, false, &issuer.contact);
    doc.hline(MARGIN, RIGHT_EDGE, 764.0);
    doc.text_centered(center, 746.0, 12.0, true, &format!("Salary Slip - {period}"));

    // Employee details block
    let mut y = 716.0;
    let detail = |doc: &mut DocumentBuilder, y: f64, label: &str, value: &str| {
        doc.text(MARGIN, y, 9.0, true, label);
        doc.text(MARGIN + 110.0, y, 9.0, false, value);
    };
    detail(&mut doc, y, "Employee Name", &employee.name);
    detail(&mut doc, y - 14.0, "Department", &employee.department);
    detail(&mut doc, y - 28.0, "Designation", &employee.designation);
    detail(&mut doc, y - 42.0, "Employee Code", &employee.code);
    y -= 70.0;

    // Earnings table: non-zero components plus earning-category rules
    let mut earnings: Vec<(String, Decimal)> = payslip
        .components
        .labelled()
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(name, amount)| (name.to_string(), *amount))
        .collect();
    earnings.extend(
        run.applied_rules
            .iter()
            .filter(|r| r.category == RuleCategory::Earning)
            .map(|r| (r.name.clone(), r.amount)),
    );
    let earnings_total: Decimal = earnings.iter().map(|(_, amount)| *amount).sum();

    doc.hline(MARGIN, RIGHT_EDGE, y + 4.0);
    doc.text(MARGIN, y - 8.0, 10.0, true, "EARNINGS");
    doc.text_right(AMOUNT_COLUMN, y - 8.0, 10.0, true, &format!("AMOUNT ({})", payslip.currency));
    doc.hline(MARGIN, RIGHT_EDGE, y - 14.0);
    y -= 14.0 + ROW_HEIGHT;
    for (index, (name, amount)) in earnings.iter().enumerate() {
        doc.text(MARGIN, y, 9.0, false, &format!("{}. {name}", index + 1));
        doc.text_right(AMOUNT_COLUMN, y, 9.0, false, &money(*amount));
        y -= ROW_HEIGHT;
    }
    doc.hline(MARGIN, RIGHT_EDGE, y + ROW_HEIGHT - 6.0);
    doc.text(MARGIN, y, 9.0, true, "(A) EARNINGS TOTAL");
    doc.text_right(AMOUNT_COLUMN, y, 9.0, true, &money(earnings_total));
    y -= 2.0 * ROW_HEIGHT;

    // Deductions table: applied deduction rules plus the synthetic
    // unpaid-leave row derived from the stored day counts
    let mut deductions: Vec<(String, Decimal)> = run
        .applied_rules
        .iter()
        .filter(|r| r.category == RuleCategory::Deduction)
        .map(|r| (r.name.clone(), r.amount))
        .collect();
    if run.unpaid_leave_days > 0 && run.working_days > 0 {
        let unpaid_amount = (earnings_total / Decimal::from(run.working_days)
            * Decimal::from(run.unpaid_leave_days))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        deductions.push((
            format!("Unpaid Leave ({} days)", run.unpaid_leave_days),
            unpaid_amount,
        ));
    }
    let deductions_total: Decimal = deductions.iter().map(|(_, amount)| *amount).sum();

    doc.text(MARGIN, y - 8.0, 10.0, true, "DEDUCTIONS");
    doc.text_right(AMOUNT_COLUMN, y - 8.0, 10.0, true, &format!("AMOUNT ({})", payslip.currency));
    doc.hline(MARGIN, RIGHT_EDGE, y - 14.0);
    y -= 14.0 + ROW_HEIGHT;
    for (index, (name, amount)) in deductions.iter().enumerate() {
        doc.text(MARGIN, y, 9.0, false, &format!("{}. {name}", index + 1));
        doc.text_right(AMOUNT_COLUMN, y, 9.0, false, &money(*amount));
        y -= ROW_HEIGHT;
    }
    doc.hline(MARGIN, RIGHT_EDGE, y + ROW_HEIGHT - 6.0);
    doc.text(MARGIN, y, 9.0, true, "(B) DEDUCTIONS TOTAL");
    doc.text_right(AMOUNT_COLUMN, y, 9.0, true, &money(deductions_total));
    y -= 2.0 * ROW_HEIGHT;

    // Net payable and payment lines
    doc.hline(MARGIN, RIGHT_EDGE, y + ROW_HEIGHT - 6.0);
    doc.text(MARGIN, y, 11.0, true, "NET PAYABLE (A - B)");
    doc.text_right(
        AMOUNT_COLUMN,
        y,
        11.0,
        true,
        &format!("{} {}", payslip.currency, money(payslip.net_pay)),
    );
    y -= ROW_HEIGHT;
    doc.text(
        MARGIN,
        y,
        9.0,
        false,
        &format!("Paid by bank transfer to account {}", employee.bank_account),
    );
    y -= ROW_HEIGHT;
    if let Some(remark) = &payslip.remark {
        doc.text(MARGIN, y, 9.0, false, &format!("Remark: {remark}"));
        y -= ROW_HEIGHT;
    }

    // Signature block
    y -= 3.0 * ROW_HEIGHT;
    doc.hline(MARGIN, MARGIN + 150.0, y);
    doc.hline(RIGHT_EDGE - 150.0, RIGHT_EDGE, y);
    doc.text(MARGIN, y - 12.0, 8.0, false, "Employee Signature");
    doc.text_right(AMOUNT_COLUMN, y - 12.0, 8.0, false, "Authorised Signatory");

    Ok(RenderedDocument {
        bytes: doc.finish(),
        filename: payslip_filename(&employee.name, payslip.month)?,
        content_type: "application/pdf",
    })
}
