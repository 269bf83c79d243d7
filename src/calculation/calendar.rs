//! Month calendar resolution.
//!
//! Computes the day counts a payroll run is prorated against: total calendar
//! days, holiday dates falling within the month, and working days. Working
//! days here are total days minus holidays; weekends are deliberately not
//! excluded at this stage. Weekend handling happens only inside leave-day
//! classification, and the proration denominator matches this
//! weekend-inclusive definition.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Holiday;

/// Years accepted by the engine. Anything outside is a request error.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=2100;

/// Resolved day counts for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    /// Calendar days in the month.
    pub total_days: u32,
    /// Distinct holiday dates within the month.
    pub holiday_count: u32,
    /// `total_days - holiday_count`.
    pub working_days: u32,
}

/// Validates (year, month) and returns the inclusive month window.
pub fn month_window(year: i32, month: u32) -> PayrollResult<(NaiveDate, NaiveDate)> {
    if !YEAR_RANGE.contains(&year) {
        return Err(PayrollError::invalid(
            "year",
            format!("must be between {} and {}", YEAR_RANGE.start(), YEAR_RANGE.end()),
        ));
    }
    if !(1..=12).contains(&month) {
        return Err(PayrollError::invalid("month", "must be between 1 and 12"));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PayrollError::invalid("month", "not a valid calendar month"))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| PayrollError::invalid("year", "month window exceeds supported range"))?;
    let last = next_first
        .pred_opt()
        .ok_or_else(|| PayrollError::invalid("month", "not a valid calendar month"))?;

    Ok((first, last))
}

/// Number of calendar days in the given month.
pub fn days_in_month(year: i32, month: u32) -> PayrollResult<u32> {
    let (first, last) = month_window(year, month)?;
    Ok((last.signed_duration_since(first).num_days() + 1) as u32)
}

/// Resolves the day counts for a month against the given holiday records.
///
/// Holiday dates are deduplicated: two records landing on the same date
/// count as one holiday day.
pub fn resolve_month(
    year: i32,
    month: u32,
    holidays: &[Holiday],
) -> PayrollResult<MonthCalendar> {
    let (first, last) = month_window(year, month)?;
    let total_days = (last.signed_duration_since(first).num_days() + 1) as u32;

    let holiday_dates: BTreeSet<NaiveDate> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| holidays.iter().any(|h| h.applies_on(*d)))
        .collect();
    let holiday_count = holiday_dates.len() as u32;

    Ok(MonthCalendar {
        total_days,
        holiday_count,
        working_days: total_days - holiday_count,
    })
}
