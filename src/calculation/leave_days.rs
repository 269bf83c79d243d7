//! Leave-day aggregation.
//!
//! Walks every approved leave range overlapping the month window and
//! classifies each eligible day as paid or unpaid. Weekends and holiday
//! dates never count as leave days. Days are deduplicated by calendar date,
//! so overlapping leave records can never charge or credit the same day
//! twice; when a paid and an unpaid record both claim a date, the unpaid
//! classification wins regardless of record order.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calculation::calendar::month_window;
use crate::error::PayrollResult;
use crate::models::{Holiday, LeaveRecord, LeaveStatus};

/// Paid and unpaid leave-day counts for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveDayCounts {
    /// Days of approved paid leave.
    pub paid: u32,
    /// Days of approved leave without pay.
    pub unpaid: u32,
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Aggregates approved leave for a month into paid/unpaid day counts.
///
/// `leaves` may contain records in any status and for any date range; only
/// approved records overlapping the month are considered, clipped to the
/// month window.
pub fn aggregate_leave_days(
    leaves: &[LeaveRecord],
    holidays: &[Holiday],
    year: i32,
    month: u32,
) -> PayrollResult<LeaveDayCounts> {
    let (month_start, month_end) = month_window(year, month)?;

    // date -> is_unpaid; unpaid wins on conflicting claims
    let mut classified: BTreeMap<NaiveDate, bool> = BTreeMap::new();

    for record in leaves {
        if record.status != LeaveStatus::Approved {
            continue;
        }
        if !record.overlaps(month_start, month_end) {
            continue;
        }

        let start = record.from_date.max(month_start);
        let end = record.to_date.min(month_end);

        for day in start.iter_days().take_while(|d| *d <= end) {
            if is_weekend(day) {
                continue;
            }
            if holidays.iter().any(|h| h.applies_on(day)) {
                continue;
            }
            let entry = classified.entry(day).or_insert(false);
            if record.leave_type.is_unpaid() {
                *entry = true;
            }
        }
    }

    let unpaid = classified.values().filter(|unpaid| **unpaid).count() as u32;
    let paid = classified.len() as u32 - unpaid;

    Ok(LeaveDayCounts { paid, unpaid })
}
