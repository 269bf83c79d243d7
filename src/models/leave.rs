//! Leave record model.
//!
//! Only approved leave is visible to payroll computation; the approval
//! workflow itself lives outside this engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of leave taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Casual leave, paid.
    Casual,
    /// Sick leave, paid.
    Sick,
    /// Earned/privilege leave, paid.
    Earned,
    /// Leave without pay.
    Unpaid,
}

impl LeaveType {
    /// Returns true for the leave-without-pay variant.
    pub fn is_unpaid(self) -> bool {
        self == LeaveType::Unpaid
    }
}

/// Approval status of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved; visible to payroll.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Cancelled by the employee.
    Cancelled,
}

/// A leave request covering an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The employee who requested the leave.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// Approval status.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Checks whether this record's range overlaps `[start, end]` (inclusive).
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.from_date <= end && self.to_date >= start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(from: NaiveDate, to: NaiveDate) -> LeaveRecord {
        LeaveRecord {
            employee_id: "emp_001".to_string(),
            leave_type: LeaveType::Casual,
            from_date: from,
            to_date: to,
            status: LeaveStatus::Approved,
        }
    }

    #[test]
    fn test_overlaps_inside_window() {
        let r = record(date(2025, 3, 10), date(2025, 3, 12));
        assert!(r.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_overlaps_straddling_window_start() {
        let r = record(date(2025, 2, 26), date(2025, 3, 2));
        assert!(r.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_no_overlap_before_window() {
        let r = record(date(2025, 2, 10), date(2025, 2, 12));
        assert!(!r.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_single_day_on_boundary_overlaps() {
        let r = record(date(2025, 3, 31), date(2025, 3, 31));
        assert!(r.overlaps(date(2025, 3, 1), date(2025, 3, 31)));
    }

    #[test]
    fn test_only_unpaid_variant_is_unpaid() {
        assert!(LeaveType::Unpaid.is_unpaid());
        assert!(!LeaveType::Casual.is_unpaid());
        assert!(!LeaveType::Sick.is_unpaid());
        assert!(!LeaveType::Earned.is_unpaid());
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Unpaid).unwrap(),
            "\"unpaid\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
    }
}
