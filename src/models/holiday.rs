//! Holiday model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A company or public holiday.
///
/// A recurring holiday applies to every year's matching month and day; a
/// non-recurring holiday applies only to its exact date. This is a system
/// invariant: one recurring record covers all years, so a recurring holiday
/// must not also be stored per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name of the holiday.
    pub title: String,
    /// The holiday date. For recurring holidays only month and day matter.
    pub date: NaiveDate,
    /// Whether the holiday repeats every year.
    #[serde(default)]
    pub recurring: bool,
}

impl Holiday {
    /// Checks whether this holiday falls on the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Holiday;
    /// use chrono::NaiveDate;
    ///
    /// let holiday = Holiday {
    ///     title: "Republic Day".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2020, 1, 26).unwrap(),
    ///     recurring: true,
    /// };
    /// assert!(holiday.applies_on(NaiveDate::from_ymd_opt(2025, 1, 26).unwrap()));
    /// assert!(!holiday.applies_on(NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()));
    /// ```
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if self.recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}
