// Date utility functions

use chrono::{Datelike, NaiveDate};

/// One row of a month calendar, Monday first. `None` pads days that
/// belong to the neighbouring months.
pub type CalendarWeek = [Option<u32>; 7];

/// Rows of day numbers for `month` of `year`, Monday-first.
/// Returns an empty list for an invalid month.
pub fn month_weeks(year: i32, month: u32) -> Vec<CalendarWeek> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let days = days_in_month(first);
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week: CalendarWeek = [None; 7];
    let mut column = lead;
    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}

pub fn days_in_month(first_of_month: NaiveDate) -> u32 {
    let next = first_of_month
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first_of_month);
    next.signed_duration_since(first_of_month).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_starting_thursday() {
        // October 2026 starts on a Thursday
        let weeks = month_weeks(2026, 10);
        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks[0],
            [None, None, None, Some(1), Some(2), Some(3), Some(4)]
        );
        assert_eq!(
            weeks[4],
            [Some(26), Some(27), Some(28), Some(29), Some(30), Some(31), None]
        );
    }

    #[test]
    fn test_february_fitting_four_rows() {
        // February 2021 starts on a Monday and has 28 days
        let weeks = month_weeks(2021, 2);
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[3][6], Some(28));
    }

    #[test]
    fn test_leap_february() {
        let first = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(days_in_month(first), 29);
        let total: usize = month_weeks(2024, 2)
            .iter()
            .map(|w| w.iter().flatten().count())
            .sum();
        assert_eq!(total, 29);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let first = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(days_in_month(first), 31);
    }

    #[test]
    fn test_invalid_month_is_empty() {
        assert!(month_weeks(2026, 13).is_empty());
    }
}
