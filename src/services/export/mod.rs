//! Plain-text schedule report.
//!
//! One header row of day names, then one tab-separated row per period.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::booking::{BookingGrid, BookingKey, Day, Period};

pub const REPORT_TITLE: &str = "iPad Booking Schedule";

pub fn render_report(grid: &BookingGrid) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push_str("\n\n");

    let header: Vec<&str> = std::iter::once("Time")
        .chain(Day::ALL.iter().map(|day| day.label()))
        .collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for period in Period::ALL {
        let row: Vec<&str> = std::iter::once(period.label())
            .chain(
                Day::ALL
                    .iter()
                    .map(|&day| grid.get(BookingKey::new(day, period))),
            )
            .collect();
        out.push_str(&row.join("\t"));
        out.push('\n');
    }

    out
}

/// Write the report to `path`, replacing any previous report.
pub fn export_report(grid: &BookingGrid, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }
    fs::write(path, render_report(grid))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    log::info!("Exported booking report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn report_for_empty_grid_has_title_header_and_twelve_rows() {
        let report = render_report(&BookingGrid::new());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2 + 1 + 12);
        assert_eq!(lines[0], "iPad Booking Schedule");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Time\tMonday\tTuesday\tWednesday\tThursday\tFriday");
        assert_eq!(lines[3], "Lesson 1\t\t\t\t\t");
        assert_eq!(lines[14], "ECA\t\t\t\t\t");
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn booking_lands_in_its_day_column() {
        let mut grid = BookingGrid::new();
        grid.set(BookingKey::new(Day::Monday, Period::Lesson1), "Alice");
        grid.set(BookingKey::new(Day::Thursday, Period::LunchTime), "Chess club");

        let report = render_report(&grid);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[3], "Lesson 1\tAlice\t\t\t\t");
        let lunch: Vec<&str> = lines[3 + Period::LunchTime.index()].split('\t').collect();
        assert_eq!(lunch, vec!["Lunch time", "", "", "", "Chess club", ""]);
    }

    #[test]
    fn export_overwrites_previous_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ipad_bookings.txt");
        fs::write(&path, "stale report that is much longer than the new one ".repeat(100)).unwrap();

        let grid = BookingGrid::new();
        export_report(&grid, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), render_report(&grid));
    }

    #[test]
    fn export_into_missing_directory_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("week.txt");
        export_report(&BookingGrid::new(), &path).unwrap();
        assert!(path.exists());
    }
}
