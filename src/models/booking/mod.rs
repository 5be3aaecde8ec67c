//! Booking model for the weekly iPad timetable.
//!
//! The week is a fixed table of five weekdays by twelve periods. Every
//! (day, period) cell always exists; booking or clearing a slot only changes
//! its text, and an empty string means the slot is free.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

pub const DAY_COUNT: usize = 5;
pub const PERIOD_COUNT: usize = 12;
pub const SLOT_COUNT: usize = DAY_COUNT * PERIOD_COUNT;

/// A weekday column of the booking grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a calendar weekday onto a grid column. Weekends have no column.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| ParseLabelError::UnknownDay(s.to_string()))
    }
}

/// A timetable row of the booking grid, in school-day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Lesson1,
    Lesson2,
    Lesson3,
    Rest,
    Lesson4,
    Lesson5,
    Lesson6,
    LunchTime,
    Lesson7,
    Lesson8,
    ReadingTime,
    Eca,
}

impl Period {
    pub const ALL: [Period; PERIOD_COUNT] = [
        Period::Lesson1,
        Period::Lesson2,
        Period::Lesson3,
        Period::Rest,
        Period::Lesson4,
        Period::Lesson5,
        Period::Lesson6,
        Period::LunchTime,
        Period::Lesson7,
        Period::Lesson8,
        Period::ReadingTime,
        Period::Eca,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Period::Lesson1 => "Lesson 1",
            Period::Lesson2 => "Lesson 2",
            Period::Lesson3 => "Lesson 3",
            Period::Rest => "Rest",
            Period::Lesson4 => "Lesson 4",
            Period::Lesson5 => "Lesson 5",
            Period::Lesson6 => "Lesson 6",
            Period::LunchTime => "Lunch time",
            Period::Lesson7 => "Lesson 7",
            Period::Lesson8 => "Lesson 8",
            Period::ReadingTime => "Reading Time",
            Period::Eca => "ECA",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.label() == s)
            .ok_or_else(|| ParseLabelError::UnknownPeriod(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseLabelError {
    #[error("unknown day: {0:?}")]
    UnknownDay(String),
    #[error("unknown period: {0:?}")]
    UnknownPeriod(String),
}

/// Identifies one cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingKey {
    pub day: Day,
    pub period: Period,
}

impl BookingKey {
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// All 60 keys, day-major.
    pub fn all() -> impl Iterator<Item = BookingKey> {
        Day::ALL.into_iter().flat_map(|day| {
            Period::ALL
                .into_iter()
                .map(move |period| BookingKey::new(day, period))
        })
    }
}

impl fmt::Display for BookingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.day, self.period)
    }
}

/// The whole week of bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingGrid {
    cells: [[String; PERIOD_COUNT]; DAY_COUNT],
}

impl Default for BookingGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingGrid {
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| String::new())),
        }
    }

    pub fn get(&self, key: BookingKey) -> &str {
        &self.cells[key.day.index()][key.period.index()]
    }

    pub fn set(&mut self, key: BookingKey, text: impl Into<String>) {
        self.cells[key.day.index()][key.period.index()] = text.into();
    }

    /// Free a slot. The cell itself stays in the grid.
    pub fn clear(&mut self, key: BookingKey) {
        self.cells[key.day.index()][key.period.index()].clear();
    }

    /// Mutable access used by the live cell editors.
    pub fn get_mut(&mut self, key: BookingKey) -> &mut String {
        &mut self.cells[key.day.index()][key.period.index()]
    }

    pub fn is_booked(&self, key: BookingKey) -> bool {
        !self.get(key).is_empty()
    }

    pub fn booked_count(&self) -> usize {
        self.iter().filter(|(_, text)| !text.is_empty()).count()
    }

    /// Every cell in day-major order, booked or not.
    pub fn iter(&self) -> impl Iterator<Item = (BookingKey, &str)> + '_ {
        BookingKey::all().map(move |key| (key, self.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Lesson 1", Period::Lesson1)]
    #[test_case("Rest", Period::Rest)]
    #[test_case("Lunch time", Period::LunchTime)]
    #[test_case("Reading Time", Period::ReadingTime)]
    #[test_case("ECA", Period::Eca)]
    fn test_period_label_parses(label: &str, expected: Period) {
        assert_eq!(label.parse::<Period>().unwrap(), expected);
        assert_eq!(expected.to_string(), label);
    }

    #[test_case("lunch time")]
    #[test_case("Lesson 9")]
    #[test_case("")]
    fn test_unknown_period_is_rejected(label: &str) {
        assert_eq!(
            label.parse::<Period>(),
            Err(ParseLabelError::UnknownPeriod(label.to_string()))
        );
    }

    #[test]
    fn test_day_labels_round_trip() {
        for day in Day::ALL {
            assert_eq!(day.label().parse::<Day>().unwrap(), day);
        }
        assert!("Saturday".parse::<Day>().is_err());
    }

    #[test]
    fn test_weekends_have_no_column() {
        assert_eq!(Day::from_weekday(Weekday::Wed), Some(Day::Wednesday));
        assert_eq!(Day::from_weekday(Weekday::Sat), None);
        assert_eq!(Day::from_weekday(Weekday::Sun), None);
    }

    #[test]
    fn test_period_order_matches_timetable() {
        let labels: Vec<_> = Period::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels[3], "Rest");
        assert_eq!(labels[7], "Lunch time");
        assert_eq!(labels.last(), Some(&"ECA"));
    }

    #[test]
    fn test_new_grid_has_sixty_empty_slots() {
        let grid = BookingGrid::new();
        assert_eq!(grid.iter().count(), SLOT_COUNT);
        assert!(grid.iter().all(|(_, text)| text.is_empty()));
        assert_eq!(grid.booked_count(), 0);
    }

    #[test]
    fn test_set_overwrites_and_clear_frees_only_that_slot() {
        let mut grid = BookingGrid::new();
        let key = BookingKey::new(Day::Tuesday, Period::Lesson3);
        let other = BookingKey::new(Day::Friday, Period::Eca);

        grid.set(key, "Year 5");
        grid.set(key, "Year 6");
        grid.set(other, "Robotics");
        assert_eq!(grid.get(key), "Year 6");
        assert_eq!(grid.booked_count(), 2);

        grid.clear(key);
        assert_eq!(grid.get(key), "");
        assert!(!grid.is_booked(key));
        assert_eq!(grid.get(other), "Robotics");
        assert_eq!(grid.iter().count(), SLOT_COUNT);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut grid = BookingGrid::new();
        let key = BookingKey::new(Day::Monday, Period::Lesson1);
        grid.get_mut(key).push_str("Alice");
        assert_eq!(grid.get(key), "Alice");
    }

    #[test]
    fn test_keys_are_day_major_and_unique() {
        let keys: Vec<_> = BookingKey::all().collect();
        assert_eq!(keys.len(), SLOT_COUNT);
        assert_eq!(keys[0], BookingKey::new(Day::Monday, Period::Lesson1));
        assert_eq!(keys[12], BookingKey::new(Day::Tuesday, Period::Lesson1));
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), SLOT_COUNT);
    }
}
