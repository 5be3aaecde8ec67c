// Test fixtures - reusable booking data
// Provides consistent grids across integration tests

#![allow(dead_code)]

use ipad_booking::models::booking::{BookingGrid, BookingKey, Day, Period};

/// Slot used by the end-to-end reload check
pub fn lunch_wednesday() -> BookingKey {
    BookingKey::new(Day::Wednesday, Period::LunchTime)
}

/// A typical week: a few lessons, a club and an empty Friday
pub fn typical_week() -> BookingGrid {
    let mut grid = BookingGrid::new();
    grid.set(BookingKey::new(Day::Monday, Period::Lesson1), "Alice");
    grid.set(BookingKey::new(Day::Monday, Period::Lesson2), "3C Maths");
    grid.set(BookingKey::new(Day::Tuesday, Period::Rest), "Library");
    grid.set(lunch_wednesday(), "iPad-3");
    grid.set(BookingKey::new(Day::Thursday, Period::ReadingTime), "4B - guided reading");
    grid.set(BookingKey::new(Day::Thursday, Period::Eca), "Coding club");
    grid
}

/// First-release file contents for `typical_week`
pub fn typical_week_legacy_json() -> String {
    let mut entries = serde_json::Map::new();
    for (key, text) in typical_week().iter() {
        entries.insert(
            format!("{}-{}", key.day, key.period),
            serde_json::Value::String(text.to_string()),
        );
    }
    serde_json::Value::Object(entries).to_string()
}
