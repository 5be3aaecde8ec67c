//! On-disk format for the booking grid.
//!
//! Current files hold one explicit record per slot. Files written by the
//! first release are a flat object keyed by `"<Day>-<Period>"`; those are
//! still read and are rewritten in the current format on the next save.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::booking::{BookingGrid, BookingKey, Day, Period};

pub const FORMAT_VERSION: u32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read bookings from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write bookings to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bookings file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize bookings: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBooking {
    pub day: String,
    pub period: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDocument {
    pub version: u32,
    pub bookings: Vec<StoredBooking>,
}

impl BookingDocument {
    pub fn from_grid(grid: &BookingGrid) -> Self {
        Self {
            version: FORMAT_VERSION,
            bookings: grid
                .iter()
                .map(|(key, text)| StoredBooking {
                    day: key.day.label().to_string(),
                    period: key.period.label().to_string(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedBookings {
    Structured(BookingDocument),
    Legacy(BTreeMap<String, String>),
}

/// Result of reading the bookings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedBookings {
    pub grid: BookingGrid,
    /// Entries that named an unknown day or period
    pub skipped: Vec<String>,
    pub legacy_format: bool,
}

/// Split a first-release key such as `"Monday-Lunch time"`.
///
/// The day name is matched first so a hyphen inside a period label does
/// not break the split.
pub fn split_legacy_key(key: &str) -> Option<BookingKey> {
    Day::ALL.into_iter().find_map(|day| {
        let period = key.strip_prefix(day.label())?.strip_prefix('-')?;
        period
            .parse::<Period>()
            .ok()
            .map(|period| BookingKey::new(day, period))
    })
}

pub fn load_bookings(path: &Path) -> Result<LoadedBookings, StoreError> {
    // Raw bytes, so text that is not UTF-8 is reported as malformed content
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("No bookings file at {}, starting empty", path.display());
            return Ok(LoadedBookings::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let persisted: PersistedBookings =
        serde_json::from_slice(&data).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut loaded = LoadedBookings::default();
    match persisted {
        PersistedBookings::Structured(document) => {
            if document.version > FORMAT_VERSION {
                log::warn!(
                    "Bookings file {} has format version {}, newer than {}; reading known fields",
                    path.display(),
                    document.version,
                    FORMAT_VERSION
                );
            }
            for entry in document.bookings {
                match (entry.day.parse::<Day>(), entry.period.parse::<Period>()) {
                    (Ok(day), Ok(period)) => loaded.grid.set(BookingKey::new(day, period), entry.text),
                    (Err(err), _) | (_, Err(err)) => {
                        log::warn!("Skipping booking entry in {}: {}", path.display(), err);
                        loaded.skipped.push(format!("{}-{}", entry.day, entry.period));
                    }
                }
            }
        }
        PersistedBookings::Legacy(entries) => {
            log::info!("Reading first-release bookings file {}", path.display());
            loaded.legacy_format = true;
            for (raw_key, text) in entries {
                match split_legacy_key(&raw_key) {
                    Some(key) => loaded.grid.set(key, text),
                    None => {
                        log::warn!(
                            "Skipping booking entry in {}: unrecognised key {:?}",
                            path.display(),
                            raw_key
                        );
                        loaded.skipped.push(raw_key);
                    }
                }
            }
        }
    }

    log::info!(
        "Loaded {} booked slot(s) from {}",
        loaded.grid.booked_count(),
        path.display()
    );
    Ok(loaded)
}

/// Write the full grid, replacing the file through a rename so a crash
/// mid-write leaves the previous contents intact.
pub fn save_bookings(path: &Path, grid: &BookingGrid) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let document = BookingDocument::from_grid(grid);
    let data = serde_json::to_string_pretty(&document).map_err(StoreError::Serialize)?;

    let tmp_path = sibling_path(path, ".tmp");
    fs::write(&tmp_path, data).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;
    Ok(())
}

/// `bookings.json` -> `bookings.json<suffix>` in the same directory.
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("bookings.json"));
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_legacy_key() {
        assert_eq!(
            split_legacy_key("Wednesday-Lunch time"),
            Some(BookingKey::new(Day::Wednesday, Period::LunchTime))
        );
        assert_eq!(
            split_legacy_key("Friday-ECA"),
            Some(BookingKey::new(Day::Friday, Period::Eca))
        );
        assert_eq!(split_legacy_key("Friday ECA"), None);
        assert_eq!(split_legacy_key("Saturday-Lesson 1"), None);
        assert_eq!(split_legacy_key("Monday-Lesson 9"), None);
    }

    #[test]
    fn test_missing_file_is_empty_grid() {
        let dir = tempdir().unwrap();
        let loaded = load_bookings(&dir.path().join("bookings.json")).unwrap();
        assert_eq!(loaded.grid, BookingGrid::new());
        assert!(loaded.skipped.is_empty());
        assert!(!loaded.legacy_format);
    }

    #[test]
    fn test_save_writes_every_slot_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let mut grid = BookingGrid::new();
        grid.set(BookingKey::new(Day::Monday, Period::Lesson1), "Alice");

        save_bookings(&path, &grid).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let document: BookingDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.version, FORMAT_VERSION);
        assert_eq!(document.bookings.len(), 60);
        assert_eq!(
            document.bookings[0],
            StoredBooking {
                day: "Monday".to_string(),
                period: "Lesson 1".to_string(),
                text: "Alice".to_string(),
            }
        );
        assert!(!sibling_path(&path, ".tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("bookings.json");
        save_bookings(&path, &BookingGrid::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_legacy_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(
            &path,
            r#"{"Monday-Lesson 1": "Alice", "Thursday-Reading Time": "4B", "Friday-ECA": ""}"#,
        )
        .unwrap();

        let loaded = load_bookings(&path).unwrap();
        assert!(loaded.legacy_format);
        assert_eq!(
            loaded.grid.get(BookingKey::new(Day::Monday, Period::Lesson1)),
            "Alice"
        );
        assert_eq!(
            loaded.grid.get(BookingKey::new(Day::Thursday, Period::ReadingTime)),
            "4B"
        );
        assert_eq!(loaded.grid.booked_count(), 2);
    }

    #[test]
    fn test_unknown_entries_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(
            &path,
            r#"{"version": 2, "bookings": [
                {"day": "Monday", "period": "Rest", "text": "Library"},
                {"day": "Sunday", "period": "Rest", "text": "nobody"},
                {"day": "Monday", "period": "Lesson 13", "text": "nobody"}
            ]}"#,
        )
        .unwrap();

        let loaded = load_bookings(&path).unwrap();
        assert_eq!(
            loaded.grid.get(BookingKey::new(Day::Monday, Period::Rest)),
            "Library"
        );
        assert_eq!(loaded.grid.booked_count(), 1);
        assert_eq!(loaded.skipped, vec!["Sunday-Rest", "Monday-Lesson 13"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_bookings(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, b"{\"Monday-Lesson 1\": \"Caf\xe9 club\"}").unwrap();

        assert!(matches!(
            load_bookings(&path),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, r#"["Monday-Lesson 1", "Alice"]"#).unwrap();

        assert!(matches!(
            load_bookings(&path),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_sibling_path_appends_suffix() {
        assert_eq!(
            sibling_path(Path::new("data/bookings.json"), ".corrupt"),
            PathBuf::from("data/bookings.json.corrupt")
        );
    }
}
