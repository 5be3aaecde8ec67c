use std::fs;
use std::path::{Path, PathBuf};

use super::persistence::{load_bookings, save_bookings, sibling_path, LoadedBookings, StoreError};
use crate::models::booking::BookingGrid;

/// Where the booking grid is kept between runs.
#[cfg_attr(test, mockall::automock)]
pub trait BookingStore {
    fn load(&self) -> Result<LoadedBookings, StoreError>;

    /// Replace the stored grid with `grid`, all 60 slots at once.
    fn save(&self, grid: &BookingGrid) -> Result<(), StoreError>;

    /// Move an unreadable file aside so the next save does not destroy it.
    /// Returns where it went, or `None` if there was nothing to move.
    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError>;
}

/// JSON file store at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonBookingStore {
    path: PathBuf,
}

impl JsonBookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookingStore for JsonBookingStore {
    fn load(&self) -> Result<LoadedBookings, StoreError> {
        load_bookings(&self.path)
    }

    fn save(&self, grid: &BookingGrid) -> Result<(), StoreError> {
        save_bookings(&self.path, grid)?;
        log::info!("Saved bookings to {}", self.path.display());
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let target = quarantine_target(&self.path);
        fs::rename(&self.path, &target).map_err(|source| StoreError::Write {
            path: target.clone(),
            source,
        })?;
        log::warn!(
            "Moved unreadable bookings file {} to {}",
            self.path.display(),
            target.display()
        );
        Ok(Some(target))
    }
}

/// First of `<file>.corrupt`, `<file>.corrupt.1`, ... that does not exist yet,
/// so an earlier set-aside file is never replaced.
fn quarantine_target(path: &Path) -> PathBuf {
    let first = sibling_path(path, ".corrupt");
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| sibling_path(path, &format!(".corrupt.{}", n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}
