use std::path::{Path, PathBuf};

use super::persistence::StoreError;
use super::store::BookingStore;
use crate::models::booking::{BookingGrid, BookingKey};
use crate::services::export;

/// What happened while opening the store, for the UI to report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries dropped because they named an unknown day or period
    pub skipped: Vec<String>,
    pub legacy_format: bool,
    /// Load failure that forced an empty start
    pub load_error: Option<String>,
    /// Where an unreadable file was moved
    pub quarantined: Option<PathBuf>,
}

/// Owns the booking grid and writes it through to a [`BookingStore`].
pub struct BookingService<S: BookingStore> {
    store: S,
    grid: BookingGrid,
    /// Grid differs from what was last saved
    dirty: bool,
    /// A file that failed to load is still at the store path. It has to be
    /// moved aside before the first save may replace it.
    unloaded_file: bool,
}

impl<S: BookingStore> BookingService<S> {
    pub fn new(store: S, grid: BookingGrid) -> Self {
        Self {
            store,
            grid,
            dirty: false,
            unloaded_file: false,
        }
    }

    /// Load the stored grid. Never fails: an unusable file starts the week
    /// empty and the reason is returned in the report.
    pub fn open(store: S) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut unloaded_file = false;

        let grid = match store.load() {
            Ok(loaded) => {
                report.skipped = loaded.skipped;
                report.legacy_format = loaded.legacy_format;
                loaded.grid
            }
            Err(err @ StoreError::Malformed { .. }) => {
                log::warn!("{}; starting with an empty week", err);
                report.load_error = Some(err.to_string());
                match store.quarantine() {
                    Ok(moved) => report.quarantined = moved,
                    Err(e) => {
                        log::error!("Failed to move unreadable bookings file: {}", e);
                        unloaded_file = true;
                    }
                }
                BookingGrid::new()
            }
            Err(err) => {
                log::error!("{}; starting with an empty week", err);
                report.load_error = Some(err.to_string());
                unloaded_file = true;
                BookingGrid::new()
            }
        };

        let mut service = Self::new(store, grid);
        service.unloaded_file = unloaded_file;
        (service, report)
    }

    pub fn grid(&self) -> &BookingGrid {
        &self.grid
    }

    /// Live access for in-grid editing. Call [`Self::mark_dirty`] after a change.
    pub fn grid_mut(&mut self) -> &mut BookingGrid {
        &mut self.grid
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, key: BookingKey) -> &str {
        self.grid.get(key)
    }

    /// Write `text` into the slot and save the whole grid.
    pub fn book(&mut self, key: BookingKey, text: impl Into<String>) -> Result<(), StoreError> {
        self.grid.set(key, text);
        self.dirty = true;
        log::info!("Booked {}", key);
        self.save()
    }

    /// Empty the slot and save the whole grid.
    pub fn clear(&mut self, key: BookingKey) -> Result<(), StoreError> {
        self.grid.clear(key);
        self.dirty = true;
        log::info!("Cleared {}", key);
        self.save()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save unconditionally. On failure the grid stays dirty.
    ///
    /// If the stored file could not be loaded at startup it is moved aside
    /// first; when that fails nothing is written.
    pub fn save(&mut self) -> Result<(), StoreError> {
        if self.unloaded_file {
            if let Some(moved) = self.store.quarantine()? {
                log::warn!(
                    "Kept bookings file that failed to load as {} before saving",
                    moved.display()
                );
            }
            self.unloaded_file = false;
        }
        self.store.save(&self.grid)?;
        self.dirty = false;
        Ok(())
    }

    /// Save only when something changed since the last save.
    pub fn persist_if_dirty(&mut self) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn export_to(&self, path: &Path) -> anyhow::Result<()> {
        export::export_report(&self.grid, path)
    }
}
