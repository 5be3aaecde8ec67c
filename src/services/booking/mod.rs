//! Booking persistence and the service that owns the live grid.

pub mod persistence;
mod service;
mod store;

pub use persistence::{LoadedBookings, StoreError};
pub use service::{BookingService, LoadReport};
pub use store::{BookingStore, JsonBookingStore};

#[cfg(test)]
pub use store::MockBookingStore;
