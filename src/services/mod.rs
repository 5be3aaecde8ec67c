// Service module exports

pub mod booking;
pub mod export;
pub mod settings;
