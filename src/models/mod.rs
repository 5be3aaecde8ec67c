// Model exports

pub mod booking;
pub mod settings;
