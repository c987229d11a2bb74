//! Booking engine.

pub mod service;

pub use service::BookingService;
