//! Booking entities.

pub mod model;

pub use model::{Booking, NewBooking};
