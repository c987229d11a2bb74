//! Shared value types.

pub mod id;
pub mod timestamp;

pub use id::{BookingId, MovieId, UserId};
