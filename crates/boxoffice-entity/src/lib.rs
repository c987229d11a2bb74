//! # boxoffice-entity
//!
//! Domain entity models for BoxOffice. Every struct in this crate is either
//! a table row (deriving `sqlx::FromRow`), the data needed to insert one,
//! or a read-only projection of one.

pub mod booking;
pub mod movie;
pub mod user;

pub use booking::{Booking, NewBooking};
pub use movie::{Movie, MovieListing, NewMovie};
pub use user::{NewUser, User};
