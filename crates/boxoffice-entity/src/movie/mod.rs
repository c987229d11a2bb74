//! Movie catalog entities.

pub mod model;

pub use model::{Movie, MovieListing, NewMovie};
