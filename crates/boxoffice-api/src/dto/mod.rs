//! Data transfer objects for HTTP request and response bodies.

pub mod request;
pub mod response;
