//! HTTP request handlers, one module per route group.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod health;
