//! Transport route server.
//!
//! Transporters publish routes between cities, optionally through
//! intermediate stops, and move them through a small lifecycle. Customers
//! search for routes that cover the leg they want to travel, including
//! legs that are only part of a longer route.

pub mod config;
pub mod domain;
pub mod logging;
pub mod search;
pub mod service;
pub mod store;
pub mod web;
