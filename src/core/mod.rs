//! Core utilities shared by every system: errors, logging and random streams.

pub mod error;
pub mod logger;
pub mod random;
