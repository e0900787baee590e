//! Domain layer for the threshold check.

pub mod config;
pub mod draw;
pub mod outcome;
