//! Threshold Core — shared abstractions.
//!
//! This crate defines the ports the checker depends on: the random source,
//! the output sink, and the error type. It contains no infrastructure code.

pub mod error;
pub mod report;
pub mod rng;
