//! Threshold Checker — draw a number, classify it, report it.
//!
//! Draws one integer from an injected random source, emits it, and settles
//! into exactly one of two outcomes depending on whether the draw is
//! strictly greater than the configured threshold.

pub mod application;
pub mod domain;
