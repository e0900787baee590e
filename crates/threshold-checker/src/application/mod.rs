//! Application layer: running a check and attaching outcome handlers.

pub mod checker;
pub mod handlers;
