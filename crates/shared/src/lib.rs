//! Shared domain types for the Latch desktop scaffold.

pub mod domain;
pub mod error;
