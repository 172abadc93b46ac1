//! # climb-core
//!
//! Core types for climblog.
//!
//! This crate provides the pieces every other climblog crate builds on:
//! - Grade tables (V-scale and YDS) with label/index lookup
//! - Tagged enums for climb type, attempt style, and attempt performance
//! - The `Climb` / `Attempt` record model with its field invariants
//! - `ClimbStore`, the in-memory collection keyed by (name, location)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod grades;
pub mod store;

pub use entities::{Attempt, Climb, ClimbDate, Stars, TEXT_FIELD_MAX_BYTES};
pub use enums::{AttemptStyle, ClimbType, Performance, Tagged};
pub use errors::CoreError;
pub use grades::GradeScale;
pub use store::{ClimbStore, RECORD_COUNT_MAX};
