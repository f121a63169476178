//! Eisenhower-matrix task management.
//!
//! This module creates and mutates task records, derives a boolean urgency
//! flag from each task's deadline, resolves the Eisenhower quadrant from
//! importance and urgency, and keeps both derived fields reconciled with
//! their source fields across partial updates. Deadline status is projected
//! fresh on every read and never persisted. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
