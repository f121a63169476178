//! Eisenhower: task classification and deadline tracking.
//!
//! This crate provides the core of a todo service that classifies tasks into
//! Eisenhower-matrix quadrants, derives urgency from deadlines, and projects
//! human-readable deadline status on every read.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure classification logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, classification, and lifecycle services

pub mod task;
