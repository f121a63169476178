//! In-memory integration tests for the Eisenhower task service.
//!
//! Tests are organized into modules by functionality:
//! - `lifecycle_tests`: create/update/complete/delete flows
//! - `visibility_tests`: ownership gating and role-based listing
//! - `stats_tests`: quadrant and timing statistics

mod in_memory {
    pub mod helpers;

    mod lifecycle_tests;
    mod stats_tests;
    mod visibility_tests;
}
