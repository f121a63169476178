//! Unit tests for task classification and lifecycle behaviour.
