//! Property-based tests

pub mod event_proptest;
