//! Integration tests against the assembled router and a live listener

pub mod api_test;
