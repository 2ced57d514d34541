//! Shared test helpers for `salesdigest-core` integration tests.
//!
//! In-memory ports plus record fixtures so the run tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;
