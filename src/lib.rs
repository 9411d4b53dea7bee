//! Facade crate for the routecheck solution validator.
//!
//! This crate re-exports the core domain types, the validator and its
//! diagnostic report. Test builders are available behind the
//! `test-support` feature.

#![forbid(unsafe_code)]

pub use routecheck_core::{
    Client, ClientId, DEFAULT_REPORT_NAME, Document, Entry, Instance, PairingMode, Report, Route,
    Solution, Stop, StructuralError, Validator, Vehicle, VehicleId, validate_solution,
};

#[cfg(feature = "test-support")]
pub use routecheck_core::test_support;
