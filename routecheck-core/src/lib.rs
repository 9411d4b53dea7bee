//! Core types for checking vehicle-routing solutions.
//!
//! A [`Document`] pairs an [`Instance`] (clients with time windows and
//! demands, vehicles with capacities and fixed costs, and a travel matrix)
//! with a [`Solution`] (routes of timed stops plus a claimed total cost).
//! The [`Validator`] recomputes every route and returns a [`Report`] tree
//! that is empty for a feasible, correctly costed solution.
//!
//! # Examples
//!
//! ```
//! use routecheck_core::{Document, validate_solution};
//!
//! let document: Document = serde_json::from_str(
//!     r#"{
//!         "instance": {
//!             "name": "tiny",
//!             "distances": [[0, 5], [5, 0]],
//!             "clients": [
//!                 {"id": 0, "demand": 0, "earliest": 0, "latest": 100, "service_time": 0},
//!                 {"id": 1, "demand": 4, "earliest": 0, "latest": 100, "service_time": 0}
//!             ],
//!             "vehicles": [{"id": 0, "capacity": 10, "fixed_cost": 1}],
//!             "allowed_deviation": 0
//!         },
//!         "solution": {
//!             "value": 7,
//!             "routes": [{"vehicle_id": 0, "clients": [
//!                 {"client_id": 0, "arrive_time": 5},
//!                 {"client_id": 1, "arrive_time": 5}
//!             ]}]
//!         }
//!     }"#,
//! )
//! .expect("valid document");
//!
//! let report = validate_solution(&document.instance, &document.solution)
//!     .expect("structurally sound");
//! assert_eq!(
//!     report.to_string(),
//!     "Errors for tiny:\n- Expected solution value of 6, found 7"
//! );
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod document;
mod error;
mod index;
mod instance;
mod report;
mod solution;
mod validator;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use document::Document;
pub use error::StructuralError;
pub use instance::{Client, ClientId, Instance, Vehicle, VehicleId};
pub use report::{Entry, Report};
pub use solution::{Route, Solution, Stop};
pub use validator::{DEFAULT_REPORT_NAME, PairingMode, Validator, validate_solution};
