//! Errors for documents that cannot be validated at all.
//!
//! Feasibility problems are recorded in a [`Report`](crate::Report); these
//! errors cover dangling references and malformed instances, which abort
//! validation instead.

use thiserror::Error;

use crate::{ClientId, VehicleId};

/// A malformed document or a reference to a missing client or vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A route references a vehicle absent from the instance.
    #[error("route references unknown vehicle {vehicle_id}")]
    UnknownVehicle {
        /// Referenced vehicle.
        vehicle_id: VehicleId,
    },
    /// A stop references a client absent from the instance.
    #[error("route for vehicle {vehicle_id} references unknown client {client_id}")]
    UnknownClient {
        /// Vehicle whose route holds the stop.
        vehicle_id: VehicleId,
        /// Referenced client.
        client_id: ClientId,
    },
    /// Two clients share an identifier.
    #[error("client id {client_id} is declared more than once")]
    DuplicateClient {
        /// Repeated identifier.
        client_id: ClientId,
    },
    /// Two vehicles share an identifier.
    #[error("vehicle id {vehicle_id} is declared more than once")]
    DuplicateVehicle {
        /// Repeated identifier.
        vehicle_id: VehicleId,
    },
    /// A client's time window closes before it opens.
    #[error("client {client_id} has an empty time window [{earliest}, {latest}]")]
    InvalidTimeWindow {
        /// Affected client.
        client_id: ClientId,
        /// Declared window start.
        earliest: i32,
        /// Declared window end.
        latest: i32,
    },
    /// The distance matrix has a different number of rows than clients.
    #[error("distance matrix has {found} rows but the instance declares {expected} clients")]
    MissingDistanceRows {
        /// Number of clients.
        expected: usize,
        /// Number of rows present.
        found: usize,
    },
    /// A distance matrix row has the wrong length.
    #[error("expected distance vector of {expected} on index {row}, found {found}")]
    RaggedDistances {
        /// Offending row.
        row: usize,
        /// Number of clients.
        expected: usize,
        /// Length of the row.
        found: usize,
    },
}
