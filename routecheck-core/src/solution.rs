//! Candidate solutions: routes of timed stops and a claimed total cost.

use serde::{Deserialize, Serialize};

use crate::{ClientId, VehicleId};

/// A visit to one client within a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Client visited at this stop.
    pub client_id: ClientId,
    /// Arrival time claimed by the solver.
    pub arrive_time: f64,
}

impl Stop {
    /// Construct a stop.
    #[must_use]
    pub const fn new(client_id: ClientId, arrive_time: f64) -> Self {
        Self {
            client_id,
            arrive_time,
        }
    }
}

/// One vehicle's ordered sequence of stops.
///
/// The JSON key for the stops is `clients`, matching the solver output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Vehicle driving the route.
    pub vehicle_id: VehicleId,
    /// Stops in traversal order.
    #[serde(rename = "clients")]
    pub stops: Vec<Stop>,
}

impl Route {
    /// Construct a route.
    #[must_use]
    pub const fn new(vehicle_id: VehicleId, stops: Vec<Stop>) -> Self {
        Self { vehicle_id, stops }
    }
}

/// A proposed assignment of vehicles to ordered client visits.
///
/// # Examples
/// ```
/// use routecheck_core::Solution;
///
/// let solution: Solution = serde_json::from_str(
///     r#"{
///         "value": 6,
///         "distance": 5,
///         "iter_found": 12,
///         "routes": [
///             {"vehicle_id": 0, "clients": [
///                 {"client_id": 1, "arrive_time": 0, "wait_time": 0},
///                 {"client_id": 2, "arrive_time": 5}
///             ]}
///         ]
///     }"#,
/// )
/// .expect("valid solution");
///
/// assert_eq!(solution.routes[0].stops.len(), 2);
/// assert!(solution.name.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Solution name, used to label the root report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Claimed total cost: fixed costs plus travelled arcs.
    pub value: f64,
    /// Routes in the order they were produced.
    pub routes: Vec<Route>,
}
