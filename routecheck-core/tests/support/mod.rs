//! Shared document fixtures for the integration tests.

use routecheck_core::Document;
use serde_json::json;

/// Two clients five units apart, open over `[0, 100]`, served by vehicle 0
/// (capacity 10, fixed cost 1) arriving at 0 and 5 for a claimed value of 6.
pub fn two_client_document() -> Document {
    document_with_stops(&[(1, 0.0), (2, 5.0)])
}

/// The two-client instance with a single route over `stops`.
pub fn document_with_stops(stops: &[(usize, f64)]) -> Document {
    let clients: Vec<_> = stops
        .iter()
        .map(|&(client_id, arrive_time)| {
            json!({"client_id": client_id, "arrive_time": arrive_time})
        })
        .collect();
    serde_json::from_value(json!({
        "instance": {
            "distances": [[0, 5], [5, 0]],
            "clients": [
                {"id": 1, "demand": 0, "earliest": 0, "latest": 100, "service_time": 0},
                {"id": 2, "demand": 0, "earliest": 0, "latest": 100, "service_time": 0}
            ],
            "vehicles": [{"id": 0, "capacity": 10, "fixed_cost": 1}]
        },
        "solution": {
            "value": 6,
            "routes": [{"vehicle_id": 0, "clients": clients}]
        }
    }))
    .expect("fixture document is well formed")
}
