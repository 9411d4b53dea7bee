//! Test-only document builders used by unit and CLI tests.

use crate::{Client, ClientId, Document, Instance, Route, Solution, Stop, Vehicle, VehicleId};

/// Builds [`Document`]s around a small two-client instance.
///
/// The default instance holds clients 1 and 2, five time units apart, both
/// open over `[0, 100]` with no service time, and a single vehicle 0 with
/// capacity 10 and a fixed cost of 1.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    instance: Instance,
    routes: Vec<Route>,
    value: f64,
    name: Option<String>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::two_clients()
    }
}

impl DocumentBuilder {
    /// Start from the two-client instance without any route.
    #[must_use]
    pub fn two_clients() -> Self {
        Self {
            instance: Instance {
                name: None,
                distances: vec![vec![0.0, 5.0], vec![5.0, 0.0]],
                clients: vec![Client::new(1, 0, 0, 100, 0), Client::new(2, 0, 0, 100, 0)],
                vehicles: vec![Vehicle::new(0, 10, 1.0)],
                allowed_deviation: 0.0,
            },
            routes: Vec::new(),
            value: 0.0,
            name: None,
        }
    }

    /// Route vehicle 0 through clients 1 and 2, arriving at 0 and 5.
    ///
    /// These arrivals are the ones forward pairing recomputes; the cost of
    /// the route is 6.
    #[must_use]
    pub fn forward_route(self) -> Self {
        self.with_route(0, &[(1, 0.0), (2, 5.0)]).with_value(6.0)
    }

    /// Route vehicle 0 through clients 1 and 2 with the arrivals legacy
    /// pairing recomputes: client 1 is checked after the 5 unit arc.
    #[must_use]
    pub fn legacy_route(self) -> Self {
        self.with_route(0, &[(1, 5.0), (2, 5.0)]).with_value(6.0)
    }

    /// Append a route of `(client_id, arrive_time)` stops.
    #[must_use]
    pub fn with_route(mut self, vehicle_id: VehicleId, stops: &[(ClientId, f64)]) -> Self {
        let stops = stops
            .iter()
            .map(|&(client_id, arrive_time)| Stop::new(client_id, arrive_time))
            .collect();
        self.routes.push(Route::new(vehicle_id, stops));
        self
    }

    /// Set the claimed solution value.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Name the solution.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Change a client's window end. Unknown ids are ignored.
    #[must_use]
    pub fn with_latest(mut self, client_id: ClientId, latest: i32) -> Self {
        if let Some(client) = self.client_mut(client_id) {
            client.latest = latest;
        }
        self
    }

    /// Change a client's demand. Unknown ids are ignored.
    #[must_use]
    pub fn with_demand(mut self, client_id: ClientId, demand: u32) -> Self {
        if let Some(client) = self.client_mut(client_id) {
            client.demand = demand;
        }
        self
    }

    /// Set the flat deadline tolerance.
    #[must_use]
    pub const fn with_allowed_deviation(mut self, allowed_deviation: f64) -> Self {
        self.instance.allowed_deviation = allowed_deviation;
        self
    }

    /// Add a vehicle to the instance.
    #[must_use]
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.instance.vehicles.push(vehicle);
        self
    }

    /// Finish the document.
    #[must_use]
    pub fn build(self) -> Document {
        Document {
            instance: self.instance,
            solution: Solution {
                name: self.name,
                value: self.value,
                routes: self.routes,
            },
        }
    }

    fn client_mut(&mut self, client_id: ClientId) -> Option<&mut Client> {
        self.instance
            .clients
            .iter_mut()
            .find(|client| client.id == client_id)
    }
}
