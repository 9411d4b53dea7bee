//! Problem instances: clients, vehicles and the travel matrix.
//!
//! Instances arrive as JSON documents produced by the exporter. Clients and
//! vehicles that omit an explicit `id` take their position in the list,
//! which is also the row/column they occupy in `distances`.

use geo::Coord;
use serde::{Deserialize, Serialize, Serializer};

/// Identifier of a client, as referenced by route stops.
pub type ClientId = usize;

/// Identifier of a vehicle, as referenced by routes.
pub type VehicleId = usize;

/// A customer to be visited within a time window.
///
/// # Examples
/// ```
/// use routecheck_core::Client;
///
/// let client = Client::new(3, 12, 0, 100, 10);
/// assert_eq!(client.id, 3);
/// assert!(client.pos.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    /// Unique identifier.
    pub id: ClientId,
    /// Load delivered at this client.
    pub demand: u32,
    /// Start of the time window.
    pub earliest: i32,
    /// End of the time window, before tolerance.
    pub latest: i32,
    /// Time spent serving the client.
    pub service_time: u32,
    /// Planar position the distances were derived from.
    #[serde(
        serialize_with = "serialize_pos",
        skip_serializing_if = "Option::is_none"
    )]
    pub pos: Option<Coord<f64>>,
}

impl Client {
    /// Construct a client without a position.
    #[must_use]
    pub const fn new(
        id: ClientId,
        demand: u32,
        earliest: i32,
        latest: i32,
        service_time: u32,
    ) -> Self {
        Self {
            id,
            demand,
            earliest,
            latest,
            service_time,
            pos: None,
        }
    }

    /// Attach the planar position.
    #[must_use]
    pub const fn with_pos(mut self, pos: Coord<f64>) -> Self {
        self.pos = Some(pos);
        self
    }
}

/// A vehicle available to serve one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    /// Unique identifier.
    pub id: VehicleId,
    /// Maximum load carried along a route.
    pub capacity: u32,
    /// Cost charged once for every route using this vehicle.
    pub fixed_cost: f64,
}

impl Vehicle {
    /// Construct a vehicle.
    #[must_use]
    pub const fn new(id: VehicleId, capacity: u32, fixed_cost: f64) -> Self {
        Self {
            id,
            capacity,
            fixed_cost,
        }
    }
}

/// The static problem definition a solution is checked against.
///
/// # Examples
/// ```
/// use routecheck_core::Instance;
///
/// let instance: Instance = serde_json::from_str(
///     r#"{
///         "distances": [[0, 5], [5, 0]],
///         "clients": [
///             {"demand": 0, "earliest": 0, "latest": 100, "service_time": 0, "pos": [0, 0]},
///             {"demand": 4, "earliest": 0, "latest": 100, "service_time": 0, "pos": [3, 4]}
///         ],
///         "vehicles": [{"id": 0, "capacity": 10, "fixed_cost": 1}],
///         "allowed_deviation": 0.5
///     }"#,
/// )
/// .expect("valid instance");
///
/// assert_eq!(instance.clients[1].id, 1);
/// assert_eq!(instance.distances[0][1], 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInstance")]
pub struct Instance {
    /// Instance name, used to label reports when the solution has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Travel times between clients, indexed by position in `clients`.
    pub distances: Vec<Vec<f64>>,
    /// Clients to be visited.
    pub clients: Vec<Client>,
    /// Available vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Flat tolerance added to every client's `latest`.
    pub allowed_deviation: f64,
}

#[derive(Deserialize)]
struct RawInstance {
    #[serde(default)]
    name: Option<String>,
    distances: Vec<Vec<f64>>,
    clients: Vec<RawClient>,
    vehicles: Vec<RawVehicle>,
    #[serde(default)]
    allowed_deviation: f64,
}

#[derive(Deserialize)]
struct RawClient {
    #[serde(default)]
    id: Option<ClientId>,
    demand: u32,
    earliest: i32,
    latest: i32,
    service_time: u32,
    #[serde(default)]
    pos: Option<[f64; 2]>,
}

#[derive(Deserialize)]
struct RawVehicle {
    #[serde(default)]
    id: Option<VehicleId>,
    capacity: u32,
    fixed_cost: f64,
}

impl From<RawInstance> for Instance {
    fn from(raw: RawInstance) -> Self {
        let clients = raw
            .clients
            .into_iter()
            .enumerate()
            .map(|(position, client)| Client {
                id: client.id.unwrap_or(position),
                demand: client.demand,
                earliest: client.earliest,
                latest: client.latest,
                service_time: client.service_time,
                pos: client.pos.map(|[x, y]| Coord { x, y }),
            })
            .collect();
        let vehicles = raw
            .vehicles
            .into_iter()
            .enumerate()
            .map(|(position, vehicle)| Vehicle {
                id: vehicle.id.unwrap_or(position),
                capacity: vehicle.capacity,
                fixed_cost: vehicle.fixed_cost,
            })
            .collect();
        Self {
            name: raw.name,
            distances: raw.distances,
            clients,
            vehicles,
            allowed_deviation: raw.allowed_deviation,
        }
    }
}

#[expect(
    clippy::ref_option,
    reason = "serde passes the field by reference to serialize_with"
)]
fn serialize_pos<S>(pos: &Option<Coord<f64>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    pos.map(|coord| [coord.x, coord.y]).serialize(serializer)
}
