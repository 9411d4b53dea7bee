//! Lookup tables built once per validation call.

use std::collections::HashMap;

use crate::{Client, ClientId, Instance, Stop, StructuralError, Vehicle, VehicleId};

/// A stop resolved against the instance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Visit<'a> {
    pub(crate) client: &'a Client,
    pub(crate) position: usize,
    pub(crate) arrive_time: f64,
}

/// Id lookups over a structurally sound [`Instance`].
#[derive(Debug)]
pub(crate) struct InstanceIndex<'a> {
    distances: &'a [Vec<f64>],
    clients: HashMap<ClientId, (usize, &'a Client)>,
    vehicles: HashMap<VehicleId, &'a Vehicle>,
}

impl<'a> InstanceIndex<'a> {
    /// Index `instance`, rejecting duplicate ids, empty time windows and a
    /// distance matrix that is not square over the clients.
    pub(crate) fn new(instance: &'a Instance) -> Result<Self, StructuralError> {
        check_matrix_shape(&instance.distances, instance.clients.len())?;
        if !is_symmetric(&instance.distances) {
            log::warn!(
                "distance matrix is not symmetric; arcs are read in the order the pairing mode dictates"
            );
        }

        let mut clients = HashMap::with_capacity(instance.clients.len());
        for (position, client) in instance.clients.iter().enumerate() {
            if client.earliest > client.latest {
                return Err(StructuralError::InvalidTimeWindow {
                    client_id: client.id,
                    earliest: client.earliest,
                    latest: client.latest,
                });
            }
            if clients.insert(client.id, (position, client)).is_some() {
                return Err(StructuralError::DuplicateClient {
                    client_id: client.id,
                });
            }
        }

        let mut vehicles = HashMap::with_capacity(instance.vehicles.len());
        for vehicle in &instance.vehicles {
            if vehicles.insert(vehicle.id, vehicle).is_some() {
                return Err(StructuralError::DuplicateVehicle {
                    vehicle_id: vehicle.id,
                });
            }
        }

        Ok(Self {
            distances: &instance.distances,
            clients,
            vehicles,
        })
    }

    pub(crate) fn vehicle(&self, vehicle_id: VehicleId) -> Result<&'a Vehicle, StructuralError> {
        self.vehicles
            .get(&vehicle_id)
            .copied()
            .ok_or(StructuralError::UnknownVehicle { vehicle_id })
    }

    pub(crate) fn visit(
        &self,
        vehicle_id: VehicleId,
        stop: &Stop,
    ) -> Result<Visit<'a>, StructuralError> {
        let (position, client) = self.clients.get(&stop.client_id).copied().ok_or(
            StructuralError::UnknownClient {
                vehicle_id,
                client_id: stop.client_id,
            },
        )?;
        Ok(Visit {
            client,
            position,
            arrive_time: stop.arrive_time,
        })
    }

    /// Travel time between two visits, read as `distances[from][to]`.
    pub(crate) fn distance(&self, from: &Visit<'_>, to: &Visit<'_>) -> f64 {
        self.distances
            .get(from.position)
            .and_then(|row| row.get(to.position))
            .copied()
            .unwrap_or_else(|| {
                log::warn!(
                    "Matrix access failed from index {} to index {}; falling back to zero",
                    from.position,
                    to.position
                );
                debug_assert!(
                    false,
                    "Matrix access failed from index {} to index {}",
                    from.position,
                    to.position
                );
                0.0
            })
    }
}

fn check_matrix_shape(distances: &[Vec<f64>], expected: usize) -> Result<(), StructuralError> {
    if distances.len() != expected {
        return Err(StructuralError::MissingDistanceRows {
            expected,
            found: distances.len(),
        });
    }
    for (row, values) in distances.iter().enumerate() {
        if values.len() != expected {
            return Err(StructuralError::RaggedDistances {
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(())
}

#[expect(
    clippy::float_cmp,
    reason = "symmetry is an exact property of the exported matrix"
)]
fn is_symmetric(distances: &[Vec<f64>]) -> bool {
    distances.iter().enumerate().all(|(i, row)| {
        row.iter().enumerate().all(|(j, &there)| {
            distances
                .get(j)
                .and_then(|other| other.get(i))
                .is_some_and(|&back| back == there)
        })
    })
}
