//! Solution validation.
//!
//! The validator recomputes arrival times, remaining capacity and total
//! cost for every route and records each violation in a [`Report`]. One
//! report is built per route and attached to the root only when it holds
//! at least one violation; the final entry, if any, is the aggregate cost
//! mismatch. Malformed documents abort with a [`StructuralError`] instead.

use serde::{Deserialize, Serialize};

use crate::document::report_name;
use crate::index::{InstanceIndex, Visit};
use crate::{Document, Instance, Report, Route, Solution, StructuralError};

/// Root report name used when neither the solution nor the instance has one.
pub const DEFAULT_REPORT_NAME: &str = "solution";

/// Which stop of each consecutive pair is checked.
///
/// Routes are walked as overlapping pairs of stops. The pairing decides
/// which stop's client supplies the time window, demand and service time,
/// and whose `arrive_time` is cross-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    /// Pairs are `(stops[i + 1], stops[i])`: the arc is read from the later
    /// stop to the earlier one and every check applies to the earlier
    /// stop. The last stop of a route is never checked.
    #[default]
    Legacy,
    /// Pairs are `(stops[i], stops[i + 1])`: the arc is read forwards and
    /// every check applies to the stop just arrived at. The first stop is
    /// the departure point at time zero and is never checked.
    Forward,
}

/// Checks solutions against the instance that produced them.
///
/// # Examples
/// ```
/// use routecheck_core::{Client, Instance, PairingMode, Route, Solution, Stop, Validator, Vehicle};
///
/// let instance = Instance {
///     name: None,
///     distances: vec![vec![0.0, 5.0], vec![5.0, 0.0]],
///     clients: vec![Client::new(1, 0, 0, 100, 0), Client::new(2, 0, 0, 100, 0)],
///     vehicles: vec![Vehicle::new(0, 10, 1.0)],
///     allowed_deviation: 0.0,
/// };
/// let solution = Solution {
///     name: Some("scenario-a".into()),
///     value: 6.0,
///     routes: vec![Route::new(0, vec![Stop::new(1, 0.0), Stop::new(2, 5.0)])],
/// };
///
/// let report = Validator::new(PairingMode::Forward)
///     .validate(&instance, &solution)
///     .expect("structurally sound");
/// assert!(!report.is_failing());
/// assert_eq!(report.name(), "scenario-a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validator {
    pairing: PairingMode,
}

impl Validator {
    /// Create a validator using `pairing`.
    #[must_use]
    pub const fn new(pairing: PairingMode) -> Self {
        Self { pairing }
    }

    /// The pairing this validator walks routes with.
    #[must_use]
    pub const fn pairing(self) -> PairingMode {
        self.pairing
    }

    /// Validate both halves of a loaded document.
    ///
    /// # Errors
    /// Returns [`StructuralError`] when the instance is malformed or a route
    /// references an unknown vehicle or client.
    pub fn validate_document(self, document: &Document) -> Result<Report, StructuralError> {
        self.validate(&document.instance, &document.solution)
    }

    /// Validate `solution` against `instance`.
    ///
    /// Every violation is recorded; the walk never stops at the first one.
    /// The returned report is empty when the solution is feasible and its
    /// claimed value equals the recomputed cost exactly.
    ///
    /// # Errors
    /// Returns [`StructuralError`] when the instance is malformed or a route
    /// references an unknown vehicle or client.
    #[expect(
        clippy::float_cmp,
        reason = "the claimed value must match the recomputed cost exactly"
    )]
    pub fn validate(
        self,
        instance: &Instance,
        solution: &Solution,
    ) -> Result<Report, StructuralError> {
        let index = InstanceIndex::new(instance)?;
        let name = report_name(instance, solution).unwrap_or(DEFAULT_REPORT_NAME);
        let mut root = Report::new(name);

        let mut total_cost = 0.0_f64;
        for route in &solution.routes {
            let report =
                self.check_route(&index, instance.allowed_deviation, route, &mut total_cost)?;
            root.record_subreport(report);
        }

        root.record_with(total_cost == solution.value, || {
            format!(
                "Expected solution value of {total_cost}, found {}",
                solution.value
            )
        });

        log::debug!(
            "validated {} route(s) for {name}: {} top-level entries",
            solution.routes.len(),
            root.len()
        );
        Ok(root)
    }

    /// Walk one route, adding its fixed cost and arcs to `total_cost`.
    ///
    /// Costs go straight into the shared running total in route order; the
    /// summation order is part of the exact cost comparison.
    #[expect(
        clippy::float_arithmetic,
        clippy::float_cmp,
        reason = "arrival times are propagated and compared as recorded"
    )]
    fn check_route(
        self,
        index: &InstanceIndex<'_>,
        allowed_deviation: f64,
        route: &Route,
        total_cost: &mut f64,
    ) -> Result<Report, StructuralError> {
        let vehicle = index.vehicle(route.vehicle_id)?;
        let visits = route
            .stops
            .iter()
            .map(|stop| index.visit(route.vehicle_id, stop))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = Report::new(format!("vehicle {}", route.vehicle_id));
        *total_cost += vehicle.fixed_cost;
        let mut capacity_left = i64::from(vehicle.capacity);
        let mut current_time = 0.0_f64;

        for pair in visits.windows(2) {
            let [first, second] = pair else {
                continue;
            };
            let (checked, arc_time) = self.orient(index, first, second);
            let client = checked.client;

            current_time = f64::from(client.earliest).max(current_time + arc_time);
            let client_latest = f64::from(client.latest) + allowed_deviation;
            capacity_left -= i64::from(client.demand);

            report.record_with(checked.arrive_time == current_time, || {
                format!(
                    "Client {} arrival time is {current_time} but solution records {}",
                    client.id, checked.arrive_time
                )
            });
            report.record_with(current_time <= client_latest, || {
                format!(
                    "Client {} arrival time is {current_time} but latest is {client_latest}",
                    client.id
                )
            });

            current_time += f64::from(client.service_time);
            *total_cost += arc_time;
        }

        report.record_with(capacity_left >= 0, || {
            format!(
                "Vehicle {} exceeds its capacity by {}",
                vehicle.id, -capacity_left
            )
        });

        log::debug!(
            "route for vehicle {} with {} stop(s): {} violation(s)",
            vehicle.id,
            visits.len(),
            report.len()
        );
        Ok(report)
    }

    /// Pick the checked visit of a pair and the arc travelled.
    fn orient<'v, 'a>(
        self,
        index: &InstanceIndex<'_>,
        first: &'v Visit<'a>,
        second: &'v Visit<'a>,
    ) -> (&'v Visit<'a>, f64) {
        match self.pairing {
            PairingMode::Legacy => (first, index.distance(second, first)),
            PairingMode::Forward => (second, index.distance(first, second)),
        }
    }
}

/// Validate `solution` against `instance` with the default legacy pairing.
///
/// # Errors
/// Returns [`StructuralError`] when the instance is malformed or a route
/// references an unknown vehicle or client.
pub fn validate_solution(
    instance: &Instance,
    solution: &Solution,
) -> Result<Report, StructuralError> {
    Validator::default().validate(instance, solution)
}
