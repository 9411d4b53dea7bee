//! The persisted pairing of an instance with one of its solutions.

use serde::{Deserialize, Serialize};

use crate::{Instance, Solution};

/// An instance together with the solution to be validated against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Problem definition.
    pub instance: Instance,
    /// Candidate solution.
    pub solution: Solution,
}

impl Document {
    /// Name used for the root report: the solution's, then the instance's.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        report_name(&self.instance, &self.solution)
    }
}

/// Root report name: the solution's, then the instance's.
pub(crate) fn report_name<'a>(instance: &'a Instance, solution: &'a Solution) -> Option<&'a str> {
    solution.name.as_deref().or(instance.name.as_deref())
}
