//! Placement errors.

use thiserror::Error;

use super::config::EntityRole;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No candidate satisfied every constraint within the attempt budget.
    #[error("could not place {role} after {attempts} attempts")]
    Infeasible { role: EntityRole, attempts: usize },

    /// The sampling rectangle is inverted, or its extent is not finite.
    #[error("placement bounds are empty or not finite")]
    EmptyBounds,
}
