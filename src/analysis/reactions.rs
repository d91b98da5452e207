//! # Equilibrium Solver
//!
//! Solves support reactions for a statically determinate (or
//! compound-determinate) single-span beam.
//!
//! ## Method
//!
//! Distributed loads are reduced to their trapezoid resultants and inclined
//! point loads to their vertical components, then a square linear system is
//! assembled:
//!
//! - row 1: vertical force equilibrium, ΣFy = 0
//! - row 2: moment equilibrium about x = 0 (counterclockwise positive)
//! - one row per internal hinge: bending moment of everything strictly to
//!   the left of the hinge is zero
//!
//! The system is solved by LU decomposition with partial pivoting. A
//! mismatched unknown/equation count fails before any assembly; a singular
//! matrix fails after, as its own error class.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::model::{Beam, SupportKind};

/// Relative tolerance on the residual of the solved system.
const RESIDUAL_TOL: f64 = 1e-8;

/// Resolved reaction components at one support.
///
/// `moment` is nonzero only for fixed supports. Internal hinges appear as
/// informational entries with zero force and moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Support position from the left end
    pub position: f64,
    /// Support kind this reaction belongs to
    pub kind: SupportKind,
    /// Vertical reaction force, positive upward
    pub force: f64,
    /// Reaction moment, positive counterclockwise (fixed supports only)
    pub moment: f64,
}

/// The full set of resolved reactions, one entry per support in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionSet {
    /// One reaction per support, in the order the supports were given
    pub reactions: Vec<Reaction>,
}

impl ReactionSet {
    /// Sum of all reaction forces
    pub fn total_force(&self) -> f64 {
        self.reactions.iter().map(|r| r.force).sum()
    }

    /// Global equilibrium residuals `(ΣFy, ΣM about x = 0)` for this
    /// reaction set applied to `beam`. Both should vanish for any
    /// successful solve; exposed as a diagnostic.
    pub fn residuals(&self, beam: &Beam) -> (f64, f64) {
        let mut force = self.total_force();
        let mut moment: f64 = self
            .reactions
            .iter()
            .map(|r| r.force * r.position + r.moment)
            .sum();

        for load in &beam.point_loads {
            force += load.vertical_component();
            moment += load.vertical_component() * load.position;
        }
        for load in &beam.distributed_loads {
            force += load.resultant();
            moment += load.resultant() * load.centroid();
        }
        for applied in &beam.moments {
            moment += applied.magnitude;
        }

        (force, moment)
    }
}

/// One unknown column of the equilibrium system.
#[derive(Debug, Clone, Copy)]
enum Unknown {
    /// Vertical force at a support (index into `beam.supports`)
    Force { support: usize, position: f64 },
    /// Reaction moment at a fixed support
    Moment { support: usize },
}

/// Solve the support reactions for `beam`.
///
/// Fails with [`BeamError::Unstable`] or [`BeamError::Indeterminate`] when
/// the reaction unknown count does not match the available equilibrium
/// equations, and with [`BeamError::Singular`] when the assembled matrix
/// cannot be inverted (for example a hinged segment carrying no support).
pub fn solve(beam: &Beam) -> BeamResult<ReactionSet> {
    let hinges = beam.hinge_positions();
    let unknown_count: usize = beam
        .supports
        .iter()
        .map(|s| s.kind.reaction_unknowns())
        .sum();
    let equation_count = 2 + hinges.len();

    if unknown_count < equation_count {
        return Err(BeamError::unstable(unknown_count, equation_count));
    }
    if unknown_count > equation_count {
        return Err(BeamError::indeterminate(unknown_count, equation_count));
    }

    let mut unknowns = Vec::with_capacity(unknown_count);
    for (i, support) in beam.supports.iter().enumerate() {
        match support.kind {
            SupportKind::Fixed => {
                unknowns.push(Unknown::Force {
                    support: i,
                    position: support.position,
                });
                unknowns.push(Unknown::Moment { support: i });
            }
            SupportKind::Pin | SupportKind::Roller => {
                unknowns.push(Unknown::Force {
                    support: i,
                    position: support.position,
                });
            }
            SupportKind::InternalHinge => {}
        }
    }

    let n = unknown_count;
    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut b = DVector::<f64>::zeros(n);

    // Row 0: ΣFy = 0
    for (col, unknown) in unknowns.iter().enumerate() {
        if let Unknown::Force { .. } = unknown {
            a[(0, col)] = 1.0;
        }
    }
    b[0] = -known_vertical_force(beam);

    // Row 1: ΣM about x = 0, counterclockwise positive
    for (col, unknown) in unknowns.iter().enumerate() {
        match unknown {
            Unknown::Force { position, .. } => a[(1, col)] = *position,
            Unknown::Moment { .. } => a[(1, col)] = 1.0,
        }
    }
    b[1] = -known_moment_about_origin(beam);

    // One row per hinge: sagging bending moment of the left segment is zero
    for (h, &hinge_x) in hinges.iter().enumerate() {
        let row = 2 + h;
        for (col, unknown) in unknowns.iter().enumerate() {
            match unknown {
                Unknown::Force { position, .. } if *position < hinge_x => {
                    a[(row, col)] = hinge_x - position;
                }
                Unknown::Moment { support } if beam.supports[*support].position < hinge_x => {
                    a[(row, col)] = -1.0;
                }
                _ => {}
            }
        }
        b[row] = -known_moment_left_of(beam, hinge_x);
    }

    let lu = a.clone().lu();
    let solution = lu
        .solve(&b)
        .ok_or_else(|| BeamError::singular("equilibrium matrix is not invertible"))?;

    let residual = (&a * &solution - &b).norm();
    if residual > RESIDUAL_TOL * (b.norm() + 1.0) {
        return Err(BeamError::singular(format!(
            "equilibrium system is ill-conditioned (residual {residual:.3e})"
        )));
    }

    let mut reactions: Vec<Reaction> = beam
        .supports
        .iter()
        .map(|s| Reaction {
            position: s.position,
            kind: s.kind,
            force: 0.0,
            moment: 0.0,
        })
        .collect();

    for (col, unknown) in unknowns.iter().enumerate() {
        match unknown {
            Unknown::Force { support, .. } => reactions[*support].force = solution[col],
            Unknown::Moment { support } => reactions[*support].moment = solution[col],
        }
    }

    Ok(ReactionSet { reactions })
}

/// Sum of all known (applied) vertical load components.
fn known_vertical_force(beam: &Beam) -> f64 {
    let points: f64 = beam
        .point_loads
        .iter()
        .map(|load| load.vertical_component())
        .sum();
    let distributed: f64 = beam
        .distributed_loads
        .iter()
        .map(|load| load.resultant())
        .sum();
    points + distributed
}

/// Counterclockwise moment about the origin of all known loads.
fn known_moment_about_origin(beam: &Beam) -> f64 {
    let mut total = 0.0;
    for load in &beam.point_loads {
        total += load.vertical_component() * load.position;
    }
    for load in &beam.distributed_loads {
        total += load.resultant() * load.centroid();
    }
    for applied in &beam.moments {
        total += applied.magnitude;
    }
    total
}

/// Sagging bending moment at `x` contributed by all known loads strictly
/// to the left of `x`. Distributed loads enter via their exact partial
/// integral, not the equilibrium resultant.
fn known_moment_left_of(beam: &Beam, x: f64) -> f64 {
    let mut total = 0.0;
    for load in &beam.point_loads {
        if load.position < x {
            total += load.vertical_component() * (x - load.position);
        }
    }
    for load in &beam.distributed_loads {
        total += load.moment_about(x);
    }
    for applied in &beam.moments {
        if applied.position < x {
            total -= applied.magnitude;
        }
    }
    total
}
