//! # Internal-Force Diagram Generator
//!
//! Sweeps a uniform grid over the span producing the shear-force and
//! bending-moment distributions from a solved reaction set.
//!
//! ## Sign Convention
//!
//! - Shear: sum of upward-positive quantities left of the cut
//! - Bending moment: sagging positive (tension on the bottom fiber)
//! - At any discontinuity the reported ordinate is the right limit, i.e.
//!   the value just after the jump, applied uniformly across the sweep
//!
//! Distributed loads contribute through their exact linear-intensity
//! integrals up to the cut; the equilibrium resultant is never used here.

use serde::{Deserialize, Serialize};

use crate::model::{Beam, POSITION_TOL};

use super::reactions::ReactionSet;

/// Sampled distribution of one quantity along the beam.
///
/// `x` and `value` are aligned arrays of `resolution + 1` points spanning
/// `[0, length]`. Every diagram produced by one analysis shares the same
/// `x` grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagram {
    /// Sample positions from 0 to the beam length
    pub x: Vec<f64>,
    /// Sampled ordinates, aligned with `x`
    pub value: Vec<f64>,
}

impl Diagram {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the diagram holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest ordinate and its position, if any samples exist
    pub fn max_value(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.value)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, &v)| (x, v))
    }

    /// Smallest ordinate and its position, if any samples exist
    pub fn min_value(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.value)
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, &v)| (x, v))
    }

    /// Ordinate of largest magnitude and its position
    pub fn max_abs_value(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.value)
            .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
            .map(|(&x, &v)| (x, v))
    }
}

/// Shear and bending-moment diagrams on a shared grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSet {
    /// Shear force V(x)
    pub shear: Diagram,
    /// Bending moment M(x)
    pub bending_moment: Diagram,
}

/// Uniform sample grid of `resolution + 1` points over `[0, length]`.
pub(crate) fn sample_grid(length: f64, resolution: usize) -> Vec<f64> {
    (0..=resolution)
        .map(|j| j as f64 * length / resolution as f64)
        .collect()
}

/// Shear force at `x`: reactions, point loads, and the integrated portion
/// of every distributed load located at positions up to and including `x`.
pub(crate) fn shear_at(beam: &Beam, reactions: &ReactionSet, x: f64) -> f64 {
    let cut = x + POSITION_TOL;
    let mut v = 0.0;
    for reaction in &reactions.reactions {
        if reaction.position <= cut {
            v += reaction.force;
        }
    }
    for load in &beam.point_loads {
        if load.position <= cut {
            v += load.vertical_component();
        }
    }
    for load in &beam.distributed_loads {
        v += load.force_up_to(x);
    }
    v
}

/// Sagging bending moment at `x` from the left segment. Concentrated
/// moments (applied and fixed-support reactions) located at `x` are
/// included, which realizes the right-limit convention at their jumps.
pub(crate) fn moment_at(beam: &Beam, reactions: &ReactionSet, x: f64) -> f64 {
    let cut = x + POSITION_TOL;
    let mut m = 0.0;
    for reaction in &reactions.reactions {
        if reaction.position <= cut {
            m += reaction.force * (x - reaction.position);
            m -= reaction.moment;
        }
    }
    for load in &beam.point_loads {
        if load.position <= cut {
            m += load.vertical_component() * (x - load.position);
        }
    }
    for load in &beam.distributed_loads {
        m += load.moment_about(x);
    }
    for applied in &beam.moments {
        if applied.position <= cut {
            m -= applied.magnitude;
        }
    }
    m
}

/// Generate shear and bending-moment diagrams over `resolution + 1`
/// uniformly spaced samples.
pub fn generate(beam: &Beam, reactions: &ReactionSet, resolution: usize) -> DiagramSet {
    let grid = sample_grid(beam.length, resolution);
    let shear_values: Vec<f64> = grid.iter().map(|&x| shear_at(beam, reactions, x)).collect();
    let moment_values: Vec<f64> = grid
        .iter()
        .map(|&x| moment_at(beam, reactions, x))
        .collect();

    DiagramSet {
        shear: Diagram {
            x: grid.clone(),
            value: shear_values,
        },
        bending_moment: Diagram {
            x: grid,
            value: moment_values,
        },
    }
}

/// Generate only the bending-moment diagram values over the grid.
///
/// Used by the unit-load sweep, which discards the shear half.
pub(crate) fn moment_values(beam: &Beam, reactions: &ReactionSet, grid: &[f64]) -> Vec<f64> {
    grid.iter().map(|&x| moment_at(beam, reactions, x)).collect()
}
