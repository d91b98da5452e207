//! # Unit-Load Moment Generator
//!
//! Builds the virtual-moment diagrams needed for Maxwell-Mohr deflection
//! integration. Row `i` of the returned matrix is the bending-moment
//! diagram of a lone unit upward point load placed at sample `x_i`, solved
//! on the same support set with all real loads removed.
//!
//! This costs one equilibrium solve per sample point, O(resolution^2)
//! work in total, which is well within budget at the default resolution.

use crate::errors::BeamResult;
use crate::model::{Beam, PointLoad};

use super::{diagrams, reactions};

/// Virtual bending-moment matrix: `matrix[i][j]` is the moment at sample
/// `x_j` due to a unit load at sample `x_i`.
pub fn moment_matrix(beam: &Beam, resolution: usize) -> BeamResult<Vec<Vec<f64>>> {
    let grid = diagrams::sample_grid(beam.length, resolution);

    // Same supports, no real loads, one movable unit probe load
    let mut probe = Beam::new(beam.length, beam.flexural_rigidity);
    probe.supports = beam.supports.clone();
    probe.point_loads.push(PointLoad::vertical(1.0, 0.0));

    let mut matrix = Vec::with_capacity(grid.len());
    for &x in &grid {
        probe.point_loads[0].position = x;
        let set = reactions::solve(&probe)?;
        matrix.push(diagrams::moment_values(&probe, &set, &grid));
    }
    Ok(matrix)
}
