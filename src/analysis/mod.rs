//! # Analysis Pipeline
//!
//! The four-stage static analysis of a single-span beam:
//!
//! 1. [`reactions`] - static-equilibrium reaction solver (hinges included)
//! 2. [`diagrams`] - shear and bending-moment diagram generator
//! 3. [`unit_load`] - virtual-moment diagrams for the unit-load method
//! 4. [`deflection`] - virtual-work deflection integrator
//!
//! [`analyze`] runs the whole pipeline over immutable input and returns
//! freshly allocated output; callers re-run it from scratch on every input
//! change. Any failure aborts before partial diagrams exist, so a caller
//! can blank all downstream results on error.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::model::{Beam, Support, PointLoad};
//! use beam_core::analysis::analyze;
//!
//! let beam = Beam::new(10.0, 20_000.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_point_load(PointLoad::vertical(-10.0, 5.0));
//!
//! let results = analyze(&beam, 100).unwrap();
//! println!("Left reaction: {:.1}", results.reactions.reactions[0].force);
//! println!("Peak moment: {:?}", results.bending_moment.max_value());
//! ```

pub mod deflection;
pub mod diagrams;
pub mod reactions;
pub mod unit_load;

use serde::{Deserialize, Serialize};

use crate::errors::BeamResult;
use crate::model::Beam;

pub use diagrams::{Diagram, DiagramSet};
pub use reactions::{Reaction, ReactionSet};

/// Complete output of one analysis run.
///
/// All three diagrams share the same `x` grid of `resolution + 1` points
/// from 0 to the beam length, so downstream consumers (section stress,
/// charts, tables) can align them index by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Resolved support reactions
    pub reactions: ReactionSet,
    /// Shear force V(x)
    pub shear: Diagram,
    /// Bending moment M(x), sagging positive
    pub bending_moment: Diagram,
    /// Transverse deflection, positive upward
    pub deflection: Diagram,
}

impl AnalysisResults {
    /// Global equilibrium residuals `(ΣFy, ΣM about x = 0)` of the solved
    /// reactions against the applied loading. Both vanish (to floating
    /// tolerance) for any successful analysis.
    pub fn equilibrium_residual(&self, beam: &Beam) -> (f64, f64) {
        self.reactions.residuals(beam)
    }
}

/// Run the full analysis pipeline on `beam` with `resolution + 1` samples.
///
/// Validates the input geometry, solves the reactions, sweeps the
/// internal-force diagrams, builds the unit-load virtual-moment matrix
/// (one equilibrium solve per sample), and integrates the deflection.
pub fn analyze(beam: &Beam, resolution: usize) -> BeamResult<AnalysisResults> {
    beam.validate(resolution)?;

    let reactions = reactions::solve(beam)?;
    let DiagramSet {
        shear,
        bending_moment,
    } = diagrams::generate(beam, &reactions, resolution);

    let unit_matrix = unit_load::moment_matrix(beam, resolution)?;
    let deflections = deflection::integrate(
        &bending_moment.value,
        &unit_matrix,
        beam.length,
        beam.flexural_rigidity,
    );
    let deflection = Diagram {
        x: bending_moment.x.clone(),
        value: deflections,
    };

    Ok(AnalysisResults {
        reactions,
        shear,
        bending_moment,
        deflection,
    })
}
