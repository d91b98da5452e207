//! # Input Data Model
//!
//! Types describing a single-span beam problem: the beam itself, its
//! supports, and the applied loading. All types are plain data with serde
//! derives so a whole problem can round-trip through JSON.
//!
//! ## Conventions
//!
//! - Positions are measured from the left end of the beam (base length unit)
//! - Forces are positive upward
//! - Applied moments are positive counterclockwise
//! - Distributed load magnitudes are force per unit length, positive upward
//!
//! ## Example
//!
//! ```rust
//! use beam_core::model::{Beam, Support, PointLoad};
//!
//! // 10 m simply supported beam, 10 kN downward load at midspan
//! let beam = Beam::new(10.0, 20_000.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_point_load(PointLoad::vertical(-10.0, 5.0));
//!
//! assert!(beam.validate(100).is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Tolerance used when comparing positions along the beam.
pub(crate) const POSITION_TOL: f64 = 1e-9;

/// Kind of support at a location on the beam.
///
/// Each kind contributes a fixed number of reaction unknowns to the
/// equilibrium system. An internal hinge contributes none - instead it
/// adds one equation (bending moment is released to zero there), which
/// is what makes compound beams determinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportKind {
    /// Clamped end: resists vertical force and moment (2 unknowns)
    Fixed,
    /// Pinned support: resists vertical force (1 unknown)
    Pin,
    /// Roller support: resists vertical force (1 unknown)
    Roller,
    /// Moment release within the span (0 unknowns, 1 extra equation)
    InternalHinge,
}

impl SupportKind {
    /// Number of reaction components this support contributes to the solve
    pub fn reaction_unknowns(&self) -> usize {
        match self {
            SupportKind::Fixed => 2,
            SupportKind::Pin | SupportKind::Roller => 1,
            SupportKind::InternalHinge => 0,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Fixed => "Fixed",
            SupportKind::Pin => "Pin",
            SupportKind::Roller => "Roller",
            SupportKind::InternalHinge => "Internal Hinge",
        }
    }
}

/// A support at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Distance from the left end
    pub position: f64,
    /// Support kind
    pub kind: SupportKind,
}

impl Support {
    /// Create a fixed (clamped) support
    pub fn fixed(position: f64) -> Self {
        Support {
            position,
            kind: SupportKind::Fixed,
        }
    }

    /// Create a pinned support
    pub fn pin(position: f64) -> Self {
        Support {
            position,
            kind: SupportKind::Pin,
        }
    }

    /// Create a roller support
    pub fn roller(position: f64) -> Self {
        Support {
            position,
            kind: SupportKind::Roller,
        }
    }

    /// Create an internal hinge (moment release)
    pub fn internal_hinge(position: f64) -> Self {
        Support {
            position,
            kind: SupportKind::InternalHinge,
        }
    }
}

/// A concentrated force, optionally inclined from vertical.
///
/// Only the vertical component enters the structural solve; the engine
/// models vertical force and moment equilibrium only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end
    pub position: f64,
    /// Signed magnitude, positive upward
    pub magnitude: f64,
    /// Inclination from vertical in degrees (ignored unless `inclined`)
    pub angle_deg: f64,
    /// Whether the load is inclined
    pub inclined: bool,
}

impl PointLoad {
    /// Create a vertical point load
    pub fn vertical(magnitude: f64, position: f64) -> Self {
        PointLoad {
            position,
            magnitude,
            angle_deg: 0.0,
            inclined: false,
        }
    }

    /// Create an inclined point load (angle in degrees from vertical)
    pub fn inclined(magnitude: f64, position: f64, angle_deg: f64) -> Self {
        PointLoad {
            position,
            magnitude,
            angle_deg,
            inclined: true,
        }
    }

    /// Vertical component used in the solve: `magnitude * cos(angle)` when
    /// inclined, the raw magnitude otherwise.
    pub fn vertical_component(&self) -> f64 {
        if self.inclined {
            self.magnitude * self.angle_deg.to_radians().cos()
        } else {
            self.magnitude
        }
    }
}

/// A linearly varying (trapezoidal) distributed load over part of the span.
///
/// Intensity interpolates from `start_magnitude` at `start` to
/// `end_magnitude` at `end`. For the global equilibrium rows the load is
/// reduced to its resultant at the trapezoid centroid; the diagram sweep
/// and hinge equations use the exact partial integrals instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Start position from the left end
    pub start: f64,
    /// End position from the left end (must exceed `start`)
    pub end: f64,
    /// Intensity at `start` (force/length, positive upward)
    pub start_magnitude: f64,
    /// Intensity at `end` (force/length, positive upward)
    pub end_magnitude: f64,
}

impl DistributedLoad {
    /// Create a uniform distributed load
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        DistributedLoad {
            start,
            end,
            start_magnitude: magnitude,
            end_magnitude: magnitude,
        }
    }

    /// Create a trapezoidal distributed load
    pub fn trapezoidal(start_magnitude: f64, end_magnitude: f64, start: f64, end: f64) -> Self {
        DistributedLoad {
            start,
            end,
            start_magnitude,
            end_magnitude,
        }
    }

    /// Loaded width
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Equivalent resultant force (trapezoid area)
    pub fn resultant(&self) -> f64 {
        0.5 * (self.start_magnitude + self.end_magnitude) * self.span()
    }

    /// Position of the resultant: the trapezoid centroid, measured from the
    /// left end of the beam. Falls back to the midpoint when the end
    /// intensities cancel.
    pub fn centroid(&self) -> f64 {
        let w1 = self.start_magnitude;
        let w2 = self.end_magnitude;
        let width = self.span();
        if (w1 + w2).abs() < f64::EPSILON {
            self.start + width / 2.0
        } else {
            self.start + width * (w1 + 2.0 * w2) / (3.0 * (w1 + w2))
        }
    }

    /// Total force contributed by the portion of the load left of `x`.
    ///
    /// Exact integral of the linear intensity over `[start, min(x, end)]`.
    pub fn force_up_to(&self, x: f64) -> f64 {
        let t = (x - self.start).clamp(0.0, self.span());
        if t <= 0.0 {
            return 0.0;
        }
        let slope = (self.end_magnitude - self.start_magnitude) / self.span();
        self.start_magnitude * t + slope * t * t / 2.0
    }

    /// Moment about the point `x` of the portion of the load left of `x`,
    /// in the sagging-positive sense (upward intensity left of the cut
    /// produces positive bending moment at the cut).
    ///
    /// Exact integral of `w(s) * (x - s)` over `[start, min(x, end)]`.
    pub fn moment_about(&self, x: f64) -> f64 {
        let t = (x - self.start).clamp(0.0, self.span());
        if t <= 0.0 {
            return 0.0;
        }
        let slope = (self.end_magnitude - self.start_magnitude) / self.span();
        let arm = x - self.start;
        self.start_magnitude * (arm * t - t * t / 2.0)
            + slope * (arm * t * t / 2.0 - t * t * t / 3.0)
    }
}

/// A concentrated moment applied at a position along the beam.
///
/// Positive is counterclockwise. The same sign enters the moment
/// equilibrium row and the step it induces in the bending-moment diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedMoment {
    /// Distance from the left end
    pub position: f64,
    /// Signed magnitude, positive counterclockwise
    pub magnitude: f64,
}

impl AppliedMoment {
    /// Create an applied moment
    pub fn new(magnitude: f64, position: f64) -> Self {
        AppliedMoment {
            position,
            magnitude,
        }
    }
}

/// A complete beam problem: geometry, stiffness, supports, and loading.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 10.0,
///   "flexural_rigidity": 20000.0,
///   "supports": [
///     { "position": 0.0, "kind": "Pin" },
///     { "position": 10.0, "kind": "Roller" }
///   ],
///   "point_loads": [
///     { "position": 5.0, "magnitude": -10.0, "angle_deg": 0.0, "inclined": false }
///   ],
///   "distributed_loads": [],
///   "moments": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Span length (positive)
    pub length: f64,
    /// Flexural rigidity EI (positive, constant over the span)
    pub flexural_rigidity: f64,
    /// Supports, including internal hinges
    pub supports: Vec<Support>,
    /// Concentrated forces
    pub point_loads: Vec<PointLoad>,
    /// Trapezoidal distributed loads
    pub distributed_loads: Vec<DistributedLoad>,
    /// Concentrated applied moments
    pub moments: Vec<AppliedMoment>,
}

impl Beam {
    /// Create an unloaded, unsupported beam
    pub fn new(length: f64, flexural_rigidity: f64) -> Self {
        Beam {
            length,
            flexural_rigidity,
            supports: Vec::new(),
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
            moments: Vec::new(),
        }
    }

    /// Add a support and return self (builder pattern)
    pub fn with_support(mut self, support: Support) -> Self {
        self.supports.push(support);
        self
    }

    /// Add a point load and return self (builder pattern)
    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a distributed load and return self (builder pattern)
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// Add an applied moment and return self (builder pattern)
    pub fn with_moment(mut self, moment: AppliedMoment) -> Self {
        self.moments.push(moment);
        self
    }

    fn check_in_range(&self, field: &str, position: f64) -> BeamResult<()> {
        if !position.is_finite() || position < 0.0 || position > self.length {
            return Err(BeamError::invalid_geometry(
                field,
                position.to_string(),
                format!("Position must lie within [0, {}]", self.length),
            ));
        }
        Ok(())
    }

    /// Validate the whole problem against the engine's geometric invariants.
    ///
    /// Checks positive length and rigidity, positions within `[0, length]`,
    /// distinct support positions, well-ordered distributed loads, finite
    /// magnitudes, and a usable grid resolution.
    pub fn validate(&self, resolution: usize) -> BeamResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(BeamError::invalid_geometry(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }
        if !self.flexural_rigidity.is_finite() || self.flexural_rigidity <= 0.0 {
            return Err(BeamError::invalid_geometry(
                "flexural_rigidity",
                self.flexural_rigidity.to_string(),
                "Flexural rigidity EI must be positive",
            ));
        }
        if resolution < 2 {
            return Err(BeamError::invalid_geometry(
                "resolution",
                resolution.to_string(),
                "Resolution must be at least 2",
            ));
        }

        for support in &self.supports {
            self.check_in_range("supports.position", support.position)?;
        }
        for (i, a) in self.supports.iter().enumerate() {
            for b in self.supports.iter().skip(i + 1) {
                if (a.position - b.position).abs() < POSITION_TOL {
                    return Err(BeamError::invalid_geometry(
                        "supports.position",
                        a.position.to_string(),
                        "Two supports share the same position",
                    ));
                }
            }
        }

        for load in &self.point_loads {
            self.check_in_range("point_loads.position", load.position)?;
            if !load.magnitude.is_finite() || !load.angle_deg.is_finite() {
                return Err(BeamError::invalid_geometry(
                    "point_loads.magnitude",
                    load.magnitude.to_string(),
                    "Load magnitude and angle must be finite",
                ));
            }
        }

        for load in &self.distributed_loads {
            self.check_in_range("distributed_loads.start", load.start)?;
            self.check_in_range("distributed_loads.end", load.end)?;
            if load.end - load.start <= 0.0 {
                return Err(BeamError::invalid_geometry(
                    "distributed_loads",
                    format!("[{}, {}]", load.start, load.end),
                    "Distributed load start must precede its end",
                ));
            }
            if !load.start_magnitude.is_finite() || !load.end_magnitude.is_finite() {
                return Err(BeamError::invalid_geometry(
                    "distributed_loads.magnitude",
                    format!("[{}, {}]", load.start_magnitude, load.end_magnitude),
                    "Load intensities must be finite",
                ));
            }
        }

        for moment in &self.moments {
            self.check_in_range("moments.position", moment.position)?;
            if !moment.magnitude.is_finite() {
                return Err(BeamError::invalid_geometry(
                    "moments.magnitude",
                    moment.magnitude.to_string(),
                    "Moment magnitude must be finite",
                ));
            }
        }

        Ok(())
    }

    /// Positions of all internal hinges, left to right order as given
    pub fn hinge_positions(&self) -> Vec<f64> {
        self.supports
            .iter()
            .filter(|s| s.kind == SupportKind::InternalHinge)
            .map(|s| s.position)
            .collect()
    }
}
