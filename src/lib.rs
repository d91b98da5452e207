//! # beam_core - Static Beam Analysis Engine
//!
//! `beam_core` computes the static response of a straight elastic beam:
//! support reactions, internal shear-force and bending-moment
//! distributions, and transverse deflection, for an arbitrary combination
//! of supports (including internal hinges), point loads, trapezoidal
//! distributed loads, and applied moments.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over immutable input, freshly
//!   allocated output, no global state
//! - **JSON-First**: all input and output types implement
//!   Serialize/Deserialize
//! - **Rich Errors**: failures are structured values, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, Beam, PointLoad, Support};
//!
//! // 10 m simply supported beam, EI = 20 000, 10 kN down at midspan
//! let beam = Beam::new(10.0, 20_000.0)
//!     .with_support(Support::pin(0.0))
//!     .with_support(Support::roller(10.0))
//!     .with_point_load(PointLoad::vertical(-10.0, 5.0));
//!
//! let results = analyze(&beam, 100).unwrap();
//! assert!((results.reactions.reactions[0].force - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - beam, support, and load input types with validation
//! - [`analysis`] - the four-stage analysis pipeline
//! - [`errors`] - structured error types

pub mod analysis;
pub mod errors;
pub mod model;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, AnalysisResults, Diagram, DiagramSet, Reaction, ReactionSet};
pub use errors::{BeamError, BeamResult};
pub use model::{AppliedMoment, Beam, DistributedLoad, PointLoad, Support, SupportKind};
