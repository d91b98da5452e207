//! # Deflection Integrator
//!
//! Computes the transverse deflection by the discretized virtual-work
//! (Maxwell-Mohr) theorem: the deflection at sample `i` is
//!
//! ```text
//! delta_i = (1/EI) * integral of M(x) * m_i(x) dx over the span
//! ```
//!
//! where `M` is the real bending-moment diagram and `m_i` the virtual
//! diagram from a unit load at `x_i`. The integral is evaluated with the
//! composite trapezoidal rule on the shared grid, so discretization error
//! is O(h^2). No boundary-value solve is needed: support compatibility is
//! already embedded in the unit-load diagrams.
//!
//! Positive deflection is upward, the direction of the unit load.

/// Integrate deflections over the shared grid.
///
/// `real_moment` and every row of `unit_matrix` must be aligned with the
/// grid the diagrams were generated on; `length` is the span and `ei` the
/// flexural rigidity.
pub fn integrate(real_moment: &[f64], unit_matrix: &[Vec<f64>], length: f64, ei: f64) -> Vec<f64> {
    let n = real_moment.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let h = length / (n - 1) as f64;

    unit_matrix
        .iter()
        .map(|virtual_moment| {
            let mut sum = 0.0;
            for j in 0..n {
                let weight = if j == 0 || j == n - 1 { 0.5 } else { 1.0 };
                sum += weight * real_moment[j] * virtual_moment[j];
            }
            sum * h / ei
        })
        .collect()
}
