//! Closed-form photometric transformations.
//!
//! The `G−V` colour transformation follows Jordi et al. (2010), expressing the offset between
//! the Gaia G band and Johnson V as a cubic in the `V−I` colour index. The distance modulus
//! moves an absolute magnitude to a given distance in parsecs.

use crate::constants::{Magnitude, Parsec};

/// `G−V` as a function of the Johnson `V−I` colour index (Jordi et al. 2010).
///
/// Arguments
/// -----------------
/// * `v_mini` - `V−I` colour index.
///
/// Return
/// ----------
/// * The `G−V` magnitude offset.
pub fn gminv_from_vmini(v_mini: Magnitude) -> Magnitude {
    // Cubic fit coefficients, valid over the colour range of the photometry table
    const A0: f64 = -0.0257;
    const A1: f64 = -0.0924;
    const A2: f64 = -0.1623;
    const A3: f64 = 0.0090;

    ((A3 * v_mini + A2) * v_mini + A1) * v_mini + A0
}

/// Apparent magnitude of a source with absolute magnitude `m_abs` seen at `distance` parsecs.
///
/// Arguments
/// -----------------
/// * `m_abs` - Absolute magnitude in any band.
/// * `distance` - Distance in parsecs (must be positive).
///
/// Return
/// ----------
/// * The apparent magnitude `m_abs + 5 log10(distance) − 5`.
pub fn apparent_from_absolute(m_abs: Magnitude, distance: Parsec) -> Magnitude {
    m_abs + 5.0 * distance.log10() - 5.0
}

#[cfg(test)]
mod transformations_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gminv_at_zero_colour() {
        assert_eq!(gminv_from_vmini(0.0), -0.0257);
    }

    #[test]
    fn test_gminv_solar_colour() {
        // -0.0257 - 0.0924*0.75 - 0.1623*0.75^2 + 0.0090*0.75^3
        assert_relative_eq!(gminv_from_vmini(0.75), -0.182496875, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_modulus() {
        // At 10 pc the apparent magnitude equals the absolute magnitude.
        assert_eq!(apparent_from_absolute(4.8, 10.0), 4.8);
        // Each factor of 10 in distance adds 5 magnitudes.
        assert_relative_eq!(apparent_from_absolute(4.8, 100.0), 9.8, epsilon = 1e-12);
        assert_relative_eq!(apparent_from_absolute(-6.2, 1.0e6), 18.8, epsilon = 1e-12);
    }
}
