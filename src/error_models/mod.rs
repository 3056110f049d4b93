//! # Astrometric error models
//!
//! This module provides the **sky-averaged parallax accuracy models** used to estimate how well
//! the parallax of a star of given magnitude and colour can be measured.
//!
//! ## Public API
//!
//! ### [`AstrometricModel`]
//! Enumeration of the supported parallax accuracy models:
//!
//! - `AstrometricModel::PreLaunch` – pre-launch accuracy assessment (de Bruijne 2012)
//! - `AstrometricModel::PostCommissioning` – coefficients updated after in-flight commissioning
//!
//! Both express the sky-averaged end-of-mission parallax standard error in microarcseconds as
//!
//! ```text
//! σϖ = sqrt(c0 + c1·z + c2·z²) · (0.986 + 0.014·(V−I))
//! ```
//!
//! with `z = max(10^{0.4·(12.09−15)}, 10^{0.4·(G−15)})`. The floor on `z` reflects the
//! bright-star calibration limit at G = 12.09: sources brighter than that gate do not measure
//! any better.
//!
//! ### [`AstrometricModel::relative_parallax_error`]
//!
//! Divides the parallax standard error by the true parallax of a source at the requested
//! distance (`10^6 / d` µas for `d` in parsecs), yielding the dimensionless relative accuracy
//! the horizon thresholds are defined on.
//!
//! ## References
//!
//! - de Bruijne, J. H. J. (2012) – Science performance of Gaia.
//! - Gaia Collaboration (2016) – The Gaia mission (post-commissioning performance).

use crate::constants::{Magnitude, MicroArcsec, Parsec, MICROARCSEC_PER_ARCSEC};

/// Apparent G magnitude of the bright-star calibration gate
const BRIGHT_GATE_G: f64 = 12.09;

/// Sky-averaged parallax accuracy model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstrometricModel {
    /// Pre-launch accuracy assessment
    PreLaunch,
    /// Coefficients updated after in-flight commissioning
    PostCommissioning,
}

/// Magnitude term `z` of the accuracy models, floored at the bright calibration gate.
///
/// Arguments
/// -----------------
/// * `g`: apparent G magnitude.
///
/// Return
/// ----------
/// * `max(10^{0.4·(12.09−15)}, 10^{0.4·(G−15)})`.
pub(crate) fn calc_z(g: Magnitude) -> f64 {
    let gate = 10_f64.powf(0.4 * (BRIGHT_GATE_G - 15.0));
    gate.max(10_f64.powf(0.4 * (g - 15.0)))
}

impl AstrometricModel {
    /// Polynomial coefficients `(c0, c1, c2)` of the variance expression in `z`.
    fn coefficients(&self) -> (f64, f64, f64) {
        match self {
            AstrometricModel::PreLaunch => (9.3, 658.1, 4.568),
            AstrometricModel::PostCommissioning => (-1.631, 680.766, 32.732),
        }
    }

    /// Sky-averaged parallax standard error in microarcseconds.
    ///
    /// Arguments
    /// -----------------
    /// * `g`: apparent G magnitude.
    /// * `v_mini`: Johnson `V−I` colour index.
    ///
    /// Return
    /// ----------
    /// * The end-of-mission parallax standard error `σϖ` in µas.
    pub fn parallax_error_sky_avg(&self, g: Magnitude, v_mini: Magnitude) -> MicroArcsec {
        let z = calc_z(g);
        let (c0, c1, c2) = self.coefficients();
        (c0 + c1 * z + c2 * z * z).sqrt() * (0.986 + 0.014 * v_mini)
    }

    /// Relative parallax error of a source at distance `distance` parsecs.
    ///
    /// The true parallax of a source at `d` pc is `10^6 / d` µas; the relative error is the
    /// ratio of the model standard error to that parallax. It grows monotonically with
    /// distance: the standard error is non-decreasing in magnitude while the parallax itself
    /// shrinks as `1/d`.
    ///
    /// Arguments
    /// -----------------
    /// * `g`: apparent G magnitude at that distance.
    /// * `v_mini`: Johnson `V−I` colour index.
    /// * `distance`: distance in parsecs (must be positive).
    ///
    /// Return
    /// ----------
    /// * The dimensionless relative parallax error `σϖ / ϖ`.
    pub fn relative_parallax_error(
        &self,
        g: Magnitude,
        v_mini: Magnitude,
        distance: Parsec,
    ) -> f64 {
        let true_parallax: MicroArcsec = MICROARCSEC_PER_ARCSEC / distance;
        self.parallax_error_sky_avg(g, v_mini) / true_parallax
    }
}
