//! # Parallax horizon computation
//!
//! This module hosts the core of the analysis: the logarithmic **distance grid**, the per-type
//! [`HorizonProfile`] holding magnitudes and relative parallax errors along that grid, the
//! **observability mask**, and the **threshold-crossing scan** that turns an accuracy target
//! into a horizon distance.
//!
//! ## Overview
//!
//! For one spectral type the pipeline is:
//!
//! 1. Evaluate apparent V and G magnitudes over the grid (distance modulus).
//! 2. Evaluate the relative parallax error through the configured
//!    [`AstrometricModel`](crate::error_models::AstrometricModel).
//! 3. Mask the grid down to the observable window `BRIGHT_LIMIT_G <= G <= FAINT_LIMIT_G`.
//! 4. For each accuracy threshold, locate the first observable point whose relative error
//!    exceeds the threshold: that grid point is the parallax horizon.
//!
//! Crossings of several spectral types at the same threshold, sorted by absolute magnitude,
//! form an [`IsoAccuracyCurve`] that the plotting layer connects into a contour.
//!
//! ## Edge cases
//!
//! * A spectral type whose observable window never dips below a threshold has **no** crossing
//!   for it; [`HorizonProfile::threshold_crossing`] returns `None` and the type drops out of
//!   that curve.
//! * A crossing sitting beyond the far end of the grid is likewise reported as `None`.

pub mod display;

use itertools::izip;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::constants::{
    Magnitude, Parsec, BRIGHT_LIMIT_G, FAINT_LIMIT_G, GRID_SAMPLES, MAX_LOG_DISTANCE,
    MIN_LOG_DISTANCE,
};
use crate::error_models::AstrometricModel;
use crate::photometry::transformations::{apparent_from_absolute, gminv_from_vmini};
use crate::photometry::SptPhotometry;

/// Logarithmically spaced grid of `samples` distances over `[10^start_exp, 10^end_exp]` pc.
///
/// Arguments
/// -----------------
/// * `start_exp`: base-10 exponent of the first grid distance.
/// * `end_exp`: base-10 exponent of the last grid distance.
/// * `samples`: number of grid points.
///
/// Return
/// ----------
/// * A strictly increasing `Vec<Parsec>` (for `end_exp > start_exp`), both endpoints included.
pub fn log_spaced_grid(start_exp: f64, end_exp: f64, samples: usize) -> Vec<Parsec> {
    match samples {
        0 => Vec::new(),
        1 => vec![10_f64.powf(start_exp)],
        _ => {
            let step = (end_exp - start_exp) / (samples as f64 - 1.0);
            (0..samples)
                .map(|i| 10_f64.powf(start_exp + i as f64 * step))
                .collect()
        }
    }
}

/// The canonical distance grid of the analysis: 10 001 samples over `[10, 10^6]` pc.
pub fn distance_grid() -> Vec<Parsec> {
    log_spaced_grid(MIN_LOG_DISTANCE, MAX_LOG_DISTANCE, GRID_SAMPLES)
}

/// One observable sample of a [`HorizonProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Distance in parsecs
    pub distance: Parsec,
    /// Apparent G magnitude at that distance
    pub g_mag: Magnitude,
    /// Apparent V magnitude at that distance
    pub v_mag: Magnitude,
    /// Relative parallax error at that distance
    pub rel_par_err: f64,
}

/// A parallax horizon crossing: the grid point where a profile first exceeds an accuracy
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Horizon distance in parsecs
    pub distance: Parsec,
    /// Apparent V magnitude at the horizon
    pub v_mag: Magnitude,
    /// Absolute V magnitude of the spectral type (sort key of the iso-accuracy curves)
    pub v_abs: Magnitude,
}

/// Magnitudes and relative parallax errors of one spectral type along the distance grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonProfile {
    /// Spectral type code
    pub spt: String,
    /// Johnson `V−I` colour index
    pub v_mini: Magnitude,
    /// Absolute V magnitude
    pub v_abs: Magnitude,
    /// Absolute G magnitude, derived through the colour transformation
    pub g_abs: Magnitude,
    /// The distance grid the profile was evaluated on
    pub distances: Vec<Parsec>,
    /// Apparent V magnitude per grid point
    pub v_mags: Vec<Magnitude>,
    /// Apparent G magnitude per grid point
    pub g_mags: Vec<Magnitude>,
    /// Relative parallax error per grid point, non-decreasing in distance
    pub rel_par_err: Vec<f64>,
    /// Observability mask: true iff the apparent G magnitude lies in the observable window
    pub observable: Vec<bool>,
}

impl HorizonProfile {
    /// Evaluate a spectral type over a distance grid.
    ///
    /// Arguments
    /// -----------------
    /// * `spt`: spectral type code, kept for labeling.
    /// * `photometry`: intrinsic `(V−I, M_V)` photometry of the type.
    /// * `model`: the astrometric accuracy model to evaluate.
    /// * `distances`: distance grid in parsecs.
    pub fn new(
        spt: impl Into<String>,
        photometry: SptPhotometry,
        model: AstrometricModel,
        distances: &[Parsec],
    ) -> Self {
        let g_abs = photometry.v_abs + gminv_from_vmini(photometry.v_mini);

        let v_mags: Vec<Magnitude> = distances
            .iter()
            .map(|&d| apparent_from_absolute(photometry.v_abs, d))
            .collect();
        let g_mags: Vec<Magnitude> = distances
            .iter()
            .map(|&d| apparent_from_absolute(g_abs, d))
            .collect();
        let rel_par_err: Vec<f64> = izip!(distances, &g_mags)
            .map(|(&d, &g)| model.relative_parallax_error(g, photometry.v_mini, d))
            .collect();
        let observable: Vec<bool> = g_mags
            .iter()
            .map(|g| (BRIGHT_LIMIT_G..=FAINT_LIMIT_G).contains(g))
            .collect();

        HorizonProfile {
            spt: spt.into(),
            v_mini: photometry.v_mini,
            v_abs: photometry.v_abs,
            g_abs,
            distances: distances.to_vec(),
            v_mags,
            g_mags,
            rel_par_err,
            observable,
        }
    }

    /// Iterate over the grid points inside the observable magnitude window, in distance order.
    pub fn observable_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        izip!(
            &self.distances,
            &self.g_mags,
            &self.v_mags,
            &self.rel_par_err,
            &self.observable
        )
        .filter(|&(_, _, _, _, &observed)| observed)
        .map(|(&distance, &g_mag, &v_mag, &rel_par_err, _)| GridPoint {
            distance,
            g_mag,
            v_mag,
            rel_par_err,
        })
    }

    /// Locate the parallax horizon of this profile for one accuracy threshold.
    ///
    /// The scan runs over the observable subsequence only. A crossing exists when the best
    /// observable accuracy is strictly better than the threshold and the error curve exceeds
    /// the threshold before the grid ends.
    ///
    /// Arguments
    /// -----------------
    /// * `threshold`: relative parallax accuracy target (e.g. `0.01` for 1 per cent).
    ///
    /// Return
    /// ----------
    /// * `Some(Crossing)` at the first observable point whose relative error exceeds the
    ///   threshold, `None` when the threshold is never reached within the grid.
    pub fn threshold_crossing(&self, threshold: f64) -> Option<Crossing> {
        let points: Vec<GridPoint> = self.observable_points().collect();
        let rel_errs: Vec<f64> = points.iter().map(|p| p.rel_par_err).collect();
        let index = first_crossing(&rel_errs, threshold)?;
        let point = &points[index];
        Some(Crossing {
            distance: point.distance,
            v_mag: point.v_mag,
            v_abs: self.v_abs,
        })
    }
}

/// First index at which a non-decreasing error sequence exceeds `threshold`.
///
/// Arguments
/// -----------------
/// * `rel_errs`: relative error sequence, assumed non-decreasing.
/// * `threshold`: accuracy threshold.
///
/// Return
/// ----------
/// * `Some(index)` of the first element strictly above the threshold, provided the sequence
///   starts strictly below it. `None` when the sequence is empty, never dips below the
///   threshold, or never exceeds it.
pub fn first_crossing(rel_errs: &[f64], threshold: f64) -> Option<usize> {
    match rel_errs.first() {
        Some(&best) if best < threshold => rel_errs.iter().position(|&err| err > threshold),
        _ => None,
    }
}

/// Points of constant relative parallax accuracy across spectral types.
#[derive(Debug, Clone, PartialEq)]
pub struct IsoAccuracyCurve {
    /// The accuracy threshold this curve traces
    pub threshold: f64,
    /// Crossings of all types that reach the threshold, sorted by absolute V magnitude
    pub points: Vec<Crossing>,
}

/// Collect the crossings of all profiles at one threshold into an iso-accuracy curve.
///
/// Profiles that never reach the threshold are skipped (logged at debug level). The surviving
/// crossings are sorted by absolute V magnitude so the plotting layer can connect them into a
/// contour.
pub fn iso_accuracy_curve(profiles: &[HorizonProfile], threshold: f64) -> IsoAccuracyCurve {
    let points: Vec<Crossing> = profiles
        .iter()
        .filter_map(|profile| {
            let crossing = profile.threshold_crossing(threshold);
            if crossing.is_none() {
                debug!(
                    "{} never reaches a relative parallax accuracy of {} within the grid",
                    profile.spt,
                    percentage_label(threshold)
                );
            }
            crossing
        })
        .sorted_by_key(|crossing| OrderedFloat(crossing.v_abs))
        .collect();

    IsoAccuracyCurve { threshold, points }
}

/// Human-readable percentage label of an accuracy threshold, e.g. `0.001` -> `"0.1%"`.
pub fn percentage_label(threshold: f64) -> String {
    format!("{}%", (threshold * 1000.0).round() / 10.0)
}
