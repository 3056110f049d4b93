//! # Horizons: photometry table and astrometric model wiring
//!
//! This module defines the [`Horizons`] struct, the central façade that wires together:
//!
//! 1. **Spectral-type photometry** — the embedded `(V−I, M_V)` table, parsed once at
//!    construction ([`load_spt_table`](crate::photometry::load_spt_table)).
//! 2. **Astrometric error model** — the chosen
//!    [`AstrometricModel`](crate::error_models::AstrometricModel) variant.
//!
//! ## Typical usage
//!
//! ```rust
//! use parallax_horizons::error_models::AstrometricModel;
//! use parallax_horizons::horizon::distance_grid;
//! use parallax_horizons::horizons::Horizons;
//!
//! let env = Horizons::new(AstrometricModel::PreLaunch).unwrap();
//! let grid = distance_grid();
//! let profile = env.horizon_profile("G2V", &grid).unwrap();
//! let horizon = profile.threshold_crossing(0.01);
//! ```
//!
//! ## Panics & errors
//!
//! - Construction fails with a [`HorizonsError`](crate::horizons_errors::HorizonsError) if the
//!   embedded photometry table cannot be parsed.
//! - Lookups for spectral types the table does not carry fail with
//!   [`HorizonsError::UnknownSpectralType`](crate::horizons_errors::HorizonsError::UnknownSpectralType);
//!   nothing panics.

use crate::constants::Parsec;
use crate::error_models::AstrometricModel;
use crate::horizon::HorizonProfile;
use crate::horizons_errors::HorizonsError;
use crate::photometry::{load_spt_table, SptPhotometry, SptTable};

#[derive(Debug, Clone)]
pub struct Horizons {
    spt_table: SptTable,
    astrometric_model: AstrometricModel,
}

impl Horizons {
    /// Construct a new [`Horizons`] context.
    ///
    /// Parses the embedded spectral-type photometry table and records the accuracy model to
    /// evaluate profiles with.
    ///
    /// Arguments
    /// -----------------
    /// * `astrometric_model`: The parallax accuracy model (e.g. [`AstrometricModel::PreLaunch`]).
    ///
    /// Return
    /// ----------
    /// * A new [`Horizons`] instance, or a [`HorizonsError`] if the table cannot be read.
    pub fn new(astrometric_model: AstrometricModel) -> Result<Self, HorizonsError> {
        Ok(Horizons {
            spt_table: load_spt_table()?,
            astrometric_model,
        })
    }

    /// The accuracy model this context evaluates profiles with.
    pub fn astrometric_model(&self) -> AstrometricModel {
        self.astrometric_model
    }

    /// The parsed spectral-type photometry table.
    pub fn spt_table(&self) -> &SptTable {
        &self.spt_table
    }

    /// Intrinsic photometry of a spectral type.
    ///
    /// Arguments
    /// -----------------
    /// * `spt`: spectral type code, e.g. `"G2V"`.
    ///
    /// Return
    /// ----------
    /// * The `(V−I, M_V)` entry, or [`HorizonsError::UnknownSpectralType`].
    pub fn photometry(&self, spt: &str) -> Result<SptPhotometry, HorizonsError> {
        self.spt_table
            .get(spt)
            .copied()
            .ok_or_else(|| HorizonsError::UnknownSpectralType(spt.to_string()))
    }

    /// Evaluate the horizon profile of a spectral type over a distance grid.
    ///
    /// Arguments
    /// -----------------
    /// * `spt`: spectral type code, e.g. `"G2V"`.
    /// * `distances`: distance grid in parsecs, e.g. [`distance_grid`](crate::horizon::distance_grid).
    ///
    /// Return
    /// ----------
    /// * The evaluated [`HorizonProfile`], or [`HorizonsError::UnknownSpectralType`].
    pub fn horizon_profile(
        &self,
        spt: &str,
        distances: &[Parsec],
    ) -> Result<HorizonProfile, HorizonsError> {
        let photometry = self.photometry(spt)?;
        Ok(HorizonProfile::new(
            spt,
            photometry,
            self.astrometric_model,
            distances,
        ))
    }
}
