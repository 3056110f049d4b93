//! # Spectral-type photometry
//!
//! This module provides the **photometric lookups by spectral type** used to place stars on the
//! magnitude-distance plane. Each supported spectral type maps to its Johnson `V−I` colour and
//! absolute V magnitude; the absolute G magnitude is derived through the published colour
//! transformation in [`transformations`].
//!
//! ## Public API
//!
//! ### [`SptTable`]
//!
//! ```text
//! type SptTable = HashMap<SptCode, SptPhotometry>
//! ```
//!
//! This map associates a spectral type code (e.g. `"G2V"`) with its
//! [`SptPhotometry`] entry `(V−I, M_V)`. The contents are loaded from a reference table
//! distributed with the crate:
//!
//! ```rust
//! use parallax_horizons::photometry::load_spt_table;
//!
//! let table = load_spt_table().unwrap();
//! println!("{} spectral types", table.len());
//! ```
//!
//! ### Lookups
//!
//! [`vmini_from_spt`], [`vabs_from_spt`] and [`gabs_from_spt`] query the parsed table and fail
//! with [`HorizonsError::UnknownSpectralType`] on codes the table does not carry.
//!
//! ## Typical usage
//!
//! 1. Load the table once with [`load_spt_table`].
//! 2. Query colours and absolute magnitudes per spectral type.
//! 3. Combine with [`transformations::apparent_from_absolute`] to move along the distance axis.
//!
//! ## References
//!
//! - Jordi, C., et al. (2010) — Gaia broad band photometry (colour transformations).
//! - Allen's Astrophysical Quantities, 4th ed. — intrinsic colours and absolute magnitudes.

pub mod transformations;

use std::collections::HashMap;

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    combinator::map,
    number::complete::double,
    sequence::{preceded, separated_pair, terminated},
    IResult, Parser,
};

use crate::constants::{Magnitude, SptCode};
use crate::horizons_errors::HorizonsError;
use transformations::gminv_from_vmini;

/// Intrinsic photometry of a spectral type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SptPhotometry {
    /// Johnson `V−I` colour index
    pub v_mini: Magnitude,
    /// Absolute V magnitude
    pub v_abs: Magnitude,
}

/// Lookup table from spectral type code to its intrinsic photometry.
pub type SptTable = HashMap<SptCode, SptPhotometry>;

static SPT_PHOTOMETRY: &str = include_str!("data/spt_photometry.dat");

fn is_spt_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn parse_spt_code(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, terminated(take_while1(is_spt_char), tag(":"))).parse(input)
}

fn parse_colour_and_vabs(input: &str) -> IResult<&str, (f64, f64)> {
    preceded(
        multispace0,
        separated_pair(double, char(','), preceded(multispace0, double)),
    )
    .parse(input)
}

fn parse_table_line(input: &str) -> IResult<&str, (SptCode, SptPhotometry)> {
    map(
        (parse_spt_code, parse_colour_and_vabs),
        |(code, (v_mini, v_abs))| (code.to_string(), SptPhotometry { v_mini, v_abs }),
    )
    .parse(input)
}

fn parse_table(file: &str) -> Result<SptTable, HorizonsError> {
    file.lines()
        .map(|line| line.split('!').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(|line| {
            parse_table_line(line)
                .map(|(_, entry)| entry)
                .map_err(|_| HorizonsError::PhotometryParsingError(line.to_string()))
        })
        .collect()
}

/// Load the spectral-type photometry table distributed with the crate.
///
/// Return
/// ----------
/// * `Ok(SptTable)` – A hash map where each key is a spectral type code and the value its
///   [`SptPhotometry`] entry.
/// * `Err(HorizonsError)` – If the reference table could not be parsed.
pub fn load_spt_table() -> Result<SptTable, HorizonsError> {
    parse_table(SPT_PHOTOMETRY)
}

/// Johnson `V−I` colour of a spectral type.
///
/// Arguments
/// -----------------
/// * `table`: the parsed [`SptTable`].
/// * `spt`: spectral type code, e.g. `"G2V"`.
///
/// Return
/// ----------
/// * The `V−I` colour index, or [`HorizonsError::UnknownSpectralType`].
pub fn vmini_from_spt(table: &SptTable, spt: &str) -> Result<Magnitude, HorizonsError> {
    table
        .get(spt)
        .map(|entry| entry.v_mini)
        .ok_or_else(|| HorizonsError::UnknownSpectralType(spt.to_string()))
}

/// Absolute V magnitude of a spectral type.
///
/// Arguments
/// -----------------
/// * `table`: the parsed [`SptTable`].
/// * `spt`: spectral type code, e.g. `"G2V"`.
///
/// Return
/// ----------
/// * The absolute V magnitude, or [`HorizonsError::UnknownSpectralType`].
pub fn vabs_from_spt(table: &SptTable, spt: &str) -> Result<Magnitude, HorizonsError> {
    table
        .get(spt)
        .map(|entry| entry.v_abs)
        .ok_or_else(|| HorizonsError::UnknownSpectralType(spt.to_string()))
}

/// Absolute G magnitude of a spectral type, derived from its V photometry through the
/// `G−V` colour transformation.
///
/// Arguments
/// -----------------
/// * `table`: the parsed [`SptTable`].
/// * `spt`: spectral type code, e.g. `"G2V"`.
///
/// Return
/// ----------
/// * The absolute G magnitude, or [`HorizonsError::UnknownSpectralType`].
///
/// See also
/// ------------
/// * [`transformations::gminv_from_vmini`] – The underlying colour transformation.
pub fn gabs_from_spt(table: &SptTable, spt: &str) -> Result<Magnitude, HorizonsError> {
    let entry = table
        .get(spt)
        .ok_or_else(|| HorizonsError::UnknownSpectralType(spt.to_string()))?;
    Ok(entry.v_abs + gminv_from_vmini(entry.v_mini))
}
