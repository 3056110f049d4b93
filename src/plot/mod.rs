//! # Chart rendering for parallax horizons
//!
//! This module renders the analysis chart: apparent V magnitude against distance (log scale),
//! one curve per spectral type restricted to its observable window, overlaid with dashed
//! iso-accuracy contours through the threshold crossings.
//!
//! ## Overview
//!
//! - [`save_svg`] / [`save_png`] write the chart through the vector and bitmap backends,
//!   sharing one generic draw routine.
//! - Series colours follow a hue ramp from blue (240°) to red across the type list, at full
//!   saturation; each curve is labeled in a lower-right legend.
//! - Iso-accuracy contours are annotated with their percentage label next to the last (i.e.
//!   intrinsically brightest) crossing.
//! - [`terminal`] provides an ASCII preview of the same curves for interactive runs without a
//!   display file.

pub mod terminal;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::constants::Magnitude;
use crate::horizon::{percentage_label, HorizonProfile, IsoAccuracyCurve};
use crate::horizons_errors::HorizonsError;

/// Chart canvas size in pixels, a 10:6.5 aspect
pub const CHART_SIZE: (u32, u32) = (1000, 650);

fn to_plot_err<E>(error: DrawingAreaErrorKind<E>) -> HorizonsError
where
    E: std::error::Error + Send + Sync,
{
    HorizonsError::Plotting(error.to_string())
}

/// Hue-ramp colour of one series: blue (240°) for the first type down to red for the last.
fn series_colour(index: usize, total: usize) -> HSLColor {
    let delta = if total > 1 {
        240.0 / (total as f64 - 1.0)
    } else {
        0.0
    };
    let hue = (240.0 - index as f64 * delta) / 360.0;
    HSLColor(hue, 1.0, 0.45)
}

/// V-magnitude range covered by the observable windows of all profiles, padded for labels.
fn magnitude_range(profiles: &[HorizonProfile]) -> (Magnitude, Magnitude) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for profile in profiles {
        for point in profile.observable_points() {
            lo = lo.min(point.v_mag);
            hi = hi.max(point.v_mag);
        }
    }
    if lo.is_finite() && hi.is_finite() {
        (lo - 0.5, hi + 0.5)
    } else {
        (0.0, 1.0)
    }
}

/// Write the chart as an SVG file.
///
/// Arguments
/// -----------------
/// * `path`: output file path.
/// * `profiles`: horizon profiles, one curve each.
/// * `curves`: iso-accuracy contours to overlay.
pub fn save_svg(
    path: &str,
    profiles: &[HorizonProfile],
    curves: &[IsoAccuracyCurve],
) -> Result<(), HorizonsError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, profiles, curves)
}

/// Write the chart as a PNG file.
///
/// Arguments
/// -----------------
/// * `path`: output file path.
/// * `profiles`: horizon profiles, one curve each.
/// * `curves`: iso-accuracy contours to overlay.
pub fn save_png(
    path: &str,
    profiles: &[HorizonProfile],
    curves: &[IsoAccuracyCurve],
) -> Result<(), HorizonsError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, profiles, curves)
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    profiles: &[HorizonProfile],
    curves: &[IsoAccuracyCurve],
) -> Result<(), HorizonsError>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(to_plot_err)?;

    let (v_lo, v_hi) = magnitude_range(profiles);
    let mut chart = ChartBuilder::on(root)
        .caption("Parallax relative accuracy horizons", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d((1.0e1..1.0e6_f64).log_scale(), v_lo..v_hi)
        .map_err(to_plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance [pc]")
        .y_desc("V")
        .draw()
        .map_err(to_plot_err)?;

    for (index, profile) in profiles.iter().enumerate() {
        let colour = series_colour(index, profiles.len());
        chart
            .draw_series(LineSeries::new(
                profile
                    .observable_points()
                    .map(|point| (point.distance, point.v_mag)),
                colour.stroke_width(2),
            ))
            .map_err(to_plot_err)?
            .label(profile.spt.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], colour.stroke_width(2))
            });
    }

    let label_style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for curve in curves {
        let Some(last) = curve.points.last().copied() else {
            continue;
        };
        chart
            .draw_series(DashedLineSeries::new(
                curve
                    .points
                    .iter()
                    .map(|crossing| (crossing.distance, crossing.v_mag)),
                6,
                4,
                BLACK.stroke_width(1),
            ))
            .map_err(to_plot_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                percentage_label(curve.threshold),
                (last.distance * 0.8, last.v_mag + 0.3),
                label_style.clone(),
            )))
            .map_err(to_plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_plot_err)?;

    root.present().map_err(to_plot_err)?;
    Ok(())
}

#[cfg(test)]
mod plot_test {
    use super::*;

    #[test]
    fn test_series_colour_ramp() {
        // First series is blue, last is red, spread evenly in between.
        let first = series_colour(0, 6);
        let last = series_colour(5, 6);
        assert_eq!(first.0, 240.0 / 360.0);
        assert_eq!(last.0, 0.0);
        assert!(series_colour(2, 6).0 > series_colour(3, 6).0);

        // A single series degenerates to plain blue rather than dividing by zero.
        assert_eq!(series_colour(0, 1).0, 240.0 / 360.0);
    }

    #[test]
    fn test_magnitude_range_fallback() {
        // No profiles at all: the chart still gets a valid, non-empty range.
        let (lo, hi) = magnitude_range(&[]);
        assert!(lo < hi);
    }
}
