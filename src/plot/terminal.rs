//! ASCII preview of the horizon chart for terminal workflows.
//!
//! When no output file is requested the binary prints the magnitude-distance curves as a
//! character canvas: distance decades along the x axis, apparent V magnitude along the y axis,
//! one glyph per spectral type. The preview is intentionally coarse; the plotters backends in
//! [`crate::plot`] produce the publication chart.

use crate::horizon::HorizonProfile;

/// Canvas width in character cells
const CANVAS_COLS: usize = 90;
/// Canvas height in character rows
const CANVAS_ROWS: usize = 24;
/// One glyph per charted spectral type, recycled if the list is longer
const SERIES_GLYPHS: [char; 8] = ['*', '+', 'x', 'o', '#', '@', '&', '%'];

/// Map a value inside `[lo, hi]` onto a cell index in `[0, cells - 1]`.
fn to_cell(value: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let scaled = (value - lo) / (hi - lo) * (cells as f64 - 1.0);
    (scaled.round() as usize).min(cells - 1)
}

/// Render the observable magnitude-distance curves of `profiles` as an ASCII chart.
///
/// Arguments
/// -----------------
/// * `profiles`: horizon profiles, one glyph trace each.
///
/// Return
/// ----------
/// * The canvas with axis annotations and a glyph legend, ready to print. Profiles without
///   observable points contribute nothing; with no drawable data at all, a short notice is
///   returned instead of an empty canvas.
pub fn render(profiles: &[HorizonProfile]) -> String {
    let mut d_lo = f64::INFINITY;
    let mut d_hi = f64::NEG_INFINITY;
    let mut v_lo = f64::INFINITY;
    let mut v_hi = f64::NEG_INFINITY;
    for profile in profiles {
        for point in profile.observable_points() {
            d_lo = d_lo.min(point.distance);
            d_hi = d_hi.max(point.distance);
            v_lo = v_lo.min(point.v_mag);
            v_hi = v_hi.max(point.v_mag);
        }
    }
    if !d_lo.is_finite() || !v_lo.is_finite() {
        return "No observable grid points to chart.\n".to_string();
    }

    let log_lo = d_lo.log10();
    let log_hi = d_hi.log10();
    let mut canvas = vec![[' '; CANVAS_COLS]; CANVAS_ROWS];
    for (index, profile) in profiles.iter().enumerate() {
        let glyph = SERIES_GLYPHS[index % SERIES_GLYPHS.len()];
        for point in profile.observable_points() {
            let col = to_cell(point.distance.log10(), log_lo, log_hi, CANVAS_COLS);
            // Row 0 is the top of the canvas, i.e. the faint end of the magnitude range.
            let row = to_cell(v_hi - point.v_mag, 0.0, v_hi - v_lo, CANVAS_ROWS);
            canvas[row][col] = glyph;
        }
    }

    let mut out = String::new();
    out.push_str("Parallax relative accuracy horizons (V vs distance, log x)\n\n");
    for (row, cells) in canvas.iter().enumerate() {
        let v_of_row = v_hi - row as f64 / (CANVAS_ROWS as f64 - 1.0) * (v_hi - v_lo);
        if row % 4 == 0 {
            out.push_str(&format!("{v_of_row:>6.1} |"));
        } else {
            out.push_str("       |");
        }
        out.extend(cells.iter());
        out.push('\n');
    }

    // x axis with one tick per distance decade
    out.push_str("       +");
    out.push_str(&"-".repeat(CANVAS_COLS));
    out.push('\n');
    let mut tick_row = vec![' '; CANVAS_COLS + 8];
    let first_decade = log_lo.ceil() as i32;
    let last_decade = log_hi.floor() as i32;
    for decade in first_decade..=last_decade {
        let col = 8 + to_cell(decade as f64, log_lo, log_hi, CANVAS_COLS);
        for (offset, c) in format!("10^{decade}").chars().enumerate() {
            if col + offset < tick_row.len() {
                tick_row[col + offset] = c;
            }
        }
    }
    out.extend(tick_row.iter());
    out.push_str("  [pc]\n\n");

    for (index, profile) in profiles.iter().enumerate() {
        let glyph = SERIES_GLYPHS[index % SERIES_GLYPHS.len()];
        out.push_str(&format!("  {glyph} {}", profile.spt));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod terminal_test {
    use super::*;
    use crate::error_models::AstrometricModel;
    use crate::horizon::log_spaced_grid;
    use crate::photometry::SptPhotometry;

    fn solar_profile() -> HorizonProfile {
        let grid = log_spaced_grid(1.0, 6.0, 501);
        HorizonProfile::new(
            "G2V",
            SptPhotometry {
                v_mini: 0.75,
                v_abs: 4.8,
            },
            AstrometricModel::PreLaunch,
            &grid,
        )
    }

    #[test]
    fn test_to_cell_bounds() {
        assert_eq!(to_cell(0.0, 0.0, 1.0, 10), 0);
        assert_eq!(to_cell(1.0, 0.0, 1.0, 10), 9);
        assert_eq!(to_cell(0.5, 0.0, 1.0, 11), 5);
        // Degenerate interval maps everything to the first cell.
        assert_eq!(to_cell(3.0, 3.0, 3.0, 10), 0);
    }

    #[test]
    fn test_render_contains_trace_and_axes() {
        let profiles = vec![solar_profile()];
        let chart = render(&profiles);
        assert!(chart.contains('*'));
        assert!(chart.contains("G2V"));
        assert!(chart.contains("10^2"));
        assert!(chart.contains("[pc]"));
    }

    #[test]
    fn test_render_without_observable_points() {
        let profiles: Vec<HorizonProfile> = Vec::new();
        assert_eq!(render(&profiles), "No observable grid points to chart.\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let profiles = vec![solar_profile()];
        assert_eq!(render(&profiles), render(&profiles));
    }
}
