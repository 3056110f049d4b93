//! # Tabular display for parallax horizon summaries
//!
//! Pretty, zero-copy renderer to print the horizon distances of a set of
//! [`HorizonProfile`]s as a **table**, one row per spectral type and one column per accuracy
//! threshold.
//!
//! ## Overview
//!
//! The entry point is the display adaptor [`HorizonSummaryDisplay`]. It **borrows** the
//! profiles and renders a formatted table when used with Rust formatting (`{}`), without
//! cloning or moving data. Thresholds a type never reaches within the grid render as `-`.
//!
//! ```rust,ignore
//! use parallax_horizons::horizon::display::HorizonSummaryDisplay;
//!
//! println!("{}", HorizonSummaryDisplay::new(&profiles, &ACCURACY_THRESHOLDS));
//! ```

use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use super::{percentage_label, HorizonProfile};
use crate::constants::Parsec;

/// Display adaptor to render parallax horizons as a table.
///
/// Columns
/// -----------------
/// * `SpT` – spectral type code.
/// * `M_V` – absolute V magnitude.
/// * One `Horizon <t> [pc]` column per threshold, tightest first.
pub struct HorizonSummaryDisplay<'a> {
    /// Borrowed profiles to render. No allocation or copying occurs.
    profiles: &'a [HorizonProfile],
    /// Accuracy thresholds, one summary column each.
    thresholds: &'a [f64],
}

impl<'a> HorizonSummaryDisplay<'a> {
    /// Build a new table adaptor.
    ///
    /// Arguments
    /// -----------------
    /// * `profiles` – Borrowed horizon profiles, one row each.
    /// * `thresholds` – Relative accuracy thresholds, one column each.
    pub fn new(profiles: &'a [HorizonProfile], thresholds: &'a [f64]) -> Self {
        Self {
            profiles,
            thresholds,
        }
    }

    fn distance_cell(distance: Option<Parsec>) -> String {
        match distance {
            Some(d) => format!("{d:.0}"),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for HorizonSummaryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("SpT"), Cell::new("M_V")];
        header.extend(
            self.thresholds
                .iter()
                .map(|&threshold| Cell::new(format!("Horizon {} [pc]", percentage_label(threshold)))),
        );
        table.set_header(header);

        for profile in self.profiles {
            let mut cells = vec![
                Cell::new(&profile.spt),
                Cell::new(format!("{:.2}", profile.v_abs)).set_alignment(CellAlignment::Right),
            ];
            cells.extend(self.thresholds.iter().map(|&threshold| {
                let distance = profile
                    .threshold_crossing(threshold)
                    .map(|crossing| crossing.distance);
                Cell::new(Self::distance_cell(distance)).set_alignment(CellAlignment::Right)
            }));
            table.add_row(Row::from(cells));
        }

        writeln!(f, "Parallax horizons (n={})", self.profiles.len())?;
        writeln!(f, "{table}")
    }
}

#[cfg(test)]
mod horizon_display_tests {
    use super::*;
    use crate::constants::ACCURACY_THRESHOLDS;
    use crate::error_models::AstrometricModel;
    use crate::horizon::distance_grid;
    use crate::photometry::SptPhotometry;

    #[test]
    fn summary_contains_types_and_headers() {
        let grid = distance_grid();
        let profiles = vec![HorizonProfile::new(
            "G2V",
            SptPhotometry {
                v_mini: 0.75,
                v_abs: 4.8,
            },
            AstrometricModel::PreLaunch,
            &grid,
        )];

        let s = format!("{}", HorizonSummaryDisplay::new(&profiles, &ACCURACY_THRESHOLDS));
        assert!(s.contains("G2V"));
        assert!(s.contains("Horizon 0.1% [pc]"));
        assert!(s.contains("Horizon 1% [pc]"));
        assert!(s.contains("Horizon 10% [pc]"));
        assert!(s.contains("4.80"));
    }

    #[test]
    fn unreached_threshold_renders_dash() {
        // A bright supergiant seen closer than its bright limit has an empty observable
        // window, hence no crossing at any threshold.
        let grid = vec![10.0, 100.0];
        let profile = HorizonProfile::new(
            "B0I",
            SptPhotometry {
                v_mini: -0.23,
                v_abs: -6.2,
            },
            AstrometricModel::PreLaunch,
            &grid,
        );
        assert!(profile.observable_points().next().is_none());

        let profiles = vec![profile];
        let s = format!("{}", HorizonSummaryDisplay::new(&profiles, &ACCURACY_THRESHOLDS));
        assert!(s.contains('-'));
    }
}
