use approx::assert_relative_eq;

use parallax_horizons::horizon::{first_crossing, iso_accuracy_curve, HorizonProfile};

/// Build a profile with a hand-written, monotonically increasing error sequence on a plain
/// 100 pc spaced grid. Apparent magnitudes are synthetic; only indexing matters here.
fn synthetic_profile(spt: &str, v_abs: f64, rel_errs: &[f64], observable: &[bool]) -> HorizonProfile {
    let n = rel_errs.len();
    assert_eq!(observable.len(), n);
    HorizonProfile {
        spt: spt.to_string(),
        v_mini: 0.5,
        v_abs,
        g_abs: v_abs,
        distances: (1..=n).map(|i| i as f64 * 100.0).collect(),
        v_mags: (0..n).map(|i| 10.0 + i as f64).collect(),
        g_mags: (0..n).map(|i| 10.0 + i as f64).collect(),
        rel_par_err: rel_errs.to_vec(),
        observable: observable.to_vec(),
    }
}

#[test]
fn hand_computed_crossing_indices() {
    // The first element above the threshold marks the crossing, provided the sequence dips
    // below it first.
    let errs = [0.0002, 0.0008, 0.003, 0.02, 0.09, 0.4];
    assert_eq!(first_crossing(&errs, 0.001), Some(2));
    assert_eq!(first_crossing(&errs, 0.01), Some(3));
    assert_eq!(first_crossing(&errs, 0.1), Some(5));
    // Tightening beyond the best sample yields no crossing at all.
    assert_eq!(first_crossing(&errs, 0.0001), None);
}

#[test]
fn crossing_distances_match_hand_computed_values() {
    let observable = [true; 6];
    let profile = synthetic_profile(
        "G2V",
        4.8,
        &[0.0002, 0.0008, 0.003, 0.02, 0.09, 0.4],
        &observable,
    );

    // Grid is 100, 200, ..., 600 pc; crossings land on the indices checked above.
    let tight = profile.threshold_crossing(0.001).unwrap();
    assert_relative_eq!(tight.distance, 300.0);
    let medium = profile.threshold_crossing(0.01).unwrap();
    assert_relative_eq!(medium.distance, 400.0);
    let loose = profile.threshold_crossing(0.1).unwrap();
    assert_relative_eq!(loose.distance, 600.0);

    assert_eq!(tight.v_mag, 12.0);
    assert_eq!(tight.v_abs, 4.8);
}

#[test]
fn masked_points_do_not_take_part_in_the_scan() {
    // Same error sequence, but the first two samples are outside the observable window:
    // the scan starts at 0.003 and the 0.1% threshold is no longer reachable.
    let observable = [false, false, true, true, true, true];
    let profile = synthetic_profile(
        "G2V",
        4.8,
        &[0.0002, 0.0008, 0.003, 0.02, 0.09, 0.4],
        &observable,
    );

    assert!(profile.threshold_crossing(0.001).is_none());
    let medium = profile.threshold_crossing(0.01).unwrap();
    assert_relative_eq!(medium.distance, 400.0);
}

#[test]
fn curves_connect_crossings_in_absolute_magnitude_order() {
    let observable = [true; 6];
    // Two types, both crossing 1% at hand-computed grid points; the intrinsically brighter
    // one (smaller absolute magnitude) must come first in the curve.
    let faint = synthetic_profile(
        "M0V",
        8.9,
        &[0.0004, 0.002, 0.008, 0.03, 0.2, 0.9],
        &observable,
    );
    let bright = synthetic_profile(
        "B1V",
        -3.2,
        &[0.0001, 0.0005, 0.004, 0.009, 0.05, 0.3],
        &observable,
    );

    let curve = iso_accuracy_curve(&[faint, bright], 0.01);
    assert_eq!(curve.points.len(), 2);
    assert_eq!(curve.points[0].v_abs, -3.2);
    assert_relative_eq!(curve.points[0].distance, 500.0);
    assert_eq!(curve.points[1].v_abs, 8.9);
    assert_relative_eq!(curve.points[1].distance, 400.0);
}
