use super::*;

fn zoom() -> ComplexTrack {
    ComplexTrack::new(49.0, 30.0).unwrap()
}

#[test]
fn zoom_slider_context_matches_hand_computation() {
    let ctx = zoom().context(430.0);
    assert_eq!(ctx.max_cursor, 381.0);
    assert_eq!(ctx.median_cursor, 191.0);
    assert_eq!(ctx.left_sector, 191.0);
    assert_eq!(ctx.right_sector, 190.0);
    assert_eq!(ctx.right_rebase, 6.0);
    assert_eq!(ctx.safe_rebase, 6.0);
    assert!((ctx.max_rebased_scale - 0.094_736_842).abs() < 1e-8);
    assert_eq!(ctx.fine_scale, ctx.max_rebased_scale);
    assert!(!ctx.seam_clamped());
}

#[test]
fn zoom_slider_landmarks() {
    let t = zoom();
    assert_eq!(t.track_value(191.0, 430.0), 1.0);
    assert_eq!(t.track_value(0.0, 430.0), 0.0);
    assert_eq!(t.track_value(381.0, 430.0), 30.0);
    assert_eq!(t.track_cursor(1.0, 430.0), 191.0);
    assert_eq!(t.track_cursor(30.0, 430.0), 381.0);
    assert_eq!(t.track_cursor(0.0, 430.0), 0.0);
}

#[test]
fn fine_range_moves_ten_times_slower_than_coarse() {
    let t = zoom();
    let fine_step = t.track_value(192.0, 430.0) - t.track_value(191.0, 430.0);
    let coarse_step = t.track_value(301.0, 430.0) - t.track_value(300.0, 430.0);
    assert!((coarse_step / fine_step - 10.0).abs() < 1e-9);
}

#[test]
fn fine_range_ends_below_coarse_range() {
    let t = zoom();
    // 197 is the last fine pixel (median + right_rebase), 198 the first coarse one.
    let last_fine = t.track_value(197.0, 430.0);
    let first_coarse = t.track_value(198.0, 430.0);
    assert!((last_fine - 1.094_736_842).abs() < 1e-8);
    assert!((first_coarse - 7.0 / 190.0 * 30.0).abs() < 1e-12);
    assert!(last_fine < first_coarse);
}

#[test]
fn left_of_pivot_is_linear_below_one() {
    let t = zoom();
    assert!((t.track_value(95.5, 430.0) - 0.5).abs() < 1e-12);
    assert_eq!(t.track_cursor(0.5, 430.0), 96.0);
}

#[test]
fn overlapping_seam_is_clamped() {
    // right_sector = 179 puts the first coarse pixel (6/179 * 30 ~= 1.0056) below the
    // uncorrected fine ceiling (~1.0838).
    let ctx = zoom().context(408.0);
    assert_eq!(ctx.right_sector, 179.0);
    assert_eq!(ctx.right_rebase, 5.0);
    assert!(ctx.seam_clamped());
    let coarse_start = 6.0 / 179.0 * 30.0;
    assert!(ctx.fine_ceiling() < coarse_start);

    let t = zoom();
    let last_fine = t.track_value(185.0, 408.0);
    let first_coarse = t.track_value(186.0, 408.0);
    assert!(last_fine < first_coarse);
    assert_eq!(t.track_cursor(last_fine, 408.0), 185.0);
    assert_eq!(t.track_cursor(first_coarse, 408.0), 186.0);
}

#[test]
fn pivot_is_a_fixed_point_for_any_track() {
    let t = zoom();
    for w in 0..700 {
        let w = f64::from(w);
        let ctx = t.context(w);
        assert_eq!(t.track_value(ctx.median_cursor, w), 1.0);
        assert_eq!(t.track_cursor(1.0, w), ctx.median_cursor);
    }
}

#[test]
fn zero_length_track_reads_neutral_everywhere() {
    let t = zoom();
    let ctx = t.context(20.0);
    assert_eq!(ctx.max_cursor, 0.0);
    assert_eq!(ctx.median_cursor, 0.0);
    assert_eq!(ctx.left_sector, MIN_SECTOR_PIXELS);
    assert_eq!(ctx.right_sector, MIN_SECTOR_PIXELS);
    for c in [-3.0, 0.0, 4.0] {
        assert_eq!(t.track_value(c, 20.0), 1.0);
    }
    for v in [0.0, 1.0, 12.0] {
        assert_eq!(t.track_cursor(v, 20.0), 0.0);
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    let t = zoom();
    assert_eq!(t.track_value(-5.0, 430.0), 0.0);
    assert_eq!(t.track_value(9_999.0, 430.0), 30.0);
    assert_eq!(t.track_cursor(-5.0, 430.0), 0.0);
    assert_eq!(t.track_cursor(500.0, 430.0), 381.0);
    assert_eq!(t.track_cursor(f64::INFINITY, 430.0), 381.0);
    assert_eq!(t.track_value(f64::NAN, 430.0), 0.0);
}

#[test]
fn round_trip_and_monotonicity_hold_across_configurations() {
    for max_value in [1.5, 2.0, 3.0, 5.0, 10.0, 30.0, 100.0] {
        for cap in [0.0, 19.0, 49.0] {
            let t = ComplexTrack::new(cap, max_value).unwrap();
            for w in 0..600 {
                let w = f64::from(w);
                let max_cursor = t.max_cursor(w) as u32;
                let mut prev_value = f64::NEG_INFINITY;
                let mut prev_cursor = f64::NEG_INFINITY;
                for c in 0..=max_cursor {
                    let c = f64::from(c);
                    let v = t.track_value(c, w);
                    let back = t.track_cursor(v, w);
                    assert_eq!(back, c, "max_value={max_value} cap={cap} w={w}");
                    assert!(v >= prev_value, "max_value={max_value} cap={cap} w={w}");
                    assert!(back >= prev_cursor);
                    prev_value = v;
                    prev_cursor = back;
                }
            }
        }
    }
}

#[test]
fn cursor_is_monotonic_in_value() {
    let t = zoom();
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=3_200 {
        let c = t.track_cursor(f64::from(i) * 0.01, 430.0);
        assert!(c >= prev);
        prev = c;
    }
}

#[test]
fn fine_range_width_matches_linear_scan() {
    for (right_sector, max_value) in [(190.0, 30.0), (179.0, 30.0), (1.0, 30.0), (50.5, 2.0), (300.0, 0.5)] {
        let mut expected = 0.0;
        let mut k = 0.0;
        while k < right_sector {
            if (k / right_sector) * max_value <= 1.0 {
                expected = k;
            } else {
                break;
            }
            k += 1.0;
        }
        assert_eq!(fine_range_width(right_sector, max_value), expected);
    }
}
