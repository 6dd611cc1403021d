//! Core value mapping for the dual-handle range slider.
//!
//! Everything in here is pure and free of browser types so the drag
//! arithmetic can be unit-tested natively. The Yew component in the
//! binary crate feeds pointer coordinates and track geometry into these
//! functions and forwards accepted pairs to its host.

/// Which of the two slider handles a drag gesture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The handle bound to `value1`, the lower end of the interval.
    Lower,
    /// The handle bound to `value2`, the upper end of the interval.
    Upper,
}

/// Round `value` to the nearest multiple of `step` counted from `min`,
/// then clamp into `[min, max]`.
///
/// Rounding is relative to the offset from `min`, not the absolute
/// value, so a range like `1.99..=70.99` with step 1 yields
/// `1.99, 2.99, 3.99, …` rather than whole numbers.
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value.clamp(min, max);
    }
    let steps = ((value - min) / step).round();
    (min + steps * step).clamp(min, max)
}

/// Map a pointer's horizontal position to a stepped value in `[min, max]`.
///
/// `track_left` and `track_width` come from the track element's bounding
/// rect. Positions before the track start map to `min` and positions past
/// its end map to `max`. Returns `None` while the track has no measured
/// width (e.g. before layout), in which case the move should be ignored.
pub fn value_from_pointer(
    client_x: f64,
    track_left: f64,
    track_width: f64,
    min: f64,
    max: f64,
    step: f64,
) -> Option<f64> {
    if track_width <= 0.0 {
        return None;
    }
    let percentage = ((client_x - track_left) / track_width).clamp(0.0, 1.0);
    let raw = min + percentage * (max - min);
    Some(snap_to_step(raw, min, max, step))
}

/// Replace `value` with the closest member of `allowed`.
///
/// Linear scan with a strict comparison, so an exact tie keeps the
/// earlier entry (the lower value, given ascending input). An empty set
/// leaves the value untouched.
pub fn snap_to_nearest(value: f64, allowed: &[f64]) -> f64 {
    let mut best = match allowed.first() {
        Some(&first) => first,
        None => return value,
    };
    for &candidate in &allowed[1..] {
        if (candidate - value).abs() < (best - value).abs() {
            best = candidate;
        }
    }
    best
}

/// Ordering guard for a drag move.
///
/// Returns the new `(value1, value2)` pair when the candidate is
/// accepted, or `None` when applying it would let the handles cross.
/// Meeting the other handle exactly is allowed; crossing it is not.
pub fn apply_candidate(
    handle: Handle,
    candidate: f64,
    value1: f64,
    value2: f64,
) -> Option<(f64, f64)> {
    match handle {
        Handle::Lower if candidate <= value2 => Some((candidate, value2)),
        Handle::Upper if candidate >= value1 => Some((value1, candidate)),
        _ => None,
    }
}

/// Position of `value` along the track as a percentage in `[0, 100]`.
pub fn percent_along(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Format a value as a two-decimal euro amount, e.g. `€1.00`.
#[inline]
pub fn format_currency(value: f64) -> String {
    format!("€{:.2}", value)
}

/// JSON payload of the bounds endpoint: `{"min": 5, "max": 500}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeBoundsResponse {
    pub min: f64,
    pub max: f64,
}

/// JSON payload of the fixed-values endpoint:
/// `{"fixedValues": [1.99, 5.99, …]}`. A missing list decodes as empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixedValuesResponse {
    #[serde(rename = "fixedValues", default)]
    pub fixed_values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Track geometry used throughout: left edge at 0, width 99 px, so
    // with min=1/max=100/step=1 each pixel is exactly one unit.
    const MIN: f64 = 1.0;
    const MAX: f64 = 100.0;

    #[test]
    fn pointer_left_of_track_maps_to_min() {
        assert_eq!(
            value_from_pointer(-250.0, 0.0, 99.0, MIN, MAX, 1.0),
            Some(MIN)
        );
    }

    #[test]
    fn pointer_right_of_track_maps_to_max() {
        assert_eq!(
            value_from_pointer(5000.0, 0.0, 99.0, MIN, MAX, 1.0),
            Some(MAX)
        );
    }

    #[test]
    fn pointer_position_interpolates_linearly() {
        assert_eq!(
            value_from_pointer(49.0, 0.0, 99.0, MIN, MAX, 1.0),
            Some(50.0)
        );
    }

    #[test]
    fn track_offset_is_subtracted_before_mapping() {
        // Same geometry shifted 100 px to the right.
        assert_eq!(
            value_from_pointer(149.0, 100.0, 99.0, MIN, MAX, 1.0),
            Some(50.0)
        );
    }

    #[test]
    fn unmeasured_track_yields_no_value() {
        assert_eq!(value_from_pointer(42.0, 0.0, 0.0, MIN, MAX, 1.0), None);
        assert_eq!(value_from_pointer(42.0, 0.0, -1.0, MIN, MAX, 1.0), None);
    }

    #[test]
    fn step_rounding_is_relative_to_min() {
        // min=1, step=5: the grid is 1, 6, 11, …
        assert_eq!(snap_to_step(7.4, 1.0, 100.0, 5.0), 6.0);
        assert_eq!(snap_to_step(8.6, 1.0, 100.0, 5.0), 11.0);
    }

    #[test]
    fn stepped_value_never_leaves_bounds() {
        // The nearest grid point can land past max; clamping wins.
        assert_eq!(snap_to_step(11.0, 0.0, 10.0, 3.0), 10.0);
        assert_eq!(snap_to_step(-4.0, 0.0, 10.0, 3.0), 0.0);
    }

    #[test]
    fn non_positive_step_only_clamps() {
        assert_eq!(snap_to_step(7.3, 1.0, 100.0, 0.0), 7.3);
        assert_eq!(snap_to_step(250.0, 1.0, 100.0, 0.0), 100.0);
    }

    #[test]
    fn snaps_to_nearest_fixed_value() {
        let set = [1.99, 5.0, 10.0, 30.0, 50.0, 70.99];
        assert_eq!(snap_to_nearest(3.4, &set), 1.99);
        assert_eq!(snap_to_nearest(4.0, &set), 5.0);
        assert_eq!(snap_to_nearest(68.0, &set), 70.99);
    }

    #[test]
    fn fixed_value_tie_keeps_lower_entry() {
        assert_eq!(snap_to_nearest(3.0, &[2.0, 4.0]), 2.0);
    }

    #[test]
    fn empty_fixed_set_leaves_value_untouched() {
        assert_eq!(snap_to_nearest(3.0, &[]), 3.0);
    }

    #[test]
    fn every_pointer_position_snaps_into_the_set() {
        let set = [1.99, 10.0, 25.0, 40.0, 70.99];
        for px in 0..=99 {
            let stepped = value_from_pointer(px as f64, 0.0, 99.0, 1.99, 70.99, 1.0)
                .expect("track is measured");
            let reported = snap_to_nearest(stepped, &set);
            assert!(set.contains(&reported), "{} not in set", reported);
        }
    }

    #[test]
    fn lower_handle_accepts_moves_below_upper() {
        // Dragging handle 1 to 50 while value2 sits at 100 → (50, 100).
        assert_eq!(
            apply_candidate(Handle::Lower, 50.0, 30.0, 100.0),
            Some((50.0, 100.0))
        );
    }

    #[test]
    fn lower_handle_cannot_cross_upper() {
        assert_eq!(apply_candidate(Handle::Lower, 60.0, 30.0, 50.0), None);
    }

    #[test]
    fn lower_handle_may_meet_upper() {
        assert_eq!(
            apply_candidate(Handle::Lower, 50.0, 30.0, 50.0),
            Some((50.0, 50.0))
        );
    }

    #[test]
    fn upper_handle_cannot_cross_lower() {
        assert_eq!(apply_candidate(Handle::Upper, 20.0, 30.0, 50.0), None);
    }

    #[test]
    fn upper_handle_accepts_moves_above_lower() {
        assert_eq!(
            apply_candidate(Handle::Upper, 80.0, 30.0, 50.0),
            Some((30.0, 80.0))
        );
    }

    #[test]
    fn drag_sequence_never_reports_inverted_pair() {
        let mut pair = (1.0, 100.0);
        let moves = [
            (Handle::Lower, 40.0),
            (Handle::Upper, 20.0), // rejected, would cross
            (Handle::Lower, 80.0),
            (Handle::Upper, 55.0), // rejected, would cross
            (Handle::Lower, 55.0),
            (Handle::Upper, 55.0), // meeting is allowed
        ];
        for (handle, candidate) in moves {
            if let Some(next) = apply_candidate(handle, candidate, pair.0, pair.1) {
                assert!(next.0 <= next.1);
                pair = next;
            }
        }
        assert_eq!(pair, (55.0, 55.0));
    }

    #[test]
    fn handle_position_is_proportional() {
        assert_eq!(percent_along(0.0, 0.0, 200.0), 0.0);
        assert_eq!(percent_along(50.0, 0.0, 200.0), 25.0);
        assert_eq!(percent_along(200.0, 0.0, 200.0), 100.0);
    }

    #[test]
    fn degenerate_range_renders_at_track_start() {
        assert_eq!(percent_along(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn currency_format_pads_two_decimals() {
        assert_eq!(format_currency(1.0), "€1.00");
        assert_eq!(format_currency(100.0), "€100.00");
        assert_eq!(format_currency(3.456), "€3.46");
    }

    #[test]
    fn bounds_payload_deserializes() {
        let parsed: RangeBoundsResponse =
            serde_json::from_str(r#"{"min": 5, "max": 500}"#).unwrap();
        assert_eq!(parsed, RangeBoundsResponse { min: 5.0, max: 500.0 });
        assert_eq!(format_currency(parsed.min), "€5.00");
        assert_eq!(format_currency(parsed.max), "€500.00");
    }

    #[test]
    fn fixed_values_payload_deserializes() {
        let parsed: FixedValuesResponse =
            serde_json::from_str(r#"{"fixedValues": [1.99, 5.99, 10.99]}"#).unwrap();
        assert_eq!(parsed.fixed_values, vec![1.99, 5.99, 10.99]);
    }

    #[test]
    fn missing_fixed_values_default_to_empty() {
        let parsed: FixedValuesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.fixed_values.is_empty());
    }
}
