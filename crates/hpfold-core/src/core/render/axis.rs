use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

/// Range covering `values`, padded on both sides by `fraction` of the span.
///
/// Degenerate spans (a single distinct value) are widened by `min_half_width` so the
/// coordinate system is never empty; no values at all yields `0.0..1.0`.
pub fn padded_range(
    values: impl IntoIterator<Item = f64>,
    fraction: f64,
    min_half_width: f64,
) -> Range<f64> {
    let Some((lo, hi)) = values
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    else {
        return 0.0..1.0;
    };

    let span = hi - lo;
    let range = if span > 0.0 {
        let pad = span * fraction;
        (lo - pad)..(hi + pad)
    } else {
        (lo - min_half_width)..(hi + min_half_width)
    };
    if is_drawable(&range) {
        return range;
    }

    // Magnitudes near f64::MAX: clamp, then pad relative to the clamped magnitude.
    let (lo, hi) = (lo.clamp(-AXIS_LIMIT, AXIS_LIMIT), hi.clamp(-AXIS_LIMIT, AXIS_LIMIT));
    let pad = (lo.abs().max(hi.abs()) * fraction.clamp(0.0, 1.0)).max(min_half_width);
    (lo - pad)..(hi + pad)
}

/// Largest magnitude an axis end may take so that the axis span stays finite.
const AXIS_LIMIT: f64 = f64::MAX / 8.0;

fn is_drawable(range: &Range<f64>) -> bool {
    range.start.is_finite()
        && range.end.is_finite()
        && range.start < range.end
        && (range.end - range.start).is_finite()
}

/// Positions of the labelled ticks along `range`, used to place grid lines.
pub fn key_points(range: &Range<f64>, max_points: usize) -> Vec<f64> {
    RangedCoordf64::from(range.clone()).key_points(max_points)
}
