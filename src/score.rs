//! Tonal similarity between two pitch contours.
//!
//! Dynamic time warping absorbs the speed difference between two
//! renditions of the same word, so what remains of the alignment cost is
//! the difference in tone shape.

use ndarray::Array2;

use crate::contour::ContourSeries;

/// DTW distance between two contours' tone shapes.
///
/// Unvoiced samples carry no tonal information and are skipped; the voiced
/// frequencies are compared on a log scale, where equal musical intervals
/// are equidistant. Returns `None` when either contour has no voiced
/// sample. Lower is a closer tonal match; a contour against itself scores
/// 0.
///
/// # Example
/// ```
/// use shengdiao::contour::{ContourSeries, PitchSample};
/// use shengdiao::score::pitch_distance;
///
/// let series = ContourSeries::from_samples(vec![
///     PitchSample::voiced(0.0, 220.0),
///     PitchSample::voiced(0.1, 260.0),
/// ]);
/// assert_eq!(pitch_distance(&series, &series), Some(0.0));
/// assert_eq!(pitch_distance(&series, &ContourSeries::new()), None);
/// ```
pub fn pitch_distance(a: &ContourSeries, b: &ContourSeries) -> Option<f32> {
    let xs = log_pitch_track(a);
    let ys = log_pitch_track(b);
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    let distance = dtw_cost(&xs, &ys);
    log::debug!("pitch distance = {distance}");
    Some(distance)
}

/// The voiced frequencies of a contour, in log10.
fn log_pitch_track(series: &ContourSeries) -> Vec<f32> {
    series.voiced().map(|(_, f)| f.log10()).collect()
}

/// Accumulated DTW cost between two 1-D tracks, absolute-difference local
/// distance, unconstrained path.
fn dtw_cost(xs: &[f32], ys: &[f32]) -> f32 {
    let n = xs.len();
    let m = ys.len();
    let mut cost = Array2::<f32>::zeros((n, m));

    cost[(0, 0)] = (xs[0] - ys[0]).abs();
    for i in 1..n {
        cost[(i, 0)] = cost[(i - 1, 0)] + (xs[i] - ys[0]).abs();
    }
    for j in 1..m {
        cost[(0, j)] = cost[(0, j - 1)] + (xs[0] - ys[j]).abs();
    }
    for i in 1..n {
        for j in 1..m {
            let min_prev = cost[(i - 1, j)]
                .min(cost[(i, j - 1)])
                .min(cost[(i - 1, j - 1)]);
            cost[(i, j)] = (xs[i] - ys[j]).abs() + min_prev;
        }
    }

    cost[(n - 1, m - 1)]
}
