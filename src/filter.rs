//! Offline cleaning passes for a finished contour.
//!
//! The live stream already drops ceiling glitches and coalesces gaps as
//! samples arrive; these passes do the heavier cleanup that needs the whole
//! curve at once. All three are total: they return a (possibly identical)
//! new series and never fail.
//!
//! The physiology behind the constants: the pitch range across the four
//! Mandarin tones spans less than an octave, and rise/fall times for a
//! pitch change of `d` semitones are `89.6 + 8.7 d` ms and `100.4 + 5.8 d`
//! ms respectively (The Oxford Handbook of Chinese Linguistics, ch. 36,
//! "Intonation in Chinese", pp. 490-491).

use crate::contour::{ContourSeries, PitchSample};

/// Default safety factor for the outlier and slew-rate passes.
///
/// 1 filters hard; 4 in practice removes nothing.
pub const DEFAULT_SAFETY_FACTOR: f32 = 1.66;

// Rise/fall-time slopes folded to seconds per natural-log unit of
// frequency ratio.
const RISE_SECONDS_PER_LN: f32 = 0.1506;
const FALL_SECONDS_PER_LN: f32 = 0.1004;

/// Run all three passes in order: outliers, slew glitches, gap coalescing.
pub fn clean(series: &ContourSeries, safety_factor: f32) -> ContourSeries {
    coalesce_gaps(&drop_slew_glitches(
        &drop_outliers(series, safety_factor),
        safety_factor,
    ))
}

/// Drop frequency outliers.
///
/// Finds the densest window over the sorted voiced frequencies whose ratio
/// stays within `2.0 * safety_factor` (an octave, widened by the safety
/// factor) and drops voiced samples outside it. A lone blip far above or
/// below the utterance goes; unvoiced markers stay.
pub fn drop_outliers(series: &ContourSeries, safety_factor: f32) -> ContourSeries {
    let mut freqs: Vec<f32> = series.voiced().map(|(_, f)| f).collect();
    if freqs.is_empty() {
        return series.clone();
    }
    freqs.sort_by(|a, b| a.total_cmp(b));

    let max_ratio = 2.0 * safety_factor;
    let mut cutoff_low = freqs[0];
    let mut cutoff_high = freqs[freqs.len() - 1];
    let mut best = 0usize;

    for i in 0..freqs.len() {
        for j in (i..freqs.len()).rev() {
            if j - i + 1 < best {
                break;
            }
            if freqs[j] < max_ratio * freqs[i] {
                if j - i + 1 > best {
                    cutoff_low = freqs[i];
                    cutoff_high = freqs[j];
                    best = j - i + 1;
                }
                break;
            }
        }
    }

    let mut kept = Vec::with_capacity(series.len());
    for sample in series.samples() {
        match sample.frequency {
            Some(f) if f < cutoff_low || f > cutoff_high => {
                log::debug!("drop outlier {} s {} Hz", sample.time, f);
            }
            _ => kept.push(*sample),
        }
    }
    ContourSeries::from_samples(kept)
}

/// Drop samples only reachable at an implausible pitch slew rate.
///
/// A voiced sample is dropped when both the transition from its predecessor
/// and the transition to its successor are faster than a human voice can
/// rise or fall. First and last samples are always kept.
pub fn drop_slew_glitches(series: &ContourSeries, safety_factor: f32) -> ContourSeries {
    let samples = series.samples();
    if samples.len() < 2 {
        return series.clone();
    }

    let mut kept = Vec::with_capacity(samples.len());
    let mut into_ok = true;
    for i in 0..samples.len() - 1 {
        let curr = samples[i];
        let next = samples[i + 1];
        let out_ok = slew_ok(&curr, &next, safety_factor);
        let drop = !into_ok && !out_ok;
        into_ok = out_ok;
        if drop {
            log::debug!(
                "drop pitch rate {} s {:?} Hz",
                curr.time,
                curr.frequency
            );
            continue;
        }
        kept.push(curr);
    }
    kept.push(samples[samples.len() - 1]);
    ContourSeries::from_samples(kept)
}

/// Collapse unvoiced runs to single boundary markers and drop a leading or
/// trailing marker.
pub fn coalesce_gaps(series: &ContourSeries) -> ContourSeries {
    let mut out = ContourSeries::new();
    for sample in series.samples() {
        out.push_coalesced(*sample);
    }
    out.trim_trailing_gap();
    out
}

/// Whether the transition between two samples is within what a human voice
/// can do.
fn slew_ok(p0: &PitchSample, p1: &PitchSample, safety_factor: f32) -> bool {
    let (earlier, later) = if p0.time < p1.time { (p0, p1) } else { (p1, p0) };
    let (Some(f0), Some(f1)) = (earlier.frequency, later.frequency) else {
        // A gap on either side is not a slew.
        return true;
    };
    let delta_t = later.time - earlier.time;

    if f1 > f0 {
        delta_t * safety_factor > RISE_SECONDS_PER_LN * (f1 / f0).ln()
    } else if f1 < f0 {
        delta_t * safety_factor > FALL_SECONDS_PER_LN * (f0 / f1).ln()
    } else {
        true
    }
}
