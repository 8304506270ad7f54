//! Live pitch-sample accumulation.

use crate::contour::{ContourSeries, PitchSample};
use crate::graph::GraphSlot;

/// The pitch tracker reports this frequency when no voiced pitch was
/// detected in a frame.
pub const UNVOICED_SENTINEL: f32 = -1.0;

/// Minimum x-axis width in seconds, so very short utterances still get a
/// legible canvas.
pub const MIN_X_SPAN_SECONDS: f32 = 1.0;

/// Append-only accumulator for one recording session on one graph slot.
///
/// Samples arrive as discrete events, one [`add`] per detected frame, on
/// the same execution context as the render trigger; no locking is needed.
/// [`start`] resets the accumulator and instantly invalidates the previous
/// session.
///
/// Time ordering is accepted as reported: the stream neither validates nor
/// reorders timestamps (upstream trackers emit them monotonically), which
/// is why the x-extent is a running maximum rather than the last sample's
/// time.
///
/// [`add`]: SampleStream::add
/// [`start`]: SampleStream::start
#[derive(Debug)]
pub struct SampleStream {
    series: ContourSeries,
    slot: GraphSlot,
    glitch_ceiling_hz: f32,
    min_expected_hz: Option<f32>,
    max_time: f32,
    last_voiced_time: Option<f32>,
    active: bool,
}

impl SampleStream {
    /// A stream that discards frequencies above `glitch_ceiling_hz` as
    /// tracker noise (see [`GraphPolicy::glitch_ceiling_hz`]).
    ///
    /// [`GraphPolicy::glitch_ceiling_hz`]: crate::graph::GraphPolicy
    pub fn new(glitch_ceiling_hz: f32) -> Self {
        Self {
            series: ContourSeries::new(),
            slot: GraphSlot::Question,
            glitch_ceiling_hz,
            min_expected_hz: None,
            max_time: 0.0,
            last_voiced_time: None,
            active: false,
        }
    }

    /// Begin a recording session.
    ///
    /// Resets to an empty series, selects the slot subsequent samples
    /// target, and records an optional floor for the y-axis lower bound
    /// (meaningful under logarithmic scaling).
    pub fn start(&mut self, slot: GraphSlot, min_expected_hz: Option<f32>) {
        self.series.clear();
        self.slot = slot;
        self.min_expected_hz = min_expected_hz;
        self.max_time = 0.0;
        self.last_voiced_time = None;
        self.active = true;
    }

    /// Feed one tracker frame.
    ///
    /// A frequency of exactly [`UNVOICED_SENTINEL`] (or any non-positive
    /// value, which cannot be a voiced pitch) is treated as an unvoiced
    /// instant. A frequency above the glitch ceiling is discarded entirely.
    /// An unvoiced sample arriving while the series is empty or already
    /// ends unvoiced is discarded, so gaps coalesce to single markers.
    ///
    /// Returns `true` iff the sample was retained, which is the caller's
    /// cue to request a redraw.
    pub fn add(&mut self, time: f32, frequency: f32) -> bool {
        if !self.active {
            log::debug!("sample at {time} s after stop, discarding");
            return false;
        }
        if frequency > self.glitch_ceiling_hz {
            log::debug!("drop glitch {time} s {frequency} Hz");
            return false;
        }

        let sample = if frequency > 0.0 {
            PitchSample::voiced(time, frequency)
        } else {
            PitchSample::unvoiced(time)
        };
        if !self.series.push_coalesced(sample) {
            return false;
        }
        if sample.is_voiced() {
            self.last_voiced_time = Some(time);
        }
        self.max_time = self.max_time.max(time);
        true
    }

    /// End the session.
    ///
    /// No postprocessing happens here; the method is the stable hook for
    /// end-of-session work. Further [`add`] calls are discarded until the
    /// next [`start`].
    ///
    /// [`add`]: SampleStream::add
    /// [`start`]: SampleStream::start
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The slot samples currently target.
    pub fn slot(&self) -> GraphSlot {
        self.slot
    }

    /// The accumulated live series.
    pub fn series(&self) -> &ContourSeries {
        &self.series
    }

    /// Largest timestamp seen this session.
    pub fn max_time(&self) -> f32 {
        self.max_time
    }

    /// The x-axis extent: at least [`MIN_X_SPAN_SECONDS`], extendable to
    /// exactly the longest time seen.
    pub fn x_span(&self) -> f32 {
        self.max_time.max(MIN_X_SPAN_SECONDS)
    }

    /// The y-floor hint recorded at [`start`].
    ///
    /// [`start`]: SampleStream::start
    pub fn min_expected_hz(&self) -> Option<f32> {
        self.min_expected_hz
    }

    /// Seconds since the last voiced sample, relative to `now`.
    ///
    /// `None` until a voiced sample has been seen. Callers use this to end
    /// a recording after a stretch of silence (the original recorder
    /// stopped after 0.5 s without pitch).
    pub fn silence_since(&self, now: f32) -> Option<f32> {
        self.last_voiced_time.map(|t| now - t)
    }
}
