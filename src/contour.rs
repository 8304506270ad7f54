//! Shared representation for live and reference pitch curves.

/// A single pitch observation.
///
/// `frequency` is `None` when no voiced pitch was detected at that instant.
/// The pitch tracker's `-1.0` sentinel never appears here; it is translated
/// at the stream input boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSample {
    /// Seconds relative to the start of the series.
    pub time: f32,
    /// Fundamental frequency in Hz, or `None` for an unvoiced instant.
    pub frequency: Option<f32>,
}

impl PitchSample {
    /// A voiced sample.
    pub fn voiced(time: f32, frequency: f32) -> Self {
        Self {
            time,
            frequency: Some(frequency),
        }
    }

    /// An unvoiced gap marker.
    pub fn unvoiced(time: f32) -> Self {
        Self {
            time,
            frequency: None,
        }
    }

    /// Whether a voiced pitch was detected.
    pub fn is_voiced(&self) -> bool {
        self.frequency.is_some()
    }
}

/// An ordered pitch curve.
///
/// Both the live curve (grown sample by sample) and the reference curve
/// (rebuilt per refresh) use this representation, so the renderer plots
/// them under one contract: time-ascending, beginning at time 0 relative to
/// the first sample, and never holding two consecutive unvoiced samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContourSeries {
    samples: Vec<PitchSample>,
}

impl ContourSeries {
    /// An empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw samples, trusting the caller's ordering and gap
    /// structure. Intended for the offline filter passes and tests; the
    /// stream and the reference builder append through [`push_coalesced`].
    ///
    /// [`push_coalesced`]: ContourSeries::push_coalesced
    pub fn from_samples(samples: Vec<PitchSample>) -> Self {
        Self { samples }
    }

    /// The retained samples, in insertion order.
    pub fn samples(&self) -> &[PitchSample] {
        &self.samples
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently retained sample.
    pub fn last(&self) -> Option<&PitchSample> {
        self.samples.last()
    }

    /// Append with gap coalescing.
    ///
    /// An unvoiced sample is dropped when the series is empty or already
    /// ends unvoiced, so gaps collapse to single boundary markers and the
    /// series never begins with one. Returns whether the sample was
    /// retained.
    pub fn push_coalesced(&mut self, sample: PitchSample) -> bool {
        if !sample.is_voiced() && self.samples.last().is_none_or(|s| !s.is_voiced()) {
            return false;
        }
        self.samples.push(sample);
        true
    }

    /// Drop a trailing unvoiced marker, if any.
    pub fn trim_trailing_gap(&mut self) {
        if self.samples.last().is_some_and(|s| !s.is_voiced()) {
            self.samples.pop();
        }
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Rebase times so the first sample sits at time 0.
    pub fn zero_time(&mut self) {
        let Some(first) = self.samples.first() else {
            return;
        };
        let begin = first.time;
        for sample in &mut self.samples {
            sample.time -= begin;
        }
    }

    /// `(min, max)` over the voiced frequencies, `None` if none exist.
    pub fn frequency_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for f in self.samples.iter().filter_map(|s| s.frequency) {
            range = Some(match range {
                Some((lo, hi)) => (lo.min(f), hi.max(f)),
                None => (f, f),
            });
        }
        range
    }

    /// Times and frequencies of the voiced samples.
    pub fn voiced(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples.iter().filter_map(|s| Some((s.time, s.frequency?)))
    }
}
