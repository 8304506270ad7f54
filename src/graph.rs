//! Graph composition and the rendering seam.
//!
//! [`GraphCompositor`] merges the live series with an optional reference
//! series and computes shared axis bounds under a [`GraphPolicy`].
//! [`ToneGraph`] is the per-slot facade wiring a [`SampleStream`], a
//! [`ReferenceContourBuilder`] and a [`Renderer`] together: every retained
//! sample triggers one redraw.

use crate::contour::ContourSeries;
use crate::convert;
use crate::reference::{ReferenceContourBuilder, ToneShapeGenerator};
use crate::stream::SampleStream;
use crate::{Error, Result};

/// Which on-screen graph a series targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSlot {
    /// The prompt side of the card.
    Question,
    /// The learner's attempt.
    Answer,
}

impl GraphSlot {
    /// Numeric slot index (question = 0, answer = 1).
    pub fn index(&self) -> usize {
        match self {
            GraphSlot::Question => 0,
            GraphSlot::Answer => 1,
        }
    }
}

/// Vertical axis bounds handed to the renderer.
///
/// Units follow the scaling regime in force: Hz under
/// [`AxisScaling::Linear`], semitone-scale values under
/// [`AxisScaling::Logarithmic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub y_min: f32,
    pub y_max: f32,
}

/// Axis scaling regime.
///
/// The pitch range across the four Mandarin tones spans less than an
/// octave. Both regimes widen a narrower raw span to a full octave, so a
/// flat first tone stays visually legible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScaling {
    /// Bounds in Hz; the octave floor pushes `y_min` down to `y_max / 2`.
    #[default]
    Linear,
    /// Bounds in semitone-scale units; the octave floor pushes `y_min`
    /// down to `y_max - octave_floor_semitones`, capped by the stream's
    /// `min_expected_hz` hint.
    Logarithmic,
}

/// Scaling and cleaning policy for one graph.
///
/// # Example
/// ```
/// use shengdiao::graph::{AxisScaling, GraphPolicy};
///
/// let policy = GraphPolicy::new()
///     .with_glitch_ceiling(700.0)
///     .with_axis_scaling(AxisScaling::Logarithmic);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GraphPolicy {
    /// Frequencies above this are tracker noise and are discarded.
    pub glitch_ceiling_hz: f32,
    /// Axis scaling regime; one regime per compositor, never per call.
    pub axis_scaling: AxisScaling,
    /// Minimum displayed span, in semitones (12 = one octave).
    pub octave_floor_semitones: f32,
}

impl Default for GraphPolicy {
    fn default() -> Self {
        Self {
            glitch_ceiling_hz: 500.0,
            axis_scaling: AxisScaling::Linear,
            octave_floor_semitones: 12.0,
        }
    }
}

impl GraphPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glitch ceiling in Hz.
    pub fn with_glitch_ceiling(mut self, hz: f32) -> Self {
        self.glitch_ceiling_hz = hz;
        self
    }

    /// Set the axis scaling regime.
    pub fn with_axis_scaling(mut self, scaling: AxisScaling) -> Self {
        self.axis_scaling = scaling;
        self
    }

    /// Set the minimum displayed span in semitones.
    pub fn with_octave_floor(mut self, semitones: f32) -> Self {
        self.octave_floor_semitones = semitones;
        self
    }

    /// Check the policy for nonsensical values.
    pub fn validate(&self) -> Result<()> {
        if !(self.glitch_ceiling_hz > 0.0) {
            return Err(Error::InvalidParameter {
                name: "glitch_ceiling_hz",
                value: self.glitch_ceiling_hz.to_string(),
                reason: "must be > 0",
            });
        }
        if !(self.octave_floor_semitones > 0.0) {
            return Err(Error::InvalidParameter {
                name: "octave_floor_semitones",
                value: self.octave_floor_semitones.to_string(),
                reason: "must be > 0",
            });
        }
        Ok(())
    }
}

/// Fixed presentation policy: axis tick labels and grid lines are never
/// drawn. There are no knobs; the struct exists so the render seam states
/// the policy explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotStyle;

impl PlotStyle {
    pub fn show_axis_labels(&self) -> bool {
        false
    }

    pub fn show_grid(&self) -> bool {
        false
    }
}

/// Chart-rendering backend seam.
///
/// The core never draws pixels; every redraw delegates here with one or two
/// series (live first, reference second), the shared axis bounds (`None`
/// when no finite sample exists yet), and the x-extent in seconds. Redraws
/// are idempotent: a stale draw is simply superseded by the next one.
pub trait Renderer {
    fn draw(
        &mut self,
        slot: GraphSlot,
        series: &[&ContourSeries],
        bounds: Option<AxisBounds>,
        x_max: f32,
        style: PlotStyle,
    );
}

/// Computes what gets rendered: which series, and under which axis bounds.
#[derive(Debug)]
pub struct GraphCompositor {
    policy: GraphPolicy,
}

impl GraphCompositor {
    pub fn new(policy: GraphPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &GraphPolicy {
        &self.policy
    }

    /// Merge the live series with an optional reference series.
    ///
    /// Returns the series to render (one or two, sharing axis bounds) and
    /// the bounds themselves. Bounds come from scanning every voiced sample
    /// across the present series; with no voiced sample anywhere they are
    /// `None` and the renderer draws an empty frame. `min_expected_hz` is
    /// the stream's optional y-floor hint, honored under logarithmic
    /// scaling only.
    pub fn compose<'a>(
        &self,
        live: &'a ContourSeries,
        reference: Option<&'a ContourSeries>,
        min_expected_hz: Option<f32>,
    ) -> (Vec<&'a ContourSeries>, Option<AxisBounds>) {
        let mut series = vec![live];
        if let Some(reference) = reference {
            series.push(reference);
        }
        let bounds = self.bounds(&series, min_expected_hz);
        (series, bounds)
    }

    fn bounds(
        &self,
        series: &[&ContourSeries],
        min_expected_hz: Option<f32>,
    ) -> Option<AxisBounds> {
        let mut raw: Option<(f32, f32)> = None;
        for s in series {
            if let Some((lo, hi)) = s.frequency_range() {
                raw = Some(match raw {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        let (raw_min, raw_max) = raw?;

        match self.policy.axis_scaling {
            AxisScaling::Linear => {
                // Octave floor in the frequency domain: never display a
                // span narrower than y_max/2..y_max. Widens downward only.
                let y_min = raw_min.min(raw_max / 2.0);
                Some(AxisBounds {
                    y_min,
                    y_max: raw_max,
                })
            }
            AxisScaling::Logarithmic => {
                let y_max = convert::hz_to_semitones(raw_max);
                let mut y_min = convert::hz_to_semitones(raw_min);
                if y_max - y_min < self.policy.octave_floor_semitones {
                    y_min = y_max - self.policy.octave_floor_semitones;
                    if let Some(floor_hz) = min_expected_hz {
                        y_min = y_min.max(convert::hz_to_semitones(floor_hz));
                    }
                }
                Some(AxisBounds { y_min, y_max })
            }
        }
    }
}

/// One practice graph: live stream, optional reference contour, renderer.
///
/// Owns the per-slot state explicitly; there is no module-global "current
/// graph". Every retained sample produces exactly one redraw.
///
/// The reference topline is the live series' observed peak frequency, so
/// the stylized contour tops out where the speaker actually did; until a
/// voiced live sample exists the reference is omitted.
#[derive(Debug)]
pub struct ToneGraph<G, R> {
    stream: SampleStream,
    builder: ReferenceContourBuilder<G>,
    compositor: GraphCompositor,
    renderer: R,
    pinyin: Option<String>,
}

impl<G: ToneShapeGenerator, R: Renderer> ToneGraph<G, R> {
    pub fn new(policy: GraphPolicy, generator: G, renderer: R) -> Result<Self> {
        let glitch_ceiling_hz = policy.glitch_ceiling_hz;
        Ok(Self {
            stream: SampleStream::new(glitch_ceiling_hz),
            builder: ReferenceContourBuilder::new(generator),
            compositor: GraphCompositor::new(policy)?,
            renderer,
            pinyin: None,
        })
    }

    /// Begin a recording session for `slot`, optionally against a pinyin
    /// reference (diacritic-marked or already tone-numbered).
    pub fn start(&mut self, slot: GraphSlot, pinyin: Option<&str>, min_expected_hz: Option<f32>) {
        self.pinyin = pinyin.map(str::to_owned);
        self.stream.start(slot, min_expected_hz);
    }

    /// Feed one tracker frame; redraws if the sample was retained.
    pub fn add(&mut self, time: f32, frequency: f32) {
        if self.stream.add(time, frequency) {
            self.redraw();
        }
    }

    /// End the session.
    pub fn stop(&mut self) {
        self.stream.stop();
    }

    /// The accumulated live series.
    pub fn series(&self) -> &ContourSeries {
        self.stream.series()
    }

    /// The underlying stream.
    pub fn stream(&self) -> &SampleStream {
        &self.stream
    }

    /// The rendering backend, for callers that need it back.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn redraw(&mut self) {
        let reference = match (&self.pinyin, self.stream.series().frequency_range()) {
            (Some(pinyin), Some((_, topline))) => Some(self.builder.build(pinyin, topline)),
            _ => None,
        };
        let (series, bounds) = self.compositor.compose(
            self.stream.series(),
            reference.as_ref(),
            self.stream.min_expected_hz(),
        );
        self.renderer.draw(
            self.stream.slot(),
            &series,
            bounds,
            self.stream.x_span(),
            PlotStyle::default(),
        );
    }
}
