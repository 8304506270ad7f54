//! Reference contour construction from pinyin.

use crate::contour::{ContourSeries, PitchSample};
use crate::pinyin;

/// One instant of an idealized tone shape.
///
/// `value <= 0.0` is the generator's own unvoiced marker. It is a distinct
/// convention from the pitch tracker's `-1.0` input sentinel and the two are
/// never conflated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValue {
    /// Seconds, on the generator's own time axis.
    pub time: f32,
    /// Idealized frequency in Hz, or `<= 0.0` for an unvoiced instant.
    pub value: f32,
}

impl TimeValue {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// External syllable-to-tone-shape capability.
///
/// Implementations take a tone-numbered pinyin string (see
/// [`pinyin::marks_to_numbers`], [`pinyin::syllables`]) and a topline (the
/// peak frequency in Hz the stylized contour should top out at) and return
/// a dense idealized pitch curve. A string the generator cannot map yields
/// an empty result, never an error: the reference curve is a best-effort
/// visual aid.
pub trait ToneShapeGenerator {
    fn generate(&self, tone_numbered: &str, topline_hz: f32) -> Vec<TimeValue>;
}

/// Builds a renderable reference contour for a pinyin string.
#[derive(Debug)]
pub struct ReferenceContourBuilder<G> {
    generator: G,
}

impl<G: ToneShapeGenerator> ReferenceContourBuilder<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The injected generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Derive the reference contour.
    ///
    /// Normalizes `pinyin` to the tone-numbered form, runs the generator,
    /// converts its `value <= 0` instants to unvoiced samples (coalescing
    /// runs, so the result never starts unvoiced and never holds two
    /// consecutive unvoiced samples), and rebases times so the series
    /// begins at 0. An empty generator result yields an empty series.
    pub fn build(&self, pinyin: &str, topline_hz: f32) -> ContourSeries {
        let tone_numbered = pinyin::marks_to_numbers(pinyin);
        let shape = self.generator.generate(&tone_numbered, topline_hz);
        if shape.is_empty() {
            log::debug!("no tone shape for {tone_numbered:?}, reference omitted");
            return ContourSeries::new();
        }

        let mut series = ContourSeries::new();
        for item in shape {
            let sample = if item.value <= 0.0 {
                PitchSample::unvoiced(item.time)
            } else {
                PitchSample::voiced(item.time, item.value)
            };
            series.push_coalesced(sample);
        }
        series.zero_time();
        series
    }
}
