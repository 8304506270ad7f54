//! Pitch-contour feedback for Mandarin tone practice.
//!
//! Shengdiao turns a live stream of fundamental-frequency samples (from an
//! upstream pitch tracker) and an optional pinyin reference string into
//! normalized, comparable curves for on-screen plotting: the learner's
//! pitch next to the idealized tone contour of the word they are
//! practicing.
//!
//! Pitch detection, tone-shape synthesis, and pixel drawing all live
//! outside this crate. The tone-shape generator and the chart backend are
//! consumed through the [`reference::ToneShapeGenerator`] and
//! [`graph::Renderer`] traits, so they can be swapped for alternative
//! models or test doubles.
//!
//! # Quick Start
//!
//! ```rust
//! use shengdiao::pinyin;
//!
//! // Diacritic pinyin normalizes to the ASCII tone-numbered form.
//! let numbered = pinyin::marks_to_numbers("h\u{1ce}ok\u{e0}n");
//! assert_eq!(numbered, "hao3kan4");
//!
//! let parts = pinyin::syllables(&numbered);
//! assert_eq!(parts[0].tone, pinyin::Tone::Third);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pinyin`] | Tone-mark normalization, tone classes, syllable splitting |
//! | [`contour`] | `PitchSample` and the shared `ContourSeries` curve |
//! | [`reference`] | Reference contour construction, tone-shape generator seam |
//! | [`stream`] | Live sample accumulation, glitch and gap suppression |
//! | [`graph`] | Axis policy, graph composition, renderer seam, `ToneGraph` facade |
//! | [`convert`] | Hz ↔ semitone scale conversions |
//! | [`filter`] | Offline contour cleaning (outliers, slew glitches, gaps) |
//! | [`score`] | DTW tonal distance between two contours |
//!
//! # Error Handling
//!
//! Every operation on the sample path is total: unrecognized pinyin passes
//! through, an unmappable reference yields an empty series, glitches are
//! silently dropped, and degenerate data renders with no axis bounds.
//! [`Result<T>`] and the [`Error`] enum exist only for configuration
//! validation when a [`graph::GraphPolicy`] is put into force.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` — no unsafe Rust anywhere.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod contour;
pub mod convert;
pub mod filter;
pub mod graph;
pub mod pinyin;
pub mod reference;
pub mod score;
pub mod stream;
