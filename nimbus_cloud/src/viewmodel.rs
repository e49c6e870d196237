// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-model types and construction.
//!
//! The view-model is the fully resolved, render-ready output of the engine:
//! every accessor has been applied, every weight mapped to a font size, and
//! every surviving word given a position, rotation, and size by the packer.
//! A [`ShapeViewModel`] is recomputed from scratch on every relevant state
//! change (new data, new dimensions) and replaced wholesale, never mutated.
//!
//! Uninitialized charts (no data yet, zero dimensions) are represented by the
//! null view-model, so downstream code treats "uninitialized" and
//! "initialized but empty" uniformly, without null checks.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Size};
use peniko::Color;
use rand::Rng;

use crate::config::WordcloudConfig;
use crate::measure::TextMeasurer;
use crate::packer::{LayoutJob, MeasuredWord, WordPacker};
use crate::pick;
use crate::rotate::select_rotation;
use crate::spec::{BandFillColorInput, GoalSubtype, WordcloudSpec};

/// One input word: text, a weight driving font size, and a fill color.
#[derive(Clone, Debug, PartialEq)]
pub struct WordModel {
    /// The word text.
    pub text: String,
    /// Relative importance; mapped to a font size during view-model
    /// construction.
    pub weight: f64,
    /// Fill color.
    pub color: Color,
}

/// A resolved goal band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandViewModel {
    /// Band edge value.
    pub value: f64,
    /// Resolved fill color.
    pub fill_color: Color,
}

/// A resolved tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickViewModel {
    /// Tick value.
    pub value: f64,
    /// Formatted tick text.
    pub text: String,
}

/// One placed word: position, rotation, and size resolved by the packer.
///
/// `anchor` is the center of the word box, relative to the chart center (the
/// coordinate system pick queries use as well).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    /// The word text.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Resolved font size.
    pub size: f64,
    /// Word box center, relative to the chart center.
    pub anchor: Point,
    /// Rotation in degrees, applied about the anchor.
    pub rotation: f64,
    /// Unrotated extents of the word box.
    pub extent: Size,
}

/// Resolved goal metadata plus the word placements.
#[derive(Clone, Debug, PartialEq)]
pub struct BulletViewModel {
    /// Goal subtype carried from the spec.
    pub subtype: GoalSubtype,
    /// Base value.
    pub base: f64,
    /// Target value.
    pub target: f64,
    /// Actual value.
    pub actual: f64,
    /// Resolved bands.
    pub bands: Vec<BandViewModel>,
    /// Resolved ticks.
    pub ticks: Vec<TickViewModel>,
    /// Resolved major outer label.
    pub label_major: String,
    /// Resolved minor outer label.
    pub label_minor: String,
    /// Resolved major central label.
    pub central_major: String,
    /// Resolved minor central label.
    pub central_minor: String,
    /// Highest value across bands, ticks, base, target and actual.
    pub highest_value: f64,
    /// Lowest value across bands, ticks, base, target and actual.
    pub lowest_value: f64,
    /// Number of bands above base.
    pub above_base_count: usize,
    /// Number of bands below base.
    pub below_base_count: usize,
    /// The input words, as declared.
    pub words: Vec<WordModel>,
    /// The placed words; words the packer could not fit are absent.
    pub placed: Vec<PlacedWord>,
}

impl BulletViewModel {
    /// The empty bullet view-model used for uninitialized charts.
    fn null_view_model() -> Self {
        Self {
            subtype: GoalSubtype::Goal,
            base: 0.0,
            target: 100.0,
            actual: 50.0,
            bands: Vec::new(),
            ticks: Vec::new(),
            label_major: String::new(),
            label_minor: String::new(),
            central_major: String::new(),
            central_minor: String::new(),
            highest_value: 100.0,
            lowest_value: 0.0,
            above_base_count: 0,
            below_base_count: 0,
            words: Vec::new(),
            placed: Vec::new(),
        }
    }
}

/// The computed shape of the chart: merged config, resolved bullet
/// view-model, and the chart center in container coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeViewModel {
    /// The merged layout configuration.
    pub config: WordcloudConfig,
    /// Resolved goal metadata and word placements.
    pub bullet: BulletViewModel,
    /// Chart center in container coordinates.
    pub chart_center: Point,
}

impl Default for ShapeViewModel {
    fn default() -> Self {
        Self::null_view_model(WordcloudConfig::default(), Point::ZERO)
    }
}

impl ShapeViewModel {
    /// The stable empty view-model: zero words, bands, and ticks, and a pick
    /// function that matches nothing.
    #[must_use]
    pub fn null_view_model(config: WordcloudConfig, chart_center: Point) -> Self {
        Self {
            config,
            bullet: BulletViewModel::null_view_model(),
            chart_center,
        }
    }

    /// Hit-tests a point against the placed words.
    ///
    /// `at` is relative to [`Self::chart_center`]. Matches are returned in
    /// placement order; the result is empty when nothing is under the point
    /// or the chart is uninitialized. Pure over the view-model.
    #[must_use]
    pub fn pick_quads(&self, at: Point) -> Vec<&PlacedWord> {
        pick::hit_test(&self.bullet.placed, at)
    }
}

/// Computes the view-model for a spec at the given container dimensions.
///
/// With zero (or negative) dimensions this short-circuits to the null
/// view-model without invoking the packer. Otherwise the packer is run
/// synchronously, so the returned model is always consistent with the inputs
/// that produced it.
pub fn shape_view_model(
    spec: &WordcloudSpec,
    width: f64,
    height: f64,
    measurer: &dyn TextMeasurer,
    packer: &mut dyn WordPacker,
    rng: &mut impl Rng,
) -> ShapeViewModel {
    let config = spec.config.resolve();
    if width <= 0.0 || height <= 0.0 {
        return ShapeViewModel::null_view_model(config, Point::ZERO);
    }
    let chart_center = Point::new(0.5 * width, 0.5 * height);

    // Value envelope feeding every accessor call.
    let mut highest_value = spec.base.max(spec.target).max(spec.actual);
    let mut lowest_value = spec.base.min(spec.target).min(spec.actual);
    for &v in spec.bands.iter().chain(spec.ticks.iter()) {
        highest_value = highest_value.max(v);
        lowest_value = lowest_value.min(v);
    }
    let above_base_count = spec.bands.iter().filter(|&&b| b > spec.base).count();
    let below_base_count = spec.bands.iter().filter(|&&b| b < spec.base).count();

    let input_at = |value: f64, index: usize| BandFillColorInput {
        value,
        index,
        base: spec.base,
        target: spec.target,
        highest_value,
        lowest_value,
        above_base_count,
        below_base_count,
    };

    let bands = spec
        .bands
        .iter()
        .enumerate()
        .map(|(index, &value)| BandViewModel {
            value,
            fill_color: (spec.band_fill_color)(&input_at(value, index)),
        })
        .collect();
    let ticks = spec
        .ticks
        .iter()
        .enumerate()
        .map(|(index, &value)| TickViewModel {
            value,
            text: (spec.tick_value_formatter)(&input_at(value, index)),
        })
        .collect();

    let label_input = input_at(spec.actual, 0);
    let font = config.font();

    let measured: Vec<MeasuredWord> = spec
        .words
        .iter()
        .map(|word| {
            let size = font_size_for_weight(word.weight, &config, &spec.words);
            MeasuredWord {
                text: word.text.clone(),
                color: word.color,
                font_size: size,
                rotation: select_rotation(
                    config.start_angle,
                    config.end_angle,
                    config.angle_count,
                    rng,
                ),
                extent: measurer.measure(&word.text, &font, size),
            }
        })
        .collect();

    let job = LayoutJob {
        width,
        height,
        padding: config.padding,
        shape: config.spiral,
        words: &measured,
    };
    let placed = packer.layout(&job);

    let bullet = BulletViewModel {
        subtype: spec.subtype,
        base: spec.base,
        target: spec.target,
        actual: spec.actual,
        bands,
        ticks,
        label_major: spec.label_major.resolve(&label_input),
        label_minor: spec.label_minor.resolve(&label_input),
        central_major: spec.central_major.resolve(&label_input),
        central_minor: spec.central_minor.resolve(&label_input),
        highest_value,
        lowest_value,
        above_base_count,
        below_base_count,
        words: spec.words.clone(),
        placed,
    };

    ShapeViewModel {
        config,
        bullet,
        chart_center,
    }
}

/// Maps a word weight into `[min_font_size, max_font_size]`.
///
/// Weights are normalized over the word list and raised to the configured
/// exponent, so large exponents emphasize the heaviest words. A degenerate
/// weight range (single word, or all weights equal) maps to the maximum.
fn font_size_for_weight(weight: f64, config: &WordcloudConfig, words: &[WordModel]) -> f64 {
    let mut min_w = f64::INFINITY;
    let mut max_w = f64::NEG_INFINITY;
    for w in words {
        min_w = min_w.min(w.weight);
        max_w = max_w.max(w.weight);
    }
    let range = max_w - min_w;
    let t = if range > 0.0 {
        ((weight - min_w) / range).powf(config.exponent)
    } else {
        1.0
    };
    config.min_font_size + (config.max_font_size - config.min_font_size) * t
}
