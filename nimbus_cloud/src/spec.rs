// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative wordcloud spec.
//!
//! A [`WordcloudSpec`] is what a frontend hands to the engine: the word list,
//! a partial layout configuration, and the goal-style fields this chart type
//! inherits from its sibling goal gauge (base/target/actual, bands, ticks,
//! and accessor callbacks for band fills, tick formatting, and labels).
//!
//! Accessors are `Arc`ed callbacks so specs stay cheaply clonable; each one
//! receives a [`BandFillColorInput`] describing the value in context.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use core::fmt;

use peniko::Color;

use crate::config::PartialWordcloudConfig;
use crate::viewmodel::WordModel;

/// Goal-gauge subtypes inherited from the sibling goal chart type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GoalSubtype {
    /// The circular goal gauge.
    #[default]
    Goal,
    /// A horizontal bullet gauge.
    HorizontalBullet,
    /// A vertical bullet gauge.
    VerticalBullet,
}

/// Context handed to band/tick/label accessors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandFillColorInput {
    /// The value being resolved (a band edge, tick value, or `actual`).
    pub value: f64,
    /// Position of the value within its list, `0` for labels.
    pub index: usize,
    /// The spec's base value.
    pub base: f64,
    /// The spec's target value.
    pub target: f64,
    /// Highest value across bands, ticks, base, target and actual.
    pub highest_value: f64,
    /// Lowest value across bands, ticks, base, target and actual.
    pub lowest_value: f64,
    /// Number of bands above `base`.
    pub above_base_count: usize,
    /// Number of bands below `base`.
    pub below_base_count: usize,
}

/// Resolves a band edge value to its fill color.
pub type BandFillColorAccessor = Arc<dyn Fn(&BandFillColorInput) -> Color + Send + Sync>;

/// Formats a tick value into its label text.
pub type TickFormatterAccessor = Arc<dyn Fn(&BandFillColorInput) -> String + Send + Sync>;

/// Computes a chart label from the value context.
pub type LabelAccessor = Arc<dyn Fn(&BandFillColorInput) -> String + Send + Sync>;

/// A chart label: either fixed text or computed from the value context.
#[derive(Clone)]
pub enum Label {
    /// Fixed label text.
    Fixed(String),
    /// Label computed by an accessor.
    Computed(LabelAccessor),
}

impl Label {
    /// Resolves this label against the given context.
    #[must_use]
    pub fn resolve(&self, input: &BandFillColorInput) -> String {
        match self {
            Self::Fixed(text) => text.clone(),
            Self::Computed(accessor) => accessor(input),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            Self::Computed(_) => f.debug_tuple("Computed").field(&"..").finish(),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Fixed(String::from(value))
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Fixed(value)
    }
}

/// A declarative wordcloud specification.
#[derive(Clone)]
pub struct WordcloudSpec {
    /// Goal subtype carried through to the view-model.
    pub subtype: GoalSubtype,
    /// Base value bands and labels are measured against.
    pub base: f64,
    /// Target value.
    pub target: f64,
    /// Actual (current) value.
    pub actual: f64,
    /// Band edge values.
    pub bands: Vec<f64>,
    /// Tick values.
    pub ticks: Vec<f64>,
    /// Resolves each band edge to a fill color.
    pub band_fill_color: BandFillColorAccessor,
    /// Formats each tick value.
    pub tick_value_formatter: TickFormatterAccessor,
    /// Major outer label.
    pub label_major: Label,
    /// Minor outer label.
    pub label_minor: Label,
    /// Major central label.
    pub central_major: Label,
    /// Minor central label.
    pub central_minor: Label,
    /// The words to lay out.
    pub words: Vec<WordModel>,
    /// Layout configuration overrides.
    pub config: PartialWordcloudConfig,
}

impl Default for WordcloudSpec {
    fn default() -> Self {
        Self {
            subtype: GoalSubtype::Goal,
            base: 0.0,
            target: 100.0,
            actual: 50.0,
            bands: vec![50.0, 75.0, 100.0],
            ticks: vec![0.0, 25.0, 50.0, 75.0, 100.0],
            band_fill_color: Arc::new(default_band_fill_color),
            tick_value_formatter: Arc::new(|input| input.value.to_string()),
            label_major: Label::Computed(Arc::new(|input| input.base.to_string())),
            label_minor: Label::from("unit"),
            central_major: Label::Computed(Arc::new(|input| input.base.to_string())),
            central_minor: Label::Computed(Arc::new(|input| input.target.to_string())),
            words: Vec::new(),
            config: PartialWordcloudConfig::default(),
        }
    }
}

impl fmt::Debug for WordcloudSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordcloudSpec")
            .field("subtype", &self.subtype)
            .field("base", &self.base)
            .field("target", &self.target)
            .field("actual", &self.actual)
            .field("bands", &self.bands)
            .field("ticks", &self.ticks)
            .field("label_major", &self.label_major)
            .field("label_minor", &self.label_minor)
            .field("central_major", &self.central_major)
            .field("central_minor", &self.central_minor)
            .field("words", &self.words)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WordcloudSpec {
    /// Sets the word list.
    pub fn with_words(mut self, words: Vec<WordModel>) -> Self {
        self.words = words;
        self
    }

    /// Sets the layout configuration overrides.
    pub fn with_config(mut self, config: PartialWordcloudConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the base value.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Sets the target value.
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Sets the actual value.
    pub fn with_actual(mut self, actual: f64) -> Self {
        self.actual = actual;
        self
    }

    /// Sets the band edge values.
    pub fn with_bands(mut self, bands: Vec<f64>) -> Self {
        self.bands = bands;
        self
    }

    /// Sets the tick values.
    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the band fill color accessor.
    pub fn with_band_fill_color(mut self, accessor: BandFillColorAccessor) -> Self {
        self.band_fill_color = accessor;
        self
    }

    /// Sets the tick value formatter.
    pub fn with_tick_value_formatter(mut self, accessor: TickFormatterAccessor) -> Self {
        self.tick_value_formatter = accessor;
        self
    }

    /// Sets the major outer label.
    pub fn with_label_major(mut self, label: impl Into<Label>) -> Self {
        self.label_major = label.into();
        self
    }

    /// Sets the minor outer label.
    pub fn with_label_minor(mut self, label: impl Into<Label>) -> Self {
        self.label_minor = label.into();
        self
    }

    /// Sets the major central label.
    pub fn with_central_major(mut self, label: impl Into<Label>) -> Self {
        self.central_major = label.into();
        self
    }

    /// Sets the minor central label.
    pub fn with_central_minor(mut self, label: impl Into<Label>) -> Self {
        self.central_minor = label.into();
        self
    }
}

/// The default band fill: a green ramp above `base`, a red ramp below.
///
/// The ramp level is proportional to how far the value sits between `base`
/// and the highest (resp. lowest) value in play.
fn default_band_fill_color(input: &BandFillColorInput) -> Color {
    let above_base = input.value > input.base;
    let denom = if above_base {
        input.base.max(input.highest_value) - input.base
    } else {
        input.base.min(input.lowest_value) - input.base
    };
    let ratio = if denom == 0.0 {
        0.0
    } else {
        (input.value - input.base) / denom
    };
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to [0, 255] before the cast"
    )]
    let level = (255.0 * ratio.clamp(0.0, 1.0)).round() as u8;
    if above_base {
        Color::from_rgba8(0, level, 0, 255)
    } else {
        Color::from_rgba8(level, 0, 0, 255)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn input(value: f64) -> BandFillColorInput {
        BandFillColorInput {
            value,
            index: 0,
            base: 0.0,
            target: 100.0,
            highest_value: 100.0,
            lowest_value: -100.0,
            above_base_count: 3,
            below_base_count: 0,
        }
    }

    #[test]
    fn default_band_fill_ramps_green_above_base() {
        let full = default_band_fill_color(&input(100.0));
        assert_eq!(full, Color::from_rgba8(0, 255, 0, 255));

        let half = default_band_fill_color(&input(50.0));
        assert_eq!(half, Color::from_rgba8(0, 128, 0, 255));
    }

    #[test]
    fn default_band_fill_ramps_red_below_base() {
        let low = default_band_fill_color(&input(-100.0));
        assert_eq!(low, Color::from_rgba8(255, 0, 0, 255));
    }

    #[test]
    fn degenerate_band_range_resolves_to_black() {
        let mut i = input(0.0);
        i.highest_value = 0.0;
        i.lowest_value = 0.0;
        assert_eq!(
            default_band_fill_color(&i),
            Color::from_rgba8(0, 0, 0, 255)
        );
    }

    #[test]
    fn fixed_and_computed_labels_resolve() {
        let fixed = Label::from("Revenue 2020 YTD");
        assert_eq!(fixed.resolve(&input(0.0)), "Revenue 2020 YTD");

        let computed = Label::Computed(Arc::new(|i| i.target.to_string()));
        assert_eq!(computed.resolve(&input(0.0)), "100");
    }

    #[test]
    fn default_tick_formatter_prints_the_value() {
        let spec = WordcloudSpec::default();
        assert_eq!((spec.tick_value_formatter)(&input(25.0)), "25");
    }
}
