// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wordcloud layout configuration and default merging.
//!
//! A [`WordcloudConfig`] is constructed once per spec declaration by merging a
//! user-supplied [`PartialWordcloudConfig`] over the documented defaults. No
//! range validation is performed beyond type shape: out-of-range combinations
//! (e.g. `min_font_size > max_font_size`) are not rejected and produce
//! visually wrong, not crash-inducing, layouts.

use crate::measure::{FontFamily, FontStyle, FontWeight, TextFont};

/// The spiral family the packer walks when searching for a free position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpiralShape {
    /// An aspect-corrected Archimedean spiral (`r = a * t`), giving oval clouds.
    #[default]
    Archimedean,
    /// A rectangular spiral with growing arms, giving blocky clouds.
    Rectangular,
}

/// Complete wordcloud layout configuration.
///
/// Angles are in degrees; font sizes and padding are in the same coordinate
/// units as the output placements (typically pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct WordcloudConfig {
    /// First selectable rotation angle.
    pub start_angle: f64,
    /// Rotation angle range end (exclusive; see [`crate::select_rotation`]).
    pub end_angle: f64,
    /// Number of evenly spaced selectable rotation angles.
    pub angle_count: usize,
    /// Blank space reserved around each placed word box.
    pub padding: f64,
    /// Smallest font size assigned to the lowest-weight word.
    pub min_font_size: f64,
    /// Largest font size assigned to the highest-weight word.
    pub max_font_size: f64,
    /// Font weight applied to every word.
    pub font_weight: FontWeight,
    /// Font family applied to every word.
    pub font_family: FontFamily,
    /// Font style applied to every word.
    pub font_style: FontStyle,
    /// Spiral family used for placement search.
    pub spiral: SpiralShape,
    /// Exponent applied to normalized word weights before font-size mapping.
    pub exponent: f64,
}

impl Default for WordcloudConfig {
    fn default() -> Self {
        Self {
            start_angle: -20.0,
            end_angle: 20.0,
            angle_count: 5,
            padding: 2.0,
            min_font_size: 10.0,
            max_font_size: 50.0,
            font_weight: FontWeight::LIGHT,
            font_family: FontFamily::named("Impact"),
            font_style: FontStyle::Italic,
            spiral: SpiralShape::Archimedean,
            exponent: 3.0,
        }
    }
}

impl WordcloudConfig {
    /// Returns the font shared by every word in the cloud.
    #[must_use]
    pub fn font(&self) -> TextFont {
        TextFont {
            family: self.font_family.clone(),
            weight: self.font_weight,
            style: self.font_style,
        }
    }
}

/// A partially specified configuration; unset fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialWordcloudConfig {
    /// Overrides [`WordcloudConfig::start_angle`].
    pub start_angle: Option<f64>,
    /// Overrides [`WordcloudConfig::end_angle`].
    pub end_angle: Option<f64>,
    /// Overrides [`WordcloudConfig::angle_count`].
    pub angle_count: Option<usize>,
    /// Overrides [`WordcloudConfig::padding`].
    pub padding: Option<f64>,
    /// Overrides [`WordcloudConfig::min_font_size`].
    pub min_font_size: Option<f64>,
    /// Overrides [`WordcloudConfig::max_font_size`].
    pub max_font_size: Option<f64>,
    /// Overrides [`WordcloudConfig::font_weight`].
    pub font_weight: Option<FontWeight>,
    /// Overrides [`WordcloudConfig::font_family`].
    pub font_family: Option<FontFamily>,
    /// Overrides [`WordcloudConfig::font_style`].
    pub font_style: Option<FontStyle>,
    /// Overrides [`WordcloudConfig::spiral`].
    pub spiral: Option<SpiralShape>,
    /// Overrides [`WordcloudConfig::exponent`].
    pub exponent: Option<f64>,
}

impl PartialWordcloudConfig {
    /// Produces a complete configuration, filling unset fields from the
    /// default table.
    #[must_use]
    pub fn resolve(&self) -> WordcloudConfig {
        let defaults = WordcloudConfig::default();
        WordcloudConfig {
            start_angle: self.start_angle.unwrap_or(defaults.start_angle),
            end_angle: self.end_angle.unwrap_or(defaults.end_angle),
            angle_count: self.angle_count.unwrap_or(defaults.angle_count),
            padding: self.padding.unwrap_or(defaults.padding),
            min_font_size: self.min_font_size.unwrap_or(defaults.min_font_size),
            max_font_size: self.max_font_size.unwrap_or(defaults.max_font_size),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
            font_family: self.font_family.clone().unwrap_or(defaults.font_family),
            font_style: self.font_style.unwrap_or(defaults.font_style),
            spiral: self.spiral.unwrap_or(defaults.spiral),
            exponent: self.exponent.unwrap_or(defaults.exponent),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_partial_resolves_to_defaults() {
        let merged = PartialWordcloudConfig::default().resolve();
        assert_eq!(merged, WordcloudConfig::default());
    }

    #[test]
    fn overrides_win_and_unset_fields_keep_defaults() {
        let partial = PartialWordcloudConfig {
            start_angle: Some(-45.0),
            end_angle: Some(45.0),
            angle_count: Some(2),
            font_family: Some(FontFamily::named("Arial Narrow")),
            font_style: Some(FontStyle::Normal),
            max_font_size: Some(90.0),
            spiral: Some(SpiralShape::Rectangular),
            ..PartialWordcloudConfig::default()
        };

        let merged = partial.resolve();
        let defaults = WordcloudConfig::default();

        assert_eq!(merged.start_angle, -45.0);
        assert_eq!(merged.end_angle, 45.0);
        assert_eq!(merged.angle_count, 2);
        assert_eq!(merged.font_family, FontFamily::named("Arial Narrow"));
        assert_eq!(merged.font_style, FontStyle::Normal);
        assert_eq!(merged.max_font_size, 90.0);
        assert_eq!(merged.spiral, SpiralShape::Rectangular);

        // Unset fields come from the default table.
        assert_eq!(merged.padding, defaults.padding);
        assert_eq!(merged.min_font_size, defaults.min_font_size);
        assert_eq!(merged.font_weight, defaults.font_weight);
        assert_eq!(merged.exponent, defaults.exponent);
    }

    #[test]
    fn inverted_font_bounds_are_not_rejected() {
        // The merger fills fields, it does not validate ranges.
        let partial = PartialWordcloudConfig {
            min_font_size: Some(60.0),
            max_font_size: Some(10.0),
            ..PartialWordcloudConfig::default()
        };
        let merged = partial.resolve();
        assert!(merged.min_font_size > merged.max_font_size);
    }
}
