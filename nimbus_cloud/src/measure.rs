// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for word packing.
//!
//! Spiral packing needs the unrotated bounding box of every word before any
//! placement work can start. Shaping and glyph layout stay downstream, so the
//! engine depends on a tiny measurement interface instead: callers can plug in
//! a real text measurement backend (a shaping engine, or web canvas metrics),
//! or use [`HeuristicTextMeasurer`].

extern crate alloc;

use alloc::sync::Arc;

use kurbo::Size;

/// A minimal text measurement interface used by the word packer.
///
/// `text` is treated as a single line; wordcloud entries are single tokens by
/// construction, so no line splitting is performed.
pub trait TextMeasurer {
    /// Returns the unrotated extents of `text` at `font_size`, in the same
    /// coordinate system as the placement output.
    fn measure(&self, text: &str, font: &TextFont, font_size: f64) -> Size;
}

/// Font inputs relevant to word measurement and drawing.
///
/// This is intentionally minimal: just enough for a packer to reserve space
/// and for a render target to reconstruct the CSS-style font declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextFont {
    /// The preferred font family.
    pub family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub style: FontStyle,
}

impl Default for TextFont {
    fn default() -> Self {
        Self {
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Impact"`, `"Arial Narrow"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }

    /// Creates a named family from a string.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(Arc::from(name))
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (`300`).
    pub const LIGHT: Self = Self(300);
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

impl FontStyle {
    /// Returns the CSS keyword for this style.
    #[must_use]
    pub fn as_css_style(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a height of 1em, widened a
/// little for weights above normal since wordclouds lean on heavy faces and a
/// flat heuristic underestimates them.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &TextFont, font_size: f64) -> Size {
        let weight_factor = if font.weight > FontWeight::NORMAL {
            1.0 + 0.05 * f64::from(font.weight.0.saturating_sub(400)) / 100.0
        } else {
            1.0
        };
        let width = 0.6 * font_size * weight_factor * text.chars().count() as f64;
        Size::new(width, font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heavier_weights_measure_wider() {
        let measurer = HeuristicTextMeasurer;
        let normal = TextFont::default();
        let bold = TextFont {
            weight: FontWeight::BOLD,
            ..TextFont::default()
        };

        let w_normal = measurer.measure("cloud", &normal, 20.0).width;
        let w_bold = measurer.measure("cloud", &bold, 20.0).width;
        assert!(w_bold > w_normal, "bold should reserve more width");
    }

    #[test]
    fn height_tracks_font_size() {
        let measurer = HeuristicTextMeasurer;
        let size = measurer.measure("x", &TextFont::default(), 42.0);
        assert_eq!(size.height, 42.0);
    }
}
