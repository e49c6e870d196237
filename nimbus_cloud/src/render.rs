// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing a resolved view-model onto an abstract 2D canvas.
//!
//! The engine does not own a render target. Frontends implement [`Canvas2d`]
//! for whatever they draw on (an HTML canvas binding, an SVG writer, a GPU
//! scene) and [`render_wordcloud`] replays the view-model's placed words onto
//! it as fill-text commands with full transforms. Rendering reads the
//! view-model and nothing else, so drawing twice produces identical output.

#[cfg(test)]
extern crate alloc;

use kurbo::Affine;
use peniko::Color;

use crate::measure::TextFont;
use crate::viewmodel::ShapeViewModel;

/// Minimal text-drawing surface the renderer targets.
pub trait Canvas2d {
    /// Fills `text` centered on the transform's origin.
    ///
    /// `transform` maps word-local coordinates (origin at the word box
    /// center, x along the reading direction) to device pixels.
    fn fill_text(&mut self, text: &str, font: &TextFont, font_size: f64, fill: Color, transform: Affine);
}

/// Draws every placed word of the view-model.
///
/// `pixel_ratio` is the device-pixel scale applied outermost, so the same
/// view-model renders crisply on any DPI without relayout.
pub fn render_wordcloud(ctx: &mut dyn Canvas2d, pixel_ratio: f64, vm: &ShapeViewModel) {
    let font = vm.config.font();
    for word in &vm.bullet.placed {
        let transform = Affine::scale(pixel_ratio)
            * Affine::translate(vm.chart_center.to_vec2() + word.anchor.to_vec2())
            * Affine::rotate(word.rotation.to_radians());
        ctx.fill_text(&word.text, &font, word.size, word.color, transform);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use super::*;
    use crate::config::WordcloudConfig;
    use crate::viewmodel::{PlacedWord, ShapeViewModel};

    #[derive(Debug, PartialEq)]
    struct FillText {
        text: String,
        font_size: f64,
        fill: Color,
        transform: Affine,
    }

    #[derive(Default)]
    struct RecordingCanvas {
        commands: Vec<FillText>,
    }

    impl Canvas2d for RecordingCanvas {
        fn fill_text(
            &mut self,
            text: &str,
            _font: &TextFont,
            font_size: f64,
            fill: Color,
            transform: Affine,
        ) {
            self.commands.push(FillText {
                text: text.to_string(),
                font_size,
                fill,
                transform,
            });
        }
    }

    fn vm_with_words(placed: Vec<PlacedWord>) -> ShapeViewModel {
        let mut vm = ShapeViewModel::null_view_model(
            WordcloudConfig::default(),
            Point::new(200.0, 150.0),
        );
        vm.bullet.placed = placed;
        vm
    }

    fn word(text: &str, x: f64, y: f64, rotation: f64) -> PlacedWord {
        PlacedWord {
            text: text.to_string(),
            color: Color::from_rgba8(10, 20, 30, 255),
            size: 24.0,
            anchor: Point::new(x, y),
            rotation,
            extent: Size::new(60.0, 24.0),
        }
    }

    #[test]
    fn empty_view_model_draws_nothing() {
        let vm = vm_with_words(vec![]);
        let mut canvas = RecordingCanvas::default();
        render_wordcloud(&mut canvas, 1.0, &vm);
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn words_are_drawn_about_the_chart_center() {
        let vm = vm_with_words(vec![word("hello", 30.0, -10.0, 0.0)]);
        let mut canvas = RecordingCanvas::default();
        render_wordcloud(&mut canvas, 1.0, &vm);

        assert_eq!(canvas.commands.len(), 1);
        let cmd = &canvas.commands[0];
        assert_eq!(cmd.text, "hello");
        assert_eq!(cmd.font_size, 24.0);
        // Word-local origin lands at chart center + anchor.
        let origin = cmd.transform * Point::ZERO;
        assert_eq!(origin, Point::new(230.0, 140.0));
    }

    #[test]
    fn pixel_ratio_scales_device_coordinates() {
        let vm = vm_with_words(vec![word("hi", 30.0, -10.0, 0.0)]);
        let mut canvas = RecordingCanvas::default();
        render_wordcloud(&mut canvas, 2.0, &vm);

        let origin = canvas.commands[0].transform * Point::ZERO;
        assert_eq!(origin, Point::new(460.0, 280.0));
    }

    #[test]
    fn rotation_turns_the_word_baseline() {
        let vm = vm_with_words(vec![word("tilt", 0.0, 0.0, 90.0)]);
        let mut canvas = RecordingCanvas::default();
        render_wordcloud(&mut canvas, 1.0, &vm);

        // A unit step along the word's x axis moves straight down the canvas.
        let t = canvas.commands[0].transform;
        let step = (t * Point::new(1.0, 0.0)) - (t * Point::ZERO);
        assert!((step.x - 0.0).abs() < 1e-12);
        assert!((step.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rendering_is_a_pure_replay() {
        let vm = vm_with_words(vec![
            word("one", 0.0, 0.0, 0.0),
            word("two", 40.0, 12.0, -20.0),
        ]);
        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        render_wordcloud(&mut first, 1.5, &vm);
        render_wordcloud(&mut second, 1.5, &vm);
        assert_eq!(first.commands, second.commands);
    }
}
