// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wordcloud demos for `nimbus_cloud`.
mod svg;

use std::collections::BTreeMap;

use nimbus_cloud::{
    HeuristicTextMeasurer, PartialWordcloudConfig, SpiralPacker, SpiralShape, WordModel,
    WordcloudSpec, render_wordcloud, shape_view_model,
};
use peniko::Color;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 400.0;

const TEXT: &str = "Webtwo ipsum sifteo twones chegg lijit meevee spotify, fleck bliki \
twones zooomr scribd dogster youtube sclipo. Yoono heekya knewton heroku, dogster zinch \
knewton convore fleck zooomr yoono edmodo, sclipo plickers zoho convore unigo. Zinch \
spotify zoho meevee zinch lijit wakoopa chegg zinch sclipo. Insala sclipo airbnb fleck \
plickers zoho zooomr twones meevee zinch. Heekya lijit twones fleck zooomr dogster";

const PALETTE: [Color; 4] = [
    Color::from_rgba8(31, 119, 180, 255),
    Color::from_rgba8(255, 127, 14, 255),
    Color::from_rgba8(44, 160, 44, 255),
    Color::from_rgba8(214, 39, 40, 255),
];

/// Lowercases the prose, strips punctuation, and weights each distinct word
/// by its occurrence count.
fn words_from_text(text: &str) -> Vec<WordModel> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in text.split_whitespace() {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if !word.is_empty() {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, (text, count))| WordModel {
            text,
            weight: count as f64,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

fn main() {
    let config = PartialWordcloudConfig {
        min_font_size: Some(12.0),
        max_font_size: Some(60.0),
        exponent: Some(3.0),
        spiral: Some(SpiralShape::Archimedean),
        ..PartialWordcloudConfig::default()
    };
    let spec = WordcloudSpec::default()
        .with_words(words_from_text(TEXT))
        .with_config(config)
        .with_label_major("Webtwo word frequencies");

    let mut packer = SpiralPacker;
    let mut rng = SmallRng::seed_from_u64(7);
    let vm = shape_view_model(
        &spec,
        WIDTH,
        HEIGHT,
        &HeuristicTextMeasurer,
        &mut packer,
        &mut rng,
    );

    let mut canvas = svg::SvgCanvas::new(WIDTH, HEIGHT + 30.0);
    canvas.fill_rect(0.0, 0.0, WIDTH, HEIGHT, Color::from_rgba8(250, 250, 250, 255));
    render_wordcloud(&mut canvas, 1.0, &vm);

    // A strip of band swatches under the cloud, one per resolved band.
    let n = vm.bullet.bands.len().max(1) as f64;
    for (i, band) in vm.bullet.bands.iter().enumerate() {
        let w = WIDTH / n;
        canvas.fill_rect(i as f64 * w, HEIGHT + 8.0, w - 4.0, 14.0, band.fill_color);
    }

    let placed = vm.bullet.placed.len();
    let total = vm.bullet.words.len();
    std::fs::write("nimbus_cloud_demo.svg", canvas.to_svg_string())
        .expect("write nimbus_cloud_demo.svg");
    println!("wrote nimbus_cloud_demo.svg ({placed}/{total} words placed)");
}
