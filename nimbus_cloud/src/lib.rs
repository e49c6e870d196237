// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wordcloud chart building blocks.
//!
//! This crate is the layout engine for a wordcloud/goal-gauge hybrid chart:
//! - **Specs** declare words (text, weight, color) and layout parameters
//!   (angles, font bounds, spiral shape, padding) plus goal-style band/tick
//!   accessors.
//! - **View-models** are the fully resolved, render-ready output: positioned,
//!   rotated, sized word boxes plus band/tick metadata and a pick (hit-test)
//!   function. A view-model is replaced wholesale on every recomputation,
//!   never mutated in place.
//! - **Seams** keep collaborators external: text measurement
//!   ([`TextMeasurer`]), word packing ([`WordPacker`]), and drawing
//!   ([`Canvas2d`]) are traits, so frontends and render targets stay out of
//!   the engine.
//!
//! Text shaping is out of scope; word extents come from the measurer seam.

#![no_std]

extern crate alloc;

mod config;
#[cfg(not(feature = "std"))]
mod float;
mod measure;
mod packer;
mod pick;
mod render;
mod rotate;
mod spec;
mod spiral;
mod viewmodel;

pub use config::{PartialWordcloudConfig, SpiralShape, WordcloudConfig};
pub use measure::{
    FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, TextFont, TextMeasurer,
};
pub use packer::{LayoutJob, MeasuredWord, SpiralPacker, WordPacker};
pub use render::{Canvas2d, render_wordcloud};
pub use rotate::select_rotation;
pub use spec::{
    BandFillColorAccessor, BandFillColorInput, GoalSubtype, Label, LabelAccessor,
    TickFormatterAccessor, WordcloudSpec,
};
pub use spiral::SpiralWalk;
pub use viewmodel::{
    BandViewModel, BulletViewModel, PlacedWord, ShapeViewModel, TickViewModel, WordModel,
    shape_view_model,
};
