// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word packing: the layout-engine boundary and the default spiral packer.
//!
//! The engine hands a [`LayoutJob`] (canvas size, padding, spiral shape, and
//! the measured words with pre-selected rotations and font sizes) to a
//! [`WordPacker`] and gets back the placements. The trait is the seam for
//! alternative packing engines; [`SpiralPacker`] is the default: it walks the
//! configured spiral outward from the chart center and accepts the first
//! position where the word's padded, rotated box stays inside the canvas and
//! overlaps nothing already placed. Words are processed in input order, and a
//! word whose spiral walk escapes the canvas is dropped.
//!
//! Packing runs synchronously inside view-model construction, so a recompute
//! can never observe a stale placement from an earlier layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Size, Vec2};
use peniko::Color;

use crate::config::SpiralShape;
use crate::spiral::SpiralWalk;
use crate::viewmodel::PlacedWord;

/// One word ready for placement: measured extents, font size, and rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredWord {
    /// The word text.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Resolved font size.
    pub font_size: f64,
    /// Rotation in degrees, applied about the word box center.
    pub rotation: f64,
    /// Unrotated word box extents.
    pub extent: Size,
}

/// A placement request: the canvas, the padding, and the measured words.
#[derive(Debug)]
pub struct LayoutJob<'a> {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Blank space reserved around each word box.
    pub padding: f64,
    /// Spiral family to search along.
    pub shape: SpiralShape,
    /// The words to place, in placement order.
    pub words: &'a [MeasuredWord],
}

/// The word packing boundary.
///
/// Implementations place as many words as fit and return them in input order;
/// unplaceable words are silently dropped.
pub trait WordPacker {
    /// Lays out the job's words, returning the placements relative to the
    /// chart center.
    fn layout(&mut self, job: &LayoutJob<'_>) -> Vec<PlacedWord>;
}

/// The default spiral-search packer.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpiralPacker;

impl WordPacker for SpiralPacker {
    fn layout(&mut self, job: &LayoutJob<'_>) -> Vec<PlacedWord> {
        let mut placed_boxes: Vec<OrientedBox> = Vec::with_capacity(job.words.len());
        let mut out = Vec::with_capacity(job.words.len());

        // Once a probe leaves this radius no later probe can re-enter the
        // canvas, so the word is unplaceable.
        let give_up_radius = 0.5 * (job.width * job.width + job.height * job.height).sqrt();

        for word in job.words {
            let mut walk = SpiralWalk::new(job.shape, job.width, job.height);
            let mut offset = Vec2::ZERO;
            loop {
                let candidate =
                    OrientedBox::new(offset, word.rotation, word.extent, job.padding);
                if candidate.within(job.width, job.height)
                    && !placed_boxes.iter().any(|b| b.overlaps(&candidate))
                {
                    placed_boxes.push(candidate);
                    out.push(PlacedWord {
                        text: word.text.clone(),
                        color: word.color,
                        size: word.font_size,
                        anchor: Point::new(offset.x, offset.y),
                        rotation: word.rotation,
                        extent: word.extent,
                    });
                    break;
                }

                offset = walk.step();
                if offset.hypot() > give_up_radius {
                    break;
                }
            }
        }

        out
    }
}

/// A rotated, padding-inflated word box used for collision tests.
#[derive(Clone, Copy, Debug)]
struct OrientedBox {
    center: Vec2,
    /// Local x axis (unit); the local y axis is its perpendicular.
    axis: Vec2,
    /// Half extents along the local axes, padding included.
    half: Vec2,
}

impl OrientedBox {
    fn new(center: Vec2, rotation_degrees: f64, extent: Size, padding: f64) -> Self {
        let rad = rotation_degrees.to_radians();
        Self {
            center,
            axis: Vec2::new(rad.cos(), rad.sin()),
            half: Vec2::new(
                0.5 * extent.width + padding.max(0.0),
                0.5 * extent.height + padding.max(0.0),
            ),
        }
    }

    fn axes(&self) -> [Vec2; 2] {
        [self.axis, Vec2::new(-self.axis.y, self.axis.x)]
    }

    /// Radius of this box projected onto a unit axis.
    fn projected_radius(&self, onto: Vec2) -> f64 {
        let [u, v] = self.axes();
        self.half.x * u.dot(onto).abs() + self.half.y * v.dot(onto).abs()
    }

    /// Separating-axis overlap test against another box.
    fn overlaps(&self, other: &Self) -> bool {
        let d = other.center - self.center;
        for axis in self.axes().into_iter().chain(other.axes()) {
            let distance = d.dot(axis).abs();
            if distance > self.projected_radius(axis) + other.projected_radius(axis) {
                return false;
            }
        }
        true
    }

    /// Whether the box (via its rotated bounding box) lies inside a canvas of
    /// the given size centered on the origin.
    fn within(&self, width: f64, height: f64) -> bool {
        let half_w = self.projected_radius(Vec2::new(1.0, 0.0));
        let half_h = self.projected_radius(Vec2::new(0.0, 1.0));
        self.center.x - half_w >= -0.5 * width
            && self.center.x + half_w <= 0.5 * width
            && self.center.y - half_h >= -0.5 * height
            && self.center.y + half_h <= 0.5 * height
    }
}
