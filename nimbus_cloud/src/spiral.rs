// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spiral search paths for word placement.
//!
//! The packer probes candidate positions along an expanding spiral centered on
//! the chart center. Two families are supported, selected by
//! [`SpiralShape`](crate::SpiralShape):
//! - **Archimedean**: `r = a * t`, stretched horizontally by the canvas aspect
//!   ratio so wide canvases produce oval clouds.
//! - **Rectangular**: a blocky spiral that walks growing axis-aligned arms,
//!   producing rectangular clouds.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Vec2;

use crate::config::SpiralShape;

/// Radial growth per probe step of the Archimedean spiral.
const ARCHIMEDEAN_STEP: f64 = 0.1;
/// Vertical arm step of the rectangular spiral; horizontal steps are
/// aspect-corrected from this.
const RECTANGULAR_STEP: f64 = 4.0;

/// A stateful walker producing successive spiral offsets from the center.
///
/// Offsets start at (or near) the origin and expand outward; the packer stops
/// probing once the offset leaves the canvas.
#[derive(Clone, Debug)]
pub struct SpiralWalk {
    kind: WalkKind,
}

#[derive(Clone, Debug)]
enum WalkKind {
    Archimedean {
        aspect: f64,
        t: f64,
    },
    Rectangular {
        dx: f64,
        dy: f64,
        pos: Vec2,
        step: u64,
    },
}

impl SpiralWalk {
    /// Creates a walker for the given shape over a `width` x `height` canvas.
    #[must_use]
    pub fn new(shape: SpiralShape, width: f64, height: f64) -> Self {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        let kind = match shape {
            SpiralShape::Archimedean => WalkKind::Archimedean { aspect, t: 0.0 },
            SpiralShape::Rectangular => WalkKind::Rectangular {
                dx: RECTANGULAR_STEP * aspect,
                dy: RECTANGULAR_STEP,
                pos: Vec2::ZERO,
                step: 0,
            },
        };
        Self { kind }
    }

    /// Returns the next candidate offset from the chart center.
    pub fn step(&mut self) -> Vec2 {
        match &mut self.kind {
            WalkKind::Archimedean { aspect, t } => {
                *t += 1.0;
                let s = ARCHIMEDEAN_STEP * *t;
                Vec2::new(*aspect * s * s.cos(), s * s.sin())
            }
            WalkKind::Rectangular { dx, dy, pos, step } => {
                // Direction sequence right/up/left/down with arms growing
                // every other turn, encoded arithmetically so no arm-length
                // bookkeeping is needed.
                let s = *step as f64;
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "non-negative for all step counts; truncation picks the turn"
                )]
                let turn = ((1.0 + 4.0 * s).sqrt() - 1.0) as u64 & 3;
                match turn {
                    0 => pos.x += *dx,
                    1 => pos.y += *dy,
                    2 => pos.x -= *dx,
                    _ => pos.y -= *dy,
                }
                *step += 1;
                *pos
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn archimedean_radius_grows() {
        let mut walk = SpiralWalk::new(SpiralShape::Archimedean, 100.0, 100.0);
        // Sample every quarter-turn-ish; the radius envelope must expand.
        let mut prev = 0.0;
        for _ in 0..8 {
            let mut max_r = 0.0_f64;
            for _ in 0..16 {
                max_r = max_r.max(walk.step().hypot());
            }
            assert!(max_r > prev, "spiral envelope must expand outward");
            prev = max_r;
        }
    }

    #[test]
    fn archimedean_respects_aspect_ratio() {
        let mut wide = SpiralWalk::new(SpiralShape::Archimedean, 200.0, 100.0);
        let offsets: Vec<Vec2> = (0..256).map(|_| wide.step()).collect();
        let max_x = offsets.iter().map(|v| v.x.abs()).fold(0.0, f64::max);
        let max_y = offsets.iter().map(|v| v.y.abs()).fold(0.0, f64::max);
        assert!(max_x > max_y, "a wide canvas should stretch the spiral in x");
    }

    #[test]
    fn rectangular_positions_stay_on_the_step_grid() {
        let mut walk = SpiralWalk::new(SpiralShape::Rectangular, 100.0, 100.0);
        for _ in 0..64 {
            let pos = walk.step();
            assert_eq!(pos.x % RECTANGULAR_STEP, 0.0);
            assert_eq!(pos.y % RECTANGULAR_STEP, 0.0);
        }
    }

    #[test]
    fn rectangular_walk_expands_and_revisits_no_start_neighborhood() {
        let mut walk = SpiralWalk::new(SpiralShape::Rectangular, 100.0, 100.0);
        let mut max_r = 0.0_f64;
        for _ in 0..512 {
            max_r = max_r.max(walk.step().hypot());
        }
        assert!(max_r > 10.0 * RECTANGULAR_STEP, "walk must leave the center");
    }
}
