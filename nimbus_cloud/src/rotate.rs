// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-word rotation selection.
//!
//! Each word gets one of `angle_count` evenly spaced angles from
//! `[start_angle, end_angle)`, chosen uniformly at random. The generator is a
//! caller-provided [`Rng`] so layouts are reproducible under a seeded
//! generator.

use rand::Rng;

/// Selects a rotation angle (degrees) for one word.
///
/// With `count >= 2` the result is `start + i * (end - start) / count` for a
/// uniformly random `i in 0..count`, i.e. one of `count` evenly spaced angles
/// in `[start, end)`. With `count <= 1` the result is `start`, with no
/// division performed.
pub fn select_rotation(start: f64, end: f64, count: usize, rng: &mut impl Rng) -> f64 {
    if count <= 1 {
        return start;
    }
    let step = (end - start) / count as f64;
    let index = rng.random_range(0..count);
    start + index as f64 * step
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn count_one_is_deterministic() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(select_rotation(-20.0, 20.0, 1, &mut rng), -20.0);
        }
    }

    #[test]
    fn count_zero_falls_back_to_start_angle() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(select_rotation(15.0, 90.0, 0, &mut rng), 15.0);
    }

    #[test]
    fn selected_angles_lie_on_the_grid_and_exclude_the_end() {
        let (start, end, count) = (-45.0, 45.0, 6);
        let step = (end - start) / count as f64;
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..500 {
            let angle = select_rotation(start, end, count, &mut rng);
            assert!(angle >= start, "angle below range start");
            assert!(angle < end, "end angle must be excluded");

            let slot = (angle - start) / step;
            assert!(
                (slot - slot.round()).abs() < 1e-9,
                "angle must sit on an even grid position"
            );
        }
    }

    #[test]
    fn all_grid_positions_are_reachable() {
        let (start, end, count) = (0.0, 90.0, 3);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let angle = select_rotation(start, end, count, &mut rng);
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "slots are 0..3 by construction"
            )]
            let slot = ((angle - start) / 30.0).round() as usize;
            seen[slot] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
