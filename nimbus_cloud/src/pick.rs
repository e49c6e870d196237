// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit-testing against placed words.
//!
//! A point hits a word when it falls inside the word's rotated box; padding is
//! blank space, so it never participates. Results preserve placement order.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::viewmodel::PlacedWord;

/// Returns every placed word whose rotated box contains `at`, in placement
/// order. Coordinates are relative to the chart center, matching
/// [`PlacedWord::anchor`].
pub(crate) fn hit_test<'a>(words: &'a [PlacedWord], at: Point) -> Vec<&'a PlacedWord> {
    words.iter().filter(|word| contains(word, at)).collect()
}

fn contains(word: &PlacedWord, at: Point) -> bool {
    // Undo the word's rotation so the test is axis-aligned in word space.
    let d = at - word.anchor;
    let rad = (-word.rotation).to_radians();
    let (s, c) = (rad.sin(), rad.cos());
    let local_x = d.x * c - d.y * s;
    let local_y = d.x * s + d.y * c;
    local_x.abs() <= 0.5 * word.extent.width && local_y.abs() <= 0.5 * word.extent.height
}
