//! Slide Packer: distributes weighted content items across fixed-capacity slides.
//!
//! Each item carries a weight (the number of display lines it occupies). Items are
//! assigned with first-fit decreasing: sort by weight descending (stable on ties),
//! then drop each item into the first open slide that still has room, opening a new
//! slide when none does.
//!
//! # Overflow
//! An item heavier than the capacity always gets a slide of its own and leaves that
//! slide with a negative remaining capacity. This is accepted, not an error.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One slide of a plan: the original indices placed on it, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    indices: Vec<usize>,
    /// Lines still free on this slide. Negative when a single item overflows it.
    remaining: i64,
}

impl Slide {
    fn open(capacity: u32) -> Self {
        Slide {
            indices: Vec::new(),
            remaining: i64::from(capacity),
        }
    }

    fn fits(&self, weight: u32) -> bool {
        self.remaining >= i64::from(weight)
    }

    fn place(&mut self, index: usize, weight: u32) {
        self.indices.push(index);
        self.remaining -= i64::from(weight);
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn is_overflowing(&self) -> bool {
        self.remaining() < 0
    }
}

/// An ordered sequence of slides, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePlan {
    pub capacity: u32,
    pub slides: Vec<Slide>,
}

impl SlidePlan {
    /// Returns the original item indices for each slide, in slide order.
    pub fn assignments(&self) -> Vec<Vec<usize>> {
        self.slides.iter().map(|s| s.indices.clone()).collect()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Packs item weights into slides of `capacity` lines using first-fit decreasing.
///
/// Runs in O(n·s) where s is the number of slides produced. The result is fully
/// determined by the input: equal weights keep their original relative order.
pub fn pack_slides(weights: &[u32], capacity: u32) -> SlidePlan {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    // sort_by is stable, so ties keep input order
    order.sort_by(|&a, &b| weights[b].cmp(&weights[a]));

    let mut slides: Vec<Slide> = Vec::new();
    for index in order {
        let weight = weights[index];
        match slides.iter_mut().find(|s| s.fits(weight)) {
            Some(slide) => slide.place(index, weight),
            None => {
                let mut slide = Slide::open(capacity);
                slide.place(index, weight);
                slides.push(slide);
            }
        }
    }

    SlidePlan { capacity, slides }
}

/// Packs arbitrary records by a weight accessor and returns the records grouped
/// per slide, in plan order.
pub fn pack_items<T, F>(items: &[T], capacity: u32, weight_of: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    let weights: Vec<u32> = items.iter().map(&weight_of).collect();
    pack_slides(&weights, capacity)
        .slides
        .iter()
        .map(|slide| slide.indices.iter().map(|&i| items[i].clone()).collect())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
