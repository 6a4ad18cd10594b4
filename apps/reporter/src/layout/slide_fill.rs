//! Slide Fill Analysis: checks how well each slide of a plan uses its line budget.
//!
//! First-fit decreasing is not optimal, so the renderer (and whoever reads the logs)
//! gets a per-slide breakdown plus the trivial lower bound ⌈Σw / capacity⌉ to compare
//! the slide count against.
//!
//! # Slide fill rules
//! - Lines used > capacity  → Overflow (only a lone oversized item can cause this)
//! - Whitespace > 50%       → Sparse
//! - Otherwise              → Full

use serde::{Deserialize, Serialize};

use crate::layout::packer::SlidePlan;

/// Whitespace fraction above which a slide counts as sparse.
const SPARSE_WHITESPACE_THRESHOLD: f32 = 0.5;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideFillVerdict {
    /// At least half the budget used, nothing spills over.
    Full,
    /// More than half the budget left empty.
    Sparse,
    /// Content exceeds the budget and will spill off the slide when rendered.
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideFill {
    pub lines_used: u64,
    pub capacity: u32,
    pub whitespace_fraction: f32,
    pub overflow_lines: u64,
    pub verdict: SlideFillVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFillReport {
    pub slides: Vec<SlideFill>,
    pub total_lines: u64,
    /// No packing can use fewer slides than this.
    pub lower_bound_slides: u64,
    pub overflowing_slides: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes every slide of `plan`, looking up item weights by original index.
///
/// `weights` must be the slice the plan was packed from.
pub fn analyze_plan(plan: &SlidePlan, weights: &[u32], capacity: u32) -> PlanFillReport {
    let slides: Vec<SlideFill> = plan
        .slides
        .iter()
        .map(|slide| {
            let lines_used: u64 = slide
                .indices()
                .iter()
                .map(|&i| u64::from(weights[i]))
                .sum();
            analyze_slide(lines_used, capacity)
        })
        .collect();

    let total_lines: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let lower_bound_slides = if capacity == 0 {
        weights.len() as u64
    } else {
        total_lines.div_ceil(u64::from(capacity))
    };
    let overflowing_slides = plan.slides.iter().filter(|s| s.is_overflowing()).count();

    PlanFillReport {
        slides,
        total_lines,
        lower_bound_slides,
        overflowing_slides,
    }
}

/// Classifies a single slide given the lines placed on it.
pub fn analyze_slide(lines_used: u64, capacity: u32) -> SlideFill {
    let capacity_lines = u64::from(capacity);
    let overflow_lines = lines_used.saturating_sub(capacity_lines);

    let whitespace_fraction = if capacity == 0 {
        0.0
    } else {
        (1.0_f32 - lines_used as f32 / capacity as f32).max(0.0)
    };

    let verdict = if overflow_lines > 0 {
        SlideFillVerdict::Overflow
    } else if whitespace_fraction > SPARSE_WHITESPACE_THRESHOLD {
        SlideFillVerdict::Sparse
    } else {
        SlideFillVerdict::Full
    };

    SlideFill {
        lines_used,
        capacity,
        whitespace_fraction,
        overflow_lines,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::packer::pack_slides;

    #[test]
    fn test_full_slide_verdict() {
        let fill = analyze_slide(18, 20);
        assert_eq!(fill.verdict, SlideFillVerdict::Full);
        assert_eq!(fill.overflow_lines, 0);
        assert!((fill.whitespace_fraction - 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_sparse_slide_verdict() {
        let fill = analyze_slide(4, 20);
        assert_eq!(fill.verdict, SlideFillVerdict::Sparse);
        assert!(fill.whitespace_fraction > 0.5);
    }

    #[test]
    fn test_overflow_slide_verdict() {
        let fill = analyze_slide(27, 20);
        assert_eq!(fill.verdict, SlideFillVerdict::Overflow);
        assert_eq!(fill.overflow_lines, 7);
        assert_eq!(fill.whitespace_fraction, 0.0);
    }

    #[test]
    fn test_exactly_half_is_full() {
        assert_eq!(analyze_slide(10, 20).verdict, SlideFillVerdict::Full);
    }

    #[test]
    fn test_plan_report_totals() {
        let weights = [4, 24, 18, 6, 5, 17, 19, 2, 6, 3, 9, 7, 3, 2, 19];
        let plan = pack_slides(&weights, 25);
        let report = analyze_plan(&plan, &weights, 25);

        assert_eq!(report.slides.len(), 6);
        assert_eq!(report.total_lines, 144);
        assert_eq!(report.lower_bound_slides, 6);
        assert_eq!(report.overflowing_slides, 0);
        // [10, 0, 12, 7, 13] → 9 + 4 + 3 + 2 + 2
        assert_eq!(report.slides[5].lines_used, 20);
    }

    #[test]
    fn test_plan_report_counts_overflow() {
        let weights = [30, 4];
        let plan = pack_slides(&weights, 25);
        let report = analyze_plan(&plan, &weights, 25);

        assert_eq!(report.overflowing_slides, 1);
        assert_eq!(report.slides[0].overflow_lines, 5);
        assert_eq!(report.slides[1].verdict, SlideFillVerdict::Sparse);
    }

    #[test]
    fn test_empty_plan_report() {
        let plan = pack_slides(&[], 20);
        let report = analyze_plan(&plan, &[], 20);
        assert!(report.slides.is_empty());
        assert_eq!(report.total_lines, 0);
        assert_eq!(report.lower_bound_slides, 0);
    }
}
