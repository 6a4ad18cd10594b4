// Slide layout: first-fit decreasing packing of weighted items into fixed line
// budgets, plus per-slide fill analysis.
// Pure and cheap for report-sized inputs, so handlers call it inline.

pub mod handlers;
pub mod packer;
pub mod slide_fill;
