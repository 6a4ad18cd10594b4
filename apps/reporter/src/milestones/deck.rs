//! Milestone Deck: turns milestone records into numbered slide assignments.
//!
//! Active and inactive milestones are packed independently against the same line
//! budget, then laid out according to the template in use:
//!
//! - `Sequential` ("Milestone Report"): every active slide, then every inactive
//!   slide, numbered with one running counter across the deck.
//! - `SideBySide` ("Completed / Incomplete Milestones"): slide k pairs active group k
//!   with inactive group k, numbering restarts in each column.
//!
//! The renderer duplicates the template slide `slide_count()` times and fills each
//! copy from the matching `DeckSlide`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::layout::packer::pack_items;
use crate::models::milestone::{partition_by_status, Milestone, MilestoneStatus};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckLayout {
    #[default]
    Sequential,
    SideBySide,
}

/// A milestone as it appears on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub number: usize,
    pub title: String,
    pub user_stories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeckSlide {
    /// One list of milestones, all of the same status.
    Listing {
        status: MilestoneStatus,
        entries: Vec<DeckEntry>,
    },
    /// Completed milestones on the left, incomplete on the right.
    Paired {
        active: Vec<DeckEntry>,
        inactive: Vec<DeckEntry>,
    },
    /// Placeholder when there is nothing to report; rendered as "None".
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDeck {
    pub layout: DeckLayout,
    pub lines_per_slide: u32,
    pub active_count: usize,
    pub inactive_count: usize,
    pub slides: Vec<DeckSlide>,
}

impl MilestoneDeck {
    /// Number of template slides the renderer must produce. Always at least one.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Builds the milestone deck for `milestones`.
///
/// `active_color` decides which milestones are complete; `lines_per_slide` is the
/// user-story budget of one slide column.
pub fn build_deck(
    milestones: &[Milestone],
    active_color: &str,
    lines_per_slide: u32,
    layout: DeckLayout,
) -> MilestoneDeck {
    for oversized in milestones
        .iter()
        .filter(|m| m.line_count() > lines_per_slide)
    {
        warn!(
            milestone = %oversized.title(),
            lines = oversized.line_count(),
            lines_per_slide,
            "Milestone exceeds the slide line budget and will overflow"
        );
    }

    let (active, inactive) = partition_by_status(milestones, active_color);
    let active_groups = pack_items(&active, lines_per_slide, Milestone::line_count);
    let inactive_groups = pack_items(&inactive, lines_per_slide, Milestone::line_count);

    let slides = match layout {
        DeckLayout::Sequential => sequential_slides(active_groups, inactive_groups),
        DeckLayout::SideBySide => paired_slides(active_groups, inactive_groups),
    };

    debug!(
        active = active.len(),
        inactive = inactive.len(),
        slides = slides.len(),
        ?layout,
        "Built milestone deck"
    );

    MilestoneDeck {
        layout,
        lines_per_slide,
        active_count: active.len(),
        inactive_count: inactive.len(),
        slides,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn sequential_slides(
    active_groups: Vec<Vec<Milestone>>,
    inactive_groups: Vec<Vec<Milestone>>,
) -> Vec<DeckSlide> {
    let mut counter = 1;
    let mut slides: Vec<DeckSlide> = active_groups
        .into_iter()
        .map(|group| (MilestoneStatus::Active, group))
        .chain(
            inactive_groups
                .into_iter()
                .map(|group| (MilestoneStatus::Inactive, group)),
        )
        .map(|(status, group)| DeckSlide::Listing {
            status,
            entries: number_entries(group, &mut counter),
        })
        .collect();

    if slides.is_empty() {
        slides.push(DeckSlide::Empty);
    }
    slides
}

fn paired_slides(
    active_groups: Vec<Vec<Milestone>>,
    inactive_groups: Vec<Vec<Milestone>>,
) -> Vec<DeckSlide> {
    let count = active_groups.len().max(inactive_groups.len());
    if count == 0 {
        return vec![DeckSlide::Empty];
    }

    let mut active_iter = active_groups.into_iter();
    let mut inactive_iter = inactive_groups.into_iter();
    (0..count)
        .map(|_| DeckSlide::Paired {
            active: number_entries(active_iter.next().unwrap_or_default(), &mut 1),
            inactive: number_entries(inactive_iter.next().unwrap_or_default(), &mut 1),
        })
        .collect()
}

fn number_entries(group: Vec<Milestone>, counter: &mut usize) -> Vec<DeckEntry> {
    group
        .into_iter()
        .map(|m| {
            let entry = DeckEntry {
                number: *counter,
                title: m.title(),
                user_stories: m.user_stories,
            };
            *counter += 1;
            entry
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
