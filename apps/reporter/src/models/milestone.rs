use serde::{Deserialize, Serialize};

/// Display color the tracker assigns to completed milestones.
pub const DEFAULT_ACTIVE_COLOR: &str = "#107c1e";

/// A milestone as delivered by the tracker data-fetch layer, with its linked
/// user stories already flattened to display lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub formatted_id: String,
    #[serde(default)]
    pub display_color: String,
    /// One entry per linked artifact, e.g. `"Load balances - US1234"`.
    #[serde(default)]
    pub user_stories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Active,
    Inactive,
}

impl Milestone {
    /// `"<name> - [<formatted id>]"`, the heading rendered on the slide.
    pub fn title(&self) -> String {
        format!("{} - [{}]", self.name, self.formatted_id)
    }

    /// Lines this milestone occupies on a slide: one per user story.
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.user_stories.len()).unwrap_or(u32::MAX)
    }

    pub fn status(&self, active_color: &str) -> MilestoneStatus {
        if self.display_color.trim().eq_ignore_ascii_case(active_color.trim()) {
            MilestoneStatus::Active
        } else {
            MilestoneStatus::Inactive
        }
    }
}

/// Splits milestones into (active, inactive), keeping input order within each group.
pub fn partition_by_status(
    milestones: &[Milestone],
    active_color: &str,
) -> (Vec<Milestone>, Vec<Milestone>) {
    milestones
        .iter()
        .cloned()
        .partition(|m| m.status(active_color) == MilestoneStatus::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(name: &str, color: &str, stories: usize) -> Milestone {
        Milestone {
            name: name.to_string(),
            formatted_id: format!("MI{}", name.len()),
            display_color: color.to_string(),
            user_stories: (0..stories).map(|i| format!("Story {i} - US{i}")).collect(),
        }
    }

    #[test]
    fn test_title_format() {
        let m = Milestone {
            name: "Q3 Cutover".to_string(),
            formatted_id: "MI042".to_string(),
            display_color: String::new(),
            user_stories: vec![],
        };
        assert_eq!(m.title(), "Q3 Cutover - [MI042]");
    }

    #[test]
    fn test_line_count_is_story_count() {
        assert_eq!(milestone("a", "", 0).line_count(), 0);
        assert_eq!(milestone("a", "", 7).line_count(), 7);
    }

    #[test]
    fn test_status_matches_color_case_insensitively() {
        assert_eq!(
            milestone("a", "#107C1E", 1).status(DEFAULT_ACTIVE_COLOR),
            MilestoneStatus::Active
        );
        assert_eq!(
            milestone("a", "#fce205", 1).status(DEFAULT_ACTIVE_COLOR),
            MilestoneStatus::Inactive
        );
        assert_eq!(
            milestone("a", "", 1).status(DEFAULT_ACTIVE_COLOR),
            MilestoneStatus::Inactive
        );
    }

    #[test]
    fn test_partition_preserves_order() {
        let all = vec![
            milestone("one", DEFAULT_ACTIVE_COLOR, 1),
            milestone("two", "#ff0000", 1),
            milestone("three", DEFAULT_ACTIVE_COLOR, 1),
            milestone("four", "", 1),
        ];
        let (active, inactive) = partition_by_status(&all, DEFAULT_ACTIVE_COLOR);
        let names = |v: &[Milestone]| v.iter().map(|m| m.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&active), vec!["one", "three"]);
        assert_eq!(names(&inactive), vec!["two", "four"]);
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let m: Milestone =
            serde_json::from_str(r#"{"name":"Go-live","formatted_id":"MI7"}"#).unwrap();
        assert_eq!(m.line_count(), 0);
        assert_eq!(m.status(DEFAULT_ACTIVE_COLOR), MilestoneStatus::Inactive);
    }
}
