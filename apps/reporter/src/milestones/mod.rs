// Milestone report: splits milestones by completion status and lays them out
// across template slides with the slide packer.

pub mod deck;
pub mod handlers;
