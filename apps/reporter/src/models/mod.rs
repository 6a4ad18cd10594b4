pub mod milestone;
pub mod period;
