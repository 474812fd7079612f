pub(crate) mod insights;
pub mod views;

pub use views::{ResultsView, ScoreLine};
