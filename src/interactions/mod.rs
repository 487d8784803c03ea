//! Pairwise drug-interaction lookup over a curated reference table.

pub mod checker;
pub mod reference;
pub mod report;
pub mod types;

pub use checker::InteractionChecker;
pub use reference::InteractionReference;
pub use report::render_interaction_report;
pub use types::*;
