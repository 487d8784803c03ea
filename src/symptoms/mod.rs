//! Selected-list symptom service: categories, search and code lookup for
//! symptoms picked from a fixed list.

pub mod reference;
pub mod selector;
pub mod types;

pub use reference::SymptomReference;
pub use selector::SymptomSelector;
pub use types::*;
