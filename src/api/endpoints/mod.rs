//! API endpoint handlers, one module per feature.

pub mod comprehensive;
pub mod diagnose;
pub mod diseases;
pub mod health;
pub mod interactions;
pub mod symptoms;
