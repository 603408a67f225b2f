//! Utility types and traits.
pub mod iter;
pub mod stats;
