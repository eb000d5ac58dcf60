//! # timbre-relational
//!
//! Maps stance bands to relational deltas, scales them by an optional
//! context score, routes updates by direction, and reads the relational
//! stance back as a band for generation. Every collaborator failure is
//! logged and absorbed.

pub mod bridge;
pub mod delta;

pub use bridge::RelationalBridge;
pub use delta::{scale_delta, stance_to_delta};
