//! Selection window placement.
//!
//! The selection window has a fixed duration and slides over the song.
//! Its left edge is stored as a normalized start (`0.0..=1.0` of the song).
//!
//! - `bounds`: `SelectionBounds`, the legal range for the normalized start
//! - `policy`: strategies that turn a user gesture into a requested start

mod bounds;
mod policy;

pub use bounds::SelectionBounds;
pub use policy::{ClampToBounds, ClampToUnit, JumpToKeyTime, SetStartPercent};
