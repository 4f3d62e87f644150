//! Bounce animation for the hello app.
//!
//! A [`BounceController`] owns a background thread that watches the label
//! registry. Whenever a label reaches one of the canvas borders the loop
//! picks a fresh point on a border and sends a [`BounceEvent`] back to the
//! UI thread, which starts the move.

mod controller;
mod planner;
mod target;

pub use controller::{BounceController, BounceEvent, BounceSettings};
pub use planner::BouncePlanner;
pub use target::pick_target;
