//! Core types for the hello bouncing label app.
//!
//! Geometry on the logical canvas, the linear [`Motion`] used to move a
//! label between two points, and the shared [`Registry`] of labels.

mod geometry;
mod item;
mod motion;
mod registry;

pub use geometry::{Borders, Position, Size};
pub use item::{ItemId, TextItem};
pub use motion::Motion;
pub use registry::{ItemSnapshot, Registry};

/// The literal content of every label.
pub const HELLO_TEXT: &str = "Hello, World!";

/// Rendered size shared by every label, in logical canvas units.
pub const LABEL_SIZE: Size = Size::new(90.0, 20.0);

/// Default logical canvas size.
pub const DEFAULT_CANVAS: Size = Size::new(400.0, 400.0);

/// Title shown on the canvas and the terminal window.
pub const WINDOW_TITLE: &str = "Hello Go";
