//! A single "Hello, World!" label on the canvas.

use std::fmt;
use std::time::Instant;

use crate::{LABEL_SIZE, Motion, Position, Size};

/// Identifier of a label. Ids are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A positioned label with an optional move in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    id: ItemId,
    resting: Position,
    motion: Option<Motion>,
}

impl TextItem {
    /// Create a label resting at the canvas origin.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            resting: Position::ORIGIN,
            motion: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn size(&self) -> Size {
        LABEL_SIZE
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Position at `now`, following the move in flight if there is one.
    pub fn position_at(&self, now: Instant) -> Position {
        match &self.motion {
            Some(motion) => motion.sample(now),
            None => self.resting,
        }
    }

    /// Replace any move in flight with `motion`.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = Some(motion);
    }

    /// Drop a finished move, keeping its end point as the resting position.
    pub fn settle(&mut self, now: Instant) {
        if let Some(motion) = self.motion
            && motion.is_finished(now)
        {
            self.resting = motion.to;
            self.motion = None;
        }
    }
}
