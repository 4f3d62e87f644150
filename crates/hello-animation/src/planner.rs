//! One iteration of the bounce loop, free of threads and clocks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use hello_core::{Borders, ItemId, ItemSnapshot, Size};
use rand::Rng;

use crate::{BounceEvent, pick_target};

/// Decides which labels need a new move on each loop iteration.
#[derive(Debug)]
pub struct BouncePlanner {
    canvas: Size,
    move_duration: Duration,
    /// Retargets sent but not yet applied by the UI, with the send instant.
    pending: HashMap<ItemId, Instant>,
}

impl BouncePlanner {
    pub fn new(canvas: Size, move_duration: Duration) -> Self {
        Self {
            canvas,
            move_duration,
            pending: HashMap::new(),
        }
    }

    /// Retargets for every label touching a border, in snapshot order.
    ///
    /// A label whose previous retarget has not reached the registry yet is
    /// skipped. A retarget counts as applied once the snapshot shows a move
    /// started at or after it was sent, and is given up after one move
    /// duration.
    pub fn plan<R: Rng + ?Sized>(
        &mut self,
        items: &[ItemSnapshot],
        now: Instant,
        rng: &mut R,
    ) -> Vec<BounceEvent> {
        let Some(first) = items.first() else {
            self.pending.clear();
            return Vec::new();
        };
        let borders = Borders::compute(self.canvas, first.size);

        let move_duration = self.move_duration;
        self.pending.retain(|id, sent_at| {
            let Some(item) = items.iter().find(|item| item.id == *id) else {
                return false;
            };
            let applied = item
                .motion_started_at
                .is_some_and(|started| started >= *sent_at);
            !applied && now.saturating_duration_since(*sent_at) < move_duration
        });

        let mut events = Vec::new();
        for item in items {
            if self.pending.contains_key(&item.id) || !borders.touches(item.position) {
                continue;
            }
            let target = pick_target(rng, borders);
            self.pending.insert(item.id, now);
            events.push(BounceEvent::Retarget {
                id: item.id,
                target,
                duration: self.move_duration,
            });
        }
        events
    }
}
