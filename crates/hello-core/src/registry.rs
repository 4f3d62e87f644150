//! Shared, ordered collection of labels.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::{ItemId, Motion, Position, Size, TextItem};

/// Copy of one label's state at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub position: Position,
    pub size: Size,
    /// When the move currently applied to the label started, if any.
    pub motion_started_at: Option<Instant>,
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<TextItem>,
    next_id: u64,
    /// Bumped whenever items are added or removed.
    generation: u64,
}

/// Ordered labels shared between the UI thread and the bounce loop.
///
/// Cloning the registry clones the handle, not the labels. Mutation is
/// meant for the UI thread; other threads read through [`Registry::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<Inner>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a new label at the origin.
    pub fn add(&self) -> ItemId {
        let mut inner = self.write();
        inner.next_id += 1;
        let id = ItemId(inner.next_id);
        inner.items.push(TextItem::new(id));
        inner.generation += 1;
        id
    }

    /// Remove every label.
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.items.clear();
        inner.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().items.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.read().items.iter().map(TextItem::id).collect()
    }

    /// Current state of every label, in insertion order.
    pub fn snapshot(&self, now: Instant) -> Vec<ItemSnapshot> {
        self.read()
            .items
            .iter()
            .map(|item| ItemSnapshot {
                id: item.id(),
                position: item.position_at(now),
                size: item.size(),
                motion_started_at: item.motion().map(|motion| motion.started_at),
            })
            .collect()
    }

    /// Start moving label `id` from where it is at `now` towards `to`.
    ///
    /// Returns `false` if the label no longer exists.
    pub fn start_motion(&self, id: ItemId, to: Position, duration: Duration, now: Instant) -> bool {
        let mut inner = self.write();
        match inner.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                let from = item.position_at(now);
                item.set_motion(Motion::new(from, to, now, duration));
                true
            }
            None => false,
        }
    }

    /// Fold finished moves into resting positions.
    pub fn settle(&self, now: Instant) {
        for item in &mut self.write().items {
            item.settle(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_grows_registry() {
        for n in 0..20 {
            let registry = Registry::new();
            for _ in 0..n {
                registry.add();
            }
            assert_eq!(registry.len(), n);
        }
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let registry = Registry::new();
        let first = registry.add();
        registry.clear();
        let second = registry.add();
        assert_ne!(first, second);
        assert_eq!(registry.ids(), vec![second]);
    }

    #[test]
    fn test_clear_on_empty_registry() {
        let registry = Registry::new();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.snapshot(Instant::now()).is_empty());
    }

    #[test]
    fn test_generation_tracks_membership() {
        let registry = Registry::new();
        let g0 = registry.generation();
        let id = registry.add();
        let g1 = registry.generation();
        assert!(g1 > g0);

        registry.start_motion(id, Position::new(10.0, 0.0), Duration::from_secs(1), Instant::now());
        assert_eq!(registry.generation(), g1);

        registry.clear();
        assert!(registry.generation() > g1);
    }

    #[test]
    fn test_snapshot_in_insertion_order() {
        let registry = Registry::new();
        let a = registry.add();
        let b = registry.add();
        let snapshot = registry.snapshot(Instant::now());
        assert_eq!(snapshot.iter().map(|s| s.id).collect::<Vec<_>>(), vec![a, b]);
        assert!(snapshot.iter().all(|s| s.position == Position::ORIGIN));
        assert!(snapshot.iter().all(|s| s.motion_started_at.is_none()));
    }

    #[test]
    fn test_start_motion_moves_from_current_position() {
        let registry = Registry::new();
        let id = registry.add();
        let start = Instant::now();
        assert!(registry.start_motion(id, Position::new(100.0, 0.0), Duration::from_secs(1), start));

        let mid = start + Duration::from_millis(500);
        assert_eq!(registry.snapshot(mid)[0].position, Position::new(50.0, 0.0));
        assert_eq!(registry.snapshot(mid)[0].motion_started_at, Some(start));

        // Redirect halfway: the new move starts where the label is.
        assert!(registry.start_motion(id, Position::new(50.0, 100.0), Duration::from_secs(1), mid));
        assert_eq!(registry.snapshot(mid)[0].position, Position::new(50.0, 0.0));
        let end = mid + Duration::from_secs(1);
        assert_eq!(registry.snapshot(end)[0].position, Position::new(50.0, 100.0));
    }

    #[test]
    fn test_start_motion_unknown_item() {
        let registry = Registry::new();
        let id = registry.add();
        registry.clear();
        assert!(!registry.start_motion(id, Position::ORIGIN, Duration::from_secs(1), Instant::now()));
    }

    #[test]
    fn test_shared_between_clones() {
        let registry = Registry::new();
        let handle = registry.clone();
        registry.add();
        assert_eq!(handle.len(), 1);
    }
}
