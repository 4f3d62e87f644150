//! Background bounce loop and its owning handle.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use hello_core::{DEFAULT_CANVAS, ItemId, Position, Registry, Size};

use crate::BouncePlanner;

/// Message from the bounce loop to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BounceEvent {
    /// Move label `id` towards `target` over `duration`.
    Retarget {
        id: ItemId,
        target: Position,
        duration: Duration,
    },
}

/// Timing and canvas size used by the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceSettings {
    pub canvas: Size,
    pub tick: Duration,
    pub move_duration: Duration,
}

impl Default for BounceSettings {
    fn default() -> Self {
        Self {
            canvas: DEFAULT_CANVAS,
            tick: Duration::from_millis(50),
            move_duration: Duration::from_secs(1),
        }
    }
}

/// A running loop: the stop signal plus the thread to join.
#[derive(Debug)]
struct BounceTask {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

/// Starts and stops the bounce loop.
///
/// At most one loop runs at a time. Stopping waits for the loop thread to
/// exit, so a later start never overlaps with it.
#[derive(Debug)]
pub struct BounceController {
    registry: Registry,
    settings: BounceSettings,
    events: Sender<BounceEvent>,
    task: Option<BounceTask>,
}

impl BounceController {
    /// Create a stopped controller. Retargets are sent on `events`.
    pub fn new(registry: Registry, settings: BounceSettings, events: Sender<BounceEvent>) -> Self {
        Self {
            registry,
            settings,
            events,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Start the loop. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.task.is_some() {
            return false;
        }

        let (stop_tx, stop_rx) = mpsc::channel();
        let registry = self.registry.clone();
        let events = self.events.clone();
        let settings = self.settings;

        let handle = thread::spawn(move || run_loop(registry, settings, events, stop_rx));
        self.task = Some(BounceTask {
            stop: stop_tx,
            handle,
        });
        tracing::debug!("bounce loop started");
        true
    }

    /// Stop the loop and wait for it to exit. Returns `false` if it was not
    /// running.
    pub fn stop(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        // A send error means the loop already left.
        let _ = task.stop.send(());
        if task.handle.join().is_err() {
            tracing::error!("bounce loop panicked");
        }
        tracing::debug!("bounce loop stopped");
        true
    }

    /// Stop and start again so the loop sees the current registry.
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }
}

impl Drop for BounceController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    registry: Registry,
    settings: BounceSettings,
    events: Sender<BounceEvent>,
    stop: Receiver<()>,
) {
    let mut planner = BouncePlanner::new(settings.canvas, settings.move_duration);
    let mut rng = rand::thread_rng();

    loop {
        let now = Instant::now();
        let items = registry.snapshot(now);
        for event in planner.plan(&items, now, &mut rng) {
            if events.send(event).is_err() {
                return;
            }
        }

        match stop.recv_timeout(settings.tick) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}
