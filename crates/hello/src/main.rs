use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::SetTitle,
};
use hello_animation::{BounceController, BounceEvent, BounceSettings};
use hello_config::Config;
use hello_core::{Registry, WINDOW_TITLE};
use ratatui::{DefaultTerminal, Frame};

mod controls;
mod logging;
mod view;

use controls::{Action, ControlPanel, action_for_key};
use view::ViewComposer;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = logging::init();
    let config = Config::load_or_default();
    tracing::info!(log = ?log_path, "starting");
    match config.to_toml() {
        Ok(text) => tracing::info!("effective configuration:\n{text}"),
        Err(err) => tracing::warn!("{err:#}"),
    }

    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture, SetTitle(WINDOW_TITLE))
        .wrap_err("failed to set up the terminal")
        .and_then(|()| App::new(&config).run(terminal));
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(err) = &result {
        tracing::error!("exiting with error: {err:#}");
    }
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Labels on the canvas.
    registry: Registry,
    /// Owner of the bounce loop.
    controller: BounceController,
    /// Retargets sent by the bounce loop.
    events: Receiver<BounceEvent>,
    view: ViewComposer,
    controls: ControlPanel,
    /// Event poll timeout between redraws.
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let registry = Registry::new();
        let (tx, rx) = mpsc::channel();
        let settings = BounceSettings {
            canvas: config.canvas.size(),
            tick: config.animation.tick(),
            move_duration: config.animation.move_duration(),
        };
        Self {
            running: false,
            controller: BounceController::new(registry.clone(), settings, tx),
            registry,
            events: rx,
            view: ViewComposer::new(config.canvas.size(), config.label.palette()),
            controls: ControlPanel::new(),
            frame_interval: config.animation.frame(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.apply_bounce_events();
            self.registry.settle(Instant::now());
            self.view.refresh(&self.registry);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.controller.stop();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let animating = self.controller.is_running();
        self.view.render(
            frame,
            &self.registry,
            Instant::now(),
            &mut self.controls,
            animating,
        );
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action_for_key(key) {
                        self.dispatch(action);
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if let Some(action) = self.controls.action_at(column, row) {
                        self.dispatch(action);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddHello => self.add_hello(),
            Action::StartAnimation => self.start_animation(),
            Action::StopAnimation => self.stop_animation(),
            Action::ClearText => self.clear_text(),
            Action::Quit => self.quit(),
        }
    }

    /// Add a label at the origin. A running loop is restarted to pick it up.
    fn add_hello(&mut self) {
        let id = self.registry.add();
        self.view.refresh(&self.registry);
        tracing::info!(%id, count = self.registry.len(), "added label");
        if self.controller.is_running() {
            self.controller.restart();
            tracing::info!("restarted animation");
        }
    }

    fn start_animation(&mut self) {
        if self.controller.start() {
            tracing::info!(count = self.registry.len(), "started animation");
        }
    }

    fn stop_animation(&mut self) {
        if self.controller.stop() {
            tracing::info!("stopped animation");
        }
    }

    /// Stop the animation and remove every label.
    fn clear_text(&mut self) {
        self.controller.stop();
        self.registry.clear();
        // Retargets still queued refer to labels that are gone.
        while self.events.try_recv().is_ok() {}
        self.view.refresh(&self.registry);
        tracing::info!("cleared labels");
    }

    /// Start the moves requested by the bounce loop.
    fn apply_bounce_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.events.try_recv() {
            match event {
                BounceEvent::Retarget {
                    id,
                    target,
                    duration,
                } => {
                    if !self.registry.start_motion(id, target, duration, now) {
                        tracing::debug!(%id, "dropped retarget for removed label");
                    }
                }
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
