//! Composes the screen from the label registry and the control panel.

use std::collections::HashMap;
use std::time::Instant;

use hello_core::{HELLO_TEXT, ItemId, Position, Registry, Size, WINDOW_TITLE};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, canvas::Canvas},
};

use crate::controls::ControlPanel;

/// Accent color of the chrome around the canvas.
const ACCENT: Color = Color::Cyan;

/// One label as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelView {
    pub id: ItemId,
    pub color: Color,
}

/// Everything drawn on screen except the moving positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    /// Registry generation this composition was built from.
    pub generation: u64,
    pub labels: Vec<LabelView>,
}

/// Rebuilds the [`Composition`] whenever the registry changes.
#[derive(Debug)]
pub struct ViewComposer {
    canvas: Size,
    palette: Vec<Color>,
    composition: Composition,
}

impl ViewComposer {
    pub fn new(canvas: Size, palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            vec![Color::White]
        } else {
            palette
        };
        Self {
            canvas,
            palette,
            composition: Composition::default(),
        }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Rebuild from scratch if the registry changed since the last build.
    /// Returns whether a rebuild happened.
    pub fn refresh(&mut self, registry: &Registry) -> bool {
        let generation = registry.generation();
        if generation == self.composition.generation {
            return false;
        }
        let labels = registry
            .ids()
            .into_iter()
            .enumerate()
            .map(|(index, id)| LabelView {
                id,
                color: self.palette[index % self.palette.len()],
            })
            .collect();
        self.composition = Composition { generation, labels };
        true
    }

    /// Draw the button bar, the canvas and the status line.
    pub fn render(
        &self,
        frame: &mut Frame,
        registry: &Registry,
        now: Instant,
        controls: &mut ControlPanel,
        animating: bool,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Buttons
            Constraint::Fill(1),   // Canvas
            Constraint::Length(1), // Status and help
        ])
        .split(frame.area());

        controls.render(frame, chunks[0], ACCENT, animating);
        self.render_canvas(frame, chunks[1], registry, now);
        self.render_status(frame, chunks[2], animating);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect, registry: &Registry, now: Instant) {
        let positions: HashMap<ItemId, Position> = registry
            .snapshot(now)
            .into_iter()
            .map(|item| (item.id, item.position))
            .collect();
        let height = f64::from(self.canvas.height);

        let canvas = Canvas::default()
            .block(
                Block::bordered()
                    .title(format!(" {WINDOW_TITLE} "))
                    .border_style(Style::new().fg(ACCENT)),
            )
            .x_bounds([0.0, f64::from(self.canvas.width)])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for label in &self.composition.labels {
                    let Some(pos) = positions.get(&label.id) else {
                        continue;
                    };
                    // Canvas y grows upwards, label positions grow downwards.
                    ctx.print(
                        f64::from(pos.x),
                        height - f64::from(pos.y),
                        Line::styled(HELLO_TEXT, Style::new().fg(label.color)),
                    );
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, animating: bool) {
        let state = if animating { "running" } else { "stopped" };
        let status = Line::from(vec![
            format!("{} labels", self.composition.labels.len()).fg(ACCENT),
            "  animation ".dark_gray(),
            state.bold().fg(ACCENT),
            "  │  ".dark_gray(),
            "q".bold().fg(ACCENT),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use hello_core::DEFAULT_CANVAS;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_refresh_only_on_change() {
        let registry = Registry::new();
        let mut composer = ViewComposer::new(DEFAULT_CANVAS, vec![Color::White]);
        assert!(!composer.refresh(&registry));

        registry.add();
        assert!(composer.refresh(&registry));
        assert!(!composer.refresh(&registry));
        assert_eq!(composer.composition().labels.len(), 1);

        registry.clear();
        assert!(composer.refresh(&registry));
        assert!(composer.composition().labels.is_empty());
    }

    #[test]
    fn test_palette_cycles_in_creation_order() {
        let registry = Registry::new();
        for _ in 0..5 {
            registry.add();
        }
        let mut composer = ViewComposer::new(DEFAULT_CANVAS, vec![Color::Red, Color::Blue]);
        composer.refresh(&registry);
        let colors: Vec<_> = composer.composition().labels.iter().map(|l| l.color).collect();
        assert_eq!(
            colors,
            vec![Color::Red, Color::Blue, Color::Red, Color::Blue, Color::Red]
        );
    }

    #[test]
    fn test_empty_palette_falls_back_to_white() {
        let registry = Registry::new();
        registry.add();
        let mut composer = ViewComposer::new(DEFAULT_CANVAS, Vec::new());
        composer.refresh(&registry);
        assert_eq!(composer.composition().labels[0].color, Color::White);
    }

    #[test]
    fn test_render_draws_buttons_title_and_labels() {
        let registry = Registry::new();
        registry.add();
        let mut composer = ViewComposer::new(DEFAULT_CANVAS, vec![Color::White]);
        composer.refresh(&registry);
        let mut controls = ControlPanel::new();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| composer.render(frame, &registry, Instant::now(), &mut controls, false))
            .unwrap();

        let text = screen_text(&terminal);
        for label in ["Add Hello", "Start Animation", "Stop Animation", "Clear Text"] {
            assert!(text.contains(label), "missing button {label}");
        }
        assert!(text.contains("Hello Go"));
        assert!(text.contains(HELLO_TEXT));
        assert!(text.contains("1 labels"));
        assert!(controls.action_at(1, 1).is_some());
    }
}
