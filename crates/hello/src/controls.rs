//! The button bar and its keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Paragraph},
};

/// Something the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddHello,
    StartAnimation,
    StopAnimation,
    ClearText,
    Quit,
}

impl Action {
    /// Buttons in the order they appear on screen.
    pub const BUTTONS: [Action; 4] = [
        Action::AddHello,
        Action::StartAnimation,
        Action::StopAnimation,
        Action::ClearText,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddHello => "Add Hello",
            Action::StartAnimation => "Start Animation",
            Action::StopAnimation => "Stop Animation",
            Action::ClearText => "Clear Text",
            Action::Quit => "Quit",
        }
    }

    pub fn key(self) -> char {
        match self {
            Action::AddHello => 'a',
            Action::StartAnimation => 's',
            Action::StopAnimation => 'x',
            Action::ClearText => 'c',
            Action::Quit => 'q',
        }
    }
}

/// Map a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Action::Quit),
        (_, KeyCode::Char('a')) => Some(Action::AddHello),
        (_, KeyCode::Char('s')) => Some(Action::StartAnimation),
        (_, KeyCode::Char('x')) => Some(Action::StopAnimation),
        (_, KeyCode::Char('c')) => Some(Action::ClearText),
        _ => None,
    }
}

/// Renders the buttons and remembers where they were drawn for clicks.
#[derive(Debug, Default)]
pub struct ControlPanel {
    hit_boxes: Vec<(Rect, Action)>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `area` into one cell per button.
    pub fn layout(area: Rect) -> Vec<(Rect, Action)> {
        let cells = Layout::horizontal([Constraint::Fill(1); Action::BUTTONS.len()]).split(area);
        cells.iter().copied().zip(Action::BUTTONS).collect()
    }

    /// The button under the given terminal cell, if any.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        self.hit_boxes
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, action)| *action)
    }

    /// Draw the button bar. Start or stop is dimmed when it would do nothing.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, color: Color, animating: bool) {
        self.hit_boxes = Self::layout(area);
        for (rect, action) in &self.hit_boxes {
            let idle = match action {
                Action::StartAnimation => animating,
                Action::StopAnimation => !animating,
                _ => false,
            };
            let style = if idle {
                Style::new().dark_gray()
            } else {
                Style::new().fg(color)
            };
            let line = Line::from(vec![
                action.key().to_string().bold(),
                " ".into(),
                action.label().into(),
            ]);
            let button = Paragraph::new(line)
                .style(style)
                .centered()
                .block(Block::bordered().border_style(style));
            frame.render_widget(button, *rect);
        }
    }
}
