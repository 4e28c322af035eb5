use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::screens::SearchInput;
use crate::controllers::{AppState, Command};

#[derive(Debug, PartialEq)]
pub enum AppAction {
    Continue,           // Keep running
    Dispatch(Command),  // Hand a command to the coordinator
    Exit,               // Esc pressed
}

/// What a screen wants after a key press
pub(crate) struct KeyOutcome {
    pub next: Option<Box<dyn Screen>>,
    pub command: Option<Command>,
}

impl KeyOutcome {
    pub fn stay() -> Self {
        Self {
            next: None,
            command: None,
        }
    }

    pub fn go(next: Box<dyn Screen>) -> Self {
        Self {
            next: Some(next),
            command: None,
        }
    }

    pub fn dispatch(command: Command) -> Self {
        Self {
            next: None,
            command: Some(command),
        }
    }

    pub fn then(mut self, next: Box<dyn Screen>) -> Self {
        self.next = Some(next);
        self
    }
}

pub(crate) trait Screen {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyCode, state: &AppState) -> KeyOutcome;
}

pub struct RecipeApp {
    screen: Box<dyn Screen>,
}

impl Default for RecipeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeApp {
    pub fn new() -> Self {
        Self {
            screen: Box::new(SearchInput::new()),
        }
    }

    pub fn render(&self, state: &AppState, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        self.screen.render(state, frame, chunks[0]);
        render_status(state, frame, chunks[1]);

        if let Some(alert) = &state.alert {
            render_alert(alert, frame);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &AppState) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }

        // any key acknowledges an alert
        if state.alert.is_some() {
            return AppAction::Dispatch(Command::DismissAlert);
        }

        let outcome = self.screen.handle_key(key, state);
        if let Some(next) = outcome.next {
            self.screen = next;
        }

        match outcome.command {
            Some(command) => AppAction::Dispatch(command),
            None => AppAction::Continue,
        }
    }
}

fn render_status(state: &AppState, frame: &mut Frame, area: Rect) {
    let likes = Span::styled(
        format!(" ♥ {} ", state.likes.num_likes()),
        Style::default().fg(Color::Red),
    );
    let message = if state.loading {
        Span::styled("Loading...", Style::default().add_modifier(Modifier::ITALIC))
    } else {
        Span::raw("/ search  r results  v recipe  s shopping  l likes  Esc quit")
    };

    frame.render_widget(Paragraph::new(Line::from(vec![likes, message])), area);
}

fn render_alert(alert: &str, frame: &mut Frame) {
    let area = centered(frame.area(), 50, 5);
    let popup = Paragraph::new(alert)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert (any key to dismiss)")
                .style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
