use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{KeyOutcome, Screen};
use crate::controllers::{AppState, Command};
use crate::models::{TITLE_LIMIT, limit_title};

/// Screen switches available from every list-style screen
fn navigate(key: KeyCode) -> Option<Box<dyn Screen>> {
    match key {
        KeyCode::Char('/') => Some(Box::new(SearchInput::new())),
        KeyCode::Char('r') => Some(Box::new(Results::new())),
        KeyCode::Char('v') => Some(Box::new(RecipeView)),
        KeyCode::Char('s') => Some(Box::new(ShoppingListScreen::new())),
        KeyCode::Char('l') => Some(Box::new(LikesScreen::new())),
        _ => None,
    }
}

fn move_selection(selected: usize, key: KeyCode, len: usize) -> usize {
    match key {
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (selected + 1).min(len.saturating_sub(1)),
        _ => selected,
    }
}

fn selectable_line(text: String, is_selected: bool) -> Line<'static> {
    if is_selected {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::REVERSED),
        ))
    } else {
        Line::from(text)
    }
}

pub(crate) struct SearchInput {
    current_input: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
        }
    }
}

impl Screen for SearchInput {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input = Paragraph::new(self.current_input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search over 1,000,000 recipes (Enter to search, Tab for results)"),
        );
        frame.render_widget(input, chunks[0]);

        let hint = match &state.search {
            Some(search) => format!(
                "Last search: '{}' ({} results)",
                search.query,
                search.results.len()
            ),
            None => "Type a query such as 'pizza' or 'pasta'".to_string(),
        };
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyCode, _state: &AppState) -> KeyOutcome {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                KeyOutcome::stay()
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                KeyOutcome::stay()
            }
            KeyCode::Enter => {
                let query = self.current_input.trim().to_string();
                if query.is_empty() {
                    KeyOutcome::stay()
                } else {
                    KeyOutcome::dispatch(Command::Search(query)).then(Box::new(Results::new()))
                }
            }
            KeyCode::Tab => KeyOutcome::go(Box::new(Results::new())),
            _ => KeyOutcome::stay(),
        }
    }
}

pub(crate) struct Results {
    selected: usize,
}

impl Results {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Screen for Results {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(search) = &state.search else {
            let empty = Paragraph::new("No search yet. Press / to search.")
                .block(Block::default().borders(Borders::ALL).title("Results"));
            frame.render_widget(empty, area);
            return;
        };

        let current = state.recipe.as_ref().map(|recipe| recipe.id.as_str());
        let lines: Vec<Line> = search
            .page(state.page)
            .iter()
            .enumerate()
            .map(|(i, result)| {
                let marker = if Some(result.id.as_str()) == current { "*" } else { " " };
                selectable_line(
                    format!(
                        "{} {} - {}",
                        marker,
                        limit_title(&result.title, TITLE_LIMIT),
                        result.author
                    ),
                    i == self.selected,
                )
            })
            .collect();

        let title = format!(
            "Results for '{}' (page {}/{}, ←/→ to change page)",
            search.query,
            state.page,
            search.num_pages().max(1)
        );
        let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyCode, state: &AppState) -> KeyOutcome {
        let Some(search) = &state.search else {
            return navigate(key).map_or_else(KeyOutcome::stay, KeyOutcome::go);
        };
        let page = search.page(state.page);

        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, key, page.len());
                KeyOutcome::stay()
            }
            KeyCode::Left if state.page > 1 => {
                self.selected = 0;
                KeyOutcome::dispatch(Command::GoToPage(state.page - 1))
            }
            KeyCode::Right if state.page < search.num_pages() => {
                self.selected = 0;
                KeyOutcome::dispatch(Command::GoToPage(state.page + 1))
            }
            KeyCode::Enter => match page.get(self.selected) {
                Some(result) => KeyOutcome::dispatch(Command::LoadRecipe(result.id.clone()))
                    .then(Box::new(RecipeView)),
                None => KeyOutcome::stay(),
            },
            _ => navigate(key).map_or_else(KeyOutcome::stay, KeyOutcome::go),
        }
    }
}

pub(crate) struct RecipeView;

impl Screen for RecipeView {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(recipe) = &state.recipe else {
            let empty = Paragraph::new("No recipe selected.")
                .block(Block::default().borders(Borders::ALL).title("Recipe"));
            frame.render_widget(empty, area);
            return;
        };

        let heart = if state.recipe_is_liked() { "♥" } else { "♡" };
        let title = format!(
            "{} {} (+/- servings, a add to list, f like)",
            heart, recipe.title
        );
        let body = Paragraph::new(recipe.to_string())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(body, area);
    }

    fn handle_key(&mut self, key: KeyCode, _state: &AppState) -> KeyOutcome {
        match key {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                KeyOutcome::dispatch(Command::IncreaseServings)
            }
            KeyCode::Char('-') => KeyOutcome::dispatch(Command::DecreaseServings),
            KeyCode::Char('a') => KeyOutcome::dispatch(Command::AddRecipeToList),
            KeyCode::Char('f') => KeyOutcome::dispatch(Command::ToggleLike),
            _ => navigate(key).map_or_else(KeyOutcome::stay, KeyOutcome::go),
        }
    }
}

pub(crate) struct ShoppingListScreen {
    selected: usize,
}

impl ShoppingListScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Screen for ShoppingListScreen {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = match &state.list {
            Some(list) if !list.is_empty() => list
                .items()
                .enumerate()
                .map(|(i, item)| selectable_line(item.to_string(), i == self.selected))
                .collect(),
            _ => vec![Line::from("Shopping list is empty. Add a recipe with 'a'.")],
        };

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Shopping list (+/- count, d delete)"),
        );
        frame.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyCode, state: &AppState) -> KeyOutcome {
        let selected_item = state
            .list
            .as_ref()
            .and_then(|list| list.items().nth(self.selected));
        let len = state.list.as_ref().map_or(0, |list| list.len());

        match (key, selected_item) {
            (KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j'), _) => {
                self.selected = move_selection(self.selected, key, len);
                KeyOutcome::stay()
            }
            (KeyCode::Char('+') | KeyCode::Char('='), Some(item)) => KeyOutcome::dispatch(
                Command::UpdateListCount(item.id.clone(), item.count + 1.0),
            ),
            // counts never drop below one from here, delete removes an item
            (KeyCode::Char('-'), Some(item)) if item.count > 1.0 => KeyOutcome::dispatch(
                Command::UpdateListCount(item.id.clone(), (item.count - 1.0).max(1.0)),
            ),
            (KeyCode::Char('-'), Some(_)) => KeyOutcome::stay(),
            (KeyCode::Char('d') | KeyCode::Delete, Some(item)) => {
                let id = item.id.clone();
                // keep the cursor on the row that slides up
                if self.selected + 1 >= len {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyOutcome::dispatch(Command::DeleteListItem(id))
            }
            _ => navigate(key).map_or_else(KeyOutcome::stay, KeyOutcome::go),
        }
    }
}

pub(crate) struct LikesScreen {
    selected: usize,
}

impl LikesScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Screen for LikesScreen {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let likes = state.likes.likes();
        let lines: Vec<Line> = if likes.is_empty() {
            vec![Line::from("No liked recipes yet. Like a recipe with 'f'.")]
        } else {
            likes
                .iter()
                .enumerate()
                .map(|(i, like)| {
                    selectable_line(
                        format!("♥ {} - {}", limit_title(&like.title, TITLE_LIMIT), like.author),
                        i == self.selected,
                    )
                })
                .collect()
        };

        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Liked recipes ({})", state.likes.num_likes())),
        );
        frame.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyCode, state: &AppState) -> KeyOutcome {
        let likes = state.likes.likes();

        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, key, likes.len());
                KeyOutcome::stay()
            }
            KeyCode::Enter => match likes.get(self.selected) {
                Some(like) => KeyOutcome::dispatch(Command::LoadRecipe(like.id.clone()))
                    .then(Box::new(RecipeView)),
                None => KeyOutcome::stay(),
            },
            _ => navigate(key).map_or_else(KeyOutcome::stay, KeyOutcome::go),
        }
    }
}
