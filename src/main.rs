use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use forkful::{
    client::ForkifyClient,
    config::Config,
    controllers::{AppState, dispatch},
    logging, storage,
    tui::app::{AppAction, RecipeApp},
};
use ratatui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init(&config.log_file)
        .with_context(|| format!("Failed to open log file '{}'", config.log_file))?;
    tracing::info!(?config, "starting forkful");

    let pool = storage::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database '{}'", config.database_url))?;

    // Restore liked recipes before the first frame
    let mut state = AppState::restore(pool)
        .await
        .context("Failed to restore liked recipes")?;
    let api = ForkifyClient::new(&config.api_base_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = RecipeApp::new();

    // Main loop
    let result: anyhow::Result<()> = async {
        loop {
            terminal.draw(|f| app.render(&state, f))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key.code, &state) {
                AppAction::Continue => {}
                AppAction::Dispatch(command) => {
                    if command.needs_network() {
                        state.loading = true;
                        terminal.draw(|f| app.render(&state, f))?;
                    }
                    dispatch(&mut state, &api, command).await;
                    state.loading = false;
                }
                AppAction::Exit => break Ok(()),
            }
        }
    }
    .await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    tracing::info!(likes = state.likes.num_likes(), "exiting");
    result
}
