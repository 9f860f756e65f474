use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

#[cfg(test)]
mod test_support;

use actions::{Action, GlobalAction, ListAction};
use admin_client::{AdminClient, HttpAdminClient, Resource};
use admin_config::{AppConfig, FileSession, SessionContext};
use middleware::{
    amenity_form_middleware::AmenityFormMiddleware, api_middleware::ApiMiddleware,
    entity_list_middleware::EntityListMiddleware, gated_action_middleware::GatedActionMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    view_translation_middleware::ViewTranslationMiddleware,
};
use state::AppState;
use store::Store;

/// Assemble the store with the full middleware chain
fn build_store(state: AppState, client: Arc<dyn AdminClient>) -> io::Result<Store> {
    let mut store = Store::new(state);

    // Middleware executes in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(ViewTranslationMiddleware::new()));
    store.add_middleware(Box::new(GatedActionMiddleware::new()));
    store.add_middleware(Box::new(EntityListMiddleware::new()));
    store.add_middleware(Box::new(AmenityFormMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(client)?));

    Ok(store)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_file = logger::init().context("Failed to initialize logging")?;
    log::info!("Starting listing-admin, logging to {}", log_file.display());

    let config = AppConfig::load();
    let session: Arc<dyn SessionContext> = Arc::new(FileSession::load());
    let user = session.user();
    if user.is_none() {
        log::warn!("No signed-in user, requests will fail until a session token is set");
    }

    let client = HttpAdminClient::new(&config, Arc::clone(&session))
        .context("Failed to create the API client")?;
    let mut store = build_store(AppState::new(config, user), Arc::new(client))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::List(ListAction::Mount(Resource::default())));

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
    }

    log::info!("Exiting listing-admin");
    result.context("Terminal error")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Pick up results of background API calls
        store.process_pending();
    }

    Ok(())
}
