use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use xpost_core::{content::PageLoader, AppConfig, Post};
use xpost_tui::{
    app::{App, Effect},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    ui,
};

pub async fn run(config: Arc<AppConfig>, posts: Vec<Post>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);
    let loader = PageLoader::new(&config.content)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("xpost"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &config, posts, &keymap, &loader).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    posts: Vec<Post>,
    keymap: &Keymap,
    loader: &PageLoader,
) -> Result<()> {
    let mut app = App::new(config.clone(), posts);
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.animation.animation_fps);

    // Checked at the end of each iteration to pick the next tick rate
    let mut needs_fast_update = false;

    tracing::info!("Started with {} posts", app.posts.len());

    loop {
        // Loader events for the current session (non-blocking)
        app.poll_content_events();
        app.update_frame(Instant::now());

        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, keymap);
                    let effect = app.handle_action(action);
                    perform(&mut app, effect, loader);
                }
                AppEvent::Resize(width, height) => app.resize(width, height),
                AppEvent::Scroll(lines) => app.scroll_wheel(lines),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_animation();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Exiting");
    Ok(())
}

/// Carry out the side effect requested by an action
fn perform(app: &mut App, effect: Effect, loader: &PageLoader) {
    match effect {
        Effect::None => {}
        Effect::Load { url, sink } => {
            let loader = loader.clone();
            tokio::spawn(async move {
                loader.load(url, sink).await;
            });
        }
        Effect::OpenInBrowser(url) => {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open {} in browser: {}", url, e);
                app.set_status(format!("Could not open browser: {}", e));
            }
        }
    }
}
