use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{info, warn};

use signboard::app::App;
use signboard::cli::{parse_args, run_cli_command, run_static_command};
use signboard::config::SignboardConfig;
use signboard::dispatch::Viewport;
use signboard::query::QueryClient;
use signboard::terminal::{setup_panic_hook, TerminalManager};
use signboard::{logging, ui};

/// Frame tick; drives the spinner while a question is pending
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_static_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = SignboardConfig::from_env()?;

    // Logging failures must not stop the app; there is nowhere to report them
    // once the TUI owns the screen
    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(version = signboard::cli::VERSION, ?command, "Starting signboard");

    let runtime = tokio::runtime::Runtime::new()?;

    if let Some(result) = run_cli_command(&command, &config, &runtime) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if config.query.api_key.is_empty() {
        warn!("No API key configured; assistant questions will be rejected");
    }
    let client = QueryClient::from_config(config.query.clone())?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    let mut app = App::new(client, Viewport::new(size.width, size.height))?;

    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    manager.restore();
    info!("Signboard exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => app.update_viewport(width, height),
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            app.handle_pointer(mouse.column, mouse.row);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                    // Input closed, nothing more can happen
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
