use pixora::app::{App, AppMessage};
use pixora::cli::{parse_args, run_cli_command, USAGE};
use pixora::client::PixoraClient;
use pixora::config::ExplorerConfig;
use pixora::logging;
use pixora::terminal::{setup_panic_hook, TerminalManager};
use pixora::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Tick interval for the spinner.
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("pixora: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = options.apply(ExplorerConfig::load()?);
    logging::init(&ExplorerConfig::log_path(), &config.log_filter)?;
    tracing::info!(api = %config.api_base_url, asset = %config.asset_base(), "configuration loaded");

    let client = PixoraClient::from_config(&config).wrap_err("failed to build HTTP client")?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term_manager = TerminalManager::new().wrap_err("failed to initialize terminal")?;

    let mut app = App::new(Arc::new(client), config);
    let size = term_manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore()?;
    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
    }
    tracing::info!("pixora exiting");
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

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = app
        .message_rx
        .take()
        .ok_or_else(|| color_eyre::eyre::eyre!("message receiver already taken"))?;

    let mut ticker = tokio::time::interval(TICK);
    app.start();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
