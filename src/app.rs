use crate::constants::TICK_RATE_MS;
use crate::errors::{ShopchatError, ShopchatResult};
use crate::resolver::ResponseResolver;
use crate::ui::{self, status_indicator::StatusIndicator};
use crate::widget::WidgetController;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Input events fed to the main loop.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the chat widget in the terminal until the user quits.
pub async fn run_ui(resolver: ResponseResolver) -> ShopchatResult<()> {
    enable_raw_mode().map_err(|e| ShopchatError::terminal_error(format!("raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let widget = WidgetController::new(Arc::new(resolver));
    let res = run_app(&mut terminal, widget).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!("Chat widget stopped: {}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut widget: WidgetController,
) -> ShopchatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let stop = Arc::new(AtomicBool::new(false));

    // crossterm polling blocks, so it gets its own thread.
    let reader_stop = Arc::clone(&stop);
    let reader = tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        let mut last_tick = Instant::now();
        while !reader_stop.load(Ordering::Relaxed) {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.blocking_send(Event::Input(ev)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    let mut status = StatusIndicator::new();
    info!("Chat widget started");

    let result = loop {
        if let Err(e) = terminal.draw(|f| ui::draw(f, &widget, &status)) {
            break Err(ShopchatError::from(e));
        }

        tokio::select! {
            maybe_event = rx.recv() => match maybe_event {
                Some(Event::Input(CEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    widget.handle_key(key);
                }
                Some(Event::Input(_)) => {}
                Some(Event::Tick) => {
                    widget.poll_replies();
                    if widget.pending() > 0 {
                        status.update_spinner();
                    }
                }
                None => break Ok(()),
            },
            _ = widget.recv_reply() => {}
        }

        if widget.should_quit() {
            break Ok(());
        }
    };

    stop.store(true, Ordering::Relaxed);
    drop(rx);
    let _ = reader.await;
    info!(
        "Chat widget closed with {} transcript entries",
        widget.transcript().len()
    );
    result
}
