use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use esumm_core::{AppConfig, Summarizer};
use esumm_tui::{
    app::{App, Focus, Mode},
    event::{AppEvent, EventHandler, SummarizeResult},
    input::{handle_key_event, Action},
    widgets::{
        GraphViewWidget, InputPanelWidget, PopupWidget, RankListWidget, StatsPanelWidget,
        StatusBarWidget, SummaryPanelWidget,
    },
};

/// The message shown for any failed summarize request
const SUMMARIZE_ERROR_MESSAGE: &str =
    "An error occurred while summarizing the text. Please try again.";

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let summarizer = Arc::new(Summarizer::new(&config)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("esumm"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone());

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.reveal.animation_fps);

    // Channel for async summarize results
    let (tx, mut rx) = mpsc::unbounded_channel::<SummarizeResult>();

    // Track if we need high frame rate for the reveal animation.
    // This is checked at the END of each iteration to determine the NEXT
    // iteration's tick rate.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Process any completed summarize requests (non-blocking)
        while let Ok(result) = rx.try_recv() {
            match result {
                SummarizeResult::Success(info) => app.apply_summary(*info),
                SummarizeResult::Failure { error } => app.summarize_failed(error),
            }
        }

        // Advance due reveal steps
        app.reveal.tick(&mut app.summary_sink);

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // Two-column layout: input | results
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(main_layout[0]);

            // Results column: summary, statistics, ranks + graph
            let results = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(38),
                    Constraint::Length(3),
                    Constraint::Min(5),
                ])
                .split(columns[1]);

            let bottom = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Min(20)])
                .split(results[2]);

            InputPanelWidget::render(frame, columns[0], &app);
            SummaryPanelWidget::render(frame, results[0], &app);
            StatsPanelWidget::render(frame, results[1], &app);
            RankListWidget::render(frame, bottom[0], &app);
            GraphViewWidget::render(frame, bottom[1], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);

            // Overlays on top
            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &app.theme);
            }
            if let Some(message) = &app.error_message {
                PopupWidget::render_error(frame, message, &app.theme);
            }
        })?;

        // Handle events (use faster tick rate while the reveal animates)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, &summarizer, &tx);
                }
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {
                    app.tick_spinner();
                }
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.reveal.needs_update();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Apply an input action to the app state
fn handle_action(
    app: &mut App,
    action: Action,
    summarizer: &Arc<Summarizer>,
    tx: &mpsc::UnboundedSender<SummarizeResult>,
) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Submit => submit(app, summarizer, tx),
        Action::ClearAll => app.clear_all(),
        Action::EnterEditing => {
            app.focus = Focus::Input;
            app.mode = Mode::Editing;
        }
        Action::ExitEditing | Action::ExitMode => app.mode = Mode::Normal,
        Action::InputChar(c) => app.input.push(c),
        Action::InputNewline => app.input.push('\n'),
        Action::Backspace => {
            app.input.pop();
        }
        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::MoveDown => app.scroll_down(),
        Action::MoveUp => app.scroll_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::ToggleHelp => {
            app.mode = if app.mode == Mode::Help {
                Mode::Normal
            } else {
                Mode::Help
            };
        }
        Action::DismissError => app.error_message = None,
        Action::None => {}
    }
}

/// Validate the input and run summarization on a background task
fn submit(app: &mut App, summarizer: &Arc<Summarizer>, tx: &mpsc::UnboundedSender<SummarizeResult>) {
    let Some(text) = app.begin_summarize() else {
        return;
    };
    app.mode = Mode::Normal;

    let summarizer = summarizer.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = match summarizer.summarize(&text).await {
            Ok(info) => SummarizeResult::Success(Box::new(info)),
            Err(e) => {
                tracing::error!("Summarization failed: {}", e);
                SummarizeResult::Failure {
                    error: SUMMARIZE_ERROR_MESSAGE.to_string(),
                }
            }
        };
        let _ = tx.send(result);
    });
}
