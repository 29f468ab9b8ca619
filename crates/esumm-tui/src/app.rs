use std::sync::Arc;

use esumm_core::{AppConfig, SummaryInfo};

use crate::reveal::{BufferSink, RevealController};
use crate::theme::Theme;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Current focus panel in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Summary,
    Ranks,
    Graph,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Text entry into the input panel
    Editing,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active theme
    pub theme: Theme,
    /// Text to be summarized
    pub input: String,
    /// Last summarization result
    pub summary: Option<SummaryInfo>,
    /// Reveal controller for the summary text
    pub reveal: RevealController,
    /// Sink the summary is revealed into
    pub summary_sink: BufferSink,
    /// Current focus panel
    pub focus: Focus,
    /// Current application mode
    pub mode: Mode,
    /// Scroll offset for the summary panel
    pub summary_scroll: u16,
    /// Scroll offset for the ranking list
    pub rank_scroll: u16,
    /// Whether a summarize request is in flight
    pub summarizing: bool,
    /// Spinner frame for the loading indicator
    pub spinner_frame: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Error to show as a popup (dismissed with any key)
    pub error_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let reveal = RevealController::new(config.ui.reveal.clone());
        Self {
            config,
            theme: Theme::default(),
            input: String::new(),
            summary: None,
            reveal,
            summary_sink: BufferSink::new(),
            focus: Focus::Input,
            mode: Mode::Editing,
            summary_scroll: 0,
            rank_scroll: 0,
            summarizing: false,
            spinner_frame: 0,
            status_message: None,
            error_message: None,
            should_quit: false,
        }
    }

    /// Number of words currently in the input
    pub fn input_word_count(&self) -> usize {
        self.input.split_whitespace().count()
    }

    /// Validate the input and hand back the text to summarize.
    ///
    /// Empty or whitespace-only input never reaches the summarizer; the user
    /// is notified and `None` is returned.
    pub fn begin_summarize(&mut self) -> Option<String> {
        if self.summarizing {
            self.set_status("Summarization already in progress");
            return None;
        }
        if self.input.trim().is_empty() {
            self.set_status("Please enter some text to summarize.");
            return None;
        }

        self.summarizing = true;
        self.set_status("Summarizing…");
        Some(self.input.clone())
    }

    /// Store a finished summary and start revealing its text
    pub fn apply_summary(&mut self, info: SummaryInfo) {
        self.summarizing = false;
        self.summary_scroll = 0;
        self.rank_scroll = 0;
        self.clear_status();

        tracing::debug!(
            "Applying summary: {} of {} sentences",
            info.summarized_sentence_count,
            info.original_sentence_count
        );
        self.reveal.start(&info.summarized_text, &mut self.summary_sink);
        self.summary = Some(info);
    }

    /// Record a failed summarize request. The reveal controller is never
    /// touched for a failed response.
    pub fn summarize_failed(&mut self, message: impl Into<String>) {
        self.summarizing = false;
        self.clear_status();
        self.error_message = Some(message.into());
    }

    /// Clear input, summary, statistics, and any running reveal
    pub fn clear_all(&mut self) {
        self.reveal.cancel();
        self.summary_sink.clear();
        self.input.clear();
        self.summary = None;
        self.summary_scroll = 0;
        self.rank_scroll = 0;
        self.clear_status();
    }

    /// Move focus to the next panel
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Summary,
            Focus::Summary => Focus::Ranks,
            Focus::Ranks => Focus::Graph,
            Focus::Graph => Focus::Input,
        };
    }

    /// Move focus to the previous panel
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Graph,
            Focus::Summary => Focus::Input,
            Focus::Ranks => Focus::Summary,
            Focus::Graph => Focus::Ranks,
        };
    }

    /// Scroll the focused panel down one line
    pub fn scroll_down(&mut self) {
        match self.focus {
            Focus::Summary => self.summary_scroll = self.summary_scroll.saturating_add(1),
            Focus::Ranks => self.rank_scroll = self.rank_scroll.saturating_add(1),
            _ => {}
        }
    }

    /// Scroll the focused panel up one line
    pub fn scroll_up(&mut self) {
        match self.focus {
            Focus::Summary => self.summary_scroll = self.summary_scroll.saturating_sub(1),
            Focus::Ranks => self.rank_scroll = self.rank_scroll.saturating_sub(1),
            _ => {}
        }
    }

    /// Jump the focused panel to the top
    pub fn jump_to_top(&mut self) {
        match self.focus {
            Focus::Summary => self.summary_scroll = 0,
            Focus::Ranks => self.rank_scroll = 0,
            _ => {}
        }
    }

    /// Jump the focused panel to the bottom (clamped during rendering)
    pub fn jump_to_bottom(&mut self) {
        match self.focus {
            Focus::Summary => self.summary_scroll = u16::MAX,
            Focus::Ranks => self.rank_scroll = u16::MAX,
            _ => {}
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Advance the loading spinner
    pub fn tick_spinner(&mut self) {
        if self.summarizing {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// Check if we're in a mode that accepts text input
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }
}
