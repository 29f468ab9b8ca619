use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Editing => "EDIT",
            Mode::Help => "HELP",
        };

        let focus_str = match app.focus {
            Focus::Input => "Input",
            Focus::Summary => "Summary",
            Focus::Ranks => "Ranks",
            Focus::Graph => "Graph",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | Words: {}",
                mode_str,
                focus_str,
                app.input_word_count()
            )
        };

        let help_hint = format!(" ?:help q:quit | esumm © {} ", Local::now().year());
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.chars().count() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
