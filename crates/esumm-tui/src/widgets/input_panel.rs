use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, Mode};

pub struct InputPanelWidget;

impl InputPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Input;
        let is_editing = app.mode == Mode::Editing;

        let border_style = if is_editing {
            Style::default().fg(app.theme.yellow)
        } else if is_focused {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let title = format!(" Input ({} words) ", app.input_word_count());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        if app.input.is_empty() && !is_editing {
            lines.push(Line::from(Span::styled(
                "Press i to enter text, s to summarize",
                Style::default().fg(app.theme.grey1),
            )));
        } else {
            for line in app.input.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(app.theme.fg0),
                )));
            }
            // A trailing newline still deserves a visible cursor row
            if app.input.ends_with('\n') || app.input.is_empty() {
                lines.push(Line::from(""));
            }
            if is_editing {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled(
                        "▏",
                        Style::default()
                            .fg(app.theme.yellow)
                            .add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
            }
        }

        let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner_area);
    }
}
