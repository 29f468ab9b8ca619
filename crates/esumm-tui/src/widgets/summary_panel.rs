use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};

pub struct SummaryPanelWidget;

impl SummaryPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Summary;

        let border_style = if is_focused {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let block = Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        if app.summarizing {
            let line = Line::from(vec![
                Span::styled(
                    app.spinner_char().to_string(),
                    Style::default().fg(app.theme.yellow),
                ),
                Span::styled(" Summarizing…", Style::default().fg(app.theme.grey2)),
            ]);
            frame.render_widget(Paragraph::new(line), inner_area);
            return;
        }

        if app.summary_sink.is_empty() && !app.reveal.is_revealing() {
            let hint = Paragraph::new(Line::from(Span::styled(
                "The summary appears here",
                Style::default().fg(app.theme.grey1),
            )));
            frame.render_widget(hint, inner_area);
            return;
        }

        // Revealed text plus a block cursor while the animation runs
        let mut lines: Vec<Line> = app
            .summary_sink
            .content()
            .lines()
            .map(|line| {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(app.theme.fg0),
                ))
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        if app.reveal.is_revealing() {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }

        let max_scroll = (lines.len() as u16).saturating_sub(inner_area.height);
        let scroll = app.summary_scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, inner_area);
    }
}
