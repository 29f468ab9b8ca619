use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct StatsPanelWidget;

impl StatsPanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.grey0))
            .style(Style::default().bg(app.theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let line = match &app.summary {
            Some(info) => {
                let label = Style::default().fg(app.theme.grey2);
                let value = Style::default().fg(app.theme.fg1);
                Line::from(vec![
                    Span::styled("Sentences ", label),
                    Span::styled(
                        format!(
                            "{} → {}",
                            info.original_sentence_count, info.summarized_sentence_count
                        ),
                        value,
                    ),
                    Span::styled("  |  Words ", label),
                    Span::styled(
                        format!("{} → {}", info.original_word_count, info.summarized_word_count),
                        value,
                    ),
                    Span::styled("  |  Reduction ", label),
                    Span::styled(
                        format!("{:.2}%", info.reduction_rate * 100.0),
                        Style::default()
                            .fg(app.theme.success)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "Sentences – → –  |  Words – → –  |  Reduction –",
                Style::default().fg(app.theme.grey1),
            )),
        };

        frame.render_widget(Paragraph::new(line), inner_area);
    }
}
