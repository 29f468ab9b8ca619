use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

pub struct RankListWidget;

impl RankListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Ranks;

        let border_style = if is_focused {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let block = Block::default()
            .title(" Sentence Ranks ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let Some(info) = &app.summary else {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Ranking appears after summarizing",
                Style::default().fg(app.theme.grey1),
            )));
            frame.render_widget(hint, inner_area);
            return;
        };

        let max_rank = info
            .sentence_ranks
            .first()
            .map(|r| r.rank)
            .unwrap_or(0.0)
            .max(f64::EPSILON);

        let lines: Vec<Line> = info
            .sentence_ranks
            .iter()
            .enumerate()
            .map(|(index, sentence_rank)| {
                let percentage = sentence_rank.rank * 100.0;
                let prefix = format!("{:>2}) {:>6.2}% : ", index + 1, percentage);
                let available = (inner_area.width as usize).saturating_sub(prefix.width());
                let sentence = truncate_str(&sentence_rank.sentence, available);

                Line::from(vec![
                    Span::styled(
                        prefix,
                        Style::default()
                            .fg(app.theme.rank_color(sentence_rank.rank / max_rank))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(sentence, Style::default().fg(app.theme.fg0)),
                ])
            })
            .collect();

        let max_scroll = (lines.len() as u16).saturating_sub(inner_area.height);
        let scroll = app.rank_scroll.min(max_scroll);

        let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
        frame.render_widget(paragraph, inner_area);
    }
}

/// Truncate a string to max display width with ellipsis
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        let truncated = truncate_str("a very long sentence indeed", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('…'));
    }
}
