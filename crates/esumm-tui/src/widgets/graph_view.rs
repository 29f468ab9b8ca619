use std::f64::consts::TAU;

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::app::{App, Focus};

pub struct GraphViewWidget;

impl GraphViewWidget {
    /// Render the sentence similarity graph.
    ///
    /// Nodes are placed on a static circle (no force simulation); edge
    /// endpoints index into the same layout. Node color and radius encode
    /// the sentence rank.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let is_focused = app.focus == Focus::Graph;

        let border_style = if is_focused {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };

        let block = Block::default()
            .title(" Similarity Graph ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0));

        let Some(info) = &app.summary else {
            let inner_area = block.inner(area);
            frame.render_widget(block, area);
            let hint = Paragraph::new(Line::from(Span::styled(
                "Graph appears after summarizing",
                Style::default().fg(app.theme.grey1),
            )));
            frame.render_widget(hint, inner_area);
            return;
        };

        let n = info.graph_nodes.len();
        if n == 0 {
            frame.render_widget(block, area);
            return;
        }

        let positions: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let angle = TAU * i as f64 / n as f64;
                (angle.cos(), angle.sin())
            })
            .collect();

        let max_rank = info
            .graph_nodes
            .iter()
            .map(|node| node.rank)
            .fold(f64::EPSILON, f64::max);

        let theme = app.theme.clone();
        let nodes = info.graph_nodes.clone();
        let links = info.graph_links.clone();

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds([-1.4, 1.4])
            .y_bounds([-1.4, 1.4])
            .paint(move |ctx| {
                // Undirected edges arrive in both directions; draw each once
                for link in links.iter().filter(|link| link.source < link.target) {
                    // Ids are 1-based; ignore out-of-range ids from remote data
                    let (Some(&(x1, y1)), Some(&(x2, y2))) = (
                        link.source.checked_sub(1).and_then(|i| positions.get(i)),
                        link.target.checked_sub(1).and_then(|i| positions.get(i)),
                    ) else {
                        continue;
                    };
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: theme.grey0,
                    });
                }

                ctx.layer();

                for (node, &(x, y)) in nodes.iter().zip(&positions) {
                    let normalized = node.rank / max_rank;
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: 0.06 + 0.10 * normalized,
                        color: theme.rank_color(normalized),
                    });
                    ctx.print(
                        x * 1.22,
                        y * 1.22,
                        Line::from(Span::styled(
                            node.id.to_string(),
                            Style::default().fg(theme.grey2),
                        )),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
