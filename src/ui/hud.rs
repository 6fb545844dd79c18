use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Rows reserved above the play area.
pub const HUD_HEIGHT: u16 = 1;

/// Renders the centred score line.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(score_line(score, theme)).alignment(Alignment::Center),
        area,
    );
}

fn score_line(score: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
