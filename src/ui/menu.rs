use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

/// Draws a one-line message in a bordered box centred on `area`.
pub fn render_banner(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    let popup = banner_area(area, message);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(Line::from(message.to_owned()))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.banner_fg)
                    .bg(theme.play_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered().border_style(Style::default().fg(theme.border_fg))),
        popup,
    );
}

/// Box sized to the message's display width plus border and padding,
/// clamped to `area`.
fn banner_area(area: Rect, message: &str) -> Rect {
    let text_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).min(area.width);
    let height = 3.min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    center
}
