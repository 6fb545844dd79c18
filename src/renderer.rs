use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    PlayField, Theme, BORDER_HALF_BLOCK, GLYPH_HALF_UPPER, PLAY_FIELD, START_HINT, THEME,
};
use crate::food::FoodColor;
use crate::game::{Phase, SessionView};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HUD_HEIGHT};
use crate::ui::menu::render_banner;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: &SessionView<'_>) {
    let theme = &THEME;
    let (hud_area, play_area) = layout(frame.area(), PLAY_FIELD);

    render_hud(frame, hud_area, view.score, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_field(frame, inner, view, theme);

    match (view.status_message, view.phase) {
        (Some(message), _) => render_banner(frame, inner, message, theme),
        (None, Phase::Idle) => render_banner(frame, inner, START_HINT, theme),
        _ => {}
    }
}

/// Splits the terminal into the HUD row and the bordered play area, centred.
fn layout(area: Rect, field: PlayField) -> (Rect, Rect) {
    let width = field.side() + 2;
    let height = field.side().div_ceil(2) + 2;

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [hud, play] = Layout::vertical([Constraint::Length(HUD_HEIGHT), Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    (hud, play)
}

/// Paints the field with half blocks: each terminal row shows two grid rows.
fn render_field(frame: &mut Frame<'_>, inner: Rect, view: &SessionView<'_>, theme: &Theme) {
    let side = usize::from(PLAY_FIELD.side());
    let mut colors = vec![theme.play_bg; side * side];

    if let Some(index) = cell_index(PLAY_FIELD, view.food.position) {
        colors[index] = food_color(view.food.variant.color());
    }

    // Tail first so the head wins when segments overlap.
    for segment in view.segments().collect::<Vec<_>>().into_iter().rev() {
        let Some(index) = cell_index(PLAY_FIELD, segment.position) else {
            continue;
        };
        colors[index] = if segment.is_head {
            theme.snake_head
        } else {
            theme.snake_body
        };
    }

    let buffer = frame.buffer_mut();
    for (pair, rows) in colors.chunks(side * 2).enumerate() {
        let (upper, lower) = rows.split_at(side.min(rows.len()));
        let Ok(dy) = u16::try_from(pair) else {
            break;
        };
        let y = inner.y.saturating_add(dy);
        if y >= inner.bottom() {
            break;
        }

        for (column, top) in upper.iter().enumerate() {
            let Ok(dx) = u16::try_from(column) else {
                break;
            };
            let x = inner.x.saturating_add(dx);
            if x >= inner.right() {
                break;
            }

            let bottom = lower.get(column).copied().unwrap_or(theme.border_bg);
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(GLYPH_HALF_UPPER).set_fg(*top).set_bg(bottom);
            }
        }
    }
}

/// Row-major index with the top grid row first; `None` off the field.
fn cell_index(field: PlayField, position: Position) -> Option<usize> {
    if !field.contains(position) {
        return None;
    }

    let column = usize::try_from(position.x + field.half_extent).ok()?;
    let row = usize::try_from(field.half_extent - position.y).ok()?;
    Some(row * usize::from(field.side()) + column)
}

fn food_color(color: FoodColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
