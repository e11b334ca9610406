use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::game::{GameSnapshot, GameStatus};
use crate::scheduler::GameSummary;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Terminal columns used for one grid cell, keeping cells roughly square.
pub const CELL_COLUMNS: u16 = 2;

const GLYPH_CELL: &str = "██";
const GLYPH_FOOD: &str = "()";

const SNAKE_HEAD: Color = Color::Rgb(0xff, 0xb7, 0x00);
const SNAKE_BODY: Color = Color::Rgb(0xff, 0xe6, 0x00);
const FOOD: Color = Color::Red;

/// Renders the full game frame from a snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &GameSnapshot,
    hud_info: &HudInfo,
    summary: Option<GameSummary>,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);

    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match (snapshot.status, summary) {
        (GameStatus::Stopped, Some(summary)) => render_game_over_menu(frame, play_area, summary),
        (GameStatus::Paused, _) => render_pause_menu(frame, play_area),
        _ => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &GameSnapshot) {
    let Some(food) = snapshot.food_position else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &GameSnapshot) {
    let head_index = snapshot.snake_segments.len().saturating_sub(1);
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.snake_segments.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let style = if index == head_index {
            Style::new().fg(SNAKE_HEAD).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(SNAKE_BODY)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a grid cell to its top-left terminal cell inside `inner`.
///
/// Returns `None` for cells off the grid or outside the visible area.
#[must_use]
pub fn logical_to_terminal(
    inner: Rect,
    bounds: GridSize,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
