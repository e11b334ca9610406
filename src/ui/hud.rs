use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Difficulty;
use crate::game::GameSnapshot;
use crate::input::SpeedModifier;

/// Host-side values shown next to the snapshot data.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub difficulty: Difficulty,
    pub speed_modifier: SpeedModifier,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &GameSnapshot,
    info: &HudInfo,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(snapshot, info))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        status_area,
    );

    play_area
}

fn status_line(snapshot: &GameSnapshot, info: &HudInfo) -> Line<'static> {
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("Score ", muted),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled(" | Length ", muted),
        Span::styled(snapshot.snake_segments.len().to_string(), value),
        Span::styled(" | ", muted),
        Span::styled(info.difficulty.label(), value),
        Span::styled(speed_label(info.speed_modifier), muted),
        Span::styled(
            format!(" | {}x{} ", snapshot.grid.width, snapshot.grid.height),
            muted,
        ),
    ])
}

fn speed_label(modifier: SpeedModifier) -> &'static str {
    match modifier {
        SpeedModifier::None => "",
        SpeedModifier::Faster => " (fast)",
        SpeedModifier::Slower => " (slow)",
    }
}
