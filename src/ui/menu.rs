use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::EndReason;
use crate::scheduler::GameSummary;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let hint = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from("PAUSED").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[N] Restart"),
        Line::from("[Q] Quit"),
        Line::from(""),
        Line::from("Arrows/WASD move").style(hint),
        Line::from("Hold [F] faster, [L] slower").style(hint),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the end-of-game screen with the final score.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, summary: GameSummary) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(headline(summary.reason)),
        Line::from(""),
        Line::from(format!("Score: {}", summary.score)),
        Line::from(format!("Length: {}", summary.length)),
        Line::from(cause(summary.reason)),
        Line::from(""),
        Line::from("[N] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn headline(reason: EndReason) -> &'static str {
    match reason {
        EndReason::BoardFull => "YOU WIN",
        EndReason::Wall | EndReason::SelfCollision => "GAME OVER",
    }
}

fn cause(reason: EndReason) -> &'static str {
    match reason {
        EndReason::Wall => "Cause: hit wall",
        EndReason::SelfCollision => "Cause: hit yourself",
        EndReason::BoardFull => "The board is full",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
