use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::Snapshot;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot<'_>,
    theme: &Theme,
) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!("Score: {}", snapshot.score),
            Style::new()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Length: {}", snapshot.snake.len()),
            Style::new().fg(theme.hud_muted),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Tick: {} ms", snapshot.tick_interval.as_millis()),
            Style::new().fg(theme.hud_muted),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        score_area,
    );

    play_area
}
