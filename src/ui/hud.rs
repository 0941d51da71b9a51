use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::Snapshot;

/// Renders the one-line score row and returns the play area above it.
///
/// Scores are zero-padded to three digits so the row keeps a stable width as
/// the run progresses.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::default().fg(theme.hud_label);
    let value = Style::default().fg(theme.hud_score);

    let line = Line::from(vec![
        Span::styled("score ", label),
        Span::styled(format!("{:03}", snapshot.score), value),
        Span::raw("   "),
        Span::styled("hi ", label),
        Span::styled(format!("{:03}", snapshot.high_score), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        score_area,
    );

    play_area
}
