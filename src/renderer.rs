use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE};
use crate::game::Snapshot;
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_pause_menu, render_start_menu};

/// Renders one full frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);
    let board = board_area(play_area, snapshot.grid_size);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::default().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    // Food first, so an overlapping body segment draws on top of it.
    if snapshot.started {
        render_food(frame, inner, snapshot, theme);
    }
    render_snake(frame, inner, snapshot, theme);

    if !snapshot.started {
        render_start_menu(frame, board, snapshot.high_score, theme);
    } else if snapshot.paused {
        render_pause_menu(frame, board, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, snapshot.grid_size, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::default().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let head = snapshot.snake.first().copied();
    let tail = snapshot.snake.last().copied();

    let buffer = frame.buffer_mut();
    for segment in &snapshot.snake {
        let Some((x, y)) = cell_to_terminal(inner, snapshot.grid_size, *segment) else {
            continue;
        };

        let style = if Some(*segment) == head {
            Style::default()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else if Some(*segment) == tail {
            Style::default().fg(theme.snake_tail)
        } else {
            Style::default().fg(theme.snake_body)
        };

        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Centers a bordered `grid_size`-square board inside `area`, clamping to
/// whatever space the terminal actually has.
fn board_area(area: Rect, grid_size: u16) -> Rect {
    let width = grid_size.saturating_add(2).min(area.width);
    let height = grid_size.saturating_add(2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Maps a 1-indexed grid cell onto terminal coordinates inside `inner`.
fn cell_to_terminal(inner: Rect, grid_size: u16, cell: Cell) -> Option<(u16, u16)> {
    if !cell.in_bounds(grid_size) {
        return None;
    }

    let x_offset = u16::try_from(cell.x - 1).ok()?;
    let y_offset = u16::try_from(cell.y - 1).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{board_area, cell_to_terminal};
    use crate::snake::Cell;

    #[test]
    fn board_is_centered_and_sized_to_the_grid() {
        let area = Rect::new(0, 0, 80, 40);
        let board = board_area(area, 20);

        // Grid plus one border cell on each side.
        assert_eq!(board.width, 22);
        assert_eq!(board.height, 22);
        assert_eq!(board.x, 29);
        assert_eq!(board.y, 9);
    }

    #[test]
    fn board_clamps_to_small_terminals() {
        let area = Rect::new(0, 0, 10, 5);
        let board = board_area(area, 20);

        assert_eq!(board.width, 10);
        assert_eq!(board.height, 5);
    }

    #[test]
    fn cells_map_one_indexed_onto_the_inner_area() {
        let inner = Rect::new(3, 2, 20, 20);

        assert_eq!(
            cell_to_terminal(inner, 20, Cell { x: 1, y: 1 }),
            Some((3, 2))
        );
        assert_eq!(
            cell_to_terminal(inner, 20, Cell { x: 20, y: 20 }),
            Some((22, 21))
        );
    }

    #[test]
    fn out_of_bounds_cells_do_not_map() {
        let inner = Rect::new(0, 0, 20, 20);

        assert_eq!(cell_to_terminal(inner, 20, Cell { x: 0, y: 5 }), None);
        assert_eq!(cell_to_terminal(inner, 20, Cell { x: 21, y: 5 }), None);
    }

    #[test]
    fn cells_outside_a_cramped_inner_area_are_skipped() {
        let inner = Rect::new(0, 0, 5, 5);

        assert_eq!(cell_to_terminal(inner, 20, Cell { x: 5, y: 5 }), Some((4, 4)));
        assert_eq!(cell_to_terminal(inner, 20, Cell { x: 6, y: 5 }), None);
    }
}
