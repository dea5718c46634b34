use std::io;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{GridSize, Theme, CELL_COLUMNS};
use crate::snake::Position;
use crate::snapshot::{Cell, Snapshot};
use crate::terminal_runtime::TerminalSession;

/// Consumer of per-tick snapshots.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Draws snapshots into the terminal session it owns.
pub struct TerminalRenderer {
    session: TerminalSession,
    theme: Theme,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(session: TerminalSession, theme: Theme) -> Self {
        Self { session, theme }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let theme = self.theme;
        self.session
            .terminal_mut()
            .draw(|frame| render_frame(frame, snapshot, &theme))?;
        Ok(())
    }
}

/// Renders the board and the score row from an immutable snapshot.
pub fn render_frame(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let board = board_area(frame.area(), snapshot.bounds);
    let [_, status_row, _] = Layout::vertical([
        Constraint::Length(board.height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_board(frame.buffer_mut(), inner, snapshot, theme);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {}", snapshot.score)))
            .style(Style::new().fg(theme.status_fg)),
        status_row,
    );
}

/// Paints every grid cell into `inner`, one cell per [`CELL_COLUMNS`] columns.
pub fn render_board(buffer: &mut Buffer, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    for (position, cell) in snapshot.cells() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, position) else {
            continue;
        };

        let color = match cell {
            Cell::Empty => theme.play_bg,
            Cell::Head => theme.snake_head,
            Cell::Tail => theme.snake_tail,
            Cell::Food => theme.food,
        };

        let width = CELL_COLUMNS.min(inner.right() - x);
        buffer.set_string(
            x,
            y,
            " ".repeat(usize::from(width)),
            Style::new().bg(color),
        );
    }
}

/// Returns the bordered square viewport for `bounds`, clipped to `area`.
#[must_use]
pub fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x,
        y: area.y,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
