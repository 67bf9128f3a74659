use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::error::AppError;
use crate::game::Snapshot;
use crate::game_loop::LoopPhase;
use crate::input::Direction;
use crate::snake::Position;
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Presentation collaborator: anything that can draw one frame of game state.
///
/// The core only ever hands out a [`Snapshot`]; what the pixels (or cells)
/// look like is entirely the renderer's business.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>, phase: LoopPhase) -> Result<(), AppError>;
}

/// Ratatui-backed renderer owning the terminal session.
pub struct TerminalRenderer {
    session: TerminalSession,
    theme: &'static Theme,
}

impl TerminalRenderer {
    /// Enters the terminal session with the given theme.
    pub fn new(theme: &'static Theme) -> Result<Self, AppError> {
        Ok(Self {
            session: TerminalSession::enter()?,
            theme,
        })
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>, phase: LoopPhase) -> Result<(), AppError> {
        let theme = self.theme;
        self.session
            .terminal_mut()
            .draw(|frame| render(frame, snapshot, phase, theme))?;
        Ok(())
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, phase: LoopPhase, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);
    let field = field_rect(play_area, snapshot.bounds);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg));

    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    match phase {
        LoopPhase::NotStarted => render_start_menu(frame, field, theme),
        LoopPhase::GameOver => render_game_over_menu(frame, field, snapshot.score, theme),
        LoopPhase::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>, theme: &Theme) {
    let head = snapshot.snake.head();
    let tail = snapshot.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in snapshot.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(snapshot.snake.direction());
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered playing field inside the available area.
fn field_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
