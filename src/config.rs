use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces an anonymous `(u16, u16)` tuple, making width vs. height
/// unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Playing field width in cells.
pub const GRID_WIDTH: u16 = 30;

/// Playing field height in cells.
pub const GRID_HEIGHT: u16 = 20;

/// Default grid bounds for a standard session.
pub const GRID_BOUNDS: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Tick interval at game start; the slowest the game ever runs.
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Floor for the tick interval; the speed ramp never goes below this.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Amount the tick interval shrinks each time food is eaten.
pub const TICK_INTERVAL_DECREMENT: Duration = Duration::from_millis(5);

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All built-in themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_NEON];

/// Looks up a built-in theme by name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
