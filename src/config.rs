use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
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

/// Board width in cells, fixed for the lifetime of the process.
pub const GRID_WIDTH: u16 = 20;

/// Board height in cells.
pub const GRID_HEIGHT: u16 = 20;

/// Starting score; also sets how long the starting tail persists.
pub const INITIAL_SCORE: i32 = 4;

/// Rejection-sampling attempts before food placement falls back to an
/// exhaustive scan of the board.
pub const FOOD_SPAWN_MAX_ATTEMPTS: u32 = 1_000;

/// Milliseconds between game ticks.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Snake body glyph.
pub const GLYPH_BODY: char = 'o';

/// Wall glyph.
pub const GLYPH_WALL: char = 'X';

/// Food glyph.
pub const GLYPH_FOOD: char = 'O';

/// Empty-cell glyph.
pub const GLYPH_EMPTY: char = ' ';

/// Printed after every cell glyph, making each cell two columns wide.
pub const CELL_SEPARATOR: char = ' ';

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Color for snake body cells.
    pub snake_body: Color,
    /// Color for the border walls.
    pub wall: Color,
    /// Color for the food cell.
    pub food: Color,
    pub overlay_title: Color,
    pub overlay_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_body: Color::Green,
    wall: Color::DarkGray,
    food: Color::Red,
    overlay_title: Color::Green,
    overlay_footer: Color::DarkGray,
};
