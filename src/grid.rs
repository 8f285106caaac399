use crate::config::{GLYPH_BODY, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_WALL, GridSize};
use crate::input::Direction;

/// Grid position in logical cell coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell toward `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// One board cell, tagged by its integer value.
///
/// `0` is empty, `-1` wall, `-2` food. Positive values are snake body
/// segments counting down toward empty: the number of positive cells on the
/// board is the snake's logical length, so no explicit body list exists.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cell(i32);

impl Cell {
    /// Walkable cell.
    pub const EMPTY: Self = Self(0);
    /// Border wall.
    pub const WALL: Self = Self(-1);
    /// Food waiting to be eaten.
    pub const FOOD: Self = Self(-2);

    /// Creates a body segment that survives `ticks` decay steps.
    #[must_use]
    pub fn body(ticks: i32) -> Self {
        debug_assert!(ticks > 0, "body cells must hold a positive countdown");
        Self(ticks)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_wall(self) -> bool {
        self == Self::WALL
    }

    #[must_use]
    pub fn is_food(self) -> bool {
        self == Self::FOOD
    }

    #[must_use]
    pub fn is_body(self) -> bool {
        self.0 > 0
    }

    /// Remaining decay ticks for body cells, `None` for everything else.
    #[must_use]
    pub fn body_ticks(self) -> Option<i32> {
        (self.0 > 0).then_some(self.0)
    }

    /// Returns the display glyph for this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        if self.0 > 0 {
            return GLYPH_BODY;
        }
        match self.0 {
            -1 => GLYPH_WALL,
            -2 => GLYPH_FOOD,
            _ => GLYPH_EMPTY,
        }
    }

    fn decayed(self) -> Self {
        if self.0 > 0 { Self(self.0 - 1) } else { self }
    }
}

/// Fixed-size board storage, row-major, allocated once and never resized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::EMPTY; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `position`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Writes `cell` at `position`. Writes outside the grid are dropped.
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some(index) = self.index(position) {
            self.cells[index] = cell;
        }
    }

    /// Stamps `cell` over the full border ring.
    pub fn fill_border(&mut self, cell: Cell) {
        let width = i32::from(self.size.width);
        let height = i32::from(self.size.height);

        for x in 0..width {
            self.set(Position { x, y: 0 }, cell);
            self.set(Position { x, y: height - 1 }, cell);
        }

        for y in 0..height {
            self.set(Position { x: 0, y }, cell);
            self.set(Position { x: width - 1, y }, cell);
        }
    }

    /// Decrements every body cell by one tick; other cells are untouched.
    /// A segment that reaches zero becomes empty and the tail shrinks.
    pub fn decay(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.decayed();
        }
    }

    /// Iterates all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.size.width);
        let height = i32::from(self.size.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// Returns the first cell equal to `needle` in row-major order.
    #[must_use]
    pub fn find(&self, needle: Cell) -> Option<Position> {
        self.positions()
            .find(|position| self.cell(*position) == Some(needle))
    }

    /// Returns true when `position` is not on the border ring.
    #[must_use]
    pub fn is_interior(&self, position: Position) -> bool {
        position.x > 0
            && position.y > 0
            && position.x < i32::from(self.size.width) - 1
            && position.y < i32::from(self.size.height) - 1
    }

    /// Collects the empty cells strictly inside the border ring.
    #[must_use]
    pub fn empty_interior_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|position| {
                self.is_interior(*position) && self.cell(*position) == Some(Cell::EMPTY)
            })
            .collect()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.size.width) + x)
    }
}
