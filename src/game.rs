use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::{FOOD_SPAWN_MAX_ATTEMPTS, GridSize, INITIAL_SCORE};
use crate::grid::{Cell, Grid, Position};
use crate::input::{Direction, direction_change_is_valid};

/// Current high-level gameplay state. The transition to `GameOver` is
/// one-way; there is no pause or resume.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Fatal board-construction failures.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GameError {
    #[error("grid {width}x{height} is too small to hold a border and an interior")]
    GridTooSmall { width: u16, height: u16 },
    #[error("no empty interior cell is available for food")]
    NoRoomForFood,
}

/// Complete mutable game state for one session.
///
/// The board is the single source of truth for the snake: body segments are
/// positive cells counting down to empty, so the tail end is wherever the
/// oldest cells expire next. Only the head position is tracked explicitly.
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: i32,
    pub status: GameStatus,
    grid: Grid,
    head: Position,
    direction: Direction,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    pub fn new(size: GridSize) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    pub fn new_with_seed(size: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        if size.width < 3 || size.height < 3 {
            return Err(GameError::GridTooSmall {
                width: size.width,
                height: size.height,
            });
        }

        let mut grid = Grid::new(size);
        let head = Position {
            x: i32::from(size.width / 2),
            y: i32::from(size.height / 2),
        };
        grid.set(head, Cell::body(1));
        grid.fill_border(Cell::WALL);

        let food = spawn_position(&mut rng, &grid).ok_or(GameError::NoRoomForFood)?;
        grid.set(food, Cell::FOOD);

        Ok(Self {
            score: INITIAL_SCORE,
            status: GameStatus::Playing,
            grid,
            head,
            direction: Direction::Right,
            rng,
        })
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let target = self.head.step(self.direction);
        // Cells outside the grid collide like walls; unreachable while the
        // border ring stands.
        let cell = self.grid.cell(target).unwrap_or(Cell::WALL);

        if cell.is_food() {
            self.score += 1;
            self.head = target;
            self.grid.set(target, Cell::body(self.score));
            self.respawn_food();
        } else if !cell.is_empty() {
            self.status = GameStatus::GameOver;
            // The head still lands on the obstacle and paints its marker
            // there, so the final frame shows where the snake died.
            self.head = target;
            self.grid.set(target, Cell::body(self.score + 1));
        } else {
            self.head = target;
            self.grid.set(target, Cell::body(self.score + 1));
        }

        // The decay pass runs after the paint and therefore also decrements
        // the fresh head cell: a segment's effective lifetime is one tick
        // shorter than the value painted. Known off-by-one, kept as-is.
        self.grid.decay();
    }

    /// Points the snake toward `requested` unless that reverses the current
    /// direction, which would drive the head straight into its own neck.
    pub fn set_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.direction = requested;
        }
    }

    /// Returns false once a collision has ended the game.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Read-only cell view for rendering. `None` outside the grid.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<Cell> {
        self.grid.cell(position)
    }

    #[must_use]
    pub fn dimensions(&self) -> GridSize {
        self.grid.size()
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the food to `position`, clearing any previous food cell.
    pub fn place_food(&mut self, position: Position) {
        if let Some(previous) = self.grid.find(Cell::FOOD) {
            self.grid.set(previous, Cell::EMPTY);
        }
        self.grid.set(position, Cell::FOOD);
    }

    fn respawn_food(&mut self) {
        // A fully occupied interior leaves the board foodless; the snake is
        // boxed in at that point and a collision is at most a few ticks away.
        if let Some(position) = spawn_position(&mut self.rng, &self.grid) {
            self.place_food(position);
        }
    }
}

/// Picks a uniformly random empty interior cell.
///
/// Rejection-samples first, then falls back to an exhaustive scan on crowded
/// boards. Returns `None` when no empty interior cell exists.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    let size = grid.size();

    for _ in 0..FOOD_SPAWN_MAX_ATTEMPTS {
        let position = Position {
            x: rng.gen_range(1..i32::from(size.width) - 1),
            y: rng.gen_range(1..i32::from(size.height) - 1),
        };
        if grid.cell(position) == Some(Cell::EMPTY) {
            return Some(position);
        }
    }

    let candidates = grid.empty_interior_cells();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}
