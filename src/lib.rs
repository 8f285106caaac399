//! Classic terminal Snake on a decaying-cell board.
//!
//! The board is a fixed grid of tagged integer cells: walls and food are
//! negative codes, and snake body segments are positive countdowns that fade
//! to empty one step per tick. [`game::GameState`] owns the whole state
//! machine; keyboard input and rendering live at the edges.

pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod terminal_runtime;
