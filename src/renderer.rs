use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{CELL_SEPARATOR, Theme};
use crate::game::{GameState, GameStatus};
use crate::grid::{Cell, Position};

const GAME_OVER_TITLE: &str = "Game Over!";
const EXIT_PROMPT: &str = "Press any key to exit";

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let board = board_area(area, state);
    frame.render_widget(board_paragraph(state, theme), board);

    if state.status == GameStatus::GameOver {
        render_game_over(frame, area, state.score, theme);
    }
}

/// Centers the board in `area`. Each cell is two terminal columns wide
/// (glyph plus separator), so the board is twice as wide as it is tall.
fn board_area(area: Rect, state: &GameState) -> Rect {
    let size = state.dimensions();
    let width = size.width.saturating_mul(2).min(area.width);
    let height = size.height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn board_paragraph(state: &GameState, theme: &Theme) -> Paragraph<'static> {
    let size = state.dimensions();
    let mut lines = Vec::with_capacity(usize::from(size.height));

    for y in 0..i32::from(size.height) {
        let mut spans = Vec::with_capacity(usize::from(size.width));
        for x in 0..i32::from(size.width) {
            let cell = state.cell_at(Position { x, y }).unwrap_or(Cell::EMPTY);
            let text: String = [cell.glyph(), CELL_SEPARATOR].iter().collect();
            spans.push(Span::styled(text, cell_style(cell, theme)));
        }
        lines.push(Line::from(spans));
    }

    Paragraph::new(lines)
}

fn cell_style(cell: Cell, theme: &Theme) -> Style {
    if cell.is_body() {
        return Style::new()
            .fg(theme.snake_body)
            .add_modifier(Modifier::BOLD);
    }
    if cell.is_wall() {
        return Style::new().fg(theme.wall);
    }
    if cell.is_food() {
        return Style::new().fg(theme.food);
    }
    Style::new()
}

/// Draws the end-of-game popup over the board, sized to its content.
fn render_game_over(frame: &mut Frame<'_>, area: Rect, score: i32, theme: &Theme) {
    let score_line = format!("Your score is: {score}");
    let lines = [GAME_OVER_TITLE, score_line.as_str(), "", EXIT_PROMPT];

    let content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let popup = centered_rect(
        area,
        u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4),
        u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2),
    );

    let text = vec![
        Line::styled(
            GAME_OVER_TITLE,
            Style::new()
                .fg(theme.overlay_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(score_line),
        Line::from(""),
        Line::styled(EXIT_PROMPT, Style::new().fg(theme.overlay_footer)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
