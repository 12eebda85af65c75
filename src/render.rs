// Text frame for the terminal. Screen columns follow `Cell::row` and screen
// lines follow `Cell::col`, so moving Up climbs the screen.
use colored::Colorize;

use crate::game::{GameState, Phase};
use crate::snake::Cell;

const HEAD: &str = "Ӫ ";
const BODY: &str = "⏺ ";
const FRUIT: &str = "♦ ";
const EMPTY: &str = "  ";

/// Draws the whole frame, borders and status line included.
pub fn render_frame<R>(state: &GameState<R>) -> String {
    let size = state.config().grid_size;
    let mut frame = String::new();

    // border up
    frame.push('▗');
    frame.push_str(&"▄▄".repeat(size));
    frame.push_str("▖\n");

    let message = phase_message(state.phase());
    for line in 0..size {
        frame.push('▐');
        match message {
            None => {
                for column in 0..size {
                    frame.push_str(&glyph(state, Cell::new(column as i32, line as i32)));
                }
            }
            Some((headline, _)) if line + 1 == size / 2 => {
                frame.push_str(&centered(headline, size * 2, |text| {
                    text.white().bold().to_string()
                }));
            }
            Some((_, hint)) if line == size / 2 + 1 => {
                frame.push_str(&centered(hint, size * 2, |text| text.green().to_string()));
            }
            Some(_) => frame.push_str(&EMPTY.repeat(size)),
        }
        frame.push_str("▌\n");
    }

    // border down
    frame.push('▝');
    frame.push_str(&"▀▀".repeat(size));
    frame.push_str("▘\n");

    frame.push_str(&status_line(state));
    frame.push('\n');
    frame
}

fn phase_message(phase: Phase) -> Option<(&'static str, &'static str)> {
    match phase {
        Phase::Start => Some(("SNAKE GAME", "Press SPACE to Start")),
        Phase::Playing => None,
        Phase::GameOver => Some(("GAME OVER", "Press R to Restart")),
        Phase::Won => Some(("YOU WON!", "Press R to Restart")),
    }
}

fn glyph<R>(state: &GameState<R>, cell: Cell) -> String {
    if cell == state.head() {
        HEAD.yellow().to_string()
    } else if state.snake().contains(&cell) {
        BODY.green().to_string()
    } else if state.fruit() == Some(cell) {
        FRUIT.red().to_string()
    } else {
        EMPTY.to_string()
    }
}

/// Pads `text` to `width` columns, styling only the text itself.
fn centered(text: &str, width: usize, style: impl Fn(&str) -> String) -> String {
    let text: String = text.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), style(&text), " ".repeat(right))
}

fn status_line<R>(state: &GameState<R>) -> String {
    match state.phase() {
        Phase::Start => "Arrows or WASD to steer, Q to quit".to_string(),
        Phase::Playing => format!("Points: {}", state.score()),
        Phase::GameOver | Phase::Won => format!("Final Score: {}", state.score()),
    }
}
