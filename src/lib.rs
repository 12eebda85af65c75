// Snake on a fixed 10x10 board. `game` and `fruit` hold the rules; `app`,
// `terminal` and `render` are the terminal front end driving them.

pub mod app;
pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod render;
pub mod snake;
pub mod terminal;
