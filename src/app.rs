use std::io::{self, Write};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::error::ShellError;
use crate::game::{GameState, StepOutcome};
use crate::render::render_frame;
use crate::terminal::{clear_screen, spawn_stdin_channel, KeyDecoder, RawTerminal, ShellEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(3);

/// Terminal front end: owns the keyboard, the screen and the tick clock.
pub struct App<R> {
    game: GameState<R>,
    keys: KeyDecoder,
}

/// Forwards queued events to the game. Returns false once quit was requested.
pub fn apply_events<R: Rng>(game: &mut GameState<R>, events: &[ShellEvent]) -> bool {
    for event in events {
        debug!("input: {:?}", event);
        match *event {
            ShellEvent::Start => game.start(),
            ShellEvent::Reset => game.reset(),
            ShellEvent::Turn(direction) => game.set_direction(direction),
            ShellEvent::Quit => return false,
        }
    }
    true
}

impl<R: Rng> App<R> {
    pub fn new(game: GameState<R>) -> Self {
        Self {
            game,
            keys: KeyDecoder::new(),
        }
    }

    /// Runs until the player quits, then restores the terminal and returns the
    /// final game.
    pub fn run(mut self) -> Result<GameState<R>, ShellError> {
        let terminal = RawTerminal::enable()?;
        let stdin_channel = spawn_stdin_channel();
        let result = self.game_loop(&stdin_channel);
        drop(terminal);
        result.map(|_| self.game)
    }

    fn game_loop(&mut self, stdin_channel: &Receiver<u8>) -> Result<(), ShellError> {
        let tick = self.game.config().tick_interval();
        let mut out = io::stdout();
        self.draw(&mut out)?;

        let mut frame_start = Instant::now();
        loop {
            loop {
                match stdin_channel.try_recv() {
                    Ok(byte) => self.keys.push(byte),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return Err(ShellError::InputClosed),
                }
            }
            if frame_start.elapsed() < tick {
                thread::sleep(POLL_INTERVAL);
                continue;
            }
            frame_start = Instant::now();

            let events = self.keys.drain_events();
            if !apply_events(&mut self.game, &events) {
                info!("quit requested");
                return Ok(());
            }

            match self.game.step() {
                StepOutcome::Idle | StepOutcome::Moved => {}
                outcome => debug!("tick: {:?}, length {}", outcome, self.game.snake().len()),
            }
            self.draw(&mut out)?;
        }
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        clear_screen(out)?;
        out.write_all(render_frame(&self.game).as_bytes())?;
        out.flush()
    }
}
