// Raw keyboard input for the shell. Stdin is switched to non-canonical, no-echo
// mode, a thread forwards bytes one at a time, and the decoder turns the byte
// stream into shell events at tick time.
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use circular_buffer::CircularBuffer;
use log::{debug, warn};
use termios::{tcsetattr, Termios, ECHO, ICANON, TCSANOW};

use crate::snake::Direction;

const STDIN_FD: i32 = 0;
const ESC: u8 = 27;
const CSI: u8 = b'[';

type InputBuffer = CircularBuffer<1024, u8>; // 1024 bytes of pending input

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    Start,
    Reset,
    Turn(Direction),
    Quit,
}

/// Keeps stdin in raw mode until dropped.
pub struct RawTerminal {
    original: Termios,
}

impl RawTerminal {
    pub fn enable() -> io::Result<Self> {
        let original = Termios::from_fd(STDIN_FD)?;
        let mut raw = original;
        raw.c_lflag &= !(ICANON | ECHO);
        tcsetattr(STDIN_FD, TCSANOW, &raw)?;
        debug!("terminal switched to raw input");
        Ok(Self { original })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(err) = tcsetattr(STDIN_FD, TCSANOW, &self.original) {
            warn!("failed to restore terminal settings: {}", err);
        }
    }
}

pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}[2J{}[1;1H", ESC as char, ESC as char)
}

/// Spawns a reader thread; the channel disconnects when stdin closes.
pub fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut stdin = io::stdin();
        let mut byte = [0u8; 1];
        loop {
            match stdin.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(byte[0]).is_err() {
                        break;
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!("stdin reader stopped: {}", err);
                    break;
                }
            }
        }
    });
    rx
}

/// Buffers raw key bytes and decodes them into events.
pub struct KeyDecoder {
    buffer: InputBuffer,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            buffer: InputBuffer::new(),
        }
    }

    pub fn push(&mut self, byte: u8) {
        // drop input rather than overwrite when nobody drains it
        if self.buffer.is_full() {
            return;
        }
        self.buffer.push_back(byte);
    }

    /// Decodes every complete key in the buffer, oldest first. An escape
    /// sequence cut off mid-way stays buffered for the next call.
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        let mut events = Vec::new();
        while let Some(&byte) = self.buffer.front() {
            if byte == ESC {
                match self.buffer.nth_front(1) {
                    None => break,
                    // a lone ESC keypress, not the start of a sequence
                    Some(&next) if next != CSI => {
                        self.buffer.pop_front();
                        continue;
                    }
                    Some(_) => {}
                }
                let arrow = match self.buffer.nth_front(2) {
                    None => break,
                    Some(&code) => arrow_direction(code),
                };
                match arrow {
                    Some(direction) => {
                        events.push(ShellEvent::Turn(direction));
                        for _ in 0..3 {
                            self.buffer.pop_front();
                        }
                    }
                    None => {
                        self.buffer.pop_front();
                    }
                }
                continue;
            }

            self.buffer.pop_front();
            if let Some(event) = key_event(byte) {
                events.push(event);
            }
        }
        events
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn arrow_direction(code: u8) -> Option<Direction> {
    match code {
        b'A' => Some(Direction::Up),
        b'B' => Some(Direction::Down),
        b'C' => Some(Direction::Right),
        b'D' => Some(Direction::Left),
        _ => None,
    }
}

// WASD is lowercase only, so the final byte of an unrecognised escape
// sequence (often an uppercase letter) is not mistaken for a turn.
fn key_event(byte: u8) -> Option<ShellEvent> {
    match byte {
        b' ' => Some(ShellEvent::Start),
        b'r' | b'R' => Some(ShellEvent::Reset),
        b'q' | b'Q' => Some(ShellEvent::Quit),
        b'w' => Some(ShellEvent::Turn(Direction::Up)),
        b's' => Some(ShellEvent::Turn(Direction::Down)),
        b'a' => Some(ShellEvent::Turn(Direction::Left)),
        b'd' => Some(ShellEvent::Turn(Direction::Right)),
        _ => None,
    }
}
