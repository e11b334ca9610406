use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{Direction, GameInput, InputSource, SpeedModifier};

/// How long a speed key counts as held after its last press when the
/// terminal does not report releases. Longer than the usual auto-repeat delay.
pub const SPEED_HOLD_TIMEOUT: Duration = Duration::from_millis(600);

/// Keyboard input source reading crossterm events.
///
/// Speed keys act only while held. Terminals that report key releases end the
/// hold on release. Elsewhere auto-repeat keeps re-pressing the key, and the
/// hold ends once no press has arrived for `SPEED_HOLD_TIMEOUT`.
#[derive(Debug)]
pub struct KeyboardInput {
    poll_timeout: Duration,
    reports_releases: bool,
    held_speed: SpeedModifier,
    last_speed_press: Option<Instant>,
}

impl KeyboardInput {
    #[must_use]
    pub fn new(poll_timeout: Duration, reports_releases: bool) -> Self {
        Self {
            poll_timeout,
            reports_releases,
            held_speed: SpeedModifier::None,
            last_speed_press: None,
        }
    }

    /// Maps one key event received at `now` to a command, tracking the held
    /// speed key.
    pub fn translate(&mut self, key: KeyEvent, now: Instant) -> Option<GameInput> {
        if key.kind == KeyEventKind::Release {
            return self.release(key.code);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(GameInput::Quit);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
            KeyCode::Char(' ') => GameInput::Pause,
            KeyCode::Char('f' | 'F') => self.press_speed(SpeedModifier::Faster, now),
            KeyCode::Char('l' | 'L') => self.press_speed(SpeedModifier::Slower, now),
            KeyCode::Char('n' | 'N') => GameInput::Restart,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
            _ => return None,
        };

        Some(input)
    }

    /// Clears a speed key whose hold has lapsed on terminals without release
    /// events. Returns the command to apply, if any.
    pub fn expire_held_speed(&mut self, now: Instant) -> Option<GameInput> {
        if self.reports_releases || self.held_speed == SpeedModifier::None {
            return None;
        }

        let pressed = self.last_speed_press?;
        if now.saturating_duration_since(pressed) < SPEED_HOLD_TIMEOUT {
            return None;
        }

        self.held_speed = SpeedModifier::None;
        self.last_speed_press = None;
        Some(GameInput::Speed(SpeedModifier::None))
    }

    fn press_speed(&mut self, modifier: SpeedModifier, now: Instant) -> GameInput {
        self.held_speed = modifier;
        self.last_speed_press = Some(now);
        GameInput::Speed(modifier)
    }

    fn release(&mut self, code: KeyCode) -> Option<GameInput> {
        let released = match code {
            KeyCode::Char('f' | 'F') => SpeedModifier::Faster,
            KeyCode::Char('l' | 'L') => SpeedModifier::Slower,
            _ => return None,
        };

        if self.held_speed != released {
            return None;
        }

        self.held_speed = SpeedModifier::None;
        self.last_speed_press = None;
        Some(GameInput::Speed(SpeedModifier::None))
    }
}

impl InputSource for KeyboardInput {
    fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        let translated = if event::poll(self.poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Repeat => {
                    self.translate(key, Instant::now())
                }
                _ => None,
            }
        } else {
            None
        };

        Ok(translated.or_else(|| self.expire_held_speed(Instant::now())))
    }
}
