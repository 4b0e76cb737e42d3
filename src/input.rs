//! Keyboard input: terminal key events in, one immutable snapshot per tick out.
//!
//! Most terminals only report key presses (plus auto-repeat), never releases.
//! A pressed key is therefore latched as held for a few ticks, and terminal
//! key-repeat keeps refreshing the latch while the player holds it down.
//! Terminals that do send release events clear the latch immediately.

use crate::physics::{Controls, Rotate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Game actions a key can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    RotateLeft,  // Left / a
    RotateRight, // Right / d
    Thrust,      // Space / Up
    Quit,        // Esc / q / Ctrl-C
}

/// Map a crossterm key event to an action and whether it is a release.
pub fn map_key(event: &KeyEvent) -> Option<(KeyAction, bool)> {
    let action = match event.code {
        KeyCode::Left | KeyCode::Char('a') => KeyAction::RotateLeft,
        KeyCode::Right | KeyCode::Char('d') => KeyAction::RotateRight,
        KeyCode::Up | KeyCode::Char(' ') => KeyAction::Thrust,
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => return None,
    };
    Some((action, event.kind == KeyEventKind::Release))
}

/// Keys held during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// Controls for the physics step. Left wins if both rotation keys are
    /// held. Fuel is the integrator's concern, not the input's.
    pub fn controls(&self) -> Controls {
        let rotate = if self.left {
            Rotate::Left
        } else if self.right {
            Rotate::Right
        } else {
            Rotate::None
        };
        Controls {
            rotate,
            thrust: self.thrust,
        }
    }
}

/// Latched key state between ticks.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    hold_ticks: u32,
    left_ticks: u32,
    right_ticks: u32,
    thrust_ticks: u32,
    quit: bool,
}

impl HeldKeys {
    pub fn new(hold_ticks: u32) -> Self {
        Self {
            hold_ticks: hold_ticks.max(1),
            left_ticks: 0,
            right_ticks: 0,
            thrust_ticks: 0,
            quit: false,
        }
    }

    /// Feed one crossterm key event.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        match map_key(event) {
            Some((action, true)) => self.release(action),
            Some((action, false)) => self.press(action),
            None => {}
        }
    }

    pub fn press(&mut self, action: KeyAction) {
        let hold = self.hold_ticks;
        match action {
            KeyAction::RotateLeft => {
                self.left_ticks = hold;
                self.right_ticks = 0;
            }
            KeyAction::RotateRight => {
                self.right_ticks = hold;
                self.left_ticks = 0;
            }
            KeyAction::Thrust => self.thrust_ticks = hold,
            KeyAction::Quit => self.quit = true,
        }
    }

    pub fn release(&mut self, action: KeyAction) {
        match action {
            KeyAction::RotateLeft => self.left_ticks = 0,
            KeyAction::RotateRight => self.right_ticks = 0,
            KeyAction::Thrust => self.thrust_ticks = 0,
            KeyAction::Quit => {}
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.left_ticks > 0,
            right: self.right_ticks > 0,
            thrust: self.thrust_ticks > 0,
            quit: self.quit,
        }
    }

    /// Age the latches by one tick.
    pub fn end_tick(&mut self) {
        self.left_ticks = self.left_ticks.saturating_sub(1);
        self.right_ticks = self.right_ticks.saturating_sub(1);
        self.thrust_ticks = self.thrust_ticks.saturating_sub(1);
    }
}
