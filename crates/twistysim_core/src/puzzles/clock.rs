//! Clock simulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use twistysim_notation::ClockMove;

use super::PuzzleSim;
use crate::MoveError;

/// Number of positions on a dial.
pub const DIAL_POSITIONS: u8 = 12;

/// 3x3 grid of dials, indexed `[row][col]` as seen looking at that side.
pub type DialGrid = [[u8; 3]; 3];

/// State of a Clock.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClockState {
    /// Dials on the side facing the solver.
    pub front: DialGrid,
    /// Dials on the side facing away from the solver.
    pub back: DialGrid,
    /// Pins, indexed `[row][col]` as seen from the front. `true` means the
    /// pin is pushed up toward the front.
    pub pins: [[bool; 2]; 2],
}

fn add_ticks(dial: &mut u8, ticks: i8) {
    *dial = (i16::from(*dial) + i16::from(ticks)).rem_euclid(i16::from(DIAL_POSITIONS)) as u8;
}

impl ClockState {
    /// Constructs a solved Clock with every dial at 12 o'clock and every pin
    /// down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the front dials connected by the raised pins, and the linked
    /// back corners in the opposite direction.
    fn turn(&mut self, ticks: i8) {
        let mut affected = [[false; 3]; 3];
        for (r, row) in self.pins.iter().enumerate() {
            for (c, &up) in row.iter().enumerate() {
                if !up {
                    continue;
                }
                for dr in 0..2 {
                    for dc in 0..2 {
                        affected[r + dr][c + dc] = true;
                    }
                }
                // Each corner wheel also turns the mirrored corner on the
                // back, which reads as the opposite direction from there.
                add_ticks(&mut self.back[2 * r][2 - 2 * c], -ticks);
            }
        }
        for (dials, mask) in self.front.iter_mut().zip(affected) {
            for (dial, hit) in dials.iter_mut().zip(mask) {
                if hit {
                    add_ticks(dial, ticks);
                }
            }
        }
    }

    /// Turns the puzzle over, swapping front and back.
    fn flip(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
        let old = self.pins;
        for r in 0..2 {
            for c in 0..2 {
                self.pins[r][c] = old[1 - r][1 - c];
            }
        }
    }
}

impl PuzzleSim for ClockState {
    type Move = ClockMove;

    fn apply_move(&mut self, m: &ClockMove) -> Result<(), MoveError> {
        match *m {
            ClockMove::Turn { pins, ticks } => {
                self.pins = pins.pins();
                self.turn(ticks);
            }
            ClockMove::Pins(pins) => {
                for (row, group_row) in self.pins.iter_mut().zip(pins.pins()) {
                    for (pin, up) in row.iter_mut().zip(group_row) {
                        *pin |= up;
                    }
                }
            }
            ClockMove::Flip => self.flip(),
        }
        Ok(())
    }

    /// Returns whether every dial points to 12 o'clock. Pins are ignored.
    fn is_solved(&self) -> bool {
        self.front.iter().chain(&self.back).flatten().all(|&d| d == 0)
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = |d: u8| if d == 0 { DIAL_POSITIONS } else { d };
        writeln!(f, "front      back")?;
        for r in 0..3 {
            for c in 0..3 {
                write!(f, "{:>3}", hour(self.front[r][c]))?;
            }
            write!(f, "  ")?;
            for c in 0..3 {
                write!(f, "{:>3}", hour(self.back[r][c]))?;
            }
            writeln!(f)?;
        }
        let pin = |up: bool| if up { '^' } else { '.' };
        write!(
            f,
            "pins {}{} {}{}",
            pin(self.pins[0][0]),
            pin(self.pins[0][1]),
            pin(self.pins[1][0]),
            pin(self.pins[1][1]),
        )
    }
}
