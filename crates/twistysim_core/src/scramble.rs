//! Random scramble generation.
//!
//! Scrambles are random-move sequences with family-specific constraints, not
//! random-state scrambles.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;
use twistysim_notation::{
    ClockMove, CubeFace, CubeMove, Direction, MegaminxMove, Modifier, ParseMode, PinGroup,
    PyraminxAxis, PyraminxMove, SkewbAxis, SkewbMove, Sq1Move, alg_to_string,
};

use crate::puzzles::{PuzzleSim, PuzzleState, Sq1State};
use crate::{PuzzleKind, Timestamp};

/// Number of random `(u,d)` pairs to try in each Square-1 round before giving
/// up on the rest of the scramble.
const SQ1_ATTEMPTS_PER_ROUND: usize = 100;

/// Parameters to deterministically generate a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Puzzle family to scramble.
    pub kind: PuzzleKind,
    /// Timestamp when the scramble was requested.
    pub time: Timestamp,
    /// Random seed.
    pub seed: String,
}

impl ScrambleParams {
    /// Generates new parameters based on the current time and a random
    /// number.
    pub fn new(kind: PuzzleKind) -> Self {
        let time = Timestamp::now();
        let random_u64: u64 = rand::rng().random();
        Self {
            kind,
            time,
            seed: format!("{time}_{random_u64}"),
        }
    }

    /// Constructs parameters from a hand-chosen seed. The timestamp is the
    /// Unix epoch, so the same seed always produces the same scramble.
    pub fn with_seed(kind: PuzzleKind, seed: impl Into<String>) -> Self {
        Self {
            kind,
            time: Timestamp::epoch(),
            seed: seed.into(),
        }
    }

    /// Returns the random number generator for these parameters.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.time.to_string().as_bytes());
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest: [u8; 32] = sha256.finalize().into();
        rand_chacha::ChaCha12Rng::from_seed(digest)
    }

    /// Generates the scramble and applies it to a solved puzzle.
    pub fn scramble(self) -> ScrambledPuzzle {
        let scramble = random_scramble(self.kind, &mut self.rng());
        let mut state = PuzzleState::new_solved(self.kind);
        if let Err(e) = state.apply_alg(&scramble, ParseMode::Strict) {
            log::warn!("generated scramble {scramble:?} does not apply cleanly: {e}");
        }
        ScrambledPuzzle {
            params: self,
            scramble,
            state,
        }
    }
}

/// Output of scrambling a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambledPuzzle {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble in the family's notation.
    pub scramble: String,
    /// State of the puzzle after scrambling.
    pub state: PuzzleState,
}

/// Generates a scramble for a puzzle family.
pub fn random_scramble<R: Rng + ?Sized>(kind: PuzzleKind, rng: &mut R) -> String {
    match kind {
        PuzzleKind::Cube(n) => alg_to_string(&random_cube_moves(n, rng)),
        PuzzleKind::Pyraminx => alg_to_string(&random_pyraminx_moves(rng)),
        PuzzleKind::Skewb => alg_to_string(&random_skewb_moves(rng)),
        PuzzleKind::Square1 => alg_to_string(&random_sq1_moves(rng)),
        PuzzleKind::Megaminx => alg_to_string(&random_megaminx_moves(rng)),
        PuzzleKind::Clock => alg_to_string(&random_clock_moves(rng)),
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    if rng.random_bool(0.5) {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    }
}

/// Returns the number of moves in an NxN scramble.
fn cube_scramble_length<R: Rng + ?Sized>(n: u8, rng: &mut R) -> usize {
    let center = match n {
        0 | 1 => return 0,
        2 => 10,
        3 => 24,
        4 => 45,
        _ => 20 * (usize::from(n) - 2),
    };
    rng.random_range(center - 1..=center + 1)
}

/// Returns whether `next` may follow `prev2` and `prev` in an NxN scramble.
fn is_cube_move_allowed(
    n: u8,
    prev2: Option<CubeMove>,
    prev: Option<CubeMove>,
    next: CubeMove,
) -> bool {
    if let Some(prev) = prev {
        if next.face == prev.face {
            return false;
        }
        if n % 2 == 0 && prev.is_wide() && next.is_wide() && next.face == prev.face.opposite() {
            return false;
        }
    }
    if let Some(prev2) = prev2 {
        // `X _ X` after an opposite face is a bounce, and `X _ opp(X)` is
        // never produced either.
        let is_bounce = next.face == prev2.face
            && prev.is_some_and(|prev| prev.face == next.face.opposite());
        if is_bounce || next.face == prev2.face.opposite() {
            return false;
        }
    }
    true
}

/// Generates an NxN scramble.
pub fn random_cube_moves<R: Rng + ?Sized>(n: u8, rng: &mut R) -> Vec<CubeMove> {
    const MODIFIERS: [Modifier; 3] = [
        Modifier::Clockwise,
        Modifier::CounterClockwise,
        Modifier::Double,
    ];

    let len = cube_scramble_length(n, rng);
    let max_layers = u16::from(n / 2).max(1);
    let mut moves: Vec<CubeMove> = Vec::with_capacity(len);
    while moves.len() < len {
        let face = *CubeFace::ALL.choose(rng).unwrap_or(&CubeFace::U);
        let layers = if n > 3 {
            rng.random_range(1..=max_layers)
        } else {
            1
        };
        let modifier = *MODIFIERS.choose(rng).unwrap_or(&Modifier::Clockwise);
        let m = CubeMove::wide(face, layers, modifier);

        let prev = moves.last().copied();
        let prev2 = moves.len().checked_sub(2).map(|i| moves[i]);
        if is_cube_move_allowed(n, prev2, prev, m) {
            moves.push(m);
        }
    }
    moves
}

/// Generates a Pyraminx scramble: 8 or 9 vertex moves followed by up to 4 tip
/// moves in random order.
pub fn random_pyraminx_moves<R: Rng + ?Sized>(rng: &mut R) -> Vec<PyraminxMove> {
    let mut moves: Vec<PyraminxMove> = random_axis_sequence(&PyraminxAxis::ALL, rng)
        .into_iter()
        .map(|(axis, direction)| PyraminxMove {
            axis,
            tip: false,
            direction,
        })
        .collect();

    let mut tips = vec![];
    for axis in PyraminxAxis::ALL {
        if rng.random_bool(0.5) {
            tips.push(PyraminxMove {
                axis,
                tip: true,
                direction: random_direction(rng),
            });
        }
    }
    tips.shuffle(rng);
    moves.extend(tips);
    moves
}

/// Generates a Skewb scramble: 8 or 9 moves.
pub fn random_skewb_moves<R: Rng + ?Sized>(rng: &mut R) -> Vec<SkewbMove> {
    random_axis_sequence(&SkewbAxis::ALL, rng)
        .into_iter()
        .map(|(axis, direction)| SkewbMove { axis, direction })
        .collect()
}

/// Returns 8 or 9 random turns with no axis turned twice in a row.
fn random_axis_sequence<A: Copy + PartialEq, R: Rng + ?Sized>(
    axes: &[A],
    rng: &mut R,
) -> Vec<(A, Direction)> {
    let len = rng.random_range(8..=9);
    let mut ret: Vec<(A, Direction)> = Vec::with_capacity(len);
    while ret.len() < len {
        let Some(&axis) = axes.choose(rng) else {
            break;
        };
        if ret.last().is_some_and(|&(prev, _)| prev == axis) {
            continue;
        }
        ret.push((axis, random_direction(rng)));
    }
    ret
}

/// Generates a Square-1 scramble of 12 to 15 rounds, each a layer turn
/// followed by a slash.
///
/// If no turn that allows a slash is found within a bounded number of
/// attempts, the scramble ends early.
pub fn random_sq1_moves<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sq1Move> {
    let rounds = rng.random_range(12..=15);
    random_sq1_rounds(rng, rounds, SQ1_ATTEMPTS_PER_ROUND)
}

/// Generates up to `rounds` Square-1 rounds from the solved state, giving up
/// after `attempts` tries to find a turn that allows a slash.
fn random_sq1_rounds<R: Rng + ?Sized>(
    rng: &mut R,
    rounds: usize,
    attempts: usize,
) -> Vec<Sq1Move> {
    let mut state = Sq1State::new();
    let mut moves = vec![];
    'rounds: for round in 0..rounds {
        for _ in 0..attempts {
            let u = rng.random_range(-5..=6);
            let d = rng.random_range(-5..=6);
            if (u, d) == (0, 0) {
                continue;
            }
            let turn = Sq1Move::UD { u, d };
            let Ok(new_state) = state.do_move(&turn) else {
                continue;
            };
            if let Ok(new_state) = new_state.do_move(&Sq1Move::Slash) {
                state = new_state;
                moves.push(turn);
                moves.push(Sq1Move::Slash);
                continue 'rounds;
            }
        }
        log::debug!("no slashable turn found; truncating Square-1 scramble at {round} of {rounds} rounds");
        break;
    }
    moves
}

/// Generates a Megaminx scramble: 7 lines of 10 alternating `R` and `D` moves,
/// each line ending with a `U` turn.
pub fn random_megaminx_moves<R: Rng + ?Sized>(rng: &mut R) -> Vec<MegaminxMove> {
    let mut moves = Vec::with_capacity(7 * 11);
    for _ in 0..7 {
        let mut last_d_plus = false;
        for i in 0..10 {
            let plus = rng.random_bool(0.5);
            moves.push(match (i % 2 == 0, plus) {
                (true, true) => MegaminxMove::Rpp,
                (true, false) => MegaminxMove::Rmm,
                (false, true) => MegaminxMove::Dpp,
                (false, false) => MegaminxMove::Dmm,
            });
            last_d_plus = plus;
        }
        moves.push(if last_d_plus {
            MegaminxMove::U
        } else {
            MegaminxMove::Ui
        });
    }
    moves
}

/// Generates a Clock scramble: pin-pair turns, face turns, and an `ALL` turn
/// on the front, then `y2` and face turns and an `ALL` turn on the back.
pub fn random_clock_moves<R: Rng + ?Sized>(rng: &mut R) -> Vec<ClockMove> {
    use PinGroup::*;

    const FRONT: [PinGroup; 9] = [UR, DR, DL, UL, U, R, D, L, All];
    const BACK: [PinGroup; 5] = [U, R, D, L, All];

    let mut random_turn = |pins| {
        let ticks: i8 = rng.random_range(0..=6);
        let ticks = if rng.random_bool(0.5) { -ticks } else { ticks };
        ClockMove::Turn { pins, ticks }
    };

    let mut moves: Vec<ClockMove> = FRONT.into_iter().map(&mut random_turn).collect();
    moves.push(ClockMove::Flip);
    moves.extend(BACK.into_iter().map(&mut random_turn));
    moves
}
