use twistysim_notation::{CubeFace, CubeMove};

/// Counts a sequence of NxN moves using Slice Turn Metric.
pub fn count_stm<'a>(moves: impl IntoIterator<Item = &'a CubeMove>) -> u64 {
    let mut counter = StmCounter::new();
    for m in moves {
        counter.count_move(*m);
    }
    counter.count
}

/// Slice Turn Metric counter for NxN moves.
///
/// Consecutive moves of the same face and layer count are counted once.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StmCounter {
    /// Number of moves counted.
    pub count: u64,
    /// Face and layer count of the last move, or `None` if there is no last
    /// move.
    pub last_move: Option<(CubeFace, u16)>,
}

impl StmCounter {
    /// Constructs a blank STM counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a move.
    pub fn count_move(&mut self, m: CubeMove) {
        let key = (m.face, m.layers);
        if self.last_move != Some(key) {
            self.count += 1;
            self.last_move = Some(key);
        }
    }

    /// Resets the count and the last move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
