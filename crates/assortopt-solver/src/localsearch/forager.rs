//! Steepest-ascent forager.

use assortopt_core::RevenueAccumulator;

/// Keeps the accepted move with the highest revenue during one step.
///
/// Moves are recorded by index into the step's move list. An equally good
/// later move does not displace an earlier one, so ties resolve to
/// neighborhood order.
#[derive(Debug, Clone, Default)]
pub struct SteepestAscentForager {
    best: Option<(usize, RevenueAccumulator)>,
}

impl SteepestAscentForager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets state at the start of a step.
    pub fn step_started(&mut self) {
        self.best = None;
    }

    /// Offers an accepted move.
    pub fn add_move_index(&mut self, index: usize, accumulator: RevenueAccumulator) {
        let better = match &self.best {
            Some((_, best)) => accumulator.revenue() > best.revenue(),
            None => true,
        };
        if better {
            self.best = Some((index, accumulator));
        }
    }

    /// Takes the best accepted move, if any.
    pub fn pick_move_index(&mut self) -> Option<(usize, RevenueAccumulator)> {
        self.best.take()
    }
}
