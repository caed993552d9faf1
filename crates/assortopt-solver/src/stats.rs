//! Search statistics.
//!
//! Stack-allocated counters for one optimizer call.

use std::time::{Duration, Instant};

/// Per-call search statistics.
///
/// For exact search a "move" is one evaluated candidate assortment and
/// steps stay at zero. For local search a step is one applied move.
///
/// # Example
///
/// ```
/// use assortopt_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_improving, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Moves applied.
    pub step_count: u64,
    /// Candidate assortments or moves evaluated.
    pub moves_evaluated: u64,
    /// Evaluations that beat the incumbent.
    pub moves_improving: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.elapsed = Some(self.elapsed());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        if let Some(elapsed) = self.elapsed {
            return elapsed;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records an evaluation and whether it improved on the incumbent.
    pub fn record_move(&mut self, improving: bool) {
        self.moves_evaluated += 1;
        if improving {
            self.moves_improving += 1;
        }
    }

    /// Records an applied move.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Returns the evaluation rate.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Returns improving / evaluated.
    pub fn improvement_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_improving as f64 / self.moves_evaluated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_on_empty_stats() {
        let stats = SearchStats::default();
        assert_eq!(stats.improvement_rate(), 0.0);
        assert_eq!(stats.moves_per_second(), 0.0);
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_freezes_elapsed() {
        let mut stats = SearchStats::default();
        stats.start();
        stats.stop();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
    }

    #[test]
    fn test_improvement_rate() {
        let mut stats = SearchStats::default();
        stats.record_move(true);
        stats.record_move(false);
        stats.record_move(false);
        stats.record_move(true);
        assert_eq!(stats.improvement_rate(), 0.5);
    }
}
