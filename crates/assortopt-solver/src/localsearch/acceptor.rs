//! Hill climbing acceptor.

/// Accepts only moves whose revenue is strictly above the current one.
///
/// No epsilon is applied. Every applied move raises the tracked revenue, and
/// a strictly increasing sequence of floats is finite, so the search cannot
/// cycle between assortments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn is_accepted(&self, last_step_revenue: f64, move_revenue: f64) -> bool {
        move_revenue > last_step_revenue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_improvement_only() {
        let acceptor = HillClimbingAcceptor::new();
        assert!(acceptor.is_accepted(0.5, 0.6));
        assert!(!acceptor.is_accepted(0.5, 0.5));
        assert!(!acceptor.is_accepted(0.5, 0.4));
    }
}
