//! Neighborhood generation.

use super::moves::{AssortmentMove, WorkingAssortment};

/// Generates every add, remove and swap move around a working assortment.
///
/// Order: adds by ascending item, then removes in assortment order, then
/// swaps (assortment order × ascending unused item). Adds are skipped once
/// the assortment holds `cap` items; swaps keep the size unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodSelector {
    cap: usize,
}

impl NeighborhoodSelector {
    /// Creates a selector for assortments of at most `cap` items.
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Clears `moves` and fills it with the neighborhood of `working`.
    pub fn fill_moves(&self, working: &WorkingAssortment, moves: &mut Vec<AssortmentMove>) {
        moves.clear();
        let n = working.item_count();

        if working.len() < self.cap {
            moves.extend(
                (0..n)
                    .filter(|&item| !working.contains(item))
                    .map(|item| AssortmentMove::Add { item }),
            );
        }

        moves.extend(
            working
                .items()
                .iter()
                .map(|&item| AssortmentMove::Remove { item }),
        );

        for &out in working.items() {
            moves.extend(
                (0..n)
                    .filter(|&into| !working.contains(into))
                    .map(|into| AssortmentMove::Swap { out, into }),
            );
        }
    }
}
