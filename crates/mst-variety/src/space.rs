//! Candidate spaces walked by the enumerator.
//!
//! A space is a universe mask. Its candidates are the subsets of the universe
//! in ascending integer order, addressed by a dense index so that parallel
//! chunks can be cut without walking the space.

/// Subsets of a universe mask, indexed densely in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CandidateSpace {
    universe: u64,
    width: u32,
}

impl CandidateSpace {
    pub(crate) fn new(universe: u64) -> Self {
        Self {
            universe,
            width: universe.count_ones(),
        }
    }

    /// Number of candidates in the space.
    pub(crate) fn len(&self) -> u128 {
        1u128 << self.width
    }

    /// Candidate at `index`; index `i` maps to the `i`-th subset in
    /// ascending order.
    pub(crate) fn candidate(&self, index: u64) -> u64 {
        if self.width == 64 || self.universe == (1u64 << self.width) - 1 {
            return index;
        }
        let mut pattern = 0u64;
        let mut remaining = self.universe;
        let mut source = index;
        while remaining != 0 && source != 0 {
            let lowest = remaining & remaining.wrapping_neg();
            if source & 1 == 1 {
                pattern |= lowest;
            }
            source >>= 1;
            remaining &= remaining - 1;
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateSpace;

    #[test]
    fn dense_universe_is_identity() {
        let space = CandidateSpace::new(0b1111);
        assert_eq!(space.len(), 16);
        assert!((0..16).all(|i| space.candidate(i) == i));
    }

    #[test]
    fn sparse_universe_walks_subsets_in_order() {
        let space = CandidateSpace::new(0b1010_0100);
        let walked: Vec<u64> = (0..space.len() as u64).map(|i| space.candidate(i)).collect();
        assert_eq!(
            walked,
            vec![0, 0b100, 0b10_0000, 0b10_0100, 0b1000_0000, 0b1000_0100, 0b1010_0000, 0b1010_0100]
        );
    }

    #[test]
    fn full_word_universe() {
        let space = CandidateSpace::new(u64::MAX);
        assert_eq!(space.len(), 1u128 << 64);
        assert_eq!(space.candidate(u64::MAX), u64::MAX);
    }
}
