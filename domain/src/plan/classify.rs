//! Per-slide classification against the cluster boundaries
//!
//! Works on ordinals and sets only. The `-1`/`-2` lookbacks decide which
//! pages need a fixed backward link: the page right after a cluster tail,
//! and the page after that, since the end-group marker takes one
//! navigational slot between them. Lookbacks follow the run's own page
//! order, so gaps in the numbering do not hide a tail.

use crate::quiz::spec::ClusterSpec;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Role of one slide relative to the clusters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideClass {
    /// Ordinal lies inside some cluster range
    pub in_cluster: bool,
    /// Ordinal closes some cluster
    pub cluster_tail: bool,
    /// The page before this one closes some cluster
    pub post_cluster_head: bool,
    /// The page two before this one closes some cluster
    pub post_end_group_head: bool,
}

impl SlideClass {
    pub fn needs_fixed_backward(&self) -> bool {
        self.post_cluster_head || self.post_end_group_head
    }
}

/// Precomputed cluster boundaries
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    tails: BTreeSet<u32>,
    ranges: Vec<RangeInclusive<u32>>,
}

impl Classifier {
    pub fn new(tails: BTreeSet<u32>, ranges: Vec<RangeInclusive<u32>>) -> Self {
        Self { tails, ranges }
    }

    /// Boundaries of every cluster in the specification, stale ones included
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        Self::new(spec.tails(), spec.clusters().iter().map(|c| c.range()).collect())
    }

    fn is_tail(&self, ordinal: Option<u32>) -> bool {
        ordinal.is_some_and(|o| self.tails.contains(&o))
    }

    /// Classify a slide of a contiguous deck
    pub fn classify(&self, ordinal: u32) -> SlideClass {
        self.classify_after(ordinal, &[])
    }

    /// Classify a slide given the ordinals of the pages before it in the
    /// run, nearest first
    ///
    /// Positions not covered by `previous` (the start of a resumed run) are
    /// assumed to be numbered contiguously.
    pub fn classify_after(&self, ordinal: u32, previous: &[u32]) -> SlideClass {
        let one_back = previous.first().copied().or(ordinal.checked_sub(1));
        let two_back = previous
            .get(1)
            .copied()
            .or_else(|| one_back.and_then(|o| o.checked_sub(1)));

        SlideClass {
            in_cluster: self.ranges.iter().any(|r| r.contains(&ordinal)),
            cluster_tail: self.tails.contains(&ordinal),
            post_cluster_head: self.is_tail(one_back),
            post_end_group_head: self.is_tail(two_back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(BTreeSet::from([3]), vec![2..=3])
    }

    #[test]
    fn test_before_cluster() {
        assert_eq!(classifier().classify(1), SlideClass::default());
    }

    #[test]
    fn test_cluster_member() {
        let class = classifier().classify(2);
        assert!(class.in_cluster);
        assert!(!class.cluster_tail);
    }

    #[test]
    fn test_tail() {
        let class = classifier().classify(3);
        assert!(class.in_cluster && class.cluster_tail);
        assert!(!class.needs_fixed_backward());
    }

    #[test]
    fn test_lookbacks() {
        let c = classifier();
        assert!(c.classify(4).post_cluster_head);
        assert!(!c.classify(4).post_end_group_head);
        assert!(c.classify(5).post_end_group_head);
        assert!(!c.classify(6).needs_fixed_backward());
    }

    #[test]
    fn test_lookbacks_follow_run_order_across_gaps() {
        let c = classifier();
        // deck 1, 2, 3, 6, 7
        assert!(!c.classify(6).needs_fixed_backward());
        let class = c.classify_after(6, &[3, 2]);
        assert!(class.post_cluster_head);
        assert!(!class.post_end_group_head);
        assert!(c.classify_after(7, &[6, 3]).post_end_group_head);
        assert!(!c.classify_after(8, &[7, 6]).needs_fixed_backward());
    }

    #[test]
    fn test_second_page_of_run_falls_back_to_arithmetic() {
        let c = classifier();
        // resumed at 4: nothing before 4 is known
        assert!(c.classify_after(5, &[4]).post_end_group_head);
    }

    #[test]
    fn test_low_ordinals_do_not_underflow() {
        let c = Classifier::new(BTreeSet::from([0]), vec![0..=0]);
        assert!(c.classify(0).cluster_tail);
        assert!(c.classify(1).post_cluster_head);
        assert!(c.classify(2).post_end_group_head);
    }
}
