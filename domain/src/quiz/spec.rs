//! Cluster specification document and the queue the planner consumes
//!
//! The document is a JSON object with a top-level `clusters` array:
//!
//! ```json
//! {
//!   "clusters": [
//!     {
//!       "min_slide_in_cluster": 2,
//!       "max_slide_in_cluster": 3,
//!       "questions": [
//!         {
//!           "name": "What is a lifetime?",
//!           "number": 1,
//!           "jump2slide": 2,
//!           "answers": [
//!             { "is_correct": true, "text": "A scope", "html": "<p>A scope</p>" }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use super::entities::Cluster;
use crate::core::error::{InputError, PlanningError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

/// Parsed cluster specification, sorted by `min_slide_in_cluster`
///
/// Immutable once parsed; consumption goes through [`ClusterQueue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    clusters: Vec<Cluster>,
}

impl ClusterSpec {
    pub fn new(mut clusters: Vec<Cluster>) -> Self {
        clusters.sort_by_key(|c| c.min_slide_in_cluster);
        Self { clusters }
    }

    /// Parse a specification document
    pub fn from_json(content: &str) -> Result<Self, InputError> {
        let raw: ClusterSpec = serde_json::from_str(content)
            .map_err(|e| InputError::MalformedSpec(e.to_string()))?;
        Ok(Self::new(raw.clusters))
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Check that every range is well-formed and ranges do not overlap
    pub fn validate(&self) -> Result<(), PlanningError> {
        for cluster in &self.clusters {
            if cluster.min_slide_in_cluster > cluster.max_slide_in_cluster {
                return Err(PlanningError::ImpossibleClusterRange {
                    min: cluster.min_slide_in_cluster,
                    max: cluster.max_slide_in_cluster,
                });
            }
        }
        if let Some(pair) = self
            .clusters
            .windows(2)
            .find(|w| w[0].max_slide_in_cluster >= w[1].min_slide_in_cluster)
        {
            return Err(PlanningError::OverlappingClusters {
                first_min: pair[0].min_slide_in_cluster,
                first_max: pair[0].max_slide_in_cluster,
                second_min: pair[1].min_slide_in_cluster,
                second_max: pair[1].max_slide_in_cluster,
            });
        }
        Ok(())
    }

    /// Ordinals that close a cluster, stale ones included
    pub fn tails(&self) -> BTreeSet<u32> {
        self.clusters
            .iter()
            .map(|c| c.max_slide_in_cluster)
            .collect()
    }

    /// Queue of clusters still to materialize in a run starting at `first_ordinal`
    pub fn pending_from(&self, first_ordinal: u32) -> ClusterQueue<'_> {
        ClusterQueue {
            pending: self
                .clusters
                .iter()
                .filter(|c| !c.is_stale_before(first_ordinal))
                .collect(),
        }
    }
}

/// Read-only ordered queue of clusters, consumed by explicit dequeues
#[derive(Debug, Clone)]
pub struct ClusterQueue<'a> {
    pending: VecDeque<&'a Cluster>,
}

impl<'a> ClusterQueue<'a> {
    /// Take the oldest pending cluster
    pub fn dequeue(&mut self) -> Option<&'a Cluster> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<&'a Cluster> {
        self.pending.front().copied()
    }

    /// Pending clusters in dequeue order, without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &'a Cluster> + '_ {
        self.pending.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
