//! Concentric layout: every tier on its own fixed-radius ring.

use super::super::config::ConcentricConfig;
use super::super::types::{Entity, Relationship};
use super::{PositionedGraph, PositionedNode, bucket_by_tier, ring_slot};

/// Place each tier's nodes evenly around a ring whose radius depends only on
/// the tier. Radii are configuration constants, not derived from node counts,
/// so rings never need collision handling against each other.
pub fn concentric_layout(
	nodes: &[Entity],
	edges: &[Relationship],
	config: &ConcentricConfig,
) -> PositionedGraph {
	let mut positioned = Vec::with_capacity(nodes.len());

	for (tier, bucket) in bucket_by_tier(nodes, Entity::tier) {
		let radius = config.radius(tier);
		let count = bucket.len();
		positioned.extend(bucket.into_iter().enumerate().map(|(i, entity)| PositionedNode {
			entity: entity.clone(),
			position: ring_slot(config.center, radius, i, count),
		}));
	}

	PositionedGraph {
		nodes: positioned,
		edges: edges.to_vec(),
	}
}
