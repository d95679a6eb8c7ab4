//! Radial focus layout: the selected entity pinned at the center with its
//! neighbors on per-tier rings around it.
//!
//! Ring radii are fixed per tier, so "ring = tier" reads the same whichever
//! entity is focused, even when one tier holds most of the neighbors.

use log::warn;

use super::super::config::RadialConfig;
use super::super::types::Relationship;
use super::{PositionedGraph, PositionedNode, bucket_by_tier, ring_slot};

/// Re-position a focused neighborhood around `selected_id`.
///
/// When `nodes` does not contain `selected_id` the input comes back unchanged.
pub fn radial_focus_layout(
	nodes: &[PositionedNode],
	selected_id: &str,
	edges: &[Relationship],
	config: &RadialConfig,
) -> PositionedGraph {
	let Some(selected) = nodes.iter().find(|n| n.id() == selected_id) else {
		warn!("entity-graph: focus target {selected_id} not in the focused node set");
		return PositionedGraph {
			nodes: nodes.to_vec(),
			edges: edges.to_vec(),
		};
	};

	let others: Vec<PositionedNode> = nodes
		.iter()
		.filter(|n| n.id() != selected_id)
		.cloned()
		.collect();

	let mut positioned = Vec::with_capacity(others.len() + 1);
	positioned.push(PositionedNode {
		entity: selected.entity.clone(),
		position: config.center,
	});

	for (tier, bucket) in bucket_by_tier(&others, PositionedNode::tier) {
		let radius = config.radius(tier);
		let count = bucket.len();
		for (i, node) in bucket.into_iter().enumerate() {
			positioned.push(PositionedNode {
				entity: node.entity.clone(),
				position: ring_slot(config.center, radius, i, count),
			});
		}
	}

	PositionedGraph {
		nodes: positioned,
		edges: edges.to_vec(),
	}
}
