//! One-hop neighborhood extraction around a selected entity.
//!
//! The result is always a star: the selected entity, its direct neighbors,
//! and only the relationships incident to the selected entity. Relationships
//! between two neighbors are dropped even when both endpoints are kept.

use std::collections::HashSet;

use super::adjacency::AdjacencyIndex;
use super::config::RadialConfig;
use super::layout::{PositionedGraph, PositionedNode, radial_focus_layout};
use super::types::Relationship;

/// Star-shaped subgraph centered on `selected_id`.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusedSubgraph {
	/// Entity at the center of the star.
	pub selected_id: String,
	/// `selected_id` plus its direct neighbors.
	pub keep_ids: HashSet<String>,
	/// Kept nodes in their full-dataset order, positions untouched.
	pub nodes: Vec<PositionedNode>,
	/// Relationships with `selected_id` as an endpoint.
	pub edges: Vec<Relationship>,
}

impl FocusedSubgraph {
	/// Kept nodes other than the selected one.
	pub fn neighbor_count(&self) -> usize {
		self.nodes.iter().filter(|n| n.id() != self.selected_id).count()
	}

	/// Re-position the star around the selected entity.
	pub fn into_radial_layout(self, config: &RadialConfig) -> PositionedGraph {
		radial_focus_layout(&self.nodes, &self.selected_id, &self.edges, config)
	}
}

/// Cut the one-hop star around `selected_id` out of a laid-out graph.
pub fn extract_focus(
	selected_id: &str,
	adjacency: &AdjacencyIndex,
	full_nodes: &[PositionedNode],
	full_edges: &[Relationship],
) -> FocusedSubgraph {
	let mut keep_ids: HashSet<String> = adjacency.neighbors(selected_id).cloned().unwrap_or_default();
	keep_ids.insert(selected_id.to_string());

	let nodes = full_nodes
		.iter()
		.filter(|n| keep_ids.contains(n.id()))
		.cloned()
		.collect();

	let edges = full_edges
		.iter()
		.filter(|e| {
			e.touches(selected_id)
				&& keep_ids.contains(&e.source_entity)
				&& keep_ids.contains(&e.target_entity)
		})
		.cloned()
		.collect();

	FocusedSubgraph {
		selected_id: selected_id.to_string(),
		keep_ids,
		nodes,
		edges,
	}
}
