//! Banded layout: one band per tier, wrapped into rows or columns.
//!
//! The primary axis runs across bands (down for [`TierDirection::TopDown`],
//! right for [`TierDirection::LeftRight`]). Inside a band, nodes are chunked
//! into groups of at most `max_per_chunk`; each chunk is centered on secondary
//! coordinate 0 and chunks follow one another along the primary axis.

use super::super::config::TieredConfig;
use super::super::types::{Entity, Relationship};
use super::{Point, PositionedGraph, PositionedNode, bucket_by_tier};

/// Which way the tiers are stacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TierDirection {
	/// Tiers go downward; each chunk is a row.
	#[default]
	TopDown,
	/// Tiers go rightward; each chunk is a column.
	LeftRight,
}

impl TierDirection {
	/// Box extents as (along primary axis, along secondary axis).
	fn box_extents(self, config: &TieredConfig) -> (f64, f64) {
		match self {
			TierDirection::TopDown => (config.box_height, config.box_width),
			TierDirection::LeftRight => (config.box_width, config.box_height),
		}
	}

	fn point(self, primary: f64, secondary: f64) -> Point {
		match self {
			TierDirection::TopDown => Point::new(secondary, primary),
			TierDirection::LeftRight => Point::new(primary, secondary),
		}
	}
}

/// Place nodes in tier bands.
///
/// Output is grouped by tier (ascending, unclassified last) with input order
/// kept inside each tier. Relationships pass through unchanged.
pub fn tiered_layout(
	nodes: &[Entity],
	edges: &[Relationship],
	direction: TierDirection,
	config: &TieredConfig,
) -> PositionedGraph {
	let (box_primary, box_secondary) = direction.box_extents(config);
	let chunk_pitch = box_primary + config.chunk_gap;
	let item_pitch = box_secondary + config.item_gap;

	let mut positioned = Vec::with_capacity(nodes.len());
	let mut offset = 0.0;

	for (_, bucket) in bucket_by_tier(nodes, Entity::tier) {
		let chunks = bucket.chunks(config.capacity());
		let chunk_count = chunks.len();

		for (c, chunk) in chunks.enumerate() {
			let primary = offset + c as f64 * chunk_pitch + box_primary / 2.0;
			// Centers of a k-item chunk sit symmetric around 0.
			let first = -(chunk.len() as f64 - 1.0) / 2.0 * item_pitch;

			for (i, entity) in chunk.iter().enumerate() {
				positioned.push(PositionedNode {
					entity: (*entity).clone(),
					position: direction.point(primary, first + i as f64 * item_pitch),
				});
			}
		}

		let extent = chunk_count as f64 * box_primary + (chunk_count as f64 - 1.0) * config.chunk_gap;
		offset += extent + config.tier_gap;
	}

	PositionedGraph {
		nodes: positioned,
		edges: edges.to_vec(),
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::entity_graph::fixtures::{entity, relationship};

	fn ids(graph: &PositionedGraph) -> Vec<&str> {
		graph.nodes.iter().map(|n| n.id()).collect()
	}

	#[test]
	fn single_node_is_centered() {
		let graph = tiered_layout(
			&[entity("account", Some(1))],
			&[],
			TierDirection::TopDown,
			&TieredConfig::default(),
		);

		assert_eq!(graph.nodes[0].position, Point::new(0.0, 50.0));
	}

	#[test]
	fn rows_wrap_at_capacity_and_stay_centered() {
		let config = TieredConfig::default();
		let nodes: Vec<Entity> = (0..8).map(|i| entity(&format!("n{i}"), Some(2))).collect();

		let graph = tiered_layout(&nodes, &[], TierDirection::TopDown, &config);
		let pos: Vec<Point> = graph.nodes.iter().map(|n| n.position).collect();

		// First row: six boxes, 350 apart, centered on x = 0.
		assert_eq!(pos[0], Point::new(-875.0, 50.0));
		assert_eq!(pos[5], Point::new(875.0, 50.0));
		assert_eq!(pos[1].x - pos[0].x, config.box_width + config.item_gap);
		// Second row: two boxes, one row pitch further down.
		assert_eq!(pos[6], Point::new(-175.0, 230.0));
		assert_eq!(pos[7], Point::new(175.0, 230.0));
	}

	#[test]
	fn tiers_advance_by_extent_plus_gap() {
		let mut nodes: Vec<Entity> = (0..7).map(|i| entity(&format!("a{i}"), Some(1))).collect();
		nodes.push(entity("p", Some(2)));

		let graph = tiered_layout(&nodes, &[], TierDirection::TopDown, &TieredConfig::default());

		// Tier 1 spans two rows: 100 + 80 + 100 = 280, then a 200 gap.
		assert_eq!(graph.position_of("p"), Some(Point::new(0.0, 480.0 + 50.0)));
	}

	#[test]
	fn empty_tiers_take_no_space() {
		let graph = tiered_layout(
			&[entity("sys", Some(0)), entity("ext", Some(4))],
			&[],
			TierDirection::TopDown,
			&TieredConfig::default(),
		);

		assert_eq!(graph.position_of("sys"), Some(Point::new(0.0, 50.0)));
		assert_eq!(graph.position_of("ext"), Some(Point::new(0.0, 350.0)));
	}

	#[test]
	fn left_right_swaps_axes() {
		let graph = tiered_layout(
			&[entity("a", Some(1)), entity("b", Some(1)), entity("p", Some(2))],
			&[],
			TierDirection::LeftRight,
			&TieredConfig::default(),
		);

		// Column of two boxes 100 tall with a 150 gap; tiers 200 wide.
		assert_eq!(graph.position_of("a"), Some(Point::new(100.0, -125.0)));
		assert_eq!(graph.position_of("b"), Some(Point::new(100.0, 125.0)));
		assert_eq!(graph.position_of("p"), Some(Point::new(500.0, 0.0)));
	}

	#[test]
	fn columns_wrap_at_capacity_left_to_right() {
		let config = TieredConfig::default();
		let mut nodes: Vec<Entity> = (0..8).map(|i| entity(&format!("n{i}"), Some(2))).collect();
		nodes.push(entity("kid", Some(3)));

		let graph = tiered_layout(&nodes, &[], TierDirection::LeftRight, &config);
		let pos: Vec<Point> = graph.nodes.iter().map(|n| n.position).collect();

		// First column: six boxes, 250 apart, centered on y = 0.
		assert_eq!(pos[0], Point::new(100.0, -625.0));
		assert_eq!(pos[5], Point::new(100.0, 625.0));
		assert_eq!(pos[1].y - pos[0].y, config.box_height + config.item_gap);
		// Second column: one box width plus the chunk gap further right.
		assert_eq!(pos[6], Point::new(380.0, -125.0));
		assert_eq!(pos[7], Point::new(380.0, 125.0));
		assert_eq!(pos[6].x - pos[0].x, config.box_width + config.chunk_gap);
		// Tier 2 spans 200 + 80 + 200 = 480, then a 200 gap.
		assert_eq!(graph.position_of("kid"), Some(Point::new(680.0 + 100.0, 0.0)));
	}

	#[test]
	fn unclassified_nodes_trail_and_order_is_stable() {
		let nodes = vec![
			entity("x", None),
			entity("c1", Some(3)),
			entity("a", Some(1)),
			entity("c2", Some(3)),
			entity("y", Some(9)),
		];

		let graph = tiered_layout(&nodes, &[], TierDirection::TopDown, &TieredConfig::default());
		assert_eq!(ids(&graph), vec!["a", "c1", "c2", "x", "y"]);
	}

	#[test]
	fn edges_pass_through_unchanged() {
		let edges = vec![relationship("a", "b"), relationship("b", "ghost")];
		let graph = tiered_layout(
			&[entity("a", Some(1)), entity("b", Some(2))],
			&edges,
			TierDirection::TopDown,
			&TieredConfig::default(),
		);
		assert_eq!(graph.edges, edges);
	}

	#[test]
	fn empty_input_yields_empty_layout() {
		let graph = tiered_layout(&[], &[], TierDirection::TopDown, &TieredConfig::default());
		assert!(graph.nodes.is_empty());
	}

	proptest! {
		#[test]
		fn every_node_placed_once_and_deterministically(
			levels in prop::collection::vec(prop::option::of(0i64..7), 0..60),
			left_right in any::<bool>(),
		) {
			let nodes: Vec<Entity> = levels
				.iter()
				.enumerate()
				.map(|(i, level)| entity(&format!("n{i}"), *level))
				.collect();
			let direction = if left_right { TierDirection::LeftRight } else { TierDirection::TopDown };
			let config = TieredConfig::default();

			let first = tiered_layout(&nodes, &[], direction, &config);
			let second = tiered_layout(&nodes, &[], direction, &config);

			prop_assert_eq!(first.nodes.len(), nodes.len());
			let mut seen: Vec<&str> = ids(&first);
			seen.sort_unstable();
			seen.dedup();
			prop_assert_eq!(seen.len(), nodes.len());
			prop_assert_eq!(first, second);
		}
	}
}
