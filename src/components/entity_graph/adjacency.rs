//! Undirected neighbor lookup built from the relationship list.

use std::collections::{HashMap, HashSet};

use super::types::Relationship;

/// Symmetric mapping from entity id to the ids it shares a relationship with.
///
/// Built fresh from the full relationship list; never patched incrementally.
/// Ids that only appear in relationships (no matching entity) are indexed too,
/// so callers must check entity existence before drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyIndex {
	neighbors: HashMap<String, HashSet<String>>,
	/// Relationships incident to each id. Parallel relationships each count.
	relationship_counts: HashMap<String, usize>,
}

impl AdjacencyIndex {
	/// Index every relationship in both directions.
	pub fn build(edges: &[Relationship]) -> Self {
		let mut neighbors: HashMap<String, HashSet<String>> = HashMap::new();
		let mut relationship_counts: HashMap<String, usize> = HashMap::new();

		for edge in edges {
			let (src, tgt) = (&edge.source_entity, &edge.target_entity);
			neighbors
				.entry(src.clone())
				.or_default()
				.insert(tgt.clone());
			neighbors
				.entry(tgt.clone())
				.or_default()
				.insert(src.clone());

			*relationship_counts.entry(src.clone()).or_insert(0) += 1;
			if src != tgt {
				*relationship_counts.entry(tgt.clone()).or_insert(0) += 1;
			}
		}

		Self {
			neighbors,
			relationship_counts,
		}
	}

	/// Direct neighbors of `id`, `None` if it never appears in a relationship.
	pub fn neighbors(&self, id: &str) -> Option<&HashSet<String>> {
		self.neighbors.get(id)
	}

	/// Whether a relationship joins `a` and `b`, in either direction.
	pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
		self.neighbors.get(a).is_some_and(|set| set.contains(b))
	}

	/// Number of relationships touching `id`; a self-loop counts once.
	pub fn relationship_count(&self, id: &str) -> usize {
		self.relationship_counts.get(id).copied().unwrap_or(0)
	}

	/// Number of ids present in the index.
	pub fn len(&self) -> usize {
		self.neighbors.len()
	}

	/// Whether no entity has a neighbor.
	pub fn is_empty(&self) -> bool {
		self.neighbors.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::entity_graph::fixtures::relationship;

	#[test]
	fn indexes_both_directions() {
		let index = AdjacencyIndex::build(&[relationship("a", "b"), relationship("b", "c")]);

		assert!(index.are_adjacent("a", "b"));
		assert!(index.are_adjacent("b", "a"));
		assert!(index.are_adjacent("c", "b"));
		assert!(!index.are_adjacent("a", "c"));
		assert_eq!(index.neighbors("b").map(HashSet::len), Some(2));
		assert_eq!(index.len(), 3);
	}

	#[test]
	fn unconnected_id_has_no_entry() {
		let index = AdjacencyIndex::build(&[relationship("a", "b")]);
		assert!(index.neighbors("c").is_none());
		assert_eq!(index.relationship_count("c"), 0);
	}

	#[test]
	fn empty_edge_list_builds_empty_index() {
		let index = AdjacencyIndex::build(&[]);
		assert!(index.is_empty());
	}

	#[test]
	fn parallel_relationships_do_not_duplicate_neighbors() {
		let index = AdjacencyIndex::build(&[
			relationship("a", "b"),
			relationship("b", "a"),
			relationship("a", "b"),
		]);

		assert_eq!(index.neighbors("a").map(HashSet::len), Some(1));
		assert_eq!(index.relationship_count("a"), 3);
		assert_eq!(index.relationship_count("b"), 3);
	}

	#[test]
	fn self_loop_lists_own_id_once() {
		let index = AdjacencyIndex::build(&[relationship("a", "a")]);

		assert!(index.are_adjacent("a", "a"));
		assert_eq!(index.neighbors("a").map(HashSet::len), Some(1));
		assert_eq!(index.relationship_count("a"), 1);
	}

	#[test]
	fn unknown_endpoints_are_still_indexed() {
		let index = AdjacencyIndex::build(&[relationship("account", "ghost")]);
		assert!(index.are_adjacent("ghost", "account"));
	}

	proptest! {
		#[test]
		fn neighbor_sets_are_symmetric(
			pairs in prop::collection::vec((0u8..12, 0u8..12), 0..40)
		) {
			let edges: Vec<_> = pairs
				.iter()
				.map(|(s, t)| relationship(&format!("n{s}"), &format!("n{t}")))
				.collect();
			let index = AdjacencyIndex::build(&edges);

			for edge in &edges {
				prop_assert!(index.are_adjacent(&edge.source_entity, &edge.target_entity));
				prop_assert!(index.are_adjacent(&edge.target_entity, &edge.source_entity));
			}
		}
	}
}
