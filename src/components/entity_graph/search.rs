//! Case-insensitive entity lookup for the search box.

use super::types::Entity;

/// Results shown in the search dropdown.
pub const MAX_SEARCH_RESULTS: usize = 8;

/// Entities whose label, logical name, or description contains `term`.
///
/// Blank terms match nothing. Otherwise the term is matched as typed,
/// surrounding whitespace included. Input order is kept and at most `limit`
/// entities are returned.
pub fn search_entities<'a>(nodes: &'a [Entity], term: &str, limit: usize) -> Vec<&'a Entity> {
	if term.trim().is_empty() {
		return Vec::new();
	}
	let term = term.to_lowercase();

	let contains = |text: &str| text.to_lowercase().contains(&term);
	nodes
		.iter()
		.filter(|e| {
			contains(&e.label)
				|| contains(&e.logical_name)
				|| e.description.as_deref().is_some_and(|d| contains(d))
		})
		.take(limit)
		.collect()
}
