//! Graph data structures for input to the entity graph explorer.
//!
//! Field names follow the camelCase JSON emitted by the graph endpoint.

use serde::Deserialize;

/// A required attribute shown on an entity card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredField {
	/// Human-readable field name.
	pub display_name: String,
	/// Field name in the data model.
	pub logical_name: String,
}

/// A node in the graph: one entity type of the data model.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
	/// Unique identifier for this entity. Used to reference entities in relationships.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Name in the data model, unique per entity.
	#[serde(default)]
	pub logical_name: String,
	/// Schema (PascalCase) name.
	#[serde(default)]
	pub schema_name: String,
	/// Collection name used by the web API.
	#[serde(default)]
	pub entity_set_name: String,
	/// Primary key attribute.
	#[serde(default)]
	pub primary_id_attribute: String,
	/// Primary display attribute.
	#[serde(default)]
	pub primary_name_attribute: String,
	/// Added on top of the base data model.
	#[serde(default)]
	pub is_custom_entity: bool,
	/// Activity entity (tasks, emails and the like).
	#[serde(default)]
	pub is_activity: bool,
	/// Free-text description.
	#[serde(default)]
	pub description: Option<String>,
	/// Precomputed business hierarchy level. See [`Tier::from_level`].
	#[serde(default)]
	pub hierarchy_level: Option<i64>,
	/// Fields that must be filled in. Shown on the card only.
	#[serde(default)]
	pub required_fields: Vec<RequiredField>,
}

impl Entity {
	/// Tier derived from [`Entity::hierarchy_level`].
	pub fn tier(&self) -> Tier {
		Tier::from_level(self.hierarchy_level)
	}

	/// Required fields as `Display Name (logical_name)` lines, `None` when there are none.
	pub fn required_fields_summary(&self) -> Option<String> {
		if self.required_fields.is_empty() {
			return None;
		}
		let lines: Vec<String> = self
			.required_fields
			.iter()
			.map(|f| format!("{} ({})", f.display_name, f.logical_name))
			.collect();
		Some(lines.join("\n"))
	}
}

/// Cardinality of a relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum RelationshipKind {
	/// One source record, many target records.
	OneToMany,
	/// Joined through an intersect entity.
	ManyToMany,
}

impl RelationshipKind {
	/// Compact edge label.
	pub fn short_label(self) -> &'static str {
		match self {
			RelationshipKind::OneToMany => "1:M",
			RelationshipKind::ManyToMany => "M:M",
		}
	}
}

/// A directed relationship between two entities.
///
/// Direction is kept for display; adjacency and layout treat it as undirected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
	/// Unique identifier for this relationship.
	pub id: String,
	/// Schema name of the relationship.
	#[serde(default)]
	pub schema_name: String,
	/// Cardinality; `type` on the wire.
	#[serde(rename = "type")]
	pub kind: RelationshipKind,
	/// Source entity ID.
	pub source_entity: String,
	/// Target entity ID.
	pub target_entity: String,
	/// Lookup attribute on the source side.
	#[serde(default)]
	pub source_attribute: Option<String>,
	/// Referenced attribute on the target side.
	#[serde(default)]
	pub target_attribute: Option<String>,
	/// Join entity of a many-to-many relationship.
	#[serde(default)]
	pub intersect_entity: Option<String>,
	/// Join attribute for the first entity of a many-to-many relationship.
	#[serde(default)]
	pub entity1_attribute: Option<String>,
	/// Join attribute for the second entity of a many-to-many relationship.
	#[serde(default)]
	pub entity2_attribute: Option<String>,
}

impl Relationship {
	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.source_entity == id || self.target_entity == id
	}
}

/// Complete graph payload: entities, relationships and informational counts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphData {
	/// All entities.
	pub nodes: Vec<Entity>,
	/// All relationships.
	pub edges: Vec<Relationship>,
	/// Entity count as reported by the server. Informational only.
	#[serde(default)]
	pub node_count: usize,
	/// Relationship count as reported by the server. Informational only.
	#[serde(default)]
	pub edge_count: usize,
}

/// Hierarchy tier of an entity.
///
/// Levels 0 through 4 are the classified tiers; anything else, including a
/// missing level, lands in [`Tier::Other`]. Variant order is visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
	/// Level 0: platform/system entities.
	System,
	/// Level 1: account.
	Account,
	/// Level 2: portfolio and project.
	Portfolio,
	/// Level 3: children of portfolio/project.
	Child,
	/// Level 4: remaining organization extensions.
	Extension,
	/// Unclassified.
	Other,
}

impl Tier {
	/// Number of tiers, `Other` included.
	pub const COUNT: usize = 6;

	/// All tiers in ascending order, `Other` last.
	pub const ALL: [Tier; Tier::COUNT] = [
		Tier::System,
		Tier::Account,
		Tier::Portfolio,
		Tier::Child,
		Tier::Extension,
		Tier::Other,
	];

	/// Tier for a hierarchy level. Missing or unknown levels are [`Tier::Other`].
	pub fn from_level(level: Option<i64>) -> Self {
		match level {
			Some(0) => Tier::System,
			Some(1) => Tier::Account,
			Some(2) => Tier::Portfolio,
			Some(3) => Tier::Child,
			Some(4) => Tier::Extension,
			Some(_) | None => Tier::Other,
		}
	}

	/// Numeric level, `None` for [`Tier::Other`].
	pub fn level(self) -> Option<u8> {
		match self {
			Tier::System => Some(0),
			Tier::Account => Some(1),
			Tier::Portfolio => Some(2),
			Tier::Child => Some(3),
			Tier::Extension => Some(4),
			Tier::Other => None,
		}
	}

	/// Position in [`Tier::ALL`].
	pub fn index(self) -> usize {
		self as usize
	}

	/// Name shown next to the tier filter.
	pub fn name(self) -> &'static str {
		match self {
			Tier::System => "System",
			Tier::Account => "Account",
			Tier::Portfolio => "Portfolio / Project",
			Tier::Child => "Child",
			Tier::Extension => "Extension",
			Tier::Other => "Other",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tier_from_level_maps_classified_levels() {
		assert_eq!(Tier::from_level(Some(0)), Tier::System);
		assert_eq!(Tier::from_level(Some(2)), Tier::Portfolio);
		assert_eq!(Tier::from_level(Some(4)), Tier::Extension);
	}

	#[test]
	fn tier_from_level_falls_back_to_other() {
		assert_eq!(Tier::from_level(None), Tier::Other);
		assert_eq!(Tier::from_level(Some(5)), Tier::Other);
		assert_eq!(Tier::from_level(Some(-1)), Tier::Other);
	}

	#[test]
	fn tier_index_matches_all_order() {
		for (i, tier) in Tier::ALL.iter().enumerate() {
			assert_eq!(tier.index(), i);
		}
		assert_eq!(Tier::Other.level(), None);
		assert_eq!(Tier::Child.level(), Some(3));
	}

	#[test]
	fn deserializes_graph_payload() {
		let json = r#"{
			"nodes": [
				{
					"id": "account",
					"label": "Account",
					"logicalName": "account",
					"isCustomEntity": false,
					"isActivity": false,
					"description": "Business that represents a customer",
					"hierarchyLevel": 1,
					"requiredFields": [{ "displayName": "Account Name", "logicalName": "name" }]
				},
				{ "id": "qrt_bond", "label": "Bond", "isCustomEntity": true }
			],
			"edges": [
				{
					"id": "account_bonds",
					"schemaName": "qrt_account_bonds",
					"type": "OneToMany",
					"sourceEntity": "account",
					"targetEntity": "qrt_bond",
					"sourceAttribute": "accountid"
				},
				{
					"id": "bond_tags",
					"type": "ManyToMany",
					"sourceEntity": "qrt_bond",
					"targetEntity": "qrt_tag",
					"intersectEntity": "qrt_bond_tag",
					"entity1Attribute": "qrt_bondid"
				}
			],
			"nodeCount": 2,
			"edgeCount": 2
		}"#;

		let data: GraphData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].tier(), Tier::Account);
		assert_eq!(data.nodes[0].required_fields[0].logical_name, "name");
		assert_eq!(data.nodes[1].tier(), Tier::Other);
		assert!(data.nodes[1].is_custom_entity);
		assert_eq!(data.nodes[1].description, None);

		assert_eq!(data.edges[0].kind, RelationshipKind::OneToMany);
		assert_eq!(data.edges[0].source_attribute.as_deref(), Some("accountid"));
		assert_eq!(data.edges[1].kind.short_label(), "M:M");
		assert_eq!(data.edges[1].entity1_attribute.as_deref(), Some("qrt_bondid"));
		assert_eq!(data.edge_count, 2);
	}

	#[test]
	fn required_fields_summary_lists_each_field() {
		let mut entity = Entity {
			id: "account".into(),
			..Entity::default()
		};
		assert_eq!(entity.required_fields_summary(), None);

		entity.required_fields = vec![
			RequiredField {
				display_name: "Account Name".into(),
				logical_name: "name".into(),
			},
			RequiredField {
				display_name: "Owner".into(),
				logical_name: "ownerid".into(),
			},
		];
		assert_eq!(
			entity.required_fields_summary().as_deref(),
			Some("Account Name (name)\nOwner (ownerid)")
		);
	}

	#[test]
	fn relationship_touches_either_endpoint() {
		let rel = Relationship {
			id: "r".into(),
			schema_name: String::new(),
			kind: RelationshipKind::OneToMany,
			source_entity: "a".into(),
			target_entity: "b".into(),
			source_attribute: None,
			target_attribute: None,
			intersect_entity: None,
			entity1_attribute: None,
			entity2_attribute: None,
		};
		assert!(rel.touches("a"));
		assert!(rel.touches("b"));
		assert!(!rel.touches("c"));
	}
}
