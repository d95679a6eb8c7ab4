//! Small builders shared by the unit tests.

use super::types::{Entity, Relationship, RelationshipKind};

pub fn entity(id: &str, level: Option<i64>) -> Entity {
	Entity {
		id: id.to_string(),
		label: id.to_uppercase(),
		logical_name: id.to_string(),
		hierarchy_level: level,
		..Entity::default()
	}
}

pub fn relationship(source: &str, target: &str) -> Relationship {
	Relationship {
		id: format!("{source}_{target}"),
		schema_name: format!("{source}_{target}"),
		kind: RelationshipKind::OneToMany,
		source_entity: source.to_string(),
		target_entity: target.to_string(),
		source_attribute: None,
		target_attribute: None,
		intersect_entity: None,
		entity1_attribute: None,
		entity2_attribute: None,
	}
}
