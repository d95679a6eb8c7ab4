//! Entity relationship graph explorer.
//!
//! Lays an entity catalog out by hierarchy tier and lets the user drill into
//! one entity's neighborhood at a time:
//! - Tiered (top-down or left-right) and concentric layouts of the full graph
//! - A radial star around the focused entity, one ring per tier
//! - Breadcrumb history, tier filtering, and search
//!
//! # Example
//!
//! ```ignore
//! use entity_graph::{EntityGraphView, GraphData, LayoutConfig};
//!
//! let data: GraphData = serde_json::from_str(payload)?;
//!
//! view! { <EntityGraphView data=data.into() config=LayoutConfig::default() /> }
//! ```

pub mod adjacency;
mod component;
pub mod config;
pub mod focus;
pub mod layout;
pub mod search;
pub mod theme;
mod types;
pub mod view_state;

#[cfg(test)]
mod fixtures;

pub use adjacency::AdjacencyIndex;
pub use component::EntityGraphView;
pub use config::{ConcentricConfig, LayoutConfig, RadialConfig, TieredConfig};
pub use focus::{FocusedSubgraph, extract_focus};
pub use layout::{
	Bounds, LayoutMode, Point, PositionedGraph, PositionedNode, TierDirection, concentric_layout,
	full_layout, radial_focus_layout, tiered_layout,
};
pub use search::{MAX_SEARCH_RESULTS, search_entities};
pub use theme::{EntityBadge, Theme, ThemeMode, entity_badges};
pub use types::{Entity, GraphData, Relationship, RelationshipKind, RequiredField, Tier};
pub use view_state::{
	Breadcrumb, Dataset, Display, Explorer, LayoutCache, ViewEvent, ViewMode, ViewState, reduce,
};
