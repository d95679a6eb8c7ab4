//! Deterministic placement strategies.
//!
//! Every strategy is a pure function of its inputs: nodes are grouped into
//! [`Tier`] buckets (ascending, `Other` last, input order kept inside a bucket)
//! and each bucket is placed independently. Relationships are never moved or
//! filtered here; they pass through to the output untouched.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Deserialize;

use super::config::LayoutConfig;
use super::types::{Entity, Relationship, Tier};

mod concentric;
mod radial;
mod tiered;

pub use concentric::concentric_layout;
pub use radial::radial_focus_layout;
pub use tiered::{TierDirection, tiered_layout};

/// A point in layout space. y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downward.
	pub y: f64,
}

impl Point {
	/// The point (0, 0).
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at (`x`, `y`).
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// Angle of `self` seen from `center`, in radians.
	pub fn angle_from(self, center: Point) -> f64 {
		(self.y - center.y).atan2(self.x - center.x)
	}
}

/// An entity with its assigned center coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	/// The entity being placed.
	pub entity: Entity,
	/// Center of the entity's card.
	pub position: Point,
}

impl PositionedNode {
	/// Id of the placed entity.
	pub fn id(&self) -> &str {
		&self.entity.id
	}

	/// Tier of the placed entity.
	pub fn tier(&self) -> Tier {
		self.entity.tier()
	}
}

/// Output of a layout pass: positioned nodes plus the untouched relationships.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionedGraph {
	/// Placed entities.
	pub nodes: Vec<PositionedNode>,
	/// Relationships between them, untouched by layout.
	pub edges: Vec<Relationship>,
}

impl PositionedGraph {
	/// Position of the entity with this id, if placed.
	pub fn position_of(&self, id: &str) -> Option<Point> {
		self.nodes
			.iter()
			.find(|n| n.entity.id == id)
			.map(|n| n.position)
	}

	/// Smallest box containing every node center, `None` when empty.
	pub fn bounds(&self) -> Option<Bounds> {
		Bounds::around(self.nodes.iter().map(|n| n.position))
	}
}

/// Axis-aligned bounding box of node centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Top-left corner.
	pub min: Point,
	/// Bottom-right corner.
	pub max: Point,
}

impl Bounds {
	/// Smallest box holding every point, `None` for no points.
	pub fn around(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let mut points = points.into_iter();
		let first = points.next()?;
		Some(points.fold(
			Bounds {
				min: first,
				max: first,
			},
			|b, p| Bounds {
				min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
				max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
			},
		))
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.max.x - self.min.x
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.max.y - self.min.y
	}
}

/// Strategy used for the full-graph view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
	/// Tiers stacked top to bottom, rows of boxes.
	#[default]
	TreeTopDown,
	/// Tiers stacked left to right, columns of boxes.
	TreeLeftRight,
	/// One ring per tier around a shared center.
	Concentric,
}

impl LayoutMode {
	/// Every mode, in panel order.
	pub const ALL: [LayoutMode; 3] = [
		LayoutMode::TreeTopDown,
		LayoutMode::TreeLeftRight,
		LayoutMode::Concentric,
	];

	/// Button text.
	pub fn label(self) -> &'static str {
		match self {
			LayoutMode::TreeTopDown => "Tree TB",
			LayoutMode::TreeLeftRight => "Tree LR",
			LayoutMode::Concentric => "Rings",
		}
	}
}

/// Lay out the full dataset with the strategy selected by `mode`.
pub fn full_layout(
	mode: LayoutMode,
	nodes: &[Entity],
	edges: &[Relationship],
	config: &LayoutConfig,
) -> PositionedGraph {
	match mode {
		LayoutMode::TreeTopDown => {
			tiered_layout(nodes, edges, TierDirection::TopDown, &config.tiered)
		}
		LayoutMode::TreeLeftRight => {
			tiered_layout(nodes, edges, TierDirection::LeftRight, &config.tiered)
		}
		LayoutMode::Concentric => concentric_layout(nodes, edges, &config.concentric),
	}
}

/// Group items by tier in visiting order, dropping empty tiers.
///
/// Items keep their relative input order inside each bucket.
pub(crate) fn bucket_by_tier<T>(items: &[T], tier_of: impl Fn(&T) -> Tier) -> Vec<(Tier, Vec<&T>)> {
	let mut buckets: [Vec<&T>; Tier::COUNT] = Default::default();
	for item in items {
		buckets[tier_of(item).index()].push(item);
	}

	Tier::ALL
		.into_iter()
		.zip(buckets)
		.filter(|(_, bucket)| !bucket.is_empty())
		.collect()
}

/// Position of slot `index` out of `count` evenly spaced slots on a circle.
///
/// Slot 0 sits at twelve o'clock; slots advance clockwise on screen.
pub(crate) fn ring_slot(center: Point, radius: f64, index: usize, count: usize) -> Point {
	let angle = TAU * index as f64 / count as f64 - FRAC_PI_2;
	Point::new(
		center.x + radius * angle.cos(),
		center.y + radius * angle.sin(),
	)
}
