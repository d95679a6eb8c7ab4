//! Layout configuration for the three placement strategies.
//!
//! Every value lives in design-space pixels. Coordinates name node centers and
//! y grows downward. Each struct deserializes with `#[serde(default)]`, so a
//! host page only needs to spell out the values it wants to change:
//!
//! ```json
//! { "tiered": { "maxPerChunk": 8 }, "radial": { "other": 1400 } }
//! ```

use serde::Deserialize;

use super::layout::Point;
use super::types::Tier;

/// Spacing for the tiered (banded) layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TieredConfig {
	/// Node box width.
	pub box_width: f64,
	/// Node box height.
	pub box_height: f64,
	/// Most nodes placed side by side before wrapping into another row/column.
	pub max_per_chunk: usize,
	/// Gap between neighboring boxes of one chunk.
	pub item_gap: f64,
	/// Gap between consecutive chunks of the same tier.
	pub chunk_gap: f64,
	/// Gap between the last chunk of a tier and the first of the next.
	pub tier_gap: f64,
}

impl Default for TieredConfig {
	fn default() -> Self {
		Self {
			box_width: 200.0,
			box_height: 100.0,
			max_per_chunk: 6,
			item_gap: 150.0,
			chunk_gap: 80.0,
			tier_gap: 200.0,
		}
	}
}

impl TieredConfig {
	/// Chunk capacity, never zero.
	pub fn capacity(&self) -> usize {
		self.max_per_chunk.max(1)
	}
}

/// Ring radii for the full-graph concentric view.
///
/// `levels` holds one radius per classified tier (levels 0 through 4, in
/// order); `other` is the unclassified ring and sits well outside them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConcentricConfig {
	/// Shared center of every ring.
	pub center: Point,
	/// Radii for levels 0 through 4.
	pub levels: [f64; 5],
	/// Radius of the unclassified ring.
	pub other: f64,
}

impl Default for ConcentricConfig {
	fn default() -> Self {
		Self {
			center: Point::ORIGIN,
			levels: [200.0, 450.0, 700.0, 950.0, 1200.0],
			other: 1700.0,
		}
	}
}

impl ConcentricConfig {
	/// Ring radius for `tier`.
	pub fn radius(&self, tier: Tier) -> f64 {
		ring_radius(&self.levels, self.other, tier)
	}
}

/// Ring radii around a focused entity. Same shape as [`ConcentricConfig`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
	/// Where the focused entity is pinned.
	pub center: Point,
	/// Radii for levels 0 through 4.
	pub levels: [f64; 5],
	/// Radius of the unclassified ring.
	pub other: f64,
}

impl Default for RadialConfig {
	fn default() -> Self {
		Self {
			center: Point::ORIGIN,
			levels: [260.0, 420.0, 580.0, 740.0, 900.0],
			other: 1250.0,
		}
	}
}

impl RadialConfig {
	/// Ring radius for `tier`.
	pub fn radius(&self, tier: Tier) -> f64 {
		ring_radius(&self.levels, self.other, tier)
	}
}

fn ring_radius(levels: &[f64; 5], other: f64, tier: Tier) -> f64 {
	match tier.level() {
		Some(level) => levels[level as usize],
		None => other,
	}
}

/// Complete layout configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Full-graph tree layouts.
	pub tiered: TieredConfig,
	/// Full-graph ring layout.
	pub concentric: ConcentricConfig,
	/// Focused neighborhood layout.
	pub radial: RadialConfig,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_radii_increase_with_tier() {
		let config = LayoutConfig::default();
		let concentric: Vec<f64> = Tier::ALL.iter().map(|&t| config.concentric.radius(t)).collect();
		let radial: Vec<f64> = Tier::ALL.iter().map(|&t| config.radial.radius(t)).collect();

		assert!(concentric.windows(2).all(|w| w[0] < w[1]), "{concentric:?}");
		assert!(radial.windows(2).all(|w| w[0] < w[1]), "{radial:?}");
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config: LayoutConfig =
			serde_json::from_str(r#"{ "tiered": { "maxPerChunk": 8 }, "radial": { "other": 1400 } }"#)
				.unwrap();

		assert_eq!(config.tiered.max_per_chunk, 8);
		assert_eq!(config.tiered.box_width, 200.0);
		assert_eq!(config.radial.other, 1400.0);
		assert_eq!(config.radial.levels, RadialConfig::default().levels);
		assert_eq!(config.concentric, ConcentricConfig::default());
	}

	#[test]
	fn center_override_reads_point() {
		let config: LayoutConfig =
			serde_json::from_str(r#"{ "concentric": { "center": { "x": 400, "y": 300 } } }"#).unwrap();
		assert_eq!(config.concentric.center, Point::new(400.0, 300.0));
	}

	#[test]
	fn zero_capacity_is_clamped() {
		let config = TieredConfig {
			max_per_chunk: 0,
			..TieredConfig::default()
		};
		assert_eq!(config.capacity(), 1);
	}
}
