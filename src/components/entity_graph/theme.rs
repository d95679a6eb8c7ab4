//! Visual theming for the entity graph.
//!
//! Tier colors, edge emphasis colors, card decorations, and light/dark palettes.

use super::types::{Entity, Relationship, Tier};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// How strongly an edge is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEmphasis {
	/// Not connected to the hovered or focused entity.
	Idle,
	/// Touches the focused entity.
	Selected,
	/// Touches the hovered entity. Outranks [`EdgeEmphasis::Selected`].
	Hovered,
}

/// Emphasis for `edge` given the hovered and focused entities.
pub fn edge_emphasis(edge: &Relationship, hovered: Option<&str>, selected: Option<&str>) -> EdgeEmphasis {
	if hovered.is_some_and(|id| edge.touches(id)) {
		EdgeEmphasis::Hovered
	} else if selected.is_some_and(|id| edge.touches(id)) {
		EdgeEmphasis::Selected
	} else {
		EdgeEmphasis::Idle
	}
}

/// Stroke settings for one emphasis level.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStroke {
	/// Line and label color.
	pub color: Color,
	/// Line width in pixels.
	pub width: f64,
}

/// Edge visual style.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	/// Default stroke.
	pub idle: EdgeStroke,
	/// Stroke of relationships touching the focused entity.
	pub selected: EdgeStroke,
	/// Stroke of relationships touching the hovered entity.
	pub hovered: EdgeStroke,
	/// Opacity of idle edges while another entity is hovered.
	pub dimmed_alpha: f64,
}

impl EdgeStyle {
	/// Stroke for an emphasis level. `hovering` dims idle edges.
	pub fn stroke(&self, emphasis: EdgeEmphasis, hovering: bool) -> EdgeStroke {
		match emphasis {
			EdgeEmphasis::Hovered => self.hovered.clone(),
			EdgeEmphasis::Selected => self.selected.clone(),
			EdgeEmphasis::Idle if hovering => EdgeStroke {
				color: self.idle.color.with_alpha(self.dimmed_alpha),
				..self.idle.clone()
			},
			EdgeEmphasis::Idle => self.idle.clone(),
		}
	}
}

/// One color per tier, indexed by [`Tier::index`].
#[derive(Clone, Debug, PartialEq)]
pub struct TierPalette {
	/// Tier colors in [`Tier::ALL`] order.
	pub colors: [Color; Tier::COUNT],
}

impl TierPalette {
	/// Color of `tier`.
	pub fn get(&self, tier: Tier) -> Color {
		self.colors[tier.index()]
	}
}

impl Default for TierPalette {
	fn default() -> Self {
		Self {
			colors: [
				Color::rgb(148, 163, 184), // Slate: system
				Color::rgb(251, 113, 133), // Rose: account
				Color::rgb(34, 211, 238),  // Cyan: portfolio/project
				Color::rgb(52, 211, 153),  // Emerald: child
				Color::rgb(167, 139, 250), // Purple: extension
				Color::rgb(148, 163, 184), // Slate: other
			],
		}
	}
}

/// Light or dark page palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	/// Pale page background.
	#[default]
	Light,
	/// Near-black page background.
	Dark,
}

impl ThemeMode {
	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Value for the document's `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}
}

/// Small tag shown on an entity card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityBadge {
	/// The entity is not part of the base data model.
	Custom,
	/// The entity is an activity type.
	Activity,
}

impl EntityBadge {
	/// Badge text.
	pub fn label(self) -> &'static str {
		match self {
			EntityBadge::Custom => "Custom",
			EntityBadge::Activity => "Activity",
		}
	}

	/// (text, background) colors.
	pub fn colors(self) -> (Color, Color) {
		match self {
			EntityBadge::Custom => (Color::rgb(126, 34, 206), Color::rgb(243, 232, 255)),
			EntityBadge::Activity => (Color::rgb(21, 128, 61), Color::rgb(220, 252, 231)),
		}
	}
}

/// Badges for `entity`, in display order.
pub fn entity_badges(entity: &Entity) -> Vec<EntityBadge> {
	let mut badges = Vec::new();
	if entity.is_custom_entity {
		badges.push(EntityBadge::Custom);
	}
	if entity.is_activity {
		badges.push(EntityBadge::Activity);
	}
	badges
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Palette this theme was built for.
	pub mode: ThemeMode,
	/// Graph area background.
	pub background: Color,
	/// Card text, drawn over [`Theme::card_fill`].
	pub text: Color,
	/// Border of the focused entity's card.
	pub highlight: Color,
	/// Border of unclassified custom entities.
	pub custom_entity: Color,
	/// Relationship strokes.
	pub edge: EdgeStyle,
	/// Per-tier card colors.
	pub tiers: TierPalette,
}

impl Default for Theme {
	fn default() -> Self {
		Self::for_mode(ThemeMode::default())
	}
}

impl Theme {
	/// Theme for a light or dark page.
	///
	/// Cards keep pale fills in both modes; only the page background changes.
	pub fn for_mode(mode: ThemeMode) -> Self {
		let background = match mode {
			ThemeMode::Light => Color::rgb(249, 250, 251),
			ThemeMode::Dark => Color::rgb(17, 24, 39),
		};
		Self {
			mode,
			background,
			text: Color::rgb(31, 41, 55),
			highlight: Color::rgb(59, 130, 246),
			custom_entity: Color::rgb(192, 132, 252),
			edge: EdgeStyle {
				idle: EdgeStroke {
					color: Color::rgba(229, 231, 235, 0.4),
					width: 1.5,
				},
				selected: EdgeStroke {
					color: Color::rgb(59, 130, 246),
					width: 3.0,
				},
				hovered: EdgeStroke {
					color: Color::rgb(245, 158, 11),
					width: 3.5,
				},
				dimmed_alpha: 0.15,
			},
			tiers: TierPalette::default(),
		}
	}

	/// Card fill for an entity: its tier color washed toward white.
	pub fn card_fill(&self, tier: Tier) -> Color {
		self.tiers.get(tier).lighten(0.85)
	}

	/// Card border: the tier color, except unclassified custom entities stand out.
	pub fn card_border(&self, entity: &Entity) -> Color {
		match entity.tier() {
			Tier::Other if entity.is_custom_entity => self.custom_entity,
			tier => self.tiers.get(tier),
		}
	}
}
