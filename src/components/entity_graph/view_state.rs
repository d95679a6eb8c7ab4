//! Full/focused view state and the reducer that drives it.
//!
//! [`reduce`] is a pure function of `(state, event, dataset)`. [`Explorer`]
//! wraps it with the dataset, a per-version layout cache, and the derived
//! [`Display`] that the presentation layer draws.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use log::{debug, info, warn};

use super::adjacency::AdjacencyIndex;
use super::config::LayoutConfig;
use super::focus::extract_focus;
use super::layout::{LayoutMode, PositionedGraph, PositionedNode, full_layout};
use super::types::{Entity, GraphData, Relationship, Tier};

/// One step of the focus history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
	/// Entity id to focus when clicked.
	pub id: String,
	/// Entity label shown in the trail.
	pub label: String,
}

/// Whether the whole graph or a single neighborhood is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	/// Every entity, laid out with the current [`LayoutMode`].
	#[default]
	Full,
	/// One entity and its direct neighbors.
	Focused {
		/// Focused entity id.
		selected: String,
	},
}

/// Everything the user has chosen about what to look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
	/// Full or focused.
	pub mode: ViewMode,
	/// Focus history, oldest first. Empty exactly when `mode` is `Full`.
	pub breadcrumbs: Vec<Breadcrumb>,
	/// Tiers drawn in the full view. Ignored while focused.
	pub visible_tiers: BTreeSet<Tier>,
	/// Strategy for the full view.
	pub layout_mode: LayoutMode,
	/// Entity under the pointer.
	pub hovered: Option<String>,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			mode: ViewMode::Full,
			breadcrumbs: Vec::new(),
			visible_tiers: Tier::ALL.into_iter().collect(),
			layout_mode: LayoutMode::default(),
			hovered: None,
		}
	}
}

impl ViewState {
	/// Focused entity id, `None` in the full view.
	pub fn selected_id(&self) -> Option<&str> {
		match &self.mode {
			ViewMode::Full => None,
			ViewMode::Focused { selected } => Some(selected.as_str()),
		}
	}

	/// Whether a single neighborhood is shown.
	pub fn is_focused(&self) -> bool {
		matches!(self.mode, ViewMode::Focused { .. })
	}

	fn focus_on(&self, entity: &Entity) -> Self {
		let mut next = self.clone();
		next.mode = ViewMode::Focused {
			selected: entity.id.clone(),
		};
		next.breadcrumbs.push(Breadcrumb {
			id: entity.id.clone(),
			label: entity.label.clone(),
		});
		next
	}

	fn show_all(&self) -> Self {
		Self {
			mode: ViewMode::Full,
			breadcrumbs: Vec::new(),
			..self.clone()
		}
	}
}

/// User interactions understood by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
	/// An entity card was clicked. Clicking the focused entity again leaves focus.
	NodeClicked(String),
	/// Empty space was clicked.
	BackgroundClicked,
	/// The "All Entities" root of the breadcrumb trail was clicked.
	ShowAll,
	/// The breadcrumb at this index was clicked.
	BreadcrumbClicked(usize),
	/// A tier checkbox was flipped. Only honored in the full view.
	TierToggled(Tier),
	/// An entity was picked from search results. Behaves like [`ViewEvent::NodeClicked`].
	SearchSelected(String),
	/// A different full-view strategy was picked. Focus is kept.
	LayoutModeChanged(LayoutMode),
	/// The pointer entered an entity card, or left it (`None`).
	HoverChanged(Option<String>),
}

/// Compute the state that follows `event`.
///
/// Events that reference unknown entities or breadcrumbs leave the state unchanged.
pub fn reduce(state: &ViewState, event: &ViewEvent, dataset: &Dataset) -> ViewState {
	match event {
		ViewEvent::NodeClicked(id) | ViewEvent::SearchSelected(id) => {
			let Some(entity) = dataset.entity(id) else {
				warn!("entity-graph: {event:?} names an unknown entity");
				return state.clone();
			};
			if state.selected_id() == Some(id.as_str()) {
				debug!("entity-graph: {id} picked again, leaving focus");
				state.show_all()
			} else {
				debug!("entity-graph: focusing {id}");
				state.focus_on(entity)
			}
		}
		ViewEvent::BackgroundClicked | ViewEvent::ShowAll => {
			if state.is_focused() {
				debug!("entity-graph: back to full view");
				state.show_all()
			} else {
				state.clone()
			}
		}
		ViewEvent::BreadcrumbClicked(index) => {
			let Some(crumb) = state.breadcrumbs.get(*index) else {
				warn!(
					"entity-graph: breadcrumb {index} out of range ({} entries)",
					state.breadcrumbs.len()
				);
				return state.clone();
			};
			if dataset.entity(&crumb.id).is_none() {
				warn!("entity-graph: breadcrumb target {} no longer exists", crumb.id);
				return state.clone();
			}

			let mut next = state.clone();
			next.mode = ViewMode::Focused {
				selected: crumb.id.clone(),
			};
			next.breadcrumbs.truncate(index + 1);
			debug!("entity-graph: back to breadcrumb {index} ({})", crumb.id);
			next
		}
		ViewEvent::TierToggled(tier) => {
			if state.is_focused() {
				debug!("entity-graph: ignoring tier toggle while focused");
				return state.clone();
			}
			let mut next = state.clone();
			if !next.visible_tiers.remove(tier) {
				next.visible_tiers.insert(*tier);
			}
			next
		}
		ViewEvent::LayoutModeChanged(mode) => ViewState {
			layout_mode: *mode,
			..state.clone()
		},
		ViewEvent::HoverChanged(hovered) => ViewState {
			hovered: hovered.clone(),
			..state.clone()
		},
	}
}

/// A loaded graph payload with its lookup structures.
///
/// `version` identifies the payload; layouts cached for one version are never
/// served for another.
#[derive(Clone, Debug)]
pub struct Dataset {
	/// Identity of this payload.
	pub version: u64,
	/// Entities in payload order.
	pub nodes: Vec<Entity>,
	/// Relationships in payload order.
	pub edges: Vec<Relationship>,
	/// Neighbor lookup over `edges`.
	pub adjacency: AdjacencyIndex,
	by_id: HashMap<String, usize>,
}

impl Dataset {
	/// Index a payload under `version`.
	pub fn new(data: GraphData, version: u64) -> Self {
		info!(
			"entity-graph: dataset v{version} with {} entities, {} relationships",
			data.nodes.len(),
			data.edges.len()
		);
		if data.node_count != 0 && data.node_count != data.nodes.len() {
			warn!(
				"entity-graph: payload reports {} entities but carries {}",
				data.node_count,
				data.nodes.len()
			);
		}
		if data.edge_count != 0 && data.edge_count != data.edges.len() {
			warn!(
				"entity-graph: payload reports {} relationships but carries {}",
				data.edge_count,
				data.edges.len()
			);
		}

		let by_id = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, e)| (e.id.clone(), i))
			.collect();

		Self {
			version,
			adjacency: AdjacencyIndex::build(&data.edges),
			nodes: data.nodes,
			edges: data.edges,
			by_id,
		}
	}

	/// Entity with this id.
	pub fn entity(&self, id: &str) -> Option<&Entity> {
		self.by_id.get(id).map(|&i| &self.nodes[i])
	}
}

/// Full-graph layouts memoized per (dataset version, layout mode).
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
	version: u64,
	layouts: HashMap<LayoutMode, Arc<PositionedGraph>>,
}

impl LayoutCache {
	/// Full layout for `mode`, computed at most once per dataset version.
	pub fn get_or_compute(
		&mut self,
		dataset: &Dataset,
		mode: LayoutMode,
		config: &LayoutConfig,
	) -> Arc<PositionedGraph> {
		if self.version != dataset.version {
			self.layouts.clear();
			self.version = dataset.version;
		}
		self.layouts
			.entry(mode)
			.or_insert_with(|| {
				debug!("entity-graph: computing {mode:?} layout for v{}", dataset.version);
				Arc::new(full_layout(mode, &dataset.nodes, &dataset.edges, config))
			})
			.clone()
	}
}

/// What the presentation layer should draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Display {
	/// The cached full layout; nodes outside `visible_tiers` are hidden, not moved.
	Full {
		/// Cached full layout, shared with the cache.
		layout: Arc<PositionedGraph>,
		/// Tiers drawn; other nodes keep their place but are hidden.
		visible_tiers: BTreeSet<Tier>,
	},
	/// A radially laid-out star around `selected_id`.
	Focused {
		/// Entity at the center.
		selected_id: String,
		/// The star, laid out radially.
		graph: PositionedGraph,
	},
}

impl Display {
	/// Graph being drawn.
	pub fn graph(&self) -> &PositionedGraph {
		match self {
			Display::Full { layout, .. } => layout,
			Display::Focused { graph, .. } => graph,
		}
	}

	/// Focused entity id, `None` in the full view.
	pub fn selected_id(&self) -> Option<&str> {
		match self {
			Display::Full { .. } => None,
			Display::Focused { selected_id, .. } => Some(selected_id.as_str()),
		}
	}

	/// Whether `node` is drawn.
	pub fn is_visible(&self, node: &PositionedNode) -> bool {
		match self {
			Display::Full { visible_tiers, .. } => visible_tiers.contains(&node.tier()),
			Display::Focused { .. } => true,
		}
	}

	/// Nodes that are drawn.
	pub fn visible_nodes(&self) -> impl Iterator<Item = &PositionedNode> {
		self.graph().nodes.iter().filter(|n| self.is_visible(n))
	}
}

/// Dataset, configuration, cached layouts and the current view, kept together.
#[derive(Clone, Debug)]
pub struct Explorer {
	dataset: Dataset,
	config: LayoutConfig,
	cache: LayoutCache,
	state: ViewState,
	display: Display,
}

impl Explorer {
	/// Explorer over `data` in the initial full view.
	pub fn new(data: GraphData, config: LayoutConfig) -> Self {
		let dataset = Dataset::new(data, 1);
		let state = ViewState::default();
		let mut cache = LayoutCache::default();
		let display = derive_display(&state, &dataset, &mut cache, &config);
		Self {
			dataset,
			config,
			cache,
			state,
			display,
		}
	}

	/// Replace the dataset; the view resets to its initial state.
	pub fn reload(&mut self, data: GraphData) {
		self.dataset = Dataset::new(data, self.dataset.version + 1);
		self.state = ViewState::default();
		self.display = derive_display(&self.state, &self.dataset, &mut self.cache, &self.config);
	}

	/// Apply `event` and refresh the display if it changed what is drawn.
	pub fn dispatch(&mut self, event: ViewEvent) {
		let next = reduce(&self.state, &event, &self.dataset);
		let redraw = next.mode != self.state.mode
			|| next.layout_mode != self.state.layout_mode
			|| next.visible_tiers != self.state.visible_tiers;
		self.state = next;
		if redraw {
			self.display = derive_display(&self.state, &self.dataset, &mut self.cache, &self.config);
		}
	}

	/// Current view state.
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// Loaded dataset.
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	/// What to draw.
	pub fn display(&self) -> &Display {
		&self.display
	}
}

fn derive_display(
	state: &ViewState,
	dataset: &Dataset,
	cache: &mut LayoutCache,
	config: &LayoutConfig,
) -> Display {
	let full = cache.get_or_compute(dataset, state.layout_mode, config);
	match &state.mode {
		ViewMode::Full => Display::Full {
			layout: full,
			visible_tiers: state.visible_tiers.clone(),
		},
		ViewMode::Focused { selected } => {
			let focus = extract_focus(selected, &dataset.adjacency, &full.nodes, &full.edges);
			debug!(
				"entity-graph: {selected} has {} neighbors, {} relationships",
				focus.neighbor_count(),
				focus.edges.len()
			);
			Display::Focused {
				selected_id: selected.clone(),
				graph: focus.into_radial_layout(&config.radial),
			}
		}
	}
}
