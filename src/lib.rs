//! entity-graph: Tier-aware explorer for entity relationship graphs.
//!
//! This crate provides a WASM-based explorer that lays an entity catalog out by
//! hierarchy tier and drills into one entity's neighborhood at a time, with
//! breadcrumb navigation, tier filtering, and search.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::entity_graph::{
	AdjacencyIndex, Breadcrumb, Display, Entity, EntityGraphView, Explorer, GraphData, LayoutConfig,
	LayoutMode, Point, PositionedGraph, PositionedNode, Relationship, ThemeMode, Tier, ViewEvent,
	ViewMode, ViewState, reduce,
};

/// Id of the script element carrying the graph payload.
pub const GRAPH_DATA_ID: &str = "graph-data";
/// Id of the optional script element carrying layout overrides.
pub const LAYOUT_CONFIG_ID: &str = "layout-config";

/// Why the graph payload could not be read from the page.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// Not running in a browser document.
	#[error("no browser window available")]
	NoWindow,

	/// The page has no element with this id.
	#[error("no element with id '{0}'")]
	MissingElement(String),

	/// The element with this id is not a `<script>`.
	#[error("element '{0}' is not a <script>")]
	NotAScript(String),

	/// The script with this id is blank.
	#[error("script '{0}' has no text")]
	EmptyScript(String),

	/// The payload is not a valid graph.
	#[error("invalid graph JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("entity-graph: logging initialized");
}

fn script_text(id: &str) -> Result<String, LoadError> {
	let window: Window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let document = window.document().ok_or(LoadError::NoWindow)?;
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| LoadError::MissingElement(id.to_string()))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| LoadError::NotAScript(id.to_string()))?;
	let text = script
		.text()
		.map_err(|_| LoadError::EmptyScript(id.to_string()))?;
	if text.trim().is_empty() {
		return Err(LoadError::EmptyScript(id.to_string()));
	}
	Ok(text)
}

/// Parse a graph payload: JSON with `{ nodes: [...], edges: [...] }`.
pub fn parse_graph_data(json_text: &str) -> Result<GraphData, LoadError> {
	let data: GraphData = serde_json::from_str(json_text)?;
	info!(
		"entity-graph: loaded {} entities, {} relationships",
		data.nodes.len(),
		data.edges.len()
	);
	Ok(data)
}

/// Load graph data from the script element with id="graph-data".
pub fn load_graph_data() -> Result<GraphData, LoadError> {
	parse_graph_data(&script_text(GRAPH_DATA_ID)?)
}

/// Parse layout overrides. Malformed JSON falls back to the defaults.
pub fn parse_layout_config(json_text: &str) -> LayoutConfig {
	match serde_json::from_str(json_text) {
		Ok(config) => config,
		Err(e) => {
			warn!("entity-graph: ignoring malformed layout config: {e}");
			LayoutConfig::default()
		}
	}
}

/// Load layout overrides from id="layout-config", if the page has one.
pub fn load_layout_config() -> LayoutConfig {
	match script_text(LAYOUT_CONFIG_ID) {
		Ok(text) => parse_layout_config(&text),
		Err(LoadError::MissingElement(_)) => LayoutConfig::default(),
		Err(e) => {
			warn!("entity-graph: layout config unavailable: {e}");
			LayoutConfig::default()
		}
	}
}

/// Main application component.
/// Loads graph data from DOM and renders the explorer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_layout_config();
	let theme_mode = RwSignal::new(ThemeMode::default());
	let body = match load_graph_data() {
		Ok(graph_data) => {
			let graph_signal = Signal::derive(move || graph_data.clone());
			view! { <EntityGraphView data=graph_signal config=config theme_mode=theme_mode /> }.into_any()
		}
		Err(e) => {
			warn!("entity-graph: {e}");
			view! { <p class="load-error">{format!("Could not load entity graph: {e}")}</p> }
				.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme_mode.get().as_str() />
		<Title text="Entity Relationship Explorer" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<div class="graph-overlay">
				<h1>"Entity Relationships"</h1>
				<p class="subtitle">"Click an entity to focus it. Click the background to show everything."</p>
			</div>
			{body}
		</div>
	}
}
