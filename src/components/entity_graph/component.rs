//! Leptos component drawing the explorer as positioned cards over an SVG edge layer.
//!
//! All interaction goes through [`ViewEvent`]s dispatched into a single
//! [`Explorer`] signal. Derived memos split the view so that hovering only
//! redraws edges and the full layout is only re-rendered when the display changes.

use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::config::LayoutConfig;
use super::layout::{LayoutMode, Point};
use super::search::{MAX_SEARCH_RESULTS, search_entities};
use super::theme::{Theme, ThemeMode, edge_emphasis, entity_badges};
use super::types::{GraphData, Tier};
use super::view_state::{Display, Explorer, ViewEvent};

/// Space kept around the outermost cards.
const CANVAS_PADDING: f64 = 40.0;

/// Renders the explorer: graph area, breadcrumbs, and a control panel.
///
/// A new `data` value replaces the dataset and resets the view. The panel's
/// theme button flips `theme_mode`, so a host can mirror it onto the page.
#[component]
pub fn EntityGraphView(
	/// Graph payload.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Layout spacing and radii.
	#[prop(default = LayoutConfig::default())]
	config: LayoutConfig,
	/// Light or dark palette.
	#[prop(default = RwSignal::new(ThemeMode::default()))]
	theme_mode: RwSignal<ThemeMode>,
) -> impl IntoView {
	let theme = Memo::new(move |_| Theme::for_mode(theme_mode.get()));
	let (card_w, card_h) = (config.tiered.box_width, config.tiered.box_height);
	let explorer = RwSignal::new(Explorer::new(data.get_untracked(), config));

	Effect::new(move |prev: Option<()>| {
		let next = data.get();
		if prev.is_some() {
			explorer.update(|e| e.reload(next));
		}
	});

	let dispatch = move |event: ViewEvent| explorer.update(|e| e.dispatch(event));

	let display = Memo::new(move |_| explorer.with(|e| e.display().clone()));
	let hovered = Memo::new(move |_| explorer.with(|e| e.state().hovered.clone()));

	// Layout space is shifted so the top-left card sits at CANVAS_PADDING.
	let frame = Memo::new(move |_| {
		display.with(|d| {
			let bounds = d.graph().bounds();
			let (min, w, h) = bounds
				.map(|b| (b.min, b.width(), b.height()))
				.unwrap_or((Point::ORIGIN, 0.0, 0.0));
			let offset = Point::new(
				CANVAS_PADDING + card_w / 2.0 - min.x,
				CANVAS_PADDING + card_h / 2.0 - min.y,
			);
			(offset, w + card_w + 2.0 * CANVAS_PADDING, h + card_h + 2.0 * CANVAS_PADDING)
		})
	});

	let edges_view = move || {
		let (offset, _, _) = frame.get();
		let hovered = hovered.get();
		display.with(|d| {
			theme.with(|theme| {
				let placed: HashMap<&str, Point> = d
					.visible_nodes()
					.map(|n| (n.id(), n.position))
					.collect();
				let selected = d.selected_id();
				d.graph()
					.edges
					.iter()
					.filter_map(|edge| {
						let from = placed.get(edge.source_entity.as_str())?;
						let to = placed.get(edge.target_entity.as_str())?;
						let emphasis = edge_emphasis(edge, hovered.as_deref(), selected);
						let stroke = theme.edge.stroke(emphasis, hovered.is_some());
						let (x1, y1) = (from.x + offset.x, from.y + offset.y);
						let (x2, y2) = (to.x + offset.x, to.y + offset.y);
						Some(view! {
							<g>
								<line
									x1=format!("{x1:.1}")
									y1=format!("{y1:.1}")
									x2=format!("{x2:.1}")
									y2=format!("{y2:.1}")
									stroke=stroke.color.to_css()
									stroke-width=format!("{:.1}", stroke.width)
								/>
								<text
									class="edge-label"
									x=format!("{:.1}", (x1 + x2) / 2.0)
									y=format!("{:.1}", (y1 + y2) / 2.0)
									fill=stroke.color.to_css()
								>
									{edge.kind.short_label()}
								</text>
							</g>
						})
					})
					.collect_view()
			})
		})
	};

	let nodes_view = move || {
		let (offset, _, _) = frame.get();
		display.with(|d| {
			theme.with(|theme| {
				d.visible_nodes()
					.map(|node| {
						let id = node.id().to_string();
						let count = explorer
							.with_untracked(|e| e.dataset().adjacency.relationship_count(&id));
						let is_selected = d.selected_id() == Some(id.as_str());
						let border = if is_selected {
							theme.highlight
						} else {
							theme.card_border(&node.entity)
						};
						let style = format!(
							"position: absolute; left: {:.1}px; top: {:.1}px; width: {card_w}px; height: {card_h}px; \
							 background: {}; color: {}; border: {}px solid {}; overflow: hidden;",
							node.position.x + offset.x - card_w / 2.0,
							node.position.y + offset.y - card_h / 2.0,
							theme.card_fill(node.tier()).to_css(),
							theme.text.to_css(),
							if is_selected { 3 } else { 2 },
							border.to_css(),
						);
						let (click_id, enter_id) = (id.clone(), id);
						view! {
							<div
								class="entity-card"
								style=style
								on:click=move |ev: MouseEvent| {
									ev.stop_propagation();
									dispatch(ViewEvent::NodeClicked(click_id.clone()));
								}
								on:mouseenter=move |_| {
									let already = explorer
										.with_untracked(|e| e.state().hovered.as_deref() == Some(enter_id.as_str()));
									if !already {
										dispatch(ViewEvent::HoverChanged(Some(enter_id.clone())));
									}
								}
								on:mouseleave=move |_| dispatch(ViewEvent::HoverChanged(None))
							>
								<div class="entity-label">{node.entity.label.clone()}</div>
								<div class="entity-logical-name">{node.entity.logical_name.clone()}</div>
								<div class="entity-tags">
									{entity_badges(&node.entity)
										.into_iter()
										.map(|badge| {
											let (fg, bg) = badge.colors();
											view! {
												<span
													class="entity-tag"
													style=format!("color: {}; background: {};", fg.to_css(), bg.to_css())
												>
													{badge.label()}
												</span>
											}
										})
										.collect_view()}
									{node.entity.required_fields_summary().map(|fields| {
										let n = node.entity.required_fields.len();
										view! {
											<span class="entity-required" title=fields>{format!("{n} required")}</span>
										}
									})}
									<span class="entity-badge" title="Relationships">{count}</span>
								</div>
								{node.entity.description.clone().map(|text| {
									let title = text.clone();
									view! {
										<div
											class="entity-description"
											title=title
											style="display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden;"
										>
											{text}
										</div>
									}
								})}
							</div>
						}
					})
					.collect_view()
			})
		})
	};

	view! {
		<div class="entity-graph">
			<Breadcrumbs explorer=explorer />
			<div
				class="entity-graph-area"
				style=move || theme.with(|t| format!("background: {};", t.background.to_css()))
				on:click=move |_| dispatch(ViewEvent::BackgroundClicked)
			>
				<div
					class="entity-graph-canvas"
					style=move || {
						let (_, w, h) = frame.get();
						format!("position: relative; width: {w:.0}px; height: {h:.0}px;")
					}
				>
					<svg
						class="entity-graph-edges"
						style="position: absolute; top: 0; left: 0;"
						width=move || format!("{:.0}", frame.get().1)
						height=move || format!("{:.0}", frame.get().2)
					>
						{edges_view}
					</svg>
					{nodes_view}
				</div>
			</div>
			<ControlPanel explorer=explorer theme_mode=theme_mode />
		</div>
	}
}

/// "All Entities" root followed by the focus history.
#[component]
fn Breadcrumbs(explorer: RwSignal<Explorer>) -> impl IntoView {
	let crumbs = Memo::new(move |_| explorer.with(|e| e.state().breadcrumbs.clone()));

	view! {
		<nav class="entity-breadcrumbs">
			<button
				class="crumb"
				on:click=move |_| explorer.update(|e| e.dispatch(ViewEvent::ShowAll))
			>
				"All Entities"
			</button>
			{move || {
				crumbs
					.get()
					.into_iter()
					.enumerate()
					.map(|(index, crumb)| {
						view! {
							<span class="crumb-separator">"/"</span>
							<button
								class="crumb"
								title=crumb.id
								on:click=move |_| {
									explorer.update(|e| e.dispatch(ViewEvent::BreadcrumbClicked(index)))
								}
							>
								{crumb.label}
							</button>
						}
					})
					.collect_view()
			}}
		</nav>
	}
}

/// Search, layout mode, tier filters, theme toggle, and a summary of the current view.
#[component]
fn ControlPanel(explorer: RwSignal<Explorer>, theme_mode: RwSignal<ThemeMode>) -> impl IntoView {
	let dispatch = move |event: ViewEvent| explorer.update(|e| e.dispatch(event));
	let (term, set_term) = signal(String::new());
	let focused = Memo::new(move |_| explorer.with(|e| e.state().is_focused()));

	let results = move || {
		let term = term.get();
		explorer.with(|e| {
			search_entities(&e.dataset().nodes, &term, MAX_SEARCH_RESULTS)
				.into_iter()
				.map(|entity| (entity.id.clone(), entity.label.clone(), entity.logical_name.clone()))
				.collect::<Vec<_>>()
		})
	};

	let summary = move || {
		explorer.with(|e| match e.display() {
			Display::Full { .. } => {
				let shown = e.display().visible_nodes().count();
				format!("{shown} of {} entities", e.dataset().nodes.len())
			}
			Display::Focused { selected_id, graph } => format!(
				"{selected_id}: {} neighbors, {} relationships",
				graph.nodes.len().saturating_sub(1),
				graph.edges.len()
			),
		})
	};

	view! {
		<aside class="entity-graph-panel">
			<button
				class="theme-toggle"
				title=move || match theme_mode.get() {
					ThemeMode::Light => "Switch to dark mode",
					ThemeMode::Dark => "Switch to light mode",
				}
				on:click=move |_| theme_mode.update(|mode| *mode = mode.toggled())
			>
				{move || match theme_mode.get() {
					ThemeMode::Light => "Dark",
					ThemeMode::Dark => "Light",
				}}
			</button>
			<input
				class="entity-search"
				type="search"
				placeholder="Search entities"
				prop:value=move || term.get()
				on:input=move |ev| set_term.set(event_target_value(&ev))
			/>
			<ul class="search-results">
				{move || {
					results()
						.into_iter()
						.map(|(id, label, logical_name)| {
							view! {
								<li>
									<button on:click=move |_| {
										set_term.set(String::new());
										dispatch(ViewEvent::SearchSelected(id.clone()));
									}>
										{label}
										<small>{logical_name}</small>
									</button>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>

			<div class="layout-modes">
				{LayoutMode::ALL
					.into_iter()
					.map(|mode| {
						view! {
							<button
								class:active=move || explorer.with(|e| e.state().layout_mode == mode)
								on:click=move |_| dispatch(ViewEvent::LayoutModeChanged(mode))
							>
								{mode.label()}
							</button>
						}
					})
					.collect_view()}
			</div>

			<fieldset class="tier-filters" prop:disabled=move || focused.get()>
				<legend>"Tiers"</legend>
				{Tier::ALL
					.into_iter()
					.map(|tier| {
						let swatch = Theme::default().tiers.get(tier).to_css();
						view! {
							<label>
								<input
									type="checkbox"
									prop:checked=move || {
										explorer.with(|e| e.state().visible_tiers.contains(&tier))
									}
									on:change=move |_| dispatch(ViewEvent::TierToggled(tier))
								/>
								<span class="tier-swatch" style=format!("background: {swatch};") />
								{tier.name()}
							</label>
						}
					})
					.collect_view()}
			</fieldset>

			<p class="view-summary">{summary}</p>
		</aside>
	}
}
