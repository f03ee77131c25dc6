//! Simulation state for the route graph.
//!
//! Wraps the `force_graph` physics simulation with per-node and per-link
//! display data, the pan/zoom transform, the current pointer gesture, and the
//! fade-in of the route highlight.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use super::types::GraphData;

/// Per-node display data attached to each simulation node.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: String,
	pub color: Color,
	/// Radius multiplier; route endpoints are drawn larger.
	pub size: f64,
	pub endpoint: bool,
}

/// Per-link display data, keyed by the simulation node pair.
#[derive(Clone, Copy, Debug)]
pub struct LinkInfo {
	pub distance: u32,
	pub on_route: bool,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor, clamped to 0.1..10.0.
	pub k: f64,
}

/// Pointer gesture in progress.
#[derive(Clone, Debug, Default)]
pub enum Gesture {
	#[default]
	Idle,
	/// Moving a node. Positions are the pointer and node at grab time.
	DragNode {
		node: DefaultNodeIdx,
		pointer: (f64, f64),
		origin: (f32, f32),
	},
	/// Moving the view. `origin` is the transform offset at grab time.
	Pan {
		pointer: (f64, f64),
		origin: (f64, f64),
	},
}

/// Fade-in of the route emphasis after a new result arrives.
#[derive(Clone, Debug, Default)]
pub struct RouteHighlight {
	intensity: f64,
	active: bool,
}

impl RouteHighlight {
	/// Seconds-scale speed of the exponential ease towards full emphasis.
	const FADE_IN_SPEED: f64 = 4.0;

	fn restart(&mut self, active: bool) {
		self.active = active;
		self.intensity = 0.0;
	}

	fn tick(&mut self, dt: f64) {
		if self.active {
			self.intensity += (1.0 - self.intensity) * (1.0 - (-Self::FADE_IN_SPEED * dt).exp());
		}
	}

	/// Current emphasis in 0.0..=1.0; stays 0 when there is no route.
	pub fn intensity(&self) -> f64 {
		self.intensity
	}
}

/// Core graph state: physics simulation plus view and interaction state.
///
/// Created when the component mounts and refilled whenever a new route plan
/// arrives, keeping the current pan/zoom.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub links: HashMap<(DefaultNodeIdx, DefaultNodeIdx), LinkInfo>,
	pub transform: ViewTransform,
	pub gesture: Gesture,
	pub highlight: RouteHighlight,
	pub width: f64,
	pub height: f64,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(Self::parameters()),
			links: HashMap::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			gesture: Gesture::Idle,
			highlight: RouteHighlight::default(),
			width,
			height,
		};
		state.set_data(data, theme);
		state
	}

	fn parameters() -> SimulationParameters {
		SimulationParameters {
			force_charge: 250.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}

	/// Replaces the simulated graph with `data`.
	pub fn set_data(&mut self, data: &GraphData, theme: &Theme) {
		self.graph = ForceGraph::new(Self::parameters());
		self.links.clear();
		self.gesture = Gesture::Idle;

		let mut id_to_idx = HashMap::new();
		let count = data.nodes.len().max(1) as f64;
		// Graph coordinates are centred on the origin; the view transform
		// moves the origin to the middle of the canvas.
		let spread = 40.0 * count.sqrt();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = self.graph.add_node(NodeData {
				x: (spread * angle.cos()) as f32,
				y: (spread * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color: theme.palette.get(i),
					size: if node.endpoint { 1.25 } else { 1.0 },
					endpoint: node.endpoint,
				},
			});
			id_to_idx.insert(node.id, idx);
		}

		for link in &data.links {
			let ends = (id_to_idx.get(&link.source), id_to_idx.get(&link.target));
			if let (Some(&src), Some(&tgt)) = ends {
				self.graph.add_edge(src, tgt, EdgeData::default());
				self.links.insert(
					(src, tgt),
					LinkInfo {
						distance: link.distance,
						on_route: link.on_route,
					},
				);
			}
		}

		self.highlight.restart(data.route_links().next().is_some());
	}

	/// Display data for the link between two simulation nodes, either order.
	pub fn link(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> Option<LinkInfo> {
		self.links
			.get(&(a, b))
			.or_else(|| self.links.get(&(b, a)))
			.copied()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius * node.data.user_data.size {
				found = Some(node.index());
			}
		});
		found
	}

	/// Starts a drag on the node under the pointer, or a pan otherwise.
	pub fn begin_gesture(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		self.gesture = match self.node_at_position(sx, sy, config) {
			Some(idx) => {
				let mut origin = (0.0, 0.0);
				self.graph.visit_nodes(|node| {
					if node.index() == idx {
						origin = (node.x(), node.y());
					}
				});
				Gesture::DragNode {
					node: idx,
					pointer: (sx, sy),
					origin,
				}
			}
			None => Gesture::Pan {
				pointer: (sx, sy),
				origin: (self.transform.x, self.transform.y),
			},
		};
	}

	/// Applies pointer movement to the gesture in progress.
	pub fn move_gesture(&mut self, sx: f64, sy: f64) {
		match self.gesture {
			Gesture::Idle => {}
			Gesture::DragNode {
				node,
				pointer,
				origin,
			} => {
				let k = self.transform.k;
				let nx = origin.0 + ((sx - pointer.0) / k) as f32;
				let ny = origin.1 + ((sy - pointer.1) / k) as f32;
				self.graph.visit_nodes_mut(|n| {
					if n.index() == node {
						n.data.x = nx;
						n.data.y = ny;
						n.data.is_anchor = true;
					}
				});
			}
			Gesture::Pan { pointer, origin } => {
				self.transform.x = origin.0 + (sx - pointer.0);
				self.transform.y = origin.1 + (sy - pointer.1);
			}
		}
	}

	/// Ends the gesture. Dragged nodes stay pinned where they were dropped.
	pub fn end_gesture(&mut self) {
		self.gesture = Gesture::Idle;
	}

	/// Zooms by `factor` around the screen point `(sx, sy)`.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.highlight.tick(dt as f64);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn data() -> GraphData {
		let node = |id: usize, label: &str, endpoint| GraphNode {
			id,
			label: label.to_string(),
			endpoint,
		};
		GraphData {
			nodes: vec![node(0, "a", true), node(1, "b", false), node(2, "c", true)],
			links: vec![
				GraphLink {
					source: 0,
					target: 1,
					distance: 5,
					on_route: true,
				},
				GraphLink {
					source: 1,
					target: 2,
					distance: 3,
					on_route: true,
				},
			],
		}
	}

	#[test]
	fn links_are_found_in_either_order() {
		let state = ForceGraphState::new(&data(), 800.0, 400.0, &Theme::default());
		assert_eq!(state.links.len(), 2);
		let &(a, b) = state.links.keys().next().unwrap();
		assert!(state.link(a, b).is_some());
		assert!(state.link(b, a).is_some());
	}

	#[test]
	fn route_highlight_fades_in() {
		let mut state = ForceGraphState::new(&data(), 800.0, 400.0, &Theme::default());
		assert_eq!(state.highlight.intensity(), 0.0);
		state.tick(0.016);
		let first = state.highlight.intensity();
		assert!(first > 0.0);
		for _ in 0..200 {
			state.tick(0.016);
		}
		assert!(state.highlight.intensity() > first);
		assert!(state.highlight.intensity() <= 1.0);
	}

	#[test]
	fn no_route_no_highlight() {
		let mut plain = data();
		for link in &mut plain.links {
			link.on_route = false;
		}
		let mut state = ForceGraphState::new(&plain, 800.0, 400.0, &Theme::default());
		state.tick(0.016);
		assert_eq!(state.highlight.intensity(), 0.0);
	}

	#[test]
	fn pan_and_zoom() {
		let mut state = ForceGraphState::new(&data(), 800.0, 400.0, &Theme::default());
		// Far corner, away from every node.
		state.begin_gesture(5.0, 5.0, &ScaleConfig::default());
		assert!(matches!(state.gesture, Gesture::Pan { .. }));
		state.move_gesture(25.0, 15.0);
		assert_eq!((state.transform.x, state.transform.y), (420.0, 210.0));
		state.end_gesture();

		state.zoom_at(420.0, 210.0, 2.0);
		assert_eq!(state.transform.k, 2.0);
		assert_eq!((state.transform.x, state.transform.y), (420.0, 210.0));
		assert_eq!(state.screen_to_graph(440.0, 210.0), (10.0, 0.0));
	}
}
