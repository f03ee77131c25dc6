//! Canvas rendering for the route graph.
//!
//! Drawing order, back to front:
//! 1. Background (screen space)
//! 2. Ordinary links, then route glow and route links (world space)
//! 3. Link distances at the midpoints
//! 4. Nodes with their letters, endpoint rings on top

use std::f64::consts::PI;

use force_graph::Node;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, LinkInfo, NodeInfo};
use super::theme::Theme;

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);
	let route_t = smooth_step(state.highlight.intensity());

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, &scale, theme, route_t);
	if scale.show_weights {
		draw_weights(state, ctx, &scale, theme);
	}
	draw_nodes(state, ctx, &scale, theme, route_t);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = &theme.background;
	let gradient = if bg.use_gradient {
		ctx.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.8,
		)
		.ok()
	} else {
		None
	};

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &bg.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &bg.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&bg.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Visits every link with its endpoints and display data.
fn visit_links(
	state: &ForceGraphState,
	mut f: impl FnMut(&Node<NodeInfo>, &Node<NodeInfo>, LinkInfo),
) {
	state.graph.visit_edges(|n1, n2, _| {
		if let Some(info) = state.link(n1.index(), n2.index()) {
			f(n1, n2, info);
		}
	});
}

fn draw_links(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	route_t: f64,
) {
	let edge = &theme.edge;
	let route = &theme.route;
	let has_route = state.highlight.intensity() > 0.0;

	// Ordinary links dim as the route fades in.
	let dim = 1.0 - (1.0 - edge.dimmed_alpha) * route_t;
	ctx.set_stroke_style_str(&edge.color.with_alpha(edge.color.a * dim).to_css());
	ctx.set_line_width(scale.edge_width);
	visit_links(state, |n1, n2, info| {
		if !(has_route && info.on_route) {
			stroke_line(ctx, n1, n2);
		}
	});

	if !has_route {
		return;
	}

	if route.glow_color.a > 0.0 {
		let glow = route.glow_color.with_alpha(route.glow_color.a * route_t);
		ctx.set_stroke_style_str(&glow.to_css());
		ctx.set_line_width(scale.edge_width * route.width_factor * 3.0);
		visit_links(state, |n1, n2, info| {
			if info.on_route {
				stroke_line(ctx, n1, n2);
			}
		});
	}

	// Route links blend from the ordinary link look into the route color.
	let color = edge.color.lerp(route.color, route_t);
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(scale.edge_width * (1.0 + (route.width_factor - 1.0) * route_t));
	visit_links(state, |n1, n2, info| {
		if info.on_route {
			stroke_line(ctx, n1, n2);
		}
	});
}

fn stroke_line(ctx: &CanvasRenderingContext2d, n1: &Node<NodeInfo>, n2: &Node<NodeInfo>) {
	ctx.begin_path();
	ctx.move_to(n1.x() as f64, n1.y() as f64);
	ctx.line_to(n2.x() as f64, n2.y() as f64);
	ctx.stroke();
}

fn draw_weights(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_font(&scale.weight_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");
	ctx.set_fill_style_str(&theme.edge.label_color.to_css());

	visit_links(state, |n1, n2, info| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let len = (dx * dx + dy * dy).sqrt();
		if len < scale.node_radius * 2.0 {
			return;
		}
		// Nudge the label off the line, perpendicular to it.
		let (px, py) = (-dy / len * 4.0 / scale.k, dx / len * 4.0 / scale.k);
		let (mx, my) = ((x1 + x2) / 2.0 + px, (y1 + y2) / 2.0 + py);
		let _ = ctx.fill_text(&info.distance.to_string(), mx, my);
	});
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	route_t: f64,
) {
	state.graph.visit_nodes(|node| draw_node(ctx, node, scale, theme));

	if route_t > 0.01 {
		ctx.set_stroke_style_str(
			&theme
				.route
				.ring_color
				.with_alpha(theme.route.ring_color.a * route_t)
				.to_css(),
		);
		ctx.set_line_width(scale.ring_width);
		state.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if info.endpoint {
				let radius = scale.node_radius * info.size + scale.ring_offset;
				ctx.begin_path();
				let _ = ctx.arc(node.x() as f64, node.y() as f64, radius, 0.0, 2.0 * PI);
				ctx.stroke();
			}
		});
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let info = &node.data.user_data;
	let radius = scale.node_radius * info.size;

	let gradient = if theme.node.use_gradient {
		ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.ok()
	} else {
		None
	};

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &info.color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &info.color.to_css());
			let _ = gradient.add_color_stop(1.0, &info.color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&info.color.to_css()),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	let _ = ctx.fill_text(&info.label, x, y);
}
