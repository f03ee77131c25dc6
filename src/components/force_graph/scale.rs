//! Zoom-dependent sizes for graph visuals.
//!
//! Drawing happens after the canvas transform is applied, so every value
//! handed to the renderer is in world-space. A [`ScaleBehavior`] says how a
//! base size reacts to the zoom level `k`:
//!
//! - [`ScaleBehavior::World`] grows and shrinks with the graph.
//! - [`ScaleBehavior::Screen`] keeps a fixed pixel size.
//! - [`ScaleBehavior::Clamped`] grows with the graph within pixel bounds.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	World,
	Screen,
	/// `(min_screen, max_screen)` in pixels; infinities leave a side open.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Base sizes and their zoom behavior.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Node radius in world units. Sized to fit a letter.
	pub node_radius: f64,
	pub node_behavior: ScaleBehavior,
	/// Extra slack around a node for picking it with the mouse.
	pub hit_padding: f64,
	/// Node letter size in world units.
	pub label_size: f64,
	pub label_behavior: ScaleBehavior,
	/// Link line width in screen pixels.
	pub edge_width: f64,
	/// Distance label size in screen pixels.
	pub weight_label_size: f64,
	/// Distance labels are hidden below this zoom level.
	pub weight_label_min_k: f64,
	/// Endpoint ring width and gap in screen pixels.
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node_radius: 15.0,
			node_behavior: ScaleBehavior::Clamped {
				min_screen: 6.0,
				max_screen: f64::INFINITY,
			},
			hit_padding: 4.0,
			label_size: 14.0,
			label_behavior: ScaleBehavior::Clamped {
				min_screen: 8.0,
				max_screen: 28.0,
			},
			edge_width: 1.5,
			weight_label_size: 11.0,
			weight_label_min_k: 0.4,
			ring_width: 2.0,
			ring_offset: 3.0,
		}
	}
}

/// Scale values for one frame at zoom `k`, all in world-space.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub node_radius: f64,
	pub hit_radius: f64,
	/// Canvas font for node letters, e.g. `"bold 14px sans-serif"`.
	pub label_font: String,
	pub edge_width: f64,
	pub weight_font: String,
	pub show_weights: bool,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let node_radius = config.node_behavior.apply(config.node_radius, k);
		let label_size = config.label_behavior.apply(config.label_size, k);

		Self {
			k,
			node_radius,
			hit_radius: node_radius + config.hit_padding / k,
			label_font: format!("bold {label_size}px sans-serif"),
			edge_width: config.edge_width / k,
			weight_font: format!("{}px sans-serif", config.weight_label_size / k),
			show_weights: k >= config.weight_label_min_k,
			ring_width: config.ring_width / k,
			ring_offset: config.ring_offset / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn behaviors() {
		assert_eq!(ScaleBehavior::World.apply(10.0, 2.0), 10.0);
		assert_eq!(ScaleBehavior::Screen.apply(10.0, 2.0), 5.0);
		let clamped = ScaleBehavior::Clamped {
			min_screen: 6.0,
			max_screen: 30.0,
		};
		// 10 world units at k=0.5 would be 5px, raised to 6px.
		assert_eq!(clamped.apply(10.0, 0.5), 12.0);
		// 10 world units at k=4 would be 40px, capped at 30px.
		assert_eq!(clamped.apply(10.0, 4.0), 7.5);
		assert_eq!(clamped.apply(10.0, 1.0), 10.0);
	}

	#[test]
	fn weights_hidden_when_zoomed_out() {
		let config = ScaleConfig::default();
		assert!(ScaledValues::new(&config, 1.0).show_weights);
		assert!(!ScaledValues::new(&config, 0.2).show_weights);
	}
}
