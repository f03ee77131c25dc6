//! Visual theming for the route graph.
//!
//! A theme sets the background, the look of ordinary links, how the route is
//! emphasised, and the node palette.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		let up = |c: u8| (c as f64 + (255.0 - c as f64) * f) as u8;
		Self {
			r: up(self.r),
			g: up(self.g),
			b: up(self.b),
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		let down = |c: u8| (c as f64 * f) as u8;
		Self {
			r: down(self.r),
			g: down(self.g),
			b: down(self.b),
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Node fill colors, cycled by node position.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Harbor blues
	pub fn harbor() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),
				Color::rgb(129, 161, 193),
				Color::rgb(100, 148, 160),
				Color::rgb(136, 160, 175),
				Color::rgb(108, 142, 173),
				Color::rgb(119, 158, 165),
			],
		}
	}

	/// Lagoon teals and violets
	pub fn lagoon() -> Self {
		Self {
			colors: vec![
				Color::rgb(100, 145, 135),
				Color::rgb(115, 135, 155),
				Color::rgb(130, 120, 150),
				Color::rgb(105, 140, 145),
				Color::rgb(120, 130, 160),
				Color::rgb(110, 125, 155),
			],
		}
	}

	/// Clay browns
	pub fn clay() -> Self {
		Self {
			colors: vec![
				Color::rgb(180, 136, 100),
				Color::rgb(160, 125, 100),
				Color::rgb(170, 145, 115),
				Color::rgb(145, 120, 95),
				Color::rgb(175, 150, 120),
				Color::rgb(155, 130, 105),
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Outer color of the radial gradient
	pub color_secondary: Color,
	pub use_gradient: bool,
}

/// Style of links that are not on the route.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	/// Alpha multiplier applied once a route is shown.
	pub dimmed_alpha: f64,
	/// Color of the distance printed at the link midpoint.
	pub label_color: Color,
}

/// Emphasis for links and endpoints of the shortest route.
#[derive(Clone, Debug)]
pub struct RouteStyle {
	pub color: Color,
	/// Glow drawn under route links (alpha 0 disables it).
	pub glow_color: Color,
	/// Route line width relative to an ordinary link.
	pub width_factor: f64,
	/// Ring drawn around the source and target nodes.
	pub ring_color: Color,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	pub border_color: Color,
	/// Color of the letter drawn on the node.
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub route: RouteStyle,
	pub node: NodeStyle,
	pub palette: NodePalette,
}

impl Theme {
	/// Dark slate theme with an amber route (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(20, 26, 33),
				color_secondary: Color::rgb(31, 38, 46),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.6),
				dimmed_alpha: 0.45,
				label_color: Color::rgba(200, 210, 220, 0.85),
			},
			route: RouteStyle {
				color: Color::rgb(240, 180, 70),
				glow_color: Color::rgba(240, 180, 70, 0.25),
				width_factor: 3.0,
				ring_color: Color::rgba(255, 255, 255, 0.8),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgb(255, 255, 255),
			},
			palette: NodePalette::harbor(),
		}
	}

	/// Deeper background with a teal route
	pub fn transit() -> Self {
		Self {
			name: "transit",
			background: BackgroundStyle {
				color: Color::rgb(16, 19, 30),
				color_secondary: Color::rgb(26, 30, 44),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.55),
				dimmed_alpha: 0.4,
				label_color: Color::rgba(180, 190, 210, 0.8),
			},
			route: RouteStyle {
				color: Color::rgb(90, 210, 190),
				glow_color: Color::rgba(90, 210, 190, 0.2),
				width_factor: 3.0,
				ring_color: Color::rgba(200, 255, 245, 0.8),
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgb(240, 240, 250),
			},
			palette: NodePalette::lagoon(),
		}
	}

	/// Flat warm theme without gradients or glow
	pub fn signal() -> Self {
		Self {
			name: "signal",
			background: BackgroundStyle {
				color: Color::rgb(30, 25, 22),
				color_secondary: Color::rgb(30, 25, 22),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgba(160, 130, 110, 0.6),
				dimmed_alpha: 0.5,
				label_color: Color::rgba(220, 200, 180, 0.85),
			},
			route: RouteStyle {
				color: Color::rgb(230, 110, 70),
				glow_color: Color::rgba(0, 0, 0, 0.0),
				width_factor: 2.5,
				ring_color: Color::rgba(255, 230, 210, 0.8),
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.0,
				border_color: Color::rgba(255, 240, 230, 0.5),
				label_color: Color::rgb(255, 250, 245),
			},
			palette: NodePalette::clay(),
		}
	}

	/// Looks a theme up by name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"transit" => Self::transit(),
			"signal" => Self::signal(),
			_ => Self::default_theme(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
