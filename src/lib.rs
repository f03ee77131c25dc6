//! route-graph: shortest routes through small weighted graphs.
//!
//! The user enters distances between lettered nodes in a table, picks two
//! endpoints, and gets the shortest route computed with Dijkstra's algorithm
//! and drawn on an interactive force-directed graph.
//!
//! [`route`] holds the pure computation and is usable without a browser;
//! [`components`] holds the Leptos UI built on top of it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod route;

pub use components::RoutePlanner;
pub use config::RouteConfig;
pub use route::{PathResult, RoutePlan, plan_route};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("route-graph: logging initialized");
}

/// Load limits and theme from a script element with id="route-config".
/// Expected format: JSON with optional `min_nodes`, `max_nodes`, `theme`.
fn load_config() -> Option<RouteConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("route-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match RouteConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"route-graph: loaded config, {}-{} nodes, theme '{}'",
				config.min_nodes, config.max_nodes, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("route-graph: falling back to default config: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Shortest Route" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="route-app">
			<h1>"Shortest Route"</h1>
			<p class="subtitle">
				"Enter the node count, fill in distances, then pick both ends of the route."
			</p>
			<RoutePlanner config=config />
		</main>
	}
}
