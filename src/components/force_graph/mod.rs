//! Force-directed rendering of the entered graph and its shortest route.
//!
//! Draws the graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Route links drawn bold with a fade-in highlight, endpoints ringed
//! - Link distances at the midpoints and letter labels on the nodes
//!
//! # Example
//!
//! ```ignore
//! use route_graph::components::force_graph::{ForceGraphCanvas, GraphData};
//!
//! let plan = plan_route(edges, 0, 2, &RouteConfig::default())?;
//! let data = GraphData::from(&plan);
//!
//! view! { <ForceGraphCanvas data=Signal::derive(move || data.clone()) /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode};
