//! Leptos UI: the distance table and the route graph canvas.

pub mod force_graph;
pub mod route_planner;

pub use route_planner::RoutePlanner;
