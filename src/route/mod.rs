//! Shortest-route computation for small weighted undirected graphs.
//!
//! The pipeline runs fresh for every query:
//! - [`edges_from_entries`] turns the sparse `source:target` distance entries
//!   into an [`Edge`] list
//! - [`derive_nodes`] collects and labels the referenced nodes
//! - [`AdjacencyMatrix::from_edges`] builds the dense weight matrix
//! - [`shortest_path`] runs Dijkstra between two matrix positions
//!
//! [`plan_route`] wires these together for the UI and reports everything in
//! node indices rather than matrix positions.

mod dijkstra;
mod edge;
mod error;
mod matrix;
mod node;
mod result;
pub mod summary;

use log::info;
use serde::Serialize;

use crate::config::RouteConfig;

pub use dijkstra::shortest_path;
pub use edge::{Edge, edges_from_entries, entry_key, parse_entry_key};
pub use error::{Result, RouteError};
pub use matrix::AdjacencyMatrix;
pub use node::{MAX_LABELS, NODE_NAMES, Node, derive_nodes, label_for, position_of};
pub use result::{PathResult, PathStep};

/// Everything the UI needs to show one query: nodes, edges and the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
	pub result: PathResult,
}

/// Builds the matrix for `nodes` and finds the route between two node indices.
///
/// `nodes` must be sorted by index. The returned result refers to node
/// indices.
pub fn find_route(
	nodes: &[Node],
	edges: &[Edge],
	source: usize,
	target: usize,
) -> Result<PathResult> {
	let from = position_of(nodes, source).ok_or(RouteError::UnknownNode(source))?;
	let to = position_of(nodes, target).ok_or(RouteError::UnknownNode(target))?;

	let matrix = AdjacencyMatrix::from_edges(nodes, edges)?;
	Ok(shortest_path(&matrix, from, to).map_nodes(|p| nodes[p].index))
}

/// Derives the graph from `edges`, checks it against `config`, and finds the
/// shortest route from `source` to `target` (node indices).
pub fn plan_route(
	edges: Vec<Edge>,
	source: usize,
	target: usize,
	config: &RouteConfig,
) -> Result<RoutePlan> {
	let nodes = derive_nodes(&edges)?;
	if nodes.len() > config.max_nodes {
		return Err(RouteError::TooManyNodes {
			count: nodes.len(),
			max: config.max_nodes,
		});
	}

	let result = find_route(&nodes, &edges, source, target)?;
	info!(
		"route {source} -> {target} over {} nodes, {} edges: {}",
		nodes.len(),
		edges.len(),
		result.message()
	);

	Ok(RoutePlan {
		nodes,
		edges,
		result,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn reports_route_in_node_indices() {
		let edges = vec![Edge::new(2, 7, 4), Edge::new(7, 9, 1), Edge::new(2, 9, 9)];
		let plan = plan_route(edges, 2, 9, &RouteConfig::default()).unwrap();
		assert_eq!(
			plan.result,
			PathResult::Found {
				source: 2,
				target: 9,
				path: vec![PathStep::new(2, 7), PathStep::new(7, 9)],
				distance: 5,
			}
		);
		assert_eq!(
			plan.nodes.iter().map(|n| n.index).collect::<Vec<_>>(),
			vec![2, 7, 9]
		);
	}

	#[test]
	fn endpoint_without_edges_is_rejected() {
		let edges = vec![Edge::new(0, 1, 1)];
		assert_eq!(
			plan_route(edges, 0, 4, &RouteConfig::default()),
			Err(RouteError::UnknownNode(4))
		);
	}

	#[test]
	fn enforces_max_nodes() {
		let config = RouteConfig {
			max_nodes: 3,
			..RouteConfig::default()
		};
		let edges = vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1)];
		assert_eq!(
			plan_route(edges, 0, 1, &config),
			Err(RouteError::TooManyNodes { count: 4, max: 3 })
		);
	}

	#[test]
	fn no_edges_never_reaches_the_engine() {
		assert_eq!(
			plan_route(Vec::new(), 0, 1, &RouteConfig::default()),
			Err(RouteError::NoEdges)
		);
	}
}
