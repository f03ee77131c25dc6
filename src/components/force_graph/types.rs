//! Graph data handed to the force graph component.

use crate::route::RoutePlan;

/// A node of the entered graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Node index from the distance table.
	pub id: usize,
	/// Letter drawn on the node.
	pub label: String,
	/// Source or target of the current route.
	pub endpoint: bool,
}

/// An undirected weighted link.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
	pub distance: u32,
	/// Part of the shortest route.
	pub on_route: bool,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	pub fn route_links(&self) -> impl Iterator<Item = &GraphLink> {
		self.links.iter().filter(|l| l.on_route)
	}
}

impl From<&RoutePlan> for GraphData {
	fn from(plan: &RoutePlan) -> Self {
		let result = &plan.result;
		let (source, target) = (result.source(), result.target());

		let nodes = plan
			.nodes
			.iter()
			.map(|n| GraphNode {
				id: n.index,
				label: n.label.clone(),
				endpoint: n.index == source || n.index == target,
			})
			.collect();

		// One link per pair; a repeated pair keeps its latest distance.
		let mut links: Vec<GraphLink> = Vec::with_capacity(plan.edges.len());
		for e in &plan.edges {
			if let Some(link) = links.iter_mut().find(|l| e.connects(l.source, l.target)) {
				link.distance = e.distance;
				continue;
			}
			links.push(GraphLink {
				source: e.source,
				target: e.target,
				distance: e.distance,
				on_route: result.uses_edge(e.source, e.target),
			});
		}

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::RouteConfig;
	use crate::route::{Edge, plan_route};
	use pretty_assertions::assert_eq;

	#[test]
	fn flags_route_links_and_endpoints() {
		let edges = vec![Edge::new(0, 1, 5), Edge::new(1, 2, 3), Edge::new(0, 3, 1)];
		let plan = plan_route(edges, 2, 0, &RouteConfig::default()).unwrap();
		let data = GraphData::from(&plan);

		let endpoints: Vec<usize> =
			data.nodes.iter().filter(|n| n.endpoint).map(|n| n.id).collect();
		assert_eq!(endpoints, vec![0, 2]);

		let route: Vec<(usize, usize)> = data.route_links().map(|l| (l.source, l.target)).collect();
		assert_eq!(route, vec![(0, 1), (1, 2)]);
	}

	#[test]
	fn repeated_pair_keeps_latest_distance() {
		let edges = vec![Edge::new(0, 1, 5), Edge::new(1, 2, 3), Edge::new(1, 0, 9)];
		let plan = plan_route(edges, 0, 2, &RouteConfig::default()).unwrap();
		let data = GraphData::from(&plan);
		let dists: Vec<(usize, usize, u32)> =
			data.links.iter().map(|l| (l.source, l.target, l.distance)).collect();
		assert_eq!(dists, vec![(0, 1, 9), (1, 2, 3)]);
		assert_eq!(plan.result.distance(), Some(12));
	}

	#[test]
	fn no_route_flags_nothing() {
		let edges = vec![Edge::new(0, 1, 5), Edge::new(2, 3, 3)];
		let plan = plan_route(edges, 0, 3, &RouteConfig::default()).unwrap();
		let data = GraphData::from(&plan);
		assert_eq!(data.route_links().count(), 0);
		assert_eq!(data.nodes.iter().filter(|n| n.endpoint).count(), 2);
	}
}
