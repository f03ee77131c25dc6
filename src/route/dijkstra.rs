//! Dijkstra shortest path over an [`AdjacencyMatrix`].
//!
//! Graphs are small and dense, so the next node to settle is found with a
//! linear scan instead of a heap. The scan walks positions in order, which
//! makes the lowest position win among equal distances and keeps results
//! deterministic.

use log::debug;

use super::matrix::AdjacencyMatrix;
use super::result::{PathResult, PathStep};

/// Per-query search state.
struct Search {
	/// Best known distance, `None` while unreached.
	dist: Vec<Option<u64>>,
	settled: Vec<bool>,
	prev: Vec<Option<usize>>,
}

impl Search {
	fn new(size: usize, source: usize) -> Self {
		let mut dist = vec![None; size];
		dist[source] = Some(0);
		Self {
			dist,
			settled: vec![false; size],
			prev: vec![None; size],
		}
	}

	/// Unsettled node with the smallest finite distance.
	fn next_unsettled(&self) -> Option<usize> {
		let mut best: Option<(usize, u64)> = None;
		for (node, d) in self.dist.iter().enumerate() {
			let Some(d) = *d else { continue };
			if self.settled[node] {
				continue;
			}
			if best.is_none_or(|(_, bd)| d < bd) {
				best = Some((node, d));
			}
		}
		best.map(|(node, _)| node)
	}

	fn relax(&mut self, matrix: &AdjacencyMatrix, node: usize) {
		let Some(base) = self.dist[node] else { return };
		for (next, weight) in matrix.neighbors(node) {
			if self.settled[next] {
				continue;
			}
			let candidate = base + u64::from(weight);
			if self.dist[next].is_none_or(|d| candidate < d) {
				self.dist[next] = Some(candidate);
				self.prev[next] = Some(node);
			}
		}
	}

	/// Steps from `source` to `target` following predecessor links.
	fn steps_to(&self, source: usize, target: usize) -> Vec<PathStep> {
		let mut steps = Vec::new();
		let mut node = target;
		while node != source {
			let Some(prev) = self.prev[node] else { break };
			steps.push(PathStep::new(prev, node));
			node = prev;
		}
		steps.reverse();
		steps
	}
}

/// Finds the minimum-distance path from `source` to `target`.
///
/// Both arguments are matrix positions. Unreachable targets give
/// [`PathResult::NoPath`]; `source == target` gives an empty path of
/// distance zero.
///
/// # Panics
///
/// Panics if `source` or `target` is not a position in `matrix`.
pub fn shortest_path(matrix: &AdjacencyMatrix, source: usize, target: usize) -> PathResult {
	assert!(
		source < matrix.len() && target < matrix.len(),
		"source {source} or target {target} outside a graph of {} nodes",
		matrix.len()
	);

	let mut search = Search::new(matrix.len(), source);
	while let Some(node) = search.next_unsettled() {
		search.settled[node] = true;
		if node == target {
			break;
		}
		search.relax(matrix, node);
	}

	match search.dist[target] {
		Some(distance) => {
			let path = search.steps_to(source, target);
			debug!(
				"shortest path {source} -> {target}: {} steps, distance {distance}",
				path.len()
			);
			PathResult::Found {
				source,
				target,
				path,
				distance,
			}
		}
		None => {
			debug!("no path {source} -> {target}");
			PathResult::NoPath { source, target }
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn matrix(size: usize, edges: &[(usize, usize, u32)]) -> AdjacencyMatrix {
		let mut m = AdjacencyMatrix::new(size);
		for &(a, b, w) in edges {
			m.set(a, b, w);
		}
		m
	}

	fn steps(pairs: &[(usize, usize)]) -> Vec<PathStep> {
		pairs.iter().map(|&(s, t)| PathStep::new(s, t)).collect()
	}

	#[test]
	fn two_hop_path() {
		let m = matrix(3, &[(0, 1, 5), (1, 2, 3)]);
		assert_eq!(
			shortest_path(&m, 0, 2),
			PathResult::Found {
				source: 0,
				target: 2,
				path: steps(&[(0, 1), (1, 2)]),
				distance: 8,
			}
		);
	}

	#[test]
	fn direct_edge_beats_two_hops() {
		let m = matrix(3, &[(0, 1, 5), (1, 2, 3), (0, 2, 2)]);
		let r = shortest_path(&m, 0, 2);
		assert_eq!(r.path(), Some(&steps(&[(0, 2)])[..]));
		assert_eq!(r.distance(), Some(2));
	}

	#[test]
	fn longer_hop_count_can_be_shorter() {
		let m = matrix(4, &[(0, 3, 10), (0, 1, 1), (1, 2, 1), (2, 3, 1)]);
		let r = shortest_path(&m, 0, 3);
		assert_eq!(r.path(), Some(&steps(&[(0, 1), (1, 2), (2, 3)])[..]));
		assert_eq!(r.distance(), Some(3));
	}

	#[test]
	fn disconnected_target_has_no_path() {
		let m = AdjacencyMatrix::new(2);
		assert_eq!(
			shortest_path(&m, 0, 1),
			PathResult::NoPath { source: 0, target: 1 }
		);

		let m = matrix(4, &[(0, 1, 1), (2, 3, 1)]);
		assert_eq!(
			shortest_path(&m, 3, 0),
			PathResult::NoPath { source: 3, target: 0 }
		);
	}

	#[test]
	fn same_node_is_zero_length() {
		let m = matrix(3, &[(0, 1, 5), (1, 2, 3)]);
		assert_eq!(
			shortest_path(&m, 1, 1),
			PathResult::Found {
				source: 1,
				target: 1,
				path: vec![],
				distance: 0,
			}
		);
		// Isolated nodes still reach themselves.
		assert_eq!(shortest_path(&AdjacencyMatrix::new(1), 0, 0).distance(), Some(0));
	}

	#[test]
	fn ties_prefer_lower_positions() {
		// 0-1-3 and 0-2-3 both cost 2; node 1 settles first and claims 3.
		let m = matrix(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
		let r = shortest_path(&m, 0, 3);
		assert_eq!(r.path(), Some(&steps(&[(0, 1), (1, 3)])[..]));
		assert_eq!(shortest_path(&m, 0, 3), r);
	}

	#[test]
	fn large_weights_do_not_overflow() {
		let m = matrix(3, &[(0, 1, u32::MAX), (1, 2, u32::MAX)]);
		assert_eq!(
			shortest_path(&m, 0, 2).distance(),
			Some(2 * u64::from(u32::MAX))
		);
	}

	#[test]
	#[should_panic]
	fn out_of_range_endpoint_panics() {
		shortest_path(&AdjacencyMatrix::new(2), 0, 5);
	}
}
