//! Dense adjacency matrix built from the sparse edge list.

use super::edge::Edge;
use super::error::{Result, RouteError};
use super::node::{Node, position_of};

/// Square matrix of edge weights, indexed by node position.
///
/// Cells hold `None` where no edge exists. The matrix is kept symmetric and
/// its diagonal is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
	size: usize,
	cells: Vec<Option<u32>>,
}

impl AdjacencyMatrix {
	/// Creates a matrix of `size` nodes with no edges.
	pub fn new(size: usize) -> Self {
		Self {
			size,
			cells: vec![None; size * size],
		}
	}

	/// Builds the matrix for `nodes` from `edges`.
	///
	/// Edge endpoints are node indices and are mapped to positions in `nodes`,
	/// which must be sorted by index (as [`derive_nodes`](super::derive_nodes)
	/// returns them). A later edge for the same pair overwrites an earlier one.
	pub fn from_edges(nodes: &[Node], edges: &[Edge]) -> Result<Self> {
		if edges.is_empty() {
			return Err(RouteError::NoEdges);
		}

		let mut matrix = Self::new(nodes.len());
		for edge in edges {
			let s = position_of(nodes, edge.source).ok_or(RouteError::UnknownNode(edge.source))?;
			let t = position_of(nodes, edge.target).ok_or(RouteError::UnknownNode(edge.target))?;
			if s == t {
				return Err(RouteError::SelfLoop(edge.source));
			}
			matrix.set(s, t, edge.distance);
		}
		Ok(matrix)
	}

	/// Number of nodes (rows and columns).
	pub fn len(&self) -> usize {
		self.size
	}

	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Sets the weight between positions `a` and `b` in both directions.
	///
	/// # Panics
	///
	/// Panics if either position is out of range.
	pub fn set(&mut self, a: usize, b: usize, distance: u32) {
		assert!(a < self.size && b < self.size, "position out of range");
		if a == b {
			return;
		}
		self.cells[a * self.size + b] = Some(distance);
		self.cells[b * self.size + a] = Some(distance);
	}

	/// Weight of the edge between positions `a` and `b`, if any.
	pub fn weight(&self, a: usize, b: usize) -> Option<u32> {
		if a >= self.size || b >= self.size {
			return None;
		}
		self.cells[a * self.size + b]
	}

	/// Neighbours of position `a` with their edge weights, in position order.
	pub fn neighbors(&self, a: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
		let row: &[Option<u32>] = if a < self.size {
			&self.cells[a * self.size..(a + 1) * self.size]
		} else {
			&[]
		};
		row.iter()
			.enumerate()
			.filter_map(|(b, w)| w.map(|w| (b, w)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::derive_nodes;
	use pretty_assertions::assert_eq;

	#[test]
	fn new_matrix_has_no_edges() {
		let m = AdjacencyMatrix::new(3);
		assert_eq!(m.len(), 3);
		for a in 0..3 {
			for b in 0..3 {
				assert_eq!(m.weight(a, b), None);
			}
		}
	}

	#[test]
	fn edges_are_symmetric() {
		let edges = vec![Edge::new(0, 1, 5), Edge::new(2, 1, 3)];
		let nodes = derive_nodes(&edges).unwrap();
		let m = AdjacencyMatrix::from_edges(&nodes, &edges).unwrap();
		assert_eq!(m.weight(0, 1), Some(5));
		assert_eq!(m.weight(1, 0), Some(5));
		assert_eq!(m.weight(1, 2), Some(3));
		assert_eq!(m.weight(2, 1), Some(3));
		assert_eq!(m.weight(0, 2), None);
		for a in 0..3 {
			assert_eq!(m.weight(a, a), None);
		}
	}

	#[test]
	fn later_duplicate_wins() {
		let edges = vec![Edge::new(0, 1, 5), Edge::new(1, 0, 9), Edge::new(1, 2, 1)];
		let nodes = derive_nodes(&edges).unwrap();
		let m = AdjacencyMatrix::from_edges(&nodes, &edges).unwrap();
		assert_eq!(m.weight(0, 1), Some(9));
		assert_eq!(m.weight(1, 0), Some(9));
	}

	#[test]
	fn maps_sparse_indices_to_positions() {
		let edges = vec![Edge::new(0, 5, 4), Edge::new(5, 9, 2)];
		let nodes = derive_nodes(&edges).unwrap();
		let m = AdjacencyMatrix::from_edges(&nodes, &edges).unwrap();
		assert_eq!(m.len(), 3);
		assert_eq!(m.weight(0, 1), Some(4));
		assert_eq!(m.weight(1, 2), Some(2));
	}

	#[test]
	fn rejects_empty_and_unknown_edges() {
		let nodes = derive_nodes(&[Edge::new(0, 1, 1)]).unwrap();
		assert_eq!(
			AdjacencyMatrix::from_edges(&nodes, &[]),
			Err(RouteError::NoEdges)
		);
		assert_eq!(
			AdjacencyMatrix::from_edges(&nodes, &[Edge::new(0, 3, 1)]),
			Err(RouteError::UnknownNode(3))
		);
	}

	#[test]
	fn neighbors_in_position_order() {
		let mut m = AdjacencyMatrix::new(4);
		m.set(1, 3, 7);
		m.set(1, 0, 2);
		assert_eq!(m.neighbors(1).collect::<Vec<_>>(), vec![(0, 2), (3, 7)]);
		assert_eq!(m.neighbors(2).count(), 0);
		assert_eq!(m.neighbors(10).count(), 0);
	}
}
