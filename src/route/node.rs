//! Node derivation and single-letter labelling.

use serde::Serialize;

use super::edge::Edge;
use super::error::{Result, RouteError};

/// Label alphabet; a node's label is the letter at its index.
pub const NODE_NAMES: &str = "abcdefghijklmnopqrstuvwxyz";

/// Largest number of distinct labels the alphabet can provide.
pub const MAX_LABELS: usize = NODE_NAMES.len();

/// A graph node as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
	/// Index chosen by the user (row/column of the distance table).
	pub index: usize,
	/// Single-letter display label.
	pub label: String,
}

impl Node {
	/// Creates a node, deriving its label from the index.
	pub fn new(index: usize) -> Result<Self> {
		Ok(Self {
			index,
			label: label_for(index)?.to_string(),
		})
	}
}

/// Returns the label letter for a node index.
pub fn label_for(index: usize) -> Result<char> {
	NODE_NAMES
		.chars()
		.nth(index)
		.ok_or(RouteError::LabelOutOfRange(index))
}

/// Collects every node referenced by `edges`, deduplicated and sorted by index.
///
/// Fails with [`RouteError::NoEdges`] when there is nothing to build a graph from.
pub fn derive_nodes(edges: &[Edge]) -> Result<Vec<Node>> {
	if edges.is_empty() {
		return Err(RouteError::NoEdges);
	}

	let mut indices: Vec<usize> = edges.iter().flat_map(|e| [e.source, e.target]).collect();
	indices.sort_unstable();
	indices.dedup();

	indices.into_iter().map(Node::new).collect()
}

/// Position of the node with `index` in a sorted node list.
pub fn position_of(nodes: &[Node], index: usize) -> Option<usize> {
	nodes.binary_search_by_key(&index, |n| n.index).ok()
}
