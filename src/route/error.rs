//! Error type for rejected route queries.

use thiserror::Error;

/// Result alias for route building and planning.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Reasons a graph could not be built or a query could not be planned.
///
/// An unreachable target is not an error: it is reported as
/// [`PathResult::NoPath`](super::PathResult::NoPath).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RouteError {
	/// No usable distance was entered, so there is no graph.
	#[error("No distances entered..")]
	NoEdges,

	/// More distinct nodes than the configured maximum.
	#[error("Maximum nodes for this demo is {max}, got {count}")]
	TooManyNodes { count: usize, max: usize },

	/// Fewer nodes than needed for a meaningful query.
	#[error("You need at least {min} nodes to calculate a shortest path, got {count}")]
	TooFewNodes { count: usize, min: usize },

	/// Node index has no letter in the label alphabet.
	#[error("Node index {0} has no label (at most 26 nodes are supported)")]
	LabelOutOfRange(usize),

	/// Entry key is not of the form `source:target`.
	#[error("Invalid distance entry key '{0}', expected 'source:target'")]
	InvalidEntryKey(String),

	/// Edge connects a node to itself.
	#[error("Node {0} cannot have a distance to itself")]
	SelfLoop(usize),

	/// Node index is not part of the graph.
	#[error("Node {0} is not connected to any entered distance")]
	UnknownNode(usize),

	/// Configuration was rejected.
	#[error("Invalid route configuration: {0}")]
	Config(String),
}
