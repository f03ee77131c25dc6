//! Shortest-path query results.

use serde::Serialize;

/// One traversed edge of a path, in travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PathStep {
	pub source: usize,
	pub target: usize,
}

impl PathStep {
	pub const fn new(source: usize, target: usize) -> Self {
		Self { source, target }
	}
}

/// Outcome of a shortest-path query.
///
/// Node references are matrix positions when returned by
/// [`shortest_path`](super::shortest_path) and node indices when returned by
/// [`find_route`](super::find_route) or [`plan_route`](super::plan_route).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
	/// The target is reachable. `path` is empty when source equals target.
	Found {
		source: usize,
		target: usize,
		path: Vec<PathStep>,
		distance: u64,
	},
	/// The target cannot be reached from the source.
	NoPath { source: usize, target: usize },
}

impl PathResult {
	/// Short status message for display.
	pub fn message(&self) -> &'static str {
		match self {
			PathResult::Found { .. } => "OK",
			PathResult::NoPath { .. } => "No path",
		}
	}

	pub fn is_found(&self) -> bool {
		matches!(self, PathResult::Found { .. })
	}

	pub fn source(&self) -> usize {
		match self {
			PathResult::Found { source, .. } | PathResult::NoPath { source, .. } => *source,
		}
	}

	pub fn target(&self) -> usize {
		match self {
			PathResult::Found { target, .. } | PathResult::NoPath { target, .. } => *target,
		}
	}

	/// Traversed edges in order, or `None` if there is no path.
	pub fn path(&self) -> Option<&[PathStep]> {
		match self {
			PathResult::Found { path, .. } => Some(path),
			PathResult::NoPath { .. } => None,
		}
	}

	/// Total distance, or `None` if there is no path.
	pub fn distance(&self) -> Option<u64> {
		match self {
			PathResult::Found { distance, .. } => Some(*distance),
			PathResult::NoPath { .. } => None,
		}
	}

	/// True if the path travels the edge between `a` and `b` in either direction.
	pub fn uses_edge(&self, a: usize, b: usize) -> bool {
		self.path().is_some_and(|path| {
			path.iter()
				.any(|s| (s.source == a && s.target == b) || (s.source == b && s.target == a))
		})
	}

	/// Rewrites every node reference through `f`.
	pub fn map_nodes(self, f: impl Fn(usize) -> usize) -> Self {
		match self {
			PathResult::Found {
				source,
				target,
				path,
				distance,
			} => PathResult::Found {
				source: f(source),
				target: f(target),
				path: path
					.into_iter()
					.map(|s| PathStep::new(f(s.source), f(s.target)))
					.collect(),
				distance,
			},
			PathResult::NoPath { source, target } => PathResult::NoPath {
				source: f(source),
				target: f(target),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn serializes_with_status_tag() {
		let found = PathResult::Found {
			source: 0,
			target: 2,
			path: vec![PathStep::new(0, 2)],
			distance: 2,
		};
		let json = serde_json::to_value(&found).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"status": "found",
				"source": 0,
				"target": 2,
				"path": [{ "source": 0, "target": 2 }],
				"distance": 2,
			})
		);

		let none = serde_json::to_value(PathResult::NoPath { source: 1, target: 0 }).unwrap();
		assert_eq!(
			none,
			serde_json::json!({ "status": "no_path", "source": 1, "target": 0 })
		);
	}

	#[test]
	fn maps_positions_to_indices() {
		let found = PathResult::Found {
			source: 0,
			target: 1,
			path: vec![PathStep::new(0, 1)],
			distance: 4,
		};
		let indices = [3, 8];
		let mapped = found.map_nodes(|p| indices[p]);
		assert_eq!(mapped.source(), 3);
		assert_eq!(mapped.target(), 8);
		assert_eq!(mapped.path(), Some(&[PathStep::new(3, 8)][..]));
		assert!(mapped.uses_edge(8, 3));
		assert!(!mapped.uses_edge(0, 1));
	}

	#[test]
	fn no_path_has_no_route() {
		let r = PathResult::NoPath { source: 0, target: 1 };
		assert!(!r.is_found());
		assert_eq!(r.message(), "No path");
		assert_eq!(r.path(), None);
		assert_eq!(r.distance(), None);
		assert!(!r.uses_edge(0, 1));
	}
}
