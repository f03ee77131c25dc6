//! Human-readable description of a [`PathResult`].

use super::node::label_for;
use super::result::PathResult;

fn label(index: usize) -> String {
	label_for(index).map_or_else(|_| index.to_string(), String::from)
}

/// Renders `result` (in node indices) as display lines.
pub fn summarize(result: &PathResult) -> Vec<String> {
	match result {
		PathResult::NoPath { source, target } => {
			vec![format!("No path found from {} to {}", label(*source), label(*target))]
		}
		PathResult::Found {
			source,
			target,
			path,
			..
		} if path.is_empty() => vec![format!(
			"Path is from {} to {}. Expect a journey time of approximately zero.",
			label(*source),
			label(*target)
		)],
		PathResult::Found { path, distance, .. } => {
			let hops: String = path
				.iter()
				.map(|s| format!(" {} -> {}", label(s.source), label(s.target)))
				.collect();
			vec![
				format!("Result : {}", result.message()),
				format!("Path   : {hops}"),
				format!("Distance : {distance}"),
			]
		}
	}
}
