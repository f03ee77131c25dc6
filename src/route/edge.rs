//! Weighted edges and parsing of the sparse distance-table entries.

use log::{debug, warn};
use serde::Serialize;

use super::error::{Result, RouteError};

/// An undirected weighted connection between two distinct nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	/// Positive weight entered by the user.
	pub distance: u32,
}

impl Edge {
	pub const fn new(source: usize, target: usize, distance: u32) -> Self {
		Self {
			source,
			target,
			distance,
		}
	}

	/// True if this edge joins `a` and `b`, in either direction.
	pub fn connects(&self, a: usize, b: usize) -> bool {
		(self.source == a && self.target == b) || (self.source == b && self.target == a)
	}
}

/// Formats the table key for the cell joining `source` and `target`.
pub fn entry_key(source: usize, target: usize) -> String {
	format!("{source}:{target}")
}

/// Parses a `source:target` key into its two node indices.
pub fn parse_entry_key(key: &str) -> Result<(usize, usize)> {
	let invalid = || RouteError::InvalidEntryKey(key.to_string());
	let (source, target) = key.split_once(':').ok_or_else(invalid)?;
	let source = source.trim().parse().map_err(|_| invalid())?;
	let target = target.trim().parse().map_err(|_| invalid())?;
	if source == target {
		return Err(RouteError::SelfLoop(source));
	}
	Ok((source, target))
}

/// Parses a raw weight. Blank, zero and non-numeric text yield `None`.
fn parse_distance(key: &str, raw: &str) -> Option<u32> {
	let raw = raw.trim();
	if raw.is_empty() {
		return None;
	}
	match raw.parse::<u32>() {
		Ok(0) => {
			debug!("skipping zero distance for {key}");
			None
		}
		Ok(d) => Some(d),
		Err(e) => {
			warn!("skipping distance '{raw}' for {key}: {e}");
			None
		}
	}
}

/// Converts sparse `source:target -> weight` entries into an edge list.
///
/// Entries are kept in the order given, so for a repeated pair the later
/// entry is the one that ends up in the adjacency matrix. Entries without a
/// usable weight are dropped; malformed keys are an error.
pub fn edges_from_entries<I, K, V>(entries: I) -> Result<Vec<Edge>>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut edges = Vec::new();
	for (key, raw) in entries {
		let key = key.as_ref();
		let (source, target) = parse_entry_key(key)?;
		if let Some(distance) = parse_distance(key, raw.as_ref()) {
			edges.push(Edge::new(source, target, distance));
		}
	}
	Ok(edges)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parses_keys() {
		assert_eq!(parse_entry_key("0:1"), Ok((0, 1)));
		assert_eq!(parse_entry_key("12:3"), Ok((12, 3)));
		assert_eq!(entry_key(3, 12), "3:12");
	}

	#[test]
	fn rejects_malformed_keys() {
		for key in ["", "0", "0-1", "a:1", "1:", ":1", "1:2:3"] {
			assert_eq!(
				parse_entry_key(key),
				Err(RouteError::InvalidEntryKey(key.to_string())),
				"key {key:?}"
			);
		}
		assert_eq!(parse_entry_key("2:2"), Err(RouteError::SelfLoop(2)));
	}

	#[test]
	fn skips_blank_zero_and_garbage_weights() {
		let entries = [
			("0:1", "5"),
			("0:2", ""),
			("0:3", "0"),
			("1:2", "abc"),
			("1:3", " 7 "),
			("2:3", "-4"),
		];
		let edges = edges_from_entries(entries).unwrap();
		assert_eq!(edges, vec![Edge::new(0, 1, 5), Edge::new(1, 3, 7)]);
	}

	#[test]
	fn keeps_duplicates_in_order() {
		let entries = [("0:1", "5"), ("1:0", "9")];
		let edges = edges_from_entries(entries).unwrap();
		assert_eq!(edges, vec![Edge::new(0, 1, 5), Edge::new(1, 0, 9)]);
	}

	#[test]
	fn malformed_key_fails_even_when_blank() {
		let entries = [("0:1", "5"), ("oops", "")];
		assert_eq!(
			edges_from_entries(entries),
			Err(RouteError::InvalidEntryKey("oops".into()))
		);
	}

	#[test]
	fn connects_ignores_direction() {
		let e = Edge::new(2, 5, 1);
		assert!(e.connects(2, 5));
		assert!(e.connects(5, 2));
		assert!(!e.connects(2, 3));
	}
}
