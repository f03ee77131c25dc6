//! Page-level configuration: table size limits and canvas theme.

use serde::Deserialize;

use crate::route::{MAX_LABELS, Result, RouteError};

/// Limits and presentation options, read from the page as JSON.
///
/// Every field is optional in the JSON; missing ones take the defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouteConfig {
	/// Smallest distance table the user may create.
	pub min_nodes: usize,
	/// Largest distance table, and most distinct nodes in a query.
	pub max_nodes: usize,
	/// Canvas theme name, see [`Theme::by_name`](crate::components::force_graph::Theme::by_name).
	pub theme: String,
}

impl Default for RouteConfig {
	fn default() -> Self {
		Self {
			min_nodes: 3,
			max_nodes: 20,
			theme: "default".to_string(),
		}
	}
}

impl RouteConfig {
	/// Parses and validates a JSON config.
	pub fn from_json(text: &str) -> Result<Self> {
		let config: Self =
			serde_json::from_str(text).map_err(|e| RouteError::Config(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Rejects limits the labelling scheme or the algorithm cannot honour.
	pub fn validate(&self) -> Result<()> {
		if self.min_nodes < 2 {
			return Err(RouteError::Config(format!(
				"min_nodes must be at least 2, got {}",
				self.min_nodes
			)));
		}
		if self.max_nodes > MAX_LABELS {
			return Err(RouteError::Config(format!(
				"max_nodes must be at most {MAX_LABELS}, got {}",
				self.max_nodes
			)));
		}
		if self.min_nodes > self.max_nodes {
			return Err(RouteError::Config(format!(
				"min_nodes ({}) exceeds max_nodes ({})",
				self.min_nodes, self.max_nodes
			)));
		}
		Ok(())
	}

	/// Checks a requested distance table size.
	pub fn check_table_size(&self, count: usize) -> Result<()> {
		if count > self.max_nodes {
			return Err(RouteError::TooManyNodes {
				count,
				max: self.max_nodes,
			});
		}
		if count < self.min_nodes {
			return Err(RouteError::TooFewNodes {
				count,
				min: self.min_nodes,
			});
		}
		Ok(())
	}

	/// Parses user text for the table size: digits only, within limits.
	pub fn parse_table_size(&self, text: &str) -> Option<Result<usize>> {
		let text = text.trim();
		if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		let count = text.parse().unwrap_or(usize::MAX);
		Some(self.check_table_size(count).map(|()| count))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn partial_json_keeps_defaults() {
		let config = RouteConfig::from_json(r#"{ "max_nodes": 8 }"#).unwrap();
		assert_eq!(
			config,
			RouteConfig {
				max_nodes: 8,
				..RouteConfig::default()
			}
		);
	}

	#[test]
	fn rejects_bad_limits() {
		for json in [
			r#"{ "min_nodes": 1 }"#,
			r#"{ "max_nodes": 27 }"#,
			r#"{ "min_nodes": 9, "max_nodes": 5 }"#,
			r#"{ "max_nodes": "many" }"#,
		] {
			assert!(
				matches!(RouteConfig::from_json(json), Err(RouteError::Config(_))),
				"{json}"
			);
		}
	}

	#[test]
	fn table_size_limits() {
		let config = RouteConfig::default();
		assert_eq!(config.parse_table_size("5"), Some(Ok(5)));
		assert_eq!(config.parse_table_size(" 20 "), Some(Ok(20)));
		assert_eq!(
			config.parse_table_size("21"),
			Some(Err(RouteError::TooManyNodes { count: 21, max: 20 }))
		);
		assert_eq!(
			config.parse_table_size("2"),
			Some(Err(RouteError::TooFewNodes { count: 2, min: 3 }))
		);
		assert_eq!(config.parse_table_size("4.5"), None);
		assert_eq!(config.parse_table_size(""), None);
		assert_eq!(config.parse_table_size("-3"), None);
	}
}
