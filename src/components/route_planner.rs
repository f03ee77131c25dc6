//! Distance table, endpoint selection and result display.
//!
//! The table is (N+1) x (N+1): a header row and column of node letters, text
//! inputs above the diagonal and `-` elsewhere. Each input stands for the
//! cell `column:row`. Leaving an input or pressing "find route" runs a fresh
//! query over everything entered so far.

use std::collections::BTreeMap;

use leptos::prelude::*;
use log::warn;

use crate::config::RouteConfig;
use crate::route::{
	RouteError, RoutePlan, edges_from_entries, entry_key, label_for, plan_route, summary,
};

use super::force_graph::{ForceGraphCanvas, GraphData, Theme};

/// Raw table values keyed by `(column, row)`.
pub type Entries = BTreeMap<(usize, usize), String>;

/// Runs one query over the raw table values.
pub fn plan_from_entries(
	entries: &Entries,
	source: usize,
	target: usize,
	config: &RouteConfig,
) -> Result<RoutePlan, RouteError> {
	let cells = entries
		.iter()
		.map(|(&(col, row), raw)| (entry_key(col, row), raw));
	let edges = edges_from_entries(cells)?;
	plan_route(edges, source, target, config)
}

fn label(index: usize) -> String {
	label_for(index).map(String::from).unwrap_or_default()
}

/// Table-driven shortest route finder with its graph view.
#[component]
pub fn RoutePlanner(config: RouteConfig) -> impl IntoView {
	let theme = Theme::by_name(&config.theme);
	let config = StoredValue::new(config);

	let (size, set_size) = signal(None::<usize>);
	let (size_error, set_size_error) = signal(None::<String>);
	let entries = RwSignal::new(Entries::new());
	let (source, set_source) = signal(0usize);
	let (target, set_target) = signal(0usize);
	let (outcome, set_outcome) = signal(None::<Result<RoutePlan, RouteError>>);

	let run = move || {
		if size.get_untracked().is_none() {
			return;
		}
		let result = entries.with_untracked(|e| {
			let (from, to) = (source.get_untracked(), target.get_untracked());
			config.with_value(|c| plan_from_entries(e, from, to, c))
		});
		if let Err(e) = &result {
			warn!("route-graph: query rejected: {e}");
		}
		set_outcome.set(Some(result));
	};

	let on_size_change = move |ev: web_sys::Event| {
		let text = event_target_value(&ev);
		match config.with_value(|c| c.parse_table_size(&text)) {
			None => {}
			Some(Err(e)) => set_size_error.set(Some(e.to_string())),
			Some(Ok(n)) => {
				set_size_error.set(None);
				entries.set(Entries::new());
				set_outcome.set(None);
				set_source.set(0);
				set_target.set(n - 1);
				set_size.set(Some(n));
			}
		}
	};

	let table = move || {
		size.get().map(|n| {
			let header = (0..n).map(|col| view! { <th>{label(col)}</th> }).collect_view();
			let rows = (0..n)
				.map(move |row| {
					let cells = (0..n)
						.map(move |col| {
							if col > row {
								let key = entry_key(col, row);
								view! {
									<td>
										<input
											type="text"
											class="spdist"
											size="3"
											name=key.clone()
											id=key
											on:input=move |ev| {
												let raw = event_target_value(&ev);
												entries.update(|m| {
													m.insert((col, row), raw);
												});
											}
											on:change=move |_| run()
										/>
									</td>
								}
								.into_any()
							} else {
								view! { <td>"-"</td> }.into_any()
							}
						})
						.collect_view();
					view! {
						<tr>
							<th>{label(row)}</th>
							{cells}
						</tr>
					}
				})
				.collect_view();

			view! {
				<table class="input">
					<tr>
						<th>"node"</th>
						{header}
					</tr>
					{rows}
				</table>
			}
		})
	};

	let options = move |selected: ReadSignal<usize>| {
		let n = size.get().unwrap_or(0);
		(0..n)
			.map(move |i| {
				view! {
					<option value=i.to_string() prop:selected=move || selected.get() == i>
						{label(i)}
					</option>
				}
			})
			.collect_view()
	};

	let controls = move || {
		size.get().map(move |_| {
			view! {
				<p>
					<span>" From : "</span>
					<select
						id="source"
						on:change=move |ev| {
							set_source.set(event_target_value(&ev).parse().unwrap_or(0))
						}
					>
						{move || options(source)}
					</select>
					<span>" To : "</span>
					<select
						id="target"
						on:change=move |ev| {
							set_target.set(event_target_value(&ev).parse().unwrap_or(0))
						}
					>
						{move || options(target)}
					</select>
					<button type="button" on:click=move |_| run()>
						" find route "
					</button>
				</p>
			}
		})
	};

	let report = move || {
		outcome.with(|o| match o {
			None => Vec::new(),
			Some(Ok(plan)) => summary::summarize(&plan.result),
			Some(Err(e)) => vec![e.to_string()],
		})
	};
	let results_class = move || {
		if outcome.with(|o| matches!(o, Some(Err(_)))) {
			"results route-error"
		} else {
			"results"
		}
	};

	let graph = Signal::derive(move || {
		outcome.with(|o| match o {
			Some(Ok(plan)) => GraphData::from(plan),
			_ => GraphData::default(),
		})
	});

	let (min, max) = config.with_value(|c| (c.min_nodes, c.max_nodes));

	view! {
		<div class="route-planner">
			<p>
				<span>{format!("Nodes ({min}-{max}) : ")}</span>
				<input type="text" size="3" on:change=on_size_change />
			</p>
			{move || size_error.get().map(|e| view! { <p class="route-error">{e}</p> })}
			<div id="distances">{table} {controls}</div>
			<div id="results" class=results_class>
				{move || report().into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
			</div>
			<div id="graph" class="route-graph">
				<ForceGraphCanvas data=graph theme=theme height=Some(400.0) />
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::{PathResult, PathStep};
	use pretty_assertions::assert_eq;

	fn entries(cells: &[((usize, usize), &str)]) -> Entries {
		cells.iter().map(|&(k, v)| (k, v.to_string())).collect()
	}

	#[test]
	fn plans_from_table_cells() {
		let e = entries(&[((1, 0), "5"), ((2, 1), "3"), ((2, 0), ""), ((3, 0), "x")]);
		let plan = plan_from_entries(&e, 0, 2, &RouteConfig::default()).unwrap();
		assert_eq!(
			plan.result,
			PathResult::Found {
				source: 0,
				target: 2,
				path: vec![PathStep::new(0, 1), PathStep::new(1, 2)],
				distance: 8,
			}
		);
	}

	#[test]
	fn empty_table_is_rejected() {
		let e = entries(&[((1, 0), ""), ((2, 0), "0")]);
		assert_eq!(
			plan_from_entries(&e, 0, 1, &RouteConfig::default()),
			Err(RouteError::NoEdges)
		);
	}
}
