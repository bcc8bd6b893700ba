use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use super::{Latest, Load, PageShell};
use crate::api::{BasicStats, MatchSummary, Matchday, Season};
use crate::components::picker::ListPicker;
use crate::config::use_app;
use crate::router::{MatchKey, Route, StatsQuery, use_router};
use crate::stats_format::{BASIC_STAT_ROWS, ROLLING_STAT_ROWS, StatRow, format_value};

/// One rendered row of the comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StatLine {
	pub label: &'static str,
	pub home: String,
	pub away: String,
}

pub(crate) fn stat_lines(rows: &[StatRow], stats: &BasicStats) -> Vec<StatLine> {
	rows.iter()
		.map(|row| StatLine {
			label: row.label,
			home: format_value(stats.get(row.home_key), row.format),
			away: format_value(stats.get(row.away_key), row.format),
		})
		.collect()
}

fn find_match(list: &[MatchSummary], home: &str, away: &str) -> Option<MatchSummary> {
	list.iter()
		.find(|m| m.home_team == home && m.away_team == away)
		.cloned()
}

/// What the match list area shows for a load state.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Listing {
	Hidden,
	Loading,
	Failed,
	/// Loaded, but the matchday has no fixtures.
	Empty,
	Matches(Vec<MatchSummary>),
}

pub(crate) fn listing_state(load: Load<Vec<MatchSummary>>) -> Listing {
	match load {
		Load::Idle => Listing::Hidden,
		Load::Loading => Listing::Loading,
		Load::Failed => Listing::Failed,
		Load::Ready(list) if list.is_empty() => Listing::Empty,
		Load::Ready(list) => Listing::Matches(list),
	}
}

#[component]
fn MatchCard(
	summary: MatchSummary,
	#[prop(into)] on_open: Callback<MatchSummary>,
) -> impl IntoView {
	let app = use_app();
	let teams = app.teams();
	let home = teams.display_name(&summary.home_team).to_string();
	let away = teams.display_name(&summary.away_team).to_string();
	let (home_crest, away_crest) = (teams.crest_src(&home), teams.crest_src(&away));
	let score = summary.score_text();

	view! {
		<button class="match-card" on:click=move |_| on_open.run(summary.clone())>
			<div class="match-side">
				<img class="match-crest" src=home_crest alt=home.clone() />
				<span>{home.clone()}</span>
			</div>
			<div class="match-score">{score}</div>
			<div class="match-side">
				<img class="match-crest" src=away_crest alt=away.clone() />
				<span>{away.clone()}</span>
			</div>
		</button>
	}
}

#[component]
fn StatsTable(stats: BasicStats) -> impl IntoView {
	let basic = stat_lines(&BASIC_STAT_ROWS, &stats);
	let rolling = stat_lines(&ROLLING_STAT_ROWS, &stats);

	view! {
		<div class="stats-table">
			{basic
				.into_iter()
				.map(|line| {
					view! {
						<div class="stats-row">
							<span class="stats-home">{line.home}</span>
							<span class="stats-label">{line.label}</span>
							<span class="stats-away">{line.away}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
		<h3 class="gradient-text">"Recent Form"</h3>
		<div class="rolling-grid">
			{rolling
				.into_iter()
				.map(|line| {
					view! {
						<div class="rolling-stat">
							<div class="rolling-circle home">{line.home}</div>
							<span class="rolling-label">{line.label}</span>
							<div class="rolling-circle away">{line.away}</div>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Browse matchdays and open one match's statistics.
///
/// `query` restores a previous selection: with a season and gameweek the
/// listing is fetched on mount, and with home and away as well that match is
/// opened once the listing arrives.
#[component]
pub fn StatisticsPage(query: StatsQuery) -> impl IntoView {
	let app = use_app();
	let router = use_router();
	let teams = StoredValue::new(app.config.teams.clone());
	let api = StoredValue::new_local(app.api.clone());

	let season = RwSignal::new(query.season);
	let gameweek = RwSignal::new(query.gameweek);
	let matches = RwSignal::new(Load::<Vec<MatchSummary>>::Idle);
	let selected = RwSignal::new(None::<MatchSummary>);
	let stats = RwSignal::new(Load::<BasicStats>::Idle);
	let latest_matches = Latest::new();
	let latest_stats = Latest::new();

	let close_match = move || {
		latest_stats.invalidate();
		selected.set(None);
		stats.set(Load::Idle);
	};

	let open_match = move |summary: MatchSummary| {
		let (Some(s), Some(g)) = (season.get_untracked(), gameweek.get_untracked()) else {
			return;
		};
		selected.set(Some(summary.clone()));
		stats.set(Load::Loading);
		let ticket = latest_stats.begin();
		let client = api.get_value();
		spawn_local(async move {
			let result = client
				.basic_stats(s, g, &summary.home_team, &summary.away_team)
				.await;
			if !latest_stats.is_current(ticket) {
				return;
			}
			match result {
				Ok(row) => {
					info!(
						"football-intel: stats for {} v {}, {} fields",
						summary.home_team,
						summary.away_team,
						row.len()
					);
					stats.set(Load::Ready(row));
				}
				Err(e) => {
					error!("football-intel: failed to load match stats: {e}");
					stats.set(Load::Failed);
				}
			}
		});
	};

	let fetch_matches = move |restore: Option<(String, String)>| {
		let (Some(s), Some(g)) = (season.get_untracked(), gameweek.get_untracked()) else {
			return;
		};
		close_match();
		matches.set(Load::Loading);
		let ticket = latest_matches.begin();
		let client = api.get_value();
		spawn_local(async move {
			let result = client.matches(s, g).await;
			if !latest_matches.is_current(ticket) {
				return;
			}
			match result {
				Ok(list) => {
					info!("football-intel: {} matches for {s}, {g}", list.len());
					let reopen = restore.and_then(|(home, away)| {
						let found = find_match(&list, &home, &away);
						if found.is_none() {
							warn!("football-intel: {home} v {away} not in {s}, {g}");
						}
						found
					});
					matches.set(Load::Ready(list));
					if let Some(summary) = reopen {
						open_match(summary);
					}
				}
				Err(e) => {
					error!("football-intel: failed to load matches: {e}");
					matches.set(Load::Failed);
				}
			}
		});
	};

	let reset_listing = move || {
		latest_matches.invalidate();
		close_match();
		matches.set(Load::Idle);
	};

	let choose_season = move |s: Season| {
		if season.get_untracked() == Some(s) {
			return;
		}
		season.set(Some(s));
		gameweek.set(None);
		reset_listing();
	};

	let choose_gameweek = move |g: Matchday| {
		if gameweek.get_untracked() == Some(g) {
			return;
		}
		gameweek.set(Some(g));
		reset_listing();
	};

	if query.season.is_some() && query.gameweek.is_some() {
		let restore = query
			.selected_match()
			.map(|(h, a)| (h.to_string(), a.to_string()));
		fetch_matches(restore);
	}

	let can_view = move || season.get().is_some() && gameweek.get().is_some();

	let listing = move || match listing_state(matches.get()) {
		Listing::Hidden => ().into_any(),
		Listing::Loading => view! { <p class="status-text">"Loading matches…"</p> }.into_any(),
		Listing::Failed => {
			view! { <p class="status-text">"Could not load matches. Please try again."</p> }
				.into_any()
		}
		Listing::Empty => {
			view! { <p class="status-text empty-state">"No matches found for this matchday."</p> }
				.into_any()
		}
		Listing::Matches(list) => view! {
			<div class="match-grid">
				{list
					.into_iter()
					.map(|summary| view! { <MatchCard summary=summary on_open=open_match /> })
					.collect_view()}
			</div>
		}
		.into_any(),
	};

	let detail = move |summary: MatchSummary| {
		let home = teams.with_value(|t| t.display_name(&summary.home_team).to_string());
		let away = teams.with_value(|t| t.display_name(&summary.away_team).to_string());
		let (home_crest, away_crest) =
			teams.with_value(|t| (t.crest_src(&home), t.crest_src(&away)));
		let fallback_score = summary.score_text();
		let score = move || {
			stats.with(|s| s.ready().map(BasicStats::score_text))
				.unwrap_or_else(|| fallback_score.clone())
		};
		let body = move || match stats.get() {
			Load::Idle | Load::Loading => {
				view! { <p class="status-text">"Loading match statistics…"</p> }.into_any()
			}
			Load::Failed => {
				view! { <p class="status-text">"No statistics available for this match."</p> }
					.into_any()
			}
			Load::Ready(row) => view! { <StatsTable stats=row /> }.into_any(),
		};
		let key = move || {
			Some(MatchKey {
				season: season.get_untracked()?,
				gameweek: gameweek.get_untracked()?,
				home: summary.home_team.clone(),
				away: summary.away_team.clone(),
			})
		};

		view! {
			<div class="match-detail">
				<div class="match-header">
					<div class="match-side">
						<img class="match-crest large" src=home_crest alt=home.clone() />
						<h2>{home.clone()}</h2>
					</div>
					<div class="match-score large">{score}</div>
					<div class="match-side">
						<img class="match-crest large" src=away_crest alt=away.clone() />
						<h2>{away.clone()}</h2>
					</div>
				</div>
				{body}
				<div class="action-row">
					<button class="outline-button" on:click=move |_| close_match()>
						"Back to Matches"
					</button>
					<button
						class="pill-button"
						on:click=move |_| {
							if let Some(key) = key() {
								router.navigate(Route::MatchPlayers(key));
							}
						}
					>
						"View Player Statistics"
					</button>
				</div>
			</div>
		}
	};

	view! {
		<PageShell class="statistics-page">
			<section class="page-header">
				<h1 class="gradient-text">"Match Statistics"</h1>
				<p>"Pick a season and matchday to browse every fixture."</p>
			</section>

			<section class="match-select">
				<div class="picker-pair">
					<ListPicker
						title="SEASON"
						items=Signal::derive(|| Season::AVAILABLE.to_vec())
						selected=season
						on_select=choose_season
					/>
					<ListPicker
						title="MATCHDAY"
						items=Signal::derive(move || {
							season.get().map(Season::matchdays).unwrap_or_default()
						})
						selected=gameweek
						disabled=Signal::derive(move || Some(season.get().is_none()))
						on_select=choose_gameweek
					/>
				</div>
				<div class="action-row">
					<button
						class="pill-button"
						disabled=move || !can_view() || matches.with(Load::is_loading)
						on:click=move |_| fetch_matches(None)
					>
						"VIEW MATCHES"
					</button>
				</div>
			</section>

			<section class="match-results">
				{move || match selected.get() {
					Some(summary) => detail(summary).into_any(),
					None => listing().into_any(),
				}}
			</section>
		</PageShell>
	}
}
