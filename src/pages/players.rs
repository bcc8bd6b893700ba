use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::{Latest, Load, PageShell};
use crate::api::{BasicStats, PlayerRecord};
use crate::config::use_app;
use crate::router::{MatchKey, Route, StatsQuery, use_router};
use crate::stats_format::{format_player_stat, position_abbr, position_stats, stat_label};

/// Next expanded card after a click on `id`. Clicking the open card closes
/// it, clicking another one moves the expansion there.
pub fn toggle_expanded(current: Option<&str>, id: &str) -> Option<String> {
	match current {
		Some(open) if open == id => None,
		_ => Some(id.to_string()),
	}
}

fn is_expanded(current: Option<&str>, id: &str) -> bool {
	current == Some(id)
}

#[component]
fn PlayerCard(player: PlayerRecord, expanded: RwSignal<Option<String>>) -> impl IntoView {
	let id = player.player_id.clone();
	let is_open = {
		let id = id.clone();
		move || expanded.with(|e| is_expanded(e.as_deref(), &id))
	};
	let rows: Vec<(String, String)> = position_stats(&player.position)
		.iter()
		.map(|key| (stat_label(key).to_string(), format_player_stat(player.stat(key))))
		.collect();
	let goals = player.goals.unwrap_or(0);
	let assists = player.assists.unwrap_or(0);

	view! {
		<div class="player-card" class:expanded=is_open.clone()>
			<button
				class="player-summary"
				on:click=move |_| expanded.update(|e| *e = toggle_expanded(e.as_deref(), &id))
			>
				<span class="player-position">{position_abbr(&player.position)}</span>
				<span class="player-name">{player.full_name()}</span>
				<span class="player-tally">{format!("⚽ {goals}  🅰 {assists}")}</span>
			</button>
			<Show when=is_open.clone()>
				<div class="player-stats">
					{rows
						.clone()
						.into_iter()
						.map(|(label, value)| {
							view! {
								<div class="player-stat">
									<span class="stat-label">{label}</span>
									<span class="stat-value">{value}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</Show>
		</div>
	}
}

#[component]
fn Squad(
	name: String,
	players: Vec<PlayerRecord>,
	expanded: RwSignal<Option<String>>,
) -> impl IntoView {
	let empty = players.is_empty();
	view! {
		<div class="squad">
			<h2 class="gradient-text">{name}</h2>
			{if empty {
				view! { <p class="status-text">"No player data."</p> }.into_any()
			} else {
				players
					.into_iter()
					.map(|player| view! { <PlayerCard player=player expanded=expanded /> })
					.collect_view()
					.into_any()
			}}
		</div>
	}
}

/// Player lines for both sides of one match.
#[component]
pub fn MatchPlayersPage(match_key: MatchKey) -> impl IntoView {
	let app = use_app();
	let router = use_router();
	let teams = StoredValue::new(app.config.teams.clone());
	let client = app.api.clone();
	let key = match_key;

	let score = RwSignal::new(None::<String>);
	let players = RwSignal::new(Load::<Vec<PlayerRecord>>::Loading);
	let expanded = RwSignal::new(None::<String>);
	let latest = Latest::new();

	let home = teams.with_value(|t| t.display_name(&key.home).to_string());
	let away = teams.with_value(|t| t.display_name(&key.away).to_string());
	let (home_crest, away_crest) = teams.with_value(|t| (t.crest_src(&home), t.crest_src(&away)));

	{
		let key = key.clone();
		let ticket = latest.begin();
		spawn_local(async move {
			let stats = client.basic_stats(key.season, key.gameweek, &key.home, &key.away).await;
			let lines = client.players(key.season, key.gameweek, &key.home, &key.away).await;
			if !latest.is_current(ticket) {
				return;
			}
			match stats {
				Ok(row) => score.set(Some(row.score_text())),
				Err(e) => error!("football-intel: failed to load match score: {e}"),
			}
			match lines {
				Ok(list) => {
					info!(
						"football-intel: {} player lines for {} v {}",
						list.len(),
						key.home,
						key.away
					);
					players.set(Load::Ready(list));
				}
				Err(e) => {
					error!("football-intel: failed to load players: {e}");
					players.set(Load::Failed);
				}
			}
		});
	}

	let squads = {
		let (home_team, away_team) = (key.home.clone(), key.away.clone());
		let (home, away) = (home.clone(), away.clone());
		move || match players.get() {
			Load::Idle | Load::Loading => {
				view! { <p class="status-text">"Loading player statistics…"</p> }.into_any()
			}
			Load::Failed => {
				view! { <p class="status-text">"No player data available for this match."</p> }
					.into_any()
			}
			Load::Ready(list) => {
				let (home_players, away_players) = teams.with_value(|t| {
					let home_players: Vec<_> =
						list.iter().filter(|p| p.plays_for(&home_team, t)).cloned().collect();
					let away_players: Vec<_> =
						list.iter().filter(|p| p.plays_for(&away_team, t)).cloned().collect();
					(home_players, away_players)
				});
				view! {
					<div class="squads">
						<Squad name=home.clone() players=home_players expanded=expanded />
						<Squad name=away.clone() players=away_players expanded=expanded />
					</div>
				}
				.into_any()
			}
		}
	};

	let listing = StatsQuery::matchday(key.season, key.gameweek);
	let opened = key.stats_query();

	view! {
		<PageShell class="players-page">
			<section class="match-header">
				<div class="match-side">
					<img class="match-crest large" src=home_crest alt=home.clone() />
					<h2>{home.clone()}</h2>
				</div>
				<div class="match-score large">
					{move || score.get().unwrap_or_else(|| BasicStats::default().score_text())}
				</div>
				<div class="match-side">
					<img class="match-crest large" src=away_crest alt=away.clone() />
					<h2>{away.clone()}</h2>
				</div>
			</section>
			<p class="match-meta">{format!("{} · {}", key.season, key.gameweek)}</p>

			<section class="player-lists">{squads}</section>

			<div class="action-row">
				<button
					class="outline-button"
					on:click=move |_| router.navigate(Route::Statistics(listing.clone()))
				>
					"Back to Matches"
				</button>
				<button
					class="pill-button"
					on:click=move |_| router.navigate(Route::Statistics(opened.clone()))
				>
					"Back to Match Statistics"
				</button>
			</div>
		</PageShell>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opening_a_card_expands_it() {
		assert_eq!(toggle_expanded(None, "p1").as_deref(), Some("p1"));
	}

	#[test]
	fn clicking_the_open_card_collapses_it() {
		assert_eq!(toggle_expanded(Some("p1"), "p1"), None);
	}

	#[test]
	fn only_one_card_stays_expanded() {
		let mut open = toggle_expanded(None, "p1");
		open = toggle_expanded(open.as_deref(), "p2");
		assert_eq!(open.as_deref(), Some("p2"));
		assert!(is_expanded(open.as_deref(), "p2"));
		assert!(!is_expanded(open.as_deref(), "p1"));
		assert!(!is_expanded(None, "p2"));
	}
}
