#![allow(unused_crate_dependencies)]

use football_intel::api::{Matchday, Season};
use football_intel::components::picker::PickerState;
use football_intel::pages::{RequestSeq, toggle_expanded};
use football_intel::router::{MatchKey, Route, StatsQuery};
use football_intel::teams::TeamDirectory;

fn forest_key() -> MatchKey {
	MatchKey {
		season: Season(2025),
		gameweek: Matchday(12),
		home: "Nott'm Forest".into(),
		away: "Man City".into(),
	}
}

#[test]
fn player_view_round_trips_through_the_url() {
	let route = Route::MatchPlayers(forest_key());
	let href = route.href();
	let (path, query) = href.split_once('?').expect("player route has a query");
	assert_eq!(path, "/statistics/match/players");
	assert_eq!(Route::parse(path, query), route);
}

#[test]
fn back_buttons_restore_statistics_selection() {
	let key = forest_key();

	let listing = Route::Statistics(StatsQuery::matchday(key.season, key.gameweek));
	assert_eq!(listing.href(), "/statistics?season=2025&gameweek=12");

	let opened = Route::Statistics(key.stats_query());
	let href = opened.href();
	let (path, query) = href.split_once('?').expect("opened match has a query");
	let Route::Statistics(q) = Route::parse(path, query) else {
		panic!("expected statistics route");
	};
	assert_eq!(q.selected_match(), Some(("Nott'm Forest", "Man City")));
	assert!(opened.same_page(&listing));
}

#[test]
fn team_carousel_never_lands_on_the_other_side() {
	let dir = TeamDirectory::default();
	let mut home = PickerState::new(dir.teams.clone());
	let away = "Aston Villa".to_string();

	home.sync_selected(Some(&"Arsenal".to_string()));
	assert_eq!(home.step(1, Some(&away)).as_deref(), Some("Bournemouth"));
	assert_eq!(home.step(-1, Some(&away)).as_deref(), Some("Arsenal"));
	assert_eq!(home.select(&away, Some(&away)), None);

	home.set_search("united");
	let matches: Vec<_> = home.entries(Some(&away)).into_iter().map(|e| e.label).collect();
	assert_eq!(matches, ["Leeds United", "Manchester United", "Newcastle United"]);
}

#[test]
fn newer_request_supersedes_older() {
	let mut seq = RequestSeq::default();
	let slow = seq.next();
	let fast = seq.next();
	assert!(!seq.is_current(slow));
	assert!(seq.is_current(fast));
}

#[test]
fn one_player_card_open_at_a_time() {
	let open = toggle_expanded(None, "7");
	let open = toggle_expanded(open.as_deref(), "8");
	assert_eq!(open.as_deref(), Some("8"));
	assert_eq!(toggle_expanded(open.as_deref(), "8"), None);
}
