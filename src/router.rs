//! Client-side routing over the History API.
//!
//! [`Route`] is plain data: parsing a location and rendering an href are pure
//! so they can be tested natively. [`RouterContext`] binds it to the browser:
//! it pushes history entries, follows back/forward through `popstate`, and
//! resets scroll on every page change.

use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use reqwest::Url;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, ScrollBehavior, ScrollRestoration, ScrollToOptions, Window};

use crate::api::{Matchday, Season};

/// Optional selection carried by the statistics page URL, so that leaving
/// the player view can restore the matchday and the opened match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
	pub season: Option<Season>,
	pub gameweek: Option<Matchday>,
	/// Dataset names of the opened match.
	pub home: Option<String>,
	pub away: Option<String>,
}

impl StatsQuery {
	/// Matchday listing only, no opened match.
	pub fn matchday(season: Season, gameweek: Matchday) -> Self {
		Self {
			season: Some(season),
			gameweek: Some(gameweek),
			..Self::default()
		}
	}

	pub fn selected_match(&self) -> Option<(&str, &str)> {
		Some((self.home.as_deref()?, self.away.as_deref()?))
	}
}

/// One match, fully identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchKey {
	pub season: Season,
	pub gameweek: Matchday,
	pub home: String,
	pub away: String,
}

impl MatchKey {
	/// Statistics page with this match opened.
	pub fn stats_query(&self) -> StatsQuery {
		StatsQuery {
			home: Some(self.home.clone()),
			away: Some(self.away.clone()),
			..StatsQuery::matchday(self.season, self.gameweek)
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
	Home,
	Workflow,
	Prediction,
	Statistics(StatsQuery),
	MatchPlayers(MatchKey),
	Clubs,
	NotFound,
}

// Any origin works; only path and query are used.
const PARSE_BASE: &str = "http://localhost";

fn query_pairs(query: &str) -> Vec<(String, String)> {
	let query = query.trim_start_matches('?');
	let Ok(url) = Url::parse(&format!("{PARSE_BASE}/?{query}")) else {
		return Vec::new();
	};
	url.query_pairs()
		.map(|(k, v)| (k.into_owned(), v.into_owned()))
		.collect()
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
	pairs
		.iter()
		.find(|(k, _)| k == key)
		.map(|(_, v)| v.as_str())
		.filter(|v| !v.is_empty())
}

fn parse_stats_query(pairs: &[(String, String)]) -> StatsQuery {
	let season = lookup(pairs, "season")
		.and_then(|s| s.parse().ok())
		.map(Season)
		.filter(|s| Season::AVAILABLE.contains(s));
	let gameweek = lookup(pairs, "gameweek")
		.and_then(|g| g.parse().ok())
		.map(Matchday)
		.filter(|g| season.is_some_and(|s| (1..=s.max_matchday()).contains(&g.0)));
	StatsQuery {
		season,
		gameweek,
		home: lookup(pairs, "home").map(String::from),
		away: lookup(pairs, "away").map(String::from),
	}
}

impl Route {
	/// Route for a location's `pathname` and `search`.
	pub fn parse(path: &str, query: &str) -> Self {
		let path = match path.trim_end_matches('/') {
			"" => "/",
			p => p,
		};
		let pairs = query_pairs(query);
		match path {
			"/" | "/index.html" => Self::Home,
			"/workflow" => Self::Workflow,
			"/prediction" => Self::Prediction,
			"/statistics" => Self::Statistics(parse_stats_query(&pairs)),
			"/statistics/match/players" => {
				let q = parse_stats_query(&pairs);
				match (q.season, q.gameweek, q.home, q.away) {
					(Some(season), Some(gameweek), Some(home), Some(away)) => {
						Self::MatchPlayers(MatchKey {
							season,
							gameweek,
							home,
							away,
						})
					}
					_ => Self::NotFound,
				}
			}
			"/clubs" | "/knowclubs" => Self::Clubs,
			_ => Self::NotFound,
		}
	}

	fn path(&self) -> &'static str {
		match self {
			Self::Home => "/",
			Self::Workflow => "/workflow",
			Self::Prediction => "/prediction",
			Self::Statistics(_) => "/statistics",
			Self::MatchPlayers(_) => "/statistics/match/players",
			Self::Clubs => "/clubs",
			Self::NotFound => "/404",
		}
	}

	/// Path plus query, suitable for `pushState` and `<a href>`.
	pub fn href(&self) -> String {
		let path = self.path();
		let query = match self {
			Self::Statistics(q) => q.clone(),
			Self::MatchPlayers(key) => key.stats_query(),
			_ => return path.to_string(),
		};
		let Ok(mut url) = Url::parse(&format!("{PARSE_BASE}{path}")) else {
			return path.to_string();
		};
		{
			let mut pairs = url.query_pairs_mut();
			if let Some(season) = query.season {
				pairs.append_pair("season", &season.0.to_string());
			}
			if let Some(gameweek) = query.gameweek {
				pairs.append_pair("gameweek", &gameweek.0.to_string());
			}
			if let Some(home) = &query.home {
				pairs.append_pair("home", home);
			}
			if let Some(away) = &query.away {
				pairs.append_pair("away", away);
			}
		}
		match url.query() {
			Some(q) if !q.is_empty() => format!("{path}?{q}"),
			_ => path.to_string(),
		}
	}

	/// Whether two routes render the same page, ignoring query state.
	pub fn same_page(&self, other: &Route) -> bool {
		std::mem::discriminant(self) == std::mem::discriminant(other)
	}

	fn from_window(window: &Window) -> Self {
		let location = window.location();
		let path = location.pathname().unwrap_or_default();
		let search = location.search().unwrap_or_default();
		Self::parse(&path, &search)
	}
}

/// Anchor sections on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	Home,
	About,
}

impl Section {
	pub fn id(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::About => "about",
		}
	}

	/// Gap kept between the fixed navigation bar and the section top.
	fn offset(self) -> f64 {
		match self {
			Self::Home => 0.0,
			Self::About => -69.0,
		}
	}
}

/// Scroll the window to `top` pixels.
pub fn scroll_to(top: f64, smooth: bool) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let opts = ScrollToOptions::new();
	opts.set_top(top);
	opts.set_left(0.0);
	opts.set_behavior(if smooth {
		ScrollBehavior::Smooth
	} else {
		ScrollBehavior::Instant
	});
	window.scroll_to_with_scroll_to_options(&opts);
}

pub fn scroll_to_section(section: Section) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(el) = window.document().and_then(|d| d.get_element_by_id(section.id())) else {
		debug!("football-intel: section #{} not on page", section.id());
		return;
	};
	scroll_to_element(&el, section.offset());
}

/// Smooth-scroll so `el` sits `offset` pixels below the top of the viewport.
pub fn scroll_to_element(el: &Element, offset: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let y = el.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0);
	scroll_to(y - offset, true);
}

/// Window `popstate` subscription, removed on drop.
struct PopstateListener {
	window: Window,
	handler: Closure<dyn FnMut(Event)>,
}

impl PopstateListener {
	fn attach(window: Window, route: RwSignal<Route>) -> Option<Self> {
		let win = window.clone();
		let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			route.set(Route::from_window(&win));
			scroll_to(0.0, false);
		});
		window
			.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
			.ok()?;
		Some(Self { window, handler })
	}
}

impl Drop for PopstateListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("popstate", self.handler.as_ref().unchecked_ref());
	}
}

/// Current route plus navigation, shared through context.
#[derive(Clone, Copy)]
pub struct RouterContext {
	route: RwSignal<Route>,
}

impl RouterContext {
	pub fn route(&self) -> Signal<Route> {
		self.route.into()
	}

	/// Push `route` onto the history stack and show it from the top.
	pub fn navigate(&self, route: Route) {
		let href = route.href();
		if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
			if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&href)) {
				warn!("football-intel: pushState failed for {href}: {e:?}");
			}
		}
		debug!("football-intel: navigate {href}");
		self.route.set(route);
		scroll_to(0.0, false);
	}

	/// Scroll to a home page section, leaving the current page first if needed.
	pub fn navigate_to_section(&self, section: Section) {
		if self.route.with_untracked(|r| *r == Route::Home) {
			scroll_to_section(section);
			return;
		}
		self.navigate(Route::Home);
		set_timeout(move || scroll_to_section(section), Duration::from_millis(300));
	}
}

/// Install the router for the app and return its handle.
///
/// Must be called once, near the root. Browser scroll restoration is turned
/// off so every navigation lands at the top.
pub fn provide_router() -> RouterContext {
	let window = web_sys::window();
	let initial = window.as_ref().map_or(Route::Home, Route::from_window);
	let ctx = RouterContext {
		route: RwSignal::new(initial),
	};

	if let Some(window) = window {
		if let Ok(history) = window.history() {
			let _ = history.set_scroll_restoration(ScrollRestoration::Manual);
		}
		let listener = StoredValue::new_local(PopstateListener::attach(window, ctx.route));
		on_cleanup(move || {
			listener.try_update_value(|l| *l = None);
		});
	}

	provide_context(ctx);
	ctx
}

/// Router handle from context.
pub fn use_router() -> RouterContext {
	use_context::<RouterContext>().unwrap_or_else(|| {
		warn!("football-intel: router used outside provide_router, navigation is local only");
		RouterContext {
			route: RwSignal::new(Route::Home),
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn static_paths() {
		assert_eq!(Route::parse("/", ""), Route::Home);
		assert_eq!(Route::parse("", ""), Route::Home);
		assert_eq!(Route::parse("/workflow/", ""), Route::Workflow);
		assert_eq!(Route::parse("/prediction", "?x=1"), Route::Prediction);
		assert_eq!(Route::parse("/knowclubs", ""), Route::Clubs);
		assert_eq!(Route::parse("/nope", ""), Route::NotFound);
	}

	#[test]
	fn statistics_query_is_optional() {
		assert_eq!(
			Route::parse("/statistics", ""),
			Route::Statistics(StatsQuery::default())
		);
		let Route::Statistics(q) = Route::parse("/statistics", "?season=2024&gameweek=5") else {
			panic!("expected statistics");
		};
		assert_eq!(q, StatsQuery::matchday(Season(2024), Matchday(5)));
		assert_eq!(q.selected_match(), None);
	}

	#[test]
	fn out_of_range_selection_is_dropped() {
		let Route::Statistics(q) = Route::parse("/statistics", "?season=2025&gameweek=30") else {
			panic!("expected statistics");
		};
		assert_eq!(q.season, Some(Season(2025)));
		assert_eq!(q.gameweek, None);

		let Route::Statistics(q) = Route::parse("/statistics", "?season=1999&gameweek=3") else {
			panic!("expected statistics");
		};
		assert_eq!(q, StatsQuery::default());
	}

	#[test]
	fn match_players_round_trips_with_escaping() {
		let route = Route::MatchPlayers(MatchKey {
			season: Season(2024),
			gameweek: Matchday(12),
			home: "Nott'm Forest".into(),
			away: "Man City".into(),
		});
		let href = route.href();
		assert!(href.starts_with("/statistics/match/players?season=2024&gameweek=12&home="));
		let (path, query) = href.split_once('?').unwrap();
		assert_eq!(Route::parse(path, query), route);
	}

	#[test]
	fn incomplete_match_key_is_not_found() {
		assert_eq!(
			Route::parse("/statistics/match/players", "?season=2024&gameweek=12&home=Leeds"),
			Route::NotFound
		);
	}

	#[test]
	fn plain_routes_have_no_query() {
		assert_eq!(Route::Clubs.href(), "/clubs");
		assert_eq!(Route::Statistics(StatsQuery::default()).href(), "/statistics");
		assert!(Route::Home.same_page(&Route::Home));
		assert!(
			Route::Statistics(StatsQuery::default())
				.same_page(&Route::Statistics(StatsQuery::matchday(Season(2024), Matchday(1))))
		);
	}
}
