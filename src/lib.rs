//! football-intel: match prediction and statistics front-end.
//!
//! Client-side rendered pages over a prediction REST API, all drawn on an
//! animated pitch background. Pure logic (routing, formatting, picker state,
//! the background scene) is kept free of the DOM so it tests natively.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, info};

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod stats_format;
pub mod teams;

pub use config::{AppContext, SiteConfig, load_site_config};
pub use router::Route;

use pages::{
	ClubsPage, HomePage, MatchPlayersPage, NotFoundPage, PredictionPage, StatisticsPage,
	WorkflowPage,
};
use router::provide_router;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("football-intel: logging initialized");
}

fn page_title(route: &Route) -> &'static str {
	match route {
		Route::Home => "Football Intel",
		Route::Workflow => "Workflow | Football Intel",
		Route::Prediction => "Prediction | Football Intel",
		Route::Statistics(_) | Route::MatchPlayers(_) => "Statistics | Football Intel",
		Route::Clubs => "Clubs | Football Intel",
		Route::NotFound => "Not Found | Football Intel",
	}
}

/// Main application component.
/// Reads the site config from the DOM and renders the page for the current URL.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let app = AppContext::new(load_site_config());
	provide_context(app.clone());
	spawn_local(async move { app.api.check_backend(app.teams()).await });
	let router = provide_router();
	let route = router.route();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=move || page_title(&route.get()) />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{move || match route.get() {
			Route::Home => view! { <HomePage /> }.into_any(),
			Route::Workflow => view! { <WorkflowPage /> }.into_any(),
			Route::Prediction => view! { <PredictionPage /> }.into_any(),
			Route::Statistics(query) => view! { <StatisticsPage query=query /> }.into_any(),
			Route::MatchPlayers(key) => view! { <MatchPlayersPage match_key=key /> }.into_any(),
			Route::Clubs => view! { <ClubsPage /> }.into_any(),
			Route::NotFound => view! { <NotFoundPage /> }.into_any(),
		}}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn player_view_shares_the_statistics_title() {
		let key = router::MatchKey {
			season: api::Season(2024),
			gameweek: api::Matchday(3),
			home: "Arsenal".into(),
			away: "Chelsea".into(),
		};
		assert_eq!(
			page_title(&Route::MatchPlayers(key)),
			page_title(&Route::Statistics(Default::default()))
		);
	}
}
