use leptos::prelude::*;

use super::PageShell;
use crate::router::{Route, StatsQuery, use_router};

struct Feature {
	title: &'static str,
	description: &'static str,
	action: &'static str,
	route: Route,
}

fn features() -> [Feature; 3] {
	[
		Feature {
			title: "Live Match Prediction",
			description: "Forecast match outcomes and precise scorelines using ML models, analysing team form, historical data and match dynamics.",
			action: "Execute Prediction",
			route: Route::Prediction,
		},
		Feature {
			title: "Match & Player Statistics",
			description: "Dive into match and player statistics from the 2024 and 2025 seasons, uncovering team trends and individual performances.",
			action: "Analyze Statistics",
			route: Route::Statistics(StatsQuery::default()),
		},
		Feature {
			title: "Hall of Clubs",
			description: "Explore Premier League clubs in depth: background, legacy, historic achievements, iconic moments and major rivalries.",
			action: "Explore Archives",
			route: Route::Clubs,
		},
	]
}

#[component]
pub fn HomePage() -> impl IntoView {
	let router = use_router();

	view! {
		<PageShell class="home-page">
			<section id="home" class="hero">
				<div class="hero-image" aria-hidden="true"></div>
				<div class="hero-content">
					<h1 class="gradient-text">"The 90" <sup>"th"</sup> " Minute"</h1>
					<p class="hero-tagline">"Every minute. Every match. Every goal, predicted."</p>
					<p class="hero-sub">"Powered by AI. Inspired by the beautiful game."</p>
				</div>
			</section>

			<section id="about" class="about">
				<h2 class="gradient-text">"About the Project"</h2>
				<p>
					"Tired of predictions based on gut feelings, biased commentators, or arbitrary streaks? "
					"This is data science applied directly to the beautiful game: a model trained on two "
					"seasons of Premier League data that estimates the outcome before the referee blows "
					"the final whistle."
				</p>

				<h2 class="gradient-text">"Core Features"</h2>
				<div class="feature-grid">
					{features()
						.into_iter()
						.map(|f| {
							let route = f.route;
							view! {
								<div class="feature-card">
									<h3>{f.title}</h3>
									<p>{f.description}</p>
									<button class="ghost-button" on:click=move |_| router.navigate(route.clone())>
										{f.action}
									</button>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>
		</PageShell>
	}
}
