use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::{Latest, PageShell};
use crate::api::{OutcomeProbabilities, Prediction, PredictionRequest};
use crate::components::picker::TeamPicker;
use crate::config::use_app;
use crate::stats_format::{
	Segment, format_probability, format_raw_scoreline, outcome_headline, probability_segments,
};

/// A finished prediction with the display names it was requested for.
#[derive(Clone, Debug, PartialEq)]
struct Outcome {
	prediction: Prediction,
	home: String,
	away: String,
}

#[component]
fn ProbabilitySegment(segment: Segment) -> impl IntoView {
	let pct = segment.percent_text();
	let width = format!("{}%", segment.percent);
	let title = format!("{}: {pct}", segment.label);
	let inside = segment.label_inside();

	view! {
		<div
			class="bar-segment"
			style:width=width.clone()
			style:min-width=width
			style:background-color=segment.color
			style:color=segment.text_color
			title=title
		>
			{if inside {
				view! {
					<div class="segment-label">
						<span class="segment-pct">{pct}</span>
						<span class="segment-name">{segment.label}</span>
					</div>
				}
					.into_any()
			} else {
				view! { <span class="segment-callout">{format!("{} {pct}", segment.label)}</span> }
					.into_any()
			}}
		</div>
	}
}

#[component]
fn Expander(
	label: &'static str,
	open: RwSignal<bool>,
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<div class="expander">
			<button class="outline-button" on:click=move |_| open.update(|o| *o = !*o)>
				{label}
			</button>
			<Show when=move || open.get()>
				<div class="expander-body">{children()}</div>
			</Show>
		</div>
	}
}

fn probability_list(probs: OutcomeProbabilities, home: String, away: String) -> impl IntoView {
	view! {
		<ul class="probability-list">
			<li>{format!("{home}: {}", format_probability(probs.home_win))}</li>
			<li>{format!("Draw: {}", format_probability(probs.draw))}</li>
			<li>{format!("{away}: {}", format_probability(probs.away_win))}</li>
		</ul>
	}
}

/// Pick two teams and show the blended outcome prediction.
#[component]
pub fn PredictionPage() -> impl IntoView {
	let app = use_app();
	let teams = StoredValue::new(app.config.teams.clone());
	let api = StoredValue::new_local(app.api.clone());

	let home = RwSignal::new(Some("Arsenal".to_string()));
	let away = RwSignal::new(Some("Chelsea".to_string()));
	let loading = RwSignal::new(false);
	let outcome = RwSignal::new(None::<Outcome>);
	let message = RwSignal::new(None::<String>);
	let show_raw = RwSignal::new(false);
	let show_regression = RwSignal::new(false);
	let show_classification = RwSignal::new(false);
	let latest = Latest::new();

	let predict = move || {
		let h = home.get_untracked().unwrap_or_default();
		let a = away.get_untracked().unwrap_or_default();
		let req = match teams.with_value(|t| PredictionRequest::new(&h, &a, t)) {
			Ok(req) => req,
			Err(e) => {
				message.set(Some(e.user_message()));
				return;
			}
		};

		loading.set(true);
		message.set(None);
		outcome.set(None);
		let ticket = latest.begin();
		let client = api.get_value();
		spawn_local(async move {
			let result = client.predict(&req).await;
			if !latest.is_current(ticket) {
				return;
			}
			match result {
				Ok(prediction) => {
					info!(
						"football-intel: predicted {} v {}: {}",
						req.home_team, req.away_team, prediction.predicted_winner_blended
					);
					outcome.set(Some(Outcome {
						prediction,
						home: h,
						away: a,
					}));
				}
				Err(e) => {
					error!("football-intel: prediction failed: {e}");
					message.set(Some(e.user_message()));
				}
			}
			loading.set(false);
		});
	};

	let results = move || {
		outcome.get().map(|o| {
			let headline = teams.with_value(|t| outcome_headline(&o.prediction, t));
			let segments = teams.with_value(|t| {
				probability_segments(&o.prediction.blended_probabilities, &o.home, &o.away, t)
			});
			let raw = format!(
				"{} {} {}",
				o.home,
				format_raw_scoreline(&o.prediction.raw_scoreline),
				o.away
			);
			let regression = o.prediction.regression_probabilities;
			let classification = o.prediction.probabilities_original;
			let (h1, a1, h2, a2) = (o.home.clone(), o.away.clone(), o.home.clone(), o.away.clone());

			view! {
				<div class="prediction-results">
					<h4 class="gradient-text outcome-headline">{headline}</h4>
					<div class="outcome-bar">
						{segments
							.into_iter()
							.map(|segment| view! { <ProbabilitySegment segment=segment /> })
							.collect_view()}
					</div>
					<div class="expanders">
						<Expander label="Check out: Raw Scoreline" open=show_raw>
							<p class="raw-scoreline">{raw.clone()}</p>
						</Expander>
						<Expander label="Check out: Regression Probabilities" open=show_regression>
							{probability_list(regression, h1.clone(), a1.clone())}
						</Expander>
						<Expander label="Check out: Classification Probabilities" open=show_classification>
							{probability_list(classification, h2.clone(), a2.clone())}
						</Expander>
					</div>
				</div>
			}
		})
	};

	view! {
		<PageShell class="prediction-page">
			<section class="page-header">
				<h1 class="gradient-text">"Live Match Prediction"</h1>
				<p>"Select any two teams and let the model predict the outcome."</p>
				{move || message.get().map(|m| view! { <div class="form-error">{m}</div> })}
			</section>

			<section class="team-select">
				<div class="picker-pair">
					<TeamPicker
						title="HOME TEAM"
						selected=home
						sibling=Signal::derive(move || away.get())
						on_select=move |team: String| home.set(Some(team))
					/>
					<TeamPicker
						title="AWAY TEAM"
						selected=away
						sibling=Signal::derive(move || home.get())
						on_select=move |team: String| away.set(Some(team))
					/>
				</div>
				<div class="action-row">
					<button class="pill-button" disabled=move || loading.get() on:click=move |_| predict()>
						{move || if loading.get() { "CALCULATING!" } else { "START PREDICTION" }}
					</button>
				</div>
				{results}
			</section>
		</PageShell>
	}
}
