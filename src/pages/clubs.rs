use leptos::html::Section;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use super::{Latest, Load, PageShell};
use crate::api::{ClubProfile, Rivalry, Trophy, moment_year, thousands};
use crate::components::picker::TeamPicker;
use crate::config::use_app;
use crate::router::scroll_to_element;

/// Words of "About the Club" shown before "See more".
pub const ABOUT_WORD_LIMIT: usize = 100;

const STADIUM_SCROLL_OFFSET: f64 = 48.0;

/// First `limit` space-separated words followed by `...`, or `None` when the
/// text is short enough to show whole.
pub(crate) fn about_preview(text: &str, limit: usize) -> Option<String> {
	let words: Vec<&str> = text.split(' ').collect();
	(words.len() > limit).then(|| format!("{}...", words[..limit].join(" ")))
}

#[component]
fn ExpandableText(text: String, #[prop(default = ABOUT_WORD_LIMIT)] limit: usize) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let preview = about_preview(&text, limit);
	let truncated = preview.is_some();
	let body = move || match (&preview, expanded.get()) {
		(Some(short), false) => short.clone(),
		_ => text.clone(),
	};

	view! {
		<div class="expandable-text">
			<p>{body}</p>
			<Show when=move || truncated>
				<button class="text-toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
					{move || if expanded.get() { "Show less" } else { "See more" }}
				</button>
			</Show>
		</div>
	}
}

#[component]
fn RivalCrest(rivalry: Rivalry) -> impl IntoView {
	let app = use_app();
	let crest = app.teams().club_crest_src(&rivalry.club);
	let failed = RwSignal::new(false);
	let club = rivalry.club.clone();

	view! {
		<div class="rival">
			{move || match crest.clone().filter(|_| !failed.get()) {
				Some(src) => view! {
					<img
						class="rival-crest"
						src=src
						alt=club.clone()
						on:error=move |_| failed.set(true)
					/>
				}
				.into_any(),
				None => view! { <div class="rival-crest fallback">"⚽"</div> }.into_any(),
			}}
			<span class="rival-club">{rivalry.club}</span>
			<span class="rival-name">{rivalry.name}</span>
			<p class="rival-notes">{rivalry.notes}</p>
		</div>
	}
}

fn trophy_card(trophy: Trophy) -> impl IntoView {
	view! {
		<div class="trophy-card">
			<span class="trophy-icon">"🏆"</span>
			<span class="trophy-count">{trophy.count}</span>
			{trophy.note.map(|note| view! { <span class="trophy-note">{note}</span> })}
			<p class="trophy-competition">{trophy.competition}</p>
		</div>
	}
}

fn profile_view(
	profile: ClubProfile,
	stadium_src: Option<String>,
	stadium_ref: NodeRef<Section>,
) -> impl IntoView {
	let scroll = move || {
		if let Some(el) = stadium_ref.get_untracked() {
			scroll_to_element(&el, STADIUM_SCROLL_OFFSET);
		}
	};
	let stadium_name = profile.stadium.name.clone().unwrap_or_default();
	let capacity = profile
		.stadium
		.capacity
		.map(|c| format!("Capacity {}", thousands(c)));
	let facts = profile.facts();
	let trophies = profile.trophy_cabinet();

	view! {
		<section node_ref=stadium_ref class="stadium">
			{stadium_src
				.map(|src| {
					view! {
						<img
							class="stadium-photo"
							src=src
							alt=stadium_name.clone()
							on:load=move |_| scroll()
							on:error=move |_| scroll()
						/>
					}
				})}
			<div class="stadium-caption">
				<h2 class="club-name">{profile.club_name.clone()}</h2>
				<p class="stadium-name">{stadium_name.clone()}</p>
				{capacity.map(|c| view! { <p class="stadium-capacity">{c}</p> })}
			</div>
		</section>

		<section class="club-facts">
			{facts
				.into_iter()
				.map(|(label, value)| {
					view! {
						<div class="fact-card">
							<span class="fact-label">{label}</span>
							<span class="fact-value">{value}</span>
						</div>
					}
				})
				.collect_view()}
		</section>

		<section class="club-about">
			<h3 class="gradient-text">"About the Club"</h3>
			<ExpandableText text=profile.about />
		</section>

		<section class="club-moments">
			<h3 class="gradient-text">"Iconic Moments"</h3>
			{profile
				.iconic_moments
				.into_iter()
				.map(|moment| {
					let year = moment_year(&moment);
					view! {
						<div class="moment">
							<span class="moment-year">{year}</span>
							<p class="moment-text">{moment}</p>
						</div>
					}
				})
				.collect_view()}
		</section>

		<section class="club-trophies">
			<h3 class="gradient-text">"Silverware Cabinet"</h3>
			<div class="trophy-grid">{trophies.into_iter().map(trophy_card).collect_view()}</div>
		</section>

		<section class="club-rivals">
			<h3 class="gradient-text">"Major Rivalries"</h3>
			<div class="rival-grid">
				{profile
					.rivalries
					.into_iter()
					.map(|rivalry| view! { <RivalCrest rivalry=rivalry /> })
					.collect_view()}
			</div>
		</section>
	}
}

/// Pick a club and explore its profile.
#[component]
pub fn ClubsPage() -> impl IntoView {
	let app = use_app();
	let teams = StoredValue::new(app.config.teams.clone());
	let api = StoredValue::new_local(app.api.clone());

	let club = RwSignal::new(None::<String>);
	let profile = RwSignal::new(Load::<(String, ClubProfile)>::Idle);
	let latest = Latest::new();
	let stadium_ref = NodeRef::<Section>::new();

	let choose = move |name: String| {
		if club.get_untracked().as_deref() == Some(name.as_str()) {
			return;
		}
		latest.invalidate();
		club.set(Some(name));
		profile.set(Load::Idle);
	};

	let enter = move || {
		let Some(name) = club.get_untracked() else {
			return;
		};
		let Some(key) = teams.with_value(|t| t.profile_key(&name).map(String::from)) else {
			warn!("football-intel: no club profile for {name}");
			profile.set(Load::Failed);
			return;
		};
		profile.set(Load::Loading);
		let ticket = latest.begin();
		let client = api.get_value();
		spawn_local(async move {
			let result = client.club(&key).await;
			if !latest.is_current(ticket) {
				return;
			}
			match result {
				Ok(data) => {
					info!("football-intel: loaded club profile {key}");
					profile.set(Load::Ready((name, data)));
				}
				Err(e) => {
					error!("football-intel: failed to load club {key}: {e}");
					profile.set(Load::Failed);
				}
			}
		});
	};

	let content = move || match profile.get() {
		Load::Idle => ().into_any(),
		Load::Loading => view! { <p class="status-text">"Loading club…"</p> }.into_any(),
		Load::Failed => {
			view! { <p class="status-text">"No data available for this club."</p> }.into_any()
		}
		Load::Ready((name, data)) => {
			let stadium = teams.with_value(|t| t.stadium_src(&name));
			profile_view(data, stadium, stadium_ref).into_any()
		}
	};

	view! {
		<PageShell class="clubs-page">
			<section class="page-header">
				<h1 class="gradient-text">"Hall of Clubs"</h1>
				<p>"Explore Premier League clubs in depth: history, identity, achievements and legacy."</p>
			</section>

			<section class="club-select">
				<TeamPicker title="SELECT CLUB" selected=club on_select=choose />
				<div class="action-row">
					<button
						class="outline-button"
						disabled=move || club.with(Option::is_none) || profile.with(Load::is_loading)
						on:click=move |_| enter()
					>
						"Enter Club"
					</button>
				</div>
			</section>

			{content}
		</PageShell>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_text_is_shown_whole() {
		assert_eq!(about_preview("Founded in 1886 in Woolwich.", ABOUT_WORD_LIMIT), None);
		assert_eq!(about_preview("one two three", 3), None);
	}

	#[test]
	fn long_text_is_cut_at_the_word_limit() {
		assert_eq!(
			about_preview("one two three four", 3).as_deref(),
			Some("one two three...")
		);
	}

	#[test]
	fn empty_text_has_no_preview() {
		assert_eq!(about_preview("", ABOUT_WORD_LIMIT), None);
	}
}
