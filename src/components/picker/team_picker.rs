//! Crest carousel with a searchable team list.

use leptos::html::Div;
use leptos::prelude::*;

use super::state::PickerState;
use crate::components::dismiss::use_outside_dismiss;
use crate::config::use_app;

/// Team selector showing one crest at a time.
///
/// The team chosen in the `sibling` picker is greyed out and can be neither
/// clicked nor stepped onto. When nothing is selected yet the first
/// selectable team is chosen on mount.
#[component]
pub fn TeamPicker(
	#[prop(into)] title: String,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into, optional)] sibling: MaybeProp<String>,
	#[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
	let app = use_app();
	let teams = StoredValue::new(app.config.teams.clone());
	let state = RwSignal::new(PickerState::new(app.teams().teams.clone()));
	let wrapper = NodeRef::<Div>::new();

	if selected.get_untracked().is_none() {
		let other = sibling.get_untracked();
		let first = state.with_untracked(|s| {
			s.items()
				.iter()
				.find(|t| other.as_ref() != Some(*t))
				.cloned()
		});
		if let Some(team) = first {
			on_select.run(team);
		}
	}

	Effect::new(move |_| {
		let current = selected.get();
		state.update(|s| s.sync_selected(current.as_ref()));
	});

	let open = Signal::derive(move || state.with(|s| s.is_open()));
	use_outside_dismiss(wrapper, open, move || state.update(|s| s.dismiss()));

	let step = move |delta: isize| {
		let other = sibling.get_untracked();
		let mut next = None;
		state.update(|s| next = s.step(delta, other.as_ref()));
		if let Some(team) = next {
			on_select.run(team);
		}
	};

	let pick = move |team: String| {
		let other = sibling.get_untracked();
		let mut picked = None;
		state.update(|s| picked = s.select(&team, other.as_ref()));
		if let Some(team) = picked {
			on_select.run(team);
		}
	};

	let visible = move || state.with(|s| s.visible().cloned()).unwrap_or_default();
	let visible_disabled = move || sibling.get().is_some_and(|o| o == visible());
	let crest = move || teams.with_value(|t| t.crest_src(&visible()));

	view! {
		<div node_ref=wrapper class="picker team-picker">
			<h3 class="picker-title">{title}</h3>
			<button class="picker-trigger" on:click=move |_| state.update(|s| s.toggle())>
				"Select from List ▼"
			</button>
			<Show when=move || open.get()>
				<div class="picker-dropdown">
					<input
						class="picker-search"
						placeholder="Search teams..."
						prop:value=move || state.with(|s| s.search().to_string())
						on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
					/>
					<div class="picker-list">
						{move || {
							let other = sibling.get();
							state
								.with(|s| s.entries(other.as_ref()))
								.into_iter()
								.map(|entry| {
									let team = entry.item.clone();
									view! {
										<button
											class="picker-item"
											class:disabled=entry.disabled
											disabled=entry.disabled
											on:click=move |_| pick(team.clone())
										>
											{entry.label}
										</button>
									}
								})
								.collect_view()
						}}
					</div>
				</div>
			</Show>
			<div class="carousel">
				<button class="carousel-step" aria-label="Previous team" on:click=move |_| step(-1)>
					"❮"
				</button>
				<div class="carousel-face">
					<button
						class="carousel-crest"
						class:disabled=visible_disabled
						disabled=visible_disabled
						on:click=move |_| pick(visible())
					>
						<img src=crest alt=visible />
					</button>
					<div class="carousel-name">{visible}</div>
				</div>
				<button class="carousel-step" aria-label="Next team" on:click=move |_| step(1)>
					"❯"
				</button>
			</div>
		</div>
	}
}
