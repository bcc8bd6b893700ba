//! Searchable dropdown over any displayable item type.

use std::fmt::Display;

use leptos::html::Div;
use leptos::prelude::*;

use super::state::PickerState;
use crate::components::dismiss::use_outside_dismiss;

/// Dropdown with a search box. Selecting an item calls `on_select` once and
/// closes the list.
#[component]
pub fn ListPicker<T>(
	#[prop(into)] title: String,
	#[prop(into)] items: Signal<Vec<T>>,
	#[prop(into)] selected: Signal<Option<T>>,
	/// Keeps the list closed, e.g. until an upstream choice is made.
	#[prop(into, optional)]
	disabled: MaybeProp<bool>,
	#[prop(into, default = "Select from List".to_string())] placeholder: String,
	#[prop(into)] on_select: Callback<T>,
) -> impl IntoView
where
	T: Clone + PartialEq + Display + Send + Sync + 'static,
{
	let state = RwSignal::new(PickerState::new(items.get_untracked()));
	let wrapper = NodeRef::<Div>::new();

	// A new item list starts a fresh picker.
	Effect::new(move |prev: Option<()>| {
		let next = items.get();
		if prev.is_some() {
			state.set(PickerState::new(next));
		}
	});

	let is_disabled = move || disabled.get().unwrap_or(false);
	let open = Signal::derive(move || state.with(|s| s.is_open()) && !is_disabled());
	use_outside_dismiss(wrapper, open, move || state.update(|s| s.dismiss()));

	let pick = move |item: T| {
		let mut picked = None;
		state.update(|s| picked = s.select(&item, None));
		if let Some(item) = picked {
			on_select.run(item);
		}
	};

	view! {
		<div node_ref=wrapper class="picker list-picker">
			<h3 class="picker-title">{title}</h3>
			<button
				class="picker-trigger"
				class:disabled=is_disabled
				on:click=move |_| {
					if !is_disabled() {
						state.update(|s| s.toggle());
					}
				}
			>
				{move || selected.get().map_or_else(|| placeholder.clone(), |s| s.to_string())}
				" ▼"
			</button>
			<Show when=move || open.get()>
				<div class="picker-dropdown">
					<input
						class="picker-search"
						placeholder="Search..."
						prop:value=move || state.with(|s| s.search().to_string())
						on:input=move |ev| state.update(|s| s.set_search(event_target_value(&ev)))
					/>
					<div class="picker-list">
						{move || {
							state
								.with(|s| s.entries(None))
								.into_iter()
								.map(|entry| {
									let item = entry.item.clone();
									view! {
										<button class="picker-item" on:click=move |_| pick(item.clone())>
											{entry.label}
										</button>
									}
								})
								.collect_view()
						}}
					</div>
				</div>
			</Show>
		</div>
	}
}
