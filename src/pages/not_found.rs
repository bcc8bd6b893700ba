use leptos::prelude::*;
use log::warn;

use super::PageShell;
use crate::router::{Route, use_router};

#[component]
pub fn NotFoundPage() -> impl IntoView {
	let router = use_router();
	if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
		warn!("football-intel: no route for {path}");
	}

	view! {
		<PageShell class="not-found-page">
			<section class="page-header">
				<h1 class="gradient-text">"404"</h1>
				<p>"This page went out of play."</p>
				<button class="ghost-button" on:click=move |_| router.navigate(Route::Home)>
					"Back to Home"
				</button>
			</section>
		</PageShell>
	}
}
