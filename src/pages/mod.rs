//! Page shells and the data-loading helpers they share.

mod clubs;
mod home;
mod not_found;
mod players;
mod prediction;
pub mod request_seq;
mod statistics;
mod workflow;

use leptos::prelude::*;

use crate::components::navigation::{Footer, Navigation};
use crate::components::pitch_background::PitchBackground;

pub use clubs::ClubsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use players::{MatchPlayersPage, toggle_expanded};
pub use prediction::PredictionPage;
pub use request_seq::{Latest, RequestSeq, Ticket};
pub use statistics::StatisticsPage;
pub use workflow::WorkflowPage;

/// Progress of one remote load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
	#[default]
	Idle,
	Loading,
	Ready(T),
	Failed,
}

impl<T> Load<T> {
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	pub fn ready(&self) -> Option<&T> {
		match self {
			Self::Ready(v) => Some(v),
			_ => None,
		}
	}
}

/// Background, navigation bar and footer around a page body.
#[component]
pub fn PageShell(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
	view! {
		<div class=format!("page {class}")>
			<PitchBackground />
			<div class="gradient-overlay" aria-hidden="true"></div>
			<Navigation />
			<main class="page-content">{children()}</main>
			<Footer />
		</div>
	}
}
