//! Fixed top bar and page footer.

use leptos::prelude::*;

use crate::router::{Route, RouterContext, Section, StatsQuery, scroll_to, use_router};

/// Where a navigation link leads.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
	Section(Section),
	Page(Route),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
	pub name: &'static str,
	pub target: LinkTarget,
}

/// Links shown in the top bar, in order.
pub fn nav_links() -> Vec<NavLink> {
	vec![
		NavLink {
			name: "Home",
			target: LinkTarget::Section(Section::Home),
		},
		NavLink {
			name: "About",
			target: LinkTarget::Section(Section::About),
		},
		NavLink {
			name: "Workflow",
			target: LinkTarget::Page(Route::Workflow),
		},
		NavLink {
			name: "Prediction",
			target: LinkTarget::Page(Route::Prediction),
		},
		NavLink {
			name: "Statistics",
			target: LinkTarget::Page(Route::Statistics(StatsQuery::default())),
		},
		NavLink {
			name: "Clubs",
			target: LinkTarget::Page(Route::Clubs),
		},
	]
}

fn follow(router: RouterContext, target: &LinkTarget) {
	match target {
		LinkTarget::Section(section) => router.navigate_to_section(*section),
		LinkTarget::Page(route) => router.navigate(route.clone()),
	}
}

#[component]
pub fn Navigation() -> impl IntoView {
	let router = use_router();
	let menu_open = RwSignal::new(false);
	let on_home = move || router.route().with(|r| *r == Route::Home);

	let link = move |l: NavLink, class: &'static str| {
		let NavLink { name, target } = l;
		let active = {
			let target = target.clone();
			move || match &target {
				LinkTarget::Page(route) => router.route().with(|r| r.same_page(route)),
				LinkTarget::Section(_) => false,
			}
		};
		view! {
			<button
				class=class
				class:active=active
				on:click=move |_| {
					menu_open.set(false);
					follow(router, &target);
				}
			>
				{name}
			</button>
		}
	};

	view! {
		<nav class="site-nav" class:in-hero=on_home>
			<div class="nav-inner">
				<button
					class="nav-logo"
					aria-label="Home"
					on:click=move |_| {
						menu_open.set(false);
						router.navigate_to_section(Section::Home);
					}
				>
					<img src="/assets/logo.png" alt="" />
				</button>
				<div class="nav-links">
					{nav_links().into_iter().map(|l| link(l, "nav-link")).collect_view()}
				</div>
				<button
					class="nav-menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| menu_open.update(|o| *o = !*o)
				>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<div class="nav-mobile">
					{nav_links().into_iter().map(|l| link(l, "nav-mobile-link")).collect_view()}
				</div>
			</Show>
		</nav>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	let router = use_router();
	view! {
		<footer class="site-footer">
			<div class="footer-columns">
				<div class="footer-brand">
					<h3>"Football Intel"</h3>
					<p>"Every minute. Every match. Every goal, predicted."</p>
					<p class="footer-muted">"Powered by AI. Inspired by the beautiful game."</p>
				</div>
				<div class="footer-links">
					<h4>"Quick Links"</h4>
					<ul>
						{nav_links()
							.into_iter()
							.filter(|l| l.name != "Workflow")
							.map(|NavLink { name, target }| {
								view! {
									<li>
										<button on:click=move |_| follow(router, &target)>{name}</button>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
				<div class="footer-top">
					<button class="footer-back-to-top" on:click=move |_| scroll_to(0.0, true)>
						"Back to top ↑"
					</button>
				</div>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn links_cover_every_page() {
		let links = nav_links();
		assert_eq!(links[0].target, LinkTarget::Section(Section::Home));
		for page in [Route::Workflow, Route::Prediction, Route::Clubs] {
			assert!(links.iter().any(|l| l.target == LinkTarget::Page(page.clone())));
		}
	}
}
