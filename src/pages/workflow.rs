use leptos::prelude::*;

use super::PageShell;

#[component]
fn PipelineCard(
	num: &'static str,
	title: &'static str,
	#[prop(optional)] full: bool,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="pipeline-card" class:full=full>
			<span class="pipeline-num">{num}</span>
			<h3>{title}</h3>
			<div class="pipeline-body">{children()}</div>
		</div>
	}
}

#[component]
fn SourceCard(name: &'static str, description: &'static str, href: &'static str) -> impl IntoView {
	view! {
		<a class="source-card" href=href target="_blank" rel="noopener noreferrer">
			<h3>{name} " ↗"</h3>
			<p>{description}</p>
		</a>
	}
}

/// How the prediction pipeline is built, and where its data comes from.
#[component]
pub fn WorkflowPage() -> impl IntoView {
	view! {
		<PageShell class="workflow-page">
			<section class="page-header">
				<h1 class="gradient-text">"How It Works"</h1>
				<p>
					"Predictions come from a dual-model system trained on Premier League data from the 2024 "
					"and 2025 seasons. Classification probabilities are blended with regression-based "
					"scoreline estimates using weights computed from team quality, match context and "
					"competitive balance."
				</p>
				<p>
					"Each match is an independent data point enriched with over 150 engineered features "
					"derived from a 15-match EWMA, capturing long-term form rather than short-term noise."
				</p>
			</section>

			<div class="pipeline-grid">
				<PipelineCard num="01" title="Data Collection & Normalization">
					<p>
						"Historical match and performance data is aggregated, cleaned and normalised into a "
						"unified timeline for consistent feature extraction."
					</p>
				</PipelineCard>
				<PipelineCard num="02" title="Feature Engineering">
					<p>
						"EWMA team trends, home and away modifiers, strength-of-schedule adjustments, "
						"ELO-based quality scaling and momentum indicators."
					</p>
				</PipelineCard>
				<PipelineCard num="03" title="Dual-Model Training Architecture" full=true>
					<p>"Complementary learning paths balance stability and responsiveness."</p>
					<p>
						"An XGBoost classifier estimates home win, draw and away win probabilities from "
						"long-term form and context."
					</p>
					<p>
						"Two Random Forest regressors predict expected goals for each side, enabling "
						"realistic scoreline simulation."
					</p>
				</PipelineCard>
				<PipelineCard num="04" title="Adaptive Prediction Fusion">
					<p>
						"Classifier and regressor outputs are blended with weights that adapt to ELO gaps "
						"and match context. Poisson scoreline simulation and temperature scaling sharpen "
						"the final probabilities."
					</p>
				</PipelineCard>
				<PipelineCard num="05" title="Model Philosophy">
					<p>
						"Long-term trends win over one-off results, so predictions reflect sustainable team "
						"quality."
					</p>
				</PipelineCard>
			</div>

			<section class="sources">
				<h2 class="gradient-text">"Data Sources & Attribution"</h2>
				<p>
					"All predictions are built on publicly available football data, cleaned and integrated "
					"into the modelling pipeline. Credit goes to the original providers."
				</p>
				<div class="source-grid">
					<SourceCard
						name="Football - Data"
						description="Historical match results and core fixture statistics for every Premier League fixture, the ground truth for training and evaluation."
						href="https://www.football-data.co.uk"
					/>
					<SourceCard
						name="FPL Core Insights (GitHub)"
						description="Player performance metrics and match insights combining the FPL API with other sources."
						href="https://github.com/olbauday/FPL-Core-Insights"
					/>
				</div>
			</section>
		</PageShell>
	}
}
