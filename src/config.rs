//! Site configuration embedded in the host page.
//!
//! The page carries a `<script id="site-config" type="application/json">`
//! element. Missing or malformed config falls back to the built-in defaults.

use leptos::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::api::{ApiClient, DEFAULT_BASE_URL};
use crate::teams::TeamDirectory;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Backend origin, without a trailing slash.
	pub api_base_url: String,
	pub teams: TeamDirectory,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			api_base_url: DEFAULT_BASE_URL.to_string(),
			teams: TeamDirectory::default(),
		}
	}
}

impl SiteConfig {
	/// Parse config JSON. Absent fields keep their defaults.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}

	pub fn client(&self) -> ApiClient {
		ApiClient::new(self.api_base_url.clone())
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Read the config from the page, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
	let Some(text) = config_text() else {
		info!("football-intel: no #{CONFIG_ELEMENT_ID} element, using defaults");
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"football-intel: config loaded, api at {}, {} teams",
				config.api_base_url,
				config.teams.teams.len()
			);
			config
		}
		Err(e) => {
			warn!("football-intel: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}

/// Shared services available to every page.
#[derive(Clone)]
pub struct AppContext {
	pub config: SiteConfig,
	pub api: ApiClient,
}

impl AppContext {
	pub fn new(config: SiteConfig) -> Self {
		let api = config.client();
		Self { config, api }
	}

	pub fn teams(&self) -> &TeamDirectory {
		&self.config.teams
	}
}

/// App services from context, or defaults outside the app root.
pub fn use_app() -> AppContext {
	use_context::<AppContext>().unwrap_or_else(|| AppContext::new(SiteConfig::default()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_all_defaults() {
		assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
	}

	#[test]
	fn base_url_override_keeps_team_table() {
		let cfg = SiteConfig::from_json(r#"{"api_base_url": "https://api.example.test"}"#).unwrap();
		assert_eq!(cfg.api_base_url, "https://api.example.test");
		assert_eq!(cfg.teams.teams.len(), 23);
		assert_eq!(cfg.client().base_url(), "https://api.example.test");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteConfig::from_json("{api_base_url:").is_err());
	}
}
