use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::error::{ApiError, Result, error_detail};
use super::types::{
	BasicStats, ClubProfile, MatchSummary, Matchday, PlayerRecord, Prediction, PredictionRequest,
	Season,
};
use crate::teams::TeamDirectory;

/// Default backend address used when the site config does not name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5005";

/// Body of the health endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Health {
	pub message: String,
}

/// Thin async client over the prediction and statistics endpoints.
///
/// Calls are independent: no retry, caching or deduplication. Callers that
/// can race (e.g. two match selections in flight) discard stale results
/// themselves.
#[derive(Clone, Debug)]
pub struct ApiClient {
	base_url: String,
	http: reqwest::Client,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL)
	}
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self {
			base_url,
			http: reqwest::Client::new(),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url(&self, path: &str) -> Result<reqwest::Url> {
		let raw = format!("{}{}", self.base_url, path);
		reqwest::Url::parse(&raw).map_err(|e| ApiError::BaseUrl(format!("{raw}: {e}")))
	}

	async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
		let url = self.url(path)?;
		debug!("football-intel: GET {url} {query:?}");
		let resp = self.http.get(url).query(query).send().await?;
		let status = resp.status().as_u16();
		let body = resp.text().await?;
		decode(status, &body)
	}

	/// `GET /`: reachability check.
	pub async fn health(&self) -> Result<Health> {
		self.get("/", &[]).await
	}

	/// `GET /api/v1/teams`: dataset names the model knows.
	pub async fn teams(&self) -> Result<Vec<String>> {
		self.get("/api/v1/teams", &[]).await
	}

	/// Fixtures for one matchday. A matchday without data is an empty list.
	pub async fn matches(&self, season: Season, gameweek: Matchday) -> Result<Vec<MatchSummary>> {
		let query = [
			("season", season.0.to_string()),
			("gameweek", gameweek.0.to_string()),
		];
		let rows = not_found_as_empty(self.get("/api/v1/stats/matches", &query).await)?;
		if rows.is_empty() {
			info!("football-intel: no matches for {season} {gameweek}");
		}
		Ok(rows)
	}

	/// Match statistics row, keyed by dataset team names.
	pub async fn basic_stats(
		&self,
		season: Season,
		gameweek: Matchday,
		home: &str,
		away: &str,
	) -> Result<BasicStats> {
		self.get("/api/v1/stats/match/basic", &match_query(season, gameweek, home, away))
			.await
	}

	/// Player lines for both sides of one match.
	pub async fn players(
		&self,
		season: Season,
		gameweek: Matchday,
		home: &str,
		away: &str,
	) -> Result<Vec<PlayerRecord>> {
		self.get("/api/v1/stats/players", &match_query(season, gameweek, home, away))
			.await
	}

	/// `POST /api/v1/predict`.
	pub async fn predict(&self, req: &PredictionRequest) -> Result<Prediction> {
		let url = self.url("/api/v1/predict")?;
		debug!("football-intel: POST {url} {req:?}");
		let resp = self.http.post(url).json(req).send().await?;
		let status = resp.status().as_u16();
		let body = resp.text().await?;
		decode(status, &body)
	}

	/// Club profile, looked up by [`TeamDirectory::profile_key`].
	pub async fn club(&self, name: &str) -> Result<ClubProfile> {
		self.get("/api/v1/club", &[("club", name.to_string())]).await
	}

	/// Log whether the backend answers and which picker teams it does not know.
	/// Failures are logged only; pages report their own errors.
	pub async fn check_backend(&self, teams: &TeamDirectory) {
		match self.health().await {
			Ok(health) => {
				info!("football-intel: backend at {}: {}", self.base_url, health.message)
			}
			Err(e) => {
				warn!("football-intel: backend at {} unreachable: {e}", self.base_url);
				return;
			}
		}
		match self.teams().await {
			Ok(known) => {
				let missing = teams.missing_from(&known);
				if !missing.is_empty() {
					warn!("football-intel: backend has no data for {}", missing.join(", "));
				}
			}
			Err(e) => warn!("football-intel: team list unavailable: {e}"),
		}
	}
}

/// The matches endpoint answers 404 for a matchday without fixtures.
pub(crate) fn not_found_as_empty<T>(result: Result<Vec<T>>) -> Result<Vec<T>> {
	match result {
		Err(e) if e.is_not_found() => Ok(Vec::new()),
		other => other,
	}
}

fn match_query(
	season: Season,
	gameweek: Matchday,
	home: &str,
	away: &str,
) -> [(&'static str, String); 4] {
	[
		("season", season.0.to_string()),
		("gameweek", gameweek.0.to_string()),
		("home", home.to_string()),
		("away", away.to_string()),
	]
}

/// Turn a status code and body into a typed result.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
	if !(200..300).contains(&status) {
		return Err(ApiError::Status {
			status,
			detail: error_detail(body),
		});
	}
	Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_is_normalised() {
		let client = ApiClient::new("http://api.example.test/");
		assert_eq!(client.base_url(), "http://api.example.test");
		assert_eq!(
			client.url("/api/v1/teams").unwrap().as_str(),
			"http://api.example.test/api/v1/teams"
		);
		assert!(matches!(
			ApiClient::new("not a url").url("/"),
			Err(ApiError::BaseUrl(_))
		));
	}

	#[test]
	fn non_success_status_carries_detail() {
		let err =
			decode::<Vec<MatchSummary>>(404, r#"{"detail": "No matches found"}"#).unwrap_err();
		assert!(err.is_not_found());
		assert_eq!(err.user_message(), "No matches found");
	}

	#[test]
	fn success_body_decodes() {
		let teams: Vec<String> = decode(200, r#"["Arsenal", "Man City"]"#).unwrap();
		assert_eq!(teams, ["Arsenal", "Man City"]);
		assert!(matches!(
			decode::<Vec<String>>(200, "{"),
			Err(ApiError::Parse(_))
		));
	}

	#[test]
	fn missing_matchday_is_an_empty_listing() {
		let missing = decode::<Vec<MatchSummary>>(404, r#"{"detail": "No matches found"}"#);
		assert!(not_found_as_empty(missing).unwrap().is_empty());

		let down = decode::<Vec<MatchSummary>>(500, r#"{"detail": "boom"}"#);
		assert!(matches!(
			not_found_as_empty(down),
			Err(ApiError::Status { status: 500, .. })
		));

		let rows = decode::<Vec<MatchSummary>>(200, "[]");
		assert!(not_found_as_empty(rows).unwrap().is_empty());
	}

	#[test]
	fn health_body_decodes() {
		let health: Health = decode(200, r#"{"message": "API is running"}"#).unwrap();
		assert_eq!(health.message, "API is running");
	}

	#[test]
	fn match_query_uses_numbers() {
		let q = match_query(Season(2024), Matchday(3), "Leeds", "Man City");
		assert_eq!(q[0], ("season", "2024".to_string()));
		assert_eq!(q[1], ("gameweek", "3".to_string()));
		assert_eq!(q[3].1, "Man City");
	}
}
