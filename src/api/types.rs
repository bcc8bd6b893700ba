//! Wire types for the prediction and statistics API.
//!
//! The statistics endpoints serialise dataframe rows, so ids can arrive as
//! numbers or strings, counts as floats and missing values as `null`. The
//! deserialisers here normalise all of that at the boundary.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::{ApiError, Result};
use crate::teams::TeamDirectory;

fn id_string<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
	match Value::deserialize(de)? {
		Value::String(s) => Ok(s),
		Value::Number(n) => Ok(n.to_string()),
		other => Err(serde::de::Error::custom(format!("invalid id: {other}"))),
	}
}

/// Whole non-negative count, tolerating `2.0` and `null`.
fn lenient_count<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Option<u32>, D::Error> {
	let value = Option::<Value>::deserialize(de)?;
	Ok(value
		.as_ref()
		.and_then(Value::as_f64)
		.filter(|v| v.is_finite() && *v >= 0.0)
		.map(|v| v.round() as u32))
}

/// A Premier League season, named by the year it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
	/// Seasons the statistics endpoints have data for.
	pub const AVAILABLE: [Season; 2] = [Season(2024), Season(2025)];

	/// Last matchday with data. The current season is only partly played.
	pub fn max_matchday(self) -> u8 {
		if self.0 == 2025 { 21 } else { 38 }
	}

	pub fn matchdays(self) -> Vec<Matchday> {
		(1..=self.max_matchday()).map(Matchday).collect()
	}
}

impl fmt::Display for Season {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}–{}", self.0, self.0 + 1)
	}
}

/// Gameweek number within a season, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matchday(pub u8);

impl fmt::Display for Matchday {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Matchday {}", self.0)
	}
}

/// One fixture in a matchday listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
	#[serde(deserialize_with = "id_string")]
	pub match_id: String,
	/// Dataset name of the home side.
	#[serde(rename = "HomeTeam")]
	pub home_team: String,
	#[serde(rename = "AwayTeam")]
	pub away_team: String,
	#[serde(rename = "FTHG", default, deserialize_with = "lenient_count")]
	pub home_goals: Option<u32>,
	#[serde(rename = "FTAG", default, deserialize_with = "lenient_count")]
	pub away_goals: Option<u32>,
}

impl MatchSummary {
	/// Full-time score as shown in match cards, `"–"` while unknown.
	pub fn score_text(&self) -> String {
		score_text(self.home_goals, self.away_goals)
	}
}

fn score_text(home: Option<u32>, away: Option<u32>) -> String {
	match (home, away) {
		(Some(h), Some(a)) => format!("{h} – {a}"),
		_ => "–".to_string(),
	}
}

/// Flat statistic map for one match. Non-numeric values are kept as `None`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct BasicStats {
	values: BTreeMap<String, Option<f64>>,
}

impl From<BTreeMap<String, Value>> for BasicStats {
	fn from(raw: BTreeMap<String, Value>) -> Self {
		let values = raw.into_iter().map(|(k, v)| (k, v.as_f64())).collect();
		Self { values }
	}
}

impl BasicStats {
	pub fn get(&self, key: &str) -> Option<f64> {
		self.values.get(key).copied().flatten()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Full-time goals, when both are present.
	pub fn score(&self) -> Option<(u32, u32)> {
		let goals = |key| {
			self.get(key)
				.filter(|v| v.is_finite() && *v >= 0.0)
				.map(|v| v.round() as u32)
		};
		Some((goals("FTHG")?, goals("FTAG")?))
	}

	pub fn score_text(&self) -> String {
		let score = self.score();
		score_text(score.map(|s| s.0), score.map(|s| s.1))
	}
}

/// One player's line for a match.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlayerRecord {
	#[serde(deserialize_with = "id_string")]
	pub player_id: String,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub second_name: Option<String>,
	#[serde(default)]
	pub position: String,
	/// Team the player appeared for, in whatever spelling the dataset uses.
	#[serde(rename = "name", default)]
	pub team: String,
	#[serde(default, deserialize_with = "lenient_count")]
	pub goals: Option<u32>,
	#[serde(default, deserialize_with = "lenient_count")]
	pub assists: Option<u32>,
	/// Every other column, keyed by its dataset name.
	#[serde(flatten)]
	pub stats: BTreeMap<String, Value>,
}

impl PlayerRecord {
	pub fn full_name(&self) -> String {
		[self.first_name.as_deref(), self.second_name.as_deref()]
			.into_iter()
			.flatten()
			.filter(|s| !s.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}

	pub fn stat(&self, key: &str) -> Option<f64> {
		self.stats.get(key).and_then(Value::as_f64)
	}

	/// Whether this player appeared for `dataset_team`.
	pub fn plays_for(&self, dataset_team: &str, teams: &TeamDirectory) -> bool {
		teams.normalize_player_team(&self.team) == teams.normalize_player_team(dataset_team)
	}
}

/// Home/draw/away probabilities, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
	pub home_win: f64,
	pub draw: f64,
	pub away_win: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendingWeights {
	pub classification: f64,
	pub regression: f64,
}

/// Response of `POST /api/v1/predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
	pub home_team: String,
	pub away_team: String,
	pub scoreline: String,
	pub raw_scoreline: String,
	/// Dataset name of the winner, or `"Draw"`.
	pub predicted_winner_blended: String,
	pub blended_probabilities: OutcomeProbabilities,
	pub regression_probabilities: OutcomeProbabilities,
	pub probabilities_original: OutcomeProbabilities,
	#[serde(default)]
	pub predicted_winner_original: Option<String>,
	#[serde(default)]
	pub confidence_level_original: Option<String>,
	#[serde(default)]
	pub blending_weights: Option<BlendingWeights>,
}

impl Prediction {
	pub fn is_draw(&self) -> bool {
		self.predicted_winner_blended == "Draw"
	}
}

/// Validated body for `POST /api/v1/predict`, carrying dataset names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
	pub home_team: String,
	pub away_team: String,
}

impl PredictionRequest {
	/// Validate two display names and convert them to dataset names.
	pub fn new(home: &str, away: &str, teams: &TeamDirectory) -> Result<Self> {
		let (home, away) = (home.trim(), away.trim());
		if home.is_empty() || away.is_empty() {
			return Err(ApiError::Validation("Please select both teams".into()));
		}
		if home == away {
			return Err(ApiError::Validation("Teams must be different".into()));
		}
		if let Some(unknown) = [home, away].into_iter().find(|t| !teams.contains(t)) {
			return Err(ApiError::Validation(format!("Unknown team: {unknown}")));
		}
		Ok(Self {
			home_team: teams.dataset_name(home).to_string(),
			away_team: teams.dataset_name(away).to_string(),
		})
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
	#[serde(rename = "Name", default)]
	pub name: Option<String>,
	#[serde(rename = "Capacity", default, deserialize_with = "lenient_capacity")]
	pub capacity: Option<u64>,
}

/// Capacity published as `60704`, `60704.0` or `"60,704"`.
fn lenient_capacity<'de, D: Deserializer<'de>>(
	de: D,
) -> std::result::Result<Option<u64>, D::Error> {
	Ok(match Option::<Value>::deserialize(de)? {
		Some(Value::Number(n)) => n.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64),
		Some(Value::String(s)) => s.replace(',', "").trim().parse().ok(),
		_ => None,
	})
}

/// `60704` as `60,704`.
pub fn thousands(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rivalry {
	#[serde(rename = "Club")]
	pub club: String,
	#[serde(rename = "Rivalry Name", default)]
	pub name: String,
	#[serde(rename = "Notes", default)]
	pub notes: String,
}

/// Club profile as returned by `GET /api/v1/club`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubProfile {
	#[serde(rename = "Club Name", default)]
	pub club_name: String,
	#[serde(rename = "Full Official Name", default)]
	pub full_name: Option<String>,
	#[serde(rename = "Founded Year", default, deserialize_with = "opt_text")]
	pub founded: Option<String>,
	#[serde(rename = "Current Manager", default)]
	pub manager: Option<String>,
	#[serde(rename = "Location (City, Country)", default)]
	pub location: Option<String>,
	#[serde(rename = "Motto", default)]
	pub motto: Option<String>,
	#[serde(rename = "Nickname(s)", default)]
	pub nicknames: Vec<String>,
	#[serde(rename = "Home Stadium", default)]
	pub stadium: Stadium,
	#[serde(rename = "About the Club", default)]
	pub about: String,
	#[serde(rename = "Most Iconic Moments", default)]
	pub iconic_moments: Vec<String>,
	/// Header line followed by `Competition: count` lines.
	#[serde(rename = "Total Trophies Won", default)]
	pub trophies: String,
	#[serde(rename = "Major Rivalries", default)]
	pub rivalries: Vec<Rivalry>,
}

/// Text field that may be published as a number (e.g. a founding year).
fn opt_text<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Option<String>, D::Error> {
	Ok(match Option::<Value>::deserialize(de)? {
		Some(Value::String(s)) => Some(s),
		Some(Value::Number(n)) => Some(n.to_string()),
		_ => None,
	})
}

/// One cabinet entry parsed from the trophy summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trophy {
	pub competition: String,
	pub count: String,
	/// Bracketed note after the count, e.g. `(5 runners-up)`.
	pub note: Option<String>,
}

impl ClubProfile {
	/// Trophy lines after the header. Lines without a `:` are skipped.
	pub fn trophy_cabinet(&self) -> Vec<Trophy> {
		self.trophies
			.lines()
			.skip(1)
			.filter_map(|line| {
				let (competition, value) = line.split_once(':')?;
				let value = value.trim();
				let (count, note) = match value.find('(') {
					Some(i) if is_count(value[..i].trim()) => {
						(value[..i].trim(), Some(value[i..].trim().to_string()))
					}
					_ => (value, None),
				};
				Some(Trophy {
					competition: competition.trim().to_string(),
					count: count.to_string(),
					note,
				})
			})
			.collect()
	}

	/// Label/value pairs for the fact cards, skipping missing facts.
	pub fn facts(&self) -> Vec<(&'static str, String)> {
		let nicknames = (!self.nicknames.is_empty()).then(|| self.nicknames.join(", "));
		[
			("Full Name", self.full_name.clone()),
			("Founded", self.founded.clone()),
			("Manager", self.manager.clone()),
			("Location", self.location.clone()),
			("Motto", self.motto.clone()),
			("Nicknames", nicknames),
		]
		.into_iter()
		.filter_map(|(label, value)| Some((label, value.filter(|v| !v.is_empty())?)))
		.collect()
	}
}

fn is_count(s: &str) -> bool {
	!s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Year or season range mentioned in an iconic moment, `"—"` if none.
pub fn moment_year(moment: &str) -> String {
	let bytes = moment.as_bytes();
	let boundary = |i: usize| i >= bytes.len() || !bytes[i].is_ascii_alphanumeric();
	for start in 0..bytes.len().saturating_sub(3) {
		if start > 0 && !boundary(start - 1) {
			continue;
		}
		let year = &bytes[start..start + 4];
		if !year.iter().all(u8::is_ascii_digit) || !matches!(&year[..2], b"18" | b"19" | b"20") {
			continue;
		}
		let end = start + 4;
		// Optional "–YY" or "-YY" suffix.
		let rest = &moment[end..];
		for dash in ['–', '-'] {
			if let Some(tail) = rest.strip_prefix(dash) {
				let t = tail.as_bytes();
				let after = end + dash.len_utf8() + 2;
				if t.len() >= 2 && t[..2].iter().all(u8::is_ascii_digit) && boundary(after) {
					return moment[start..after].to_string();
				}
			}
		}
		if boundary(end) {
			return moment[start..end].to_string();
		}
	}
	"—".to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_validation_runs_before_any_call() {
		let dir = TeamDirectory::default();
		let err = PredictionRequest::new("", "Chelsea", &dir).unwrap_err();
		assert_eq!(err.to_string(), "Please select both teams");
		let err = PredictionRequest::new("Arsenal", "Arsenal", &dir).unwrap_err();
		assert_eq!(err.to_string(), "Teams must be different");
		let err = PredictionRequest::new("Arsenal", "Barnsley", &dir).unwrap_err();
		assert_eq!(err.to_string(), "Unknown team: Barnsley");

		let req = PredictionRequest::new("Manchester City", "Nottingham Forest", &dir).unwrap();
		assert_eq!(req.home_team, "Man City");
		assert_eq!(req.away_team, "Nott'm Forest");
	}

	#[test]
	fn match_rows_tolerate_dataframe_types() {
		let rows: Vec<MatchSummary> = serde_json::from_str(
			r#"[{"match_id": 1201, "HomeTeam": "Arsenal", "AwayTeam": "Wolves", "FTHG": 2.0, "FTAG": 0},
			    {"match_id": "x9", "HomeTeam": "Leeds", "AwayTeam": "Man City", "FTHG": null, "FTAG": 1}]"#,
		)
		.unwrap();
		assert_eq!(rows[0].match_id, "1201");
		assert_eq!(rows[0].score_text(), "2 – 0");
		assert_eq!(rows[1].home_goals, None);
		assert_eq!(rows[1].score_text(), "–");
	}

	#[test]
	fn basic_stats_keep_non_numeric_as_missing() {
		let stats: BasicStats = serde_json::from_str(
			r#"{"HS": 14, "home_possession": 61.4, "Referee": "M Oliver", "HR": null, "FTHG": 3, "FTAG": 1}"#,
		)
		.unwrap();
		assert_eq!(stats.get("HS"), Some(14.0));
		assert_eq!(stats.get("Referee"), None);
		assert_eq!(stats.get("HR"), None);
		assert_eq!(stats.get("absent"), None);
		assert_eq!(stats.score(), Some((3, 1)));
	}

	#[test]
	fn player_rows_flatten_extra_columns() {
		let p: PlayerRecord = serde_json::from_str(
			r#"{"player_id": 7, "first_name": "Bukayo", "second_name": "Saka", "position": "Forward",
			    "name": "Arsenal", "goals": 1, "assists": 2.0, "xg": 0.43, "touches": 58}"#,
		)
		.unwrap();
		assert_eq!(p.full_name(), "Bukayo Saka");
		assert_eq!(p.assists, Some(2));
		assert_eq!(p.stat("xg"), Some(0.43));
		assert_eq!(p.stat("clearances"), None);
		assert!(p.plays_for("Arsenal", &TeamDirectory::default()));
	}

	#[test]
	fn trophy_lines_split_count_and_note() {
		let club = ClubProfile {
			trophies: "Major honours\nLeague: 13 (5 runners-up)\nFA Cup: 14\nand more".into(),
			..Default::default()
		};
		let cabinet = club.trophy_cabinet();
		assert_eq!(cabinet.len(), 2);
		assert_eq!(cabinet[0].competition, "League");
		assert_eq!(cabinet[0].count, "13");
		assert_eq!(cabinet[0].note.as_deref(), Some("(5 runners-up)"));
		assert_eq!(cabinet[1].count, "14");
		assert_eq!(cabinet[1].note, None);
	}

	#[test]
	fn seasons_and_matchdays_display_for_pickers() {
		assert_eq!(Season(2024).to_string(), "2024–2025");
		assert_eq!(Season(2024).matchdays().len(), 38);
		assert_eq!(Season(2025).matchdays().last(), Some(&Matchday(21)));
		assert_eq!(Matchday(7).to_string(), "Matchday 7");
	}

	#[test]
	fn stadium_capacity_accepts_loose_numbers() {
		let s: Stadium =
			serde_json::from_str(r#"{"Name": "Emirates", "Capacity": "60,704"}"#).unwrap();
		assert_eq!(s.capacity, Some(60704));
		let s: Stadium = serde_json::from_str(r#"{"Capacity": 11307.0}"#).unwrap();
		assert_eq!(s.capacity, Some(11307));
		assert_eq!(thousands(60704), "60,704");
		assert_eq!(thousands(999), "999");
		assert_eq!(thousands(1_000_000), "1,000,000");
	}

	#[test]
	fn moment_years_are_extracted() {
		assert_eq!(moment_year("Won the league unbeaten in 2004."), "2004");
		assert_eq!(moment_year("The 1998–99 treble"), "1998–99");
		assert_eq!(moment_year("Promoted in 2022-23 season"), "2022-23");
		assert_eq!(moment_year("Scored 12045 goals"), "—");
		assert_eq!(moment_year("No date"), "—");
	}
}
