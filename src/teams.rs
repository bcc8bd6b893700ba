//! Team names, dataset aliases and club assets.
//!
//! The API names clubs the way the match dataset does ("Man City",
//! "Nott'm Forest"), while pages show full display names. [`TeamDirectory`]
//! is the single table mapping between the two and resolving crest, stadium
//! and colour assets. It can be replaced wholesale through the site config.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Static assets for one club, as served from the site root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubAssets {
	/// Key the club profile endpoint resolves.
	pub profile_key: String,
	/// Stadium photo stem under `/assets/stadiums/`.
	pub stadium: String,
}

/// Display names, dataset aliases and per-club assets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDirectory {
	/// Ordered display names offered by the pickers.
	pub teams: Vec<String>,
	/// Display name to dataset name. Absent entries use the display name.
	pub aliases: BTreeMap<String, String>,
	pub crest_overrides: BTreeMap<String, String>,
	pub clubs: BTreeMap<String, ClubAssets>,
	/// Bar colour per display name.
	pub colors: BTreeMap<String, String>,
	/// Clubs whose colour needs dark text on top of it.
	pub dark_text: BTreeSet<String>,
	/// Team spellings found in player rows, mapped to dataset names.
	pub player_aliases: BTreeMap<String, String>,
}

const TEAMS: [&str; 23] = [
	"Arsenal",
	"Aston Villa",
	"Bournemouth",
	"Brentford",
	"Brighton & Hove Albion",
	"Burnley",
	"Chelsea",
	"Crystal Palace",
	"Everton",
	"Fulham",
	"Ipswich Town",
	"Leeds United",
	"Leicester City",
	"Liverpool",
	"Manchester City",
	"Manchester United",
	"Newcastle United",
	"Nottingham Forest",
	"Southampton",
	"Sunderland",
	"Tottenham Hotspur",
	"West Ham",
	"Wolverhampton Wanderers",
];

const ALIASES: [(&str, &str); 10] = [
	("Brighton & Hove Albion", "Brighton"),
	("Ipswich Town", "Ipswich"),
	("Leeds United", "Leeds"),
	("Leicester City", "Leicester"),
	("Manchester City", "Man City"),
	("Manchester United", "Man United"),
	("Newcastle United", "Newcastle"),
	("Nottingham Forest", "Nott'm Forest"),
	("Tottenham Hotspur", "Tottenham"),
	("Wolverhampton Wanderers", "Wolves"),
];

const CREST_OVERRIDES: [(&str, &str); 3] = [
	("Liverpool", "/crests/liverpoolcrest.png"),
	("Tottenham Hotspur", "/crests/tottenhamcrest.png"),
	("Brighton & Hove Albion", "/crests/brightoncrest.png"),
];

// (display, profile and stadium key)
const CLUBS: [(&str, &str); 23] = [
	("Arsenal", "arsenal"),
	("Aston Villa", "astonvilla"),
	("Bournemouth", "bournemouth"),
	("Brentford", "brentford"),
	("Brighton & Hove Albion", "brightonhovealbion"),
	("Burnley", "burnley"),
	("Chelsea", "chelsea"),
	("Crystal Palace", "crystalpalace"),
	("Everton", "everton"),
	("Fulham", "fulham"),
	("Ipswich Town", "ipswichtown"),
	("Leeds United", "leedsunited"),
	("Leicester City", "leicestercity"),
	("Liverpool", "liverpool"),
	("Manchester City", "manchestercity"),
	("Manchester United", "manchesterunited"),
	("Newcastle United", "newcastleunited"),
	("Nottingham Forest", "nottinghamforest"),
	("Southampton", "southampton"),
	("Sunderland", "sunderland"),
	("Tottenham Hotspur", "tottenhamhotspur"),
	("West Ham", "westham"),
	("Wolverhampton Wanderers", "wolverhamptonwanderers"),
];

const COLORS: [(&str, &str); 23] = [
	("Arsenal", "#EF0107"),
	("Aston Villa", "#670E36"),
	("Bournemouth", "#DA291C"),
	("Brentford", "#D20000"),
	("Brighton & Hove Albion", "#0057B8"),
	("Burnley", "#6b1d44"),
	("Chelsea", "#0c478b"),
	("Crystal Palace", "#143774"),
	("Everton", "#043fb5"),
	("Fulham", "#000000"),
	("Ipswich Town", "#005DAC"),
	("Leeds United", "#f5cb26"),
	("Leicester City", "#1453d2"),
	("Liverpool", "#e10b0b"),
	("Manchester City", "#6CABDD"),
	("Manchester United", "#e92f00"),
	("Newcastle United", "#241F20"),
	("Nottingham Forest", "#DD0000"),
	("Southampton", "#870e13"),
	("Sunderland", "#d44038"),
	("Tottenham Hotspur", "#132257"),
	("West Ham", "#692031"),
	("Wolverhampton Wanderers", "#d1990e"),
];

const DARK_TEXT: [&str; 3] = ["Leeds United", "Wolverhampton Wanderers", "Bournemouth"];

const PLAYER_ALIASES: [(&str, &str); 6] = [
	("Spurs", "Tottenham"),
	("Tottenham Hotspur", "Tottenham"),
	("Tottenham", "Tottenham"),
	("Man Utd", "Man United"),
	("Man United", "Man United"),
	("Wolves", "Wolves"),
];

/// Colour used for teams missing from the colour table.
pub const FALLBACK_COLOR: &str = "#444444";

fn owned_pairs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

impl Default for TeamDirectory {
	fn default() -> Self {
		let clubs = CLUBS
			.iter()
			.map(|&(name, key)| {
				let assets = ClubAssets {
					profile_key: key.to_string(),
					stadium: key.to_string(),
				};
				(name.to_string(), assets)
			})
			.collect();

		Self {
			teams: TEAMS.iter().map(|t| t.to_string()).collect(),
			aliases: owned_pairs(&ALIASES),
			crest_overrides: owned_pairs(&CREST_OVERRIDES),
			clubs,
			colors: owned_pairs(&COLORS),
			dark_text: DARK_TEXT.iter().map(|t| t.to_string()).collect(),
			player_aliases: owned_pairs(&PLAYER_ALIASES),
		}
	}
}

impl TeamDirectory {
	/// Name the API expects for a display name.
	pub fn dataset_name<'a>(&'a self, display: &'a str) -> &'a str {
		self.aliases.get(display).map_or(display, String::as_str)
	}

	/// Display name for a dataset name. Unknown names pass through.
	pub fn display_name<'a>(&'a self, dataset: &'a str) -> &'a str {
		self.aliases
			.iter()
			.find(|(_, v)| v.as_str() == dataset)
			.map_or(dataset, |(k, _)| k.as_str())
	}

	/// Crest image for a display name.
	pub fn crest_src(&self, display: &str) -> String {
		if let Some(path) = self.crest_overrides.get(display) {
			return path.clone();
		}
		format!("/crests/{}.svg", slugify(self.dataset_name(display)))
	}

	/// Crest for a club profile, `None` for clubs without assets.
	pub fn club_crest_src(&self, display: &str) -> Option<String> {
		self.clubs.contains_key(display).then(|| self.crest_src(display))
	}

	/// Key for `GET /api/v1/club`, `None` for clubs without a profile.
	pub fn profile_key(&self, display: &str) -> Option<&str> {
		self.clubs.get(display).map(|a| a.profile_key.as_str())
	}

	pub fn stadium_src(&self, display: &str) -> Option<String> {
		let assets = self.clubs.get(display)?;
		Some(format!("/assets/stadiums/{}.jpg", assets.stadium))
	}

	pub fn team_color(&self, display: &str) -> &str {
		self.colors.get(display).map_or(FALLBACK_COLOR, String::as_str)
	}

	/// Text colour readable on top of the team's colour.
	pub fn text_color_on(&self, display: &str) -> &'static str {
		if self.dark_text.contains(display) { "#000" } else { "#fff" }
	}

	/// Canonical dataset name for a team spelling found in player rows.
	pub fn normalize_player_team<'a>(&'a self, name: &'a str) -> &'a str {
		self.player_aliases.get(name).map_or(name, String::as_str)
	}

	pub fn contains(&self, display: &str) -> bool {
		self.teams.iter().any(|t| t == display)
	}

	/// Picker teams whose dataset name is absent from `dataset_names`.
	pub fn missing_from(&self, dataset_names: &[String]) -> Vec<&str> {
		self.teams
			.iter()
			.map(String::as_str)
			.filter(|t| !dataset_names.iter().any(|d| d == self.dataset_name(t)))
			.collect()
	}
}

/// File-name stem for a team name: lowercase, apostrophes dropped, `&` spelled
/// out, other runs of non-alphanumerics collapsed to `_`.
pub fn slugify(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	let mut gap = false;
	for ch in name.to_lowercase().chars() {
		match ch {
			'\'' | '\u{2019}' => {}
			'&' => {
				if gap && !out.is_empty() {
					out.push('_');
				}
				gap = false;
				out.push_str("and");
			}
			c if c.is_ascii_alphanumeric() => {
				if gap && !out.is_empty() {
					out.push('_');
				}
				gap = false;
				out.push(c);
			}
			_ => gap = true,
		}
	}
	out
}
