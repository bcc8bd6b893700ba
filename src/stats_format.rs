//! Display formatting for match, player and prediction numbers.
//!
//! Every formatter renders a missing or non-finite value as an en dash so a
//! gap in the dataset never shows up as `NaN` or `0`.

use crate::api::{OutcomeProbabilities, Prediction};
use crate::teams::TeamDirectory;

/// Placeholder for a missing value.
pub const MISSING: &str = "–";

/// How a statistic is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatFormat {
	Integer,
	Decimals(usize),
	/// Ratio in `[0, 1]` shown as a whole percentage.
	Percent,
	/// Rounded value followed by a unit.
	Suffix(&'static str),
}

/// Round half up, matching how the backend's own reports round.
fn round(v: f64) -> i64 {
	(v + 0.5).floor() as i64
}

pub fn format_value(value: Option<f64>, format: StatFormat) -> String {
	let Some(v) = value.filter(|v| v.is_finite()) else {
		return MISSING.to_string();
	};
	match format {
		StatFormat::Integer => round(v).to_string(),
		StatFormat::Decimals(n) => format!("{v:.n$}"),
		StatFormat::Percent => format!("{}%", round(v * 100.0)),
		StatFormat::Suffix(unit) => format!("{}{unit}", round(v)),
	}
}

/// A home/away pair of columns shown under one label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatRow {
	pub label: &'static str,
	pub home_key: &'static str,
	pub away_key: &'static str,
	pub format: StatFormat,
}

const fn row(
	label: &'static str,
	home_key: &'static str,
	away_key: &'static str,
	format: StatFormat,
) -> StatRow {
	StatRow {
		label,
		home_key,
		away_key,
		format,
	}
}

pub const BASIC_STAT_ROWS: [StatRow; 15] = [
	row("Possession", "home_possession", "away_possession", StatFormat::Suffix("%")),
	row("Shots", "HS", "AS", StatFormat::Integer),
	row("Shots on Target", "HST", "AST", StatFormat::Integer),
	row(
		"Expected Goals",
		"home_expected_goals_xg",
		"away_expected_goals_xg",
		StatFormat::Decimals(2),
	),
	row("Passes", "home_passes", "away_passes", StatFormat::Integer),
	row(
		"Pass Accuracy",
		"home_accurate_passes_pct",
		"away_accurate_passes_pct",
		StatFormat::Suffix("%"),
	),
	row(
		"Dribble Success",
		"home_successful_dribbles_pct",
		"away_successful_dribbles_pct",
		StatFormat::Suffix("%"),
	),
	row(
		"Tackle Success",
		"home_tackles_won_pct",
		"away_tackles_won_pct",
		StatFormat::Suffix("%"),
	),
	row("Corners", "HC", "AC", StatFormat::Integer),
	row("Fouls", "HF", "AF", StatFormat::Integer),
	row("Yellow Cards", "HY", "AY", StatFormat::Integer),
	row("Red Cards", "HR", "AR", StatFormat::Integer),
	row("Interceptions", "home_interceptions", "away_interceptions", StatFormat::Integer),
	row("Saves", "home_keeper_saves", "away_keeper_saves", StatFormat::Integer),
	row("Duels Won", "home_duels_won", "away_duels_won", StatFormat::Integer),
];

/// Form over each side's previous five matches.
pub const ROLLING_STAT_ROWS: [StatRow; 6] = [
	row("Avg Goals For (LAST 5)", "HT_AvgGF_L5", "AT_AvgGF_L5", StatFormat::Decimals(1)),
	row("Avg Goals Against (LAST 5)", "HT_AvgGA_L5", "AT_AvgGA_L5", StatFormat::Decimals(1)),
	row("Avg Shots (LAST 5)", "HT_AvgShots_L5", "AT_AvgShots_L5", StatFormat::Decimals(1)),
	row(
		"Shot Accuracy (LAST 5)",
		"HT_ShotAccuracy_L5",
		"AT_ShotAccuracy_L5",
		StatFormat::Percent,
	),
	row("Clean Sheets (LAST 5)", "HT_CS_L5", "AT_CS_L5", StatFormat::Percent),
	row("Win Rate (LAST 5)", "HT_WinRate_L5", "AT_WinRate_L5", StatFormat::Percent),
];

const FORWARD: &[&str] = &[
	"total_shots",
	"final_third_passes",
	"shots_on_target",
	"chances_created",
	"xg",
	"touches",
	"xa",
	"duels_won",
	"xgot",
	"duels_lost",
	"successful_dribbles",
	"minutes_played",
];

const MIDFIELDER: &[&str] = &[
	"total_shots",
	"touches",
	"xg",
	"recoveries",
	"xa",
	"tackles",
	"successful_dribbles",
	"duels_won",
	"final_third_passes",
	"duels_lost",
	"chances_created",
	"minutes_played",
];

const DEFENDER: &[&str] = &[
	"total_shots",
	"fouls_committed",
	"xg",
	"recoveries",
	"xa",
	"tackles",
	"successful_dribbles",
	"duels_won",
	"clearances",
	"duels_lost",
	"touches",
	"minutes_played",
];

const GOALKEEPER: &[&str] = &[
	"total_shots",
	"xg",
	"xa",
	"shots_on_target",
	"successful_dribbles",
	"touches",
	"chances_created",
	"recoveries",
	"clearances",
	"tackles",
	"duels_won",
	"duels_lost",
	"fouls_committed",
	"minutes_played",
];

/// Stat columns shown in an expanded player card. Unknown positions show none.
pub fn position_stats(position: &str) -> &'static [&'static str] {
	match position {
		"Forward" => FORWARD,
		"Midfielder" => MIDFIELDER,
		"Defender" => DEFENDER,
		"Goalkeeper" => GOALKEEPER,
		_ => &[],
	}
}

pub fn position_abbr(position: &str) -> String {
	match position {
		"Forward" => "FWD".to_string(),
		"Midfielder" => "MID".to_string(),
		"Defender" => "DEF".to_string(),
		"Goalkeeper" => "GK".to_string(),
		other => other.chars().take(3).collect::<String>().to_uppercase(),
	}
}

/// Human label for a player stat column. Unknown columns show their key.
pub fn stat_label(key: &str) -> &str {
	match key {
		"total_shots" => "Total Shots",
		"shots_on_target" => "Shots on Target",
		"xg" => "Expected Goals ( xG )",
		"xa" => "Expected Assists ( xA )",
		"xgot" => "Expected Goals on Target ( xGOT )",
		"successful_dribbles" => "Successful Dribbles",
		"touches" => "Touches",
		"touches_opposition_box" => "Touches in Opp. Box",
		"chances_created" => "Chances Created",
		"final_third_passes" => "Final Third Passes",
		"recoveries" => "Recoveries",
		"clearances" => "Clearances",
		"tackles" => "Tackles",
		"duels_won" => "Duels Won",
		"duels_lost" => "Duels Lost",
		"fouls_committed" => "Fouls Committed",
		"minutes_played" => "Minutes Played",
		other => other,
	}
}

/// Player stat cell. Players without a value for the column show zero.
pub fn format_player_stat(value: Option<f64>) -> String {
	value
		.filter(|v| v.is_finite())
		.map_or_else(|| "0".to_string(), |v| v.to_string())
}

/// Probability as a percentage with one decimal, e.g. `65.5%`.
pub fn format_probability(p: f64) -> String {
	if !p.is_finite() {
		return MISSING.to_string();
	}
	format!("{:.1}%", p * 100.0)
}

/// Re-render `"1.85 - 1.2"` as `"1.850 - 1.200"`. Unparseable sides show `–`.
pub fn format_raw_scoreline(raw: &str) -> String {
	let sides: Vec<&str> = if raw.contains(" - ") {
		raw.split(" - ").collect()
	} else {
		raw.split('-').collect()
	};
	sides
		.into_iter()
		.map(|side| match side.trim().parse::<f64>() {
			Ok(v) if v.is_finite() => format!("{v:.3}"),
			_ => MISSING.to_string(),
		})
		.collect::<Vec<_>>()
		.join(" - ")
}

/// Result heading above the probability bar.
pub fn outcome_headline(prediction: &Prediction, teams: &TeamDirectory) -> String {
	if prediction.is_draw() {
		"MATCH DRAWN!".to_string()
	} else {
		format!(
			"WINNER: {}",
			teams.display_name(&prediction.predicted_winner_blended)
		)
	}
}

/// Segments narrower than this put their label above the bar.
pub const MIN_INSIDE_PERCENT: f64 = 12.0;

/// One third of the outcome bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub label: String,
	/// Width in percent, rounded to one decimal.
	pub percent: f64,
	pub color: String,
	pub text_color: &'static str,
}

impl Segment {
	pub fn label_inside(&self) -> bool {
		self.percent >= MIN_INSIDE_PERCENT
	}

	pub fn percent_text(&self) -> String {
		format!("{:.1}%", self.percent)
	}
}

/// Home, draw and away segments of the outcome bar, in that order.
pub fn probability_segments(
	probs: &OutcomeProbabilities,
	home: &str,
	away: &str,
	teams: &TeamDirectory,
) -> [Segment; 3] {
	let pct = |p: f64| if p.is_finite() { (p * 1000.0).round() / 10.0 } else { 0.0 };
	let team = |name: &str, p: f64| Segment {
		label: name.to_string(),
		percent: pct(p),
		color: teams.team_color(name).to_string(),
		text_color: teams.text_color_on(name),
	};
	[
		team(home, probs.home_win),
		Segment {
			label: "Draw".to_string(),
			percent: pct(probs.draw),
			color: "#ffffff".to_string(),
			text_color: "#000",
		},
		team(away, probs.away_win),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_values_render_as_dash() {
		for fmt in [
			StatFormat::Integer,
			StatFormat::Decimals(2),
			StatFormat::Percent,
			StatFormat::Suffix("%"),
		] {
			assert_eq!(format_value(None, fmt), MISSING);
			assert_eq!(format_value(Some(f64::NAN), fmt), MISSING);
			assert_eq!(format_value(Some(f64::INFINITY), fmt), MISSING);
		}
	}

	#[test]
	fn formats_follow_the_row_kind() {
		assert_eq!(format_value(Some(13.5), StatFormat::Integer), "14");
		assert_eq!(format_value(Some(1.456), StatFormat::Decimals(2)), "1.46");
		assert_eq!(format_value(Some(0.6), StatFormat::Percent), "60%");
		assert_eq!(format_value(Some(61.4), StatFormat::Suffix("%")), "61%");
		assert_eq!(format_value(Some(0.0), StatFormat::Integer), "0");
	}

	#[test]
	fn row_tables_have_expected_shape() {
		assert_eq!(BASIC_STAT_ROWS.len(), 15);
		assert_eq!(BASIC_STAT_ROWS[0].label, "Possession");
		assert!(ROLLING_STAT_ROWS.iter().all(|r| r.home_key.starts_with("HT_")));
		assert!(ROLLING_STAT_ROWS.iter().all(|r| r.away_key.starts_with("AT_")));
	}

	#[test]
	fn positions_pick_stat_subsets() {
		assert_eq!(position_stats("Goalkeeper").len(), 14);
		assert!(position_stats("Forward").contains(&"xgot"));
		assert!(position_stats("Coach").is_empty());
		assert_eq!(position_abbr("Midfielder"), "MID");
		assert_eq!(position_abbr("Wingback"), "WIN");
		assert_eq!(position_abbr("cb"), "CB");
	}

	#[test]
	fn stat_labels_fall_back_to_key() {
		assert_eq!(stat_label("xa"), "Expected Assists ( xA )");
		assert_eq!(stat_label("aerials_won"), "aerials_won");
		assert_eq!(format_player_stat(Some(0.43)), "0.43");
		assert_eq!(format_player_stat(Some(58.0)), "58");
		assert_eq!(format_player_stat(None), "0");
	}

	#[test]
	fn probabilities_and_scorelines() {
		assert_eq!(format_probability(0.655), "65.5%");
		assert_eq!(format_probability(0.0), "0.0%");
		assert_eq!(format_raw_scoreline("1.850 - 1.200"), "1.850 - 1.200");
		assert_eq!(format_raw_scoreline("1.85 - 1.2"), "1.850 - 1.200");
		assert_eq!(format_raw_scoreline("-0.12 - 1.3"), "-0.120 - 1.300");
		assert_eq!(format_raw_scoreline("abc - 2"), "– - 2.000");
	}

	#[test]
	fn segments_follow_team_colours() {
		let teams = TeamDirectory::default();
		let probs = OutcomeProbabilities {
			home_win: 0.655,
			draw: 0.195,
			away_win: 0.15,
		};
		let [home, draw, away] = probability_segments(&probs, "Leeds United", "Arsenal", &teams);
		assert_eq!(home.percent_text(), "65.5%");
		assert_eq!(home.text_color, "#000");
		assert_eq!(draw.label, "Draw");
		assert_eq!(away.color, "#EF0107");
		assert!(away.label_inside());

		let slim = OutcomeProbabilities {
			home_win: 0.9,
			draw: 0.05,
			away_win: 0.05,
		};
		let [_, draw, _] = probability_segments(&slim, "Arsenal", "Chelsea", &teams);
		assert!(!draw.label_inside());
	}
}
