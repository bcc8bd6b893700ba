#![allow(unused_crate_dependencies)]

use std::fs;
use std::path::PathBuf;

use football_intel::api::{
	ClubProfile, MatchSummary, PlayerRecord, Prediction, moment_year, thousands,
};
use football_intel::stats_format::{
	format_player_stat, format_raw_scoreline, outcome_headline, position_stats,
	probability_segments,
};
use football_intel::teams::TeamDirectory;

fn read_fixture(name: &str) -> String {
	let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	path.push("tests");
	path.push("fixtures");
	path.push(name);
	fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn prediction_fixture_drives_the_result_panel() {
	let dir = TeamDirectory::default();
	let prediction: Prediction =
		serde_json::from_str(&read_fixture("prediction.json")).expect("fixture should parse");

	assert!(!prediction.is_draw());
	assert_eq!(outcome_headline(&prediction, &dir), "WINNER: Manchester City");
	assert_eq!(format_raw_scoreline(&prediction.raw_scoreline), "1.200 - 1.850");

	let segments =
		probability_segments(&prediction.blended_probabilities, "Arsenal", "Manchester City", &dir);
	let labels: Vec<_> = segments.iter().map(|s| s.label.as_str()).collect();
	assert_eq!(labels, ["Arsenal", "Draw", "Manchester City"]);
	assert_eq!(segments[2].percent_text(), "45.0%");
	assert!(segments.iter().all(|s| s.label_inside()));

	let weights = prediction.blending_weights.expect("weights present");
	assert_eq!(weights.classification, 0.6);
}

#[test]
fn match_listing_tolerates_numeric_ids_and_missing_scores() {
	let rows: Vec<MatchSummary> =
		serde_json::from_str(&read_fixture("matches.json")).expect("fixture should parse");
	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0].match_id, "101");
	assert_eq!(rows[0].score_text(), "2 – 1");
	assert_eq!(rows[1].match_id, "102");
	assert_eq!(rows[1].score_text(), "–");

	let dir = TeamDirectory::default();
	assert_eq!(dir.display_name(&rows[1].home_team), "Nottingham Forest");
}

#[test]
fn player_lines_split_by_side() {
	let dir = TeamDirectory::default();
	let players: Vec<PlayerRecord> =
		serde_json::from_str(&read_fixture("players.json")).expect("fixture should parse");
	assert_eq!(players.len(), 3);

	let saka = &players[0];
	assert_eq!(saka.player_id, "7");
	assert_eq!(saka.full_name(), "Bukayo Saka");
	assert_eq!((saka.goals, saka.assists), (Some(1), None));
	assert_eq!(format_player_stat(saka.stat("xg")), "0.42");
	assert_eq!(format_player_stat(saka.stat("touches")), "61");
	assert!(position_stats(&saka.position).contains(&"xg"));

	let palmer = &players[1];
	assert_eq!(format_player_stat(palmer.stat("xg")), "0");
	assert!(palmer.plays_for("Chelsea", &dir));
	assert!(!palmer.plays_for("Arsenal", &dir));

	let son = &players[2];
	assert_eq!(son.full_name(), "Son");
	assert!(son.plays_for("Tottenham", &dir));
}

#[test]
fn club_profile_renders_cabinet_and_facts() {
	let club: ClubProfile =
		serde_json::from_str(&read_fixture("club.json")).expect("fixture should parse");

	assert_eq!(club.club_name, "Arsenal");
	assert_eq!(club.founded.as_deref(), Some("1886"));
	assert_eq!(club.stadium.capacity.map(thousands).as_deref(), Some("60,704"));

	let facts = club.facts();
	assert_eq!(facts.len(), 6);
	assert_eq!(facts[5], ("Nicknames", "The Gunners, Gooners".to_string()));

	let cabinet = club.trophy_cabinet();
	assert_eq!(cabinet.len(), 3);
	assert_eq!(cabinet[0].count, "13");
	assert_eq!(cabinet[1].note.as_deref(), Some("(record)"));
	assert_eq!(cabinet[2].count, "2");

	let years: Vec<_> = club.iconic_moments.iter().map(|m| moment_year(m)).collect();
	assert_eq!(years, ["2003–04", "—"]);

	let dir = TeamDirectory::default();
	assert!(dir.club_crest_src(&club.rivalries[0].club).is_some());
	assert!(dir.club_crest_src(&club.rivalries[1].club).is_none());
}
