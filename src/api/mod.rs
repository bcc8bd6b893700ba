//! Client for the prediction and statistics backend.

mod client;
mod error;
mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL, Health};
pub use error::{ApiError, Result};
pub use types::{
	BasicStats, BlendingWeights, ClubProfile, MatchSummary, Matchday, OutcomeProbabilities,
	PlayerRecord, Prediction, PredictionRequest, Rivalry, Season, Stadium, Trophy, moment_year,
	thousands,
};
