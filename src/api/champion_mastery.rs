//! Champion-Mastery-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Champion-Mastery-V3 API methods.
pub struct ChampionMasteryApi<'c> {
    client: &'c Client,
}

impl<'c> ChampionMasteryApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// All champion mastery entries for a summoner, sorted by champion
    /// points in descending order.
    pub async fn by_summoner(
        &self,
        summoner_id: i64,
    ) -> Result<ApiResponse<Vec<ChampionMastery>>> {
        self.client
            .get(&format!(
                "lol/champion-mastery/v3/champion-masteries/by-summoner/{}",
                summoner_id
            ))
            .await
    }

    /// The mastery entry for one summoner and champion combination.
    pub async fn by_summoner_and_champion(
        &self,
        summoner_id: i64,
        champion_id: i64,
    ) -> Result<ApiResponse<ChampionMastery>> {
        self.client
            .get(&format!(
                "lol/champion-mastery/v3/champion-masteries/by-summoner/{}/by-champion/{}",
                summoner_id, champion_id
            ))
            .await
    }

    /// A summoner's total mastery score: the sum of individual champion
    /// mastery levels.
    pub async fn score_by_summoner(&self, summoner_id: i64) -> Result<ApiResponse<i32>> {
        self.client
            .get(&format!(
                "lol/champion-mastery/v3/scores/by-summoner/{}",
                summoner_id
            ))
            .await
    }
}

/// Champion mastery information for one player and champion combination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionMastery {
    pub chest_granted: bool,
    pub champion_level: i32,
    pub champion_points: i32,
    pub champion_id: i64,
    pub player_id: i64,
    pub champion_points_until_next_level: i64,
    pub tokens_earned: i32,
    pub champion_points_since_last_level: i64,
    pub last_play_time: i64,
}
