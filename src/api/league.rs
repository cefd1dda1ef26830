//! League-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// League-V3 API methods.
pub struct LeagueApi<'c> {
    client: &'c Client,
}

impl<'c> LeagueApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// The challenger league for the given queue.
    pub async fn challenger_by_queue(&self, queue: &str) -> Result<ApiResponse<LeagueList>> {
        self.client
            .get(&format!("lol/league/v3/challengerleagues/by-queue/{}", queue))
            .await
    }

    /// The league with the given ID, including inactive entries.
    pub async fn by_id(&self, league_id: &str) -> Result<ApiResponse<LeagueList>> {
        self.client
            .get(&format!("lol/league/v3/leagues/{}", league_id))
            .await
    }

    /// The master league for the given queue.
    pub async fn master_by_queue(&self, queue: &str) -> Result<ApiResponse<LeagueList>> {
        self.client
            .get(&format!("lol/league/v3/masterleagues/by-queue/{}", queue))
            .await
    }

    /// League positions in all queues for the given summoner.
    pub async fn positions_by_summoner(
        &self,
        summoner_id: i64,
    ) -> Result<ApiResponse<Vec<LeaguePosition>>> {
        self.client
            .get(&format!(
                "lol/league/v3/positions/by-summoner/{}",
                summoner_id
            ))
            .await
    }
}

/// Information about a ranked league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueList {
    pub league_id: String,
    pub tier: String,
    pub entries: Vec<LeagueItem>,
    pub queue: String,
    pub name: String,
}

/// A player or ranked team in a league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueItem {
    pub rank: String,
    pub hot_streak: bool,
    pub mini_series: MiniSeries,
    pub wins: i32,
    pub veteran: bool,
    pub losses: i32,
    pub fresh_blood: bool,
    pub player_or_team_name: String,
    pub inactive: bool,
    pub player_or_team_id: String,
    pub league_points: i32,
}

/// A league item's current mini series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiniSeries {
    pub wins: i32,
    pub losses: i32,
    pub target: i32,
    pub progress: String,
}

/// The position of a summoner in a league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaguePosition {
    pub rank: String,
    pub queue_type: String,
    pub hot_streak: bool,
    pub mini_series: MiniSeries,
    pub wins: i32,
    pub veteran: bool,
    pub losses: i32,
    pub fresh_blood: bool,
    pub league_id: String,
    pub player_or_team_name: String,
    pub inactive: bool,
    pub player_or_team_id: String,
    pub league_name: String,
    pub tier: String,
    pub league_points: i32,
}
