//! Champion-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Champion-V3 API methods.
pub struct ChampionApi<'c> {
    client: &'c Client,
}

impl<'c> ChampionApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// List all currently available champions.
    pub async fn all(&self) -> Result<ApiResponse<ChampionList>> {
        self.client.get("lol/platform/v3/champions").await
    }

    /// Retrieve champion information by champion ID.
    pub async fn by_id(&self, champion_id: i64) -> Result<ApiResponse<Champion>> {
        self.client
            .get(&format!("lol/platform/v3/champions/{}", champion_id))
            .await
    }
}

/// A collection of champion information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionList {
    pub champions: Vec<Champion>,
}

/// Champion information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Champion {
    pub ranked_play_enabled: bool,
    pub bot_enabled: bool,
    pub bot_mm_enabled: bool,
    pub active: bool,
    pub free_to_play: bool,
    pub id: i64,
}
