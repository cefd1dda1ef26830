//! Summoner-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Summoner-V3 API methods.
pub struct SummonerApi<'c> {
    client: &'c Client,
}

impl<'c> SummonerApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Retrieve a summoner by account ID.
    pub async fn by_account_id(&self, account_id: i64) -> Result<ApiResponse<Summoner>> {
        self.client
            .get(&format!(
                "lol/summoner/v3/summoners/by-account/{}",
                account_id
            ))
            .await
    }

    /// Retrieve a summoner by summoner name.
    pub async fn by_name(&self, summoner_name: &str) -> Result<ApiResponse<Summoner>> {
        self.client
            .get(&format!(
                "lol/summoner/v3/summoners/by-name/{}",
                summoner_name
            ))
            .await
    }

    /// Retrieve a summoner by summoner ID.
    pub async fn by_id(&self, summoner_id: i64) -> Result<ApiResponse<Summoner>> {
        self.client
            .get(&format!("lol/summoner/v3/summoners/{}", summoner_id))
            .await
    }
}

/// Summoner information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summoner {
    pub profile_icon_id: i32,
    pub name: String,
    pub summoner_level: i64,
    pub revision_date: i64,
    pub id: i64,
    pub account_id: i64,
}
