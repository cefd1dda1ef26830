//! Spectator-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Spectator-V3 API methods.
pub struct SpectatorApi<'c> {
    client: &'c Client,
}

impl<'c> SpectatorApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Current game information for the given summoner, if they are in one.
    pub async fn current_game(&self, summoner_id: i64) -> Result<ApiResponse<CurrentGameInfo>> {
        self.client
            .get(&format!(
                "lol/spectator/v3/active-games/by-summoner/{}",
                summoner_id
            ))
            .await
    }

    /// The list of featured games.
    pub async fn featured_games(&self) -> Result<ApiResponse<FeaturedGames>> {
        self.client.get("lol/spectator/v3/featured-games").await
    }
}

/// Current game information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameInfo {
    pub game_id: i64,
    pub game_start_time: i64,
    pub platform_id: String,
    pub game_mode: String,
    pub map_id: i64,
    pub game_type: String,
    pub banned_champions: Vec<BannedChampion>,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
    pub game_length: i64,
    pub game_queue_config_id: i64,
}

/// A banned champion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

/// Observer information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Observer {
    pub encryption_key: String,
}

/// A participant in a live game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameParticipant {
    pub profile_icon_id: i64,
    pub champion_id: i64,
    pub summoner_name: String,
    pub game_customization_objects: Vec<GameCustomizationObject>,
    pub bot: bool,
    pub perks: Perks,
    #[serde(rename = "spell2Id")]
    pub spell2_id: i64,
    pub team_id: i64,
    #[serde(rename = "spell1Id")]
    pub spell1_id: i64,
    pub summoner_id: i64,
}

/// Game customization information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCustomizationObject {
    pub category: String,
    pub content: String,
}

/// Rune page information for a live game participant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Perks {
    pub perk_style: i64,
    #[serde(rename = "perkids")]
    pub perk_ids: Vec<i64>,
    pub perk_sub_style: i64,
}

/// Featured games information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedGames {
    pub client_refresh_interval: i64,
    pub game_list: Vec<FeaturedGameInfo>,
}

/// One featured game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedGameInfo {
    pub game_id: i64,
    pub game_start_time: i64,
    pub platform_id: String,
    pub game_mode: String,
    pub map_id: i64,
    pub game_type: String,
    pub banned_champions: Vec<BannedChampion>,
    pub observers: Observer,
    pub participants: Vec<Participant>,
    pub game_length: i64,
    pub game_queue_config_id: i64,
}

/// A participant in a featured game.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub profile_icon_id: i64,
    pub champion_id: i64,
    pub summoner_name: String,
    pub bot: bool,
    #[serde(rename = "spell2Id")]
    pub spell2_id: i64,
    pub team_id: i64,
    #[serde(rename = "spell1Id")]
    pub spell1_id: i64,
}
