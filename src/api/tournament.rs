//! Tournament-V3 endpoints.
//!
//! These endpoints require a production tournament API key. The
//! [`crate::api::tournament_stub`] module mirrors them against the stub
//! service for development.

use serde::{Deserialize, Serialize};

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Tournament-V3 API methods.
pub struct TournamentApi<'c> {
    client: &'c Client,
}

impl<'c> TournamentApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Create tournament codes for the given tournament.
    pub async fn create_codes(
        &self,
        parameters: &TournamentCodeParameters,
        options: &TournamentCodesOptions,
    ) -> Result<ApiResponse<Vec<String>>> {
        self.client
            .post("lol/tournament/v3/codes", &options.query(), parameters)
            .await
    }

    /// Update the pick type, map, spectator type, or allowed summoners for
    /// the given code.
    pub async fn update_code(
        &self,
        tournament_code: &str,
        update: &TournamentCodeUpdate,
    ) -> Result<ApiResponse<()>> {
        self.client
            .put(
                &format!("lol/tournament/v3/codes/{}", tournament_code),
                update,
            )
            .await
    }

    /// Retrieve the tournament code details for the given code.
    pub async fn code(&self, tournament_code: &str) -> Result<ApiResponse<TournamentCode>> {
        self.client
            .get(&format!("lol/tournament/v3/codes/{}", tournament_code))
            .await
    }

    /// Lobby events for the given tournament code.
    pub async fn lobby_events(
        &self,
        tournament_code: &str,
    ) -> Result<ApiResponse<LobbyEventList>> {
        self.client
            .get(&format!(
                "lol/tournament/v3/lobby-events/by-code/{}",
                tournament_code
            ))
            .await
    }

    /// Register a tournament provider and return its ID.
    pub async fn register_provider(
        &self,
        registration: &ProviderRegistration,
    ) -> Result<ApiResponse<i32>> {
        self.client
            .post("lol/tournament/v3/providers", &[], registration)
            .await
    }

    /// Register a tournament and return its ID.
    pub async fn register_tournament(
        &self,
        registration: &TournamentRegistration,
    ) -> Result<ApiResponse<i32>> {
        self.client
            .post("lol/tournament/v3/tournaments", &[], registration)
            .await
    }
}

/// Game settings for tournament code creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    /// Summoners eligible to join the lobby. Enforced on the aggregate of
    /// both teams, not per team.
    pub allowed_summoner_ids: Vec<i64>,
    /// Map type. Legal values: SUMMONERS_RIFT, TWISTED_TREELINE,
    /// HOWLING_ABYSS
    pub map_type: String,
    /// Opaque custom data echoed back with game results
    pub metadata: String,
    /// Pick type. Legal values: BLIND_PICK, DRAFT_MODE, ALL_RANDOM,
    /// TOURNAMENT_DRAFT
    pub pick_type: String,
    /// Spectator type. Legal values: NONE, LOBBYONLY, ALL
    pub spectator_type: String,
    /// Team size, 1-5
    pub team_size: i32,
}

/// Query options for tournament code creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentCodesOptions {
    /// Number of codes to create (max 1000)
    pub count: Option<i32>,
    /// The tournament ID to attach the codes to
    pub tournament_id: Option<i64>,
}

impl TournamentCodesOptions {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }
        if let Some(tournament_id) = self.tournament_id {
            pairs.push(("tournamentId", tournament_id.to_string()));
        }
        pairs
    }
}

/// Updatable settings for an existing tournament code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeUpdate {
    pub allowed_summoner_ids: Vec<i64>,
    pub map_type: String,
    pub pick_type: String,
    pub spectator_type: String,
}

/// Tournament code details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentCode {
    pub map: String,
    pub code: String,
    pub spectators: String,
    pub region: String,
    pub provider_id: i32,
    pub team_size: i32,
    pub participants: Vec<i64>,
    pub pick_type: String,
    pub tournament_id: i32,
    pub lobby_name: String,
    pub password: String,
    pub id: i32,
    #[serde(rename = "metaData")]
    pub metadata: String,
}

/// A list of lobby events.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEventList {
    pub event_list: Vec<LobbyEvent>,
}

/// One lobby event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LobbyEvent {
    pub event_type: String,
    pub summoner_id: String,
    pub timestamp: String,
}

/// Parameters for registering a tournament provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRegistration {
    /// Callback URL game results are posted to. Must use the default port
    /// for its protocol.
    pub url: String,
    /// Region the provider runs tournaments in. Legal values: BR, EUNE,
    /// EUW, JP, LAN, LAS, NA, OCE, PBE, RU, TR
    pub region: String,
}

/// Parameters for registering a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistration {
    /// Optional tournament name
    pub name: String,
    /// The registered provider to associate the tournament with
    pub provider_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_options_query_pairs() {
        let options = TournamentCodesOptions {
            count: Some(5),
            tournament_id: Some(1234),
        };

        assert_eq!(
            options.query(),
            vec![
                ("count", "5".to_string()),
                ("tournamentId", "1234".to_string()),
            ]
        );
        assert!(TournamentCodesOptions::default().query().is_empty());
    }
}
