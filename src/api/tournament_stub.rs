//! Tournament-Stub-V3 endpoints.
//!
//! Mock variants of the tournament endpoints for development keys. Request
//! and response shapes are shared with [`crate::api::tournament`].

use crate::api::tournament::{
    LobbyEventList, ProviderRegistration, TournamentCodeParameters, TournamentCodesOptions,
    TournamentRegistration,
};
use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Tournament-Stub-V3 API methods.
pub struct TournamentStubApi<'c> {
    client: &'c Client,
}

impl<'c> TournamentStubApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Create mock tournament codes for the given tournament.
    pub async fn create_codes(
        &self,
        parameters: &TournamentCodeParameters,
        options: &TournamentCodesOptions,
    ) -> Result<ApiResponse<Vec<String>>> {
        self.client
            .post(
                "lol/tournament-stub/v3/codes",
                &options.query(),
                parameters,
            )
            .await
    }

    /// Lobby events for the given mock tournament code.
    pub async fn lobby_events(
        &self,
        tournament_code: &str,
    ) -> Result<ApiResponse<LobbyEventList>> {
        self.client
            .get(&format!(
                "lol/tournament-stub/v3/lobby-events/by-code/{}",
                tournament_code
            ))
            .await
    }

    /// Register a mock tournament provider and return its ID.
    pub async fn register_provider(
        &self,
        registration: &ProviderRegistration,
    ) -> Result<ApiResponse<i32>> {
        self.client
            .post("lol/tournament-stub/v3/providers", &[], registration)
            .await
    }

    /// Register a mock tournament and return its ID.
    pub async fn register_tournament(
        &self,
        registration: &TournamentRegistration,
    ) -> Result<ApiResponse<i32>> {
        self.client
            .post("lol/tournament-stub/v3/tournaments", &[], registration)
            .await
    }
}
