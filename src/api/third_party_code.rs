//! Third-Party-Code-V3 endpoints.

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Third-Party-Code-V3 API methods.
pub struct ThirdPartyCodeApi<'c> {
    client: &'c Client,
}

impl<'c> ThirdPartyCodeApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// The third party code registered for the given summoner.
    pub async fn by_summoner_id(&self, summoner_id: i64) -> Result<ApiResponse<String>> {
        self.client
            .get(&format!(
                "lol/platform/v3/third-party-code/by-summoner/{}",
                summoner_id
            ))
            .await
    }
}
