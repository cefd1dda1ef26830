//! LOL-Status-V3 endpoints.

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// LOL-Status-V3 API methods.
pub struct StatusApi<'c> {
    client: &'c Client,
}

impl<'c> StatusApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// The League of Legends status for this client's shard.
    pub async fn shard_data(&self) -> Result<ApiResponse<ShardStatus>> {
        self.client.get("lol/status/v3/shard-data").await
    }
}

/// Shard status data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShardStatus {
    pub name: String,
    pub region_tag: String,
    #[serde(rename = "hostname")]
    pub host_name: String,
    pub services: Vec<Service>,
    pub slug: String,
    pub locales: Vec<String>,
}

/// One platform service and its incidents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Service {
    pub status: String,
    pub incidents: Vec<Incident>,
    pub name: String,
    pub slug: String,
}

/// An ongoing or resolved incident.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub active: bool,
    pub created_at: String,
    pub id: i64,
    pub updates: Vec<Message>,
}

/// A status message attached to an incident.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Message {
    pub severity: String,
    pub author: String,
    pub created_at: String,
    pub translations: Vec<Translation>,
    pub updated_at: String,
    pub content: String,
    pub id: String,
}

/// A localized rendering of a status message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub locale: String,
    pub content: String,
    pub updated_at: String,
}
