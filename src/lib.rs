//! Freljord - rate-limit-aware client for the Riot Games API
//!
//! This crate wraps the Riot API behind typed endpoint methods and a request
//! dispatcher that tracks the quota state advertised by response headers.
//! Requests the client already knows would exceed quota are refused locally,
//! without a network round trip, so callers never burn a blacklisting-worthy
//! request on a predictable rejection.
//!
//! # Example
//!
//! ```rust,no_run
//! use freljord::Client;
//!
//! #[tokio::main]
//! async fn main() -> freljord::Result<()> {
//!     let client = Client::builder()
//!         .api_key("RGAPI-...")
//!         .region("euw1")
//!         .build()?;
//!
//!     let summoner = client.summoner().by_name("Faker").await?;
//!     let masteries = client
//!         .champion_mastery()
//!         .by_summoner(summoner.data.id)
//!         .await?;
//!     println!("{} mastery entries", masteries.data.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod ratelimit;

pub use client::{ApiResponse, Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
