//! Typed endpoint wrappers, one module per Riot API section.
//!
//! Each module pairs the section's response shapes with one-line request
//! builders that delegate to the client's dispatcher. Nothing here touches
//! rate limit state directly; that is the dispatcher's job.

pub mod champion;
pub mod champion_mastery;
pub mod league;
pub mod matches;
pub mod spectator;
pub mod static_data;
pub mod status;
pub mod summoner;
pub mod third_party_code;
pub mod tournament;
pub mod tournament_stub;

pub use champion::ChampionApi;
pub use champion_mastery::ChampionMasteryApi;
pub use league::LeagueApi;
pub use matches::MatchApi;
pub use spectator::SpectatorApi;
pub use static_data::StaticDataApi;
pub use status::StatusApi;
pub use summoner::SummonerApi;
pub use third_party_code::ThirdPartyCodeApi;
pub use tournament::TournamentApi;
pub use tournament_stub::TournamentStubApi;
