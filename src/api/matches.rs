//! Match-V3 endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Match-V3 API methods.
pub struct MatchApi<'c> {
    client: &'c Client,
}

impl<'c> MatchApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Retrieve match data by match ID.
    pub async fn by_id(&self, match_id: i64) -> Result<ApiResponse<Match>> {
        self.client
            .get(&format!("lol/match/v3/matches/{}", match_id))
            .await
    }

    /// Retrieve a filtered matchlist for the given account.
    pub async fn by_account(
        &self,
        account_id: i64,
        options: &MatchlistOptions,
    ) -> Result<ApiResponse<Matchlist>> {
        self.client
            .get_query(
                &format!("lol/match/v3/matchlists/by-account/{}", account_id),
                &options.query(),
            )
            .await
    }

    /// The last 20 matches played on the given account.
    pub async fn recent_by_account(&self, account_id: i64) -> Result<ApiResponse<Matchlist>> {
        self.client
            .get(&format!(
                "lol/match/v3/matchlists/by-account/{}/recent",
                account_id
            ))
            .await
    }

    /// Retrieve the match timeline for the given match.
    pub async fn timeline_by_id(&self, match_id: i64) -> Result<ApiResponse<MatchTimeline>> {
        self.client
            .get(&format!("lol/match/v3/timelines/by-match/{}", match_id))
            .await
    }

    /// Match IDs played under the given tournament code.
    pub async fn ids_by_tournament_code(
        &self,
        tournament_code: &str,
    ) -> Result<ApiResponse<Vec<i64>>> {
        self.client
            .get(&format!(
                "lol/match/v3/matches/by-tournament-code/{}/ids",
                tournament_code
            ))
            .await
    }

    /// Retrieve a tournament match by match ID and tournament code.
    pub async fn by_id_and_tournament_code(
        &self,
        match_id: i64,
        tournament_code: &str,
    ) -> Result<ApiResponse<Match>> {
        self.client
            .get(&format!(
                "lol/match/v3/matches/{}/by-tournament-code/{}",
                match_id, tournament_code
            ))
            .await
    }
}

/// Optional filters for [`MatchApi::by_account`].
///
/// Index ranges are capped at 100 entries and time ranges at one week by
/// the server; out-of-range values come back as a 400 status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchlistOptions {
    /// End of the time range, epoch milliseconds
    pub end_time: Option<i64>,
    /// Start of the time range, epoch milliseconds
    pub begin_time: Option<i64>,
    /// First match index to return
    pub begin_index: Option<i32>,
    /// Last match index to return
    pub end_index: Option<i32>,
    /// Champion IDs to filter on
    pub champion: Vec<i64>,
    /// Queue IDs to filter on
    pub queue: Vec<i64>,
    /// Season IDs to filter on
    pub season: Vec<i64>,
}

impl MatchlistOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(end_time) = self.end_time {
            pairs.push(("endTime", end_time.to_string()));
        }
        if let Some(begin_time) = self.begin_time {
            pairs.push(("beginTime", begin_time.to_string()));
        }
        if let Some(begin_index) = self.begin_index {
            pairs.push(("beginIndex", begin_index.to_string()));
        }
        if let Some(end_index) = self.end_index {
            pairs.push(("endIndex", end_index.to_string()));
        }
        for champion in &self.champion {
            pairs.push(("champion", champion.to_string()));
        }
        for queue in &self.queue {
            pairs.push(("queue", queue.to_string()));
        }
        for season in &self.season {
            pairs.push(("season", season.to_string()));
        }
        pairs
    }
}

/// Match data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub season_id: i32,
    pub queue_id: i32,
    pub game_id: i64,
    pub participant_identities: Vec<ParticipantIdentity>,
    pub game_version: String,
    pub platform_id: String,
    pub game_mode: String,
    pub map_id: i32,
    pub game_type: String,
    pub teams: Vec<TeamStats>,
    pub participants: Vec<Participant>,
    pub game_duration: i64,
    pub game_creation: i64,
}

/// Participant identity data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantIdentity {
    pub player: Player,
    pub participant_id: i32,
}

/// Player data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub current_platform_id: String,
    pub summoner_name: String,
    pub match_history_uri: String,
    pub platform_id: String,
    pub current_account_id: i64,
    pub profile_icon: i32,
    pub summoner_id: i64,
    pub account_id: i64,
}

/// Team stats data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub first_dragon: bool,
    pub first_inhibitor: bool,
    pub bans: Vec<TeamBans>,
    pub baron_kills: i32,
    pub first_rift_herald: bool,
    pub first_baron: bool,
    pub rift_herald_kills: i32,
    pub first_blood: bool,
    pub team_id: i32,
    pub first_tower: bool,
    pub vilemaw_kills: i32,
    pub inhibitor_kills: i32,
    pub tower_kills: i32,
    pub dominion_victory_score: i32,
    pub win: String,
    pub dragon_kills: i32,
}

/// Team bans data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamBans {
    pub pick_turn: i32,
    pub champion_id: i32,
}

/// Participant data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub stats: ParticipantStats,
    pub participant_id: i32,
    pub runes: Vec<MatchRune>,
    pub timeline: ParticipantTimeline,
    pub team_id: i32,
    #[serde(rename = "spell2Id")]
    pub spell2_id: i32,
    pub masteries: Vec<MatchMastery>,
    pub highest_achieved_season_tier: String,
    #[serde(rename = "spell1Id")]
    pub spell1_id: i32,
    pub champion_id: i32,
}

/// Participant stats data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStats {
    pub physical_damage_dealt: i64,
    pub neutral_minions_killed_team_jungle: i32,
    pub magic_damage_dealt: i64,
    pub total_player_score: i32,
    pub deaths: i32,
    pub win: bool,
    pub neutral_minions_killed_enemy_jungle: i32,
    pub altars_captured: i32,
    pub largest_critical_strike: i32,
    pub total_damage_dealt: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub vision_wards_bought_in_game: i32,
    pub damage_dealt_to_objectives: i64,
    pub largest_killing_spree: i32,
    pub item1: i32,
    pub quadra_kills: i32,
    pub team_objective: i32,
    pub total_time_crowd_control_dealt: i32,
    pub longest_time_spent_living: i32,
    pub wards_killed: i32,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub item2: i32,
    pub item3: i32,
    pub item0: i32,
    pub first_blood_assist: bool,
    pub vision_score: i64,
    pub wards_placed: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,
    pub turret_kills: i32,
    pub triple_kills: i32,
    pub damage_self_mitigated: i64,
    pub champ_level: i32,
    pub node_neutralize_assist: i32,
    pub first_inhibitor_kill: bool,
    pub gold_earned: i32,
    pub magical_damage_taken: i64,
    pub kills: i32,
    pub double_kills: i32,
    pub node_capture_assist: i32,
    pub true_damage_taken: i64,
    pub node_neutralize: i32,
    pub first_inhibitor_assist: bool,
    pub assists: i32,
    pub unreal_kills: i32,
    pub neutral_minions_killed: i32,
    pub objective_player_score: i32,
    pub combat_player_score: i32,
    pub damage_dealt_to_turrets: i64,
    pub altars_neutralized: i32,
    pub physical_damage_dealt_to_champions: i64,
    pub gold_spent: i32,
    pub true_damage_dealt: i64,
    pub true_damage_dealt_to_champions: i64,
    pub participant_id: i32,
    pub penta_kills: i32,
    pub total_heal: i64,
    pub total_minions_killed: i32,
    pub first_blood_kill: bool,
    pub node_capture: i32,
    pub largest_multi_kill: i32,
    pub sight_wards_bought_in_game: i32,
    pub total_damage_dealt_to_champions: i64,
    pub total_units_healed: i32,
    pub inhibitor_kills: i32,
    pub total_score_rank: i32,
    pub total_damage_taken: i64,
    pub killing_sprees: i32,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i64,
    pub physical_damage_taken: i64,
}

/// Rune data for one match participant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRune {
    pub rune_id: i32,
    pub rank: i32,
}

/// Participant timeline data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantTimeline {
    pub lane: String,
    pub participant_id: i32,
    pub cs_diff_per_min_deltas: HashMap<String, f64>,
    pub gold_per_min_deltas: HashMap<String, f64>,
    pub xp_diff_per_min_deltas: HashMap<String, f64>,
    pub creeps_per_min_deltas: HashMap<String, f64>,
    pub xp_per_min_deltas: HashMap<String, f64>,
    pub role: String,
    pub damage_taken_diff_per_min_deltas: HashMap<String, f64>,
    pub damage_taken_per_min_deltas: HashMap<String, f64>,
}

/// Mastery data for one match participant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchMastery {
    pub mastery_id: i32,
    pub rank: i32,
}

/// Match list data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Matchlist {
    pub matches: Vec<MatchReference>,
    pub total_games: i32,
    pub start_index: i32,
    pub end_index: i32,
}

/// Match reference data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchReference {
    pub lane: String,
    pub game_id: i64,
    pub champion: i32,
    pub platform_id: String,
    pub season: i32,
    pub queue: i32,
    pub role: String,
    pub timestamp: i64,
}

/// Match timeline data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchTimeline {
    pub frames: Vec<MatchFrame>,
    pub frame_interval: i64,
}

/// One frame of a match timeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFrame {
    pub timestamp: i64,
    pub participant_frames: HashMap<String, MatchParticipantFrame>,
    pub events: Vec<MatchEvent>,
}

/// Per-participant data within a timeline frame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchParticipantFrame {
    pub total_gold: i32,
    pub team_score: i32,
    pub participant_id: i32,
    pub level: i32,
    pub current_gold: i32,
    pub minions_killed: i32,
    pub dominion_score: i32,
    pub position: MatchPosition,
    pub xp: i32,
    pub jungle_minions_killed: i32,
}

/// The position of an object on the map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPosition {
    pub x: i32,
    pub y: i32,
}

/// A match timeline event.
///
/// Type legal values: CHAMPION_KILL, WARD_PLACED, WARD_KILL, BUILDING_KILL,
/// ELITE_MONSTER_KILL, ITEM_PURCHASED, ITEM_SOLD, ITEM_DESTROYED, ITEM_UNDO,
/// SKILL_LEVEL_UP, ASCENDED_EVENT, CAPTURE_POINT, PORO_KING_SUMMON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchEvent {
    pub event_type: String,
    pub tower_type: String,
    pub team_id: i32,
    pub ascended_type: String,
    pub killer_id: i32,
    pub level_up_type: String,
    pub point_captured: String,
    pub assisting_participant_ids: Vec<i32>,
    pub ward_type: String,
    pub monster_type: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub skill_slot: i32,
    pub victim_id: i32,
    pub timestamp: i64,
    pub after_id: i32,
    pub monster_sub_type: String,
    pub lane_type: String,
    pub item_id: i32,
    pub participant_id: i32,
    pub building_type: String,
    pub creator_id: i32,
    pub position: MatchPosition,
    pub before_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchlist_options_query_pairs() {
        let options = MatchlistOptions {
            begin_index: Some(0),
            end_index: Some(40),
            champion: vec![22, 67],
            ..MatchlistOptions::default()
        };

        let query = options.query();

        assert_eq!(
            query,
            vec![
                ("beginIndex", "0".to_string()),
                ("endIndex", "40".to_string()),
                ("champion", "22".to_string()),
                ("champion", "67".to_string()),
            ]
        );
    }

    #[test]
    fn test_matchlist_options_default_is_empty() {
        assert!(MatchlistOptions::default().query().is_empty());
    }
}
