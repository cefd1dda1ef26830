//! Operation key resolution for request paths.
//!
//! Every request is attributed to an operation key for quota tracking. The
//! mapping is a static lookup table of path patterns, where `*` matches
//! exactly one path segment and an entry may additionally constrain the
//! HTTP method. Paths no entry recognizes fall back to the raw path string,
//! so every operation lands in some quota bucket and lookups never fail.

use reqwest::Method;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches this literal segment only
    Literal(String),
    /// Matches any single segment
    Any,
}

/// A single pattern -> operation key entry.
#[derive(Debug, Clone)]
struct Route {
    /// HTTP method to match; `None` matches any method
    method: Option<Method>,
    /// Pattern segments; the path must have the same segment count
    segments: Vec<Segment>,
    /// Operation key assigned on match
    key: String,
}

impl Route {
    fn matches(&self, method: &Method, path_segments: &[&str]) -> bool {
        if let Some(ref m) = self.method {
            if m != method {
                return false;
            }
        }

        if self.segments.len() != path_segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(path_segments)
            .all(|(pattern, actual)| match pattern {
                Segment::Literal(lit) => lit == actual,
                Segment::Any => !actual.is_empty(),
            })
    }
}

/// Lookup table mapping request paths to operation keys.
///
/// The table shipped by [`RouteTable::standard`] covers every endpoint this
/// crate exposes, keyed in the naming style of the Riot rate limiting
/// documentation (`GET_getAllChampions`, ...). Additional routes can be
/// registered for endpoints the table does not know.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table. Every path resolves to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern. `*` matches exactly one path segment; passing
    /// `None` for the method matches all methods. The first registered
    /// match wins.
    pub fn route(&mut self, method: Option<Method>, pattern: &str, key: &str) {
        let segments = split_segments(pattern)
            .into_iter()
            .map(|segment| {
                if segment == "*" {
                    Segment::Any
                } else {
                    Segment::Literal(segment.to_string())
                }
            })
            .collect();

        self.routes.push(Route {
            method,
            segments,
            key: key.to_string(),
        });
    }

    /// Resolve a request to its operation key.
    ///
    /// Unrecognized paths return the raw path string, so every request has
    /// a quota bucket.
    pub fn resolve(&self, method: &Method, path: &str) -> String {
        let path_segments = split_segments(path);

        for route in &self.routes {
            if route.matches(method, &path_segments) {
                return route.key.clone();
            }
        }

        path.to_string()
    }

    /// The table covering the endpoints this crate ships.
    pub fn standard() -> Self {
        let mut table = Self::new();

        // Champion-V3
        table.get("/lol/platform/v3/champions", "GET_getAllChampions");
        table.get("/lol/platform/v3/champions/*", "GET_getChampionById");

        // Champion-Mastery-V3
        table.get(
            "/lol/champion-mastery/v3/champion-masteries/by-summoner/*",
            "GET_getAllChampionMasteries",
        );
        table.get(
            "/lol/champion-mastery/v3/champion-masteries/by-summoner/*/by-champion/*",
            "GET_getChampionMastery",
        );
        table.get(
            "/lol/champion-mastery/v3/scores/by-summoner/*",
            "GET_getChampionMasteryScore",
        );

        // League-V3
        table.get(
            "/lol/league/v3/challengerleagues/by-queue/*",
            "GET_getChallengerLeague",
        );
        table.get("/lol/league/v3/leagues/*", "GET_getLeagueById");
        table.get(
            "/lol/league/v3/masterleagues/by-queue/*",
            "GET_getMasterLeague",
        );
        table.get(
            "/lol/league/v3/positions/by-summoner/*",
            "GET_getAllLeaguePositionsForSummoner",
        );

        // Match-V3
        table.get(
            "/lol/match/v3/matches/by-tournament-code/*/ids",
            "GET_getMatchIdsByTournamentCode",
        );
        table.get(
            "/lol/match/v3/matches/*/by-tournament-code/*",
            "GET_getMatchByTournamentCode",
        );
        table.get("/lol/match/v3/matches/*", "GET_getMatch");
        table.get(
            "/lol/match/v3/matchlists/by-account/*/recent",
            "GET_getRecentMatchlist",
        );
        table.get(
            "/lol/match/v3/matchlists/by-account/*",
            "GET_getMatchlist",
        );
        table.get(
            "/lol/match/v3/timelines/by-match/*",
            "GET_getMatchTimeline",
        );

        // Spectator-V3
        table.get(
            "/lol/spectator/v3/active-games/by-summoner/*",
            "GET_getCurrentGameInfoBySummoner",
        );
        table.get("/lol/spectator/v3/featured-games", "GET_getFeaturedGames");

        // LOL-Status-V3
        table.get("/lol/status/v3/shard-data", "GET_getShardData");

        // Summoner-V3
        table.get(
            "/lol/summoner/v3/summoners/by-account/*",
            "GET_getByAccountId",
        );
        table.get(
            "/lol/summoner/v3/summoners/by-name/*",
            "GET_getBySummonerName",
        );
        table.get("/lol/summoner/v3/summoners/*", "GET_getBySummonerId");

        // Third-Party-Code-V3
        table.get(
            "/lol/platform/v3/third-party-code/by-summoner/*",
            "GET_getThirdPartyCodeBySummonerId",
        );

        // Tournament-V3
        table.route(
            Some(Method::POST),
            "/lol/tournament/v3/codes",
            "POST_createTournamentCode",
        );
        table.route(
            Some(Method::PUT),
            "/lol/tournament/v3/codes/*",
            "PUT_updateCode",
        );
        table.get("/lol/tournament/v3/codes/*", "GET_getTournamentCode");
        table.get(
            "/lol/tournament/v3/lobby-events/by-code/*",
            "GET_getLobbyEventsByCode",
        );
        table.route(
            Some(Method::POST),
            "/lol/tournament/v3/providers",
            "POST_registerProviderData",
        );
        table.route(
            Some(Method::POST),
            "/lol/tournament/v3/tournaments",
            "POST_registerTournament",
        );

        // Tournament-Stub-V3
        table.route(
            Some(Method::POST),
            "/lol/tournament-stub/v3/codes",
            "POST_createStubTournamentCode",
        );
        table.get(
            "/lol/tournament-stub/v3/lobby-events/by-code/*",
            "GET_getStubLobbyEventsByCode",
        );
        table.route(
            Some(Method::POST),
            "/lol/tournament-stub/v3/providers",
            "POST_registerStubProviderData",
        );
        table.route(
            Some(Method::POST),
            "/lol/tournament-stub/v3/tournaments",
            "POST_registerStubTournament",
        );

        // Static-Data-V3
        table.get(
            "/lol/static-data/v3/champions",
            "GET_getStaticChampionList",
        );
        table.get(
            "/lol/static-data/v3/champions/*",
            "GET_getStaticChampionById",
        );
        table.get("/lol/static-data/v3/items", "GET_getItemList");
        table.get("/lol/static-data/v3/items/*", "GET_getItemById");
        table.get(
            "/lol/static-data/v3/language-strings",
            "GET_getLanguageStrings",
        );
        table.get("/lol/static-data/v3/languages", "GET_getLanguages");
        table.get("/lol/static-data/v3/maps", "GET_getMapData");
        table.get("/lol/static-data/v3/masteries", "GET_getMasteryList");
        table.get("/lol/static-data/v3/masteries/*", "GET_getMasteryById");
        table.get(
            "/lol/static-data/v3/profile-icons",
            "GET_getProfileIconData",
        );
        table.get("/lol/static-data/v3/realms", "GET_getRealm");
        table.get(
            "/lol/static-data/v3/reforged-rune-paths",
            "GET_getReforgedRunePaths",
        );
        table.get(
            "/lol/static-data/v3/reforged-rune-paths/*",
            "GET_getReforgedRunePathById",
        );
        table.get(
            "/lol/static-data/v3/reforged-runes",
            "GET_getReforgedRunes",
        );
        table.get(
            "/lol/static-data/v3/reforged-runes/*",
            "GET_getReforgedRuneById",
        );
        table.get("/lol/static-data/v3/runes", "GET_getRuneList");
        table.get("/lol/static-data/v3/runes/*", "GET_getRuneById");
        table.get(
            "/lol/static-data/v3/summoner-spells",
            "GET_getSummonerSpellList",
        );
        table.get(
            "/lol/static-data/v3/summoner-spells/*",
            "GET_getSummonerSpellById",
        );
        table.get(
            "/lol/static-data/v3/tarball-links",
            "GET_getTarballLinks",
        );
        table.get("/lol/static-data/v3/versions", "GET_getVersions");

        table
    }

    fn get(&mut self, pattern: &str, key: &str) {
        self.route(Some(Method::GET), pattern, key);
    }
}

/// Split a path into segments, tolerating leading and trailing slashes.
fn split_segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_and_wildcard() {
        let table = RouteTable::standard();

        assert_eq!(
            table.resolve(&Method::GET, "/lol/platform/v3/champions"),
            "GET_getAllChampions"
        );
        assert_eq!(
            table.resolve(&Method::GET, "/lol/platform/v3/champions/123"),
            "GET_getChampionById"
        );
    }

    #[test]
    fn test_resolve_nested_wildcards() {
        let table = RouteTable::standard();

        assert_eq!(
            table.resolve(
                &Method::GET,
                "/lol/champion-mastery/v3/champion-masteries/by-summoner/42"
            ),
            "GET_getAllChampionMasteries"
        );
        assert_eq!(
            table.resolve(
                &Method::GET,
                "/lol/champion-mastery/v3/champion-masteries/by-summoner/42/by-champion/7"
            ),
            "GET_getChampionMastery"
        );
    }

    #[test]
    fn test_resolve_distinguishes_http_method() {
        let table = RouteTable::standard();

        assert_eq!(
            table.resolve(&Method::PUT, "/lol/tournament/v3/codes/CODE123"),
            "PUT_updateCode"
        );
        assert_eq!(
            table.resolve(&Method::GET, "/lol/tournament/v3/codes/CODE123"),
            "GET_getTournamentCode"
        );
    }

    #[test]
    fn test_resolve_tournament_code_match_routes() {
        let table = RouteTable::standard();

        assert_eq!(
            table.resolve(
                &Method::GET,
                "/lol/match/v3/matches/by-tournament-code/CODE/ids"
            ),
            "GET_getMatchIdsByTournamentCode"
        );
        assert_eq!(
            table.resolve(
                &Method::GET,
                "/lol/match/v3/matches/100/by-tournament-code/CODE"
            ),
            "GET_getMatchByTournamentCode"
        );
    }

    #[test]
    fn test_unrecognized_path_falls_back_to_raw_path() {
        let table = RouteTable::standard();
        let path = "/lol/unmapped/v4/widgets/9";

        assert_eq!(table.resolve(&Method::GET, path), path);
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let table = RouteTable::standard();

        assert_eq!(
            table.resolve(&Method::GET, "/lol/match/v3/matchlists/by-account/42/recent/"),
            "GET_getRecentMatchlist"
        );
    }

    #[test]
    fn test_custom_route_registration() {
        let mut table = RouteTable::new();
        table.route(None, "/lol/custom/v1/things/*", "GET_getThing");

        assert_eq!(
            table.resolve(&Method::GET, "/lol/custom/v1/things/5"),
            "GET_getThing"
        );
        assert_eq!(
            table.resolve(&Method::POST, "/lol/custom/v1/things/5"),
            "GET_getThing"
        );
    }
}
