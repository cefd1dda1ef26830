//! Client construction and the request dispatcher.
//!
//! [`Client`] owns the HTTP transport and the shared rate limit registry.
//! One dispatcher method, [`Client::execute`], carries every request through
//! the same lifecycle: admission check, network exchange, registry update
//! from response headers, then status handling and body decoding. The
//! endpoint modules under [`crate::api`] are thin wrappers over it.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::api::{
    ChampionApi, ChampionMasteryApi, LeagueApi, MatchApi, SpectatorApi, StaticDataApi, StatusApi,
    SummonerApi, ThirdPartyCodeApi, TournamentApi, TournamentStubApi,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::ratelimit::{
    admit, parse_rate_headers, Admission, Advisory, LimitRegistry, Rate, RouteTable, APP_RATE_KEY,
    HEADER_API_KEY,
};

/// A decoded API response.
///
/// Carries the HTTP status and headers alongside the decoded value so
/// callers can inspect the raw exchange when they need to.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Response headers, including the rate limit set
    pub headers: HeaderMap,
    /// The decoded body; the type's default value when the body was empty
    pub data: T,
}

/// Client for the Riot API.
///
/// Cheap to clone: clones share the HTTP connection pool and the rate limit
/// registry, so concurrent callers benefit from each other's observed quota
/// state.
#[derive(Debug, Clone)]
pub struct Client {
    /// Underlying HTTP transport
    http: reqwest::Client,
    /// Base URL every endpoint path is resolved against; ends with `/`
    base_url: Url,
    /// API key attached to every request
    api_key: String,
    /// Path -> operation key lookup table
    routes: Arc<RouteTable>,
    /// Most recently observed quota state per operation key
    limits: Arc<LimitRegistry>,
    /// Most recent advisory throttling hints, if any response carried them
    advisory: Arc<Mutex<Option<Advisory>>>,
}

impl Client {
    /// Create a client for the default region with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        ClientBuilder {
            config,
            routes: RouteTable::standard(),
        }
        .build()
    }

    /// Start building a client with non-default options.
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            config: ClientConfig::default(),
            routes: RouteTable::standard(),
        }
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The most recently observed rate state for an operation key.
    pub fn rate(&self, key: &str) -> Rate {
        self.limits.get(key)
    }

    /// The most recently observed application-wide rate state.
    pub fn app_rate(&self) -> Rate {
        self.limits.get(APP_RATE_KEY)
    }

    /// The most recent advisory throttling hints, if any response carried
    /// them. Exposed for caller-built backoff; the client never acts on
    /// these itself.
    pub fn last_advisory(&self) -> Option<Advisory> {
        *self.advisory.lock()
    }

    // API sections.

    /// Champion-V3 endpoints.
    pub fn champion(&self) -> ChampionApi<'_> {
        ChampionApi::new(self)
    }

    /// Champion-Mastery-V3 endpoints.
    pub fn champion_mastery(&self) -> ChampionMasteryApi<'_> {
        ChampionMasteryApi::new(self)
    }

    /// League-V3 endpoints.
    pub fn league(&self) -> LeagueApi<'_> {
        LeagueApi::new(self)
    }

    /// Match-V3 endpoints.
    pub fn matches(&self) -> MatchApi<'_> {
        MatchApi::new(self)
    }

    /// Spectator-V3 endpoints.
    pub fn spectator(&self) -> SpectatorApi<'_> {
        SpectatorApi::new(self)
    }

    /// Static-Data-V3 endpoints.
    pub fn static_data(&self) -> StaticDataApi<'_> {
        StaticDataApi::new(self)
    }

    /// LOL-Status-V3 endpoints.
    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(self)
    }

    /// Summoner-V3 endpoints.
    pub fn summoner(&self) -> SummonerApi<'_> {
        SummonerApi::new(self)
    }

    /// Third-Party-Code-V3 endpoints.
    pub fn third_party_code(&self) -> ThirdPartyCodeApi<'_> {
        ThirdPartyCodeApi::new(self)
    }

    /// Tournament-V3 endpoints.
    pub fn tournament(&self) -> TournamentApi<'_> {
        TournamentApi::new(self)
    }

    /// Tournament-Stub-V3 endpoints.
    pub fn tournament_stub(&self) -> TournamentStubApi<'_> {
        TournamentStubApi::new(self)
    }

    // Request plumbing used by the endpoint modules.

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Url(e.to_string()))?;

        Ok(self
            .http
            .request(method, url)
            .header(HEADER_API_KEY, self.api_key.as_str()))
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.request(Method::GET, path)?.build()?;
        self.execute(request).await
    }

    pub(crate) async fn get_query<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.request(Method::GET, path)?.query(query).build()?;
        self.execute(request).await
    }

    pub(crate) async fn post<T, B>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self
            .request(Method::POST, path)?
            .query(query)
            .json(body)
            .build()?;
        self.execute(request).await
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse<()>>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path)?.json(body).build()?;
        self.execute(request).await
    }

    /// Send one request through the full dispatch lifecycle.
    ///
    /// The admission check runs before any network traffic; a denial is a
    /// local, zero-cost [`Error::QuotaExceeded`]. Once a response arrives
    /// its rate headers are recorded unconditionally, success or not, since
    /// they reflect server-side truth either way. Transport failures leave
    /// the registry untouched.
    pub(crate) async fn execute<T>(&self, request: reqwest::Request) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let method_key = self.routes.resolve(request.method(), request.url().path());

        if let Admission::Denied {
            window_secs,
            used,
            allowed,
        } = admit(&self.limits, &method_key)
        {
            return Err(Error::QuotaExceeded {
                key: method_key,
                window_secs,
                used,
                allowed,
            });
        }

        trace!(
            method = %request.method(),
            url = %request.url(),
            key = %method_key,
            "Sending request"
        );

        let response = self.http.execute(request).await?;

        let rate_headers = parse_rate_headers(response.headers());
        self.limits
            .record(rate_headers.app, &method_key, rate_headers.method);
        if let Some(advisory) = rate_headers.advisory {
            *self.advisory.lock() = Some(advisory);
        }

        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            debug!(%status, key = %method_key, "API returned error status");
            return Err(Error::Status { status });
        }

        let body = response.bytes().await?;
        let data = if body.is_empty() {
            // An empty body on a successful call is not an error; decode to
            // the target's zero value.
            T::default()
        } else {
            serde_json::from_slice(&body)?
        };

        Ok(ApiResponse {
            status,
            headers,
            data,
        })
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
    routes: RouteTable,
}

impl ClientBuilder {
    /// Set the Riot API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Set the platform region (e.g. `euw1`). Ignored when a full base URL
    /// override is set.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Override the base URL entirely. Must end with a trailing slash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Register an extra route pattern for operation key resolution. `*`
    /// matches one path segment; `None` for the method matches any method.
    pub fn route(mut self, method: Option<Method>, pattern: &str, key: &str) -> Self {
        self.routes.route(method, pattern, key);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let base = match &self.config.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}.api.riotgames.com/", self.config.region),
        };

        // Relative endpoint paths only resolve under the base when it ends
        // with a slash; catch the misconfiguration here rather than on the
        // first request.
        if !base.ends_with('/') {
            return Err(Error::Config(format!(
                "base URL must end with a trailing slash: {}",
                base
            )));
        }

        let base_url = Url::parse(&base).map_err(|e| Error::Url(e.to_string()))?;

        let mut http = reqwest::Client::builder();
        if let Some(secs) = self.config.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        let http = http.build()?;

        Ok(Client {
            http,
            base_url,
            api_key: self.config.api_key,
            routes: Arc::new(self.routes),
            limits: Arc::new(LimitRegistry::new()),
            advisory: Arc::new(Mutex::new(None)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_uses_region() {
        let client = Client::new("RGAPI-test").unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://na1.api.riotgames.com/"
        );

        let client = Client::builder()
            .api_key("RGAPI-test")
            .region("euw1")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://euw1.api.riotgames.com/"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = Client::builder()
            .base_url("http://127.0.0.1:9999/test/")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9999/test/");
    }

    #[test]
    fn test_base_url_without_trailing_slash_rejected() {
        let result = Client::builder()
            .base_url("http://127.0.0.1:9999/test")
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_key: "RGAPI-test".to_string(),
            region: "kr".to_string(),
            ..ClientConfig::default()
        };

        let client = Client::from_config(config).unwrap();
        assert_eq!(client.base_url().as_str(), "https://kr.api.riotgames.com/");
    }

    #[test]
    fn test_registry_starts_empty() {
        let client = Client::new("RGAPI-test").unwrap();

        assert!(client.app_rate().is_empty());
        assert!(client.rate("GET_getAllChampions").is_empty());
        assert!(client.last_advisory().is_none());
    }
}
