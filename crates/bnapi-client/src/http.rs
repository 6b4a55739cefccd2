//! HTTP gateway for the Battle.net Game Data API
//!
//! [`BnapiClient`] owns the credential session and performs all outbound
//! traffic: the OAuth client-credentials POST and the namespaced, localized
//! GET requests the resource accessors delegate here.

use crate::session::TokenResponse;
use crate::{Error, Locale, Region, Result, Session};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime};
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

/// Fixed delay before the single retry after a 429 response
const RATE_LIMIT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Gateway client for the Battle.net Game Data API
///
/// Holds at most one session at a time; every successful
/// [`authenticate`](Self::authenticate) replaces it wholesale. Requests
/// borrow the client immutably, so callers may issue any number of them
/// concurrently from the same instance.
#[derive(Debug, Clone)]
pub struct BnapiClient {
    client: Client,
    session: Option<Session>,
    retry_delay: Duration,
    auth_url: Option<String>,
    api_url: Option<String>,
}

impl BnapiClient {
    /// Create a new client with the default HTTP configuration
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Create a new client with a custom reqwest client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            session: None,
            retry_delay: RATE_LIMIT_RETRY_DELAY,
            auth_url: None,
            api_url: None,
        }
    }

    /// Set the delay before the single rate-limit retry
    ///
    /// Default is 5 seconds. The retry budget itself is fixed at one attempt.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Override the OAuth token endpoint URL
    ///
    /// If not set, the endpoint is resolved from the region passed to
    /// [`authenticate`](Self::authenticate).
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = Some(auth_url.into());
        self
    }

    /// Override the Game Data API base URL
    ///
    /// If not set, the base is resolved from the active session's region.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// The active session, if `authenticate` has succeeded
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Obtain an access token via the OAuth client-credentials grant
    ///
    /// On success the stored session is replaced with one carrying the new
    /// token, `region`, `locale`, and the server-declared expiry converted to
    /// an absolute deadline. On any failure the prior session (if any) is
    /// left untouched. Authentication failures are never retried.
    pub async fn authenticate(
        &mut self,
        client_key: &str,
        client_secret: &str,
        region: Region,
        locale: Locale,
    ) -> Result<()> {
        let url = self
            .auth_url
            .clone()
            .unwrap_or_else(|| region.token_url());

        debug!("Requesting access token from {url}");

        let response = self
            .client
            .post(&url)
            .basic_auth(client_key, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Authentication failed: {status}");
            return Err(Error::AuthenticationFailed { status });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        self.session = Some(Session::new(region, locale, token, SystemTime::now()));
        debug!("Authentication successful for region {region}");

        Ok(())
    }

    /// Build a fully-qualified request URL for a service path
    ///
    /// Caller parameters are appended percent-encoded in slice order; a
    /// `namespace` value is suffixed with `-{region}` first. The session's
    /// `locale` and `access_token` are always appended last.
    pub fn build_url(&self, service: &str, params: &[(&str, &str)]) -> Result<Url> {
        let session = self.session.as_ref().ok_or(Error::NotAuthenticated)?;
        let base = self
            .api_url
            .clone()
            .unwrap_or_else(|| session.region().api_url());

        let mut url = Url::parse(&join_base(&base, service))?;

        {
            let mut query = url.query_pairs_mut();
            for &(key, value) in params {
                if key == "namespace" {
                    query.append_pair(key, &format!("{value}-{}", session.region()));
                } else {
                    query.append_pair(key, value);
                }
            }
            query.append_pair("locale", session.locale().as_str());
            query.append_pair("access_token", session.token());
        }

        Ok(url)
    }

    /// Fetch a Game Data endpoint and return its parsed JSON body
    ///
    /// This is the entry point the typed resource accessors call: they
    /// supply the service path and query parameters, the gateway supplies
    /// namespace scoping, localization, the token, and the rate-limit retry.
    pub async fn get(&self, service: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = self.build_url(service, params)?;
        self.request(url, true).await
    }

    /// Fetch a Game Data endpoint and deserialize its body into `T`
    ///
    /// Shape mismatches surface as [`Error::Json`] rather than panicking on
    /// missing fields downstream.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        service: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let value = self.get(service, params).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Perform a GET against a fully-built URL, retrying once on 429
    ///
    /// The retried attempt runs with the retry disabled, so at most two
    /// requests are ever issued per logical call. Any other non-success
    /// status, and a 429 on the retried attempt, is terminal.
    pub async fn request(
        &self,
        url: Url,
        mut retry_on_rate_limit: bool,
    ) -> Result<serde_json::Value> {
        loop {
            debug!("GET {url}");

            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();

            if status.is_success() {
                let body = response.text().await?;
                return Ok(serde_json::from_str(&body)?);
            }

            warn!("Request failed: {status} {url}");

            if status != StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::HttpStatus(status));
            }
            if !retry_on_rate_limit {
                return Err(Error::RateLimited);
            }

            debug!("Rate limited, retrying in {:?}", self.retry_delay);
            sleep(self.retry_delay).await;
            retry_on_rate_limit = false;
        }
    }
}

/// Join an API base URL and a service path with exactly one slash
fn join_base(base: &str, service: &str) -> String {
    match (base.ends_with('/'), service.starts_with('/')) {
        (true, true) => format!("{base}{}", &service[1..]),
        (true, false) | (false, true) => format!("{base}{service}"),
        (false, false) => format!("{base}/{service}"),
    }
}
