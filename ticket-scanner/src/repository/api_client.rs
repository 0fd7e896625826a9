use crate::repository::Error;
use jwt_session::Session;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;

pub struct ApiClientConfig {
    /// For example `https://api.example.com/api/v1`
    pub base_url: String,
    pub timeout: Duration,
}

///
/// HTTP client of the backend REST API.
///
/// Every request is authenticated with the access token of the [Session].
/// Expired or rejected access token is refreshed once per request
/// when session holds a refresh token.
///
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Arc<Session>,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
    refresh: Option<String>,
}

impl ApiClient {
    ///
    /// ### Errors
    /// - [Error::InvalidBaseUrl] when base url cannot be parsed or cannot have a path
    /// - [Error::Request] when HTTP client cannot be built
    ///
    pub fn new(config: ApiClientConfig, session: Arc<Session>) -> Result<Self, Error> {
        let base_url =
            Url::parse(&config.base_url).map_err(|err| Error::InvalidBaseUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(format!(
                "{base_url} cannot be a base"
            )));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    ///
    /// Fetches JSON resource located at `segments` relative to the base url.
    /// Segments are percent-encoded, trailing slash is appended.
    ///
    /// ### Errors
    /// - [Error::InvalidPathSegment] when segment is `.` or `..`
    /// - [Error::Unauthorized] when backend rejects the session
    /// - [Error::Api] when backend responds with any other non-success status
    /// - [Error::Request] on network failure or malformed response body
    ///
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.endpoint(segments)?;

        let mut refreshed = false;
        let now = OffsetDateTime::now_utc().unix_timestamp();
        if self.session.access_token_expired(now).await
            && self.session.refresh_token().await.is_some()
        {
            tracing::debug!("access token expired");
            self.refresh_access_token().await?;
            refreshed = true;
        }

        let mut response = self.send_get(url.clone()).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !refreshed {
            tracing::debug!("access token rejected");
            self.refresh_access_token().await?;
            response = self.send_get(url).await?;
        }

        Self::parse_response(response).await
    }

    ///
    /// Dot segments are rejected, url would silently drop them
    /// and point at a different resource.
    ///
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(segment) = segments
            .iter()
            .find(|segment| **segment == "." || **segment == "..")
        {
            return Err(Error::InvalidPathSegment(segment.to_string()));
        }

        let mut url = self.base_url.clone();

        // Always Ok, base url was checked in constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }

        Ok(url)
    }

    async fn send_get(&self, url: Url) -> Result<Response, Error> {
        tracing::debug!(path = url.path(), "GET");

        let access_token = self.session.access_token().await;
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "response received");

        Ok(response)
    }

    async fn refresh_access_token(&self) -> Result<(), Error> {
        let refresh_token = self
            .session
            .refresh_token()
            .await
            .ok_or(Error::Unauthorized)?;

        tracing::info!("refreshing access token");
        let response = self
            .client
            .post(self.endpoint(&["auth", "refresh"])?)
            .json(&RefreshRequest {
                refresh: &refresh_token,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "access token refresh rejected");
            return Err(Error::Unauthorized);
        }

        let RefreshResponse { access, refresh } = response.json().await?;
        self.session.replace_tokens(access, refresh).await;
        tracing::info!("access token refreshed");

        Ok(())
    }

    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(Self::error_message);
            return Err(Error::Api { status, message });
        }

        Ok(response.json::<T>().await?)
    }

    ///
    /// Views put explanation into `error`, framework errors
    /// (not found, permission denied) into `detail`
    ///
    fn error_message(body: Value) -> Option<String> {
        ["error", "detail"]
            .into_iter()
            .find_map(|key| body.get(key).and_then(Value::as_str))
            .map(str::to_string)
    }
}
