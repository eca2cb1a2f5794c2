//! HTTP client for the external availability backend.

use std::time::Duration;

use lexbook_core::config::BackendConfig;
use lexbook_core::constants::{BACKEND_BRANCHES_PATH, BACKEND_EXCEPTIONS_PATH, BACKEND_WEEKLY_PATH};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{AvailabilityException, Branch, Listing, NewException, WeeklySlotRequest};
use crate::error::{ServiceError, ServiceResult};

/// Thin wrapper over the backend's availability endpoints.
#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl AvailabilityClient {
    /// ## Summary
    /// Creates a client rooted at `base_url`. A trailing slash is ignored.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidUrl` if `base_url` is not an absolute URL,
    /// or `ServiceError::HttpError` if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> ServiceResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| ServiceError::InvalidUrl(format!("{base_url}: {err}")))?;

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// ## Summary
    /// Creates a client from the `backend` settings section.
    ///
    /// ## Errors
    /// See [`AvailabilityClient::new`].
    pub fn from_config(config: &BackendConfig) -> ServiceResult<Self> {
        Self::new(
            &config.base_url,
            config.token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a copy of this client that authenticates with `token` instead.
    #[must_use]
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            ..self.clone()
        }
    }

    fn url(&self, path: &str) -> ServiceResult<Url> {
        let raw = format!("{}{path}", self.base_url);
        Url::parse(&raw).map_err(|err| ServiceError::InvalidUrl(format!("{raw}: {err}")))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ServiceResult<T> {
        let response = self.authorize(builder).send().await?;
        if !response.status().is_success() {
            return Err(backend_failure(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> ServiceResult<()> {
        let response = self.authorize(builder).send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(backend_failure(response).await)
    }

    /// ## Summary
    /// `POST /api/lawyer-availability/weekly?lawyer_user_id={id}`
    ///
    /// Returns the backend's JSON response unchanged.
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` on a non-2xx response and
    /// `ServiceError::HttpError` on transport or decoding failures.
    #[tracing::instrument(skip(self, request), fields(day = %request.day_of_week))]
    pub async fn create_weekly_slot(
        &self,
        lawyer_user_id: i64,
        request: &WeeklySlotRequest,
    ) -> ServiceResult<Value> {
        let mut url = self.url(BACKEND_WEEKLY_PATH)?;
        url.query_pairs_mut()
            .append_pair("lawyer_user_id", &lawyer_user_id.to_string());

        tracing::debug!(%url, "Creating weekly availability slot");
        self.send_json(self.http.post(url).json(request)).await
    }

    /// ## Summary
    /// `GET /api/lawyer-availability/branches`
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` on a non-2xx response and
    /// `ServiceError::HttpError` on transport or decoding failures.
    #[tracing::instrument(skip(self))]
    pub async fn list_branches(&self) -> ServiceResult<Vec<Branch>> {
        let url = self.url(BACKEND_BRANCHES_PATH)?;
        let listing: Listing<Branch> = self.send_json(self.http.get(url)).await?;
        Ok(listing.into_vec())
    }

    /// ## Summary
    /// `GET /availability/exceptions`
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` on a non-2xx response and
    /// `ServiceError::HttpError` on transport or decoding failures.
    #[tracing::instrument(skip(self))]
    pub async fn list_exceptions(&self) -> ServiceResult<Vec<AvailabilityException>> {
        let url = self.url(BACKEND_EXCEPTIONS_PATH)?;
        let listing: Listing<AvailabilityException> = self.send_json(self.http.get(url)).await?;
        Ok(listing.into_vec())
    }

    /// ## Summary
    /// `POST /availability/exceptions`
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` on a non-2xx response and
    /// `ServiceError::HttpError` on transport or decoding failures.
    #[tracing::instrument(skip(self, exception), fields(date = %exception.date))]
    pub async fn create_exception(&self, exception: &NewException) -> ServiceResult<Value> {
        let url = self.url(BACKEND_EXCEPTIONS_PATH)?;
        self.send_json(self.http.post(url).json(exception)).await
    }

    /// ## Summary
    /// `DELETE /availability/exceptions/{id}`
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` on a non-2xx response and
    /// `ServiceError::HttpError` on transport failures.
    #[tracing::instrument(skip(self))]
    pub async fn delete_exception(&self, id: i64) -> ServiceResult<()> {
        let url = self.url(&format!("{BACKEND_EXCEPTIONS_PATH}/{id}"))?;
        self.send_empty(self.http.delete(url)).await
    }
}

/// Turns a non-2xx response into `ServiceError::Backend`, keeping its body
/// when it can be read.
async fn backend_failure(response: Response) -> ServiceError {
    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(status, error = %err, "Failed to read backend error body");
            String::new()
        }
    };
    tracing::warn!(status, body = %body, "Backend request failed");
    ServiceError::Backend { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = AvailabilityClient::new("http://backend.test/", None, Duration::from_secs(1))
            .expect("valid url");
        assert_eq!(client.base_url(), "http://backend.test");
        assert_eq!(
            client.url(BACKEND_BRANCHES_PATH).expect("joined").as_str(),
            "http://backend.test/api/lawyer-availability/branches"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let client = AvailabilityClient::new("https://portal.test/v2", None, Duration::from_secs(1))
            .expect("valid url");
        assert_eq!(
            client.url(BACKEND_EXCEPTIONS_PATH).expect("joined").as_str(),
            "https://portal.test/v2/availability/exceptions"
        );
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = AvailabilityClient::new("backend.test", None, Duration::from_secs(1))
            .expect_err("relative url must fail");
        assert!(matches!(err, ServiceError::InvalidUrl(_)));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = AvailabilityClient::new("http://backend.test", Some(String::new()), Duration::from_secs(1))
            .expect("valid url");
        assert!(client.token.is_none());
        assert_eq!(client.with_token(Some("abc".to_string())).token.as_deref(), Some("abc"));
    }
}
