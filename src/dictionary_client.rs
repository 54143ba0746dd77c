use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};

/// The two shapes of delete URL the API is known to accept.
///
/// `Path` follows the written documentation, `PathAndQuery` is what the
/// interactive console generates. Both are expected to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAddress {
    Path,
    PathAndQuery,
}

#[derive(Clone, Debug)]
pub struct DictionaryClient {
    base_url: String,
    http_client: Client,
}

impl DictionaryClient {
    pub fn new(
        base_url: String,
        timeout: Option<std::time::Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Creating dictionary resource", skip(self, payload, authorization))]
    pub async fn create(
        &self,
        payload: &serde_json::Value,
        authorization: Option<&Secret<String>>,
    ) -> Result<Response, reqwest::Error> {
        let request = self.http_client.post(&self.base_url).json(payload);
        self.send(request, authorization).await
    }

    #[tracing::instrument(name = "Setting dictionary key", skip(self, payload, authorization))]
    pub async fn set_key(
        &self,
        id: &str,
        key: &str,
        payload: &serde_json::Value,
        authorization: Option<&Secret<String>>,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}/{}/keys/{}", self.base_url, id, key);
        let request = self
            .http_client
            .post(&url)
            .query(&[("id", id)])
            .json(payload);
        self.send(request, authorization).await
    }

    #[tracing::instrument(name = "Deleting dictionary resource", skip(self, authorization))]
    pub async fn delete(
        &self,
        id: &str,
        address: DeleteAddress,
        authorization: Option<&Secret<String>>,
    ) -> Result<Response, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, id);
        let mut request = self
            .http_client
            .delete(&url)
            .header(CONTENT_TYPE, "application/json");
        if address == DeleteAddress::PathAndQuery {
            request = request.query(&[("id", id)]);
        }
        self.send(request, authorization).await
    }

    async fn send(
        &self,
        request: RequestBuilder,
        authorization: Option<&Secret<String>>,
    ) -> Result<Response, reqwest::Error> {
        let request = match authorization {
            Some(credential) => request.header(AUTHORIZATION, credential.expose_secret()),
            None => request,
        };
        // Non-2xx statuses are part of the contract under test, so they are
        // handed back untouched instead of going through `error_for_status`.
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach the dictionary API: {:?}", e);
            e
        })?;
        tracing::debug!(status = %response.status(), "Received dictionary API response");
        Ok(response)
    }
}
