use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::ApiError, schemas::Envelope};

pub struct RequestParams<'a, S: Serialize> {
    pub path: &'a str,
    pub method: Method,
    pub body: Option<S>,
}

/// Authenticated JSON client bound to one backend base URL.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request with bearer auth and decodes the response envelope.
    ///
    /// The envelope header is returned as-is; judging its status is up to the caller.
    pub async fn send<T>(
        &self,
        token: &str,
        request_params: &RequestParams<'_, impl Serialize>,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, request_params.path);
        tracing::debug!("{} {}", request_params.method, url);

        let mut request = self
            .client
            .request(request_params.method.clone(), &url)
            .bearer_auth(token);

        if let Some(body) = &request_params.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::debug!("Request failed: {e}"))?
            .error_for_status()
            .inspect_err(|e| tracing::debug!("Non-successful status code: {e}"))?;

        let text = response.text().await?;

        Ok(serde_json::from_str(&text)?)
    }
}
