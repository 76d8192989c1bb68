use std::time::Duration;

use {
    reqwest::header::{self, HeaderMap},
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
    tracing::debug,
};

use leetscope_config::UpstreamConfig;

use crate::error::{Error, Result};

/// One relay invocation, as received from the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

/// Body forwarded upstream. `variables` defaults to `{}` and `operationName`
/// to `null`, matching what the LeetCode web client sends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamPayload<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
    operation_name: Option<&'a str>,
}

/// Stateless upstream client. One shared `reqwest::Client`, safe to call
/// from any number of tasks concurrently.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    url: String,
    headers: HeaderMap,
}

impl RelayClient {
    /// Build a client from config. The timeout is applied to every request;
    /// the header set is fixed for the lifetime of the client.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: config.url.clone(),
            headers: static_headers(config)?,
        })
    }

    /// Forward a GraphQL payload upstream and return the response body.
    ///
    /// The document text is a byte-for-byte pass-through. A GraphQL `errors`
    /// array inside a 2xx body is returned to the caller untouched.
    pub async fn forward(&self, request: &RelayRequest) -> Result<Value> {
        if request.query.is_empty() {
            return Err(Error::MissingQuery);
        }

        let empty = Map::new();
        let payload = UpstreamPayload {
            query: &request.query,
            variables: request.variables.as_ref().unwrap_or(&empty),
            operation_name: request.operation_name.as_deref(),
        };

        debug!(
            operation = payload.operation_name.unwrap_or("<anonymous>"),
            url = %self.url,
            "forwarding query upstream"
        );

        let response = self
            .http
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        // Raw text first: upstream error pages are not always JSON.
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "upstream response");

        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|_| Error::ParseResponse { body })
    }
}

/// The static browser-identifying header set from config. Content-Type is
/// added per-request by the JSON body builder.
fn static_headers(config: &UpstreamConfig) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, config.user_agent.parse()?);
    headers.insert(header::ORIGIN, config.origin.parse()?);
    headers.insert(header::REFERER, config.referer.parse()?);
    headers.insert(header::ACCEPT, config.accept.parse()?);
    headers.insert(header::ACCEPT_LANGUAGE, config.accept_language.parse()?);
    headers.insert("x-csrftoken", config.csrf_token.parse()?);
    Ok(headers)
}
