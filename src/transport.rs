//! HTTP transport for the YesCaptcha API.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use rquest::{Client, Proxy};
use serde_json::Value;

use crate::error::Result;

/// One request/response exchange against the API.
///
/// The client is written against this trait so the polling logic can be
/// exercised without a network; `HttpTransport` is the production
/// implementation. Retry policy does not live here - a transport error and
/// a "still processing" response must stay distinguishable for the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `path` and return the decoded response body.
    async fn request(&self, path: &str, body: &Value) -> Result<Value>;
}

/// Production transport over a shared `rquest` connection pool.
///
/// The pool is reused across requests, so repeated polls do not pay
/// connection setup again. The request timeout is applied per call.
pub(crate) struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub(crate) fn new(
        base_url: &str,
        timeout: Duration,
        proxy: Option<&str>,
        local_address: Option<IpAddr>,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(timeout);

        if let Some(addr) = local_address {
            builder = builder.local_address(addr);
        }

        if let Some(proxy_url) = proxy {
            builder = builder.proxy(Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new(
            "https://api.yescaptcha.com/",
            Duration::from_secs(30),
            None,
            None,
        )
        .unwrap();
        assert_eq!(transport.base_url, "https://api.yescaptcha.com");
    }
}
