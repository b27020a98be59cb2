//! Transport abstraction
//!
//! A [`Transport`] moves one signed request over the wire and hands back the
//! raw response. It never interprets status codes; classification happens in
//! the client. Swapping the transport is how tests observe or fake traffic.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::{HttpRequest, Response};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::observability::RequestTimer;

/// Sends signed requests.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send one request and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] when no connection could be made,
    /// [`Error::Timeout`] when the attempt ran out of time, and
    /// [`Error::Network`] for failures after the request may have been sent.
    async fn send(&self, request: HttpRequest) -> Result<Response>;

    /// Transport name for debugging/logging.
    fn name(&self) -> &'static str;
}

/// The default transport, backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new builder for configuring the transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Build a transport from client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.connection_pool.max_idle_per_host)
            .pool_idle_timeout(config.connection_pool.idle_timeout)
            .tcp_keepalive(config.connection_pool.tcp_keepalive);

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(proxy.clone());
        }
        if let Some(suffix) = &config.user_agent_suffix {
            builder = builder.user_agent(format!("{} {suffix}", default_user_agent()));
        }

        builder.build()
    }

    fn map_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else if err.is_builder() {
            Error::HttpClient(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<Response> {
        let timer = RequestTimer::start();
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        let mut response = Response::new(status, headers, body);
        response.elapsed = timer.elapsed();
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

fn default_user_agent() -> String {
    format!("comprehend-rust/{}", crate::VERSION)
}

/// Builder for creating a [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
    user_agent: Option<String>,
    pool_max_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    tcp_keepalive: Option<Duration>,
}

impl ReqwestTransportBuilder {
    /// Set the overall timeout of one attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route all traffic through a proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Maximum idle connections kept per host.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    /// How long idle connections are kept.
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// TCP keep-alive interval, `None` to disable.
    pub fn tcp_keepalive(mut self, interval: Option<Duration>) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy URL is invalid or the HTTP client cannot be created.
    pub fn build(self) -> Result<ReqwestTransport> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(15));

        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(self.connect_timeout.unwrap_or(Duration::from_secs(15)))
            .user_agent(self.user_agent.unwrap_or_else(default_user_agent))
            .pool_idle_timeout(self.pool_idle_timeout)
            .tcp_keepalive(self.tcp_keepalive);

        if let Some(max) = self.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max);
        }

        if let Some(proxy) = self.proxy {
            let proxy = reqwest::Proxy::https(&proxy)
                .map_err(|e| Error::InvalidUrl(format!("Invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(ReqwestTransport { client, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = ReqwestTransport::builder().build().unwrap();
        assert_eq!(transport.name(), "reqwest");
        assert_eq!(transport.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            timeout: Duration::from_secs(3),
            proxy: Some("http://proxy.internal:3128".to_string()),
            user_agent_suffix: Some("app/1.0".to_string()),
            ..Default::default()
        };
        let transport = ReqwestTransport::from_config(&config).unwrap();
        assert_eq!(transport.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_proxy() {
        let result = ReqwestTransport::builder().proxy("::not a url::").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_connection_error() {
        // Port 1 on loopback is not listening in any sane test environment.
        let transport = ReqwestTransport::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let endpoint = url::Url::parse("http://127.0.0.1:1").unwrap();
        let request = super::super::RequestBuilder::operation(&endpoint, "ListEndpoints")
            .unwrap()
            .build();

        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)), "got {err:?}");
        assert!(err.is_network());
    }
}
