use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::envelope::GenerateContentRequest;
use super::error::TransportError;
use super::fetcher::{FactFetcher, FactTransport, RawResponse, Sleeper};
use super::policy::RetryPolicy;
use crate::config;

/// Browser `fetch` through gloo-net.
pub struct GlooTransport {
    url: String,
}

impl GlooTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FactTransport for GlooTransport {
    fn post<'a>(
        &'a self,
        request: &'a GenerateContentRequest,
    ) -> LocalBoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let response = Request::post(&self.url)
                .json(request)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::NoResponse(e.to_string()))?;

            let status = response.status();
            let status_text = response.status_text();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;

            Ok(RawResponse {
                status,
                status_text,
                body,
            })
        })
    }
}

pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

pub type WebFactFetcher = FactFetcher<GlooTransport, GlooSleeper>;

impl WebFactFetcher {
    pub fn from_config() -> Self {
        FactFetcher::new(
            GlooTransport::new(config::get_fact_endpoint()),
            GlooSleeper,
            RetryPolicy::default(),
        )
    }
}
