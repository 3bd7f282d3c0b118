use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use log::{error, info, warn};

use super::envelope::{extract_text, GenerateContentRequest};
use super::error::{FetchError, TransportError};
use super::guard::InFlightGuard;
use super::policy::{Backoff, RetryPolicy};
use super::state::FactAction;

const TOO_MANY_REQUESTS: u16 = 429;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the generation request and hands back whatever came over the wire.
pub trait FactTransport {
    fn post<'a>(
        &'a self,
        request: &'a GenerateContentRequest,
    ) -> LocalBoxFuture<'a, Result<RawResponse, TransportError>>;
}

pub trait Sleeper {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}

impl<T: FactTransport + ?Sized> FactTransport for Rc<T> {
    fn post<'a>(
        &'a self,
        request: &'a GenerateContentRequest,
    ) -> LocalBoxFuture<'a, Result<RawResponse, TransportError>> {
        (**self).post(request)
    }
}

impl<S: Sleeper + ?Sized> Sleeper for Rc<S> {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        (**self).sleep(delay)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchReport {
    pub result: Result<String, FetchError>,
    /// Remote calls made, retries included.
    pub attempts: u32,
}

pub struct FactFetcher<T, S> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: FactTransport, S: Sleeper> FactFetcher<T, S> {
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// Requests one eco-fact, backing off on 429 until the attempt limit is
    /// reached. `on_backoff` fires before every wait.
    pub async fn fetch_with(&self, mut on_backoff: impl FnMut(Backoff)) -> FetchReport {
        let request = GenerateContentRequest::eco_fact();
        let limit = self.policy.attempt_limit();
        let mut retries = 0;
        let mut calls = 0;

        loop {
            calls += 1;
            let response = match self.transport.post(&request).await {
                Ok(response) => response,
                Err(err) => {
                    error!("Eco-fact request failed before a response arrived: {}", err);
                    return FetchReport {
                        result: Err(err.into()),
                        attempts: calls,
                    };
                }
            };

            if response.is_success() {
                let result = extract_text(&response.body);
                match &result {
                    Ok(_) => info!("Eco-fact generated after {} attempt(s)", calls),
                    Err(_) => error!("Eco-fact response had no generated text: {}", response.body),
                }
                return FetchReport {
                    result,
                    attempts: calls,
                };
            }

            if response.status != TOO_MANY_REQUESTS {
                error!(
                    "Eco-fact request failed with status {} {}: {}",
                    response.status, response.status_text, response.body
                );
                return FetchReport {
                    result: Err(FetchError::ServerError {
                        status: response.status,
                        reason: response.status_text,
                        body: response.body,
                    }),
                    attempts: calls,
                };
            }

            let delay = self.policy.backoff_for_attempt(retries);
            retries += 1;
            warn!(
                "Eco-fact request rate limited (attempt {}/{}), waiting {}ms",
                retries,
                limit,
                delay.as_millis()
            );
            on_backoff(Backoff {
                attempt: retries,
                delay,
            });
            self.sleeper.sleep(delay).await;

            if retries >= limit {
                error!("Eco-fact request still rate limited after {} attempts", calls);
                return FetchReport {
                    result: Err(FetchError::RateLimited { attempts: calls }),
                    attempts: calls,
                };
            }
        }
    }

    /// Runs one user-triggered request, feeding every transition to `dispatch`.
    /// Returns false without touching anything when a request is already
    /// outstanding on `guard`.
    pub async fn trigger(&self, guard: &InFlightGuard, dispatch: impl Fn(FactAction)) -> bool {
        let Some(_ticket) = guard.try_acquire() else {
            return false;
        };

        dispatch(FactAction::Start);
        let report = self
            .fetch_with(|backoff| dispatch(FactAction::Backoff(backoff)))
            .await;
        dispatch(FactAction::Settle(report.result));
        true
    }
}
