//! The "fact of the day" widget logic: one request to a remote
//! text-generation endpoint with exponential backoff on rate limiting, and the
//! small state record the page renders from.

pub mod envelope;
pub mod error;
pub mod fetcher;
pub mod guard;
pub mod policy;
pub mod state;
pub mod transport;

pub use guard::InFlightGuard;
pub use state::{FactRequestState, FactStatus};
pub use transport::WebFactFetcher;
