use std::rc::Rc;

use yew::prelude::*;

use super::error::FetchError;
use super::policy::{Backoff, RetryPolicy};

pub const PLACEHOLDER_MESSAGE: &str =
    "Tap the button to discover a fun fact about caring for our planet!";
pub const GENERATING_MESSAGE: &str = "Generating a fresh eco-fact for you...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FactStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FactAction {
    Start,
    Backoff(Backoff),
    Settle(Result<String, FetchError>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactRequestState {
    pub status: FactStatus,
    pub text: String,
    pub attempt: u32,
    max_attempts: u32,
}

impl Default for FactRequestState {
    fn default() -> Self {
        Self::new(RetryPolicy::default().max_attempts)
    }
}

impl FactRequestState {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            status: FactStatus::Idle,
            text: PLACEHOLDER_MESSAGE.to_string(),
            attempt: 0,
            max_attempts,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == FactStatus::InFlight
    }

    /// Applies one transition. Returns false when the action does not apply to
    /// the current status and the state is left untouched.
    pub fn apply(&mut self, action: FactAction) -> bool {
        match (self.status, action) {
            (FactStatus::InFlight, FactAction::Start) => false,
            (_, FactAction::Start) => {
                self.status = FactStatus::InFlight;
                self.attempt = 0;
                self.text = GENERATING_MESSAGE.to_string();
                true
            }
            (FactStatus::InFlight, FactAction::Backoff(backoff)) => {
                self.attempt = backoff.attempt.min(self.max_attempts);
                self.text = retrying_message(&backoff);
                true
            }
            (FactStatus::InFlight, FactAction::Settle(Ok(text))) => {
                self.status = FactStatus::Succeeded;
                self.text = text;
                true
            }
            (FactStatus::InFlight, FactAction::Settle(Err(err))) => {
                self.status = FactStatus::Failed;
                self.text = err.user_message().to_string();
                true
            }
            _ => false,
        }
    }
}

fn retrying_message(backoff: &Backoff) -> String {
    let secs = backoff.delay.as_secs().max(1);
    format!(
        "Lots of curious minds right now! Trying again in {} second{}...",
        secs,
        if secs == 1 { "" } else { "s" }
    )
}

impl Reducible for FactRequestState {
    type Action = FactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eco_fact::error::{COULD_NOT_GENERATE_MESSAGE, NETWORK_ERROR_MESSAGE};
    use crate::eco_fact::error::TransportError;
    use std::time::Duration;

    fn backoff(attempt: u32, millis: u64) -> FactAction {
        FactAction::Backoff(Backoff {
            attempt,
            delay: Duration::from_millis(millis),
        })
    }

    #[test]
    fn starts_idle_with_placeholder() {
        let state = FactRequestState::default();
        assert_eq!(state.status, FactStatus::Idle);
        assert_eq!(state.text, PLACEHOLDER_MESSAGE);
        assert_eq!(state.attempt, 0);
    }

    #[test]
    fn start_shows_generating_message() {
        let mut state = FactRequestState::default();
        assert!(state.apply(FactAction::Start));
        assert!(state.is_in_flight());
        assert_eq!(state.text, GENERATING_MESSAGE);
    }

    #[test]
    fn start_while_in_flight_is_a_no_op() {
        let mut state = FactRequestState::default();
        state.apply(FactAction::Start);
        state.apply(backoff(2, 2000));
        let before = state.clone();

        assert!(!state.apply(FactAction::Start));
        assert_eq!(state, before);
    }

    #[test]
    fn backoff_updates_attempt_and_keeps_text_non_empty() {
        let mut state = FactRequestState::default();
        state.apply(FactAction::Start);
        state.apply(backoff(1, 1000));
        assert_eq!(state.attempt, 1);
        assert_eq!(
            state.text,
            "Lots of curious minds right now! Trying again in 1 second..."
        );

        state.apply(backoff(3, 4000));
        assert_eq!(state.attempt, 3);
        assert!(state.text.contains("4 seconds"));
    }

    #[test]
    fn attempt_is_clamped_to_maximum() {
        let mut state = FactRequestState::new(5);
        state.apply(FactAction::Start);
        state.apply(backoff(9, 1000));
        assert_eq!(state.attempt, 5);
    }

    #[test]
    fn settle_maps_outcomes_to_display_text() {
        let mut ok = FactRequestState::default();
        ok.apply(FactAction::Start);
        ok.apply(FactAction::Settle(Ok("Trees clean the air.".to_string())));
        assert_eq!(ok.status, FactStatus::Succeeded);
        assert_eq!(ok.text, "Trees clean the air.");

        let mut malformed = FactRequestState::default();
        malformed.apply(FactAction::Start);
        malformed.apply(FactAction::Settle(Err(FetchError::MalformedResponse)));
        assert_eq!(malformed.status, FactStatus::Failed);
        assert_eq!(malformed.text, COULD_NOT_GENERATE_MESSAGE);

        let mut offline = FactRequestState::default();
        offline.apply(FactAction::Start);
        offline.apply(FactAction::Settle(Err(FetchError::Network(
            TransportError::NoResponse("offline".to_string()),
        ))));
        assert_eq!(offline.text, NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn events_outside_a_request_are_ignored() {
        let mut state = FactRequestState::default();
        assert!(!state.apply(backoff(1, 1000)));
        assert!(!state.apply(FactAction::Settle(Ok("late".to_string()))));
        assert_eq!(state, FactRequestState::default());
    }

    #[test]
    fn terminal_states_allow_a_fresh_request() {
        let mut state = FactRequestState::default();
        state.apply(FactAction::Start);
        state.apply(backoff(2, 2000));
        state.apply(FactAction::Settle(Err(FetchError::MalformedResponse)));
        assert_eq!(state.status, FactStatus::Failed);

        assert!(state.apply(FactAction::Start));
        assert_eq!(state.status, FactStatus::InFlight);
        assert_eq!(state.attempt, 0);
        assert_eq!(state.text, GENERATING_MESSAGE);
    }

    #[test]
    fn reducer_keeps_the_same_rc_for_ignored_actions() {
        let state = Rc::new(FactRequestState::default());
        let same = state.clone().reduce(FactAction::Settle(Ok("x".to_string())));
        assert!(Rc::ptr_eq(&state, &same));

        let started = state.reduce(FactAction::Start);
        assert_eq!(started.status, FactStatus::InFlight);
    }
}
