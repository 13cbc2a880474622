//! Per-slice fetch state and the generation-guarded single-fetch slot.

use serde::Serialize;

use crate::core::errors::LqoError;

/// Lifecycle of one independently fetched data slice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// `Ready` on success, `Failed` with the slice message otherwise.
    pub fn from_result(result: Result<T, LqoError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.slice_message()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Settled means a fetch completed, successfully or not.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> LoadState<U> {
        match self {
            Self::Idle => LoadState::Idle,
            Self::Loading => LoadState::Loading,
            Self::Ready(value) => LoadState::Ready(f(value)),
            Self::Failed(message) => LoadState::Failed(message.clone()),
        }
    }
}

/// Identifies one issued fetch for a [`SliceSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTicket(u64);

/// A slice fetched as a whole (no pagination). Only the latest issued
/// ticket may write its result.
#[derive(Debug, Clone)]
pub struct SliceSlot<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for SliceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SliceSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            state: LoadState::Idle,
        }
    }

    /// Move to `Loading` and issue a fresh ticket, superseding any in flight.
    pub fn begin(&mut self) -> SlotTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        SlotTicket(self.generation)
    }

    /// Apply a completion. Returns `false` when the ticket is stale.
    pub fn finish(&mut self, ticket: SlotTicket, result: Result<T, LqoError>) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale slice result"
            );
            return false;
        }
        self.state = LoadState::from_result(result);
        true
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> LqoError {
        LqoError::Api {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn from_result_maps_both_arms() {
        assert_eq!(LoadState::from_result(Ok(3)), LoadState::Ready(3));
        let failed: LoadState<u8> = LoadState::from_result(Err(api_error()));
        assert_eq!(failed.error(), Some("API Error: Internal Server Error"));
        assert!(failed.is_settled());
    }

    #[test]
    fn slot_applies_current_ticket() {
        let mut slot = SliceSlot::new();
        let ticket = slot.begin();
        assert!(slot.state().is_loading());
        assert!(slot.finish(ticket, Ok("data")));
        assert_eq!(slot.state().ready(), Some(&"data"));
    }

    #[test]
    fn slot_discards_superseded_ticket() {
        let mut slot = SliceSlot::new();
        let old = slot.begin();
        let new = slot.begin();
        assert!(!slot.finish(old, Ok(1)));
        assert!(slot.state().is_loading());
        assert!(slot.finish(new, Ok(2)));
        assert_eq!(slot.state().ready(), Some(&2));
    }

    #[test]
    fn slot_ignores_duplicate_completion() {
        let mut slot = SliceSlot::new();
        let ticket = slot.begin();
        assert!(slot.finish(ticket, Ok(1)));
        assert!(!slot.finish(ticket, Ok(9)));
        assert_eq!(slot.state().ready(), Some(&1));
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(LoadState::Ready(5)).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["value"], 5);
        let idle = serde_json::to_value(LoadState::<u8>::Idle).unwrap();
        assert_eq!(idle["state"], "idle");
    }
}
